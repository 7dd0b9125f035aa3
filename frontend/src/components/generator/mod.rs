//! Portfolio generator: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `GeneratorProps`, `PortfolioGenerator`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::GeneratorProps;
pub use state::PortfolioGenerator;

impl Component for PortfolioGenerator {
    type Message = Msg;
    type Properties = GeneratorProps;

    fn create(ctx: &Context<Self>) -> Self {
        PortfolioGenerator::new(ctx.props().initial_template.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
