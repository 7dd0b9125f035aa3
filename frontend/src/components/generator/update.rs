//! Update function for the portfolio generator component.
//!
//! Elm-style: receives the current `PortfolioGenerator` state, the `Context`,
//! and a `Msg`, mutates the state through the `Portfolio` container, and
//! returns a `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Field edits flow straight into the `Portfolio`; every keystroke
//!   re-renders the preview.
//! - Project ids come from the wall clock in milliseconds.
//! - `Generate` builds the snapshot, writes it to the storage sink, then
//!   applies the template recommendation to the live selection. The written
//!   snapshot keeps the key that was selected when the button was pressed.

use js_sys::Date;
use yew::prelude::*;

use crate::storage;

use super::helpers::{portfolio_digest, show_toast};
use super::messages::Msg;
use super::state::PortfolioGenerator;

pub fn update(
    component: &mut PortfolioGenerator,
    _ctx: &Context<PortfolioGenerator>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::UpdateProfile(field, value) => {
            component.portfolio.set_profile_field(field, value);
            true
        }
        Msg::AddProject => {
            component.portfolio.add_project(Date::now() as i64);
            true
        }
        Msg::UpdateProject(id, field, value) => {
            component.portfolio.update_project(id, field, value);
            true
        }
        Msg::SelectTemplate(key) => {
            component.portfolio.select_template(key);
            true
        }
        Msg::Generate => {
            let generated_at = Date::new_0()
                .to_iso_string()
                .as_string()
                .unwrap_or_default();
            let snapshot = component.portfolio.snapshot(generated_at);

            match storage::save_snapshot(&snapshot) {
                Ok(()) => {
                    component.saved_md5 = Some(portfolio_digest(&component.portfolio));
                    show_toast("Portafolio guardado correctamente.");
                }
                Err(err) => {
                    // A failed write is recoverable; the form keeps working.
                    gloo_console::error!("no se pudo guardar el portafolio:", err.clone());
                    show_toast(&format!("Error al guardar el portafolio: {}", err));
                }
            }

            // The recommendation runs after the write, so the stored snapshot
            // keeps the pre-recommendation template key.
            component.portfolio.apply_recommendation();
            true
        }
    }
}
