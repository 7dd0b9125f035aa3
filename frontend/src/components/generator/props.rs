//! Defines the properties for the `PortfolioGenerator` component.

use yew::prelude::*;

/// Properties for the `PortfolioGenerator`.
#[derive(Properties, PartialEq, Clone)]
pub struct GeneratorProps {
    /// Optional template key to preselect when the component mounts.
    ///
    /// When absent the component starts on the default template. The key is
    /// not validated here; the preview resolves unknown keys to the default
    /// definition, so a bad value degrades instead of failing.
    #[prop_or_default]
    pub initial_template: Option<String>,
}
