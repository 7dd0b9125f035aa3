//! Component state for the portfolio generator.

use common::model::portfolio::Portfolio;

use super::helpers::portfolio_digest;

/// Main state container for the `PortfolioGenerator` component.
///
/// Holds the edited `Portfolio` (profile, projects, selected template), the
/// active UI tab, and the digest of the last written snapshot used for dirty
/// tracking.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct PortfolioGenerator {
    /// Single source of truth for everything the form edits.
    pub portfolio: Portfolio,

    /// Active tab: either `"editor"` or `"preview"`.
    pub active_tab: String,

    /// MD5 of the state persisted by the last successful Generate.
    /// `None` until the first snapshot is written.
    pub saved_md5: Option<String>,
}

impl PortfolioGenerator {
    pub fn new(initial_template: Option<String>) -> Self {
        let mut portfolio = Portfolio::default();
        if let Some(key) = initial_template {
            portfolio.select_template(key);
        }

        Self {
            portfolio,
            active_tab: "editor".to_string(),
            saved_md5: None,
        }
    }

    /// Whether the live state has drifted from the last written snapshot.
    /// Always `false` before the first Generate.
    pub fn is_dirty(&self) -> bool {
        self.saved_md5
            .as_ref()
            .map_or(false, |saved| saved != &portfolio_digest(&self.portfolio))
    }
}
