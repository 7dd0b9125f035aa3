//! State container for the generator.
//!
//! `Portfolio` is the single source of truth for everything the form edits:
//! the profile record, the ordered project list and the selected template
//! key. The UI layer forwards its messages here and does the side effects
//! (persistence, toasts) itself, so every transition below stays pure and
//! testable off the browser.

use crate::model::profile::{ProfileData, ProfileField};
use crate::model::project::{next_project_id, Project, ProjectField};
use crate::model::snapshot::Snapshot;
use crate::model::template::{recommend, DEFAULT_TEMPLATE};

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub profile: ProfileData,
    pub projects: Vec<Project>,
    pub selected_template: String,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: ProfileData::default(),
            projects: Vec::new(),
            selected_template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Portfolio {
    pub fn set_profile_field(&mut self, field: ProfileField, value: String) {
        self.profile.set(field, value);
    }

    /// Appends a project with empty fields and a fresh id. No upper bound on
    /// the project count; there is no remove operation.
    pub fn add_project(&mut self, now_ms: i64) {
        let id = next_project_id(&self.projects, now_ms);
        self.projects.push(Project::new(id));
    }

    /// Single-field update by project id. Unknown ids leave the list exactly
    /// as it was; order is preserved in both cases.
    pub fn update_project(&mut self, id: i64, field: ProjectField, value: String) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            project.set(field, value);
        }
    }

    /// Unconditional assignment. The key is not checked against the catalog;
    /// the preview resolves unknown keys to the default definition.
    pub fn select_template(&mut self, key: String) {
        self.selected_template = key;
    }

    /// Builds the record to persist from the current state. The `template`
    /// field carries the key selected at this moment; the recommendation that
    /// follows a Generate never rewrites an already-written snapshot.
    pub fn snapshot(&self, generated_at: String) -> Snapshot {
        Snapshot {
            profile: self.profile.clone(),
            projects: self.projects.clone(),
            template: self.selected_template.clone(),
            generated_at,
        }
    }

    /// Adopts the recommended template for the live view. Only the template
    /// key is applied; the recommended colors are computed and dropped.
    pub fn apply_recommendation(&mut self) {
        self.selected_template = recommend(&self.profile).template.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_default_template() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.selected_template, "modern");
        assert!(portfolio.projects.is_empty());
    }

    #[test]
    fn add_project_appends_one_empty_entry() {
        let mut portfolio = Portfolio::default();
        portfolio.add_project(1_000);
        portfolio.add_project(1_000);

        assert_eq!(portfolio.projects.len(), 2);
        let ids: Vec<i64> = portfolio.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1_000, 1_001]);
        for project in &portfolio.projects {
            assert_eq!(project.title, "");
            assert_eq!(project.description, "");
            assert_eq!(project.link, "");
        }
    }

    #[test]
    fn update_project_touches_one_field_of_one_project() {
        let mut portfolio = Portfolio::default();
        portfolio.add_project(1_000);
        portfolio.add_project(2_000);

        portfolio.update_project(2_000, ProjectField::Title, "X".to_string());

        assert_eq!(portfolio.projects[0].title, "");
        assert_eq!(portfolio.projects[1].title, "X");
        assert_eq!(portfolio.projects[1].description, "");
    }

    #[test]
    fn update_project_with_unknown_id_is_a_silent_no_op() {
        let mut portfolio = Portfolio::default();
        portfolio.add_project(1_000);
        let before = portfolio.projects.clone();

        portfolio.update_project(9_999, ProjectField::Title, "X".to_string());

        assert_eq!(portfolio.projects, before);
    }

    #[test]
    fn select_template_accepts_unknown_keys() {
        let mut portfolio = Portfolio::default();
        portfolio.select_template("vaporwave".to_string());
        assert_eq!(portfolio.selected_template, "vaporwave");
    }

    #[test]
    fn snapshot_carries_the_pre_recommendation_key() {
        let mut portfolio = Portfolio::default();
        portfolio.set_profile_field(ProfileField::Title, "UX Designer".to_string());
        portfolio.select_template("classic".to_string());

        let snapshot = portfolio.snapshot("2026-08-07T12:00:00.000Z".to_string());
        portfolio.apply_recommendation();

        // Persisted record keeps what was selected; only the live view moves.
        assert_eq!(snapshot.template, "classic");
        assert_eq!(portfolio.selected_template, "creative");
    }

    #[test]
    fn snapshot_deep_copies_the_project_list() {
        let mut portfolio = Portfolio::default();
        portfolio.add_project(1_000);
        portfolio.update_project(1_000, ProjectField::Link, "https://x.test".to_string());

        let snapshot = portfolio.snapshot("2026-08-07T12:00:00.000Z".to_string());

        assert_eq!(snapshot.projects, portfolio.projects);
        assert_eq!(snapshot.generated_at, "2026-08-07T12:00:00.000Z");
    }

    #[test]
    fn generate_scenario_end_to_end() {
        let mut portfolio = Portfolio::default();
        portfolio.set_profile_field(ProfileField::Title, "UX Designer".to_string());
        portfolio.add_project(1_000);
        portfolio.add_project(1_500);
        let second_id = portfolio.projects[1].id;
        portfolio.update_project(second_id, ProjectField::Link, "https://x.test".to_string());
        portfolio.select_template("classic".to_string());

        let snapshot = portfolio.snapshot("2026-08-07T12:34:56.789Z".to_string());
        portfolio.apply_recommendation();

        assert_eq!(snapshot.projects.len(), 2);
        assert_eq!(snapshot.projects[1].link, "https://x.test");
        assert_eq!(snapshot.template, "classic");
        assert_eq!(snapshot.generated_at, "2026-08-07T12:34:56.789Z");
        assert_eq!(portfolio.selected_template, "creative");
    }
}
