use serde::{Deserialize, Serialize};

/// A single portfolio project. Created with empty text fields; identified by
/// `id` for all later updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Names one text field of `Project` for single-field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Link,
}

impl Project {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            link: String::new(),
        }
    }

    pub fn set(&mut self, field: ProjectField, value: String) {
        match field {
            ProjectField::Title => self.title = value,
            ProjectField::Description => self.description = value,
            ProjectField::Link => self.link = value,
        }
    }
}

/// Picks the id for a project created at `now_ms`. Ids come from the creation
/// timestamp in milliseconds; two additions inside the same millisecond bump
/// past the current maximum so the sequence stays strictly increasing.
pub fn next_project_id(projects: &[Project], now_ms: i64) -> i64 {
    match projects.iter().map(|p| p.id).max() {
        Some(max) if max >= now_ms => max + 1,
        _ => now_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_the_clock() {
        let projects = vec![Project::new(1_000)];
        assert_eq!(next_project_id(&projects, 2_000), 2_000);
    }

    #[test]
    fn same_millisecond_still_yields_distinct_ids() {
        let mut projects = vec![Project::new(1_000)];
        let id = next_project_id(&projects, 1_000);
        assert_eq!(id, 1_001);
        projects.push(Project::new(id));
        assert_eq!(next_project_id(&projects, 1_000), 1_002);
    }

    #[test]
    fn clock_going_backwards_keeps_ids_increasing() {
        let projects = vec![Project::new(5_000)];
        assert_eq!(next_project_id(&projects, 4_000), 5_001);
    }

    #[test]
    fn set_replaces_one_field() {
        let mut project = Project::new(7);
        project.set(ProjectField::Link, "https://x.test".to_string());
        assert_eq!(project.link, "https://x.test");
        assert_eq!(project.title, "");
        assert_eq!(project.description, "");
    }
}
