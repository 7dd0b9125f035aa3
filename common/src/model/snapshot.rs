use serde::{Deserialize, Serialize};

use crate::model::profile::ProfileData;
use crate::model::project::Project;

/// The record written to the storage sink on every Generate action.
///
/// The JSON shape is fixed: profile fields flattened at the top level,
/// `generatedAt` kept camelCase. The app only ever writes this blob;
/// whatever consumes it later reads it from the browser's storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub profile: ProfileData,
    pub projects: Vec<Project>,
    /// Template key selected at the moment the snapshot was built.
    pub template: String,
    /// ISO-8601 timestamp of the Generate action.
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::ProfileData;

    #[test]
    fn json_shape_is_flat_with_camel_case_timestamp() {
        let snapshot = Snapshot {
            profile: ProfileData {
                name: "Ana".to_string(),
                title: "Developer".to_string(),
                description: String::new(),
                skills: "Rust, Yew".to_string(),
            },
            projects: vec![Project::new(1_700_000_000_000)],
            template: "classic".to_string(),
            generated_at: "2026-08-07T12:00:00.000Z".to_string(),
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&snapshot).unwrap()).unwrap();

        assert_eq!(value["name"], "Ana");
        assert_eq!(value["skills"], "Rust, Yew");
        assert_eq!(value["template"], "classic");
        assert_eq!(value["generatedAt"], "2026-08-07T12:00:00.000Z");
        assert_eq!(value["projects"][0]["id"], 1_700_000_000_000_i64);
        assert!(value.get("profile").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let snapshot = Snapshot {
            profile: ProfileData::default(),
            projects: Vec::new(),
            template: "modern".to_string(),
            generated_at: "2026-08-07T12:00:00.000Z".to_string(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
