use serde::{Deserialize, Serialize};

/// Free-text profile fields captured by the form. Empty strings are valid;
/// the preview renders placeholder text for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Comma-separated list, split into chips only at render time.
    pub skills: String,
}

/// Names one field of `ProfileData` for single-field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Title,
    Description,
    Skills,
}

impl ProfileData {
    /// Replaces exactly the named field and leaves the others untouched.
    /// No validation; any string is accepted.
    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Title => self.title = value,
            ProfileField::Description => self.description = value,
            ProfileField::Skills => self.skills = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_touches_only_the_named_field() {
        let mut profile = ProfileData {
            name: "Ana".to_string(),
            title: "Dev".to_string(),
            description: "Hola".to_string(),
            skills: "Rust".to_string(),
        };

        profile.set(ProfileField::Title, "Senior Dev".to_string());

        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.title, "Senior Dev");
        assert_eq!(profile.description, "Hola");
        assert_eq!(profile.skills, "Rust");
    }

    #[test]
    fn empty_values_are_accepted() {
        let mut profile = ProfileData::default();
        profile.set(ProfileField::Name, String::new());
        assert_eq!(profile.name, "");
    }
}
