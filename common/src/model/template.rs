use crate::model::profile::ProfileData;

/// A named, immutable bundle of style tokens (background, text, accent)
/// selectable by the user. The catalog below is defined once and read-only
/// for the lifetime of the app.
#[derive(Debug, PartialEq, Eq)]
pub struct TemplateDefinition {
    pub key: &'static str,
    pub display_name: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
    pub accent: &'static str,
}

/// Key preselected on startup. Also the fail-safe fallback for the preview.
pub const DEFAULT_TEMPLATE: &str = "modern";

/// Template catalog. The first entry is the default.
pub static TEMPLATES: [TemplateDefinition; 3] = [
    TemplateDefinition {
        key: "modern",
        display_name: "Moderno",
        background: "#f8fafc",
        text_color: "#0f172a",
        accent: "#2563eb",
    },
    TemplateDefinition {
        key: "classic",
        display_name: "Clásico",
        background: "#fffbeb",
        text_color: "#292524",
        accent: "#b45309",
    },
    TemplateDefinition {
        key: "creative",
        display_name: "Creativo",
        background: "#fdf4ff",
        text_color: "#1e1b4b",
        accent: "#c026d3",
    },
];

pub fn lookup(key: &str) -> Option<&'static TemplateDefinition> {
    TEMPLATES.iter().find(|t| t.key == key)
}

/// Fail-safe lookup for the preview: an unknown key resolves to the default
/// definition instead of breaking the render.
pub fn lookup_or_default(key: &str) -> &'static TemplateDefinition {
    lookup(key).unwrap_or(&TEMPLATES[0])
}

/// Color triple suggested alongside a template (background, text, accent).
pub const PURPLE_COLORS: [&str; 3] = ["#f5f3ff", "#312e81", "#7c3aed"];
pub const BLUE_COLORS: [&str; 3] = ["#eff6ff", "#1e3a8a", "#2563eb"];

/// Result of the deterministic template suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub template: &'static str,
    pub colors: [&'static str; 3],
}

/// Suggests a template and a color triple from the profile title. Two
/// independent substring checks; the colors are not required to match the
/// chosen template's own tokens.
pub fn recommend(profile: &ProfileData) -> Recommendation {
    let title = profile.title.to_lowercase();

    let template = if title.contains("developer") {
        "modern"
    } else {
        "creative"
    };
    let colors = if title.contains("designer") {
        PURPLE_COLORS
    } else {
        BLUE_COLORS
    };

    Recommendation { template, colors }
}
