const DEFAULT_NAME: &str = "mint-app";
const DEFAULT_AUTHOR: &str = "Mint";
const DEFAULT_VERSION: &str = "0.0.1";
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Source-language variant for the generated base code.
///
/// The numeric type code persisted in the manifest is derived from this enum,
/// so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    #[default]
    JavaScript,
    TypeScript,
}

impl Template {
    /// Resolve a user-supplied template name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "javascript" => Some(Template::JavaScript),
            "typescript" => Some(Template::TypeScript),
            _ => None,
        }
    }

    /// Numeric discriminant written to the manifest.
    pub fn type_code(&self) -> u32 {
        match self {
            Template::JavaScript => 1,
            Template::TypeScript => 3,
        }
    }

    /// Extension of the generated base source file, without the dot.
    pub fn source_ext(&self) -> &'static str {
        match self {
            Template::JavaScript => "js",
            Template::TypeScript => "ts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Template::JavaScript => "JavaScript",
            Template::TypeScript => "TypeScript",
        }
    }
}

/// Free-text project properties collected from flags, prompts, or defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub name: String,
    pub author: String,
    /// Free-form version string, not semver-validated.
    pub version: String,
    pub assets_dir: String,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            version: DEFAULT_VERSION.to_string(),
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
        }
    }
}

/// The single in-memory record for a scaffolding session.
///
/// Created with defaults, filled in by flag scanning and prompting, read once
/// by the project writer, and discarded at process exit. Only its effects
/// (the written files) persist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub template: Template,
    pub makefile: bool,
    pub base_code: bool,
    pub properties: Properties,
}
