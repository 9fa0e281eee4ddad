use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::model::{DEFAULT_IMAGE, DEFAULT_TIME};

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct DraftConfig {
    /// Caps applied while extracting a draft
    #[serde(default)]
    pub extractor: Limits,
    /// Values a blank form starts with
    #[serde(default)]
    pub form: FormDefaults,
}

/// Caps applied while extracting a draft from text
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum characters kept in the recipe name
    #[serde(default = "default_max_name_chars")]
    pub max_name_chars: usize,
    /// Maximum number of ingredient lines
    #[serde(default = "default_max_ingredients")]
    pub max_ingredients: usize,
    /// Maximum number of hashtags kept as tags
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
    /// Shortest hashtag (in characters) kept as a tag
    #[serde(default = "default_min_tag_chars")]
    pub min_tag_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_chars: default_max_name_chars(),
            max_ingredients: default_max_ingredients(),
            max_tags: default_max_tags(),
            min_tag_chars: default_min_tag_chars(),
        }
    }
}

/// Values a recipe form falls back to
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    /// Time shown when the draft found none
    #[serde(default = "default_time")]
    pub default_time: String,
    /// Image used when the form is submitted without one
    #[serde(default = "default_image")]
    pub default_image: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            default_time: default_time(),
            default_image: default_image(),
        }
    }
}

// Default value functions
fn default_max_name_chars() -> usize {
    50
}

fn default_max_ingredients() -> usize {
    10
}

fn default_max_tags() -> usize {
    5
}

fn default_min_tag_chars() -> usize {
    3
}

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

impl DraftConfig {
    /// Load configuration from `config.toml` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_DRAFT__ prefix
/// 2. The given file, or config.toml in the current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_DRAFT__EXTRACTOR__MAX_TAGS
pub fn load_config(path: Option<&str>) -> Result<DraftConfig, ConfigError> {
    let file = match path {
        // An explicitly requested file has to exist
        Some(path) => File::with_name(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIPE_DRAFT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
