pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod form;
pub mod model;
pub mod uniffi_bindings;

use std::path::Path;

use crate::extractors::{CaptionExtractor, Extractor};

pub use builder::{DraftImporter, DraftImporterBuilder, ImportResult};
pub use config::{load_config, DraftConfig, FormDefaults, Limits};
pub use error::DraftError;
pub use form::RecipeForm;
pub use model::{Difficulty, NewRecipe, RecipeDraft, DEFAULT_IMAGE, DEFAULT_TIME};

/// Extract a recipe draft from free-form text using the default limits.
///
/// Never fails: text with nothing recognisable yields a draft of defaults.
///
/// # Example
/// ```
/// use recipe_draft::{extract, Difficulty};
///
/// let draft = extract("Easy 20-min pasta! 🍝\n- 1 cup pasta\n- 2 tomatoes\n#quick #easy");
/// assert_eq!(draft.time, "20 min");
/// assert_eq!(draft.difficulty, Difficulty::Easy);
/// assert_eq!(draft.ingredients, vec!["1 cup pasta", "2 tomatoes"]);
/// ```
pub fn extract(text: &str) -> RecipeDraft {
    CaptionExtractor::new().extract(text)
}

/// Extract a recipe draft with custom limits.
pub fn extract_from_text(text: &str, limits: Limits) -> RecipeDraft {
    CaptionExtractor::with_limits(limits).extract(text)
}

/// Read a file and extract a recipe draft from its contents.
pub fn extract_from_file(path: impl AsRef<Path>) -> Result<RecipeDraft, DraftError> {
    let text = std::fs::read_to_string(path)?;
    Ok(extract(&text))
}

/// Pre-fill a form from the draft and submit it unchanged.
pub fn draft_to_recipe(draft: RecipeDraft) -> Result<NewRecipe, DraftError> {
    RecipeForm::from_draft(draft).submit()
}
