//! UniFFI bindings for recipe-draft
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Everything here is synchronous; extraction does no I/O.

use std::fmt;

use crate::{DraftError, NewRecipe, RecipeDraft, RecipeForm};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<crate::Difficulty> for FfiDifficulty {
    fn from(difficulty: crate::Difficulty) -> Self {
        match difficulty {
            crate::Difficulty::Easy => FfiDifficulty::Easy,
            crate::Difficulty::Medium => FfiDifficulty::Medium,
            crate::Difficulty::Hard => FfiDifficulty::Hard,
        }
    }
}

impl From<FfiDifficulty> for crate::Difficulty {
    fn from(difficulty: FfiDifficulty) -> Self {
        match difficulty {
            FfiDifficulty::Easy => crate::Difficulty::Easy,
            FfiDifficulty::Medium => crate::Difficulty::Medium,
            FfiDifficulty::Hard => crate::Difficulty::Hard,
        }
    }
}

/// FFI-compatible recipe draft
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDraft {
    pub name: String,
    /// Empty string if the text mentions no duration
    pub time: String,
    pub difficulty: FfiDifficulty,
    pub tags: Vec<String>,
    pub image: String,
    pub ingredients: Vec<String>,
    pub instagram_handle: Option<String>,
}

impl From<RecipeDraft> for FfiRecipeDraft {
    fn from(draft: RecipeDraft) -> Self {
        FfiRecipeDraft {
            name: draft.name,
            time: draft.time,
            difficulty: draft.difficulty.into(),
            tags: draft.tags,
            image: draft.image,
            ingredients: draft.ingredients,
            instagram_handle: draft.source_handle,
        }
    }
}

impl From<FfiRecipeDraft> for RecipeDraft {
    fn from(ffi: FfiRecipeDraft) -> Self {
        RecipeDraft {
            name: ffi.name,
            time: ffi.time,
            difficulty: ffi.difficulty.into(),
            tags: ffi.tags,
            image: ffi.image,
            ingredients: ffi.ingredients,
            source_handle: ffi.instagram_handle,
        }
    }
}

/// FFI-compatible create-recipe payload
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiNewRecipe {
    pub name: String,
    pub time: String,
    pub difficulty: FfiDifficulty,
    pub tags: Vec<String>,
    pub image: String,
    pub instagram_url: String,
    pub instagram_handle: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl From<NewRecipe> for FfiNewRecipe {
    fn from(recipe: NewRecipe) -> Self {
        FfiNewRecipe {
            name: recipe.name,
            time: recipe.time,
            difficulty: recipe.difficulty.into(),
            tags: recipe.tags,
            image: recipe.image,
            instagram_url: recipe.instagram_url,
            instagram_handle: recipe.instagram_handle,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiDraftError {
    /// Recipe form was submitted without a name
    MissingName { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
}

impl fmt::Display for FfiDraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiDraftError::MissingName { message } => write!(f, "Missing name: {}", message),
            FfiDraftError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiDraftError::ConfigError { message } => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for FfiDraftError {}

impl From<DraftError> for FfiDraftError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::MissingName => FfiDraftError::MissingName {
                message: "Recipe name is required".to_string(),
            },
            DraftError::ConfigError(e) => FfiDraftError::ConfigError {
                message: e.to_string(),
            },
            other => FfiDraftError::InvalidInput {
                message: other.to_string(),
            },
        }
    }
}

/// Extract a recipe draft from pasted text
///
/// # Arguments
/// * `text` - Free-form recipe text, e.g. a copied caption
///
/// # Returns
/// An `FfiRecipeDraft`; fields the text does not mention hold their defaults
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_draft(text: String) -> FfiRecipeDraft {
    crate::extract(&text).into()
}

/// Submit a (possibly edited) draft through the recipe form
///
/// # Arguments
/// * `draft` - Draft as returned by `extract_draft`, with any user corrections
/// * `instructions` - Optional free-form instructions typed by the user
///
/// # Returns
/// The payload for the create-recipe operation
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn submit_draft(
    draft: FfiRecipeDraft,
    instructions: Option<String>,
) -> Result<FfiNewRecipe, FfiDraftError> {
    let mut form = RecipeForm::from_draft(draft.into());
    if let Some(instructions) = instructions {
        form.instructions = instructions;
    }
    Ok(form.submit()?.into())
}
