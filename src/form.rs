use log::{debug, info};

use crate::config::FormDefaults;
use crate::error::DraftError;
use crate::model::{Difficulty, NewRecipe, RecipeDraft, DEFAULT_IMAGE};

/// Editable recipe form, usually pre-filled from a [`RecipeDraft`].
///
/// Tags are kept as the comma separated string a user types; they are
/// split again on [`submit`](RecipeForm::submit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    pub name: String,
    pub time: String,
    pub difficulty: Difficulty,
    pub image: String,
    pub tags: String,
    pub instagram_url: String,
    pub instagram_handle: String,
    pub instructions: String,
    pub ingredients: Vec<String>,
    defaults: FormDefaults,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::with_defaults(FormDefaults::default())
    }
}

impl RecipeForm {
    /// Blank form for a recipe typed in by hand
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: FormDefaults) -> Self {
        RecipeForm {
            name: String::new(),
            time: defaults.default_time.clone(),
            difficulty: Difficulty::default(),
            image: defaults.default_image.clone(),
            tags: String::new(),
            instagram_url: String::new(),
            instagram_handle: String::new(),
            instructions: String::new(),
            ingredients: Vec::new(),
            defaults,
        }
    }

    /// Form pre-filled from an extracted draft
    pub fn from_draft(draft: RecipeDraft) -> Self {
        Self::from_draft_with_defaults(draft, FormDefaults::default())
    }

    /// Form pre-filled from an extracted draft, falling back to `defaults`
    /// for the fields the draft left empty.
    pub fn from_draft_with_defaults(draft: RecipeDraft, defaults: FormDefaults) -> Self {
        let mut form = Self::with_defaults(defaults);

        form.name = draft.name;
        if !draft.time.is_empty() {
            form.time = draft.time;
        }
        form.difficulty = draft.difficulty;
        // The plate emoji means no food emoji was found in the text
        if !draft.image.is_empty() && draft.image != DEFAULT_IMAGE {
            form.image = draft.image;
        }
        form.tags = draft.tags.join(", ");
        form.instagram_handle = draft.source_handle.unwrap_or_default();
        form.ingredients = draft.ingredients;

        debug!("Pre-filled recipe form for {:?}", form.name);
        form
    }

    /// Validate the form and build the create-recipe payload.
    pub fn submit(&self) -> Result<NewRecipe, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let image = if self.image.is_empty() {
            self.defaults.default_image.clone()
        } else {
            self.image.clone()
        };

        let recipe = NewRecipe {
            name: name.to_string(),
            time: self.time.clone(),
            difficulty: self.difficulty,
            tags: split_tags(&self.tags),
            image,
            instagram_url: self.instagram_url.trim().to_string(),
            instagram_handle: self.instagram_handle.trim().to_string(),
            ingredients: self
                .ingredients
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .map(String::from)
                .collect(),
            instructions: self.instructions.trim().to_string(),
        };

        info!("Submitting recipe {:?}", recipe.name);
        Ok(recipe)
    }
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_defaults() {
        let form = RecipeForm::new();
        assert_eq!(form.time, "30 min");
        assert_eq!(form.image, DEFAULT_IMAGE);
        assert_eq!(form.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("a, ,b"), vec!["a", "b"]);
        assert_eq!(split_tags(" quick , easy,"), vec!["quick", "easy"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_submit_trims_fields() {
        let mut form = RecipeForm::new();
        form.name = "  Chili  ".to_string();
        form.instagram_handle = " @cook ".to_string();
        form.instructions = "\nSimmer.\n".to_string();
        form.ingredients = vec!["beans ".to_string(), "  ".to_string()];
        form.image.clear();

        let recipe = form.submit().unwrap();
        assert_eq!(recipe.name, "Chili");
        assert_eq!(recipe.instagram_handle, "@cook");
        assert_eq!(recipe.instructions, "Simmer.");
        assert_eq!(recipe.ingredients, vec!["beans"]);
        assert_eq!(recipe.image, DEFAULT_IMAGE);
    }

    #[test]
    fn test_submit_requires_name() {
        let mut form = RecipeForm::new();
        form.name = "   ".to_string();
        assert!(matches!(form.submit(), Err(DraftError::MissingName)));
    }
}
