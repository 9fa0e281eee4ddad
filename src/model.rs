use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Plate emoji used when a recipe has no picture of its own.
pub const DEFAULT_IMAGE: &str = "🍽️";

/// Cooking time shown in a blank recipe form.
pub const DEFAULT_TIME: &str = "30 min";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DraftError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Structured guess at a recipe, derived from free-form text.
///
/// A draft has no identity and is never stored. It only pre-fills a
/// [`RecipeForm`](crate::form::RecipeForm).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    /// e.g. "30 min", empty when the text mentions no duration
    #[serde(alias = "timeEstimate")]
    pub time: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub image: String,
    pub ingredients: Vec<String>,
    /// First `@handle` in the text, including the `@`
    #[serde(rename = "instagramHandle")]
    pub source_handle: Option<String>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        RecipeDraft {
            name: String::new(),
            time: String::new(),
            difficulty: Difficulty::default(),
            tags: Vec::new(),
            image: DEFAULT_IMAGE.to_string(),
            ingredients: Vec::new(),
            source_handle: None,
        }
    }
}

/// Payload for the persistence service's create-recipe operation.
///
/// Field names follow the recipe row columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub time: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub image: String,
    pub instagram_url: String,
    pub instagram_handle: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!(matches!(
            "extreme".parse::<Difficulty>(),
            Err(DraftError::InvalidDifficulty(_))
        ));
    }

    #[test]
    fn test_draft_json_shape() {
        let draft = RecipeDraft {
            name: "Pasta".to_string(),
            time: "20 min".to_string(),
            source_handle: Some("@chef".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["time"], "20 min");
        assert_eq!(json["difficulty"], "Easy");
        assert_eq!(json["instagramHandle"], "@chef");
        assert_eq!(json["image"], DEFAULT_IMAGE);
    }

    #[test]
    fn test_draft_accepts_time_estimate_alias() {
        let json = r#"{
            "name": "Soup",
            "timeEstimate": "1 hour",
            "difficulty": "Medium",
            "tags": [],
            "image": "🍲",
            "ingredients": [],
            "instagramHandle": null
        }"#;
        let draft: RecipeDraft = serde_json::from_str(json).unwrap();

        assert_eq!(draft.time, "1 hour");
        assert_eq!(draft.difficulty, Difficulty::Medium);
        assert!(draft.source_handle.is_none());
    }
}
