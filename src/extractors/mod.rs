use crate::model::RecipeDraft;

mod caption;
mod emoji;

pub use self::caption::CaptionExtractor;

/// Turns free-form text into a recipe draft.
///
/// Implementations never fail: text without anything recognisable
/// produces a draft holding only defaults.
pub trait Extractor {
    fn extract(&self, text: &str) -> RecipeDraft;
}
