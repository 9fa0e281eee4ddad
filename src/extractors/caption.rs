use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::emoji::first_food_emoji;
use super::Extractor;
use crate::config::Limits;
use crate::model::{Difficulty, RecipeDraft, DEFAULT_IMAGE};

lazy_static! {
    // Anything that is not a word character, whitespace or a hyphen
    static ref NAME_NOISE: Regex = Regex::new(r"[^\w\s-]").unwrap();

    // "20 min", "20-min", "2 hours", "1hr"; the plural s is not part of the unit
    static ref DURATION: Regex = Regex::new(
        r"(?i)([0-9]+)\s*-?\s*(min|minute|hour|hr)s?"
    ).unwrap();

    static ref HARD_WORDS: Regex = Regex::new(
        r"(?i)\b(?:hard|difficult|advanced|complex)\b"
    ).unwrap();

    static ref MEDIUM_WORDS: Regex = Regex::new(
        r"(?i)\b(?:medium|moderate)\b"
    ).unwrap();

    // Bullet markers win over numbered ones: "- 1. thing" keeps "1. thing"
    static ref BULLET_MARKER: Regex = Regex::new(r"^[-•*]\s+").unwrap();
    static ref NUMBER_MARKER: Regex = Regex::new(r"^[0-9]+\.?\s+").unwrap();

    static ref HASHTAG: Regex = Regex::new(r"#(\w+)").unwrap();
    static ref HANDLE: Regex = Regex::new(r"@[\w.]+").unwrap();
}

/// Heuristic extractor for recipe captions copied from social media posts.
///
/// Every field is derived independently from the same text:
/// the name and ingredients from its non-empty lines, everything else
/// from the raw text.
#[derive(Debug, Clone, Default)]
pub struct CaptionExtractor {
    limits: Limits,
}

impl CaptionExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        CaptionExtractor { limits }
    }
}

impl Extractor for CaptionExtractor {
    fn extract(&self, text: &str) -> RecipeDraft {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let draft = RecipeDraft {
            name: extract_name(&lines, self.limits.max_name_chars),
            time: extract_time(text),
            difficulty: extract_difficulty(text),
            tags: extract_tags(text, self.limits.min_tag_chars, self.limits.max_tags),
            image: first_food_emoji(text)
                .map(String::from)
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            ingredients: extract_ingredients(&lines, self.limits.max_ingredients),
            source_handle: HANDLE.find(text).map(|m| m.as_str().to_string()),
        };

        debug!("{:#?}", draft);
        draft
    }
}

fn extract_name(lines: &[&str], max_chars: usize) -> String {
    let first = lines.first().copied().unwrap_or_default();
    NAME_NOISE
        .replace_all(first, "")
        .trim()
        .chars()
        .take(max_chars)
        .collect()
}

fn extract_time(text: &str) -> String {
    match DURATION.captures(text) {
        Some(caps) => format!("{} {}", &caps[1], &caps[2]),
        None => String::new(),
    }
}

fn extract_difficulty(text: &str) -> Difficulty {
    if HARD_WORDS.is_match(text) {
        Difficulty::Hard
    } else if MEDIUM_WORDS.is_match(text) {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

fn extract_ingredients(lines: &[&str], max: usize) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| strip_marker(line))
        .take(max)
        .map(String::from)
        .collect()
}

/// Line without its list marker, or `None` if the line is not a list item.
fn strip_marker(line: &str) -> Option<&str> {
    BULLET_MARKER
        .find(line)
        .or_else(|| NUMBER_MARKER.find(line))
        .map(|marker| &line[marker.end()..])
}

fn extract_tags(text: &str, min_chars: usize, max: usize) -> Vec<String> {
    HASHTAG
        .captures_iter(text)
        .map(|caps| caps[1].to_lowercase())
        .filter(|tag| tag.chars().count() >= min_chars)
        .take(max)
        .collect()
}
