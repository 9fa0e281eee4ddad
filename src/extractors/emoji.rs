/// Food emoji recognised as a recipe picture, in no particular order.
const FOOD_EMOJI: [char; 24] = [
    '🍝', '🍕', '🍔', '🌮', '🌯', '🥗', '🍜', '🍲', '🍛', '🍣', '🍱', '🥘', '🍳', '🥞', '🧇', '🥓',
    '🍗', '🥩', '🍤', '🥪', '🍟', '🍰', '🍪', '🥧',
];

/// First character of `text` that is on the food emoji list.
pub fn first_food_emoji(text: &str) -> Option<char> {
    text.chars().find(|c| FOOD_EMOJI.contains(c))
}
