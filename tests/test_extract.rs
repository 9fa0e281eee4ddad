use recipe_draft::{extract, Difficulty, DEFAULT_IMAGE};

const PASTA_CAPTION: &str =
    "Easy 20-min pasta! 🍝\n- 1 cup pasta\n- 2 tomatoes\nCook and enjoy! #quick #easy";

#[test]
fn test_empty_text_gives_defaults() {
    let draft = extract("");

    assert_eq!(draft.name, "");
    assert_eq!(draft.time, "");
    assert_eq!(draft.difficulty, Difficulty::Easy);
    assert!(draft.tags.is_empty());
    assert!(draft.ingredients.is_empty());
    assert_eq!(draft.image, DEFAULT_IMAGE);
    assert!(draft.source_handle.is_none());
}

#[test]
fn test_whitespace_only_text_gives_defaults() {
    let draft = extract("   \n\t\n  \r\n");

    assert_eq!(draft, extract(""));
}

#[test]
fn test_pasta_caption() {
    let draft = extract(PASTA_CAPTION);

    assert_eq!(draft.name, "Easy 20-min pasta");
    assert_eq!(draft.time, "20 min");
    assert_eq!(draft.difficulty, Difficulty::Easy);
    assert_eq!(draft.ingredients, vec!["1 cup pasta", "2 tomatoes"]);
    assert_eq!(draft.tags, vec!["quick", "easy"]);
    assert_eq!(draft.image, "🍝");
    assert_eq!(draft.source_handle, None);
}

#[test]
fn test_advanced_means_hard_in_any_case() {
    for text in ["an advanced bake", "ADVANCED", "Advanced technique"] {
        assert_eq!(extract(text).difficulty, Difficulty::Hard, "{}", text);
    }
}

#[test]
fn test_medium_keywords() {
    assert_eq!(extract("Moderate effort stew").difficulty, Difficulty::Medium);
    assert_eq!(
        extract("medium heat, difficult to plate").difficulty,
        Difficulty::Hard
    );
}

#[test]
fn test_tags_capped_at_five_in_order() {
    let text = (1..=12)
        .map(|i| format!("#tag{}", i))
        .collect::<Vec<_>>()
        .join(" ");
    let draft = extract(&text);

    assert_eq!(draft.tags, vec!["tag1", "tag2", "tag3", "tag4", "tag5"]);
}

#[test]
fn test_ingredients_capped_at_ten_in_order() {
    let text = (1..=15)
        .map(|i| format!("- item {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let draft = extract(&format!("Big salad\n{}", text));

    assert_eq!(draft.ingredients.len(), 10);
    assert_eq!(draft.ingredients[0], "item 1");
    assert_eq!(draft.ingredients[9], "item 10");
}

#[test]
fn test_mixed_ingredient_markers() {
    let text = "Curry night 🍛\n\
                1. onion\n\
                2 cloves garlic\n\
                • 400ml coconut milk\n\
                * spices\n\
                - 1. rice\n\
                Simmer for 25 minutes";
    let draft = extract(text);

    assert_eq!(
        draft.ingredients,
        vec!["onion", "cloves garlic", "400ml coconut milk", "spices", "1. rice"]
    );
    assert_eq!(draft.time, "25 min");
    assert_eq!(draft.image, "🍛");
}

#[test]
fn test_name_never_exceeds_fifty_characters() {
    let long = "Grandma's famous slow-cooked Sunday pot roast with root vegetables and gravy";
    let draft = extract(long);

    assert!(draft.name.chars().count() <= 50);
    assert!(draft.name.starts_with("Grandmas famous slow-cooked"));
}

#[test]
fn test_source_handle() {
    let draft = extract("Recipe by @sunday.suppers_ 🥧 #pie");

    assert_eq!(draft.source_handle.as_deref(), Some("@sunday.suppers_"));
    assert_eq!(draft.image, "🥧");
}

#[test]
fn test_extract_is_deterministic() {
    assert_eq!(extract(PASTA_CAPTION), extract(PASTA_CAPTION));
}
