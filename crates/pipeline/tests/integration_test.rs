//! Integration tests for the pipeline.
//!
//! These tests verify that filters and ranking work together
//! in a realistic scenario.

use nlu::UserConstraints;
use pipeline::{FilterPipeline, filter_recipes, rank};
use recipe_store::Recipe;

fn create_test_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Carbonara", &["spaghetti", "eggs", "pancetta"])
            .with_cooking_time(20)
            .with_cuisine("Italian"),
        Recipe::new("Beef Tacos", &["beef", "tortilla"])
            .with_cooking_time(15)
            .with_cuisine("Mexican"),
        Recipe::new("Lentil Soup", &["red lentils", "water", "cumin"])
            .with_cooking_time(30)
            .with_cuisine("Indian")
            .with_dietary(&["vegan", "vegetarian"]),
        Recipe::new("Egg Fried Rice", &["rice", "eggs", "spring onion"])
            .with_cooking_time(15)
            .with_cuisine("Chinese")
            .with_dietary(&["vegetarian"]),
        // No cooking time in the document
        Recipe::new("Dal Tadka", &["yellow lentils", "ghee"]).with_dietary(&["Vegetarian"]),
    ]
}

#[test]
fn test_time_filter_scenario() {
    let constraints = UserConstraints::new().with_max_cooking_time(20);

    let filtered = filter_recipes(&create_test_recipes(), &constraints).unwrap();

    let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Carbonara", "Beef Tacos", "Egg Fried Rice", "Dal Tadka"]
    );
}

#[test]
fn test_full_pipeline_vegetarian_lentils() {
    let constraints = UserConstraints::new()
        .with_ingredients(&["lentils", "eggs"])
        .with_dietary_restrictions(&["vegetarian"]);

    let survivors = FilterPipeline::standard()
        .apply(create_test_recipes(), &constraints)
        .unwrap();
    let ranked = rank(survivors, &constraints.ingredients);

    let names: Vec<&str> = ranked.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Lentil Soup", "Egg Fried Rice", "Dal Tadka"]);
    assert!(ranked.iter().all(|r| r.score == 1));
    assert_eq!(ranked[0].matched_items, vec!["red lentils"]);
    assert_eq!(ranked[2].matched_items, vec!["yellow lentils"]);
}

#[test]
fn test_filter_membership_property() {
    let recipes = create_test_recipes();

    for max_time in [0, 15, 20, 30, 60] {
        for diets in [vec![], vec!["vegan"], vec!["vegetarian", "gluten-free"]] {
            let constraints = UserConstraints::new()
                .with_max_cooking_time(max_time)
                .with_dietary_restrictions(&diets);

            let filtered = filter_recipes(&recipes, &constraints).unwrap();

            let expected: Vec<&Recipe> = recipes
                .iter()
                .filter(|r| r.cooking_time.is_none_or(|t| t <= max_time))
                .filter(|r| diets.is_empty() || diets.iter().any(|d| r.has_dietary_tag(d)))
                .collect();
            let actual: Vec<&Recipe> = filtered.iter().collect();
            assert_eq!(actual, expected, "max_time={max_time} diets={diets:?}");
        }
    }
}

#[test]
fn test_empty_collection_yields_empty_ranking() {
    let constraints = UserConstraints::new().with_ingredients(&["eggs"]);

    let filtered = filter_recipes(&[], &constraints).unwrap();
    let ranked = rank(filtered, &constraints.ingredients);

    assert!(ranked.is_empty());
}
