// Copyright 2021 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::parse::*;
use crate::*;

fn filled_draft() -> DraftRecipe {
    DraftRecipe::new()
        .set_field(Field::Title, "Pancakes")
        .set_field(Field::Description, "Fluffy.")
        .set_field(Field::CookingTime, "45")
        .set_field(Field::ImageUrl, "https://example.com/pancakes.jpg")
        .set_field(Field::Category, "Breakfast")
        .set_field(Field::Ingredients, "2 cups Flour\n1 tsp Sugar")
        .set_field(Field::Instructions, "Mix.\nFry.")
}

#[test]
fn test_parse_lines_drops_blank_lines() {
    assert_eq!(
        parse_lines("2 cups Flour\n\n1 tsp Sugar\n"),
        vec!["2 cups Flour".to_owned(), "1 tsp Sugar".to_owned()]
    );
}

#[test]
fn test_parse_lines_trims_and_keeps_order() {
    let parsed = parse_lines("   c  \n\t\n  b\n a \n   \n");
    assert_eq!(parsed, vec!["c", "b", "a"]);
}

#[test]
fn test_parse_lines_treats_byte_order_mark_as_blank() {
    assert_eq!(
        parse_lines("\u{FEFF}Flour\n\u{FEFF}\n  \u{FEFF} \nSugar\u{FEFF}"),
        vec!["Flour", "Sugar"]
    );
    assert!(as_instructions("\u{FEFF}\n\u{FEFF}\u{FEFF}").is_empty());
}

#[test]
fn test_parse_lines_handles_crlf() {
    assert_eq!(parse_lines("one\r\ntwo\r\n\r\n"), vec!["one", "two"]);
}

#[test]
fn test_parse_lines_empty_input() {
    assert!(parse_lines("").is_empty());
    assert!(parse_lines("\n \n\t").is_empty());
}

#[test]
fn test_instructions_wrap_each_step() {
    assert_eq!(
        as_instructions("Preheat oven.\nBake."),
        vec![Instruction::new("Preheat oven."), Instruction::new("Bake.")]
    );
}

#[test]
fn test_category_round_trips_through_display_names() {
    for cat in Category::ALL.iter() {
        assert_eq!(cat.to_string().parse::<Category>(), Ok(*cat));
    }
    assert!("dinner".parse::<Category>().is_err());
    assert_eq!(Category::default(), Category::Dinner);
}

#[test]
fn test_field_names_match_form_names() {
    for name in [
        "title",
        "description",
        "cookingTime",
        "imageUrl",
        "category",
        "ingredients",
        "instructions",
    ] {
        let field: Field = name.parse().expect("known field");
        assert_eq!(field.name(), name);
    }
    assert!("servings".parse::<Field>().is_err());
}

#[test]
fn test_set_field_replaces_only_that_field() {
    let draft = filled_draft();
    let updated = draft.set_field(Field::Title, "Waffles");
    assert_eq!(updated.title, "Waffles");
    assert_eq!(draft.title, "Pancakes");
    assert_eq!(
        DraftRecipe {
            title: "Pancakes".to_owned(),
            ..updated
        },
        draft
    );
}

#[test]
fn test_set_field_ignores_unknown_category() {
    let draft = DraftRecipe::new().set_field(Field::Category, "Brunch");
    assert_eq!(draft.category, Category::Dinner);
    let draft = draft.set_field(Field::Category, "Snack");
    assert_eq!(draft.category, Category::Snack);
}

#[test]
fn test_valid_draft_becomes_recipe() {
    let recipe = filled_draft().to_recipe().expect("draft is valid");
    assert_eq!(recipe.title, "Pancakes");
    assert_eq!(recipe.description, "Fluffy.");
    assert_eq!(recipe.cooking_time, 45);
    assert_eq!(recipe.category, Category::Breakfast);
    assert_eq!(recipe.ingredients, vec!["2 cups Flour", "1 tsp Sugar"]);
    assert_eq!(
        recipe.instructions,
        vec![Instruction::new("Mix."), Instruction::new("Fry.")]
    );
}

#[test]
fn test_description_is_optional() {
    let draft = filled_draft().set_field(Field::Description, "");
    assert!(draft.to_recipe().is_ok());
}

#[test]
fn test_missing_required_fields_fail_validation() {
    for (field, value) in [
        (Field::Title, ""),
        (Field::ImageUrl, ""),
        (Field::CookingTime, ""),
        (Field::Ingredients, ""),
        (Field::Ingredients, "\n   \n"),
        (Field::Instructions, ""),
        (Field::Instructions, " \n\t"),
    ] {
        let draft = filled_draft().set_field(field, value);
        assert_eq!(draft.to_recipe(), Err(ValidationError), "{:?}", field);
    }
}

#[test]
fn test_cooking_time_must_be_positive_minutes() {
    for value in ["0", "-5", "abc", "4.5"] {
        let draft = filled_draft().set_field(Field::CookingTime, value);
        assert_eq!(draft.to_recipe(), Err(ValidationError), "{}", value);
    }
    let draft = filled_draft().set_field(Field::CookingTime, " 30 ");
    assert_eq!(draft.to_recipe().map(|r| r.cooking_time), Ok(30));
}

#[test]
fn test_validation_error_message() {
    assert_eq!(ValidationError.to_string(), VALIDATION_MESSAGE);
    assert_eq!(
        VALIDATION_MESSAGE,
        "Please fill in all required fields properly."
    );
}

#[test]
fn test_form_state_starting_clears_previous_outcome() {
    let state = FormState::new()
        .apply(FormEvent::Failed("boom".to_owned()))
        .apply(FormEvent::Started);
    assert!(state.loading);
    assert!(state.submit_disabled());
    assert_eq!(state.error, None);
    assert!(!state.success);
}

#[test]
fn test_form_state_failure_keeps_draft() {
    let state = FormState::new()
        .apply(FormEvent::SetField(Field::Title, "Soup".to_owned()))
        .apply(FormEvent::Started)
        .apply(FormEvent::Failed("Failed to create recipe".to_owned()))
        .apply(FormEvent::Finished);
    assert_eq!(state.draft.title, "Soup");
    assert_eq!(state.error.as_deref(), Some("Failed to create recipe"));
    assert!(!state.loading);
    assert!(!state.success);
}

#[test]
fn test_form_state_success() {
    let state = FormState::new()
        .apply(FormEvent::Started)
        .apply(FormEvent::Succeeded)
        .apply(FormEvent::Finished);
    assert!(state.success);
    assert_eq!(state.error, None);
    assert!(!state.submit_disabled());
}
