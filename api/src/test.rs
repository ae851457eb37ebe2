// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use std::cell::RefCell;

use async_trait::async_trait;
use chrono::Duration;
use futures::executor::block_on;
use serde_json::json;

use recipes::{Category, DraftRecipe, Field, FormEvent, FormState, Instruction, VALIDATION_MESSAGE};

use crate::*;

struct FakeClient {
    requests: RefCell<Vec<CreateRecipeRequest>>,
    response: Result<(), SubmitError>,
}

impl FakeClient {
    fn answering(response: Result<(), SubmitError>) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            response,
        }
    }
}

#[async_trait(?Send)]
impl RecipeClient for FakeClient {
    async fn create_recipe(&self, request: &CreateRecipeRequest) -> Result<(), SubmitError> {
        self.requests.borrow_mut().push(request.clone());
        self.response.clone()
    }
}

#[derive(Default)]
struct FakeNavigator {
    visits: RefCell<Vec<(String, Option<Duration>)>>,
}

impl Navigator for FakeNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push((path.to_owned(), None));
    }

    fn navigate_after(&self, path: &str, delay: Duration) {
        self.visits.borrow_mut().push((path.to_owned(), Some(delay)));
    }
}

fn filled_draft() -> DraftRecipe {
    DraftRecipe::new()
        .set_field(Field::Title, "Bread")
        .set_field(Field::Description, "Crusty.")
        .set_field(Field::CookingTime, "45")
        .set_field(Field::ImageUrl, "https://example.com/bread.jpg")
        .set_field(Field::Ingredients, "2 cups Flour\n\n1 tsp Sugar\n")
        .set_field(Field::Instructions, "Preheat oven.\nBake.")
}

fn run_submission(
    client: &FakeClient,
    navigator: &FakeNavigator,
    draft: &DraftRecipe,
) -> (Result<(), SubmitError>, Vec<FormEvent>) {
    let mut events = Vec::new();
    let result = block_on(Submission::new(client, navigator).run(draft, |ev| events.push(ev)));
    (result, events)
}

#[test]
fn test_request_serializes_in_wire_shape() {
    let recipe = filled_draft().to_recipe().expect("valid draft");
    let value = serde_json::to_value(CreateRecipeRequest::from(recipe)).expect("serializes");
    assert_eq!(
        value,
        json!({
            "title": "Bread",
            "description": "Crusty.",
            "cookingTime": 45,
            "imageUrl": "https://example.com/bread.jpg",
            "category": "Dinner",
            "ingredients": ["2 cups Flour", "1 tsp Sugar"],
            "instructions": [{"step": "Preheat oven."}, {"step": "Bake."}],
        })
    );
}

#[test]
fn test_read_create_response_success() {
    assert_eq!(read_create_response(true, r#"{"id": "abc"}"#), Ok(()));
    assert_eq!(read_create_response(true, "null"), Ok(()));
}

#[test]
fn test_read_create_response_uses_server_message() {
    assert_eq!(
        read_create_response(false, r#"{"message": "X"}"#),
        Err(SubmitError::Request("X".to_owned()))
    );
}

#[test]
fn test_read_create_response_falls_back_without_message() {
    for body in [r#"{}"#, r#"{"message": ""}"#, r#"{"message": 42}"#, "null"] {
        assert_eq!(
            read_create_response(false, body),
            Err(SubmitError::Request(CREATE_FAILED_MESSAGE.to_owned())),
            "{}",
            body
        );
    }
}

#[test]
fn test_read_create_response_rejects_non_json() {
    for ok in [true, false] {
        match read_create_response(ok, "<html>Bad Gateway</html>") {
            Err(SubmitError::Request(msg)) => assert!(msg.starts_with("Unparseable response")),
            other => panic!("expected a request error, got {:?}", other),
        }
    }
}

#[test]
fn test_successful_submission() {
    let client = FakeClient::answering(Ok(()));
    let navigator = FakeNavigator::default();
    let (result, events) = run_submission(&client, &navigator, &filled_draft());
    assert_eq!(result, Ok(()));
    assert_eq!(
        events,
        vec![FormEvent::Started, FormEvent::Succeeded, FormEvent::Finished]
    );
    let requests = client.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].cooking_time, 45);
    assert_eq!(requests[0].category, Category::Dinner);
    assert_eq!(
        requests[0].instructions,
        vec![Instruction::new("Preheat oven."), Instruction::new("Bake.")]
    );
    assert_eq!(
        *navigator.visits.borrow(),
        vec![(MENU_PATH.to_owned(), Some(Duration::seconds(2)))]
    );
}

#[test]
fn test_invalid_draft_never_reaches_client() {
    for (field, value) in [
        (Field::Title, ""),
        (Field::ImageUrl, ""),
        (Field::CookingTime, ""),
        (Field::Ingredients, "\n\n"),
        (Field::Instructions, ""),
    ] {
        let client = FakeClient::answering(Ok(()));
        let navigator = FakeNavigator::default();
        let draft = filled_draft().set_field(field, value);
        let (result, events) = run_submission(&client, &navigator, &draft);
        assert!(matches!(result, Err(SubmitError::Validation(_))));
        assert!(client.requests.borrow().is_empty());
        assert!(navigator.visits.borrow().is_empty());
        assert_eq!(
            events,
            vec![
                FormEvent::Started,
                FormEvent::Failed(VALIDATION_MESSAGE.to_owned()),
                FormEvent::Finished
            ]
        );
    }
}

#[test]
fn test_failed_request_surfaces_message_and_stays_put() {
    let client = FakeClient::answering(Err(SubmitError::Request("X".to_owned())));
    let navigator = FakeNavigator::default();
    let (result, events) = run_submission(&client, &navigator, &filled_draft());
    assert_eq!(result, Err(SubmitError::Request("X".to_owned())));
    assert!(navigator.visits.borrow().is_empty());

    let state = events
        .into_iter()
        .fold(FormState::new(), |state, ev| state.apply(ev));
    assert_eq!(state.error.as_deref(), Some("X"));
    assert!(!state.success);
    assert!(!state.loading);
}

#[test]
fn test_form_is_busy_only_while_in_flight() {
    let client = FakeClient::answering(Ok(()));
    let navigator = FakeNavigator::default();
    let mut seen = Vec::new();
    let mut state = FormState::new();
    let result = block_on(
        Submission::new(&client, &navigator)
            .with_redirect_delay(Duration::milliseconds(10))
            .run(&filled_draft(), |ev| {
                state = state.apply(ev);
                seen.push(state.submit_disabled());
            }),
    );
    assert_eq!(result, Ok(()));
    assert_eq!(seen, vec![true, true, false]);
    assert!(state.success);
    assert_eq!(
        *navigator.visits.borrow(),
        vec![(MENU_PATH.to_owned(), Some(Duration::milliseconds(10)))]
    );
}
