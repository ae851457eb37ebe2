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
use std::rc::Rc;

use chrono::Duration;
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{debug, info};
use web_sys::Event;

use client_api::{Navigator, RecipeClient, Submission};
use recipes::{Category, Field, FormEvent};

use super::{BannerKind, StatusBanner, SUCCESS_MESSAGE};
use crate::app_state::StateHandler;

#[derive(Prop)]
pub struct RecipeFormProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub client: Rc<dyn RecipeClient>,
    pub navigator: Rc<dyn Navigator>,
    pub redirect_delay: Duration,
}

/// A signal bound to one form control. Every change is dispatched to the form
/// state as a `SetField`.
fn field_signal<'ctx>(
    cx: Scope<'ctx>,
    sh: StateHandler<'ctx>,
    field: Field,
    initial: &str,
) -> &'ctx Signal<String> {
    let value = create_signal(cx, initial.to_owned());
    create_effect(cx, move || {
        sh.dispatch(cx, FormEvent::SetField(field, value.get().as_ref().clone()));
    });
    value
}

#[component]
pub fn RecipeForm<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeFormProps<'ctx>) -> View<G> {
    let RecipeFormProps {
        sh,
        client,
        navigator,
        redirect_delay,
    } = props;
    let draft = sh.get_selector(cx, |state| state.get().draft.clone());
    let busy = sh.get_selector(cx, |state| state.get().submit_disabled());
    let error = sh.get_selector(cx, |state| state.get().error.clone());
    let success = sh.get_selector(cx, |state| state.get().success);
    let categories = create_signal(cx, Category::ALL.to_vec());

    let title = field_signal(cx, sh, Field::Title, "");
    let category = field_signal(cx, sh, Field::Category, Category::default().as_str());
    let description = field_signal(cx, sh, Field::Description, "");
    let cooking_time = field_signal(cx, sh, Field::CookingTime, "");
    let image_url = field_signal(cx, sh, Field::ImageUrl, "");
    let ingredients = field_signal(cx, sh, Field::Ingredients, "");
    let instructions = field_signal(cx, sh, Field::Instructions, "");

    let on_submit = move |ev: Event| {
        ev.prevent_default();
        if *busy.get_untracked() {
            debug!("Submission already in flight");
            return;
        }
        info!("Submitting new recipe");
        let draft = draft.get_untracked();
        let client = client.clone();
        let navigator = navigator.clone();
        spawn_local_scoped(cx, async move {
            let submission = Submission::new(client.as_ref(), navigator.as_ref())
                .with_redirect_delay(redirect_delay);
            match submission
                .run(draft.as_ref(), |msg| sh.dispatch(cx, msg))
                .await
            {
                Ok(()) => debug!("Submission finished"),
                Err(err) => debug!(?err, "Submission finished with an error"),
            }
        });
    };

    view! {cx,
        (match error.get().as_ref() {
            Some(msg) => {
                let message = msg.clone();
                view! {cx, StatusBanner(kind=BannerKind::Error, message=message) }
            }
            None => View::empty(),
        })
        (if *success.get() {
            view! {cx, StatusBanner(kind=BannerKind::Success, message=SUCCESS_MESSAGE.to_owned()) }
        } else {
            View::empty()
        })
        form(class="recipe-form", on:submit=on_submit) {
            div(class="row") {
                div(class="grow") {
                    label(for=Field::Title.name()) { "Recipe Title " span(class="required") { "*" } }
                    input(type="text", id=Field::Title.name(), name=Field::Title.name(), required=true,
                        placeholder="e.g., Spicy Chicken Curry",
                        bind:value=title)
                }
                div {
                    label(for=Field::Category.name()) { "Category" }
                    select(id=Field::Category.name(), name=Field::Category.name(), bind:value=category) {
                        Indexed(
                            iterable=categories,
                            view=|cx, cat| if cat == Category::default() {
                                view! {cx, option(value=cat.as_str(), selected=true) { (cat.as_str()) } }
                            } else {
                                view! {cx, option(value=cat.as_str()) { (cat.as_str()) } }
                            },
                        )
                    }
                }
            }
            div {
                label(for=Field::Description.name()) { "Description " span(class="optional") { "(optional)" } }
                textarea(id=Field::Description.name(), name=Field::Description.name(), rows="3",
                    placeholder="Briefly describe your dish...",
                    bind:value=description)
            }
            div(class="row") {
                div {
                    label(for=Field::CookingTime.name()) { "Cooking Time (minutes) " span(class="required") { "*" } }
                    input(type="number", id=Field::CookingTime.name(), name=Field::CookingTime.name(),
                        min="1", required=true,
                        placeholder="e.g., 45",
                        bind:value=cooking_time)
                }
                div {
                    label(for=Field::ImageUrl.name()) { "Image URL " span(class="required") { "*" } }
                    input(type="url", id=Field::ImageUrl.name(), name=Field::ImageUrl.name(), required=true,
                        placeholder="https://example.com/image.jpg",
                        bind:value=image_url)
                }
            }
            div {
                label(for=Field::Ingredients.name()) { "Ingredients " span(class="required") { "*" } }
                p(class="hint") { "Enter each ingredient on a new line." }
                textarea(id=Field::Ingredients.name(), name=Field::Ingredients.name(), rows="6", required=true,
                    placeholder="2 cups Flour\n1 tsp Sugar\n2 Eggs",
                    bind:value=ingredients)
            }
            div {
                label(for=Field::Instructions.name()) { "Instructions " span(class="required") { "*" } }
                p(class="hint") { "Enter each step on a new line." }
                textarea(id=Field::Instructions.name(), name=Field::Instructions.name(), rows="6", required=true,
                    placeholder="Preheat oven to 350°F.\nMix dry ingredients.\nBake for 30 mins.",
                    bind:value=instructions)
            }
            button(type="submit", disabled=*busy.get(), aria-busy=busy.get().to_string()) {
                (if *busy.get() {
                    view! {cx, span(class="spinner", aria-hidden="true") " Publishing..." }
                } else {
                    view! {cx, "Share Recipe" }
                })
            }
        }
    }
}
