// Copyright 2022 Jeremy Wall
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
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::instrument;

use recipes::{FormEvent, FormState};

pub struct StateMachine;

impl MessageMapper<FormEvent, FormState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, _cx: Scope<'ctx>, msg: FormEvent, original: &'ctx Signal<FormState>) {
        let next = original.get_untracked().apply(msg);
        original.set(next);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, FormState, FormEvent>;

pub fn get_state_handler<'ctx>(cx: Scope<'ctx>, initial: FormState) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine)
}
