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
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Storage};

pub fn navigate_to_path(path: &str) -> Result<(), JsValue> {
    window()
        .expect("No window present")
        .location()
        .set_pathname(path)
}

pub fn get_storage() -> Result<Option<Storage>, JsValue> {
    window().expect("No window present").local_storage()
}

/// Run `f` once after `delay_ms` milliseconds. Returns the handle needed to
/// cancel it with `clear_timeout`.
pub fn set_timeout<F>(f: F, delay_ms: i32) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()
        .expect("No window present")
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
}

pub fn clear_timeout(handle: i32) {
    window()
        .expect("No window present")
        .clear_timeout_with_handle(handle)
}

