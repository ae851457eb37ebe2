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
use std::cell::Cell;

use chrono::Duration;
use tracing::{debug, error, instrument};

use client_api::Navigator;

use crate::js_lib;

/// Navigates by changing the window location. Only one delayed navigation is
/// ever pending.
#[derive(Debug, Default)]
pub struct BrowserNavigator {
    pending: Cell<Option<i32>>,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

fn go_to(path: &str) {
    if let Err(err) = js_lib::navigate_to_path(path) {
        error!(?err, path, "Unable to navigate");
    }
}

impl Navigator for BrowserNavigator {
    #[instrument(skip(self))]
    fn navigate(&self, path: &str) {
        self.cancel_pending();
        go_to(path);
    }

    #[instrument(skip(self))]
    fn navigate_after(&self, path: &str, delay: Duration) {
        self.cancel_pending();
        let path = path.to_owned();
        let delay_ms = delay.num_milliseconds().clamp(0, i32::MAX as i64) as i32;
        match js_lib::set_timeout(move || go_to(&path), delay_ms) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => error!(?err, "Unable to schedule navigation"),
        }
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.take() {
            debug!(handle, "Cancelling scheduled navigation");
            js_lib::clear_timeout(handle);
        }
    }
}
