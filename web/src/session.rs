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
use serde_json::from_str;
use tracing::{debug, error, warn};

use client_api::{Session, UserData};

use crate::js_lib;

const USER_DATA_KEY: &'static str = "user_data";

/// The signed in user as recorded in local storage by the login flow.
#[derive(Debug, Clone, Default)]
pub struct StorageSession {
    user: Option<UserData>,
}

impl StorageSession {
    pub fn load() -> Self {
        let storage = match js_lib::get_storage() {
            Ok(Some(storage)) => storage,
            Ok(None) => {
                warn!("No local storage available");
                return Self::default();
            }
            Err(err) => {
                error!(?err, "Couldn't open local storage");
                return Self::default();
            }
        };
        let user = match storage.get_item(USER_DATA_KEY) {
            Ok(Some(data)) => match from_str::<UserData>(&data) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(?err, "Ignoring unparseable user_data");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                error!(?err, "Couldn't read from storage");
                None
            }
        };
        debug!(user_id = user.as_ref().map(|u| u.user_id.as_str()), "Loaded session");
        Self { user }
    }
}

impl Session for StorageSession {
    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
