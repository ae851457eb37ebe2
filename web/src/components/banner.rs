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

pub const SUCCESS_MESSAGE: &'static str = "Recipe created successfully! Redirecting...";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerKind {
    Error,
    Success,
}

#[derive(Prop)]
pub struct BannerProps {
    pub kind: BannerKind,
    pub message: String,
}

#[component]
pub fn StatusBanner<G: Html>(cx: Scope, props: BannerProps) -> View<G> {
    let BannerProps { kind, message } = props;
    let (class, role) = match kind {
        BannerKind::Error => ("banner error", "alert"),
        BannerKind::Success => ("banner success", "status"),
    };
    view! {cx,
        output(class=class, role=role) {
            p { (message) }
        }
    }
}
