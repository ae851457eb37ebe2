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
use crate::Instruction;

fn is_blank(c: char) -> bool {
    // U+FEFF is not whitespace to char::is_whitespace but browsers treat it as such.
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Split multi-line text into its non-empty lines with surrounding whitespace
/// trimmed. Order is preserved.
pub fn parse_lines(i: &str) -> Vec<String> {
    i.lines()
        .map(|l| l.trim_matches(is_blank))
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn as_ingredient_list(i: &str) -> Vec<String> {
    parse_lines(i)
}

pub fn as_instructions(i: &str) -> Vec<Instruction> {
    parse_lines(i).into_iter().map(Instruction::new).collect()
}
