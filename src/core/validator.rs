// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Structural checks for bindings
//!
//! Only the shape of a binding is checked here. Whether a chord names a real
//! key or a command exists is left to Sublime Text.

use crate::core::error::KeymapError;

/// Validates the key chords of a binding
///
/// A binding needs at least one chord, and no chord may be blank.
pub fn validate_keys<S: AsRef<str>>(keys: &[S]) -> Result<(), KeymapError> {
    if keys.is_empty() {
        return Err(KeymapError::NoKeys);
    }

    match keys.iter().position(|key| key.as_ref().trim().is_empty()) {
        Some(index) => Err(KeymapError::BlankKey(index)),
        None => Ok(()),
    }
}
