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

//! Errors raised while building keymap structures
//!
//! Every error here is reported at the point of construction or mutation,
//! never deferred to rendering.

use thiserror::Error;

/// Construction errors
#[derive(Debug, Error, PartialEq)]
pub enum KeymapError {
    /// Binding created without any key chord
    #[error("A binding needs at least one key chord")]
    NoKeys,

    /// Key chord at the given position is empty or whitespace
    #[error("Key chord #{0} is blank")]
    BlankKey(usize),

    /// Operator name outside the known vocabulary
    #[error("Unknown context operator '{0}'")]
    UnknownOperator(String),
}
