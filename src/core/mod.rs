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

//! src/core/mod.rs
//!
//! Core keymap building logic
//!
//! This module contains the data structures and rendering for keymaps:
//! - Value types for operators, operands and command arguments
//! - Context conditions and the bindings that own them
//! - Keymap documents with common context and default scope
//! - Canonical JSON rendering
//!
//! Nothing here touches the filesystem; writing files lives in `config`.

pub mod binding;
pub mod context;
pub mod error;
pub mod json;
pub mod keymap;
pub mod types;
pub mod validator;

pub use binding::{bind, Binding, When};
pub use context::{context, Context};
pub use error::KeymapError;
pub use keymap::Keymap;
pub use types::*;

#[cfg(test)]
mod tests;
