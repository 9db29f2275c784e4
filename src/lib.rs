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

//! Sublime Text Keymap Builder
//!
//! A fluent builder for Sublime Text key binding files
//! (`.sublime-keymap`), producing deterministic, pretty-printed JSON.
//!
//! # Features
//!
//! - **Fluent Bindings:** `bind(..).to(..).when(..).also(..)` chains
//! - **Context Conditions:** All Sublime Text operators with `all`/`any` scope
//! - **Common Context:** Conditions shared by every binding in a keymap
//! - **Lazy Defaults:** Unscoped conditions take the keymap's `match_all` at render time
//! - **Canonical Output:** Fixed key order, empty fields omitted
//! - **Atomic Operations:** Safe file writes, never half-written
//!
//! # Architecture
//!
//! - **`core`:** Builders, validation and JSON rendering (no I/O)
//! - **`config`:** Writing keymap files to disk
//!
//! # Examples
//!
//! ## Building a keymap
//!
//! ```
//! use sublime_keymap::{bind, context, Keymap};
//!
//! let keymap = Keymap::new()
//!     .bind(
//!         bind(["backspace"])?
//!             .to_with("run_macro_file", [("file", "res://Packages/Default/Delete Left Right.sublime-macro")])
//!             .when("setting.auto_match_enabled").any().is_true()
//!             .also("preceding_text").regex_contains("_$")
//!             .also("following_text").regex_contains("^_"),
//!     )
//!     .bind(bind(["super+k", "super+shift+up"])?.to_with("new_pane", [("move", false)]))
//!     .common_context([context("selector").equal("text.asciidoc")])
//!     .default_match_all(true);
//!
//! assert_eq!(keymap.len(), 2);
//! println!("{}", keymap.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Writing the keymap file
//!
//! ```no_run
//! use sublime_keymap::{bind, config::KeymapFile, Keymap};
//!
//! let keymap = Keymap::new().bind(bind(["ctrl+alt+n"])?.to("new_window"));
//! let file = KeymapFile::named("Packages/User", "Default")?;
//! keymap.save(file.path())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::{bind, context, Binding, Context, Keymap, KeymapError, Operand, Operator, When};
