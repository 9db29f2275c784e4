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

//! src/core/keymap.rs
//!
//! Keymap documents
//!
//! A keymap is an ordered list of bindings plus two document-level options:
//! - Common context: conditions appended to every binding's own conditions
//! - Default match_all: scope given to conditions that did not set one
//!
//! Both are applied when the keymap is rendered, never when bindings are
//! added, so they cover every binding no matter when it joined the keymap.
//!
//! # Example
//! ```
//! use sublime_keymap::core::{bind, context, Keymap};
//!
//! let keymap = Keymap::new()
//!     .bind(bind(["super+k", "super+shift+up"])?.to_with("new_pane", [("move", false)]))
//!     .common_context([context("selector").equal("text.asciidoc")]);
//!
//! let json = keymap.to_json()?;
//! assert!(json.contains("\"match_all\": true"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::io::Write;
use std::ops::ShlAssign;
use std::path::Path;

use crate::config::{ConfigError, KeymapFile, FILE_HEADER};
use crate::core::{
    binding::Binding,
    context::Context,
    json::{self, BindingEntry, DEFAULT_INDENT},
};

/// A container of key bindings rendered as one `.sublime-keymap` document
#[derive(Clone, Debug, PartialEq)]
pub struct Keymap {
    bindings: Vec<Binding>,
    common_context: Vec<Context>,
    default_match_all: Option<bool>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl Keymap {
    /// Creates an empty keymap with no common context and `match_all`
    /// defaulting to `true`
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            common_context: Vec::new(),
            default_match_all: Some(true),
        }
    }

    /// Adds a binding (or a finished `when` chain)
    pub fn bind(mut self, binding: impl Into<Binding>) -> Self {
        self.push(binding);
        self
    }

    /// Sets the conditions appended to every binding
    pub fn common_context<I>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = Context>,
    {
        self.common_context = contexts.into_iter().collect();
        self
    }

    /// Sets the scope for conditions that do not specify their own
    ///
    /// `None` leaves such conditions without a `match_all` field.
    pub fn default_match_all(mut self, value: impl Into<Option<bool>>) -> Self {
        self.default_match_all = value.into();
        self
    }

    pub fn common(&self) -> &[Context] {
        &self.common_context
    }

    pub fn match_all_default(&self) -> Option<bool> {
        self.default_match_all
    }

    /// Appends one binding
    pub fn push(&mut self, binding: impl Into<Binding>) -> &mut Self {
        self.bindings.push(binding.into());
        self
    }

    /// Appends bindings in order
    ///
    /// Passing another `Keymap` splices in its resolved bindings, so the
    /// nested keymap keeps its own common context and default scope.
    pub fn extend<I, B>(&mut self, bindings: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Binding>,
    {
        self.bindings.extend(bindings.into_iter().map(Into::into));
        self
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings as declared, without common context or defaults applied
    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    /// Bindings as they will be written
    ///
    /// Common context is appended to each binding and unscoped conditions
    /// receive the default `match_all`.
    pub fn resolved(&self) -> Vec<Binding> {
        self.bindings
            .iter()
            .cloned()
            .map(|binding| self.resolve(binding))
            .collect()
    }

    fn resolve(&self, mut binding: Binding) -> Binding {
        binding.extend_context(&self.common_context);

        if let Some(default) = self.default_match_all {
            for ctx in binding.context_mut() {
                if ctx.match_all().is_none() {
                    ctx.set_match_all(default);
                }
            }
        }

        binding
    }

    /// Renders the keymap as JSON with the default two-space indent
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.to_json_with_indent(Some(DEFAULT_INDENT))
    }

    /// Renders the keymap as JSON, compact when `indent` is `None`
    pub fn to_json_with_indent(&self, indent: Option<usize>) -> Result<String, serde_json::Error> {
        let entries: Vec<BindingEntry<'_>> = self
            .bindings
            .iter()
            .map(|binding| BindingEntry::new(binding, &self.common_context, self.default_match_all))
            .collect();

        tracing::debug!("Rendering keymap with {} bindings", entries.len());
        json::render(&entries, indent)
    }

    /// Writes the generated-file header, the JSON and a trailing newline
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the writer fails.
    pub fn dump<W: Write>(&self, mut writer: W) -> Result<(), ConfigError> {
        let contents = self.render_file()?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Atomically writes the keymap file to `path`
    ///
    /// Produces exactly the bytes [`Keymap::dump`] would.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` if the parent directory does not exist
    /// - `ConfigError::WriteFailed` if the atomic write fails
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = KeymapFile::new(path.as_ref().to_path_buf())?;
        file.write(&self.render_file()?)
    }

    fn render_file(&self) -> Result<String, ConfigError> {
        Ok(format!("{}{}\n", FILE_HEADER, self.to_json()?))
    }
}

impl fmt::Display for Keymap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl<B: Into<Binding>> Extend<B> for Keymap {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        Keymap::extend(self, iter);
    }
}

impl<B: Into<Binding>> FromIterator<B> for Keymap {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let mut keymap = Keymap::new();
        keymap.extend(iter);
        keymap
    }
}

impl<B: Into<Binding>> ShlAssign<B> for Keymap {
    fn shl_assign(&mut self, binding: B) {
        self.push(binding);
    }
}

/// Yields resolved bindings, see [`Keymap::resolved`]
impl IntoIterator for Keymap {
    type Item = Binding;
    type IntoIter = std::vec::IntoIter<Binding>;

    fn into_iter(mut self) -> Self::IntoIter {
        let bindings = std::mem::take(&mut self.bindings);
        let resolved: Vec<Binding> = bindings.into_iter().map(|b| self.resolve(b)).collect();
        resolved.into_iter()
    }
}

impl<'a> IntoIterator for &'a Keymap {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
