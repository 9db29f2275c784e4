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

//! src/core/binding.rs
//!
//! Key bindings and the fluent `when` chain
//!
//! A binding maps one or more key chords to a command with optional
//! arguments and an ordered list of context conditions. Conditions are
//! added through a [`When`] handle, which owns the binding until an
//! operator method finishes the condition and hands the binding back:
//!
//! ```
//! use sublime_keymap::core::bind;
//!
//! let binding = bind(["backspace"])?
//!     .to_with("run_macro_file", [("file", "res://Packages/Default/Delete Left Right.sublime-macro")])
//!     .when("setting.auto_match_enabled").any().is_true()
//!     .also("preceding_text").regex_contains("_$")
//!     .also("following_text").regex_contains("^_");
//!
//! assert_eq!(binding.context().len(), 3);
//! # Ok::<(), sublime_keymap::core::KeymapError>(())
//! ```

use serde_json::Value;
use std::fmt;

use crate::core::{
    context::Context,
    error::KeymapError,
    json,
    types::{Args, Operand, Operator},
    validator::validate_keys,
};

/// A single key binding
///
/// # Example
/// ```ignore
/// let binding = bind(["super+k", "super+shift+up"])?.to_with("new_pane", [("move", false)]);
/// // Renders: { "keys": ["super+k", "super+shift+up"], "command": "new_pane", "args": { "move": false } }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    /// Key chords, case-sensitive, modifiers joined with `+`
    keys: Vec<String>,

    /// Sublime Text command name (e.g. "insert_snippet")
    command: Option<String>,

    /// Command arguments in insertion order
    args: Args,

    /// Conditions in declaration order
    context: Vec<Context>,
}

/// Shorthand for [`Binding::new`]
pub fn bind<I, S>(keys: I) -> Result<Binding, KeymapError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Binding::new(keys)
}

impl Binding {
    /// Creates a binding for the given key chords
    ///
    /// # Errors
    ///
    /// - `KeymapError::NoKeys` if `keys` is empty
    /// - `KeymapError::BlankKey` if a chord is empty or whitespace
    pub fn new<I, S>(keys: I) -> Result<Self, KeymapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        validate_keys(&keys)?;

        Ok(Self {
            keys,
            command: None,
            args: Args::new(),
            context: Vec::new(),
        })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn context(&self) -> &[Context] {
        &self.context
    }

    /// Binds the keys to `command` with no arguments
    ///
    /// Replaces any command and arguments set before.
    pub fn to(self, command: impl Into<String>) -> Self {
        self.to_with(command, std::iter::empty::<(String, Value)>())
    }

    /// Binds the keys to `command` with the given arguments
    ///
    /// Replaces any command and arguments set before; the last call wins.
    pub fn to_with<I, K, V>(mut self, command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.command = Some(command.into());
        self.args = args
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self
    }

    /// Adds or overwrites a single argument of the current command
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Starts a new condition on `key`
    pub fn when(self, key: impl Into<String>) -> When {
        When {
            binding: self,
            context: Context::new(key),
        }
    }

    /// Same as [`Binding::when`], reads better after the first condition
    pub fn also(self, key: impl Into<String>) -> When {
        self.when(key)
    }

    /// Same as [`Binding::when`]
    pub fn and(self, key: impl Into<String>) -> When {
        self.when(key)
    }

    /// Appends an already built condition
    pub fn with_context(mut self, context: Context) -> Self {
        self.context.push(context);
        self
    }

    pub(crate) fn extend_context<'a, I>(&mut self, contexts: I)
    where
        I: IntoIterator<Item = &'a Context>,
    {
        self.context.extend(contexts.into_iter().cloned());
    }

    pub(crate) fn context_mut(&mut self) -> &mut [Context] {
        &mut self.context
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = json::BindingEntry::new(self, &[], None);
        let rendered = json::render(&entry, Some(json::DEFAULT_INDENT)).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// A condition being built on a binding
///
/// Returned by [`Binding::when`]. Scope methods keep the handle; operator
/// methods attach the finished condition and return the binding.
#[derive(Clone, Debug, PartialEq)]
#[must_use = "a condition is only attached once an operator method or `end` is called"]
pub struct When {
    binding: Binding,
    context: Context,
}

impl When {
    /// The condition as built so far
    pub fn pending(&self) -> &Context {
        &self.context
    }

    pub fn all(mut self) -> Self {
        self.context = self.context.all();
        self
    }

    pub fn any(mut self) -> Self {
        self.context = self.context.any();
        self
    }

    /// Attaches the condition as it stands
    pub fn end(self) -> Binding {
        self.binding.with_context(self.context)
    }

    /// Finishes the condition with an operator given by name
    ///
    /// # Errors
    ///
    /// Returns `KeymapError::UnknownOperator` for names outside the
    /// operator vocabulary. Nothing is attached in that case.
    pub fn operator(self, name: &str, operand: impl Into<Operand>) -> Result<Binding, KeymapError> {
        let operator: Operator = name.parse()?;
        Ok(self.finish(operator, operand))
    }

    pub fn equal(self, operand: impl Into<Operand>) -> Binding {
        self.finish(Operator::Equal, operand)
    }

    pub fn not_equal(self, operand: impl Into<Operand>) -> Binding {
        self.finish(Operator::NotEqual, operand)
    }

    pub fn regex_match(self, pattern: impl Into<Operand>) -> Binding {
        self.finish(Operator::RegexMatch, pattern)
    }

    pub fn not_regex_match(self, pattern: impl Into<Operand>) -> Binding {
        self.finish(Operator::NotRegexMatch, pattern)
    }

    pub fn regex_contains(self, pattern: impl Into<Operand>) -> Binding {
        self.finish(Operator::RegexContains, pattern)
    }

    pub fn not_regex_contains(self, pattern: impl Into<Operand>) -> Binding {
        self.finish(Operator::NotRegexContains, pattern)
    }

    pub fn is_true(self) -> Binding {
        self.equal(true)
    }

    pub fn is_false(self) -> Binding {
        self.equal(false)
    }

    fn finish(self, operator: Operator, operand: impl Into<Operand>) -> Binding {
        let context = self.context.with_operator(operator, operand);
        self.binding.with_context(context)
    }
}

impl From<When> for Binding {
    fn from(when: When) -> Self {
        when.end()
    }
}
