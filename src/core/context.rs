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

//! src/core/context.rs
//!
//! Context conditions
//!
//! A context is a single predicate gating a binding: a key to query, an
//! operator, an operand and a match scope. The scope is kept as
//! `Option<bool>` and only resolved when a keymap is rendered, so an
//! unscoped condition picks up whatever default its keymap carries.
//!
//! # Example
//! ```
//! use sublime_keymap::core::context;
//!
//! let ctx = context("selector").all().equal("text.asciidoc");
//! assert_eq!(ctx.match_all(), Some(true));
//! ```

use std::fmt;

use crate::core::{
    error::KeymapError,
    json,
    types::{Operand, Operator},
};

/// A condition that must hold for a binding to fire
#[derive(Clone, Debug, PartialEq)]
pub struct Context {
    key: String,
    operator: Operator,
    operand: Option<Operand>,
    match_all: Option<bool>,
}

/// Shorthand for [`Context::new`]
pub fn context(key: impl Into<String>) -> Context {
    Context::new(key)
}

impl Context {
    /// Creates a condition querying `key`
    ///
    /// The operator starts as `equal`, with no operand and no scope.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator: Operator::default(),
            operand: None,
            match_all: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> Option<&Operand> {
        self.operand.as_ref()
    }

    /// Explicit scope, if one was set
    pub fn match_all(&self) -> Option<bool> {
        self.match_all
    }

    /// Effective scope under a keymap whose default is `default`
    pub fn resolve_match_all(&self, default: Option<bool>) -> Option<bool> {
        self.match_all.or(default)
    }

    /// Require the test to succeed for all selections
    pub fn all(mut self) -> Self {
        self.match_all = Some(true);
        self
    }

    /// Require the test to succeed for at least one selection
    pub fn any(mut self) -> Self {
        self.match_all = Some(false);
        self
    }

    /// Sets operator and operand together
    pub fn with_operator(mut self, operator: Operator, operand: impl Into<Operand>) -> Self {
        self.operator = operator;
        self.operand = Some(operand.into());
        self
    }

    /// Sets the operator by name
    ///
    /// # Errors
    ///
    /// Returns `KeymapError::UnknownOperator` if `name` is not one of the
    /// names in [`Operator::ALL`]; the condition is left untouched.
    pub fn set_operator(&mut self, name: &str) -> Result<&mut Self, KeymapError> {
        self.operator = name.parse()?;
        Ok(self)
    }

    pub fn set_operand(&mut self, operand: impl Into<Operand>) -> &mut Self {
        self.operand = Some(operand.into());
        self
    }

    pub fn set_match_all(&mut self, match_all: bool) -> &mut Self {
        self.match_all = Some(match_all);
        self
    }

    pub fn equal(self, operand: impl Into<Operand>) -> Self {
        self.with_operator(Operator::Equal, operand)
    }

    pub fn not_equal(self, operand: impl Into<Operand>) -> Self {
        self.with_operator(Operator::NotEqual, operand)
    }

    pub fn regex_match(self, pattern: impl Into<Operand>) -> Self {
        self.with_operator(Operator::RegexMatch, pattern)
    }

    pub fn not_regex_match(self, pattern: impl Into<Operand>) -> Self {
        self.with_operator(Operator::NotRegexMatch, pattern)
    }

    pub fn regex_contains(self, pattern: impl Into<Operand>) -> Self {
        self.with_operator(Operator::RegexContains, pattern)
    }

    pub fn not_regex_contains(self, pattern: impl Into<Operand>) -> Self {
        self.with_operator(Operator::NotRegexContains, pattern)
    }

    /// Shortcut for `equal(true)`
    pub fn is_true(self) -> Self {
        self.equal(true)
    }

    /// Shortcut for `equal(false)`
    pub fn is_false(self) -> Self {
        self.equal(false)
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = json::ContextEntry::new(self, None);
        let rendered = json::render(&entry, None).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
