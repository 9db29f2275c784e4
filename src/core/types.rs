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

//! src/core/types.rs
//!
//! Value types shared by contexts and bindings
//!
//! This module defines the small vocabulary a keymap is built from:
//! - `Operator`: How a context's value is compared with its operand
//! - `Operand`: The literal a context's value is compared against
//! - `Args`: Named command arguments, kept in insertion order
//!
//! Everything here serializes to the literal JSON form Sublime Text reads.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::error::KeymapError;

/// Command arguments
///
/// Backed by `serde_json::Map` with `preserve_order`, so arguments render
/// in the order they were given.
pub type Args = serde_json::Map<String, serde_json::Value>;

/// Context operator
///
/// The closed set of comparison operators understood by Sublime Text.
/// `true`/`false` checks are not operators of their own: they are
/// `Equal` with a boolean operand.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Value equals the operand
    #[default]
    Equal,
    /// Value differs from the operand
    NotEqual,
    /// Value fully matches the pattern
    RegexMatch,
    /// Value does not fully match the pattern
    NotRegexMatch,
    /// Value contains a match for the pattern
    RegexContains,
    /// Value contains no match for the pattern
    NotRegexContains,
}

impl Operator {
    /// Every operator, in vocabulary order
    pub const ALL: [Operator; 6] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::RegexMatch,
        Operator::NotRegexMatch,
        Operator::RegexContains,
        Operator::NotRegexContains,
    ];

    /// Name as written in a keymap file
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
            Operator::RegexMatch => "regex_match",
            Operator::NotRegexMatch => "not_regex_match",
            Operator::RegexContains => "regex_contains",
            Operator::NotRegexContains => "not_regex_contains",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = KeymapError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| KeymapError::UnknownOperator(name.to_string()))
    }
}

/// Operand of a context condition
///
/// Rendered as the bare JSON literal (`true`, `42`, `"text.html"`).
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Operand::Bool(value) => serializer.serialize_bool(*value),
            Operand::Integer(value) => serializer.serialize_i64(*value),
            Operand::Float(value) => serializer.serialize_f64(*value),
            Operand::String(value) => serializer.serialize_str(value),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Bool(value) => write!(f, "{}", value),
            Operand::Integer(value) => write!(f, "{}", value),
            Operand::Float(value) => write!(f, "{}", value),
            Operand::String(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::String(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::String(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::String(value.clone())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}
