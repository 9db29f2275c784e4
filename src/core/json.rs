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

//! Canonical JSON rendering
//!
//! Bindings and contexts are rendered through borrowed entry structs so
//! field order is fixed by declaration: `keys, command, args, context` for
//! a binding and `key, operator, operand, match_all` for a context. Absent
//! values and empty collections are left out entirely.

use serde::{ser::Error as _, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::core::{
    binding::Binding,
    context::Context,
    types::{Args, Operand, Operator},
};

/// Indentation used for keymap files
pub const DEFAULT_INDENT: usize = 2;

#[derive(Debug, Serialize)]
pub(crate) struct ContextEntry<'a> {
    key: &'a str,
    operator: Operator,
    #[serde(skip_serializing_if = "Option::is_none")]
    operand: Option<&'a Operand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    match_all: Option<bool>,
}

impl<'a> ContextEntry<'a> {
    pub(crate) fn new(context: &'a Context, default_match_all: Option<bool>) -> Self {
        Self {
            key: context.key(),
            operator: context.operator(),
            operand: context.operand(),
            match_all: context.resolve_match_all(default_match_all),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BindingEntry<'a> {
    keys: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
    #[serde(skip_serializing_if = "no_args")]
    args: &'a Args,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    context: Vec<ContextEntry<'a>>,
}

impl<'a> BindingEntry<'a> {
    /// Entry for `binding` with `common` appended to its own conditions
    pub(crate) fn new(
        binding: &'a Binding,
        common: &'a [Context],
        default_match_all: Option<bool>,
    ) -> Self {
        let context = binding
            .context()
            .iter()
            .chain(common)
            .map(|ctx| ContextEntry::new(ctx, default_match_all))
            .collect();

        Self {
            keys: binding.keys(),
            command: binding.command(),
            args: binding.args(),
            context,
        }
    }
}

fn no_args(args: &&Args) -> bool {
    args.is_empty()
}

/// Serializes `value`, pretty-printed with `indent` spaces or compact if `None`
pub(crate) fn render<T: Serialize + ?Sized>(
    value: &T,
    indent: Option<usize>,
) -> Result<String, serde_json::Error> {
    let Some(width) = indent else {
        return serde_json::to_string(value);
    };

    let indent = " ".repeat(width);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(serde_json::Error::custom)
}
