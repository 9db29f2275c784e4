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

use serde_json::json;

use crate::core::{
    binding::{bind, Binding},
    context::context,
    error::KeymapError,
    types::{Operand, Operator},
};

/// Helper to create a binding with a command
fn fire() -> Binding {
    bind(["x"]).unwrap().to("fire")
}

#[test]
fn test_new_keeps_key_order() {
    let binding = Binding::new(["x", "y"]).unwrap();
    assert_eq!(binding.keys(), ["x".to_string(), "y".to_string()]);
    assert_eq!(binding.command(), None);
    assert!(binding.args().is_empty());
    assert!(binding.context().is_empty());
}

#[test]
fn test_bind_without_keys_fails() {
    let keys: Vec<String> = Vec::new();
    assert_eq!(bind(keys), Err(KeymapError::NoKeys));
}

#[test]
fn test_bind_with_blank_key_fails() {
    assert_eq!(bind(["ctrl+k", ""]), Err(KeymapError::BlankKey(1)));
}

#[test]
fn test_to_sets_command() {
    assert_eq!(fire().command(), Some("fire"));
    assert!(fire().args().is_empty());
}

#[test]
fn test_to_with_stores_args_in_order() {
    let binding = bind(["x"]).unwrap().to_with("fire", [("b", 2), ("a", 1)]);

    let names: Vec<&str> = binding.args().keys().map(String::as_str).collect();
    assert_eq!(names, ["b", "a"]);
    assert_eq!(binding.args()["a"], json!(1));
}

#[test]
fn test_last_to_wins() {
    let binding = bind(["x"])
        .unwrap()
        .to_with("fire", [("a", 1)])
        .to_with("water", [("b", true)]);

    assert_eq!(binding.command(), Some("water"));
    assert_eq!(binding.args().len(), 1);
    assert_eq!(binding.args()["b"], json!(true));

    // A bare `to` clears earlier args as well
    let cleared = binding.to("earth");
    assert!(cleared.args().is_empty());
}

#[test]
fn test_arg_adds_and_overwrites() {
    let binding = fire().arg("by", "lines").arg("forward", true).arg("by", "pages");

    assert_eq!(binding.args().len(), 2);
    assert_eq!(binding.args()["by"], json!("pages"));
}

#[test]
fn test_args_accept_nested_values() {
    let binding = bind(["x"])
        .unwrap()
        .to_with("set_layout", [("cols", json!([0.0, 0.5, 1.0]))]);

    assert_eq!(binding.args()["cols"], json!([0.0, 0.5, 1.0]));
}

#[test]
fn test_when_returns_pending_context() {
    let when = fire().when("foo");
    assert_eq!(when.pending().key(), "foo");
    assert_eq!(when.pending().operator(), Operator::Equal);
}

#[test]
fn test_operator_attaches_context_and_returns_binding() {
    let binding = fire().when("foo").regex_contains("^_");

    assert_eq!(binding.context().len(), 1);
    assert_eq!(binding.context()[0], context("foo").regex_contains("^_"));
    assert_eq!(binding.command(), Some("fire"));
}

#[test]
fn test_chained_conditions_keep_order() {
    let binding = fire()
        .when("foo").any().is_true()
        .also("bar").is_true()
        .and("baz").all().is_false();

    let keys: Vec<&str> = binding.context().iter().map(|c| c.key()).collect();
    assert_eq!(keys, ["foo", "bar", "baz"]);

    let scopes: Vec<Option<bool>> = binding.context().iter().map(|c| c.match_all()).collect();
    assert_eq!(scopes, [Some(false), None, Some(true)]);
}

#[test]
fn test_when_also_and_are_equivalent() {
    let a = fire().when("foo").equal(1);
    let b = fire().also("foo").equal(1);
    let c = fire().and("foo").equal(1);

    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_end_attaches_key_only_condition() {
    let binding = fire().when("foo").end();

    assert_eq!(binding.context(), [context("foo")]);
}

#[test]
fn test_when_converts_into_binding() {
    let binding: Binding = fire().when("foo").any().into();
    assert_eq!(binding.context(), [context("foo").any()]);
}

#[test]
fn test_operator_by_name() {
    let binding = fire().when("foo").operator("not_regex_match", "x+").unwrap();
    assert_eq!(binding.context()[0].operator(), Operator::NotRegexMatch);
    assert_eq!(binding.context()[0].operand(), Some(&Operand::from("x+")));
}

#[test]
fn test_operator_by_unknown_name_fails() {
    let result = fire().when("foo").operator("like", "x");
    assert_eq!(result, Err(KeymapError::UnknownOperator("like".to_string())));
}

#[test]
fn test_with_context_appends_prebuilt() {
    let binding = fire()
        .when("foo").is_true()
        .with_context(context("selector").equal("source.rust"));

    assert_eq!(binding.context().len(), 2);
    assert_eq!(binding.context()[1].key(), "selector");
}

#[test]
fn test_equality() {
    let first = bind(["x", "y"]).unwrap().to_with("fire", [("a", 42)]);
    let second = bind(["x", "y"]).unwrap().to_with("fire", [("a", 42)]);
    assert_eq!(first, second);

    assert_eq!(first.clone().when("foo").end(), second.clone().when("foo").end());

    assert_ne!(bind(["x", "y"]).unwrap(), bind(["x"]).unwrap());
    assert_ne!(fire(), bind(["x"]).unwrap().to("water"));
    assert_ne!(fire().when("a").is_true(), fire().when("a").is_false());
}
