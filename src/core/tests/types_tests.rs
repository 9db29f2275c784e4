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

use crate::core::{
    error::KeymapError,
    types::{Operand, Operator},
};

#[test]
fn test_operator_display() {
    assert_eq!(format!("{}", Operator::Equal), "equal");
    assert_eq!(format!("{}", Operator::NotRegexContains), "not_regex_contains");
}

#[test]
fn test_operator_defaults_to_equal() {
    assert_eq!(Operator::default(), Operator::Equal);
}

#[test]
fn test_operator_parses_every_name() {
    for op in Operator::ALL {
        assert_eq!(op.as_str().parse::<Operator>(), Ok(op));
    }
}

#[test]
fn test_unknown_operator_rejected() {
    assert_eq!(
        "contains".parse::<Operator>(),
        Err(KeymapError::UnknownOperator("contains".to_string()))
    );
    // Names are case-sensitive in keymap files
    assert!("Equal".parse::<Operator>().is_err());
    // `true`/`false` are shortcuts, not operators
    assert!("true".parse::<Operator>().is_err());
}

#[test]
fn test_operator_serializes_snake_case() {
    let json = serde_json::to_string(&Operator::RegexContains).unwrap();
    assert_eq!(json, "\"regex_contains\"");
}

#[test]
fn test_operand_conversions() {
    assert_eq!(Operand::from(true), Operand::Bool(true));
    assert_eq!(Operand::from(42), Operand::Integer(42));
    assert_eq!(Operand::from(7u32), Operand::Integer(7));
    assert_eq!(Operand::from(1.5), Operand::Float(1.5));
    assert_eq!(Operand::from("text.html"), Operand::String("text.html".to_string()));
    assert_eq!(
        Operand::from(String::from("source.rust")),
        Operand::String("source.rust".to_string())
    );
}

#[test]
fn test_operand_serializes_as_native_literal() {
    assert_eq!(serde_json::to_string(&Operand::Bool(false)).unwrap(), "false");
    assert_eq!(serde_json::to_string(&Operand::Integer(-3)).unwrap(), "-3");
    assert_eq!(serde_json::to_string(&Operand::Float(0.5)).unwrap(), "0.5");
    assert_eq!(
        serde_json::to_string(&Operand::from("^_")).unwrap(),
        "\"^_\""
    );
}

#[test]
fn test_operand_display() {
    assert_eq!(format!("{}", Operand::Bool(true)), "true");
    assert_eq!(format!("{}", Operand::from("x")), "\"x\"");
}
