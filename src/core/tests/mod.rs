//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (Operator, Operand)
//! - Key chord validation tests
//! - Context and binding builder tests
//! - Keymap resolution and rendering tests

#[cfg(test)]
mod binding_tests;
#[cfg(test)]
mod types_tests;
