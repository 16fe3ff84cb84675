// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! This module provides validation checking of function or method conditions.
//!
//! A condition is a predicate which must be true just prior to the execution of
//! some section of code for that code to behave correctly.
//!
//! An [`anyhow::Result`] is returned with a descriptive message when the
//! condition check fails.

use std::fmt::Display;

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
///
/// This constant provides a standard message that can be used to indicate a failure condition
/// when a predicate or condition does not hold true. It is typically used in conjunction with
/// functions like `expect` to provide a consistent error message.
pub const FAILED: &str = "Condition failed";

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the `predicate` is false.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_predicate_false(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the `value` is within the inclusive range `[l, r]`.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_in_range_inclusive<T>(value: T, l: T, r: T, param: &str) -> anyhow::Result<()>
where
    T: PartialOrd + Display,
{
    if value < l || value > r {
        anyhow::bail!("invalid `{param}` {value}, not in range [{l}, {r}]")
    }
    Ok(())
}

/// Checks the string `s` is not empty and not all whitespace.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_valid_string_ascii<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();

    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    }

    if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace")
    }

    if !s.is_ascii() {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{s}'")
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_check_predicate_true() {
        assert!(check_predicate_true(true, "this should not fail").is_ok());
    }

    #[rstest]
    #[should_panic(expected = "the predicate was false")]
    fn test_check_predicate_true_when_false() {
        check_predicate_true(false, "the predicate was false").unwrap();
    }

    #[rstest]
    fn test_check_predicate_false() {
        assert!(check_predicate_false(false, "this should not fail").is_ok());
    }

    #[rstest]
    #[should_panic(expected = "the predicate was true")]
    fn test_check_predicate_false_when_true() {
        check_predicate_false(true, "the predicate was true").unwrap();
    }

    #[rstest]
    #[case(-18, -18, 0)]
    #[case(0, -18, 0)]
    #[case(-15, -18, 0)]
    #[case(5, 5, 5)]
    fn test_check_in_range_inclusive_when_valid(#[case] value: i32, #[case] l: i32, #[case] r: i32) {
        assert!(check_in_range_inclusive(value, l, r, "value").is_ok());
    }

    #[rstest]
    #[case(-19, -18, 0)]
    #[case(1, -18, 0)]
    #[case(4, 5, 5)]
    fn test_check_in_range_inclusive_when_invalid(
        #[case] value: i32,
        #[case] l: i32,
        #[case] r: i32,
    ) {
        assert!(check_in_range_inclusive(value, l, r, "value").is_err());
    }

    #[rstest]
    fn test_check_in_range_inclusive_message() {
        let err = check_in_range_inclusive(1, -18, 0, "exponent").unwrap_err();
        assert_eq!(err.to_string(), "invalid `exponent` 1, not in range [-18, 0]");
    }

    #[rstest]
    #[case("atto")]
    #[case("pico")]
    #[case("a b")]
    fn test_check_valid_string_ascii(#[case] s: &str) {
        assert!(check_valid_string_ascii(s, "name").is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("mikró")]
    fn test_check_valid_string_ascii_when_invalid(#[case] s: &str) {
        assert!(check_valid_string_ascii(s, "name").is_err());
    }
}
