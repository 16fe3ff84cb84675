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

//! Error types for amount construction.

/// The recoverable failure of constructing an amount from a raw magnitude.
///
/// Arithmetic on already validated amounts never returns this error: a result outside the bound
/// is a programming error and panics instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValueError {
    /// The magnitude is greater than the bound's greatest finite magnitude.
    #[error("value too big: greater than the greatest finite magnitude of the bound")]
    ValueTooBig,
    /// The magnitude is less than the bound's least normal magnitude.
    #[error("value too small: less than the least normal magnitude of the bound")]
    ValueTooSmall,
    /// Rescaling to the smallest denomination does not fit the fixed-width magnitude type.
    #[error("value overflowed its magnitude type when rescaled from exponent {exponent}")]
    Overflow { exponent: i32 },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ValueError::ValueTooBig, "value too big")]
    #[case(ValueError::ValueTooSmall, "value too small")]
    #[case(ValueError::Overflow { exponent: -15 }, "rescaled from exponent -15")]
    fn test_display(#[case] error: ValueError, #[case] expected: &str) {
        assert!(error.to_string().contains(expected));
    }
}
