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

//! Decimal denominations used to express magnitudes at human-facing scales.

use std::fmt::Display;

use amount_core::correctness::{FAILED, check_in_range_inclusive, check_valid_string_ascii};
use num_traits::CheckedMul;

use crate::{error::ValueError, types::magnitude::Magnitude};

/// The exponent of the smallest (canonical) denomination, 10^-18.
pub const MIN_EXPONENT: i32 = -18;

/// The exponent of the largest supported denomination, 10^0.
pub const MAX_EXPONENT: i32 = 0;

/// A named decimal scale at which a magnitude may be supplied.
///
/// Every amount stores its magnitude at [`Denomination::MIN`]; a denomination is only used at
/// construction time to rescale the supplied magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Denomination {
    exponent: i32,
    name: &'static str,
}

impl Denomination {
    /// 10^-18, the canonical denomination.
    pub const ATTO: Self = Self {
        exponent: MIN_EXPONENT,
        name: "atto",
    };

    /// 10^-15, three decimal places above [`Self::ATTO`].
    pub const PICO: Self = Self {
        exponent: -15,
        name: "pico",
    };

    /// The smallest denomination, in which all magnitudes are stored.
    pub const MIN: Self = Self::ATTO;

    /// Creates a new [`Denomination`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `exponent` is not in the range [`MIN_EXPONENT`, `MAX_EXPONENT`].
    /// - `name` is empty, all whitespace or not ASCII.
    pub fn new_checked(exponent: i32, name: &'static str) -> anyhow::Result<Self> {
        check_in_range_inclusive(exponent, MIN_EXPONENT, MAX_EXPONENT, stringify!(exponent))?;
        check_valid_string_ascii(name, stringify!(name))?;
        Ok(Self { exponent, name })
    }

    /// Creates a new [`Denomination`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` or `name` is invalid, see [`Self::new_checked`].
    #[must_use]
    pub fn new(exponent: i32, name: &'static str) -> Self {
        Self::new_checked(exponent, name).expect(FAILED)
    }

    /// Returns the decimal exponent of this denomination.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Returns the display name of this denomination.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns whether this is the smallest (canonical) denomination.
    #[must_use]
    pub const fn is_smallest(&self) -> bool {
        self.exponent == MIN_EXPONENT
    }

    /// Expresses `value`, given in this denomination, in the smallest denomination.
    ///
    /// Scaling multiplies by `10^(exponent - MIN_EXPONENT)` using exact integer arithmetic.
    /// No bound is checked here.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Overflow`] if the scale factor or the rescaled value cannot be
    /// represented by the magnitude type (only possible for fixed-width magnitudes).
    pub fn express_in_smallest<M: Magnitude>(&self, value: M) -> Result<M, ValueError> {
        if self.is_smallest() {
            return Ok(value);
        }

        let overflow = ValueError::Overflow {
            exponent: self.exponent,
        };
        let delta = self.exponent.abs_diff(MIN_EXPONENT);
        let factor = M::checked_pow10(delta).ok_or(overflow)?;
        value.checked_mul(&factor).ok_or(overflow)
    }
}

impl Default for Denomination {
    fn default() -> Self {
        Self::MIN
    }
}

impl Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_min_is_atto() {
        assert_eq!(Denomination::MIN, Denomination::ATTO);
        assert_eq!(Denomination::default(), Denomination::ATTO);
        assert!(Denomination::MIN.is_smallest());
        assert!(!Denomination::PICO.is_smallest());
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Denomination::ATTO.to_string(), "atto");
        assert_eq!(Denomination::PICO.to_string(), "pico");
    }

    #[rstest]
    fn test_smallest_is_identity() {
        let value = BigUint::from(123_456_789u64);
        assert_eq!(
            Denomination::ATTO.express_in_smallest(value.clone()),
            Ok(value)
        );
    }

    #[rstest]
    #[case(Denomination::PICO, 15, 15_000)]
    #[case(Denomination::PICO, 0, 0)]
    #[case(Denomination::new(-12, "nano"), 7, 7_000_000)]
    #[case(Denomination::new(0, "whole"), 1, 1_000_000_000_000_000_000)]
    fn test_express_in_smallest(
        #[case] denomination: Denomination,
        #[case] value: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(denomination.express_in_smallest(value), Ok(expected));
    }

    #[rstest]
    fn test_express_in_smallest_is_exact_beyond_f64() {
        // 2^200 loses its low digits through an f64 round trip
        let value = BigUint::from(1u8) << 200u32;
        let whole = Denomination::new(0, "whole");
        let expected = &value * BigUint::from(10u8).pow(18);
        assert_eq!(whole.express_in_smallest(value), Ok(expected));
    }

    #[rstest]
    fn test_express_in_smallest_fixed_width_overflow() {
        let whole = Denomination::new(0, "whole");
        assert_eq!(
            whole.express_in_smallest(u64::MAX),
            Err(ValueError::Overflow { exponent: 0 })
        );
    }

    #[rstest]
    #[case(MIN_EXPONENT - 1)]
    #[case(MAX_EXPONENT + 1)]
    fn test_new_checked_with_exponent_out_of_range(#[case] exponent: i32) {
        assert!(Denomination::new_checked(exponent, "invalid").is_err());
    }

    #[rstest]
    #[should_panic(expected = "invalid string for 'name'")]
    fn test_new_with_empty_name_panics() {
        let _ = Denomination::new(-9, "");
    }
}
