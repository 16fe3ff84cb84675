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

//! Bounds, amount types and fixtures for stubbing amounts in tests.

use num_bigint::BigUint;
use rstest::fixture;

use crate::{
    subset_bound,
    types::{
        Int256, Int256Bound, NonNegativeSupply, PositiveSupply, Sign, SignedAmount, TokenTrait,
        UInt256, UInt256Bound, UnsignedAmount, ValueBound,
        presets::SUPPLY_MAX,
    },
    value_bound,
};

value_bound! {
    /// A small fixed-width bound, `[0, 1_000_000]`.
    pub struct TestBound: u64 {
        least: 0,
        greatest: 1_000_000,
    }
}

subset_bound! {
    /// The non-zero part of [`TestBound`].
    pub struct TestNonZeroBound: TestBound {
        least: 1,
    }
}

value_bound! {
    /// The full range of `u64`.
    pub struct TestTokenBound: u64 {
        least: 0,
        greatest: u64::MAX,
    }
}

value_bound! {
    /// A small fixed-width magnitude bound for signed amounts, `[0, 1_000]`.
    pub struct TestSignedBound: u64 {
        least: 0,
        greatest: 1_000,
    }
}

subset_bound! {
    /// The non-zero part of [`TestSignedBound`].
    pub struct TestSignedNonZeroBound: TestSignedBound {
        least: 1,
    }
}

pub type TestAmount = UnsignedAmount<TestBound>;
pub type TestNonZeroAmount = UnsignedAmount<TestNonZeroBound>;
pub type TestTokenAmount = UnsignedAmount<TestTokenBound, TokenTrait>;
pub type TestSignedAmount = SignedAmount<TestSignedBound>;
pub type TestSignedNonZeroAmount = SignedAmount<TestSignedNonZeroBound>;

/// Returns a [`TestSignedAmount`] holding `value` in the smallest denomination.
///
/// # Panics
///
/// Panics if `value` is outside `[-1_000, 1_000]`.
#[must_use]
pub fn signed(value: i64) -> TestSignedAmount {
    let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
    TestSignedAmount::from_magnitude(sign, value.unsigned_abs()).unwrap()
}

#[fixture]
pub fn uint256_max() -> UInt256 {
    UInt256::from_magnitude(UInt256Bound::greatest_finite_magnitude()).unwrap()
}

#[fixture]
pub fn uint256_one() -> UInt256 {
    UInt256::from_magnitude(1u8).unwrap()
}

#[fixture]
pub fn int256_min() -> Int256 {
    Int256::from_magnitude(Sign::Minus, Int256Bound::greatest_finite_magnitude()).unwrap()
}

#[fixture]
pub fn supply_max() -> NonNegativeSupply {
    NonNegativeSupply::from_magnitude(SUPPLY_MAX).unwrap()
}

#[fixture]
pub fn positive_supply_one() -> PositiveSupply {
    PositiveSupply::from_magnitude(BigUint::from(1u8)).unwrap()
}
