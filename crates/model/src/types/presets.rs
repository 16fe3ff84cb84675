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

//! Preset bounds and amount types.
//!
//! All magnitudes are [`BigUint`] and measured in the smallest denomination.

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    subset_bound,
    types::{
        amount::{NoTrait, SupplyTrait},
        signed::SignedAmount,
        unsigned::UnsignedAmount,
    },
    value_bound,
};

/// The greatest value of a 256-bit unsigned integer, `2^256 - 1`.
pub static UINT256_MAX: LazyLock<BigUint> = LazyLock::new(|| (BigUint::one() << 256u32) - 1u32);

/// The greatest value of a 256-bit signed integer, `2^255 - 1`.
pub static INT256_MAX: LazyLock<BigUint> = LazyLock::new(|| (BigUint::one() << 255u32) - 1u32);

/// The greatest supply, in the smallest denomination.
pub const SUPPLY_MAX: u64 = 21_000_000;

value_bound! {
    /// The range of a 256-bit unsigned integer, `[0, 2^256 - 1]`.
    pub struct UInt256Bound: BigUint {
        least: BigUint::zero(),
        greatest: UINT256_MAX.clone(),
    }
}

subset_bound! {
    /// The non-zero part of [`UInt256Bound`], `[1, 2^256 - 1]`.
    pub struct UInt256NonZeroBound: UInt256Bound {
        least: BigUint::one(),
    }
}

value_bound! {
    /// The magnitude range of a 256-bit signed integer, `[0, 2^255 - 1]`.
    ///
    /// The range is symmetric around zero, so `-2^255` is not representable.
    pub struct Int256Bound: BigUint {
        least: BigUint::zero(),
        greatest: INT256_MAX.clone(),
    }
}

value_bound! {
    /// Supplies including zero, `[0, 21_000_000]`.
    pub struct NonNegativeSupplyBound: BigUint {
        least: BigUint::zero(),
        greatest: BigUint::from(SUPPLY_MAX),
    }
}

subset_bound! {
    /// Supplies excluding zero, `[1, 21_000_000]`.
    pub struct PositiveSupplyBound: NonNegativeSupplyBound {
        least: BigUint::one(),
    }
}

/// A 256-bit unsigned amount.
pub type UInt256 = UnsignedAmount<UInt256Bound, NoTrait>;

/// A non-zero 256-bit unsigned amount.
pub type UInt256NonZero = UnsignedAmount<UInt256NonZeroBound, NoTrait>;

/// A 256-bit signed amount.
pub type Int256 = SignedAmount<Int256Bound, NoTrait>;

/// A supply which may be zero.
pub type NonNegativeSupply = UnsignedAmount<NonNegativeSupplyBound, SupplyTrait>;

/// A supply which is never zero.
pub type PositiveSupply = UnsignedAmount<PositiveSupplyBound, SupplyTrait>;
