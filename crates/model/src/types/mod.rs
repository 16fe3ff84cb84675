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

//! Value types for bounded amounts.
//!
//! This module provides immutable value types for quantities that must stay inside a declared
//! range: [`UnsignedAmount`] and [`SignedAmount`]. Both are parameterized by a [`ValueBound`]
//! policy and an [`AmountTrait`] marker, and both store their magnitude at the canonical
//! [`Denomination::MIN`].
//!
//! # Immutability
//!
//! All value types are **immutable** - once constructed, their values cannot change.
//! Arithmetic operations return new instances rather than modifying existing ones; the
//! assignment operators replace the whole value.
//!
//! # Arithmetic operations
//!
//! | Operation                     | Result           | Notes                                     |
//! |-------------------------------|------------------|-------------------------------------------|
//! | `UnsignedAmount + UnsignedAmount` | `UnsignedAmount` | Panics if the sum leaves the bound.   |
//! | `UnsignedAmount - UnsignedAmount` | `UnsignedAmount` | Panics if `rhs > lhs`.                |
//! | `UnsignedAmount * UnsignedAmount` | `UnsignedAmount` | Panics if the product leaves the bound. |
//! | `SignedAmount + SignedAmount` | `SignedAmount`   | Sign-aware, panics if the bound is left.  |
//! | `SignedAmount - SignedAmount` | `SignedAmount`   | `a + (-b)`.                               |
//! | `SignedAmount * SignedAmount` | `SignedAmount`   | Plus iff the signs match.                 |
//!
//! Every operator has a `checked_*` counterpart returning `None` where the operator panics.
//! Division, remainder and bitwise operators are not provided.
//!
//! # Constraints
//!
//! - Construction rescales by the denomination and validates against the bound, returning a
//!   [`ValueError`](crate::ValueError) on failure.
//! - A [`SignedAmount`] with zero magnitude always has [`Sign::Plus`].
//! - Converting between a [`SubsetBound`] amount and its superset amount must always succeed;
//!   a failure means the subset was declared incorrectly and panics.

pub mod amount;
pub mod bound;
pub mod denomination;
pub mod magnitude;
pub mod presets;
pub mod signed;
pub mod unsigned;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use amount::{AmountTrait, GranularityTrait, NoTrait, SupplyTrait, TokenTrait};
pub use bound::{SubsetBound, ValueBound, check_subset_bound, check_value_bound};
pub use denomination::{Denomination, MAX_EXPONENT, MIN_EXPONENT};
pub use magnitude::Magnitude;
pub use presets::{
    Int256, Int256Bound, NonNegativeSupply, NonNegativeSupplyBound, PositiveSupply,
    PositiveSupplyBound, UInt256, UInt256Bound, UInt256NonZero, UInt256NonZeroBound,
};
pub use signed::{Sign, SignedAmount};
pub use unsigned::UnsignedAmount;
