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

//! The magnitude primitive underlying every amount.
//!
//! A [`Magnitude`] is a non-negative integer with total ordering, exact checked arithmetic and a
//! zero test. [`BigUint`] is the arbitrary-precision magnitude used by the presets; its checked
//! addition and multiplication never fail. Fixed-width machine integers also qualify, in which
//! case the checked operations report overflow by returning `None`.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_bigint::BigUint;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Unsigned};

/// A non-negative integer usable as the magnitude of an amount.
pub trait Magnitude:
    Clone
    + Debug
    + Display
    + Eq
    + Ord
    + Hash
    + Unsigned
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + From<u8>
    + Send
    + Sync
    + 'static
{
    /// Whether the magnitude type can itself represent negative values.
    const IS_SIGNED: bool = false;

    /// Returns `10^exponent`, or `None` if it cannot be represented.
    #[must_use]
    fn checked_pow10(exponent: u32) -> Option<Self> {
        num_traits::checked_pow(Self::from(10), exponent as usize)
    }
}

impl Magnitude for BigUint {}

impl Magnitude for u64 {}

impl Magnitude for u128 {}
