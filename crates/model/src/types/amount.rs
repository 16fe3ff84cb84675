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

//! Amount trait markers and the shared fatal-error paths of amount arithmetic.

use std::fmt::{Debug, Display};

/// A zero-behavior marker distinguishing amounts of different semantic domains.
///
/// Two amount types that differ only in their trait cannot be combined or converted into each
/// other, even when they share a bound.
pub trait AmountTrait: Copy + Debug + Send + Sync + 'static {}

/// Marker for amounts without a specific domain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoTrait;

/// Marker for granularity amounts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GranularityTrait;

/// Marker for token amounts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenTrait;

/// Marker for supply amounts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SupplyTrait;

impl AmountTrait for NoTrait {}
impl AmountTrait for GranularityTrait {}
impl AmountTrait for TokenTrait {}
impl AmountTrait for SupplyTrait {}

/// Returns the unqualified name of the type `T` without generic arguments, e.g. `UInt256Bound`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}

/// Aborts an arithmetic operation whose result violates the bound of its own type.
#[cold]
#[track_caller]
pub(crate) fn arithmetic_violation(
    operation: &str,
    lhs: &impl Display,
    rhs: &impl Display,
    bound: &str,
) -> ! {
    log::error!("Arithmetic violated bound {bound}: {lhs} {operation} {rhs}");
    panic!("Arithmetic violated bound {bound}: {lhs} {operation} {rhs}")
}

/// Aborts an unsigned subtraction whose right-hand side exceeds its left-hand side.
#[cold]
#[track_caller]
pub(crate) fn subtraction_underflow(lhs: &impl Display, rhs: &impl Display) -> ! {
    log::error!("Overflow: cannot subtract {rhs} from {lhs}");
    panic!("Overflow: cannot subtract {rhs} from {lhs}")
}

/// Aborts when something that must always succeed by construction did not.
#[cold]
#[track_caller]
pub(crate) fn incorrect_implementation_should_always_be_able(
    reason: &str,
    error: impl Display,
) -> ! {
    log::error!("Incorrect implementation: should always be able to {reason}, error: {error}");
    panic!("Incorrect implementation: should always be able to {reason}, error: {error}")
}
