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

//! Value bound policies.
//!
//! A [`ValueBound`] is a zero-sized policy type declaring the legal magnitude range of a family
//! of amounts. Bounds are always statically known, so amounts are generic over them and no
//! dynamic dispatch is involved.
//!
//! Bounds are declared with the [`value_bound!`](crate::value_bound) macro, and bounds whose range
//! lies inside another bound with the [`subset_bound!`](crate::subset_bound) macro:
//!
//! ```
//! use amount_model::{BigUint, subset_bound, types::{UInt256Bound, ValueBound}, value_bound};
//!
//! value_bound! {
//!     /// Whole percentages.
//!     pub struct PercentBound: u64 {
//!         least: 0,
//!         greatest: 100,
//!     }
//! }
//!
//! subset_bound! {
//!     /// Non-zero 256-bit magnitudes.
//!     pub struct NonZeroBound: UInt256Bound {
//!         least: BigUint::from(1u8),
//!     }
//! }
//!
//! assert_eq!(PercentBound::greatest_finite_magnitude(), 100);
//! assert_eq!(
//!     NonZeroBound::greatest_finite_magnitude(),
//!     UInt256Bound::greatest_finite_magnitude(),
//! );
//! ```

use std::fmt::Debug;

use amount_core::correctness::{check_predicate_false, check_predicate_true};

use crate::{error::ValueError, types::magnitude::Magnitude};

/// The static policy defining the legal magnitude range of an amount type.
///
/// Magnitudes are always measured in the smallest denomination
/// ([`Denomination::MIN`](crate::types::Denomination::MIN)).
///
/// `least_normal_magnitude() <= greatest_finite_magnitude()` is a contract of every
/// implementation; [`check_value_bound`] verifies it.
pub trait ValueBound: Copy + Debug + Send + Sync + 'static {
    /// The magnitude type shared by every amount with this bound.
    type Magnitude: Magnitude;

    /// Mirrors the signedness of the magnitude type, so it is `false` for every unsigned
    /// magnitude regardless of whether the amount wrapper carries a sign.
    const IS_SIGNED: bool = <Self::Magnitude as Magnitude>::IS_SIGNED;

    /// Greatest legal magnitude, in the smallest denomination.
    fn greatest_finite_magnitude() -> Self::Magnitude;

    /// Least legal magnitude, in the smallest denomination.
    fn least_normal_magnitude() -> Self::Magnitude;

    /// Checks `value` lies within `[least_normal_magnitude, greatest_finite_magnitude]`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ValueTooBig`] if `value` exceeds the greatest finite magnitude, and
    /// [`ValueError::ValueTooSmall`] if it is below the least normal magnitude.
    fn contains(value: &Self::Magnitude) -> Result<(), ValueError> {
        if *value > Self::greatest_finite_magnitude() {
            return Err(ValueError::ValueTooBig);
        }
        if *value < Self::least_normal_magnitude() {
            return Err(ValueError::ValueTooSmall);
        }
        Ok(())
    }
}

/// A bound whose range is identical to, or narrower than, its [`Superset`](Self::Superset).
///
/// Amounts with a subset bound convert from and into amounts with the superset bound (and the
/// same [`AmountTrait`](crate::types::AmountTrait)).
pub trait SubsetBound: ValueBound {
    /// The bound this bound is declared a subset of.
    type Superset: ValueBound<Magnitude = Self::Magnitude>;

    /// Returns whether the declared range actually lies within the superset's range.
    #[must_use]
    fn is_within_superset() -> bool {
        Self::least_normal_magnitude()
            >= <Self::Superset as ValueBound>::least_normal_magnitude()
            && Self::greatest_finite_magnitude()
                <= <Self::Superset as ValueBound>::greatest_finite_magnitude()
    }
}

/// Checks the bound `B` is well formed (its least magnitude does not exceed its greatest).
///
/// # Errors
///
/// Returns an error if the validation check fails.
pub fn check_value_bound<B: ValueBound>() -> anyhow::Result<()> {
    let least = B::least_normal_magnitude();
    let greatest = B::greatest_finite_magnitude();
    check_predicate_false(
        least > greatest,
        &format!(
            "bound {} has least magnitude {least} greater than greatest magnitude {greatest}",
            std::any::type_name::<B>(),
        ),
    )
}

/// Checks the subset bound `B` is well formed and lies within its superset.
///
/// # Errors
///
/// Returns an error if the validation check fails.
pub fn check_subset_bound<B: SubsetBound>() -> anyhow::Result<()> {
    check_value_bound::<B>()?;
    check_predicate_true(
        B::is_within_superset(),
        &format!(
            "bound {} is not within its superset {}",
            std::any::type_name::<B>(),
            std::any::type_name::<B::Superset>(),
        ),
    )
}

/// Declares a zero-sized [`ValueBound`] policy type.
///
/// Both ends are expressions of the magnitude type, evaluated on every call.
#[macro_export]
macro_rules! value_bound {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $magnitude:ty {
            least: $least:expr,
            greatest: $greatest:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::types::bound::ValueBound for $name {
            type Magnitude = $magnitude;

            #[inline]
            fn greatest_finite_magnitude() -> Self::Magnitude {
                $greatest
            }

            #[inline]
            fn least_normal_magnitude() -> Self::Magnitude {
                $least
            }
        }
    };
}

/// Declares a zero-sized [`SubsetBound`] policy type of the given superset.
///
/// Ends that are not overridden are delegated to the superset.
#[macro_export]
macro_rules! subset_bound {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $superset:ty {
            $(least: $least:expr,)?
            $(greatest: $greatest:expr,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::types::bound::ValueBound for $name {
            type Magnitude = <$superset as $crate::types::bound::ValueBound>::Magnitude;

            #[inline]
            fn greatest_finite_magnitude() -> Self::Magnitude {
                $crate::__bound_or_superset!(
                    <$superset as $crate::types::bound::ValueBound>::greatest_finite_magnitude();
                    $($greatest)?
                )
            }

            #[inline]
            fn least_normal_magnitude() -> Self::Magnitude {
                $crate::__bound_or_superset!(
                    <$superset as $crate::types::bound::ValueBound>::least_normal_magnitude();
                    $($least)?
                )
            }
        }

        impl $crate::types::bound::SubsetBound for $name {
            type Superset = $superset;
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bound_or_superset {
    ($superset:expr;) => {
        $superset
    };
    ($superset:expr; $value:expr) => {
        $value
    };
}
