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

//! Represents a bounded, non-negative amount.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

use amount_core::correctness::FAILED;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Zero};

use crate::{
    error::ValueError,
    types::{
        amount::{
            AmountTrait, NoTrait, arithmetic_violation,
            incorrect_implementation_should_always_be_able, short_type_name,
            subtraction_underflow,
        },
        bound::{SubsetBound, ValueBound},
        denomination::Denomination,
    },
};

/// Represents a non-negative amount within the range of the bound `B`.
///
/// The magnitude is always stored in the smallest denomination ([`Denomination::MIN`]) and is
/// guaranteed to satisfy `B::least_normal_magnitude() <= magnitude <= B::greatest_finite_magnitude()`.
///
/// Ordering and equality compare magnitudes only.
pub struct UnsignedAmount<B: ValueBound, T: AmountTrait = NoTrait> {
    magnitude: B::Magnitude,
    _marker: PhantomData<(B, T)>,
}

impl<B: ValueBound, T: AmountTrait> UnsignedAmount<B, T> {
    /// Creates a new [`UnsignedAmount`] from a `magnitude` expressed in `denomination`.
    ///
    /// The magnitude is rescaled to the smallest denomination and then validated against `B`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The rescaled magnitude is outside the bound ([`ValueError::ValueTooBig`] or
    ///   [`ValueError::ValueTooSmall`]).
    /// - The rescaled magnitude cannot be represented ([`ValueError::Overflow`]).
    pub fn new_checked(
        magnitude: impl Into<B::Magnitude>,
        denomination: Denomination,
    ) -> Result<Self, ValueError> {
        Self::validated(magnitude.into(), denomination)
    }

    /// Creates a new [`UnsignedAmount`] from a `magnitude` in the smallest denomination.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude is outside the bound.
    pub fn from_magnitude(magnitude: impl Into<B::Magnitude>) -> Result<Self, ValueError> {
        Self::validated(magnitude.into(), Denomination::MIN)
    }

    /// Creates a new [`UnsignedAmount`] from a `magnitude` expressed in `denomination`.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude is invalid, see [`Self::new_checked`].
    pub fn new(magnitude: impl Into<B::Magnitude>, denomination: Denomination) -> Self {
        Self::new_checked(magnitude, denomination).expect(FAILED)
    }

    fn validated(magnitude: B::Magnitude, denomination: Denomination) -> Result<Self, ValueError> {
        let magnitude = denomination.express_in_smallest(magnitude)?;
        B::contains(&magnitude).inspect_err(|e| {
            log::trace!(
                "Rejected magnitude {magnitude} for {}: {e}",
                short_type_name::<B>()
            );
        })?;

        Ok(Self {
            magnitude,
            _marker: PhantomData,
        })
    }

    fn within_bound(magnitude: B::Magnitude) -> Option<Self> {
        B::contains(&magnitude).ok()?;
        Some(Self {
            magnitude,
            _marker: PhantomData,
        })
    }

    /// Returns the magnitude in the smallest denomination.
    #[must_use]
    pub fn magnitude(&self) -> &B::Magnitude {
        &self.magnitude
    }

    /// Consumes the amount, returning its magnitude in the smallest denomination.
    #[must_use]
    pub fn into_magnitude(self) -> B::Magnitude {
        self.magnitude
    }

    /// Returns the denomination the magnitude is stored in, always [`Denomination::MIN`].
    #[must_use]
    pub fn denomination(&self) -> Denomination {
        Denomination::MIN
    }

    /// Returns whether the magnitude is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Checked addition, returning `None` if the sum is outside the bound.
    #[must_use]
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Self::within_bound(self.magnitude.checked_add(&rhs.magnitude)?)
    }

    /// Checked subtraction, returning `None` if `rhs > self` or the difference is outside the
    /// bound.
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if rhs.magnitude > self.magnitude {
            return None;
        }
        Self::within_bound(self.magnitude.checked_sub(&rhs.magnitude)?)
    }

    /// Checked multiplication, returning `None` if the product is outside the bound.
    #[must_use]
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Self::within_bound(self.magnitude.checked_mul(&rhs.magnitude)?)
    }

    fn add_or_panic(&self, rhs: &Self) -> Self {
        self.checked_add(rhs)
            .unwrap_or_else(|| arithmetic_violation("+", self, rhs, short_type_name::<B>()))
    }

    fn sub_or_panic(&self, rhs: &Self) -> Self {
        if rhs.magnitude > self.magnitude {
            subtraction_underflow(self, rhs);
        }
        self.checked_sub(rhs)
            .unwrap_or_else(|| arithmetic_violation("-", self, rhs, short_type_name::<B>()))
    }

    fn mul_or_panic(&self, rhs: &Self) -> Self {
        self.checked_mul(rhs)
            .unwrap_or_else(|| arithmetic_violation("*", self, rhs, short_type_name::<B>()))
    }
}

impl<B: SubsetBound, T: AmountTrait> UnsignedAmount<B, T> {
    /// Creates an amount from an amount of the superset bound with the same trait.
    ///
    /// # Panics
    ///
    /// Panics if `other` is outside this bound, which means `B` was declared a subset of a bound
    /// it does not fit.
    pub fn from_superset(other: &UnsignedAmount<B::Superset, T>) -> Self {
        Self::validated(other.magnitude().clone(), other.denomination()).unwrap_or_else(|e| {
            incorrect_implementation_should_always_be_able(
                &format!(
                    "create {} from its superset {}",
                    short_type_name::<B>(),
                    short_type_name::<B::Superset>(),
                ),
                e,
            )
        })
    }

    /// Widens this amount into an amount of the superset bound with the same trait.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude is outside the superset bound, which means `B` was declared a
    /// subset of a bound it does not fit.
    pub fn into_superset(self) -> UnsignedAmount<B::Superset, T> {
        UnsignedAmount::<B::Superset, T>::validated(self.magnitude, Denomination::MIN)
            .unwrap_or_else(|e| {
                incorrect_implementation_should_always_be_able(
                    &format!(
                        "widen {} into its superset {}",
                        short_type_name::<B>(),
                        short_type_name::<B::Superset>(),
                    ),
                    e,
                )
            })
    }
}

impl<B: ValueBound, T: AmountTrait> Clone for UnsignedAmount<B, T> {
    fn clone(&self) -> Self {
        Self {
            magnitude: self.magnitude.clone(),
            _marker: PhantomData,
        }
    }
}

impl<B: ValueBound, T: AmountTrait> Copy for UnsignedAmount<B, T> where B::Magnitude: Copy {}

impl<B: ValueBound, T: AmountTrait> PartialEq for UnsignedAmount<B, T> {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl<B: ValueBound, T: AmountTrait> Eq for UnsignedAmount<B, T> {}

impl<B: ValueBound, T: AmountTrait> PartialOrd for UnsignedAmount<B, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: ValueBound, T: AmountTrait> Ord for UnsignedAmount<B, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }
}

impl<B: ValueBound, T: AmountTrait> Hash for UnsignedAmount<B, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
    }
}

impl<B: ValueBound, T: AmountTrait> Debug for UnsignedAmount<B, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<{}>({})",
            stringify!(UnsignedAmount),
            short_type_name::<B>(),
            self.magnitude
        )
    }
}

impl<B: ValueBound, T: AmountTrait> Display for UnsignedAmount<B, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.magnitude, Denomination::MIN.name())
    }
}

macro_rules! impl_unsigned_op {
    ($op:ident::$method:ident, $op_assign:ident::$method_assign:ident, $inner:ident) => {
        impl<B: ValueBound, T: AmountTrait> $op for UnsignedAmount<B, T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.$inner(&rhs)
            }
        }

        impl<B: ValueBound, T: AmountTrait> $op for &UnsignedAmount<B, T> {
            type Output = UnsignedAmount<B, T>;

            fn $method(self, rhs: Self) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl<B: ValueBound, T: AmountTrait> $op_assign for UnsignedAmount<B, T> {
            fn $method_assign(&mut self, rhs: Self) {
                *self = self.$inner(&rhs);
            }
        }
    };
}

impl_unsigned_op!(Add::add, AddAssign::add_assign, add_or_panic);
impl_unsigned_op!(Sub::sub, SubAssign::sub_assign, sub_or_panic);
impl_unsigned_op!(Mul::mul, MulAssign::mul_assign, mul_or_panic);
