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

//! Represents a bounded amount with an explicit sign.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use amount_core::correctness::FAILED;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};

use crate::{
    error::ValueError,
    types::{
        amount::{
            AmountTrait, NoTrait, arithmetic_violation,
            incorrect_implementation_should_always_be_able, short_type_name,
        },
        bound::{SubsetBound, ValueBound},
        denomination::Denomination,
    },
};

/// The sign of a [`SignedAmount`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    /// Returns the opposite sign.
    #[must_use]
    pub const fn negated(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }

    /// Returns the sign of the product of two values with signs `self` and `other`.
    #[must_use]
    pub const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Self::Plus, Self::Plus) | (Self::Minus, Self::Minus) => Self::Plus,
            _ => Self::Minus,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// Represents an amount with a sign and a magnitude within the range of the bound `B`.
///
/// The bound constrains the magnitude only, so the legal range is symmetric around zero. The
/// magnitude is always stored in the smallest denomination ([`Denomination::MIN`]), and a zero
/// magnitude always carries [`Sign::Plus`].
///
/// Division, remainder and bitwise operations are not supported.
pub struct SignedAmount<B: ValueBound, T: AmountTrait = NoTrait> {
    sign: Sign,
    magnitude: B::Magnitude,
    _marker: PhantomData<(B, T)>,
}

impl<B: ValueBound, T: AmountTrait> SignedAmount<B, T> {
    /// Creates a new [`SignedAmount`] from a `sign` and a `magnitude` expressed in
    /// `denomination`.
    ///
    /// The magnitude is rescaled to the smallest denomination and then validated against `B`.
    /// A zero magnitude is always stored with [`Sign::Plus`], whatever `sign` was requested.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The rescaled magnitude is outside the bound ([`ValueError::ValueTooBig`] or
    ///   [`ValueError::ValueTooSmall`]).
    /// - The rescaled magnitude cannot be represented ([`ValueError::Overflow`]).
    pub fn new_checked(
        sign: Sign,
        magnitude: impl Into<B::Magnitude>,
        denomination: Denomination,
    ) -> Result<Self, ValueError> {
        Self::validated(sign, magnitude.into(), denomination)
    }

    /// Creates a new [`SignedAmount`] from a `sign` and a `magnitude` in the smallest
    /// denomination.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude is outside the bound.
    pub fn from_magnitude(sign: Sign, magnitude: impl Into<B::Magnitude>) -> Result<Self, ValueError> {
        Self::validated(sign, magnitude.into(), Denomination::MIN)
    }

    /// Creates a new [`SignedAmount`] from a `sign` and a `magnitude` expressed in
    /// `denomination`.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude is invalid, see [`Self::new_checked`].
    pub fn new(sign: Sign, magnitude: impl Into<B::Magnitude>, denomination: Denomination) -> Self {
        Self::new_checked(sign, magnitude, denomination).expect(FAILED)
    }

    fn validated(
        sign: Sign,
        magnitude: B::Magnitude,
        denomination: Denomination,
    ) -> Result<Self, ValueError> {
        let magnitude = denomination.express_in_smallest(magnitude)?;
        B::contains(&magnitude).inspect_err(|e| {
            log::trace!(
                "Rejected magnitude {sign}{magnitude} for {}: {e}",
                short_type_name::<B>()
            );
        })?;

        Ok(Self::canonical(sign, magnitude))
    }

    fn within_bound(sign: Sign, magnitude: B::Magnitude) -> Option<Self> {
        B::contains(&magnitude).ok()?;
        Some(Self::canonical(sign, magnitude))
    }

    fn canonical(sign: Sign, magnitude: B::Magnitude) -> Self {
        let sign = if magnitude.is_zero() { Sign::Plus } else { sign };
        Self {
            sign,
            magnitude,
            _marker: PhantomData,
        }
    }

    /// Returns the absolute value in the smallest denomination.
    #[must_use]
    pub fn magnitude(&self) -> &B::Magnitude {
        &self.magnitude
    }

    /// Consumes the amount, returning its sign and magnitude.
    #[must_use]
    pub fn into_parts(self) -> (Sign, B::Magnitude) {
        (self.sign, self.magnitude)
    }

    /// Returns the sign, which is [`Sign::Plus`] for zero.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
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

    /// Returns whether the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    /// Returns whether the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Flips the sign in place; zero stays zero.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = self.sign.negated();
        }
    }

    /// Returns the amount with the same magnitude and [`Sign::Plus`].
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::canonical(Sign::Plus, self.magnitude.clone())
    }

    /// Returns zero if the amount is zero, otherwise one with the amount's sign.
    ///
    /// # Panics
    ///
    /// Panics if the bound cannot hold a magnitude of one.
    #[must_use]
    pub fn signum(&self) -> Self {
        let magnitude = if self.is_zero() {
            <B::Magnitude as Zero>::zero()
        } else {
            <B::Magnitude as One>::one()
        };

        Self::validated(self.sign, magnitude, Denomination::MIN).unwrap_or_else(|e| {
            incorrect_implementation_should_always_be_able(
                &format!("express the signum of {self} in {}", short_type_name::<B>()),
                e,
            )
        })
    }

    /// Checked addition, returning `None` if the sum is outside the bound.
    #[must_use]
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let (sign, magnitude) = if self.sign == rhs.sign {
            (self.sign, self.magnitude.checked_add(&rhs.magnitude)?)
        } else if self.magnitude >= rhs.magnitude {
            (self.sign, self.magnitude.checked_sub(&rhs.magnitude)?)
        } else {
            (rhs.sign, rhs.magnitude.checked_sub(&self.magnitude)?)
        };

        Self::within_bound(sign, magnitude)
    }

    /// Checked subtraction, returning `None` if the difference is outside the bound.
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.checked_add(&-rhs)
    }

    /// Checked multiplication, returning `None` if the product is outside the bound.
    #[must_use]
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let magnitude = self.magnitude.checked_mul(&rhs.magnitude)?;
        Self::within_bound(self.sign.product(rhs.sign), magnitude)
    }

    fn add_or_panic(&self, rhs: &Self) -> Self {
        self.checked_add(rhs)
            .unwrap_or_else(|| arithmetic_violation("+", self, rhs, short_type_name::<B>()))
    }

    fn sub_or_panic(&self, rhs: &Self) -> Self {
        self.checked_sub(rhs)
            .unwrap_or_else(|| arithmetic_violation("-", self, rhs, short_type_name::<B>()))
    }

    fn mul_or_panic(&self, rhs: &Self) -> Self {
        self.checked_mul(rhs)
            .unwrap_or_else(|| arithmetic_violation("*", self, rhs, short_type_name::<B>()))
    }
}

impl<B: SubsetBound, T: AmountTrait> SignedAmount<B, T> {
    /// Creates an amount from an amount of the superset bound with the same trait.
    ///
    /// # Panics
    ///
    /// Panics if `other` is outside this bound, which means `B` was declared a subset of a bound
    /// it does not fit.
    pub fn from_superset(other: &SignedAmount<B::Superset, T>) -> Self {
        Self::validated(other.sign(), other.magnitude().clone(), other.denomination())
            .unwrap_or_else(|e| {
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
    pub fn into_superset(self) -> SignedAmount<B::Superset, T> {
        SignedAmount::<B::Superset, T>::validated(self.sign, self.magnitude, Denomination::MIN)
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

impl<B: ValueBound, T: AmountTrait> Clone for SignedAmount<B, T> {
    fn clone(&self) -> Self {
        Self {
            sign: self.sign,
            magnitude: self.magnitude.clone(),
            _marker: PhantomData,
        }
    }
}

impl<B: ValueBound, T: AmountTrait> Copy for SignedAmount<B, T> where B::Magnitude: Copy {}

impl<B: ValueBound, T: AmountTrait> PartialEq for SignedAmount<B, T> {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.magnitude == other.magnitude
    }
}

impl<B: ValueBound, T: AmountTrait> Eq for SignedAmount<B, T> {}

impl<B: ValueBound, T: AmountTrait> PartialOrd for SignedAmount<B, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: ValueBound, T: AmountTrait> Ord for SignedAmount<B, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Plus) => self.magnitude.cmp(&other.magnitude),
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Minus, Sign::Minus) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl<B: ValueBound, T: AmountTrait> Hash for SignedAmount<B, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.magnitude.hash(state);
    }
}

impl<B: ValueBound, T: AmountTrait> Debug for SignedAmount<B, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<{}>({}{})",
            stringify!(SignedAmount),
            short_type_name::<B>(),
            self.sign,
            self.magnitude
        )
    }
}

impl<B: ValueBound, T: AmountTrait> Display for SignedAmount<B, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{} {}", self.magnitude, Denomination::MIN.name())
    }
}

impl<B: ValueBound, T: AmountTrait> Neg for SignedAmount<B, T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl<B: ValueBound, T: AmountTrait> Neg for &SignedAmount<B, T> {
    type Output = SignedAmount<B, T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_signed_op {
    ($op:ident::$method:ident, $op_assign:ident::$method_assign:ident, $inner:ident) => {
        impl<B: ValueBound, T: AmountTrait> $op for SignedAmount<B, T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.$inner(&rhs)
            }
        }

        impl<B: ValueBound, T: AmountTrait> $op for &SignedAmount<B, T> {
            type Output = SignedAmount<B, T>;

            fn $method(self, rhs: Self) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl<B: ValueBound, T: AmountTrait> $op_assign for SignedAmount<B, T> {
            fn $method_assign(&mut self, rhs: Self) {
                *self = self.$inner(&rhs);
            }
        }
    };
}

impl_signed_op!(Add::add, AddAssign::add_assign, add_or_panic);
impl_signed_op!(Sub::sub, SubAssign::sub_assign, sub_or_panic);
impl_signed_op!(Mul::mul, MulAssign::mul_assign, mul_or_panic);

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::types::{
        Int256, Int256Bound,
        stubs::{TestSignedAmount, TestSignedNonZeroAmount, signed},
    };

    #[rstest]
    fn test_sign_negated_and_product() {
        assert_eq!(Sign::Plus.negated(), Sign::Minus);
        assert_eq!(-Sign::Minus, Sign::Plus);
        assert_eq!(Sign::Minus.product(Sign::Minus), Sign::Plus);
        assert_eq!(Sign::Plus.product(Sign::Minus), Sign::Minus);
        assert_eq!(Sign::default(), Sign::Plus);
    }

    #[rstest]
    fn test_zero_is_always_plus() {
        let zero = TestSignedAmount::from_magnitude(Sign::Minus, 0u64).unwrap();
        assert_eq!(zero.sign(), Sign::Plus);
        assert_eq!(zero, signed(0));
    }

    #[rstest]
    fn test_new_checked_rescales_denomination() {
        let from_pico = TestSignedAmount::new(Sign::Minus, 1u64, Denomination::PICO);
        assert_eq!(from_pico, signed(-1_000));
        assert_eq!(from_pico.denomination(), Denomination::MIN);
    }

    #[rstest]
    fn test_new_checked_too_big() {
        assert_eq!(
            TestSignedAmount::from_magnitude(Sign::Minus, 1_001u64),
            Err(ValueError::ValueTooBig)
        );
    }

    #[rstest]
    fn test_new_checked_too_small() {
        assert_eq!(
            TestSignedNonZeroAmount::from_magnitude(Sign::Minus, 0u64),
            Err(ValueError::ValueTooSmall)
        );
    }

    #[rstest]
    #[case(3, 2, 5)]
    #[case(-3, -2, -5)]
    #[case(5, -2, 3)]
    #[case(2, -5, -3)]
    #[case(-5, 2, -3)]
    #[case(-2, 5, 3)]
    #[case(-2, 2, 0)]
    #[case(2, -2, 0)]
    fn test_add(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        let sum = signed(a) + signed(b);
        assert_eq!(sum, signed(expected));
        if expected == 0 {
            assert_eq!(sum.sign(), Sign::Plus);
        }
    }

    #[rstest]
    #[case(3, 2, 1)]
    #[case(2, 3, -1)]
    #[case(-3, -2, -1)]
    #[case(-3, 2, -5)]
    #[case(3, -2, 5)]
    #[case(2, 2, 0)]
    fn test_sub(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        assert_eq!(signed(a) - signed(b), signed(expected));
    }

    #[rstest]
    #[case(3, 2, 6)]
    #[case(-3, 2, -6)]
    #[case(3, -2, -6)]
    #[case(-3, -2, 6)]
    #[case(-3, 0, 0)]
    fn test_mul(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        let product = signed(a) * signed(b);
        assert_eq!(product, signed(expected));
        if expected == 0 {
            assert_eq!(product.sign(), Sign::Plus);
        }
    }

    #[rstest]
    fn test_assign_operators() {
        let mut amount = signed(10);
        amount += signed(-15);
        assert_eq!(amount, signed(-5));
        amount -= signed(-7);
        assert_eq!(amount, signed(2));
        amount *= signed(-4);
        assert_eq!(amount, signed(-8));
    }

    #[rstest]
    #[should_panic(expected = "Arithmetic violated bound TestSignedBound")]
    fn test_add_beyond_bound_panics() {
        let _ = signed(-600) + signed(-600);
    }

    #[rstest]
    #[should_panic(expected = "Arithmetic violated bound TestSignedBound")]
    fn test_mul_beyond_bound_panics() {
        let _ = signed(-100) * signed(11);
    }

    #[rstest]
    fn test_checked_operations() {
        assert_eq!(signed(-600).checked_add(&signed(-600)), None);
        assert_eq!(signed(-600).checked_add(&signed(600)), Some(signed(0)));
        assert_eq!(signed(600).checked_sub(&signed(-600)), None);
        assert_eq!(signed(-100).checked_mul(&signed(11)), None);
        assert_eq!(signed(-100).checked_mul(&signed(-10)), Some(signed(1_000)));
    }

    #[rstest]
    fn test_negate() {
        let mut amount = signed(5);
        amount.negate();
        assert_eq!(amount, signed(-5));
        assert_eq!(-amount, signed(5));
        assert_eq!(-&amount, signed(5));

        let mut zero = signed(0);
        zero.negate();
        assert_eq!(zero.sign(), Sign::Plus);
    }

    #[rstest]
    #[case(-42, -1)]
    #[case(0, 0)]
    #[case(42, 1)]
    fn test_signum(#[case] value: i64, #[case] expected: i64) {
        assert_eq!(signed(value).signum(), signed(expected));
    }

    #[rstest]
    fn test_predicates_and_abs() {
        assert!(signed(-1).is_negative());
        assert!(!signed(-1).is_positive());
        assert!(signed(1).is_positive());
        assert!(signed(0).is_zero());
        assert!(!signed(0).is_positive());
        assert!(!signed(0).is_negative());
        assert_eq!(signed(-7).abs(), signed(7));
        assert_eq!(signed(-7).into_parts(), (Sign::Minus, 7));
    }

    #[rstest]
    fn test_comparison() {
        assert!(signed(-1) < signed(1));
        assert!(signed(-1) < signed(0));
        assert!(signed(0) < signed(1));
        assert!(signed(-10) < signed(-2));
        assert!(signed(10) > signed(2));
        assert_ne!(signed(-2), signed(2));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(signed(-15).to_string(), "-15 atto");
        assert_eq!(signed(15).to_string(), "15 atto");
        assert_eq!(format!("{:?}", signed(-15)), "SignedAmount<TestSignedBound>(-15)");
    }

    #[rstest]
    fn test_int256_limits() {
        let greatest = Int256Bound::greatest_finite_magnitude();
        let max = Int256::from_magnitude(Sign::Plus, greatest.clone()).unwrap();
        let min = Int256::from_magnitude(Sign::Minus, greatest.clone()).unwrap();

        assert!(min < max);
        assert_eq!(-&min, max);
        assert_eq!(
            Int256::from_magnitude(Sign::Minus, greatest + BigUint::from(1u8)),
            Err(ValueError::ValueTooBig)
        );
        assert!((max + min).is_zero());
    }

    #[rstest]
    fn test_from_superset_and_back() {
        let amount = signed(-9);
        let non_zero = TestSignedNonZeroAmount::from_superset(&amount);
        assert_eq!(non_zero.sign(), Sign::Minus);
        assert_eq!(*non_zero.magnitude(), 9);
        assert_eq!(non_zero.into_superset(), amount);
    }

    #[rstest]
    #[should_panic(expected = "Incorrect implementation")]
    fn test_from_superset_outside_subset_panics() {
        let _ = TestSignedNonZeroAmount::from_superset(&signed(0));
    }

    proptest! {
        #[rstest]
        fn prop_add_matches_integer_addition(a in -500i64..=500, b in -500i64..=500) {
            prop_assert_eq!(signed(a) + signed(b), signed(a + b));
        }

        #[rstest]
        fn prop_add_is_commutative(a in -500i64..=500, b in -500i64..=500) {
            prop_assert_eq!(signed(a) + signed(b), signed(b) + signed(a));
        }

        #[rstest]
        fn prop_sub_is_add_of_negation(a in -500i64..=500, b in -500i64..=500) {
            prop_assert_eq!(signed(a) - signed(b), signed(a) + -signed(b));
        }

        #[rstest]
        fn prop_ordering_matches_integers(a in -1_000i64..=1_000, b in -1_000i64..=1_000) {
            prop_assert_eq!(signed(a).cmp(&signed(b)), a.cmp(&b));
        }

        #[rstest]
        fn prop_mul_matches_integer_multiplication(a in -31i64..=31, b in -31i64..=31) {
            prop_assert_eq!(signed(a) * signed(b), signed(a * b));
        }
    }
}
