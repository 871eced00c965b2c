// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Lifted Arithmetic
//!
//! Elementwise arithmetic on [`OptionalValue<T>`]. Binary operators follow
//! the both-or-nothing rule: any `Absent` operand makes the result `Absent`,
//! so a chain of arithmetic over optional arguments never needs explicit
//! branching. Unary operators transform the contained value in place of the
//! wrapper.
//!
//! The additive and multiplicative identities lift to `Present(0)` and
//! `Present(1)` via [`num_traits::Zero`] and [`num_traits::One`]; `Absent`
//! is *not* an identity of arithmetic, it is absorbing.

use crate::value::OptionalValue;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{Inv, One, Signed, Zero};

macro_rules! impl_lifted_binop {
    ($trait_name:ident, $method:ident) => {
        impl<T> $trait_name for OptionalValue<T>
        where
            T: $trait_name<Output = T>,
        {
            type Output = OptionalValue<T>;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                self.zip_with(rhs, T::$method)
            }
        }
    };
}

impl_lifted_binop!(Add, add);
impl_lifted_binop!(Sub, sub);
impl_lifted_binop!(Mul, mul);
impl_lifted_binop!(Div, div);

impl<T> Neg for OptionalValue<T>
where
    T: Neg<Output = T>,
{
    type Output = OptionalValue<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

impl<T> Inv for OptionalValue<T>
where
    T: Inv<Output = T>,
{
    type Output = OptionalValue<T>;

    #[inline]
    fn inv(self) -> Self::Output {
        self.map(T::inv)
    }
}

impl<T> OptionalValue<T>
where
    T: Signed,
{
    /// Returns the absolute value of the contained number, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optval::value::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::present(-4).abs(), OptionalValue::present(4));
    /// assert_eq!(OptionalValue::<i32>::absent().abs(), OptionalValue::absent());
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        self.map(|value| value.abs())
    }

    /// Returns the sign of the contained number, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optval::value::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::present(-4).signum(), OptionalValue::present(-1));
    /// assert_eq!(OptionalValue::<i32>::absent().signum(), OptionalValue::absent());
    /// ```
    #[inline]
    pub fn signum(self) -> Self {
        self.map(|value| value.signum())
    }
}

impl<T> Zero for OptionalValue<T>
where
    T: Zero,
{
    /// The additive identity is `Present(0)`, not `Absent`.
    #[inline]
    fn zero() -> Self {
        Self::Present(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        match self {
            Self::Present(value) => value.is_zero(),
            Self::Absent => false,
        }
    }
}

impl<T> One for OptionalValue<T>
where
    T: One,
{
    /// The multiplicative identity is `Present(1)`, not `Absent`.
    #[inline]
    fn one() -> Self {
        Self::Present(T::one())
    }
}
