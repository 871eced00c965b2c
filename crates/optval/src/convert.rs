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

//! # Literal Construction
//!
//! Capability traits that let callers hand a bare literal to a function
//! expecting an [`OptionalValue<T>`]. Each literal family gets one trait
//! (`FromText`, `FromInteger`, `FromFraction`) plus a `From` bridge on the
//! wrapper that routes through [`OptionalValue::present`].
//!
//! The bridges are bounded on the capability traits rather than hard-coded
//! to primitives, so a user-defined wrapper that implements a capability
//! participates with no further code:
//!
//! ```rust
//! use optval::convert::FromText;
//! use optval::value::OptionalValue;
//!
//! struct Greeting(String);
//!
//! impl FromText for Greeting {
//!     fn from_text(text: &str) -> Self {
//!         Greeting(text.to_owned())
//!     }
//! }
//!
//! let greeting: OptionalValue<Greeting> = "hi".into();
//! assert!(greeting.is_present());
//! ```
//!
//! The explicit constructor `OptionalValue::present(value)` remains the
//! canonical path and never requires any of these traits.

use crate::value::OptionalValue;

/// A trait for types constructible from a text literal.
pub trait FromText {
    /// Constructs the value from the given text.
    fn from_text(text: &str) -> Self;
}

/// A trait for types constructible from an integer literal.
///
/// `i128` is the carrier so every integer literal fits; fixed-width
/// implementations truncate the same way an `as` cast does.
pub trait FromInteger {
    /// Constructs the value from the given integer.
    fn from_integer(value: i128) -> Self;
}

/// A trait for types constructible from a fractional literal.
pub trait FromFraction {
    /// Constructs the value from the given fraction.
    fn from_fraction(value: f64) -> Self;
}

impl FromText for String {
    #[inline]
    fn from_text(text: &str) -> Self {
        text.to_owned()
    }
}

impl FromText for Box<str> {
    #[inline]
    fn from_text(text: &str) -> Self {
        Box::from(text)
    }
}

macro_rules! impl_from_integer_for {
    ($t:ty) => {
        impl FromInteger for $t {
            #[inline(always)]
            fn from_integer(value: i128) -> Self {
                value as $t
            }
        }
    };
}

impl_from_integer_for!(i8);
impl_from_integer_for!(u8);
impl_from_integer_for!(i16);
impl_from_integer_for!(u16);
impl_from_integer_for!(i32);
impl_from_integer_for!(u32);
impl_from_integer_for!(i64);
impl_from_integer_for!(u64);
impl_from_integer_for!(i128);
impl_from_integer_for!(u128);
impl_from_integer_for!(isize);
impl_from_integer_for!(usize);
impl_from_integer_for!(f32);
impl_from_integer_for!(f64);

macro_rules! impl_from_fraction_for {
    ($t:ty) => {
        impl FromFraction for $t {
            #[inline(always)]
            fn from_fraction(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_from_fraction_for!(f32);
impl_from_fraction_for!(f64);

impl<T> FromText for OptionalValue<T>
where
    T: FromText,
{
    #[inline]
    fn from_text(text: &str) -> Self {
        OptionalValue::present(T::from_text(text))
    }
}

impl<T> FromInteger for OptionalValue<T>
where
    T: FromInteger,
{
    #[inline]
    fn from_integer(value: i128) -> Self {
        OptionalValue::present(T::from_integer(value))
    }
}

impl<T> FromFraction for OptionalValue<T>
where
    T: FromFraction,
{
    #[inline]
    fn from_fraction(value: f64) -> Self {
        OptionalValue::present(T::from_fraction(value))
    }
}

impl<T> From<&str> for OptionalValue<T>
where
    T: FromText,
{
    /// Wraps a text literal as a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optval::value::OptionalValue;
    ///
    /// let v: OptionalValue<String> = "John".into();
    /// assert_eq!(v, OptionalValue::present("John".to_owned()));
    /// ```
    #[inline]
    fn from(text: &str) -> Self {
        OptionalValue::present(T::from_text(text))
    }
}

impl<T> From<i128> for OptionalValue<T>
where
    T: FromInteger,
{
    /// Wraps an integer literal as a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optval::value::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::<i32>::from(20), OptionalValue::present(20));
    /// ```
    #[inline]
    fn from(value: i128) -> Self {
        OptionalValue::present(T::from_integer(value))
    }
}

impl<T> From<f64> for OptionalValue<T>
where
    T: FromFraction,
{
    /// Wraps a fractional literal as a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optval::value::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::<f64>::from(0.5), OptionalValue::present(0.5));
    /// ```
    #[inline]
    fn from(value: f64) -> Self {
        OptionalValue::present(T::from_fraction(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UserName(String);

    impl FromText for UserName {
        fn from_text(text: &str) -> Self {
            UserName(text.to_owned())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Retries(u32);

    impl FromInteger for Retries {
        fn from_integer(value: i128) -> Self {
            Retries(value as u32)
        }
    }

    #[test]
    fn test_text_literal() {
        let v: OptionalValue<String> = "hello".into();
        assert_eq!(v, OptionalValue::present("hello".to_owned()));

        let boxed: OptionalValue<Box<str>> = "hello".into();
        assert_eq!(boxed.map(|b| b.len()), OptionalValue::present(5));
    }

    #[test]
    fn test_integer_literal_matches_present() {
        assert_eq!(OptionalValue::<i32>::from(20), OptionalValue::present(20));
        assert_eq!(OptionalValue::<u64>::from(20), OptionalValue::present(20));
        // Integer literals also elect into fractional types.
        assert_eq!(OptionalValue::<f64>::from(20), OptionalValue::present(20.0));
    }

    #[test]
    fn test_fraction_literal() {
        assert_eq!(OptionalValue::<f64>::from(0.25), OptionalValue::present(0.25));
        assert_eq!(
            OptionalValue::<f32>::from_fraction(0.25),
            OptionalValue::present(0.25f32)
        );
    }

    #[test]
    fn test_user_wrapper_participates() {
        // A newtype implementing the capability gets the bridge for free.
        let name: OptionalValue<UserName> = "John".into();
        assert_eq!(name.map(|n| n.0).value_or_else(String::new), "John");

        let retries: OptionalValue<Retries> = OptionalValue::from(3);
        assert_eq!(retries, OptionalValue::present(Retries(3)));
    }

    #[test]
    fn test_nested_wrapper_participates() {
        // One extra layer of optional nesting composes through the lifted impl.
        let nested: OptionalValue<OptionalValue<i32>> = OptionalValue::from_integer(7);
        assert_eq!(nested, OptionalValue::present(OptionalValue::present(7)));
    }

    #[test]
    fn test_explicit_constructor_is_equivalent() {
        let via_literal: OptionalValue<i32> = OptionalValue::from(20);
        assert_eq!(via_literal, OptionalValue::present(20));
    }
}
