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

//! # Value-Lifting Combination
//!
//! Combining the *contents* of two present values, as opposed to picking
//! one of them. [`OptionalValue::or`] is the fallback operation with
//! `Absent` as its identity; the [`Combine`] instance here is a different
//! monoid entirely: it concatenates contained values under the
//! both-or-nothing rule, and its identity is `Present(T::identity())`.
//! The two operations are intentionally named apart so neither silently
//! stands in for the other.

use crate::value::OptionalValue;
use smallvec::SmallVec;

/// A trait for types with an associative combination.
///
/// Implementations must satisfy
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
///
/// # Examples
///
/// ```rust
/// # use optval::combine::Combine;
///
/// let ab = "a".to_owned().combine("b".to_owned());
/// assert_eq!(ab, "ab");
/// ```
pub trait Combine {
    /// Combines two values into one.
    fn combine(self, other: Self) -> Self;
}

/// A trait for types whose combination has an identity element.
///
/// `T::identity().combine(a) == a` and `a.combine(T::identity()) == a`
/// must hold.
pub trait Identity: Combine {
    /// The identity element of the combination.
    fn identity() -> Self;
}

impl Combine for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Identity for String {
    #[inline]
    fn identity() -> Self {
        String::new()
    }
}

impl<T> Combine for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Identity for Vec<T> {
    #[inline]
    fn identity() -> Self {
        Vec::new()
    }
}

impl<A> Combine for SmallVec<A>
where
    A: smallvec::Array,
{
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<A> Identity for SmallVec<A>
where
    A: smallvec::Array,
{
    #[inline]
    fn identity() -> Self {
        SmallVec::new()
    }
}

impl<T> Combine for OptionalValue<T>
where
    T: Combine,
{
    /// Combines the contents of two present values.
    ///
    /// Built on the both-or-nothing rule: combining with `Absent` yields
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optval::combine::Combine;
    /// # use optval::value::OptionalValue;
    ///
    /// let a = OptionalValue::present("foo".to_owned());
    /// let b = OptionalValue::present("bar".to_owned());
    /// assert_eq!(a.combine(b), OptionalValue::present("foobar".to_owned()));
    ///
    /// let a = OptionalValue::present("foo".to_owned());
    /// assert_eq!(a.combine(OptionalValue::absent()), OptionalValue::absent());
    /// ```
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.zip_with(other, T::combine)
    }
}

impl<T> Identity for OptionalValue<T>
where
    T: Identity,
{
    /// The identity is `Present(T::identity())`, not `Absent`.
    ///
    /// `Absent` is the identity of the *fallback* operation
    /// ([`OptionalValue::or`]); under this combination it is absorbing.
    #[inline]
    fn identity() -> Self {
        OptionalValue::present(T::identity())
    }
}
