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

//! # Single-or-Empty Containers
//!
//! Conversion out of [`OptionalValue<T>`] into any container that can hold
//! either nothing or exactly one value. The capability is the same pair of
//! operations the wrapper itself is built from: an empty value and a
//! single-value constructor. Anything providing both — `Option`, the vector
//! types, or the wrapper itself — is a valid target.
//!
//! ## Usage
//!
//! ```rust
//! use optval::value::OptionalValue;
//!
//! let items: Vec<i32> = OptionalValue::present(3).into_container();
//! assert_eq!(items, vec![3]);
//!
//! let none: Option<i32> = OptionalValue::absent().into_container();
//! assert_eq!(none, None);
//! ```

use crate::value::OptionalValue;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// A container that holds either nothing or exactly one value.
///
/// # Examples
///
/// ```rust
/// # use optval::container::SingleOrEmpty;
///
/// let v: Vec<i32> = SingleOrEmpty::single(5);
/// assert_eq!(v, vec![5]);
///
/// let none: Option<i32> = SingleOrEmpty::empty();
/// assert_eq!(none, None);
/// ```
pub trait SingleOrEmpty<T> {
    /// The empty container.
    fn empty() -> Self;

    /// A container holding exactly `value`.
    fn single(value: T) -> Self;
}

impl<T> SingleOrEmpty<T> for Option<T> {
    #[inline]
    fn empty() -> Self {
        None
    }

    #[inline]
    fn single(value: T) -> Self {
        Some(value)
    }
}

impl<T> SingleOrEmpty<T> for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Vec::new()
    }

    #[inline]
    fn single(value: T) -> Self {
        vec![value]
    }
}

impl<T> SingleOrEmpty<T> for VecDeque<T> {
    #[inline]
    fn empty() -> Self {
        VecDeque::new()
    }

    #[inline]
    fn single(value: T) -> Self {
        let mut deque = VecDeque::with_capacity(1);
        deque.push_back(value);
        deque
    }
}

impl<A> SingleOrEmpty<A::Item> for SmallVec<A>
where
    A: smallvec::Array,
{
    #[inline]
    fn empty() -> Self {
        SmallVec::new()
    }

    #[inline]
    fn single(value: A::Item) -> Self {
        let mut vec = SmallVec::new();
        vec.push(value);
        vec
    }
}

impl<T> SingleOrEmpty<T> for OptionalValue<T> {
    #[inline]
    fn empty() -> Self {
        OptionalValue::Absent
    }

    #[inline]
    fn single(value: T) -> Self {
        OptionalValue::Present(value)
    }
}

impl<T> OptionalValue<T> {
    /// Converts into any single-or-empty container.
    ///
    /// `Absent` becomes the container's empty value, `Present(x)` the
    /// container holding exactly `x`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optval::value::OptionalValue;
    ///
    /// let some: Option<i32> = OptionalValue::present(3).into_container();
    /// assert_eq!(some, Some(3));
    ///
    /// let empty: Vec<i32> = OptionalValue::absent().into_container();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    pub fn into_container<C>(self) -> C
    where
        C: SingleOrEmpty<T>,
    {
        match self {
            Self::Present(value) => C::single(value),
            Self::Absent => C::empty(),
        }
    }
}

impl<T> IntoIterator for OptionalValue<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Iterates over the contained value: one item if present, none if
    /// absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use optval::value::OptionalValue;
    ///
    /// let collected: Vec<i32> = OptionalValue::present(3).into_iter().collect();
    /// assert_eq!(collected, vec![3]);
    ///
    /// let empty: Vec<i32> = OptionalValue::absent().into_iter().collect();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OptionalValue<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_option_target() {
        let some: Option<i32> = OptionalValue::present(3).into_container();
        assert_eq!(some, Some(3));

        let none: Option<i32> = OptionalValue::absent().into_container();
        assert_eq!(none, None);
    }

    #[test]
    fn test_into_vec_targets() {
        let vec: Vec<i32> = OptionalValue::present(3).into_container();
        assert_eq!(vec, vec![3]);

        let empty: Vec<i32> = OptionalValue::absent().into_container();
        assert!(empty.is_empty());

        let deque: VecDeque<i32> = OptionalValue::present(3).into_container();
        assert_eq!(deque, VecDeque::from(vec![3]));

        let small: SmallVec<[i32; 2]> = OptionalValue::present(3).into_container();
        assert_eq!(small.as_slice(), &[3]);
    }

    #[test]
    fn test_into_self_round_trip() {
        let v: OptionalValue<i32> = OptionalValue::present(3).into_container();
        assert_eq!(v, OptionalValue::present(3));

        let none: OptionalValue<i32> = OptionalValue::<i32>::absent().into_container();
        assert_eq!(none, OptionalValue::absent());
    }

    #[test]
    fn test_iteration() {
        let collected: Vec<i32> = OptionalValue::present(3).into_iter().collect();
        assert_eq!(collected, vec![3]);

        let empty: Vec<i32> = OptionalValue::<i32>::absent().into_iter().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_iteration_by_reference() {
        let v = OptionalValue::present("abc".to_owned());
        let lengths: Vec<usize> = (&v).into_iter().map(|s| s.len()).collect();
        assert_eq!(lengths, vec![3]);
        assert!(v.is_present());

        let none: OptionalValue<String> = OptionalValue::absent();
        assert_eq!((&none).into_iter().count(), 0);
    }

    #[test]
    fn test_iterator_is_exact_size() {
        let iter = OptionalValue::present(1).into_iter();
        assert_eq!(iter.len(), 1);

        let iter = OptionalValue::<i32>::absent().into_iter();
        assert_eq!(iter.len(), 0);
    }
}
