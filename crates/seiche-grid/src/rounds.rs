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

use num_traits::Signed;
use seiche_core::num::constants;

/// An elapsed-round count that may be absent.
///
/// Instead of using `Option<T>`, this type uses a sentinel encoding to avoid
/// the additional discriminant that `Option` typically introduces for
/// integer types, and to give callers the flat integer-or-`-1` shape that
/// grid-propagation consumers conventionally expect.
///
/// Encoding:
/// - Non-negative values (>= 0) represent a concrete number of rounds.
/// - Negative values (<= -1) are reserved to indicate that dormant cells
///   were unreachable.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundCount<T>(T)
where
    T: Signed;

impl<T> RoundCount<T>
where
    T: Copy + Signed + constants::MinusOne,
{
    const NONE_SENTINEL: T = T::MINUS_ONE;

    /// Creates a `RoundCount` from an `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seiche_grid::rounds::RoundCount;
    ///
    /// let rounds = RoundCount::from_option(Some(4i32));
    /// assert!(rounds.is_some());
    /// assert_eq!(rounds.raw(), 4);
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => RoundCount(v),
            None => RoundCount(Self::NONE_SENTINEL),
        }
    }

    /// Creates a `RoundCount` from a raw value without checking for the
    /// sentinel. A negative value will be treated as `None`.
    #[inline]
    pub const fn from_raw(value: T) -> Self {
        RoundCount(value)
    }

    /// Creates a `RoundCount` representing `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seiche_grid::rounds::RoundCount;
    ///
    /// let unreachable: RoundCount<i32> = RoundCount::none();
    /// assert!(unreachable.is_none());
    /// assert_eq!(unreachable.raw(), -1);
    /// ```
    #[inline]
    pub fn none() -> Self {
        RoundCount(Self::NONE_SENTINEL)
    }

    /// Checks if the `RoundCount` represents `None`.
    #[inline]
    pub fn is_none(&self) -> bool
    where
        T: PartialOrd,
    {
        self.0 <= Self::NONE_SENTINEL
    }

    /// Checks if the `RoundCount` represents `Some`.
    #[inline]
    pub fn is_some(&self) -> bool
    where
        T: PartialOrd,
    {
        !self.is_none()
    }

    /// Returns the raw value, including the sentinel if present.
    #[inline]
    pub fn raw(&self) -> T {
        self.0
    }

    /// Converts the `RoundCount` back into an `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seiche_grid::rounds::RoundCount;
    ///
    /// assert_eq!(RoundCount::from_option(Some(2i64)).into_option(), Some(2));
    /// assert_eq!(RoundCount::<i64>::none().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        if self.is_none() { None } else { Some(self.0) }
    }

    /// Unwraps the `RoundCount`, returning a default value if it is `None`.
    #[inline]
    pub fn unwrap_or(&self, default: T) -> T
    where
        T: PartialOrd,
    {
        if self.is_none() { default } else { self.0 }
    }
}

impl<T> std::fmt::Debug for RoundCount<T>
where
    T: Copy + Signed + PartialOrd + constants::MinusOne + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "RoundCount(None)")
        } else {
            write!(f, "RoundCount(Some({:?}))", self.0)
        }
    }
}

impl<T> std::fmt::Display for RoundCount<T>
where
    T: Copy + Signed + PartialOrd + constants::MinusOne + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "RoundCount(None)")
        } else {
            write!(f, "RoundCount({})", self.0)
        }
    }
}

impl<T> From<Option<T>> for RoundCount<T>
where
    T: Copy + Signed + constants::MinusOne,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        RoundCount::from_option(value)
    }
}

impl<T> From<RoundCount<T>> for Option<T>
where
    T: Copy + Signed + PartialOrd + constants::MinusOne,
{
    #[inline]
    fn from(val: RoundCount<T>) -> Self {
        val.into_option()
    }
}
