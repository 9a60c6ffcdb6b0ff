//! The identity-bearing combination type class.
//!
//! A [`Monoid`] is a [`Semigroup`] with an identity element: the empty
//! string, the empty list, zero under addition. The identity makes it
//! possible to combine any number of values, including none at all.

use std::ops::Add;

use crate::typeclass::{Semigroup, Sum};

/// A `Semigroup` with an identity element.
///
/// # Laws
///
/// 1. **Left identity**: `Self::empty().combine(a)` is equivalent to `a`.
/// 2. **Right identity**: `a.combine(Self::empty())` is equivalent to `a`.
/// 3. **Associativity**: inherited from [`Semigroup`].
///
/// # Examples
///
/// ```rust
/// use conslist::typeclass::Monoid;
///
/// assert_eq!(String::empty(), "");
/// assert!(Vec::<i32>::empty().is_empty());
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// The identity element satisfies:
    /// - `Self::empty().combine(a) == a` for all `a`
    /// - `a.combine(Self::empty()) == a` for all `a`
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity
    /// element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Monoid;
    ///
    /// let strings = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::combine_all(strings), "abc");
    ///
    /// // Empty iterator returns the identity element
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(empty), String::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

/// `Default::default()` provides the additive zero.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}
