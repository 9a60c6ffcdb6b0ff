//! The reduction type class.
//!
//! [`Foldable`] abstracts structures that can be collapsed to a single
//! value by visiting their elements in order. The required methods are the
//! two fold directions; everything else (`fold_map`, `find`, `exists`,
//! `for_all`, `length`) derives from the left fold.

use crate::typeclass::{Monoid, TypeConstructor};

/// A structure that can be folded to a summary value.
///
/// # Fold Direction
///
/// `fold_left` combines the accumulator with the first element and
/// proceeds toward the last; `fold_right` combines each element with the
/// accumulator built from everything after it. For associative operations
/// the two agree.
///
/// # Examples
///
/// ```rust
/// use conslist::typeclass::Foldable;
///
/// let values = vec![1, 2, 3];
/// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 6);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold` method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B,
        Self: Sized;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B,
        Self: Sized;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::{Foldable, Sum};
    ///
    /// let values = vec![1, 2, 3, 4];
    /// let sum: Sum<i32> = values.fold_map(Sum);
    /// assert_eq!(sum.0, 10);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// assert!(!vec![1, 2, 3].is_empty());
    /// assert!(Foldable::is_empty(&Vec::<i32>::new()));
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// assert_eq!(Some(5).length(), 1);
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// The default is a plain fold: it visits every element and keeps the
    /// first match. Structures with cheaper traversal (like the persistent
    /// list's inherent `find`) can stop early instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.clone().find(|element| *element > 3), Some(4));
    /// assert_eq!(values.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert!(values.exists(|element| *element > 3));
    /// assert!(!values.exists(|element| *element > 10));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// let values = vec![2, 4, 6, 8];
    /// assert!(values.for_all(|element| *element % 2 == 0));
    /// assert!(!values.for_all(|element| *element > 5));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    /// Optimized implementation for Option.
    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    /// Optimized implementation for Option.
    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(element) => function(element, init),
            Err(_) => init,
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Optimized implementation for Vec.
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Optimized implementation for Vec.
    #[inline]
    fn length(&self) -> usize {
        self.as_slice().len()
    }
}
