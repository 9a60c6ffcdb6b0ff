//! Type class traits for functional programming abstractions.
//!
//! This module provides the small set of type classes the persistent list
//! is built around, as traits:
//!
//! - [`TypeConstructor`]: Higher-Kinded Type emulation via Generic
//!   Associated Types, the base every other trait builds on
//! - [`FunctorMut`]: element-wise mapping with a reusable function
//! - [`Foldable`]: left and right folds, plus fold-derived queries
//! - [`Semigroup`] / [`Monoid`]: associative combination and its identity
//! - [`Sum`]: a numeric wrapper selecting the additive monoid
//!
//! Instances are provided for [`crate::persistent::PersistentList`] and
//! for common standard-library types (`Option`, `Result`, `Vec`,
//! `String`), so the traits are usable on their own.
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::{Foldable, Sum};
//!
//! let values = vec![1, 2, 3, 4];
//! let total: Sum<i32> = values.fold_map(Sum);
//! assert_eq!(total.0, 10);
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::FunctorMut;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::Sum;
