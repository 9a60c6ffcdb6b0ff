//! # conslist
//!
//! A persistent (immutable) singly-linked list for Rust, with structural
//! sharing and fold-based transforms.
//!
//! ## Overview
//!
//! The crate provides one core data structure, [`persistent::PersistentList`],
//! a cons list in the Lisp/ML tradition:
//!
//! - O(1) prepend (`cons`), head and tail access
//! - every operation returns a new list; existing values are never mutated
//! - unmodified structure is shared between versions
//! - derived operations (`map`, `filter`, `pairwise`, `sum`) are defined in
//!   terms of a canonical, stack-safe left fold
//!
//! The `typeclass` module expresses the fold seam as traits (`Foldable`,
//! `FunctorMut`, `Semigroup`, `Monoid`) with instances for the list and for
//! common standard-library types.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): type class traits and their instances
//! - `arc`: back nodes with `Arc` instead of `Rc`, making lists shareable
//!   across threads
//! - `serde`: `Serialize`/`Deserialize` for the list as a plain sequence
//! - `full`: `typeclass` + `serde`
//!
//! ## Example
//!
//! ```rust
//! use conslist::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! let doubled = list.map(|x| x * 2);
//!
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
//! assert_eq!(list.to_vec(), vec![1, 2, 3]); // original untouched
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use conslist::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub mod persistent;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
