//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types: there is no way to
//! write a trait that abstracts over `Option<_>` and `Vec<_>` as type
//! constructors. This module works around the limitation with a Generic
//! Associated Type, which is enough for the type classes in this crate.

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Option<_>`,
/// `Result<_, E>`, `Vec<_>`, or `PersistentList<_>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently
///   applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use conslist::typeclass::TypeConstructor;
///
/// fn inner_default<T: TypeConstructor>() -> T::Inner
/// where
///     T::Inner: Default,
/// {
///     Default::default()
/// }
///
/// assert_eq!(inner_default::<Option<i32>>(), 0);
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be
    /// `Option<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<A, E> TypeConstructor for Result<A, E> {
    type Inner = A;
    type WithType<B> = Result<B, E>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B> = Vec<B>;
}
