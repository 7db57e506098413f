// -----------------------------------------------------------------------------
// Modules

mod reflect;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use reflect::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Exports

pub use reflect::Reflect;

/// A fixed-seed hasher for [`Reflect::reflect_hash`] implementations.
///
/// The same data hashes to the same value in every run of the program.
///
/// # Examples
///
/// ```
/// use core::hash::{Hash, Hasher};
/// fn fixed_hash<T: Hash>(val: &T) -> u64 {
///     let mut hasher = vc_reflect::reflect_hasher();
///     val.hash(&mut hasher);
///     hasher.finish()
/// }
/// assert_eq!(fixed_hash(&1), fixed_hash(&1));
/// ```
#[inline(always)]
pub fn reflect_hasher() -> foldhash::fast::FoldHasher<'static> {
    core::hash::BuildHasher::build_hasher(&crate::impls::FIXED_HASH_STATE)
}
