use std::error::Error;
use std::fmt;

/// Errors that can occur while building a matrix from subsets.
///
/// Two of these variants can never actually be constructed by this crate
/// (see each variant's doc comment) and exist only so the taxonomy matches
/// the element-provider contract a host-language binding would need to
/// implement on top of this core. The `coverings` entry point in this crate
/// works over plain infallible iterators, so only [`BuildError::Iteration`]
/// is ever produced here, by a future fallible builder, not by the current
/// public API.
#[derive(Debug)]
pub enum BuildError<E> {
    /// A subset or element source failed to produce its next item.
    Iteration(E),
    /// Reserved for API parity with the source taxonomy. Label equality in
    /// this crate is `Eq`, a total and infallible operation, so this
    /// variant is never constructed.
    Comparison,
    /// Reserved for API parity with the source taxonomy. The global
    /// allocator aborts the process rather than returning an error in safe
    /// Rust, so this variant is never constructed.
    Allocation,
}

impl<E: fmt::Display> fmt::Display for BuildError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Iteration(e) => write!(f, "failed to iterate subset or element source: {e}"),
            BuildError::Comparison => write!(f, "label comparison failed"),
            BuildError::Allocation => write!(f, "allocation failed"),
        }
    }
}

impl<E: Error + 'static> Error for BuildError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::Iteration(e) => Some(e),
            BuildError::Comparison | BuildError::Allocation => None,
        }
    }
}
