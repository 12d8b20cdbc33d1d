use log::debug;

use crate::{Error, ListIndex, Result};

/// Producer capability: read access by index, nothing else.
///
/// A handle that only produces values can safely be covariant in `T`, which is
/// what [`ReadView`] relies on. Implementors provide [`len`] and [`get_at`];
/// the bounds-checked, typed-index [`get`] is derived from them.
///
/// [`ReadView`]: crate::ReadView
/// [`len`]: Source::len
/// [`get_at`]: Source::get_at
/// [`get`]: Source::get
pub trait Source<T> {
    /// Number of elements available.
    fn len(&self) -> usize;

    /// Returns the element at raw `offset`, or `None` if out of bounds.
    fn get_at(&self, offset: usize) -> Option<&T>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index` is negative or not
    /// below [`len`](Source::len).
    fn get<I: ListIndex>(&self, index: I) -> Result<&T>
    where
        Self: Sized,
    {
        index
            .to_offset()
            .and_then(|offset| self.get_at(offset))
            .ok_or_else(|| out_of_range(index, self.len()))
    }

    /// Returns the element at index 0.
    #[inline]
    fn first(&self) -> Result<&T>
    where
        Self: Sized,
    {
        self.get(0_usize)
    }
}

pub(crate) fn out_of_range<I: ListIndex>(index: I, len: usize) -> Error {
    debug!("rejected lookup at {index:?} (len: {len})");
    Error::IndexOutOfRange {
        index: index.to_signed(),
        len,
    }
}
