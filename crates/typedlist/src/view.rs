use crate::{ListIndex, Result, Source, traits::source::out_of_range};

/// Read-only handle over the elements of a [`TypedList`](crate::TypedList).
///
/// The view only produces values, so it is covariant in `T`: a
/// `ReadView<'_, &'static str>` is accepted wherever a `ReadView<'_, &'a str>` is
/// expected. It never exposes `add`.
///
/// ```
/// use typedlist::{ReadView, TypedList};
///
/// fn matches<'a>(view: ReadView<'_, &'a str>, anchor: &'a str) -> bool {
///     view.get(0).is_ok_and(|first| *first == anchor)
/// }
///
/// let mut list: TypedList<&'static str> = TypedList::new();
/// list.add("hello");
/// let local = String::from("hello");
/// assert!(matches(list.read_view(), &local));
/// ```
#[derive(Debug)]
pub struct ReadView<'a, T> {
    items: &'a [T],
}

impl<'a, T> ReadView<'a, T> {
    #[inline]
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Returns the element at `index`, borrowed for the lifetime of the list
    /// rather than the view.
    #[inline]
    pub fn get<I: ListIndex>(&self, index: I) -> Result<&'a T> {
        let items = self.items;
        index
            .to_offset()
            .and_then(|offset| items.get(offset))
            .ok_or_else(|| out_of_range(index, items.len()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Clone for ReadView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadView<'_, T> {}

impl<T> Source<T> for ReadView<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn get_at(&self, offset: usize) -> Option<&T> {
        self.items.get(offset)
    }
}
