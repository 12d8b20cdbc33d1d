use std::{fmt, marker::PhantomData};

use log::trace;

use crate::{ListIndex, ReadView, Result, Sink, Source};

/// An ordered, growable list holding values of exactly one type `T`.
///
/// `TypedList` exposes both a producer (`get`) and a consumer (`add`), so it is
/// invariant in `T`: a `TypedList<&'static str>` cannot stand in for a
/// `TypedList<&'a str>`, and a `TypedList<i32>` is never an
/// `TypedList<Object>`. Use [`read_view`](TypedList::read_view) when a covariant
/// handle is needed and [`Sink`] for the contravariant direction.
///
/// A backing `Vec<T>` on its own would be covariant, hence the marker.
///
/// ```compile_fail
/// use typedlist::TypedList;
///
/// fn matches<'a>(list: &TypedList<&'a str>, anchor: &'a str) -> bool {
///     list.get(0).is_ok_and(|first| *first == anchor)
/// }
///
/// let mut list: TypedList<&'static str> = TypedList::new();
/// list.add("hello");
/// let local = String::from("hello");
/// matches(&list, &local);
/// ```
pub struct TypedList<T> {
    items: Vec<T>,
    _invariant: PhantomData<fn(T) -> T>,
}

impl<T> TypedList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _invariant: PhantomData,
        }
    }

    /// Appends `item` to the end of the list.
    pub fn add(&mut self, item: T) {
        trace!("add at {}", self.items.len());
        self.items.push(item);
    }

    /// Returns the element at the 0-based `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) when
    /// `index` is negative or not below [`len`](TypedList::len).
    ///
    /// ```
    /// use typedlist::{Error, TypedList};
    ///
    /// let mut list = TypedList::new();
    /// list.add(1);
    /// list.add(2);
    ///
    /// assert_eq!(list.get(1), Ok(&2));
    /// assert_eq!(list.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn get<I: ListIndex>(&self, index: I) -> Result<&T> {
        Source::get(self, index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only handle over the current contents.
    ///
    /// Unlike the list itself, the view is covariant in `T`.
    #[inline]
    pub fn read_view(&self) -> ReadView<'_, T> {
        ReadView::new(&self.items)
    }
}

impl<T> Default for TypedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for TypedList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            _invariant: PhantomData,
        }
    }
}

impl<T: PartialEq> PartialEq for TypedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for TypedList<T> {}

impl<T: fmt::Debug> fmt::Debug for TypedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> Source<T> for TypedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn get_at(&self, offset: usize) -> Option<&T> {
        self.items.get(offset)
    }
}

impl<S, T> Sink<T> for TypedList<S>
where
    T: Into<S>,
{
    #[inline]
    fn add(&mut self, item: T) {
        TypedList::add(self, item.into());
    }
}
