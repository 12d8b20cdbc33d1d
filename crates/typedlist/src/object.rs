use std::fmt::Debug;

use log::info;

use crate::{Result, TypedList};

/// Top of the element hierarchy: any value that can be debug-printed.
pub type Object = Box<dyn Debug>;

/// Reads the first element of a list of [`Object`]s, logs it and returns its
/// rendering.
///
/// Only a `TypedList<Object>` is accepted. A list of a concrete element type is a
/// different type, even though each of its elements could be boxed into an
/// `Object`:
///
/// ```compile_fail
/// use typedlist::{TypedList, print_item};
///
/// let mut list = TypedList::<i32>::new();
/// list.add(1);
/// list.add(2);
///
/// print_item(&list);
/// ```
///
/// An empty list fails with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange).
///
/// ```
/// use typedlist::{Object, TypedList, print_item};
///
/// let mut list = TypedList::<Object>::new();
/// list.add(Box::new(1));
/// list.add(Box::new("two"));
///
/// assert_eq!(print_item(&list).unwrap(), "1");
/// ```
pub fn print_item(list: &TypedList<Object>) -> Result<String> {
    let item = list.get(0_usize)?;
    let rendered = format!("{item:?}");
    info!("{rendered}");
    Ok(rendered)
}
