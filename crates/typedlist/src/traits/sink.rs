/// Consumer capability: append only.
///
/// A consumer of `S` can take any value that converts into `S`, so
/// [`TypedList<S>`](crate::TypedList) implements `Sink<T>` for every `T: Into<S>`.
/// Code written against `Sink<Narrow>` therefore accepts a list of a wider element
/// type, the contravariant direction.
pub trait Sink<T> {
    fn add(&mut self, item: T);
}
