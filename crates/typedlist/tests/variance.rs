use typedlist::{Object, ReadView, Result, Sink, Source, TypedList, print_item};

/// Accepts any read-only handle whose elements live at least as long as `anchor`.
fn starts_with<'a>(view: ReadView<'_, &'a str>, anchor: &'a str) -> bool {
    view.get(0).is_ok_and(|first| first.starts_with(anchor))
}

#[test]
fn read_view_is_covariant() {
    let mut list: TypedList<&'static str> = TypedList::new();
    list.add("hello world");

    let prefix = String::from("hello");
    assert!(starts_with(list.read_view(), &prefix));
}

fn fill_bytes<K: Sink<u8>>(sink: &mut K, bytes: &[u8]) {
    for b in bytes {
        sink.add(*b);
    }
}

#[test]
fn wider_list_is_a_narrower_sink() -> Result<()> {
    let mut wide = TypedList::<u64>::new();
    wide.add(u64::MAX);
    fill_bytes(&mut wide, &[1, 2, 3]);

    assert_eq!(wide.len(), 4);
    assert_eq!(*wide.get(0)?, u64::MAX);
    assert_eq!(*wide.get(3)?, 3);

    Ok(())
}

#[test]
fn objects_list_accepts_mixed_values() -> Result<()> {
    let mut list = TypedList::<Object>::new();
    list.add(Box::new(42));
    list.add(Box::new("text"));
    list.add(Box::new(vec![1, 2]));

    assert_eq!(print_item(&list)?, "42");
    assert_eq!(format!("{:?}", list.get(2)?), "[1, 2]");

    Ok(())
}

#[test]
fn concrete_list_reaches_objects_only_by_boxing_each_value() -> Result<()> {
    let mut ints = TypedList::<i32>::new();
    ints.add(1);
    ints.add(2);

    let mut objects = TypedList::<Object>::new();
    for i in 0..ints.len() {
        objects.add(Box::new(*ints.get(i)?));
    }

    assert_eq!(print_item(&objects)?, "1");
    assert_eq!(Source::len(&objects), 2);

    Ok(())
}
