use super::builder::Builder;
use crate::error::{ErrorKind, Result};
use crate::stream::{Mode, Options, Reader, Writer};
use crate::{CompoundTag, CountMode, ListTag, NamedTag, Tag, Value};

fn read_compound(bytes: &[u8], mode: Mode) -> Result<CompoundTag> {
    let mut r = Reader::new(bytes, Options::default());
    let mut compound = CompoundTag::new();
    compound.read(&mut r, mode)?;
    Ok(compound)
}

#[test]
fn insert_get_remove_keep_order() {
    let mut compound = CompoundTag::new();
    compound.insert("b", 1);
    compound.insert("a", 2);
    compound.insert("c", 3);
    assert_eq!(compound.insert("a", 20), Some(Value::Int(2)));

    assert!(compound.has("a"));
    assert_eq!(compound.get("a"), Some(&Value::Int(20)));
    assert_eq!(compound.remove("b"), Some(Value::Int(1)));
    assert!(!compound.has("b"));

    let names: Vec<&str> = compound.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["a", "c"]);
    assert_eq!(compound.count(CountMode::Normal), 2);
}

#[test]
fn read_payload() -> Result<()> {
    let bytes = Builder::new()
        .byte("flag", 1)
        .string("name", "Steve")
        .start_list("pos", Tag::Double, 2)
        .double_payload(1.0)
        .double_payload(2.0)
        .end_compound()
        .build();

    let compound = read_compound(&bytes, Mode::File)?;
    assert_eq!(compound.len(), 3);
    assert_eq!(compound.get("flag"), Some(&Value::Byte(1)));
    assert_eq!(compound.get("name").and_then(Value::as_str), Some("Steve"));

    let pos = compound.get("pos").and_then(Value::as_list).unwrap();
    assert_eq!(pos.element_type(), Tag::Double);
    assert_eq!(pos.get(1), Some(&Value::Double(2.0)));
    Ok(())
}

#[test]
fn read_stops_at_eof() -> Result<()> {
    let bytes = Builder::new().int("a", 1).build();

    let compound = read_compound(&bytes, Mode::File)?;
    assert_eq!(compound.get("a"), Some(&Value::Int(1)));
    Ok(())
}

#[test]
fn read_invalid_tag() {
    let bytes = Builder::new().raw_bytes(&[13]).name("x").build();

    let err = read_compound(&bytes, Mode::File).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidTag(13));
}

#[test]
fn write_skips_end_values() -> Result<()> {
    let mut compound = CompoundTag::new();
    compound.insert("a", Value::Short(5));
    compound.insert("nothing", Value::End);

    let mut w = Writer::new(vec![], Options::default());
    compound.write(&mut w, Mode::File)?;

    let expected = Builder::new()
        .tag(Tag::Short)
        .name("a")
        .short_payload(5)
        .end_compound()
        .build();
    assert_eq!(w.into_inner(), expected);
    Ok(())
}

#[test]
fn list_failure_inside_compound_propagates() {
    let mut compound = CompoundTag::from_iter(vec![ListTag::named(
        "bad",
        vec![
            NamedTag::unnamed(Value::Int(1)),
            NamedTag::unnamed(Value::Long(1)),
        ],
    )]);

    let mut w = Writer::new(vec![], Options::default());
    let err = compound.write(&mut w, Mode::File).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MixedList { .. }));
}

#[test]
fn round_trip_network() -> Result<()> {
    let mut compound = CompoundTag::from_iter(vec![
        NamedTag::new("long", Value::Long(-9)),
        NamedTag::new("ints", Value::IntArray(vec![1, 2, 3])),
        CompoundTag::named("inner", vec![NamedTag::new("x", 1.5f32)]),
    ]);

    let mut w = Writer::new(vec![], Options::network());
    compound.write(&mut w, Mode::Network)?;
    let bytes = w.into_inner();

    let mut r = Reader::new(&bytes, Options::network());
    let mut back = CompoundTag::new();
    back.read(&mut r, Mode::Network)?;

    assert_eq!(back, compound);
    assert!(r.is_eof());
    Ok(())
}

#[test]
fn recursive_count() {
    let compound = CompoundTag::from_iter(vec![
        NamedTag::new("a", 1),
        ListTag::named("b", vec![NamedTag::unnamed(1), NamedTag::unnamed(2)]),
        CompoundTag::named("c", vec![NamedTag::new("d", 1)]),
    ]);

    assert_eq!(compound.count(CountMode::Normal), 3);
    // a, b, b's two ints, c, d
    assert_eq!(compound.count(CountMode::Recursive), 6);
}

#[test]
fn read_refuses_deep_nesting() {
    let mut bytes = vec![];
    for _ in 0..10_000 {
        // An entry holding a compound, with an empty name.
        bytes.extend_from_slice(&[10, 0, 0]);
    }

    let err = read_compound(&bytes, Mode::File).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::TooDeep);
}
