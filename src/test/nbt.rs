use super::builder::Builder;
use crate::error::{ErrorKind, Result};
use crate::nbt::{from_bytes, from_bytes_multiple, to_bytes, to_bytes_multiple};
use crate::stream::{Mode, Options};
use crate::{CompoundTag, ListTag, NamedTag, Tag, Value};

fn level() -> NamedTag {
    CompoundTag::named(
        "",
        vec![
            NamedTag::new("DataVersion", 3120),
            NamedTag::new("LevelName", "New World"),
            ListTag::named(
                "Pos",
                vec![
                    NamedTag::unnamed(Value::Double(0.5)),
                    NamedTag::unnamed(Value::Double(64.0)),
                    NamedTag::unnamed(Value::Double(-3.5)),
                ],
            ),
            ListTag::named("Empty", vec![]),
            NamedTag::new("Seed", Value::Long(-1234567890123)),
            NamedTag::new("Blocks", Value::ByteArray(vec![0, 1, -1])),
        ],
    )
}

#[test]
fn read_root_compound() -> Result<()> {
    let bytes = Builder::new()
        .start_compound("root")
        .int("a", 5)
        .tag(Tag::Long)
        .name("big")
        .long_payload(i64::MAX)
        .start_list("l", Tag::String, 2)
        .string_payload("x")
        .string_payload("y")
        .end_compound()
        .build();

    let root = from_bytes(&bytes, Options::default(), Mode::File)?;
    assert_eq!(root.name(), "root");

    let compound = root.value().as_compound().unwrap();
    assert_eq!(compound.get("a"), Some(&Value::Int(5)));
    assert_eq!(compound.get("big"), Some(&Value::Long(i64::MAX)));

    let list = compound.get("l").and_then(Value::as_list).unwrap();
    assert_eq!(list.get(1).and_then(Value::as_str), Some("y"));
    Ok(())
}

#[test]
fn write_root_bytes() -> Result<()> {
    let mut root = ListTag::named("nums", vec![NamedTag::unnamed(Value::Short(7))]);
    let bytes = to_bytes(&mut root, Options::default(), Mode::File)?;

    let expected = Builder::new()
        .start_list("nums", Tag::Short, 1)
        .short_payload(7)
        .build();
    assert_eq!(bytes, expected);
    Ok(())
}

#[test]
fn round_trip_both_modes() -> Result<()> {
    for (options, mode) in [
        (Options::java(), Mode::File),
        (Options::network(), Mode::Network),
    ] {
        let mut root = level();
        let bytes = to_bytes(&mut root, options, mode)?;
        let back = from_bytes(&bytes, options, mode)?;
        assert_eq!(back, root);
    }
    Ok(())
}

#[test]
fn network_encoding_is_smaller() -> Result<()> {
    let file = to_bytes(&mut level(), Options::java(), Mode::File)?;
    let network = to_bytes(&mut level(), Options::network(), Mode::Network)?;
    assert!(network.len() < file.len());
    Ok(())
}

#[test]
fn writing_settles_list_types() -> Result<()> {
    let mut root = level();
    to_bytes(&mut root, Options::default(), Mode::File)?;

    let compound = root.value().as_compound().unwrap();
    let pos = compound.get("Pos").and_then(Value::as_list).unwrap();
    assert_eq!(pos.element_type(), Tag::Double);

    let empty = compound.get("Empty").and_then(Value::as_list).unwrap();
    assert_eq!(empty.element_type(), Tag::End);
    Ok(())
}

#[test]
fn mixed_list_fails_whole_tree() {
    let mut root = CompoundTag::named(
        "",
        vec![ListTag::named(
            "bad",
            vec![
                NamedTag::unnamed(Value::Int(1)),
                NamedTag::unnamed(Value::String("a".to_owned())),
            ],
        )],
    );

    let err = to_bytes(&mut root, Options::default(), Mode::File).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MixedList {
            expected: Tag::Int,
            found: Tag::String
        }
    );
}

#[test]
fn multiple_roots() -> Result<()> {
    let mut tags = vec![
        NamedTag::new("a", Value::Byte(1)),
        NamedTag::new("b", "two"),
        level(),
    ];

    let bytes = to_bytes_multiple(&mut tags, Options::default(), Mode::File)?;
    let back = from_bytes_multiple(&bytes, Options::default(), Mode::File)?;
    assert_eq!(back, tags);
    Ok(())
}

#[test]
fn empty_input_is_end_tag() -> Result<()> {
    let tag = from_bytes(&[], Options::default(), Mode::File)?;
    assert_eq!(tag.tag(), Tag::End);
    assert!(from_bytes_multiple(&[], Options::default(), Mode::File)?.is_empty());
    Ok(())
}

#[test]
fn unknown_root_tag() {
    let err = from_bytes(&[42], Options::default(), Mode::File).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidTag(42));
}

#[test]
fn truncated_root_is_an_error() {
    let bytes = Builder::new().tag(Tag::Long).name("l").raw_bytes(&[0, 0]).build();

    let err = from_bytes(&bytes, Options::default(), Mode::File).unwrap_err();
    assert!(err.is_eof());
}

#[test]
fn negative_array_length() {
    let bytes = Builder::new()
        .tag(Tag::IntArray)
        .name("a")
        .int_payload(-1)
        .build();

    let err = from_bytes(&bytes, Options::default(), Mode::File).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Other);
}

#[test]
fn array_longer_than_input() {
    let bytes = Builder::new()
        .tag(Tag::ByteArray)
        .name("a")
        .int_payload(1000)
        .raw_bytes(&[1, 2, 3])
        .build();

    let err = from_bytes(&bytes, Options::default(), Mode::File).unwrap_err();
    assert!(err.is_eof());
}

#[test]
fn network_string_names() -> Result<()> {
    let bytes = Builder::new()
        .tag(Tag::Int)
        .net_string_payload("hp")
        .net_int_payload(-20)
        .build();

    let tag = from_bytes(&bytes, Options::network(), Mode::Network)?;
    assert_eq!(tag.name(), "hp");
    assert_eq!(tag.value(), &Value::Int(-20));
    Ok(())
}

#[test]
fn json_rendering() -> Result<()> {
    let mut compound = CompoundTag::new();
    compound.insert("b", 1);
    compound.insert("a", ListTag::new(vec![NamedTag::unnamed("x")]));
    compound.insert("bytes", Value::ByteArray(vec![1, -1]));
    let root = NamedTag::new("root", compound);

    let json = serde_json::to_string(&root).unwrap();
    assert_eq!(json, r#"{"root":{"b":1,"a":["x"],"bytes":[1,255]}}"#);
    Ok(())
}
