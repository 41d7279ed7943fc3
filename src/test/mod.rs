use crate::Tag;

mod compound;
mod nbt;


macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
    }

    for value in 12..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn only_lists_and_compounds_are_containers() {
    assert!(Tag::List.is_container());
    assert!(Tag::Compound.is_container());
    assert!(!Tag::IntArray.is_container());
    assert!(!Tag::End.is_container());
}
