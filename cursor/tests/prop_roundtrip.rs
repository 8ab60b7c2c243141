use cursor::{ByteCursor, ByteWriter, CursorError, FieldWidth};
use proptest::prelude::*;

fn width_strategy() -> impl Strategy<Value = FieldWidth> {
    prop_oneof![
        Just(FieldWidth::U8),
        Just(FieldWidth::U16),
        Just(FieldWidth::U32),
    ]
}

fn mask_value(width: FieldWidth, value: u32) -> u32 {
    value & width.max_value()
}

proptest! {
    #[test]
    fn prop_fields_read_back_in_order(
        width in width_strategy(),
        values in prop::collection::vec(any::<u32>(), 0..64),
    ) {
        let values: Vec<u32> = values.into_iter().map(|v| mask_value(width, v)).collect();
        let mut writer = ByteWriter::new(width);
        for value in &values {
            writer.push(*value).unwrap();
        }
        let bytes = writer.finish();
        prop_assert_eq!(bytes.len(), values.len() * width.bytes());

        let mut cursor = ByteCursor::new(&bytes, width);
        prop_assert_eq!(cursor.fields_remaining(), values.len());
        for value in &values {
            prop_assert_eq!(cursor.pop().unwrap(), *value);
        }
        prop_assert!(cursor.is_empty());
        let exhausted = matches!(cursor.pop(), Err(CursorError::OutOfBounds { .. }));
        prop_assert!(exhausted);
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(
        width in width_strategy(),
        data in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        let mut cursor = ByteCursor::new(&data, width);
        let mut reads = 0usize;
        while cursor.pop().is_ok() {
            reads += 1;
        }
        prop_assert_eq!(reads, data.len() / width.bytes());
        prop_assert_eq!(cursor.remaining(), data.len() % width.bytes());
    }
}
