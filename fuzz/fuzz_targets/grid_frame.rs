#![no_main]

use codec::{decode_grid_frame, encode_grid_frame, FieldWidth, FrameFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for field_width in [FieldWidth::U8, FieldWidth::U16, FieldWidth::U32] {
        let format = FrameFormat { field_width };
        if let Ok(frame) = decode_grid_frame(data, &format) {
            let _ = frame.cells().count();
            let bytes = encode_grid_frame(&frame, &format).expect("decoded frame re-encodes");
            assert!(bytes.len() <= data.len());
        }
    }
});
