use codec::{
    decode_packet, encode_grid_frame, Catalog, CodecError, FrameFormat, GridFrame, GridLayers,
    Message, Player, Rgb, Surface, SENTINEL_ID,
};
use proptest::prelude::*;
use wire::{encode_packet, extract_packet, Extracted, Limits, PacketKind};

fn catalog_with_blocks() -> Catalog {
    let mut catalog = Catalog::default();
    catalog.blocks.insert(0, "grass.png".to_string());
    catalog.entities.insert(1, "wolf.png".to_string());
    catalog
}

fn detailed_frame() -> GridFrame {
    GridFrame::new(
        2,
        2,
        vec![Player { id: 1, x: 0, y: 1 }, Player { id: 2, x: 1, y: 1 }],
        vec![Rgb::new(200, 200, 200); 4],
        GridLayers::Detailed {
            block_ids: vec![0, 0, SENTINEL_ID, 0],
            entity_ids: vec![SENTINEL_ID, 1, SENTINEL_ID, SENTINEL_ID],
        },
    )
    .unwrap()
}

#[test]
fn integration_frame_through_wire_packet() {
    let frame = detailed_frame();
    let content = encode_grid_frame(&frame, &FrameFormat::default()).unwrap();
    let bytes = encode_packet(PacketKind::Display, &content);

    let Extracted::Packet { packet, consumed } =
        extract_packet(&bytes, &Limits::default()).unwrap()
    else {
        panic!("expected a complete packet");
    };
    assert_eq!(consumed, bytes.len());

    let catalog = catalog_with_blocks();
    let message = decode_packet(&packet, Some(&catalog), &FrameFormat::default()).unwrap();
    assert_eq!(
        message,
        Message::Frame {
            surface: Surface::Main,
            frame: frame.clone(),
        }
    );

    let textured: Vec<_> = frame
        .cells()
        .filter_map(|cell| cell.block.and_then(|id| catalog.block_image(id)))
        .collect();
    assert_eq!(textured, vec!["grass.png"; 3]);
}

#[test]
fn integration_init_then_lookup() {
    let catalog = catalog_with_blocks();
    let bytes = encode_packet(PacketKind::Init, &catalog.to_json().unwrap());
    let Extracted::Packet { packet, .. } = extract_packet(&bytes, &Limits::default()).unwrap()
    else {
        panic!("expected a complete packet");
    };
    let Message::Catalog(decoded) = decode_packet(&packet, None, &FrameFormat::default()).unwrap()
    else {
        panic!("expected catalog");
    };
    assert_eq!(decoded.entity_image(1), Some("wolf.png"));
}

#[test]
fn integration_truncated_frame_inside_complete_packet() {
    let content = encode_grid_frame(&detailed_frame(), &FrameFormat::default()).unwrap();
    let truncated = &content[..content.len() - 1];
    let bytes = encode_packet(PacketKind::StaticDisplay, truncated);
    let Extracted::Packet { packet, .. } = extract_packet(&bytes, &Limits::default()).unwrap()
    else {
        panic!("outer framing is complete");
    };
    let err = decode_packet(&packet, Some(&Catalog::default()), &FrameFormat::default())
        .unwrap_err();
    assert!(matches!(err, CodecError::FrameTooShort { .. }));
}

proptest! {
    #[test]
    fn prop_frame_decoder_never_panics(data in prop::collection::vec(any::<u8>(), 0..96)) {
        let catalog = Catalog::default();
        let packet = wire::Packet { kind: PacketKind::Display, content: &data };
        if let Ok(Message::Frame { frame, .. }) =
            decode_packet(&packet, Some(&catalog), &FrameFormat::default())
        {
            prop_assert!(frame.validate().is_ok());
        }
    }

    #[test]
    fn prop_any_truncation_is_frame_too_short(cut in 0usize..21) {
        let content = encode_grid_frame(&detailed_frame(), &FrameFormat::default()).unwrap();
        prop_assume!(cut < content.len());
        let err = codec::decode_grid_frame(&content[..cut], &FrameFormat::default()).unwrap_err();
        let is_short = matches!(err, CodecError::FrameTooShort { .. });
        prop_assert!(is_short);
    }
}
