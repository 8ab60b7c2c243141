#![no_main]

use client::{ClientConfig, NullRenderer, StreamReassembler};
use codec::Catalog;
use libfuzzer_sys::fuzz_target;
use wire::{encode_packet, PacketKind};

fuzz_target!(|data: &[u8]| {
    let config = if data.first().is_some_and(|byte| byte & 1 == 1) {
        ClientConfig {
            limits: wire::Limits::relative(),
            ..ClientConfig::default()
        }
    } else {
        ClientConfig::default()
    };
    let mut reassembler = StreamReassembler::with_config(config, NullRenderer);

    // Start with a catalog so frame packets reach the grid decoder.
    if let Ok(json) = Catalog::default().to_json() {
        reassembler.feed(&encode_packet(PacketKind::Init, &json));
    }

    let mut idx = 0usize;
    while idx < data.len() && idx < 4096 {
        let len = (data[idx] as usize % 64).saturating_add(1);
        idx += 1;
        let end = (idx + len).min(data.len());
        let report = reassembler.feed(&data[idx..end]);
        idx = end;
        if report.discarded.is_some() {
            assert!(reassembler.buffered().is_empty());
        }
    }
});
