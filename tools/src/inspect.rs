//! Packet-level inspection of captured streams.

use serde::Serialize;
use wire::{split_packets, Limits, Tail};

/// One framed packet in a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PacketSummary {
    pub offset: usize,
    pub kind: String,
    pub declared_len: usize,
    pub wire_len: usize,
}

/// How a capture ends after the last complete packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TailSummary {
    Clean,
    Incomplete { offset: usize, bytes: usize },
    Broken { offset: usize, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub total_bytes: usize,
    pub packets: Vec<PacketSummary>,
    pub tail: TailSummary,
}

impl InspectReport {
    /// Bytes covered by complete packets.
    #[must_use]
    pub fn framed_bytes(&self) -> usize {
        self.packets.iter().map(|packet| packet.wire_len).sum()
    }
}

/// Frames every packet in `bytes` without decoding content.
#[must_use]
pub fn inspect_stream(bytes: &[u8], limits: &Limits) -> InspectReport {
    let split = split_packets(bytes, limits);
    let packets = split
        .packets
        .iter()
        .map(|(offset, packet)| PacketSummary {
            offset: *offset,
            kind: packet.kind.to_string(),
            declared_len: packet.content.len(),
            wire_len: packet.wire_len(),
        })
        .collect();
    let tail = match split.tail {
        Tail::Clean => TailSummary::Clean,
        Tail::Incomplete { offset } => TailSummary::Incomplete {
            offset,
            bytes: bytes.len() - offset,
        },
        Tail::Broken { offset, error } => TailSummary::Broken {
            offset,
            error: error.to_string(),
        },
    };
    InspectReport {
        total_bytes: bytes.len(),
        packets,
        tail,
    }
}

/// Renders a report as human-readable lines.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let mut out = format!(
        "{} packets, {} of {} bytes framed\n",
        report.packets.len(),
        report.framed_bytes(),
        report.total_bytes
    );
    for packet in &report.packets {
        out.push_str(&format!(
            "  @{:<8} {:<14} {} bytes\n",
            packet.offset, packet.kind, packet.declared_len
        ));
    }
    match &report.tail {
        TailSummary::Clean => {}
        TailSummary::Incomplete { offset, bytes } => {
            out.push_str(&format!("incomplete packet at {offset} ({bytes} bytes)\n"));
        }
        TailSummary::Broken { offset, error } => {
            out.push_str(&format!("stream broken at {offset}: {error}\n"));
        }
    }
    out
}
