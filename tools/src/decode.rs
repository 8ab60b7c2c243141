//! Full decoding of captured streams.

use anyhow::Result;
use client::{ClientConfig, Session};
use codec::{decode_packet, Message, Surface};
use serde::Serialize;
use serde_json::{json, Value};
use wire::{split_packets, Tail};

/// One decoded packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedPacket {
    pub offset: usize,
    pub kind: String,
    pub message: Value,
}

/// Where decoding stopped early, if it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeStop {
    pub offset: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeOutput {
    pub packets: Vec<DecodedPacket>,
    pub stopped: Option<DecodeStop>,
}

/// Decodes every packet in a capture, tracking the catalog as a client would.
///
/// Decoding stops at the first packet the live client would discard, and at
/// a broken or incomplete tail.
pub fn decode_stream(bytes: &[u8], config: &ClientConfig) -> Result<DecodeOutput> {
    let split = split_packets(bytes, &config.limits);
    let mut session = Session::new();
    let mut packets = Vec::with_capacity(split.packets.len());
    let mut stopped = None;

    for (offset, packet) in &split.packets {
        match decode_packet(packet, session.catalog(), &config.frame_format) {
            Ok(message) => {
                let value = message_json(&message)?;
                if let Message::Catalog(catalog) = message {
                    session.replace_catalog(catalog);
                }
                packets.push(DecodedPacket {
                    offset: *offset,
                    kind: packet.kind.to_string(),
                    message: value,
                });
            }
            Err(err) => {
                stopped = Some(DecodeStop {
                    offset: *offset,
                    reason: err.to_string(),
                });
                break;
            }
        }
    }

    if stopped.is_none() {
        stopped = match split.tail {
            Tail::Clean => None,
            Tail::Incomplete { offset } => Some(DecodeStop {
                offset,
                reason: "incomplete packet".to_string(),
            }),
            Tail::Broken { offset, error } => Some(DecodeStop {
                offset,
                reason: error.to_string(),
            }),
        };
    }

    Ok(DecodeOutput { packets, stopped })
}

fn message_json(message: &Message) -> Result<Value> {
    let value = match message {
        Message::Text(text) => json!({ "text": text }),
        Message::Error(text) => json!({ "error": text }),
        Message::Catalog(catalog) => json!({ "catalog": catalog }),
        Message::Frame { surface, frame } => {
            let surface = match surface {
                Surface::Main => "main",
                Surface::Panel => "panel",
            };
            json!({ "surface": surface, "frame": serde_json::to_value(frame)? })
        }
        Message::Minimap(reference) => json!({ "minimap": reference }),
    };
    Ok(value)
}

/// Renders decode output as a short human-readable summary.
#[must_use]
pub fn format_decode_pretty(output: &DecodeOutput) -> String {
    let mut out = String::new();
    for packet in &output.packets {
        out.push_str(&format!("@{} {}: {}\n", packet.offset, packet.kind, summarize(&packet.message)));
    }
    if let Some(stop) = &output.stopped {
        out.push_str(&format!("stopped at {}: {}\n", stop.offset, stop.reason));
    }
    out
}

fn summarize(message: &Value) -> String {
    if let Some(text) = message.get("text").or_else(|| message.get("error")) {
        return text.to_string();
    }
    if let Some(frame) = message.get("frame") {
        return format!(
            "{} frame {}x{}, {} players",
            message["surface"].as_str().unwrap_or("?"),
            frame["width"],
            frame["height"],
            frame["players"].as_array().map_or(0, Vec::len)
        );
    }
    if let Some(catalog) = message.get("catalog") {
        let len = |key: &str| catalog[key].as_object().map_or(0, serde_json::Map::len);
        return format!(
            "catalog with {} blocks, {} entities, {} preloads",
            len("block_img_id_to_img"),
            len("mob_img_id_to_img"),
            catalog["mob_images_to_load"].as_array().map_or(0, Vec::len)
        );
    }
    match message.get("minimap") {
        Some(Value::String(name)) => format!("minimap {name}"),
        _ => "minimap cleared".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{encode_grid_frame, Catalog, FrameFormat, GridFrame, GridLayers, Rgb};
    use wire::{encode_packet, PacketKind};

    fn capture() -> Vec<u8> {
        let mut catalog = Catalog::default();
        catalog.blocks.insert(1, "stone.png".to_string());
        let frame =
            GridFrame::new(1, 1, Vec::new(), vec![Rgb::new(1, 2, 3)], GridLayers::ColorOnly)
                .unwrap();
        let mut bytes = encode_packet(PacketKind::Text, b"welcome");
        bytes.extend(encode_packet(PacketKind::Init, &catalog.to_json().unwrap()));
        bytes.extend(encode_packet(
            PacketKind::Display,
            &encode_grid_frame(&frame, &FrameFormat::default()).unwrap(),
        ));
        bytes.extend(encode_packet(PacketKind::Img, b"none"));
        bytes
    }

    #[test]
    fn decodes_whole_capture() {
        let output = decode_stream(&capture(), &ClientConfig::default()).unwrap();
        assert_eq!(output.packets.len(), 4);
        assert!(output.stopped.is_none());
        assert_eq!(output.packets[0].message["text"], "welcome");
        assert_eq!(
            output.packets[1].message["catalog"]["block_img_id_to_img"]["1"],
            "stone.png"
        );
        assert_eq!(output.packets[2].message["surface"], "main");
        assert_eq!(output.packets[2].message["frame"]["width"], 1);
        assert_eq!(output.packets[3].message["minimap"], Value::Null);
    }

    #[test]
    fn frame_before_catalog_stops() {
        let frame =
            GridFrame::new(1, 1, Vec::new(), vec![Rgb::new(1, 2, 3)], GridLayers::ColorOnly)
                .unwrap();
        let mut bytes = encode_packet(PacketKind::Text, b"hi");
        bytes.extend(encode_packet(
            PacketKind::StaticDisplay,
            &encode_grid_frame(&frame, &FrameFormat::default()).unwrap(),
        ));
        let output = decode_stream(&bytes, &ClientConfig::default()).unwrap();
        assert_eq!(output.packets.len(), 1);
        let stop = output.stopped.unwrap();
        assert_eq!(stop.offset, 9);
        assert!(stop.reason.contains("init data"));
    }

    #[test]
    fn incomplete_tail_is_reported() {
        let output = decode_stream(b"Text:2:hiErr:5:ba", &ClientConfig::default()).unwrap();
        assert_eq!(output.packets.len(), 1);
        assert_eq!(
            output.stopped,
            Some(DecodeStop {
                offset: 9,
                reason: "incomplete packet".to_string()
            })
        );
    }

    #[test]
    fn pretty_summary_lines() {
        let output = decode_stream(&capture(), &ClientConfig::default()).unwrap();
        let pretty = format_decode_pretty(&output);
        let lines: Vec<&str> = pretty.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "@0 Text: \"welcome\"");
        assert!(lines[1].contains("catalog with 1 blocks, 0 entities, 0 preloads"));
        assert!(lines[2].contains("main frame 1x1, 0 players"));
        assert!(lines[3].ends_with("minimap cleared"));
    }
}
