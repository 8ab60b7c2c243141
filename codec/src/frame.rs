//! Grid frame decoding and encoding.
//!
//! Frame content is a flat run of fixed-width fields:
//!
//! ```text
//! width height player_count resolution_flag
//! (id x y) * player_count
//! (r g b) * width*height
//! block_id * width*height      -- only when resolution_flag == 1
//! entity_id * width*height     -- only when resolution_flag == 1
//! ```

use cursor::{ByteCursor, ByteWriter, FieldWidth};
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// Block or entity id meaning "absent".
pub const SENTINEL_ID: u8 = 255;

/// Fields preceding the player list.
const HEADER_FIELDS: usize = 4;
const PLAYER_FIELDS: usize = 3;
const COLOR_FIELDS: usize = 3;

/// Layout parameters for grid frame content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameFormat {
    /// Width of every field in the frame content.
    pub field_width: FieldWidth,
}

/// A player marker on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    pub id: u8,
    pub x: u16,
    pub y: u16,
}

impl Player {
    /// Two lowercase hex digits identifying the player on screen.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02x}", self.id)
    }

    /// Lookup key for the player's cell, `(y << 8) + x`.
    #[must_use]
    pub fn position_hash(&self) -> u32 {
        (u32::from(self.y) << 8) + u32::from(self.x)
    }
}

/// A cell color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Optional per-cell layers, present only in full-resolution frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum GridLayers {
    /// Colors already include the block color; nothing else to draw.
    ColorOnly,
    /// Colors are lighting over a block texture, with entities on top.
    Detailed {
        /// Block image id per cell, [`SENTINEL_ID`] for color only.
        block_ids: Vec<u8>,
        /// Entity id per cell, [`SENTINEL_ID`] for no entity.
        entity_ids: Vec<u8>,
    },
}

impl GridLayers {
    /// Returns the resolution flag written on the wire.
    #[must_use]
    pub const fn resolution_flag(&self) -> u8 {
        match self {
            Self::ColorOnly => 0,
            Self::Detailed { .. } => 1,
        }
    }
}

/// One decoded snapshot of a rendered area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridFrame {
    pub width: u16,
    pub height: u16,
    pub players: Vec<Player>,
    /// Row-major, one per cell.
    pub colors: Vec<Rgb>,
    pub layers: GridLayers,
}

/// A single cell with its layers resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
    pub color: Rgb,
    /// Block texture id, `None` when the color is the whole cell.
    pub block: Option<u8>,
    /// Entity drawn on the cell.
    pub entity: Option<u8>,
}

impl GridFrame {
    /// Builds a frame, checking that every layer has one entry per cell.
    pub fn new(
        width: u16,
        height: u16,
        players: Vec<Player>,
        colors: Vec<Rgb>,
        layers: GridLayers,
    ) -> CodecResult<Self> {
        let frame = Self {
            width,
            height,
            players,
            colors,
            layers,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns `true` if the frame carries block and entity layers.
    #[must_use]
    pub const fn is_detailed(&self) -> bool {
        matches!(self.layers, GridLayers::Detailed { .. })
    }

    /// Checks that every layer has one entry per cell.
    pub fn validate(&self) -> CodecResult<()> {
        let expected = self.cell_count();
        check_layer("color", expected, self.colors.len())?;
        if let GridLayers::Detailed {
            block_ids,
            entity_ids,
        } = &self.layers
        {
            check_layer("block", expected, block_ids.len())?;
            check_layer("entity", expected, entity_ids.len())?;
        }
        Ok(())
    }

    /// Iterates cells in row-major order with sentinel ids resolved to `None`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = usize::from(self.width.max(1));
        self.colors.iter().enumerate().map(move |(index, &color)| {
            let (block, entity) = match &self.layers {
                GridLayers::ColorOnly => (None, None),
                GridLayers::Detailed {
                    block_ids,
                    entity_ids,
                } => (
                    block_ids.get(index).copied().filter(|&id| id != SENTINEL_ID),
                    entity_ids.get(index).copied().filter(|&id| id != SENTINEL_ID),
                ),
            };
            Cell {
                x: (index % width) as u16,
                y: (index / width) as u16,
                color,
                block,
                entity,
            }
        })
    }

    /// Pixel size of one cell when the grid is stretched over a canvas.
    ///
    /// Each dimension is rounded to the nearest pixel, half up.
    #[must_use]
    pub fn cell_size(&self, canvas_width: u32, canvas_height: u32) -> (u32, u32) {
        (
            rounded_div(canvas_width, u32::from(self.width)),
            rounded_div(canvas_height, u32::from(self.height)),
        )
    }
}

fn rounded_div(total: u32, parts: u32) -> u32 {
    if parts == 0 {
        return 0;
    }
    let total = u64::from(total);
    let parts = u64::from(parts);
    u32::try_from((2 * total + parts) / (2 * parts)).unwrap_or(u32::MAX)
}

fn check_layer(layer: &'static str, expected: usize, actual: usize) -> CodecResult<()> {
    if expected != actual {
        return Err(CodecError::LayerLength {
            layer,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Decodes grid frame content.
///
/// The field count implied by the frame header is checked against the content
/// length before any per-cell data is read, so a short frame fails fast with
/// [`CodecError::FrameTooShort`]. Bytes past the last layer are ignored.
pub fn decode_grid_frame(content: &[u8], format: &FrameFormat) -> CodecResult<GridFrame> {
    let field_bytes = format.field_width.bytes();
    ensure_len(content, HEADER_FIELDS * field_bytes)?;

    let mut cursor = ByteCursor::new(content, format.field_width);
    let width = cursor.pop_u16()?;
    let height = cursor.pop_u16()?;
    let player_count = usize::from(cursor.pop_u16()?);
    let detailed = cursor.pop()? == 1;

    let cells = usize::from(width) * usize::from(height);
    let layer_fields = if detailed { 2 * cells } else { 0 };
    let needed = (HEADER_FIELDS + PLAYER_FIELDS * player_count + COLOR_FIELDS * cells + layer_fields)
        .checked_mul(field_bytes)
        .unwrap_or(usize::MAX);
    ensure_len(content, needed)?;

    let mut players = Vec::with_capacity(player_count);
    for _ in 0..player_count {
        players.push(Player {
            id: cursor.pop_u8()?,
            x: cursor.pop_u16()?,
            y: cursor.pop_u16()?,
        });
    }

    let mut colors = Vec::with_capacity(cells);
    for _ in 0..cells {
        colors.push(Rgb {
            r: cursor.pop_u8()?,
            g: cursor.pop_u8()?,
            b: cursor.pop_u8()?,
        });
    }

    let layers = if detailed {
        let block_ids = pop_layer(&mut cursor, cells)?;
        let entity_ids = pop_layer(&mut cursor, cells)?;
        GridLayers::Detailed {
            block_ids,
            entity_ids,
        }
    } else {
        GridLayers::ColorOnly
    };

    if !cursor.is_empty() {
        tracing::debug!(
            trailing = cursor.remaining(),
            "ignoring bytes after the last grid layer"
        );
    }

    Ok(GridFrame {
        width,
        height,
        players,
        colors,
        layers,
    })
}

/// Encodes a grid frame as frame packet content.
///
/// A color-only frame writes resolution flag 0 and no block or entity layers.
pub fn encode_grid_frame(frame: &GridFrame, format: &FrameFormat) -> CodecResult<Vec<u8>> {
    frame.validate()?;
    let cells = frame.cell_count();
    let layer_fields = if frame.is_detailed() { 2 * cells } else { 0 };
    let fields = HEADER_FIELDS
        + PLAYER_FIELDS * frame.players.len()
        + COLOR_FIELDS * cells
        + layer_fields;

    let mut writer = ByteWriter::with_capacity(format.field_width, fields);
    writer.push(u32::from(frame.width))?;
    writer.push(u32::from(frame.height))?;
    writer.push(u32::try_from(frame.players.len()).unwrap_or(u32::MAX))?;
    writer.push(u32::from(frame.layers.resolution_flag()))?;
    for player in &frame.players {
        writer.push(u32::from(player.id))?;
        writer.push(u32::from(player.x))?;
        writer.push(u32::from(player.y))?;
    }
    for color in &frame.colors {
        writer.extend([color.r, color.g, color.b])?;
    }
    if let GridLayers::Detailed {
        block_ids,
        entity_ids,
    } = &frame.layers
    {
        writer.extend(block_ids.iter().copied())?;
        writer.extend(entity_ids.iter().copied())?;
    }
    Ok(writer.finish())
}

fn pop_layer(cursor: &mut ByteCursor<'_>, cells: usize) -> CodecResult<Vec<u8>> {
    let mut layer = Vec::with_capacity(cells);
    for _ in 0..cells {
        layer.push(cursor.pop_u8()?);
    }
    Ok(layer)
}

fn ensure_len(content: &[u8], needed: usize) -> CodecResult<()> {
    if content.len() < needed {
        return Err(CodecError::FrameTooShort {
            needed,
            available: content.len(),
        });
    }
    Ok(())
}
