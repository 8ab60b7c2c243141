//! Fixed-width field cursor for the mirae stream protocol.
//!
//! This crate provides [`ByteCursor`] and [`ByteWriter`] for reading and writing
//! sequences of big-endian unsigned integers of a configurable [`FieldWidth`].
//! Packet content such as grid frames is laid out as a flat run of such fields.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about packets, grids, or players.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use cursor::{ByteCursor, ByteWriter, FieldWidth};
//!
//! let mut writer = ByteWriter::new(FieldWidth::U8);
//! writer.push(12).unwrap();
//! writer.push(200).unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut cursor = ByteCursor::new(&bytes, FieldWidth::U8);
//! assert_eq!(cursor.pop().unwrap(), 12);
//! assert_eq!(cursor.pop().unwrap(), 200);
//! assert!(cursor.is_empty());
//! ```

mod error;
mod reader;
mod width;
mod writer;

pub use error::{CursorError, CursorResult};
pub use reader::ByteCursor;
pub use width::FieldWidth;
pub use writer::ByteWriter;
