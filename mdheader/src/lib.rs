//! Sega Mega Drive / Genesis cartridge header decoding.
//!
//! The header lives at 0x100..0x200 of the ROM image. All multi-byte
//! integers are big-endian.

mod bytes;
mod error;
pub mod header;
pub mod layout;
mod report;
mod source;

pub use error::{Error, Result};
pub use header::{RomHeader, HEADER_SIZE};
pub use layout::decode;
pub use report::{write_report, Field, FieldId};
pub use source::{inspect, read_header, HeaderBlock, ReadMode, Source, SourceReport};
