//! Common utilities for texel.
//!
//! This crate provides the foundational pieces shared by the texel crates:
//!
//! - [`BinaryReader`] - Bounds-checked, zero-copy reading from byte slices
//! - [`Error`] - Errors raised while reading raw bytes

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Re-export byteorder so callers can pick a byte order for [`BinaryReader::read_u32_as`].
pub use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
