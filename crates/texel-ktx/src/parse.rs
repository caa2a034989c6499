//! Header parsing.

use byteorder::{ByteOrder, NativeEndian};
use texel_common::BinaryReader;

use crate::descriptor::TextureDescriptor;
use crate::header::{HeaderByteOrder, KtxHeader};
use crate::metadata::KeyValueIter;
use crate::validate::{self, Violation};
use crate::{Error, Result};

/// Options for [`parse_with`].
///
/// The default is lenient and byte-order-sensitive: headers whose
/// endianness marker does not match the host are read as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Byte-swap headers written on a host of the opposite byte order.
    pub swap_foreign_byte_order: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable byte swapping of foreign headers.
    pub fn swap_foreign_byte_order(mut self, enabled: bool) -> Self {
        self.swap_foreign_byte_order = enabled;
        self
    }
}

/// A parsed KTX header.
///
/// Holds no reference into the buffer it came from; the buffer-based
/// accessors must be given that same buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKtx {
    pub descriptor: TextureDescriptor,
    /// The header as interpreted, after any byte swapping.
    pub header: KtxHeader,
    /// Byte order the header was written in.
    pub source_byte_order: HeaderByteOrder,
    /// Byte offset of the first mip level's pixel data.
    pub payload_offset: usize,
}

impl ParsedKtx {
    /// Check if the header was byte-swapped while parsing.
    pub fn was_swapped(&self) -> bool {
        self.source_byte_order == HeaderByteOrder::Swapped
            && self.header.byte_order() == HeaderByteOrder::Native
    }

    /// Read the `imageSize` prefix of mip level 0.
    ///
    /// The value is not compared against the descriptor; see
    /// [`validate::check`] for that.
    pub fn image_size(&self, buffer: &[u8]) -> Result<u32> {
        let offset = self.payload_offset - 4;
        let bytes = buffer.get(offset..self.payload_offset).ok_or(Error::Truncated {
            needed: self.payload_offset,
            available: buffer.len(),
        })?;

        let size = NativeEndian::read_u32(bytes);
        Ok(if self.was_swapped() { size.swap_bytes() } else { size })
    }

    /// Iterate over the key/value metadata.
    pub fn metadata<'a>(&self, buffer: &'a [u8]) -> Result<KeyValueIter<'a>> {
        let start = self.header.metadata_offset();
        let end = start.saturating_add(self.header.bytes_of_key_value_data as usize);
        let region = buffer.get(start..end).ok_or(Error::Truncated {
            needed: end,
            available: buffer.len(),
        })?;

        Ok(KeyValueIter::new(region, self.was_swapped()))
    }

    /// Pixel data from mip level 0 to the end of the buffer.
    pub fn payload<'a>(&self, buffer: &'a [u8]) -> Option<&'a [u8]> {
        buffer.get(self.payload_offset..)
    }

    /// Run the strict checks, failing on the first violation.
    pub fn strict(&self, buffer: &[u8]) -> Result<()> {
        match validate::check(self, buffer).into_iter().next() {
            Some(violation) => Err(Error::Violation(violation)),
            None => Ok(()),
        }
    }

    /// Run the strict checks and collect every violation.
    pub fn violations(&self, buffer: &[u8]) -> Vec<Violation> {
        validate::check(self, buffer)
    }
}

/// Parse a KTX 1.1 header with default options.
///
/// Only a bad identifier is a hard error; every other anomaly yields a
/// best-effort descriptor.
pub fn parse(buffer: &[u8]) -> Result<ParsedKtx> {
    parse_with(buffer, &ParseOptions::default())
}

/// Parse a KTX 1.1 header.
pub fn parse_with(buffer: &[u8], options: &ParseOptions) -> Result<ParsedKtx> {
    check_identifier(buffer)?;

    let mut reader = BinaryReader::new(buffer);
    let raw: KtxHeader = reader.read_struct().map_err(|_| Error::Truncated {
        needed: KtxHeader::SIZE,
        available: buffer.len(),
    })?;

    let source_byte_order = raw.byte_order();
    let header = match source_byte_order {
        HeaderByteOrder::Native => raw,
        HeaderByteOrder::Swapped if options.swap_foreign_byte_order => {
            log::debug!("byte-swapping header written with foreign byte order");
            raw.swap_bytes()
        }
        HeaderByteOrder::Swapped => {
            log::warn!("header was written with foreign byte order; reading fields unswapped");
            raw
        }
        HeaderByteOrder::Unrecognized(marker) => {
            log::warn!("unrecognized endianness marker {marker:#010x}; reading fields as-is");
            raw
        }
    };

    Ok(ParsedKtx {
        descriptor: TextureDescriptor::from_header(&header),
        header,
        source_byte_order,
        payload_offset: header.payload_offset(),
    })
}

/// Compare the first 12 bytes against the identifier, reading nothing else.
fn check_identifier(buffer: &[u8]) -> Result<()> {
    let len = buffer.len().min(KtxHeader::IDENTIFIER.len());
    let mut identifier = [0u8; 12];
    identifier[..len].copy_from_slice(&buffer[..len]);

    if len == identifier.len() && identifier == KtxHeader::IDENTIFIER {
        Ok(())
    } else {
        Err(Error::NotAKtxFile { identifier })
    }
}
