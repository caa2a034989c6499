//! KTX 1.1 texture header codec.
//!
//! Parses the fixed 64-byte KTX header into a normalized
//! [`TextureDescriptor`] and builds headers for the write path. Everything
//! needed to interpret the pixel payload (pitches, block dimensions, sRGB
//! and compression classification, the equivalent Vulkan format) is derived
//! from the `glInternalFormat`/`glFormat`/`glType` triple by the tables in
//! [`format`].
//!
//! Parsing is lenient: only a wrong identifier is an error. Unknown format
//! values fall back to documented defaults, and inconsistent headers still
//! produce a descriptor. [`ParsedKtx::strict`] layers the stricter checks
//! on top.
//!
//! # Example
//!
//! ```
//! use texel_ktx::format::{GlFormat, GlInternalFormat, VkFormat};
//! use texel_ktx::{parse, Extent, FormatSet, KtxHeader, Topology};
//!
//! let formats =
//!     FormatSet::compressed(GlInternalFormat::COMPRESSED_RGBA_S3TC_DXT5, GlFormat::RGBA);
//! let header = KtxHeader::encode(
//!     formats,
//!     Extent::new(256, 256, 0),
//!     Topology::TwoDimensional,
//!     9,
//!     0,
//! );
//!
//! let parsed = parse(&header.to_bytes())?;
//! let desc = parsed.descriptor;
//!
//! assert_eq!(desc.vk_format, VkFormat::BC3_UNORM_BLOCK);
//! assert_eq!((desc.block_width, desc.block_height), (4, 4));
//! assert_eq!(desc.row_pitch, 1024);
//! assert_eq!(parsed.payload_offset, 68);
//! # Ok::<(), texel_ktx::Error>(())
//! ```

mod descriptor;
mod error;
pub mod format;
mod header;
mod metadata;
mod parse;
pub mod validate;

pub use descriptor::{Extent, FormatSet, TextureDescriptor, Topology};
pub use error::{Error, Result};
pub use header::{HeaderByteOrder, KtxHeader};
pub use metadata::{KeyValue, KeyValueIter};
pub use parse::{parse, parse_with, ParseOptions, ParsedKtx};
pub use validate::Violation;
