//! Texel - KTX texture header inspection and construction library.
//!
//! This crate provides a unified interface to the texel library ecosystem.
//!
//! # Crates
//!
//! - [`texel_common`] - Common utilities (bounded binary reading)
//! - [`texel_ktx`] - KTX 1.1 header codec, format tables and descriptors
//!
//! # Example
//!
//! ```no_run
//! use texel::prelude::*;
//!
//! let data = std::fs::read("texture.ktx")?;
//! let parsed = parse(&data)?;
//!
//! let desc = parsed.descriptor;
//! println!("{} {}x{} -> {}", desc.internal_format, desc.width, desc.height, desc.vk_format);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use texel_common as common;
pub use texel_ktx as ktx;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use texel_common::BinaryReader;
    pub use texel_ktx::format::{vk_format_for, GlFormat, GlInternalFormat, GlType, VkFormat};
    pub use texel_ktx::{
        parse, parse_with, Extent, FormatSet, KtxHeader, ParseOptions, ParsedKtx,
        TextureDescriptor, Topology,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
