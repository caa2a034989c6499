//! Normalized texture descriptors.

use crate::format::{vk_format_for, GlFormat, GlInternalFormat, GlType, VkFormat};
use crate::header::KtxHeader;

/// Dimensional classification of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    OneDimensional,
    TwoDimensional,
    ThreeDimensional,
    CubeMap,
}

impl Topology {
    /// Classify raw header counts.
    ///
    /// Faces win over depth, depth over height. Zero counts are treated like
    /// one, so this must be given the values as stored.
    pub fn from_counts(faces: u32, depth: u32, height: u32) -> Self {
        if faces > 1 {
            Self::CubeMap
        } else if depth > 1 {
            Self::ThreeDimensional
        } else if height > 1 {
            Self::TwoDimensional
        } else {
            Self::OneDimensional
        }
    }

    /// Check if this is a cube map.
    pub fn is_cube_map(self) -> bool {
        self == Self::CubeMap
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::OneDimensional => "1D",
            Self::TwoDimensional => "2D",
            Self::ThreeDimensional => "3D",
            Self::CubeMap => "cube",
        };
        f.write_str(name)
    }
}

/// Pixel dimensions of mip level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Replace zero height and depth with one.
    pub const fn normalized(self) -> Self {
        Self {
            width: self.width,
            height: if self.height == 0 { 1 } else { self.height },
            depth: if self.depth == 0 { 1 } else { self.depth },
        }
    }
}

/// The OpenGL format enumerants carried by a KTX header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatSet {
    pub internal_format: GlInternalFormat,
    pub format: GlFormat,
    pub component_type: GlType,
    pub base_internal_format: GlFormat,
}

impl FormatSet {
    pub const fn new(
        internal_format: GlInternalFormat,
        format: GlFormat,
        component_type: GlType,
        base_internal_format: GlFormat,
    ) -> Self {
        Self {
            internal_format,
            format,
            component_type,
            base_internal_format,
        }
    }

    /// Formats for a block-compressed image, where `glFormat` and `glType`
    /// must both be zero.
    pub const fn compressed(
        internal_format: GlInternalFormat,
        base_internal_format: GlFormat,
    ) -> Self {
        Self::new(internal_format, GlFormat::NONE, GlType::NONE, base_internal_format)
    }

    /// Check the structural compression rule: `glFormat` or `glType` is zero.
    pub fn is_structurally_compressed(&self) -> bool {
        self.format == GlFormat::NONE || self.component_type == GlType::NONE
    }
}

/// Everything needed to interpret the pixel payload of a texture.
///
/// Built once, either from a parsed header ([`TextureDescriptor::from_header`])
/// or from explicit parameters ([`TextureDescriptor::new`]), and never
/// modified afterwards. Every classification field is derived from the
/// format triple; none can be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureDescriptor {
    pub internal_format: GlInternalFormat,
    pub format: GlFormat,
    pub component_type: GlType,
    pub base_internal_format: GlFormat,
    /// Equivalent Vulkan format, [`VkFormat::UNDEFINED`] when there is none.
    pub vk_format: VkFormat,
    pub topology: Topology,
    pub width: u32,
    /// At least 1.
    pub height: u32,
    /// At least 1.
    pub depth: u32,
    /// Zero means the full mip chain is generated at load time.
    pub mip_level_count: u32,
    /// At least 1.
    pub array_layer_count: u32,
    /// Bytes per row of texels (or row of blocks) in mip level 0.
    pub row_pitch: u64,
    /// Bytes per 2D slice of mip level 0, saturating at `u64::MAX`.
    pub slice_bytes: u64,
    pub bits_per_texel_or_block: u32,
    pub block_width: u32,
    pub block_height: u32,
    pub compressed: bool,
    pub srgb: bool,
}

impl TextureDescriptor {
    /// Build a descriptor from a decoded header.
    ///
    /// Compression is decided structurally (`glFormat` or `glType` is zero)
    /// rather than from the format tables. Zero height, depth and array
    /// element counts become 1; a zero mip count is kept.
    pub fn from_header(header: &KtxHeader) -> Self {
        let formats = header.formats();
        let topology = Topology::from_counts(
            header.number_of_faces,
            header.pixel_depth,
            header.pixel_height,
        );

        Self::assemble(
            formats,
            header.extent(),
            topology,
            header.number_of_mipmap_levels,
            header.number_of_array_elements,
            formats.is_structurally_compressed(),
        )
    }

    /// Build a descriptor for the write path.
    ///
    /// Compression is inferred from `formats.internal_format`.
    pub fn new(
        formats: FormatSet,
        extent: Extent,
        topology: Topology,
        mip_level_count: u32,
        array_layer_count: u32,
    ) -> Self {
        Self::assemble(
            formats,
            extent,
            topology,
            mip_level_count,
            array_layer_count,
            formats.internal_format.is_compressed(),
        )
    }

    fn assemble(
        formats: FormatSet,
        extent: Extent,
        topology: Topology,
        mip_level_count: u32,
        array_layer_count: u32,
        compressed: bool,
    ) -> Self {
        let internal = formats.internal_format;
        let extent = extent.normalized();
        let bits = internal.bits_per_texel_or_block();
        let (block_width, block_height) = internal.block_dimensions();

        let row_pitch = u64::from(extent.width) * u64::from(bits) / (8 * u64::from(block_width));
        let slice_bytes = u128::from(row_pitch) * u128::from(extent.height)
            / u128::from(block_height);
        let slice_bytes = u64::try_from(slice_bytes).unwrap_or(u64::MAX);

        let descriptor = Self {
            internal_format: internal,
            format: formats.format,
            component_type: formats.component_type,
            base_internal_format: formats.base_internal_format,
            vk_format: vk_format_for(internal, formats.format, formats.component_type),
            topology,
            width: extent.width,
            height: extent.height,
            depth: extent.depth,
            mip_level_count,
            array_layer_count: array_layer_count.max(1),
            row_pitch,
            slice_bytes,
            bits_per_texel_or_block: bits,
            block_width,
            block_height,
            compressed,
            srgb: internal.is_srgb(),
        };

        log::debug!(
            "built {} {} descriptor {}x{}x{} ({} mips, {} layers)",
            descriptor.topology,
            descriptor.internal_format,
            descriptor.width,
            descriptor.height,
            descriptor.depth,
            descriptor.mip_level_count,
            descriptor.array_layer_count,
        );

        descriptor
    }

    /// The format enumerants this descriptor was built from.
    pub fn formats(&self) -> FormatSet {
        FormatSet::new(
            self.internal_format,
            self.format,
            self.component_type,
            self.base_internal_format,
        )
    }

    /// Mip level 0 dimensions.
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height, self.depth)
    }

    /// Number of faces per layer: 6 for cube maps, 1 otherwise.
    pub fn face_count(&self) -> u32 {
        if self.topology.is_cube_map() {
            6
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba8() -> FormatSet {
        FormatSet::new(
            GlInternalFormat::RGBA8,
            GlFormat::RGBA,
            GlType::UNSIGNED_BYTE,
            GlFormat::RGBA,
        )
    }

    #[test]
    fn test_topology_priority() {
        assert_eq!(Topology::from_counts(6, 4, 4), Topology::CubeMap);
        assert_eq!(Topology::from_counts(1, 4, 4), Topology::ThreeDimensional);
        assert_eq!(Topology::from_counts(1, 0, 4), Topology::TwoDimensional);
        assert_eq!(Topology::from_counts(1, 1, 1), Topology::OneDimensional);
        assert_eq!(Topology::from_counts(0, 0, 0), Topology::OneDimensional);
    }

    #[test]
    fn test_uncompressed_pitch() {
        let desc = TextureDescriptor::new(
            rgba8(),
            Extent::new(256, 128, 1),
            Topology::TwoDimensional,
            9,
            1,
        );

        assert_eq!(desc.bits_per_texel_or_block, 32);
        assert_eq!((desc.block_width, desc.block_height), (1, 1));
        assert_eq!(desc.row_pitch, 1024);
        assert_eq!(desc.slice_bytes, 1024 * 128);
        assert_eq!(desc.vk_format, VkFormat::R8G8B8A8_UNORM);
        assert!(!desc.compressed);
        assert!(!desc.srgb);
    }

    #[test]
    fn test_compressed_pitch() {
        let formats =
            FormatSet::compressed(GlInternalFormat::COMPRESSED_RGBA_S3TC_DXT5, GlFormat::RGBA);
        let desc = TextureDescriptor::new(
            formats,
            Extent::new(64, 32, 1),
            Topology::TwoDimensional,
            1,
            1,
        );

        // 16 blocks per row at 16 bytes each, 8 block rows
        assert_eq!(desc.row_pitch, 256);
        assert_eq!(desc.slice_bytes, 256 * 8);
        assert!(desc.compressed);
        assert_eq!(desc.vk_format, VkFormat::BC3_UNORM_BLOCK);
    }

    #[test]
    fn test_partial_blocks_truncate() {
        let formats =
            FormatSet::compressed(GlInternalFormat::COMPRESSED_RGB_S3TC_DXT1, GlFormat::RGB);
        let desc = TextureDescriptor::new(
            formats,
            Extent::new(6, 6, 1),
            Topology::TwoDimensional,
            1,
            1,
        );

        // 6 * 64 / 32 = 12, then 12 * 6 / 4 = 18
        assert_eq!(desc.row_pitch, 12);
        assert_eq!(desc.slice_bytes, 18);
    }

    #[test]
    fn test_srgb_and_astc_blocks() {
        let formats = FormatSet::compressed(
            GlInternalFormat::COMPRESSED_SRGB8_ALPHA8_ASTC_12X12,
            GlFormat::RGBA,
        );
        let desc = TextureDescriptor::new(
            formats,
            Extent::new(120, 48, 1),
            Topology::TwoDimensional,
            1,
            1,
        );

        assert!(desc.srgb);
        assert_eq!((desc.block_width, desc.block_height), (12, 12));
        assert_eq!(desc.row_pitch, 160);
        assert_eq!(desc.slice_bytes, 640);
    }

    #[test]
    fn test_normalizes_geometry_but_keeps_mip_count() {
        let desc = TextureDescriptor::new(
            rgba8(),
            Extent::new(16, 0, 0),
            Topology::OneDimensional,
            0,
            0,
        );

        assert_eq!(desc.height, 1);
        assert_eq!(desc.depth, 1);
        assert_eq!(desc.array_layer_count, 1);
        assert_eq!(desc.mip_level_count, 0);
    }

    #[test]
    fn test_unknown_format_defaults() {
        let formats = FormatSet::new(
            GlInternalFormat(0x1234_5678),
            GlFormat::RGBA,
            GlType::UNSIGNED_BYTE,
            GlFormat::RGBA,
        );
        let desc = TextureDescriptor::new(
            formats,
            Extent::new(10, 10, 1),
            Topology::TwoDimensional,
            1,
            1,
        );

        assert_eq!(desc.bits_per_texel_or_block, 32);
        assert_eq!(desc.row_pitch, 40);
        assert_eq!(desc.vk_format, VkFormat::UNDEFINED);
        assert!(!desc.compressed);
    }

    #[test]
    fn test_pitch_does_not_overflow() {
        let formats = FormatSet::new(
            GlInternalFormat::RGBA32F,
            GlFormat::RGBA,
            GlType::FLOAT,
            GlFormat::RGBA,
        );
        let desc = TextureDescriptor::new(
            formats,
            Extent::new(u32::MAX, 2, 1),
            Topology::TwoDimensional,
            1,
            1,
        );

        assert_eq!(desc.row_pitch, u64::from(u32::MAX) * 16);
        assert_eq!(desc.slice_bytes, u64::from(u32::MAX) * 32);
    }

    #[test]
    fn test_slice_bytes_saturates() {
        let formats = FormatSet::new(
            GlInternalFormat::RGBA32F,
            GlFormat::RGBA,
            GlType::FLOAT,
            GlFormat::RGBA,
        );
        let desc = TextureDescriptor::new(
            formats,
            Extent::new(u32::MAX, u32::MAX, 1),
            Topology::TwoDimensional,
            1,
            1,
        );

        assert_eq!(desc.row_pitch, u64::from(u32::MAX) * 16);
        assert_eq!(desc.slice_bytes, u64::MAX);

        let header = KtxHeader::from(&desc);
        assert_eq!(crate::parse(&header.to_bytes()).unwrap().descriptor.slice_bytes, u64::MAX);
    }
}
