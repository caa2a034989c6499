//! KTX 1.1 header structure.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::descriptor::{Extent, FormatSet, TextureDescriptor, Topology};
use crate::format::{GlFormat, GlInternalFormat, GlType};

/// Byte order of a header, as told by its endianness marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderByteOrder {
    /// Written on a host with the same byte order as this one.
    Native,
    /// Written on a host with the opposite byte order.
    Swapped,
    /// Neither marker; the header is probably corrupt.
    Unrecognized(u32),
}

/// KTX 1.1 file header.
///
/// Fields are stored in host byte order, as the file is expected to be
/// written by a host with the same endianness. See
/// [`KtxHeader::byte_order`] and [`KtxHeader::swap_bytes`] for other files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct KtxHeader {
    /// File identifier, see [`KtxHeader::IDENTIFIER`].
    pub identifier: [u8; 12],
    /// Endianness marker, `0x04030201` when read in the writer's byte order.
    pub endianness: u32,
    /// `glType`, zero for compressed images.
    pub gl_type: u32,
    /// Size in bytes of `glType` for endianness conversion.
    pub gl_type_size: u32,
    /// `glFormat`, zero for compressed images.
    pub gl_format: u32,
    /// `glInternalFormat`.
    pub gl_internal_format: u32,
    /// `glBaseInternalFormat`.
    pub gl_base_internal_format: u32,
    /// Width of mip level 0.
    pub pixel_width: u32,
    /// Height of mip level 0, zero for 1D textures.
    pub pixel_height: u32,
    /// Depth of mip level 0, zero for non-3D textures.
    pub pixel_depth: u32,
    /// Number of array elements, zero for non-array textures.
    pub number_of_array_elements: u32,
    /// 6 for cube maps, 1 otherwise.
    pub number_of_faces: u32,
    /// Number of mip levels, zero to generate them at load time.
    pub number_of_mipmap_levels: u32,
    /// Length of the key/value metadata following the header.
    pub bytes_of_key_value_data: u32,
}

impl KtxHeader {
    /// `«KTX 11»\r\n\x1A\n`.
    pub const IDENTIFIER: [u8; 12] = [
        0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
    ];

    /// Header size in bytes.
    pub const SIZE: usize = 64;

    /// Endianness marker as read by a host matching the writer.
    pub const ENDIAN_NATIVE: u32 = 0x0403_0201;

    /// Endianness marker as read by a host of the opposite byte order.
    pub const ENDIAN_SWAPPED: u32 = 0x0102_0304;

    /// Construct a header for the write path.
    ///
    /// Cube maps get 6 faces and no array elements regardless of
    /// `array_count`. `glTypeSize` is 0 for compressed internal formats and
    /// 4 otherwise. No key/value data is declared.
    pub fn encode(
        formats: FormatSet,
        extent: Extent,
        topology: Topology,
        mip_count: u32,
        array_count: u32,
    ) -> Self {
        let (number_of_faces, number_of_array_elements) = if topology.is_cube_map() {
            (6, 0)
        } else {
            (1, array_count)
        };

        Self {
            identifier: Self::IDENTIFIER,
            endianness: Self::ENDIAN_NATIVE,
            gl_type: formats.component_type.0,
            gl_type_size: if formats.internal_format.is_compressed() { 0 } else { 4 },
            gl_format: formats.format.0,
            gl_internal_format: formats.internal_format.0,
            gl_base_internal_format: formats.base_internal_format.0,
            pixel_width: extent.width,
            pixel_height: extent.height,
            pixel_depth: extent.depth,
            number_of_array_elements,
            number_of_faces,
            number_of_mipmap_levels: mip_count,
            bytes_of_key_value_data: 0,
        }
    }

    /// Serialize the header to its 64-byte on-disk form.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(self.as_bytes());
        bytes
    }

    /// Check the 12-byte identifier.
    pub fn has_valid_identifier(&self) -> bool {
        self.identifier == Self::IDENTIFIER
    }

    /// Classify the endianness marker.
    pub fn byte_order(&self) -> HeaderByteOrder {
        match self.endianness {
            Self::ENDIAN_NATIVE => HeaderByteOrder::Native,
            Self::ENDIAN_SWAPPED => HeaderByteOrder::Swapped,
            other => HeaderByteOrder::Unrecognized(other),
        }
    }

    /// Reverse the byte order of every numeric field.
    pub fn swap_bytes(&self) -> Self {
        Self {
            identifier: self.identifier,
            endianness: self.endianness.swap_bytes(),
            gl_type: self.gl_type.swap_bytes(),
            gl_type_size: self.gl_type_size.swap_bytes(),
            gl_format: self.gl_format.swap_bytes(),
            gl_internal_format: self.gl_internal_format.swap_bytes(),
            gl_base_internal_format: self.gl_base_internal_format.swap_bytes(),
            pixel_width: self.pixel_width.swap_bytes(),
            pixel_height: self.pixel_height.swap_bytes(),
            pixel_depth: self.pixel_depth.swap_bytes(),
            number_of_array_elements: self.number_of_array_elements.swap_bytes(),
            number_of_faces: self.number_of_faces.swap_bytes(),
            number_of_mipmap_levels: self.number_of_mipmap_levels.swap_bytes(),
            bytes_of_key_value_data: self.bytes_of_key_value_data.swap_bytes(),
        }
    }

    /// The format enumerants, typed.
    pub fn formats(&self) -> FormatSet {
        FormatSet::new(
            GlInternalFormat(self.gl_internal_format),
            GlFormat(self.gl_format),
            GlType(self.gl_type),
            GlFormat(self.gl_base_internal_format),
        )
    }

    /// Pixel dimensions exactly as stored (zeros included).
    pub fn extent(&self) -> Extent {
        Extent::new(self.pixel_width, self.pixel_height, self.pixel_depth)
    }

    /// Byte offset of the key/value metadata region.
    pub fn metadata_offset(&self) -> usize {
        Self::SIZE
    }

    /// Byte offset of the first mip level's pixel data.
    ///
    /// Skips the header, the key/value data and the 4-byte `imageSize`
    /// prefix of level 0.
    pub fn payload_offset(&self) -> usize {
        Self::SIZE
            .saturating_add(self.bytes_of_key_value_data as usize)
            .saturating_add(4)
    }
}

/// Undo descriptor normalization so that parsing the result yields the
/// same descriptor.
///
/// Height is written as 0 for 1D textures and depth as 0 for anything but
/// 3D. A single array layer is written as a non-array texture.
impl From<&TextureDescriptor> for KtxHeader {
    fn from(descriptor: &TextureDescriptor) -> Self {
        let topology = descriptor.topology;
        let height = match topology {
            Topology::OneDimensional => 0,
            _ => descriptor.height,
        };
        let depth = match topology {
            Topology::ThreeDimensional => descriptor.depth,
            _ => 0,
        };
        let array_count = match descriptor.array_layer_count {
            1 => 0,
            layers => layers,
        };

        Self::encode(
            descriptor.formats(),
            Extent::new(descriptor.width, height, depth),
            topology,
            descriptor.mip_level_count,
            array_count,
        )
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
    fn test_header_size() {
        assert_eq!(std::mem::size_of::<KtxHeader>(), KtxHeader::SIZE);
    }

    #[test]
    fn test_encode_uncompressed() {
        let header = KtxHeader::encode(
            rgba8(),
            Extent::new(64, 32, 0),
            Topology::TwoDimensional,
            7,
            3,
        );

        assert!(header.has_valid_identifier());
        assert_eq!(header.byte_order(), HeaderByteOrder::Native);
        assert_eq!(header.gl_type_size, 4);
        assert_eq!(header.number_of_faces, 1);
        assert_eq!(header.number_of_array_elements, 3);
        assert_eq!(header.number_of_mipmap_levels, 7);
        assert_eq!(header.bytes_of_key_value_data, 0);
        assert_eq!(header.formats(), rgba8());
    }

    #[test]
    fn test_encode_compressed_type_size() {
        let formats =
            FormatSet::compressed(GlInternalFormat::COMPRESSED_RGBA8_ETC2_EAC, GlFormat::RGBA);
        let header = KtxHeader::encode(
            formats,
            Extent::new(16, 16, 0),
            Topology::TwoDimensional,
            1,
            0,
        );

        assert_eq!(header.gl_type_size, 0);
        assert_eq!(header.gl_type, 0);
        assert_eq!(header.gl_format, 0);
    }

    #[test]
    fn test_encode_cube_map_drops_array_count() {
        let header = KtxHeader::encode(rgba8(), Extent::new(32, 32, 0), Topology::CubeMap, 1, 4);

        assert_eq!(header.number_of_faces, 6);
        assert_eq!(header.number_of_array_elements, 0);
    }

    #[test]
    fn test_to_bytes_layout() {
        let header = KtxHeader::encode(
            rgba8(),
            Extent::new(64, 32, 0),
            Topology::TwoDimensional,
            1,
            0,
        );
        let bytes = header.to_bytes();

        assert_eq!(&bytes[..12], &KtxHeader::IDENTIFIER);
        assert_eq!(&bytes[12..16], &KtxHeader::ENDIAN_NATIVE.to_ne_bytes());
        assert_eq!(&bytes[36..40], &64u32.to_ne_bytes());
        assert_eq!(&bytes[40..44], &32u32.to_ne_bytes());
    }

    #[test]
    fn test_swap_bytes() {
        let header = KtxHeader::encode(
            rgba8(),
            Extent::new(64, 32, 0),
            Topology::TwoDimensional,
            1,
            0,
        );
        let swapped = header.swap_bytes();

        assert_eq!(swapped.byte_order(), HeaderByteOrder::Swapped);
        assert_eq!(swapped.pixel_width, 64u32.swap_bytes());
        assert_eq!(swapped.identifier, KtxHeader::IDENTIFIER);
        assert_eq!(swapped.swap_bytes(), header);
    }

    #[test]
    fn test_unrecognized_byte_order() {
        let mut header = KtxHeader::encode(
            rgba8(),
            Extent::new(1, 0, 0),
            Topology::OneDimensional,
            1,
            0,
        );
        header.endianness = 0xDEAD_BEEF;

        assert_eq!(header.byte_order(), HeaderByteOrder::Unrecognized(0xDEAD_BEEF));
    }

    #[test]
    fn test_payload_offset() {
        let mut header = KtxHeader::encode(
            rgba8(),
            Extent::new(1, 0, 0),
            Topology::OneDimensional,
            1,
            0,
        );
        assert_eq!(header.payload_offset(), 68);

        header.bytes_of_key_value_data = 32;
        assert_eq!(header.payload_offset(), 100);
    }

    #[test]
    fn test_from_descriptor() {
        let desc = TextureDescriptor::new(rgba8(), Extent::new(8, 8, 1), Topology::CubeMap, 4, 1);
        let header = KtxHeader::from(&desc);

        assert_eq!(header.number_of_faces, 6);
        assert_eq!(header.number_of_array_elements, 0);
        assert_eq!(header.number_of_mipmap_levels, 4);
        assert_eq!(header.pixel_width, 8);
        assert_eq!(header.pixel_depth, 0);
    }

    #[test]
    fn test_from_parsed_descriptor_restores_header() {
        let cases = [
            KtxHeader::encode(rgba8(), Extent::new(16, 0, 0), Topology::OneDimensional, 1, 0),
            KtxHeader::encode(rgba8(), Extent::new(64, 32, 0), Topology::TwoDimensional, 7, 0),
            KtxHeader::encode(rgba8(), Extent::new(16, 16, 8), Topology::ThreeDimensional, 0, 0),
            KtxHeader::encode(rgba8(), Extent::new(32, 32, 0), Topology::CubeMap, 6, 0),
            KtxHeader::encode(rgba8(), Extent::new(8, 8, 0), Topology::TwoDimensional, 1, 4),
        ];

        for header in cases {
            let desc = crate::parse(&header.to_bytes()).unwrap().descriptor;
            assert_eq!(KtxHeader::from(&desc), header, "{}", desc.topology);
        }
    }
}
