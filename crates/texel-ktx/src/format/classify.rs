//! Classification tables for `glInternalFormat`.
//!
//! Every lookup is total: values outside the tables resolve to a fixed
//! default (not compressed, not sRGB, 32 bits, 1x1 blocks) so files carrying
//! vendor or future formats still produce a usable descriptor.

use super::GlInternalFormat as F;

/// Bits per texel assumed for formats missing from the table.
pub const DEFAULT_BITS_PER_TEXEL: u32 = 32;

impl F {
    /// Check if this is a block-compressed format (BCn, ETC/EAC, PVRTC or ASTC).
    pub fn is_compressed(self) -> bool {
        matches!(
            self,
            // BCn
            F::COMPRESSED_RGB_S3TC_DXT1
                | F::COMPRESSED_RGBA_S3TC_DXT1
                | F::COMPRESSED_RGBA_S3TC_DXT3
                | F::COMPRESSED_RGBA_S3TC_DXT5
                | F::COMPRESSED_SRGB_S3TC_DXT1
                | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT1
                | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT3
                | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT5
                | F::COMPRESSED_LUMINANCE_LATC1
                | F::COMPRESSED_LUMINANCE_ALPHA_LATC2
                | F::COMPRESSED_SIGNED_LUMINANCE_LATC1
                | F::COMPRESSED_SIGNED_LUMINANCE_ALPHA_LATC2
                | F::COMPRESSED_RED_RGTC1
                | F::COMPRESSED_RG_RGTC2
                | F::COMPRESSED_SIGNED_RED_RGTC1
                | F::COMPRESSED_SIGNED_RG_RGTC2
                | F::COMPRESSED_RGB_BPTC_SIGNED_FLOAT
                | F::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT
                | F::COMPRESSED_RGBA_BPTC_UNORM
                | F::COMPRESSED_SRGB_ALPHA_BPTC_UNORM
                // ETC
                | F::ETC1_RGB8_OES
                | F::COMPRESSED_RGB8_ETC2
                | F::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2
                | F::COMPRESSED_RGBA8_ETC2_EAC
                | F::COMPRESSED_SRGB8_ETC2
                | F::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2
                | F::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC
                | F::COMPRESSED_R11_EAC
                | F::COMPRESSED_RG11_EAC
                | F::COMPRESSED_SIGNED_R11_EAC
                | F::COMPRESSED_SIGNED_RG11_EAC
                // PVRTC
                | F::COMPRESSED_RGB_PVRTC_2BPPV1_IMG
                | F::COMPRESSED_RGB_PVRTC_4BPPV1_IMG
                | F::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG
                | F::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG
                | F::COMPRESSED_RGBA_PVRTC_2BPPV2_IMG
                | F::COMPRESSED_RGBA_PVRTC_4BPPV2_IMG
                | F::COMPRESSED_SRGB_PVRTC_2BPPV1
                | F::COMPRESSED_SRGB_PVRTC_4BPPV1
                | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV1
                | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV1
                | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV2_IMG
                | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV2_IMG
        ) || self.is_astc()
    }

    /// Check if this is an sRGB-encoded block-compressed format.
    pub fn is_srgb(self) -> bool {
        matches!(
            self,
            F::COMPRESSED_SRGB_S3TC_DXT1
                | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT1
                | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT3
                | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT5
                | F::COMPRESSED_SRGB_ALPHA_BPTC_UNORM
                | F::COMPRESSED_SRGB8_ETC2
                | F::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2
                | F::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC
                | F::COMPRESSED_SRGB_PVRTC_2BPPV1
                | F::COMPRESSED_SRGB_PVRTC_4BPPV1
                | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV1
                | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV1
                | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV2_IMG
                | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV2_IMG
        ) || self.is_astc_srgb()
    }

    /// Bits per texel for uncompressed formats, bits per block for compressed ones.
    ///
    /// Returns [`DEFAULT_BITS_PER_TEXEL`] for anything not in the table.
    pub fn bits_per_texel_or_block(self) -> u32 {
        match self {
            F::R8 | F::R8_SNORM | F::R8UI | F::R8I | F::SR8 | F::R3_G3_B2 => 8,

            F::RG8
            | F::RG8_SNORM
            | F::RG8UI
            | F::RG8I
            | F::SRG8
            | F::R16
            | F::R16_SNORM
            | F::R16UI
            | F::R16I
            | F::R16F
            | F::RGB565
            | F::RGB5_A1
            | F::RGBA4 => 16,

            F::RGB8 | F::RGB8_SNORM | F::RGB8UI | F::RGB8I | F::SRGB8 => 24,

            F::RGBA8
            | F::RGBA8_SNORM
            | F::RGBA8UI
            | F::RGBA8I
            | F::SRGB8_ALPHA8
            | F::RG16
            | F::RG16_SNORM
            | F::RG16UI
            | F::RG16I
            | F::RG16F
            | F::RGB10_A2
            | F::RGB10_A2UI
            | F::R11F_G11F_B10F
            | F::RGB9_E5 => 32,

            F::RGB16 | F::RGB16_SNORM | F::RGB16UI | F::RGB16I | F::RGB16F => 48,

            // 64-bit texels and 8-byte blocks
            F::RGBA16
            | F::RGBA16_SNORM
            | F::RGBA16UI
            | F::RGBA16I
            | F::RGBA16F
            | F::RG32UI
            | F::RG32I
            | F::RG32F
            | F::COMPRESSED_RGB_S3TC_DXT1
            | F::COMPRESSED_RGBA_S3TC_DXT1
            | F::COMPRESSED_SRGB_S3TC_DXT1
            | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT1
            | F::COMPRESSED_LUMINANCE_LATC1
            | F::COMPRESSED_SIGNED_LUMINANCE_LATC1
            | F::COMPRESSED_RED_RGTC1
            | F::COMPRESSED_SIGNED_RED_RGTC1
            | F::ETC1_RGB8_OES
            | F::COMPRESSED_R11_EAC
            | F::COMPRESSED_SIGNED_R11_EAC
            | F::COMPRESSED_RGB8_ETC2
            | F::COMPRESSED_SRGB8_ETC2
            | F::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2
            | F::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2
            | F::COMPRESSED_RGB_PVRTC_2BPPV1_IMG
            | F::COMPRESSED_RGB_PVRTC_4BPPV1_IMG
            | F::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG
            | F::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG
            | F::COMPRESSED_RGBA_PVRTC_2BPPV2_IMG
            | F::COMPRESSED_RGBA_PVRTC_4BPPV2_IMG
            | F::COMPRESSED_SRGB_PVRTC_2BPPV1
            | F::COMPRESSED_SRGB_PVRTC_4BPPV1
            | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV1
            | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV1
            | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV2_IMG
            | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV2_IMG => 64,

            F::RGB32UI | F::RGB32I | F::RGB32F => 96,

            // 128-bit texels and 16-byte blocks
            F::RGBA32UI
            | F::RGBA32I
            | F::RGBA32F
            | F::COMPRESSED_RGBA_S3TC_DXT3
            | F::COMPRESSED_RGBA_S3TC_DXT5
            | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT3
            | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT5
            | F::COMPRESSED_LUMINANCE_ALPHA_LATC2
            | F::COMPRESSED_SIGNED_LUMINANCE_ALPHA_LATC2
            | F::COMPRESSED_RG_RGTC2
            | F::COMPRESSED_SIGNED_RG_RGTC2
            | F::COMPRESSED_RGB_BPTC_SIGNED_FLOAT
            | F::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT
            | F::COMPRESSED_RGBA_BPTC_UNORM
            | F::COMPRESSED_SRGB_ALPHA_BPTC_UNORM
            | F::COMPRESSED_RG11_EAC
            | F::COMPRESSED_SIGNED_RG11_EAC
            | F::COMPRESSED_RGBA8_ETC2_EAC
            | F::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC => 128,

            // Every ASTC footprint packs into a 128-bit block
            _ if self.is_astc() => 128,

            _ => DEFAULT_BITS_PER_TEXEL,
        }
    }

    /// Block footprint in texels as `(width, height)`.
    ///
    /// `(1, 1)` for uncompressed and unrecognised formats.
    pub fn block_dimensions(self) -> (u32, u32) {
        match self {
            // BCn
            F::COMPRESSED_RGB_S3TC_DXT1
            | F::COMPRESSED_RGBA_S3TC_DXT1
            | F::COMPRESSED_RGBA_S3TC_DXT3
            | F::COMPRESSED_RGBA_S3TC_DXT5
            | F::COMPRESSED_SRGB_S3TC_DXT1
            | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT1
            | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT3
            | F::COMPRESSED_SRGB_ALPHA_S3TC_DXT5
            | F::COMPRESSED_LUMINANCE_LATC1
            | F::COMPRESSED_LUMINANCE_ALPHA_LATC2
            | F::COMPRESSED_SIGNED_LUMINANCE_LATC1
            | F::COMPRESSED_SIGNED_LUMINANCE_ALPHA_LATC2
            | F::COMPRESSED_RED_RGTC1
            | F::COMPRESSED_RG_RGTC2
            | F::COMPRESSED_SIGNED_RED_RGTC1
            | F::COMPRESSED_SIGNED_RG_RGTC2
            | F::COMPRESSED_RGB_BPTC_SIGNED_FLOAT
            | F::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT
            | F::COMPRESSED_RGBA_BPTC_UNORM
            | F::COMPRESSED_SRGB_ALPHA_BPTC_UNORM
            // ETC
            | F::ETC1_RGB8_OES
            | F::COMPRESSED_RGB8_ETC2
            | F::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2
            | F::COMPRESSED_RGBA8_ETC2_EAC
            | F::COMPRESSED_SRGB8_ETC2
            | F::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2
            | F::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC
            | F::COMPRESSED_R11_EAC
            | F::COMPRESSED_RG11_EAC
            | F::COMPRESSED_SIGNED_R11_EAC
            | F::COMPRESSED_SIGNED_RG11_EAC
            // PVRTC 4bpp
            | F::COMPRESSED_RGB_PVRTC_4BPPV1_IMG
            | F::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG
            | F::COMPRESSED_SRGB_PVRTC_4BPPV1
            | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV1
            | F::COMPRESSED_RGBA_PVRTC_4BPPV2_IMG
            | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV2_IMG => (4, 4),

            // PVRTC 2bpp
            F::COMPRESSED_RGB_PVRTC_2BPPV1_IMG
            | F::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG
            | F::COMPRESSED_SRGB_PVRTC_2BPPV1
            | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV1
            | F::COMPRESSED_RGBA_PVRTC_2BPPV2_IMG
            | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV2_IMG => (8, 4),

            _ => self.astc_footprint().unwrap_or((1, 1)),
        }
    }

    /// Check if this is one of the ASTC LDR formats (linear or sRGB).
    pub fn is_astc(self) -> bool {
        self.astc_footprint().is_some()
    }

    fn is_astc_srgb(self) -> bool {
        matches!(self.0, 0x93D0..=0x93DD)
    }

    /// ASTC block footprint; the linear (`0x93B0..`) and sRGB (`0x93D0..`)
    /// ranges share the same ordering.
    fn astc_footprint(self) -> Option<(u32, u32)> {
        let index = match self.0 {
            0x93B0..=0x93BD => self.0 - 0x93B0,
            0x93D0..=0x93DD => self.0 - 0x93D0,
            _ => return None,
        };

        Some(ASTC_FOOTPRINTS[index as usize])
    }
}

const ASTC_FOOTPRINTS: [(u32, u32); 14] = [
    (4, 4),
    (5, 4),
    (5, 5),
    (6, 5),
    (6, 6),
    (8, 5),
    (8, 6),
    (8, 8),
    (10, 5),
    (10, 6),
    (10, 8),
    (10, 10),
    (12, 10),
    (12, 12),
];

#[cfg(test)]
mod tests {
    use super::*;

    const UNCOMPRESSED: &[F] = &[
        F::R8,
        F::RG8,
        F::RGB8,
        F::RGBA8,
        F::R8_SNORM,
        F::RGBA8UI,
        F::RGBA8I,
        F::SRGB8_ALPHA8,
        F::R16,
        F::RGBA16,
        F::RGBA16F,
        F::RG16UI,
        F::R32F,
        F::RGB32F,
        F::RGBA32UI,
        F::R3_G3_B2,
        F::RGB565,
        F::RGBA4,
        F::RGB5_A1,
        F::RGB10_A2,
        F::RGB10_A2UI,
        F::R11F_G11F_B10F,
        F::RGB9_E5,
    ];

    const COMPRESSED: &[F] = &[
        F::COMPRESSED_RGB_S3TC_DXT1,
        F::COMPRESSED_RGBA_S3TC_DXT5,
        F::COMPRESSED_SRGB_ALPHA_S3TC_DXT3,
        F::COMPRESSED_RED_RGTC1,
        F::COMPRESSED_SIGNED_RG_RGTC2,
        F::COMPRESSED_RGBA_BPTC_UNORM,
        F::COMPRESSED_SRGB_ALPHA_BPTC_UNORM,
        F::ETC1_RGB8_OES,
        F::COMPRESSED_RGB8_ETC2,
        F::COMPRESSED_SIGNED_RG11_EAC,
        F::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG,
        F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV2_IMG,
        F::COMPRESSED_RGBA_ASTC_4X4,
        F::COMPRESSED_RGBA_ASTC_12X12,
        F::COMPRESSED_SRGB8_ALPHA8_ASTC_8X5,
    ];

    #[test]
    fn test_compressed_classification() {
        for &format in COMPRESSED {
            assert!(format.is_compressed(), "{format} should be compressed");
        }
        for &format in UNCOMPRESSED {
            assert!(!format.is_compressed(), "{format} should not be compressed");
        }
        assert!(!F(0).is_compressed());
        assert!(!F(0xFFFF_FFFF).is_compressed());
    }

    #[test]
    fn test_srgb_classification() {
        assert!(F::COMPRESSED_SRGB_S3TC_DXT1.is_srgb());
        assert!(F::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC.is_srgb());
        assert!(F::COMPRESSED_SRGB_PVRTC_2BPPV1.is_srgb());
        assert!(F::COMPRESSED_SRGB8_ALPHA8_ASTC_10X10.is_srgb());
        assert!(F::COMPRESSED_SRGB_ALPHA_BPTC_UNORM.is_srgb());

        assert!(!F::COMPRESSED_RGBA_S3TC_DXT1.is_srgb());
        assert!(!F::COMPRESSED_RGBA_ASTC_10X10.is_srgb());
        assert!(!F::RGBA8.is_srgb());
        assert!(!F(0x1234).is_srgb());
    }

    #[test]
    fn test_bits_per_texel_or_block() {
        assert_eq!(F::R8.bits_per_texel_or_block(), 8);
        assert_eq!(F::RGB565.bits_per_texel_or_block(), 16);
        assert_eq!(F::SRGB8.bits_per_texel_or_block(), 24);
        assert_eq!(F::RGBA8.bits_per_texel_or_block(), 32);
        assert_eq!(F::RGB16F.bits_per_texel_or_block(), 48);
        assert_eq!(F::RGBA16F.bits_per_texel_or_block(), 64);
        assert_eq!(F::RGB32F.bits_per_texel_or_block(), 96);
        assert_eq!(F::RGBA32F.bits_per_texel_or_block(), 128);

        assert_eq!(F::COMPRESSED_RGB_S3TC_DXT1.bits_per_texel_or_block(), 64);
        assert_eq!(F::COMPRESSED_SRGB_S3TC_DXT1.bits_per_texel_or_block(), 64);
        assert_eq!(F::COMPRESSED_SRGB_ALPHA_S3TC_DXT1.bits_per_texel_or_block(), 64);
        assert_eq!(F::COMPRESSED_RGBA_S3TC_DXT5.bits_per_texel_or_block(), 128);
        assert_eq!(F::COMPRESSED_RED_RGTC1.bits_per_texel_or_block(), 64);
        assert_eq!(F::COMPRESSED_RGBA_BPTC_UNORM.bits_per_texel_or_block(), 128);
        assert_eq!(F::ETC1_RGB8_OES.bits_per_texel_or_block(), 64);
        assert_eq!(F::COMPRESSED_RGBA8_ETC2_EAC.bits_per_texel_or_block(), 128);
        assert_eq!(F::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG.bits_per_texel_or_block(), 64);
        assert_eq!(F::COMPRESSED_RGBA_ASTC_6X5.bits_per_texel_or_block(), 128);
    }

    #[test]
    fn test_unknown_formats_default_to_32_bits() {
        assert_eq!(F(0).bits_per_texel_or_block(), DEFAULT_BITS_PER_TEXEL);
        assert_eq!(F(0xDEAD_BEEF).bits_per_texel_or_block(), 32);
        // Known to GL but absent from the table
        assert_eq!(F::RGB10.bits_per_texel_or_block(), 32);
    }

    #[test]
    fn test_block_dimensions() {
        for &format in UNCOMPRESSED {
            assert_eq!(format.block_dimensions(), (1, 1), "{format}");
        }
        assert_eq!(F(0xDEAD_BEEF).block_dimensions(), (1, 1));

        assert_eq!(F::COMPRESSED_RGB_S3TC_DXT1.block_dimensions(), (4, 4));
        assert_eq!(F::COMPRESSED_RGB8_ETC2.block_dimensions(), (4, 4));
        assert_eq!(F::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG.block_dimensions(), (4, 4));
        assert_eq!(F::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG.block_dimensions(), (8, 4));
        assert_eq!(F::COMPRESSED_RGBA_ASTC_4X4.block_dimensions(), (4, 4));
        assert_eq!(F::COMPRESSED_RGBA_ASTC_5X4.block_dimensions(), (5, 4));
        assert_eq!(F::COMPRESSED_RGBA_ASTC_10X8.block_dimensions(), (10, 8));
        assert_eq!(F::COMPRESSED_SRGB8_ALPHA8_ASTC_12X10.block_dimensions(), (12, 10));
        assert_eq!(F::COMPRESSED_RGBA_ASTC_12X12.block_dimensions(), (12, 12));
    }

    #[test]
    fn test_compressed_formats_have_non_unit_blocks() {
        for &format in COMPRESSED {
            let (w, h) = format.block_dimensions();
            assert!(w >= 4 && h >= 4, "{format} has block {w}x{h}");
        }
    }
}
