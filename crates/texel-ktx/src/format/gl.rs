//! OpenGL enumerants carried in the KTX header.

use super::open_enum;

open_enum! {
    /// `glInternalFormat`: the sized internal format of the texture.
    ///
    /// Uncompressed formats come from tables 8.12/8.13 of the OpenGL 4.x
    /// specification, compressed formats from table 8.14 and the
    /// S3TC/LATC/PVRTC/ASTC extensions.
    GlInternalFormat, prefix = "GL_" {
        // 8 bits per component
        R8 = 0x8229,
        RG8 = 0x822B,
        RGB8 = 0x8051,
        RGBA8 = 0x8058,
        R8_SNORM = 0x8F94,
        RG8_SNORM = 0x8F95,
        RGB8_SNORM = 0x8F96,
        RGBA8_SNORM = 0x8F97,
        R8UI = 0x8232,
        RG8UI = 0x8238,
        RGB8UI = 0x8D7D,
        RGBA8UI = 0x8D7C,
        R8I = 0x8231,
        RG8I = 0x8237,
        RGB8I = 0x8D8F,
        RGBA8I = 0x8D8E,
        SR8 = 0x8FBD,
        SRG8 = 0x8FBE,
        SRGB8 = 0x8C41,
        SRGB8_ALPHA8 = 0x8C43,

        // 16 bits per component
        R16 = 0x822A,
        RG16 = 0x822C,
        RGB16 = 0x8054,
        RGBA16 = 0x805B,
        R16_SNORM = 0x8F98,
        RG16_SNORM = 0x8F99,
        RGB16_SNORM = 0x8F9A,
        RGBA16_SNORM = 0x8F9B,
        R16UI = 0x8234,
        RG16UI = 0x823A,
        RGB16UI = 0x8D77,
        RGBA16UI = 0x8D76,
        R16I = 0x8233,
        RG16I = 0x8239,
        RGB16I = 0x8D89,
        RGBA16I = 0x8D88,
        R16F = 0x822D,
        RG16F = 0x822F,
        RGB16F = 0x881B,
        RGBA16F = 0x881A,

        // 32 bits per component
        R32UI = 0x8236,
        RG32UI = 0x823C,
        RGB32UI = 0x8D71,
        RGBA32UI = 0x8D70,
        R32I = 0x8235,
        RG32I = 0x823B,
        RGB32I = 0x8D83,
        RGBA32I = 0x8D82,
        R32F = 0x822E,
        RG32F = 0x8230,
        RGB32F = 0x8815,
        RGBA32F = 0x8814,

        // Packed
        R3_G3_B2 = 0x2A10,
        RGB4 = 0x804F,
        RGB5 = 0x8050,
        RGB565 = 0x8D62,
        RGB10 = 0x8052,
        RGB12 = 0x8053,
        RGBA2 = 0x8055,
        RGBA4 = 0x8056,
        RGBA12 = 0x805A,
        RGB5_A1 = 0x8057,
        RGB10_A2 = 0x8059,
        RGB10_A2UI = 0x906F,
        R11F_G11F_B10F = 0x8C3A,
        RGB9_E5 = 0x8C3D,

        // S3TC / RGTC / LATC / BPTC
        COMPRESSED_RGB_S3TC_DXT1 = 0x83F0,
        COMPRESSED_RGBA_S3TC_DXT1 = 0x83F1,
        COMPRESSED_RGBA_S3TC_DXT3 = 0x83F2,
        COMPRESSED_RGBA_S3TC_DXT5 = 0x83F3,
        COMPRESSED_SRGB_S3TC_DXT1 = 0x8C4C,
        COMPRESSED_SRGB_ALPHA_S3TC_DXT1 = 0x8C4D,
        COMPRESSED_SRGB_ALPHA_S3TC_DXT3 = 0x8C4E,
        COMPRESSED_SRGB_ALPHA_S3TC_DXT5 = 0x8C4F,
        COMPRESSED_LUMINANCE_LATC1 = 0x8C70,
        COMPRESSED_LUMINANCE_ALPHA_LATC2 = 0x8C72,
        COMPRESSED_SIGNED_LUMINANCE_LATC1 = 0x8C71,
        COMPRESSED_SIGNED_LUMINANCE_ALPHA_LATC2 = 0x8C73,
        COMPRESSED_RED_RGTC1 = 0x8DBB,
        COMPRESSED_RG_RGTC2 = 0x8DBD,
        COMPRESSED_SIGNED_RED_RGTC1 = 0x8DBC,
        COMPRESSED_SIGNED_RG_RGTC2 = 0x8DBE,
        COMPRESSED_RGB_BPTC_SIGNED_FLOAT = 0x8E8E,
        COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT = 0x8E8F,
        COMPRESSED_RGBA_BPTC_UNORM = 0x8E8C,
        COMPRESSED_SRGB_ALPHA_BPTC_UNORM = 0x8E8D,

        // ETC1 / ETC2 / EAC
        ETC1_RGB8_OES = 0x8D64,
        COMPRESSED_RGB8_ETC2 = 0x9274,
        COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2 = 0x9276,
        COMPRESSED_RGBA8_ETC2_EAC = 0x9278,
        COMPRESSED_SRGB8_ETC2 = 0x9275,
        COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2 = 0x9277,
        COMPRESSED_SRGB8_ALPHA8_ETC2_EAC = 0x9279,
        COMPRESSED_R11_EAC = 0x9270,
        COMPRESSED_RG11_EAC = 0x9272,
        COMPRESSED_SIGNED_R11_EAC = 0x9271,
        COMPRESSED_SIGNED_RG11_EAC = 0x9273,

        // PVRTC
        COMPRESSED_RGB_PVRTC_2BPPV1_IMG = 0x8C01,
        COMPRESSED_RGB_PVRTC_4BPPV1_IMG = 0x8C00,
        COMPRESSED_RGBA_PVRTC_2BPPV1_IMG = 0x8C03,
        COMPRESSED_RGBA_PVRTC_4BPPV1_IMG = 0x8C02,
        COMPRESSED_RGBA_PVRTC_2BPPV2_IMG = 0x9137,
        COMPRESSED_RGBA_PVRTC_4BPPV2_IMG = 0x9138,
        COMPRESSED_SRGB_PVRTC_2BPPV1 = 0x8A54,
        COMPRESSED_SRGB_PVRTC_4BPPV1 = 0x8A55,
        COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV1 = 0x8A56,
        COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV1 = 0x8A57,
        COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV2_IMG = 0x93F0,
        COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV2_IMG = 0x93F1,

        // ASTC (LDR)
        COMPRESSED_RGBA_ASTC_4X4 = 0x93B0,
        COMPRESSED_RGBA_ASTC_5X4 = 0x93B1,
        COMPRESSED_RGBA_ASTC_5X5 = 0x93B2,
        COMPRESSED_RGBA_ASTC_6X5 = 0x93B3,
        COMPRESSED_RGBA_ASTC_6X6 = 0x93B4,
        COMPRESSED_RGBA_ASTC_8X5 = 0x93B5,
        COMPRESSED_RGBA_ASTC_8X6 = 0x93B6,
        COMPRESSED_RGBA_ASTC_8X8 = 0x93B7,
        COMPRESSED_RGBA_ASTC_10X5 = 0x93B8,
        COMPRESSED_RGBA_ASTC_10X6 = 0x93B9,
        COMPRESSED_RGBA_ASTC_10X8 = 0x93BA,
        COMPRESSED_RGBA_ASTC_10X10 = 0x93BB,
        COMPRESSED_RGBA_ASTC_12X10 = 0x93BC,
        COMPRESSED_RGBA_ASTC_12X12 = 0x93BD,
        COMPRESSED_SRGB8_ALPHA8_ASTC_4X4 = 0x93D0,
        COMPRESSED_SRGB8_ALPHA8_ASTC_5X4 = 0x93D1,
        COMPRESSED_SRGB8_ALPHA8_ASTC_5X5 = 0x93D2,
        COMPRESSED_SRGB8_ALPHA8_ASTC_6X5 = 0x93D3,
        COMPRESSED_SRGB8_ALPHA8_ASTC_6X6 = 0x93D4,
        COMPRESSED_SRGB8_ALPHA8_ASTC_8X5 = 0x93D5,
        COMPRESSED_SRGB8_ALPHA8_ASTC_8X6 = 0x93D6,
        COMPRESSED_SRGB8_ALPHA8_ASTC_8X8 = 0x93D7,
        COMPRESSED_SRGB8_ALPHA8_ASTC_10X5 = 0x93D8,
        COMPRESSED_SRGB8_ALPHA8_ASTC_10X6 = 0x93D9,
        COMPRESSED_SRGB8_ALPHA8_ASTC_10X8 = 0x93DA,
        COMPRESSED_SRGB8_ALPHA8_ASTC_10X10 = 0x93DB,
        COMPRESSED_SRGB8_ALPHA8_ASTC_12X10 = 0x93DC,
        COMPRESSED_SRGB8_ALPHA8_ASTC_12X12 = 0x93DD,
    }
}

open_enum! {
    /// `glType`: the component type of uncompressed pixel data.
    ///
    /// Zero for block-compressed textures.
    GlType, prefix = "GL_" {
        BYTE = 0x1400,
        UNSIGNED_BYTE = 0x1401,
        SHORT = 0x1402,
        UNSIGNED_SHORT = 0x1403,
        INT = 0x1404,
        UNSIGNED_INT = 0x1405,
        INT64 = 0x140E,
        UNSIGNED_INT64 = 0x140F,
        HALF_FLOAT = 0x140B,
        HALF_FLOAT_OES = 0x8D61,
        FLOAT = 0x1406,
        DOUBLE = 0x140A,
        UNSIGNED_BYTE_3_3_2 = 0x8032,
        UNSIGNED_BYTE_2_3_3_REV = 0x8362,
        UNSIGNED_SHORT_5_6_5 = 0x8363,
        UNSIGNED_SHORT_5_6_5_REV = 0x8364,
        UNSIGNED_SHORT_4_4_4_4 = 0x8033,
        UNSIGNED_SHORT_4_4_4_4_REV = 0x8365,
        UNSIGNED_SHORT_5_5_5_1 = 0x8034,
        UNSIGNED_SHORT_1_5_5_5_REV = 0x8366,
        UNSIGNED_INT_8_8_8_8 = 0x8035,
        UNSIGNED_INT_8_8_8_8_REV = 0x8367,
        UNSIGNED_INT_10_10_10_2 = 0x8036,
        UNSIGNED_INT_2_10_10_10_REV = 0x8368,
        UNSIGNED_INT_10F_11F_11F_REV = 0x8C3B,
        UNSIGNED_INT_5_9_9_9_REV = 0x8C3E,
        UNSIGNED_INT_24_8 = 0x84FA,
        FLOAT_32_UNSIGNED_INT_24_8_REV = 0x8DAD,
    }
}

open_enum! {
    /// `glFormat` / `glBaseInternalFormat`: the pixel layout.
    ///
    /// `glFormat` is zero for block-compressed textures.
    GlFormat, prefix = "GL_" {
        RED = 0x1903,
        GREEN = 0x1904,
        BLUE = 0x1905,
        ALPHA = 0x1906,
        LUMINANCE = 0x1909,
        SLUMINANCE = 0x8C46,
        LUMINANCE_ALPHA = 0x190A,
        SLUMINANCE_ALPHA = 0x8C44,
        INTENSITY = 0x8049,
        RG = 0x8227,
        RGB = 0x1907,
        BGR = 0x80E0,
        RGBA = 0x1908,
        BGRA = 0x80E1,
        RED_INTEGER = 0x8D94,
        GREEN_INTEGER = 0x8D95,
        BLUE_INTEGER = 0x8D96,
        ALPHA_INTEGER = 0x8D97,
        LUMINANCE_INTEGER = 0x8D9C,
        LUMINANCE_ALPHA_INTEGER = 0x8D9D,
        RG_INTEGER = 0x8228,
        RGB_INTEGER = 0x8D98,
        BGR_INTEGER = 0x8D9A,
        RGBA_INTEGER = 0x8D99,
        BGRA_INTEGER = 0x8D9B,
        COLOR_INDEX = 0x1900,
        STENCIL_INDEX = 0x1901,
        DEPTH_COMPONENT = 0x1902,
        DEPTH_STENCIL = 0x84F9,
    }
}

impl GlType {
    /// No component type: marks block-compressed data.
    pub const NONE: Self = Self(0);
}

impl GlFormat {
    /// No pixel layout: marks block-compressed data.
    pub const NONE: Self = Self(0);
}
