//! OpenGL → Vulkan format translation.

use super::{GlFormat, GlInternalFormat as F, GlType, VkFormat as Vk};

/// Component-type facts used to disambiguate generic internal formats.
#[derive(Debug, Clone, Copy)]
struct ComponentKind {
    signed_byte: bool,
    unsigned_byte: bool,
    signed_short: bool,
    unsigned_short: bool,
    half_float: bool,
}

impl ComponentKind {
    fn of(ty: GlType) -> Self {
        Self {
            signed_byte: ty == GlType::BYTE,
            unsigned_byte: ty == GlType::UNSIGNED_BYTE,
            signed_short: ty == GlType::SHORT,
            unsigned_short: ty == GlType::UNSIGNED_SHORT,
            half_float: ty == GlType::HALF_FLOAT || ty == GlType::HALF_FLOAT_OES,
        }
    }

    /// Pick between the snorm/unorm variants of an 8-bit generic format.
    fn pick8(self, snorm: Vk, unorm: Vk) -> Vk {
        if self.signed_byte {
            snorm
        } else if self.unsigned_byte {
            unorm
        } else {
            Vk::UNDEFINED
        }
    }

    /// Pick between the snorm/unorm/sfloat variants of a 16-bit generic format.
    fn pick16(self, snorm: Vk, unorm: Vk, sfloat: Vk) -> Vk {
        if self.signed_short {
            snorm
        } else if self.unsigned_short {
            unorm
        } else if self.half_float {
            sfloat
        } else {
            Vk::UNDEFINED
        }
    }
}

/// Translate a KTX format triple into the equivalent Vulkan format.
///
/// The internal format decides first. The generic 8-bit and 16-bit formats
/// (`GL_R8`..`GL_RGBA8`, `GL_R16`..`GL_RGBA16`) do not say how their
/// components are interpreted, so they branch on `ty`; `GL_RGB8`/`GL_RGBA8`
/// additionally honour a `GL_BGR`/`GL_BGRA` pixel layout. Explicitly
/// signed, integer, float and block-compressed formats map directly.
///
/// Returns [`VkFormat::UNDEFINED`](Vk::UNDEFINED) for anything without an
/// equivalent, including a generic format paired with an unrelated type.
///
/// # Example
///
/// ```
/// use texel_ktx::format::{vk_format_for, GlFormat, GlInternalFormat, GlType, VkFormat};
///
/// let vk = vk_format_for(GlInternalFormat::RGBA8, GlFormat::RGBA, GlType::BYTE);
/// assert_eq!(vk, VkFormat::R8G8B8A8_SNORM);
/// ```
pub fn vk_format_for(internal: F, format: GlFormat, ty: GlType) -> Vk {
    let kind = ComponentKind::of(ty);
    let bgr = format == GlFormat::BGR || format == GlFormat::BGRA;

    let vk = match internal {
        // 8 bits per component, interpretation from the component type
        F::R8 => kind.pick8(Vk::R8_SNORM, Vk::R8_UNORM),
        F::RG8 => kind.pick8(Vk::R8G8_SNORM, Vk::R8G8_UNORM),
        F::RGB8 if bgr => kind.pick8(Vk::B8G8R8_SNORM, Vk::B8G8R8_UNORM),
        F::RGB8 => kind.pick8(Vk::R8G8B8_SNORM, Vk::R8G8B8_UNORM),
        F::RGBA8 if bgr => kind.pick8(Vk::B8G8R8A8_SNORM, Vk::B8G8R8A8_UNORM),
        F::RGBA8 => kind.pick8(Vk::R8G8B8A8_SNORM, Vk::R8G8B8A8_UNORM),

        F::R8_SNORM => Vk::R8_SNORM,
        F::RG8_SNORM => Vk::R8G8_SNORM,
        F::RGB8_SNORM => Vk::R8G8B8_SNORM,
        F::RGBA8_SNORM => Vk::R8G8B8A8_SNORM,

        F::R8UI => Vk::R8_UINT,
        F::RG8UI => Vk::R8G8_UINT,
        F::RGB8UI => Vk::R8G8B8_UINT,
        F::RGBA8UI => Vk::R8G8B8A8_UINT,

        F::R8I => Vk::R8_SINT,
        F::RG8I => Vk::R8G8_SINT,
        F::RGB8I => Vk::R8G8B8_SINT,
        F::RGBA8I => Vk::R8G8B8A8_SINT,

        F::SR8 => Vk::R8_SRGB,
        F::SRG8 => Vk::R8G8_SRGB,
        F::SRGB8 => Vk::R8G8B8_SRGB,
        F::SRGB8_ALPHA8 => Vk::R8G8B8A8_SRGB,

        // 16 bits per component, interpretation from the component type
        F::R16 => kind.pick16(Vk::R16_SNORM, Vk::R16_UNORM, Vk::R16_SFLOAT),
        F::RG16 => kind.pick16(Vk::R16G16_SNORM, Vk::R16G16_UNORM, Vk::R16G16_SFLOAT),
        F::RGB16 => kind.pick16(
            Vk::R16G16B16_SNORM,
            Vk::R16G16B16_UNORM,
            Vk::R16G16B16_SFLOAT,
        ),
        F::RGBA16 => kind.pick16(
            Vk::R16G16B16A16_SNORM,
            Vk::R16G16B16A16_UNORM,
            Vk::R16G16B16A16_SFLOAT,
        ),

        F::R16_SNORM => Vk::R16_SNORM,
        F::RG16_SNORM => Vk::R16G16_SNORM,
        F::RGB16_SNORM => Vk::R16G16B16_SNORM,
        F::RGBA16_SNORM => Vk::R16G16B16A16_SNORM,

        F::R16UI => Vk::R16_UINT,
        F::RG16UI => Vk::R16G16_UINT,
        F::RGB16UI => Vk::R16G16B16_UINT,
        F::RGBA16UI => Vk::R16G16B16A16_UINT,

        F::R16I => Vk::R16_SINT,
        F::RG16I => Vk::R16G16_SINT,
        F::RGB16I => Vk::R16G16B16_SINT,
        F::RGBA16I => Vk::R16G16B16A16_SINT,

        F::R16F => Vk::R16_SFLOAT,
        F::RG16F => Vk::R16G16_SFLOAT,
        F::RGB16F => Vk::R16G16B16_SFLOAT,
        F::RGBA16F => Vk::R16G16B16A16_SFLOAT,

        // 32 bits per component
        F::R32UI => Vk::R32_UINT,
        F::RG32UI => Vk::R32G32_UINT,
        F::RGB32UI => Vk::R32G32B32_UINT,
        F::RGBA32UI => Vk::R32G32B32A32_UINT,

        F::R32I => Vk::R32_SINT,
        F::RG32I => Vk::R32G32_SINT,
        F::RGB32I => Vk::R32G32B32_SINT,
        F::RGBA32I => Vk::R32G32B32A32_SINT,

        F::R32F => Vk::R32_SFLOAT,
        F::RG32F => Vk::R32G32_SFLOAT,
        F::RGB32F => Vk::R32G32B32_SFLOAT,
        F::RGBA32F => Vk::R32G32B32A32_SFLOAT,

        // Packed
        F::RGB565 => Vk::R5G6B5_UNORM_PACK16,
        F::RGBA4 => Vk::R4G4B4A4_UNORM_PACK16,
        F::RGB5_A1 => Vk::R5G5B5A1_UNORM_PACK16,
        F::RGB10_A2 => Vk::A2B10G10R10_UNORM_PACK32,
        F::RGB10_A2UI => Vk::A2R10G10B10_UINT_PACK32,
        F::R11F_G11F_B10F => Vk::B10G11R11_UFLOAT_PACK32,
        F::RGB9_E5 => Vk::E5B9G9R9_UFLOAT_PACK32,

        // S3TC
        F::COMPRESSED_RGB_S3TC_DXT1 => Vk::BC1_RGB_UNORM_BLOCK,
        F::COMPRESSED_RGBA_S3TC_DXT1 => Vk::BC1_RGBA_UNORM_BLOCK,
        F::COMPRESSED_RGBA_S3TC_DXT3 => Vk::BC2_UNORM_BLOCK,
        F::COMPRESSED_RGBA_S3TC_DXT5 => Vk::BC3_UNORM_BLOCK,
        F::COMPRESSED_SRGB_S3TC_DXT1 => Vk::BC1_RGB_SRGB_BLOCK,
        F::COMPRESSED_SRGB_ALPHA_S3TC_DXT1 => Vk::BC1_RGBA_SRGB_BLOCK,
        F::COMPRESSED_SRGB_ALPHA_S3TC_DXT3 => Vk::BC2_SRGB_BLOCK,
        F::COMPRESSED_SRGB_ALPHA_S3TC_DXT5 => Vk::BC3_SRGB_BLOCK,

        // LATC and RGTC share the BC4/BC5 encodings
        F::COMPRESSED_LUMINANCE_LATC1 | F::COMPRESSED_RED_RGTC1 => Vk::BC4_UNORM_BLOCK,
        F::COMPRESSED_SIGNED_LUMINANCE_LATC1 | F::COMPRESSED_SIGNED_RED_RGTC1 => {
            Vk::BC4_SNORM_BLOCK
        }
        F::COMPRESSED_LUMINANCE_ALPHA_LATC2 | F::COMPRESSED_RG_RGTC2 => Vk::BC5_UNORM_BLOCK,
        F::COMPRESSED_SIGNED_LUMINANCE_ALPHA_LATC2 | F::COMPRESSED_SIGNED_RG_RGTC2 => {
            Vk::BC5_SNORM_BLOCK
        }

        // BPTC
        F::COMPRESSED_RGB_BPTC_SIGNED_FLOAT => Vk::BC6H_SFLOAT_BLOCK,
        F::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT => Vk::BC6H_UFLOAT_BLOCK,
        F::COMPRESSED_RGBA_BPTC_UNORM => Vk::BC7_UNORM_BLOCK,
        F::COMPRESSED_SRGB_ALPHA_BPTC_UNORM => Vk::BC7_SRGB_BLOCK,

        // ETC1 is a strict subset of ETC2 RGB
        F::ETC1_RGB8_OES | F::COMPRESSED_RGB8_ETC2 => Vk::ETC2_R8G8B8_UNORM_BLOCK,
        F::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2 => Vk::ETC2_R8G8B8A1_UNORM_BLOCK,
        F::COMPRESSED_RGBA8_ETC2_EAC => Vk::ETC2_R8G8B8A8_UNORM_BLOCK,
        F::COMPRESSED_SRGB8_ETC2 => Vk::ETC2_R8G8B8_SRGB_BLOCK,
        F::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2 => Vk::ETC2_R8G8B8A1_SRGB_BLOCK,
        F::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC => Vk::ETC2_R8G8B8A8_SRGB_BLOCK,
        F::COMPRESSED_R11_EAC => Vk::EAC_R11_UNORM_BLOCK,
        F::COMPRESSED_RG11_EAC => Vk::EAC_R11G11_UNORM_BLOCK,
        F::COMPRESSED_SIGNED_R11_EAC => Vk::EAC_R11_SNORM_BLOCK,
        F::COMPRESSED_SIGNED_RG11_EAC => Vk::EAC_R11G11_SNORM_BLOCK,

        // PVRTC; Vulkan has no separate opaque-RGB variant
        F::COMPRESSED_RGB_PVRTC_2BPPV1_IMG | F::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG => {
            Vk::PVRTC1_2BPP_UNORM_BLOCK_IMG
        }
        F::COMPRESSED_RGB_PVRTC_4BPPV1_IMG | F::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG => {
            Vk::PVRTC1_4BPP_UNORM_BLOCK_IMG
        }
        F::COMPRESSED_RGBA_PVRTC_2BPPV2_IMG => Vk::PVRTC2_2BPP_UNORM_BLOCK_IMG,
        F::COMPRESSED_RGBA_PVRTC_4BPPV2_IMG => Vk::PVRTC2_4BPP_UNORM_BLOCK_IMG,
        F::COMPRESSED_SRGB_PVRTC_2BPPV1 | F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV1 => {
            Vk::PVRTC1_2BPP_SRGB_BLOCK_IMG
        }
        F::COMPRESSED_SRGB_PVRTC_4BPPV1 | F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV1 => {
            Vk::PVRTC1_4BPP_SRGB_BLOCK_IMG
        }
        F::COMPRESSED_SRGB_ALPHA_PVRTC_2BPPV2_IMG => Vk::PVRTC2_2BPP_SRGB_BLOCK_IMG,
        F::COMPRESSED_SRGB_ALPHA_PVRTC_4BPPV2_IMG => Vk::PVRTC2_4BPP_SRGB_BLOCK_IMG,

        _ if internal.is_astc() => astc_vk_format(internal),

        _ => Vk::UNDEFINED,
    };

    if vk == Vk::UNDEFINED {
        log::debug!("no Vulkan equivalent for {internal} / {format} / {ty}");
    }

    vk
}

/// ASTC maps by position: each GL footprint pairs with a UNORM/SRGB
/// Vulkan format, interleaved from `ASTC_4X4_UNORM_BLOCK` (157).
fn astc_vk_format(internal: F) -> Vk {
    let (index, srgb) = match internal.0 {
        v @ 0x93B0..=0x93BD => (v - 0x93B0, false),
        v @ 0x93D0..=0x93DD => (v - 0x93D0, true),
        _ => return Vk::UNDEFINED,
    };

    Vk(Vk::ASTC_4X4_UNORM_BLOCK.0 + index * 2 + u32::from(srgb))
}
