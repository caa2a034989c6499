//! Opt-in strict checks layered over the lenient parser.
//!
//! [`parse`](crate::parse) accepts any header with a valid identifier. The
//! checks here flag the inconsistencies it tolerates.

use thiserror::Error;

use crate::header::HeaderByteOrder;
use crate::parse::ParsedKtx;

/// A strict-mode finding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Both `numberOfFaces > 1` and `numberOfArrayElements > 0`.
    #[error("{faces} faces combined with {array_elements} array elements")]
    FaceArrayConflict { faces: u32, array_elements: u32 },

    /// The header was written with the opposite byte order.
    #[error("header byte order does not match the host")]
    ForeignByteOrder,

    /// The endianness marker matches neither byte order.
    #[error("unrecognized endianness marker {0:#010x}")]
    UnrecognizedByteOrder(u32),

    /// The `imageSize` prefix disagrees with the descriptor.
    #[error("imageSize is {stored} bytes but the descriptor implies {expected}")]
    ImageSizeMismatch { expected: u64, stored: u32 },

    /// `glFormat`/`glType` and the internal format disagree on compression.
    #[error("header says compressed={structural} but the internal format says compressed={table}")]
    CompressionMismatch { structural: bool, table: bool },

    /// The buffer ends before mip level 0 does.
    #[error("mip level 0 needs {needed} bytes but the buffer holds {available}")]
    PayloadTruncated { needed: u64, available: u64 },
}

/// Byte size of mip level 0 as the `imageSize` prefix should record it.
///
/// Non-array cube maps record a single face; everything else records every
/// layer, face and slice. Saturates at `u64::MAX`.
pub fn expected_image_size(parsed: &ParsedKtx) -> u64 {
    let desc = &parsed.descriptor;
    let per_slice = desc.slice_bytes.saturating_mul(u64::from(desc.depth));

    if parsed.header.number_of_array_elements == 0 {
        per_slice
    } else {
        per_slice
            .saturating_mul(u64::from(desc.array_layer_count))
            .saturating_mul(u64::from(desc.face_count()))
    }
}

/// Run every strict check against a parsed header and its buffer.
pub fn check(parsed: &ParsedKtx, buffer: &[u8]) -> Vec<Violation> {
    let header = &parsed.header;
    let mut violations = Vec::new();

    if header.number_of_faces > 1 && header.number_of_array_elements > 0 {
        violations.push(Violation::FaceArrayConflict {
            faces: header.number_of_faces,
            array_elements: header.number_of_array_elements,
        });
    }

    match parsed.source_byte_order {
        HeaderByteOrder::Native => {}
        HeaderByteOrder::Swapped => violations.push(Violation::ForeignByteOrder),
        HeaderByteOrder::Unrecognized(marker) => {
            violations.push(Violation::UnrecognizedByteOrder(marker))
        }
    }

    let internal = parsed.descriptor.internal_format;
    if internal.is_known() && internal.is_compressed() != parsed.descriptor.compressed {
        violations.push(Violation::CompressionMismatch {
            structural: parsed.descriptor.compressed,
            table: internal.is_compressed(),
        });
    }

    let expected = expected_image_size(parsed);
    match parsed.image_size(buffer) {
        Ok(stored) => {
            if u64::from(stored) != expected {
                violations.push(Violation::ImageSizeMismatch { expected, stored });
            }

            let needed = (parsed.payload_offset as u64).saturating_add(u64::from(stored));
            if needed > buffer.len() as u64 {
                violations.push(Violation::PayloadTruncated {
                    needed,
                    available: buffer.len() as u64,
                });
            }
        }
        Err(_) => violations.push(Violation::PayloadTruncated {
            needed: parsed.payload_offset as u64,
            available: buffer.len() as u64,
        }),
    }

    if !violations.is_empty() {
        log::debug!("strict check found {} violation(s)", violations.len());
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Extent, FormatSet, Topology};
    use crate::format::{GlFormat, GlInternalFormat, GlType};
    use crate::header::KtxHeader;
    use crate::parse::{parse, parse_with, ParseOptions};

    fn rgba8() -> FormatSet {
        FormatSet::new(
            GlInternalFormat::RGBA8,
            GlFormat::RGBA,
            GlType::UNSIGNED_BYTE,
            GlFormat::RGBA,
        )
    }

    fn file(header: &KtxHeader, image_size: u32, payload_len: usize) -> Vec<u8> {
        let mut out = header.to_bytes().to_vec();
        out.extend_from_slice(&image_size.to_ne_bytes());
        out.resize(out.len() + payload_len, 0);
        out
    }

    #[test]
    fn test_clean_file() {
        let header = KtxHeader::encode(
            rgba8(),
            Extent::new(8, 4, 0),
            Topology::TwoDimensional,
            1,
            0,
        );
        let bytes = file(&header, 128, 128);

        let parsed = parse(&bytes).unwrap();
        assert_eq!(check(&parsed, &bytes), vec![]);
        assert!(parsed.strict(&bytes).is_ok());
    }

    #[test]
    fn test_cube_map_records_one_face() {
        let header = KtxHeader::encode(rgba8(), Extent::new(4, 4, 0), Topology::CubeMap, 1, 0);
        let parsed = parse(&header.to_bytes()).unwrap();

        assert_eq!(expected_image_size(&parsed), 64);
    }

    #[test]
    fn test_array_records_every_layer() {
        let header = KtxHeader::encode(
            rgba8(),
            Extent::new(4, 4, 0),
            Topology::TwoDimensional,
            1,
            3,
        );
        let parsed = parse(&header.to_bytes()).unwrap();

        assert_eq!(expected_image_size(&parsed), 64 * 3);
    }

    #[test]
    fn test_huge_dimensions_saturate() {
        let formats = FormatSet::new(
            GlInternalFormat::RGBA32F,
            GlFormat::RGBA,
            GlType::FLOAT,
            GlFormat::RGBA,
        );
        let header = KtxHeader::encode(
            formats,
            Extent::new(65536, 65536, 65536),
            Topology::ThreeDimensional,
            1,
            65536,
        );
        let bytes = file(&header, 16, 16);

        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.descriptor.slice_bytes, 1 << 36);
        assert_eq!(expected_image_size(&parsed), u64::MAX);
        assert_eq!(
            check(&parsed, &bytes),
            vec![Violation::ImageSizeMismatch {
                expected: u64::MAX,
                stored: 16
            }]
        );
    }

    #[test]
    fn test_image_size_mismatch() {
        let header = KtxHeader::encode(
            rgba8(),
            Extent::new(8, 4, 0),
            Topology::TwoDimensional,
            1,
            0,
        );
        let bytes = file(&header, 100, 100);

        let parsed = parse(&bytes).unwrap();
        assert_eq!(
            check(&parsed, &bytes),
            vec![Violation::ImageSizeMismatch {
                expected: 128,
                stored: 100
            }]
        );
    }

    #[test]
    fn test_truncated_payload() {
        let header = KtxHeader::encode(
            rgba8(),
            Extent::new(8, 4, 0),
            Topology::TwoDimensional,
            1,
            0,
        );
        let bytes = file(&header, 128, 10);

        let parsed = parse(&bytes).unwrap();
        assert_eq!(
            check(&parsed, &bytes),
            vec![Violation::PayloadTruncated {
                needed: 68 + 128,
                available: 78
            }]
        );

        let bare = header.to_bytes();
        let parsed = parse(&bare).unwrap();
        assert_eq!(
            check(&parsed, &bare),
            vec![Violation::PayloadTruncated {
                needed: 68,
                available: 64
            }]
        );
    }

    #[test]
    fn test_compression_mismatch() {
        let formats = FormatSet::new(
            GlInternalFormat::COMPRESSED_RGBA_S3TC_DXT5,
            GlFormat::RGBA,
            GlType::UNSIGNED_BYTE,
            GlFormat::RGBA,
        );
        let header = KtxHeader::encode(
            formats,
            Extent::new(4, 4, 0),
            Topology::TwoDimensional,
            1,
            0,
        );
        let bytes = file(&header, 16, 16);

        let parsed = parse(&bytes).unwrap();
        assert_eq!(
            check(&parsed, &bytes),
            vec![Violation::CompressionMismatch {
                structural: false,
                table: true
            }]
        );
    }

    #[test]
    fn test_unknown_compressed_format_is_not_flagged() {
        let formats = FormatSet::compressed(GlInternalFormat(0xCAFE), GlFormat::RGBA);
        let header = KtxHeader::encode(
            formats,
            Extent::new(4, 4, 0),
            Topology::TwoDimensional,
            1,
            0,
        );
        let bytes = file(&header, 64, 64);

        let parsed = parse(&bytes).unwrap();
        assert_eq!(check(&parsed, &bytes), vec![]);
    }

    #[test]
    fn test_byte_order_findings() {
        let header = KtxHeader::encode(
            rgba8(),
            Extent::new(8, 4, 0),
            Topology::TwoDimensional,
            1,
            0,
        );
        let mut bytes = header.swap_bytes().to_bytes().to_vec();
        bytes.extend_from_slice(&128u32.swap_bytes().to_ne_bytes());
        bytes.resize(bytes.len() + 128, 0);

        let options = ParseOptions::new().swap_foreign_byte_order(true);
        let parsed = parse_with(&bytes, &options).unwrap();
        assert_eq!(check(&parsed, &bytes), vec![Violation::ForeignByteOrder]);

        let mut odd = header;
        odd.endianness = 0x1122_3344;
        let bytes = file(&odd, 128, 128);
        let parsed = parse(&bytes).unwrap();
        assert_eq!(
            check(&parsed, &bytes),
            vec![Violation::UnrecognizedByteOrder(0x1122_3344)]
        );
    }
}
