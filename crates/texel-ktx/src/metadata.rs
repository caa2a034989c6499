//! Key/value metadata following the header.
//!
//! Each entry is a `u32` byte count, a NUL-terminated UTF-8 key, the value
//! bytes, and padding up to the next multiple of four.

use byteorder::NativeEndian;
use texel_common::BinaryReader;

use crate::{Error, Result};

/// One key/value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: &'a [u8],
}

impl<'a> KeyValue<'a> {
    /// The value as text, without its trailing NUL.
    ///
    /// Returns `None` if the value is not UTF-8.
    pub fn value_str(&self) -> Option<&'a str> {
        let text = self.value.strip_suffix(b"\0").unwrap_or(self.value);
        std::str::from_utf8(text).ok()
    }
}

/// Iterator over the entries of a key/value region.
///
/// Stops after the first malformed entry.
#[derive(Debug, Clone)]
pub struct KeyValueIter<'a> {
    reader: BinaryReader<'a>,
    swapped: bool,
    failed: bool,
}

impl<'a> KeyValueIter<'a> {
    /// Iterate over `region`, the `bytesOfKeyValueData` bytes after the
    /// header. Set `swapped` when the file was written with the opposite
    /// byte order.
    pub fn new(region: &'a [u8], swapped: bool) -> Self {
        Self {
            reader: BinaryReader::new(region),
            swapped,
            failed: false,
        }
    }

    fn malformed(&mut self, offset: usize, reason: &'static str) -> Option<Result<KeyValue<'a>>> {
        self.failed = true;
        Some(Err(Error::MalformedMetadata { offset, reason }))
    }
}

impl<'a> Iterator for KeyValueIter<'a> {
    type Item = Result<KeyValue<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }

        let offset = self.reader.position();
        let Ok(size) = self.reader.read_u32_as::<NativeEndian>() else {
            return self.malformed(offset, "truncated entry size");
        };
        let size = if self.swapped { size.swap_bytes() } else { size };

        let Ok(entry) = self.reader.read_bytes(size as usize) else {
            return self.malformed(offset, "entry runs past the end of the region");
        };

        let mut entry = BinaryReader::new(entry);
        let Ok(key) = entry.read_cstring() else {
            return self.malformed(offset, "key is not NUL-terminated UTF-8");
        };

        self.reader.align(4);

        Some(Ok(KeyValue {
            key,
            value: entry.remaining_bytes(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &[u8], swapped: bool) -> Vec<u8> {
        let size = (key.len() + 1 + value.len()) as u32;
        let size = if swapped { size.swap_bytes() } else { size };

        let mut out = size.to_ne_bytes().to_vec();
        out.extend_from_slice(key.as_bytes());
        out.push(0);
        out.extend_from_slice(value);
        while out.len() % 4 != 0 {
            out.push(0);
        }
        out
    }

    #[test]
    fn test_iterates_padded_entries() {
        let mut region = entry("KTXorientation", b"S=r,T=d\0", false);
        region.extend(entry("KTXwriter", b"texel\0", false));

        let entries: Vec<_> = KeyValueIter::new(&region, false)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "KTXorientation");
        assert_eq!(entries[0].value_str(), Some("S=r,T=d"));
        assert_eq!(entries[1].key, "KTXwriter");
        assert_eq!(entries[1].value, b"texel\0");
    }

    #[test]
    fn test_swapped_sizes() {
        let region = entry("key", b"abc", true);
        let entries: Vec<_> = KeyValueIter::new(&region, true)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(entries, vec![KeyValue { key: "key", value: b"abc" }]);
    }

    #[test]
    fn test_binary_value() {
        let region = entry("blob", &[0xFF, 0xFE], false);
        let kv = KeyValueIter::new(&region, false).next().unwrap().unwrap();

        assert_eq!(kv.value, &[0xFF, 0xFE]);
        assert_eq!(kv.value_str(), None);
    }

    #[test]
    fn test_entry_past_end_is_malformed() {
        let mut region = 100u32.to_ne_bytes().to_vec();
        region.extend_from_slice(b"key\0");

        let mut iter = KeyValueIter::new(&region, false);
        assert!(matches!(
            iter.next(),
            Some(Err(Error::MalformedMetadata { offset: 0, .. }))
        ));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_missing_key_terminator() {
        let mut region = 4u32.to_ne_bytes().to_vec();
        region.extend_from_slice(b"abcd");

        let mut iter = KeyValueIter::new(&region, false);
        assert!(matches!(iter.next(), Some(Err(Error::MalformedMetadata { .. }))));
    }

    #[test]
    fn test_empty_region() {
        assert_eq!(KeyValueIter::new(&[], false).count(), 0);
    }
}
