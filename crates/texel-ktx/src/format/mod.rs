//! OpenGL and Vulkan format enumerants and the tables that classify them.
//!
//! The enumerants are open newtypes over `u32` rather than Rust enums: KTX
//! files in the wild carry vendor-specific and future values, and those must
//! flow through the codec untouched.

/// Defines a `u32` newtype with named constants, a name lookup, `Display`
/// and `FromStr`.
///
/// `Display` prints the prefixed name for known values and hex otherwise.
/// `FromStr` accepts the name with or without the prefix (case-insensitive),
/// or a decimal / `0x` hex literal.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident, prefix = $prefix:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            $($(#[$vmeta])* pub const $variant: Self = Self($value);)+

            /// Symbolic name without the API prefix, if this value is known.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some(stringify!($variant)),)+
                    _ => None,
                }
            }

            /// Check if this value has a named constant.
            pub fn is_known(self) -> bool {
                self.name().is_some()
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}{}", $prefix, name),
                    None => write!(f, "{}({:#x})", stringify!($name), self.0),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}{}", $prefix, name),
                    None => write!(f, "{:#x}", self.0),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> crate::Result<Self> {
                let trimmed = s.trim();
                if let Some(value) = crate::format::parse_numeric(trimmed) {
                    return Ok(Self(value));
                }

                let upper = trimmed.to_ascii_uppercase();
                let bare = upper.strip_prefix($prefix).unwrap_or(upper.as_str());
                match bare {
                    $(stringify!($variant) => Ok(Self::$variant),)+
                    _ => Err(crate::Error::UnknownEnumerant {
                        kind: stringify!($name),
                        value: trimmed.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use open_enum;

mod classify;
mod equivalent;
mod gl;
mod vk;

pub use classify::DEFAULT_BITS_PER_TEXEL;
pub use equivalent::vk_format_for;
pub use gl::{GlFormat, GlInternalFormat, GlType};
pub use vk::VkFormat;

/// Parse a decimal or `0x`-prefixed hexadecimal literal.
pub(crate) fn parse_numeric(s: &str) -> Option<u32> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}
