//! Thin readers over `nom` primitives that surface crate errors with a
//! context tag instead of nom's own error type.

use nom::number::complete::{be_u16, be_u32, u8 as nom_u8};

use crate::error::{Error, Result};

type NomErr<'a> = nom::error::Error<&'a [u8]>;

pub(crate) fn take_u8<'a>(input: &'a [u8], context: &'static str) -> Result<(&'a [u8], u8)> {
    nom_u8::<_, NomErr>(input).map_err(|_| Error::Truncated { context })
}

pub(crate) fn take_be_u16<'a>(input: &'a [u8], context: &'static str) -> Result<(&'a [u8], u16)> {
    be_u16::<_, NomErr>(input).map_err(|_| Error::Truncated { context })
}

pub(crate) fn take_be_u32<'a>(input: &'a [u8], context: &'static str) -> Result<(&'a [u8], u32)> {
    be_u32::<_, NomErr>(input).map_err(|_| Error::Truncated { context })
}

pub(crate) fn take_slice<'a>(
    input: &'a [u8],
    n: usize,
    context: &'static str,
) -> Result<(&'a [u8], &'a [u8])> {
    if input.len() < n {
        return Err(Error::Truncated { context });
    }
    let (head, rest) = input.split_at(n);
    Ok((rest, head))
}

/// Interprets a byte region as Latin-1, mapping each byte to the code point
/// of the same value. Never fails, unlike UTF-8 conversion.
pub(crate) fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Hex rendition used in descriptions of opaque byte regions.
pub(crate) fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        let _ = write!(out, "{b:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_helpers_tag_truncation() {
        let err = take_be_u16(&[0x01], "item header").unwrap_err();
        assert_eq!(err, Error::Truncated { context: "item header" });
        let (rest, v) = take_be_u16(&[0x01, 0x02, 0x03], "item header").unwrap();
        assert_eq!(v, 0x0102);
        assert_eq!(rest, &[0x03]);
    }

    #[test]
    fn latin1_keeps_high_bytes() {
        assert_eq!(latin1_to_string(b"S7-300\xdf"), "S7-300\u{df}");
    }

    #[test]
    fn hex_renders_lowercase_pairs() {
        assert_eq!(hex_string(&[0x00, 0xab, 0x7f]), "00ab7f");
    }
}
