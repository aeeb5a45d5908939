//! Security group: the password service carries an obfuscated 8-byte
//! password blob, kept as raw bytes.

use crate::error::Result;
use crate::field::FieldStream;
use crate::wire::hex_string;

pub(super) fn decode(_subfunction: u8, payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    fields.bytes("password", payload, hex_string(payload));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_kept_as_blob() {
        let payload = [0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37];
        let mut fields = FieldStream::new();
        decode(0x01, &payload, &mut fields).unwrap();
        let f = fields.get("password").unwrap();
        assert_eq!(f.description, "3031323334353637");
        assert_eq!(fields.consumed(), 8);
    }
}
