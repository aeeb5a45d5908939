//! Time function payloads: clock values in the 10-byte BCD form.

use crate::error::Result;
use crate::field::FieldStream;
use crate::timestamp;
use crate::wire::hex_string;

pub(super) fn decode(_subfunction: u8, payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    // read responses and set requests carry the clock; the other legs are
    // empty and never reach this point
    match timestamp::decode_dt10(payload) {
        Ok(ts) => {
            fields.time(
                "timestamp",
                ts.datetime,
                format!(
                    "{}, {}",
                    ts.weekday_name(),
                    ts.datetime.format("%Y-%m-%d %H:%M:%S%.3f")
                ),
                10,
            );
            if payload.len() > 10 {
                fields.bytes("data_trailer", &payload[10..], "Trailing data bytes");
            }
            Ok(())
        }
        Err(e) => {
            fields.bytes("timestamp_raw", payload, hex_string(payload));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::field::FieldValue;

    #[test]
    fn clock_read_response() {
        let payload = [0x00, 0x19, 0x13, 0x06, 0x21, 0x10, 0x20, 0x30, 0x15, 0x76];
        let mut fields = FieldStream::new();
        decode(0x01, &payload, &mut fields).unwrap();
        let f = fields.get("timestamp").unwrap();
        assert!(f.description.starts_with("Friday, 2013-06-21"));
        assert_eq!(f.len, 10);
        assert_eq!(fields.consumed(), payload.len());
    }

    #[test]
    fn malformed_clock_keeps_raw_bytes() {
        let payload = [0x00, 0x19, 0xab, 0x06, 0x21, 0x10, 0x20, 0x30, 0x15, 0x76];
        let mut fields = FieldStream::new();
        let err = decode(0x01, &payload, &mut fields).unwrap_err();
        assert_eq!(err, Error::MalformedTimestamp);
        match &fields.get("timestamp_raw").unwrap().value {
            FieldValue::Bytes(b) => assert_eq!(b.len(), 10),
            other => panic!("expected raw bytes, got {other:?}"),
        }
    }
}
