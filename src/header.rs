use serde::Serialize;

use crate::error::{Error, Result};
use crate::field::FieldStream;
use crate::tables;
use crate::types::Rosctr;

pub const PROTOCOL_ID: u8 = 0x32;

/// Fixed header at the start of every PDU. 10 bytes, or 12 for ACK and
/// ACK_DATA which append an error class/code pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub rosctr: Rosctr,
    pub redundancy_id: u16,
    pub pdu_ref: u16,
    pub param_len: u16,
    pub data_len: u16,
    /// (error class, error code), present only on ACK/ACK_DATA.
    pub error: Option<(u8, u8)>,
}

impl Header {
    pub fn header_len(&self) -> usize {
        self.rosctr.header_len()
    }

    /// Parses the fixed header and records its fields. Failures here poison
    /// the whole packet.
    pub fn parse(input: &[u8], fields: &mut FieldStream) -> Result<Header> {
        if input.len() < 10 {
            return Err(Error::ShortBuffer {
                needed: 10,
                available: input.len(),
            });
        }
        let protocol_id = input[0];
        if protocol_id != PROTOCOL_ID {
            return Err(Error::BadProtocolId(protocol_id));
        }
        let rosctr_raw = input[1];
        let rosctr = Rosctr::try_from(rosctr_raw).map_err(|_| Error::BadRosctr(rosctr_raw))?;
        if input.len() < rosctr.header_len() {
            return Err(Error::ShortBuffer {
                needed: rosctr.header_len(),
                available: input.len(),
            });
        }
        let redundancy_id = u16::from_be_bytes([input[2], input[3]]);
        let pdu_ref = u16::from_be_bytes([input[4], input[5]]);
        let param_len = u16::from_be_bytes([input[6], input[7]]);
        let data_len = u16::from_be_bytes([input[8], input[9]]);

        fields.u8("protocol_id", protocol_id, "Protocol Id");
        fields.u8(
            "rosctr",
            rosctr_raw,
            tables::describe8(tables::rosctr_name(rosctr_raw), rosctr_raw),
        );
        fields.u16("redundancy_id", redundancy_id, "Redundancy Identification");
        fields.u16("pdu_ref", pdu_ref, "Protocol Data Unit Reference");
        fields.u16("param_len", param_len, "Parameter length");
        fields.u16("data_len", data_len, "Data length");

        let error = if rosctr.header_len() == 12 {
            let class = input[10];
            let code = input[11];
            fields.u8("error_class", class, "Error class");
            fields.u8("error_code", code, "Error code");
            Some((class, code))
        } else {
            None
        };

        Ok(Header {
            rosctr,
            redundancy_id,
            pdu_ref,
            param_len,
            data_len,
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &[u8]) -> (Header, FieldStream) {
        let mut fields = FieldStream::new();
        let hdr = Header::parse(input, &mut fields)
            .unwrap_or_else(|e| panic!("header parse failed on {input:02x?}: {e}"));
        (hdr, fields)
    }

    #[test]
    fn parses_job_header() {
        let buf = [0x32, 0x01, 0x00, 0x00, 0x12, 0x34, 0x00, 0x0e, 0x00, 0x00];
        let (hdr, fields) = parse(&buf);
        assert_eq!(hdr.rosctr, Rosctr::Job);
        assert_eq!(hdr.pdu_ref, 0x1234);
        assert_eq!(hdr.param_len, 14);
        assert_eq!(hdr.error, None);
        assert_eq!(hdr.header_len(), 10);
        assert_eq!(fields.consumed(), 10);
    }

    #[test]
    fn ack_data_header_carries_error_pair() {
        let buf = [
            0x32, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00, 0x81, 0x04,
        ];
        let (hdr, fields) = parse(&buf);
        assert_eq!(hdr.rosctr, Rosctr::AckData);
        assert_eq!(hdr.error, Some((0x81, 0x04)));
        assert_eq!(hdr.header_len(), 12);
        assert_eq!(fields.consumed(), 12);
        assert!(fields.get("error_class").is_some());
    }

    #[test]
    fn rejects_wrong_protocol_id() {
        let buf = [0x33, 0x01, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut fields = FieldStream::new();
        assert_eq!(
            Header::parse(&buf, &mut fields).unwrap_err(),
            Error::BadProtocolId(0x33)
        );
    }

    #[test]
    fn rejects_rosctr_out_of_range() {
        let buf = [0x32, 0x08, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut fields = FieldStream::new();
        assert_eq!(
            Header::parse(&buf, &mut fields).unwrap_err(),
            Error::BadRosctr(0x08)
        );
    }

    #[test]
    fn short_buffer_reports_needed_bytes() {
        let mut fields = FieldStream::new();
        assert_eq!(
            Header::parse(&[0x32, 0x01], &mut fields).unwrap_err(),
            Error::ShortBuffer {
                needed: 10,
                available: 2
            }
        );
        // ACK needs 12, only 10 present
        let buf = [0x32, 0x02, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            Header::parse(&buf, &mut fields).unwrap_err(),
            Error::ShortBuffer {
                needed: 12,
                available: 10
            }
        );
    }
}
