//! Top-level dissection: header first, then the parameter and data blocks
//! the header's length fields delimit. Header failures reject the packet;
//! block-level failures keep everything decoded up to the failure point.

use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::data::{self, DataItem};
use crate::error::{Error, Result};
use crate::field::FieldStream;
use crate::header::Header;
use crate::param::{self, ParamBlock};
use crate::types::{Function, Rosctr};
use crate::userdata::{self, UserData};
use crate::wire::hex_string;

/// Knobs for device quirks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DissectOptions {
    /// Consume a fill byte after the last data item too. Most devices pad
    /// only between items; a few pad the final odd-length item as well.
    pub pad_last_item: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Packet {
    #[serde(skip)]
    pub raw: Bytes,
    pub header: Header,
    pub param: Option<ParamBlock>,
    pub data: Option<Vec<DataItem>>,
    pub userdata: Option<UserData>,
    pub fields: FieldStream,
    /// Soft failure inside a parameter or data block. Fields accumulated
    /// before the failure are kept; the unreadable remainder is not.
    #[serde(serialize_with = "error_as_string")]
    pub block_error: Option<Error>,
}

fn error_as_string<S: serde::Serializer>(
    err: &Option<Error>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match err {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

impl Packet {
    /// Dissects one PDU. Returns `Err` only for failures in the fixed
    /// header; anything past it degrades into `block_error`.
    pub fn dissect(raw: Bytes, opts: &DissectOptions) -> Result<Packet> {
        let mut fields = FieldStream::new();
        let header = Header::parse(&raw, &mut fields)?;

        let body = &raw[header.header_len()..];
        let param_len = usize::from(header.param_len);
        let data_len = usize::from(header.data_len);

        let mut packet = Packet {
            header,
            param: None,
            data: None,
            userdata: None,
            fields: FieldStream::new(),
            block_error: None,
            raw: raw.clone(),
        };

        if param_len > body.len() {
            packet.block_error = Some(Error::Truncated {
                context: "parameter block",
            });
            packet.fields = fields;
            return Ok(packet);
        }
        let param_block = &body[..param_len];
        let after_param = &body[param_len..];
        // the parameter block is fully present even when the data block is
        // cut short, so it is decoded either way
        let data_truncated = data_len > after_param.len();
        let data_block = if data_truncated {
            &[][..]
        } else {
            &after_param[..data_len]
        };

        match header.rosctr {
            Rosctr::UserData => match userdata::decode(param_block, data_block, &mut fields) {
                Ok(ud) => packet.userdata = Some(ud),
                Err(e) if !e.is_fatal() => packet.block_error = Some(e),
                Err(e) => return Err(e),
            },
            Rosctr::Job | Rosctr::AckData => {
                match decode_blocks(param_block, data_block, header.rosctr, opts, &mut fields) {
                    Ok((param, data)) => {
                        packet.param = param;
                        packet.data = data;
                    }
                    Err(e) if !e.is_fatal() => packet.block_error = Some(e),
                    Err(e) => return Err(e),
                }
            }
            // ACK and the unnamed ROSCTRs carry no modeled blocks
            Rosctr::Ack | Rosctr::Other(_) => {
                if !param_block.is_empty() {
                    fields.bytes("param_raw", param_block, hex_string(param_block));
                }
                if !data_block.is_empty() {
                    fields.bytes("data_raw", data_block, hex_string(data_block));
                }
            }
        }

        if packet.block_error.is_none() {
            if data_truncated {
                packet.block_error = Some(Error::Truncated {
                    context: "data block",
                });
            } else {
                let declared_end = header.header_len() + param_len + data_len;
                if declared_end < raw.len() {
                    debug!(
                        leftover = raw.len() - declared_end,
                        "bytes past the declared blocks"
                    );
                    fields.bytes("trailer", &raw[declared_end..], "Bytes past the declared blocks");
                }
            }
        }

        packet.fields = fields;
        Ok(packet)
    }
}

fn decode_blocks(
    param_block: &[u8],
    data_block: &[u8],
    rosctr: Rosctr,
    opts: &DissectOptions,
    fields: &mut FieldStream,
) -> Result<(Option<ParamBlock>, Option<Vec<DataItem>>)> {
    if param_block.is_empty() {
        if !data_block.is_empty() {
            fields.bytes("data_raw", data_block, hex_string(data_block));
        }
        return Ok((None, None));
    }
    let param = param::decode(param_block, rosctr, opts.pad_last_item, fields)?;

    let data = if data_block.is_empty() {
        None
    } else {
        match &param {
            ParamBlock::ReadWrite {
                function,
                item_count,
                ..
            } => {
                let count = usize::from(*item_count);
                if *function == Function::WriteVar as u8 && rosctr == Rosctr::AckData {
                    Some(data::decode_write_ack(data_block, count, fields)?)
                } else {
                    Some(data::decode_items(
                        data_block,
                        count,
                        opts.pad_last_item,
                        fields,
                    )?)
                }
            }
            // block transfer payloads and unmodeled functions stay raw
            _ => {
                fields.bytes("data_raw", data_block, hex_string(data_block));
                None
            }
        }
    };
    Ok((Some(param), data))
}
