//! Parameter block of JOB and ACK_DATA PDUs: a function code byte followed
//! by a function-specific layout.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::field::FieldStream;
use crate::item::{parse_item, Item};
use crate::tables;
use crate::types::{Function, Rosctr};
use crate::wire::{hex_string, latin1_to_string, take_be_u16, take_be_u32, take_slice, take_u8};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParamBlock {
    SetupCommunication {
        max_amq_calling: u16,
        max_amq_called: u16,
        pdu_length: u16,
    },
    ReadWrite {
        function: u8,
        item_count: u8,
        /// Populated on JOB; ACK_DATA repeats only the count.
        items: Vec<Item>,
    },
    BlockControl {
        function: u8,
        filename: Option<String>,
        upload_id: Option<u32>,
    },
    PiService {
        service: String,
    },
    PlcStop {
        routing: Option<String>,
    },
    CpuService,
    /// Unlisted function code, parameters kept raw.
    Unknown {
        function: u8,
        raw: Vec<u8>,
    },
}

/// Decodes the parameter block of a JOB or ACK_DATA PDU. `pad_last_item`
/// selects the fill-byte policy for the read/write item list, matching the
/// data block rule.
pub fn decode(
    param: &[u8],
    rosctr: Rosctr,
    pad_last_item: bool,
    fields: &mut FieldStream,
) -> Result<ParamBlock> {
    let (rest, function) = take_u8(param, "parameter function code")?;
    fields.u8(
        "function",
        function,
        tables::describe8(tables::function_name(function), function),
    );

    match Function::try_from(function) {
        Ok(Function::SetupCommunication) => decode_setup_comm(rest, fields),
        Ok(Function::ReadVar) | Ok(Function::WriteVar) => {
            decode_read_write(rest, function, rosctr, pad_last_item, fields)
        }
        Ok(
            func @ (Function::RequestDownload
            | Function::DownloadBlock
            | Function::DownloadEnded
            | Function::StartUpload
            | Function::Upload
            | Function::EndUpload),
        ) => decode_block_control(rest, func, rosctr, fields),
        Ok(Function::PiService) => decode_pi_service(rest, fields),
        Ok(Function::PlcStop) => decode_plc_stop(rest, fields),
        Ok(Function::CpuService) => {
            if !rest.is_empty() {
                fields.bytes("param_raw", rest, "CPU service parameters");
            }
            Ok(ParamBlock::CpuService)
        }
        Err(()) => {
            debug!(function, "unlisted parameter function code");
            if !rest.is_empty() {
                fields.bytes("param_raw", rest, hex_string(rest));
            }
            Ok(ParamBlock::Unknown {
                function,
                raw: rest.to_vec(),
            })
        }
    }
}

fn decode_setup_comm(input: &[u8], fields: &mut FieldStream) -> Result<ParamBlock> {
    let (rest, reserved) = take_u8(input, "setup communication reserved")?;
    fields.u8("reserved", reserved, "Reserved");
    let (rest, max_amq_calling) = take_be_u16(rest, "setup communication max amq calling")?;
    fields.u16("max_amq_calling", max_amq_calling, "Max AMQ calling");
    let (rest, max_amq_called) = take_be_u16(rest, "setup communication max amq called")?;
    fields.u16("max_amq_called", max_amq_called, "Max AMQ called");
    let (_, pdu_length) = take_be_u16(rest, "setup communication pdu length")?;
    fields.u16("pdu_length", pdu_length, "Negotiated PDU length");
    Ok(ParamBlock::SetupCommunication {
        max_amq_calling,
        max_amq_called,
        pdu_length,
    })
}

fn decode_read_write(
    input: &[u8],
    function: u8,
    rosctr: Rosctr,
    pad_last_item: bool,
    fields: &mut FieldStream,
) -> Result<ParamBlock> {
    let (mut rest, item_count) = take_u8(input, "item count")?;
    fields.u8("item_count", item_count, "Item count");
    let mut items = Vec::new();
    if rosctr == Rosctr::Job {
        for i in 0..item_count {
            let before = rest.len();
            let (next, item) = parse_item(rest, fields)?;
            let consumed = before - next.len();
            items.push(item);
            rest = next;
            // odd-length items are followed by a fill byte, same rule as
            // the data block
            let is_last = i + 1 == item_count;
            if consumed % 2 == 1 && (!is_last || pad_last_item) {
                let (r, fill) = take_u8(rest, "item fill byte")?;
                fields.u8("fill_byte", fill, "Fill byte");
                rest = r;
            }
        }
    }
    Ok(ParamBlock::ReadWrite {
        function,
        item_count,
        items,
    })
}

fn decode_function_status<'a>(input: &'a [u8], fields: &mut FieldStream) -> Result<&'a [u8]> {
    let (rest, status) = take_u8(input, "block control status")?;
    let mut flags = Vec::new();
    if status & 0x01 != 0 {
        flags.push("More data following");
    }
    if status & 0x02 != 0 {
        flags.push("Error");
    }
    let description = if flags.is_empty() {
        "Function status".to_owned()
    } else {
        format!("Function status: {}", flags.join(", "))
    };
    fields.u8("function_status", status, description);
    Ok(rest)
}

/// Length-prefixed block filename. The canonical nine-character form
/// decomposes into file identifier, block type, block number and
/// destination filesystem.
fn decode_filename<'a>(input: &'a [u8], fields: &mut FieldStream) -> Result<(&'a [u8], String)> {
    let (rest, len) = take_u8(input, "filename length")?;
    fields.u8("filename_length", len, "Filename length");
    let (rest, raw) = take_slice(rest, usize::from(len), "filename")?;
    let filename = latin1_to_string(raw);
    if raw.len() == 9 {
        fields.str("file_ident", &filename[0..1], "File identifier", 1);
        let block_type = &filename[1..3];
        fields.str(
            "block_type",
            block_type,
            tables::block_type_name(block_type).unwrap_or("Unknown block type"),
            2,
        );
        fields.str("block_number", &filename[3..8], "Block number", 5);
        fields.str(
            "dest_filesystem",
            &filename[8..9],
            "Destination filesystem",
            1,
        );
    } else {
        fields.str("filename", filename.clone(), "Filename", raw.len());
    }
    Ok((rest, filename))
}

fn decode_block_control(
    input: &[u8],
    func: Function,
    rosctr: Rosctr,
    fields: &mut FieldStream,
) -> Result<ParamBlock> {
    let function = func as u8;
    // ACK_DATA legs without parameters are legal for most of the family.
    if input.is_empty() {
        return Ok(ParamBlock::BlockControl {
            function,
            filename: None,
            upload_id: None,
        });
    }
    let rest = decode_function_status(input, fields)?;

    let mut filename = None;
    let mut upload_id = None;
    let mut rest = rest;

    match (func, rosctr) {
        (Function::RequestDownload | Function::DownloadBlock, Rosctr::Job) => {
            let (r, unknown) = take_slice(rest, 2, "block control reserved")?;
            fields.bytes("unknown", unknown, "Unknown");
            let (r, unknown2) = take_slice(r, 4, "block control reserved")?;
            fields.bytes("unknown", unknown2, "Unknown");
            let (r, name) = decode_filename(r, fields)?;
            filename = Some(name);
            rest = r;
            if func == Function::RequestDownload && !rest.is_empty() {
                rest = decode_download_part2(rest, fields)?;
            }
        }
        (Function::DownloadEnded, Rosctr::Job) => {
            let (r, errorcode) = take_be_u16(rest, "block control error code")?;
            fields.u16("block_errorcode", errorcode, "Error code");
            let (r, unknown) = take_slice(r, 4, "block control reserved")?;
            fields.bytes("unknown", unknown, "Unknown");
            let (r, name) = decode_filename(r, fields)?;
            filename = Some(name);
            rest = r;
        }
        (Function::StartUpload, Rosctr::Job) => {
            let (r, unknown) = take_slice(rest, 2, "block control reserved")?;
            fields.bytes("unknown", unknown, "Unknown");
            let (r, id) = take_be_u32(r, "upload id")?;
            fields.u32("upload_id", id, "Upload id");
            upload_id = Some(id);
            let (r, name) = decode_filename(r, fields)?;
            filename = Some(name);
            rest = r;
        }
        (Function::StartUpload, _) => {
            let (r, unknown) = take_slice(rest, 2, "block control reserved")?;
            fields.bytes("unknown", unknown, "Unknown");
            let (r, id) = take_be_u32(r, "upload id")?;
            fields.u32("upload_id", id, "Upload id");
            upload_id = Some(id);
            let (r, len) = take_u8(r, "block length string length")?;
            fields.u8("blocklen_string_length", len, "Block length string length");
            let (r, raw) = take_slice(r, usize::from(len), "block length string")?;
            fields.str(
                "blocklen_string",
                latin1_to_string(raw),
                "Block length",
                raw.len(),
            );
            rest = r;
        }
        (Function::Upload | Function::EndUpload, Rosctr::Job) => {
            let (r, head) = take_slice(rest, 2, "block control reserved")?;
            if func == Function::EndUpload {
                let errorcode = u16::from_be_bytes([head[0], head[1]]);
                fields.u16("block_errorcode", errorcode, "Error code");
            } else {
                fields.bytes("unknown", head, "Unknown");
            }
            let (r, id) = take_be_u32(r, "upload id")?;
            fields.u32("upload_id", id, "Upload id");
            upload_id = Some(id);
            rest = r;
        }
        // remaining ACK_DATA legs carry the status byte alone
        _ => {}
    }
    if !rest.is_empty() {
        fields.bytes("param_trailer", rest, "Trailing parameter bytes");
    }
    Ok(ParamBlock::BlockControl {
        function,
        filename,
        upload_id,
    })
}

/// Second length part of a download request: load memory and MC7 code
/// lengths as ASCII decimal.
fn decode_download_part2<'a>(input: &'a [u8], fields: &mut FieldStream) -> Result<&'a [u8]> {
    let (rest, len) = take_u8(input, "download part2 length")?;
    fields.u8("part2_length", len, "Length part 2");
    let (rest, part2) = take_slice(rest, usize::from(len), "download part2")?;
    if part2.len() == 13 {
        fields.str("part2_unknown", latin1_to_string(&part2[0..1]), "Unknown", 1);
        fields.str(
            "loadmem_length",
            latin1_to_string(&part2[1..7]),
            "Length of load memory",
            6,
        );
        fields.str(
            "mc7code_length",
            latin1_to_string(&part2[7..13]),
            "Length of MC7 code",
            6,
        );
    } else {
        fields.bytes("part2_raw", part2, "Length part 2 (unrecognized layout)");
    }
    Ok(rest)
}

fn decode_pi_service(input: &[u8], fields: &mut FieldStream) -> Result<ParamBlock> {
    let (rest, unknown) = take_slice(input, 7, "pi service head")?;
    let unknown = unknown.to_vec();
    let (rest, pb_len) = take_be_u16(rest, "pi parameter block length")?;
    let (rest, pb) = take_slice(rest, usize::from(pb_len), "pi parameter block")?;
    let (rest, name_len) = take_u8(rest, "pi service name length")?;
    let (rest, name_raw) = take_slice(rest, usize::from(name_len), "pi service name")?;
    let service = latin1_to_string(name_raw);

    // fields in wire order: head, length, block contents, then the name
    fields.bytes("pi_unknown", &unknown, "Unknown");
    fields.u16("parameter_block_length", pb_len, "Parameter block length");
    decode_pi_parameter_block(pb, &service, fields)?;
    fields.u8("service_name_length", name_len, "String length");
    fields.str(
        "service_name",
        service.clone(),
        tables::pi_service_description(&service)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("PI-Service {service}")),
        name_raw.len(),
    );

    if !rest.is_empty() {
        fields.bytes("param_trailer", rest, "Trailing parameter bytes");
    }
    Ok(ParamBlock::PiService { service })
}

fn decode_pi_parameter_block(pb: &[u8], service: &str, fields: &mut FieldStream) -> Result<()> {
    match service {
        "_INSE" | "_DELE" => {
            let (mut rest, count) = take_u8(pb, "pi block count")?;
            fields.u8("number_of_blocks", count, "Number of blocks");
            for _ in 0..count {
                let (r, entry) = take_slice(rest, 8, "pi block entry")?;
                let entry = latin1_to_string(entry);
                let block_type = &entry[0..2];
                fields.str(
                    "block_type",
                    block_type,
                    tables::block_type_name(block_type).unwrap_or("Unknown block type"),
                    2,
                );
                fields.str("block_number", &entry[2..7], "Block number", 5);
                fields.str("dest_filesystem", &entry[7..8], "Destination filesystem", 1);
                rest = r;
            }
            if !rest.is_empty() {
                fields.bytes("parameter_block", rest, "Parameter block remainder");
            }
        }
        "P_PROGRAM" | "_MODU" | "_GARB" => {
            if !pb.is_empty() {
                fields.str("argument", latin1_to_string(pb), "Argument", pb.len());
            }
        }
        _ => {
            if !pb.is_empty() {
                fields.bytes("parameter_block", pb, "Parameter block");
            }
        }
    }
    Ok(())
}

fn decode_plc_stop(input: &[u8], fields: &mut FieldStream) -> Result<ParamBlock> {
    if input.is_empty() {
        return Ok(ParamBlock::PlcStop { routing: None });
    }
    let (rest, unknown) = take_slice(input, 5, "plc stop head")?;
    fields.bytes("unknown", unknown, "Unknown");
    let (rest, len) = take_u8(rest, "plc stop routing length")?;
    fields.u8("routing_length", len, "String length");
    let (rest, raw) = take_slice(rest, usize::from(len), "plc stop routing")?;
    let routing = latin1_to_string(raw);
    fields.str(
        "routing",
        routing.clone(),
        tables::pi_service_description(&routing)
            .map(str::to_owned)
            .unwrap_or_else(|| "Routing service".to_owned()),
        raw.len(),
    );
    if !rest.is_empty() {
        fields.bytes("param_trailer", rest, "Trailing parameter bytes");
    }
    Ok(ParamBlock::PlcStop {
        routing: Some(routing),
    })
}
