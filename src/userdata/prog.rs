//! Programmer command payloads: AWL diagnostic data requests and variable
//! table transfers.

use crate::data;
use crate::error::Result;
use crate::field::FieldStream;
use crate::tables;
use crate::types::UserDataType;
use crate::wire::{hex_string, take_be_u16, take_slice, take_u8};

pub(super) fn decode(
    ud_type: UserDataType,
    subfunction: u8,
    payload: &[u8],
    fields: &mut FieldStream,
) -> Result<()> {
    match (subfunction, ud_type) {
        (0x01 | 0x13, UserDataType::Request) => decode_reqdiagdata(payload, fields),
        (0x02, UserDataType::Request) => decode_vartab_request(payload, fields),
        (0x02, UserDataType::Response) => decode_vartab_response(payload, fields),
        _ => {
            fields.bytes("userdata_data", payload, hex_string(payload));
            Ok(())
        }
    }
}

fn push_register_flags(flags: u8, fields: &mut FieldStream) {
    const NAMES: [(u8, &str); 7] = [
        (0x01, "STW"),
        (0x02, "ACCU1"),
        (0x04, "ACCU2"),
        (0x08, "AR1"),
        (0x10, "AR2"),
        (0x20, "DB1"),
        (0x40, "DB2"),
    ];
    let set: Vec<&str> = NAMES
        .iter()
        .filter(|(mask, _)| flags & mask != 0)
        .map(|(_, name)| *name)
        .collect();
    let description = if set.is_empty() {
        "Registers: none".to_owned()
    } else {
        format!("Registers: {}", set.join(", "))
    };
    fields.u8("register_flags", flags, description);
}

fn decode_reqdiagdata(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, askheadersize) = take_be_u16(payload, "diag data ask header size")?;
    fields.u16("ask_header_size", askheadersize, "Ask header size");
    let (rest, asksize) = take_be_u16(rest, "diag data ask size")?;
    fields.u16("ask_size", asksize, "Ask size");
    let (rest, unknown) = take_slice(rest, 6, "diag data head")?;
    fields.bytes("unknown", unknown, "Unknown");
    let (rest, answersize) = take_be_u16(rest, "diag data answer size")?;
    fields.u16("answer_size", answersize, "Answer size");
    let (rest, unknown2) = take_slice(rest, 13, "diag data head")?;
    fields.bytes("unknown", unknown2, "Unknown");
    let (rest, block_type) = take_u8(rest, "diag data block type")?;
    fields.u8(
        "block_type",
        block_type,
        tables::describe8(tables::subblk_type_name(block_type), block_type),
    );
    let (rest, block_number) = take_be_u16(rest, "diag data block number")?;
    fields.u16("block_number", block_number, "Block number");
    let (rest, startaddr) = take_be_u16(rest, "diag data start address")?;
    fields.u16("startaddr_awl", startaddr, "Start address AWL");
    let (rest, saz) = take_be_u16(rest, "diag data saz")?;
    fields.u16("saz", saz, "Step address counter (SAZ)");
    let (rest, unknown3) = take_u8(rest, "diag data head")?;
    fields.u8("unknown", unknown3, "Unknown");
    let (rest, lines) = take_u8(rest, "diag data line count")?;
    fields.u8("number_of_lines", lines, "Number of lines");
    let (rest, unknown4) = take_u8(rest, "diag data head")?;
    fields.u8("unknown", unknown4, "Unknown");
    let (mut rest, flags) = take_u8(rest, "diag data register flags")?;
    push_register_flags(flags, fields);

    // one entry per requested AWL line
    while rest.len() >= 4 {
        let (r, unknown) = take_u8(rest, "diag data line")?;
        fields.u8("unknown", unknown, "Unknown");
        let (r, address) = take_be_u16(r, "diag data line address")?;
        fields.u16("line_address", address, "Address");
        let (r, line_flags) = take_u8(r, "diag data line register flags")?;
        push_register_flags(line_flags, fields);
        rest = r;
    }
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_vartab_head<'a>(input: &'a [u8], fields: &mut FieldStream) -> Result<&'a [u8]> {
    let (rest, data_type) = take_u8(input, "vartab data type")?;
    let description = match data_type {
        0x14 => "Request",
        0x04 => "Response",
        _ => "Unknown data type",
    };
    fields.u8("vartab_data_type", data_type, description);
    let (rest, byte_count) = take_be_u16(rest, "vartab byte count")?;
    fields.u16("byte_count", byte_count, "Byte count");
    Ok(rest)
}

fn decode_vartab_request(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let rest = decode_vartab_head(payload, fields)?;
    let (rest, unknown) = take_slice(rest, 20, "vartab request head")?;
    fields.bytes("unknown", unknown, "Unknown");
    let (mut rest, item_count) = take_be_u16(rest, "vartab item count")?;
    fields.u16("item_count", item_count, "Item count");
    for _ in 0..item_count {
        let (r, area) = take_u8(rest, "vartab memory area")?;
        fields.u8(
            "memory_area",
            area,
            tables::describe8(tables::vartab_area_name(area), area),
        );
        let (r, repetition) = take_u8(r, "vartab repetition factor")?;
        fields.u8("repetition_factor", repetition, "Repetition factor");
        let (r, db) = take_be_u16(r, "vartab db number")?;
        fields.u16("db_number", db, "DB number");
        let (r, start) = take_be_u16(r, "vartab start address")?;
        fields.u16("start_address", start, "Start address");
        rest = r;
    }
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_vartab_response(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let rest = decode_vartab_head(payload, fields)?;
    let (rest, unknown) = take_slice(rest, 4, "vartab response head")?;
    fields.bytes("unknown", unknown, "Unknown");
    let (rest, item_count) = take_be_u16(rest, "vartab item count")?;
    fields.u16("item_count", item_count, "Item count");
    data::decode_items(rest, usize::from(item_count), false, fields)?;
    Ok(())
}
