//! Block function payloads: block lists, per-type listings and the block
//! info record.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::field::{FieldStream, FieldValue};
use crate::tables;
use crate::types::UserDataType;
use crate::wire::{hex_string, latin1_to_string, take_be_u16, take_be_u32, take_slice, take_u8};

pub(super) fn decode(
    ud_type: UserDataType,
    subfunction: u8,
    payload: &[u8],
    fields: &mut FieldStream,
) -> Result<()> {
    match (subfunction, ud_type) {
        (0x01, UserDataType::Response) => decode_list_blocks(payload, fields),
        (0x02, UserDataType::Request) => decode_block_type(payload, fields).map(|_| ()),
        (0x02, UserDataType::Response) => decode_list_blocks_of_type(payload, fields),
        (0x03, UserDataType::Request) => decode_block_info_request(payload, fields),
        (0x03, UserDataType::Response) => decode_block_info_response(payload, fields),
        _ => {
            fields.bytes("userdata_data", payload, hex_string(payload));
            Ok(())
        }
    }
}

/// Two ASCII digits naming a block type.
fn decode_block_type<'a>(input: &'a [u8], fields: &mut FieldStream) -> Result<&'a [u8]> {
    let (rest, raw) = take_slice(input, 2, "block type")?;
    let ascii = latin1_to_string(raw);
    fields.str(
        "block_type",
        ascii.clone(),
        tables::block_type_name(&ascii).unwrap_or("Unknown block type"),
        2,
    );
    Ok(rest)
}

fn decode_list_blocks(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let mut rest = payload;
    while rest.len() >= 4 {
        rest = decode_block_type(rest, fields)?;
        let (r, count) = take_be_u16(rest, "block count")?;
        fields.u16("block_count", count, "Block count");
        rest = r;
    }
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_list_blocks_of_type(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let mut rest = payload;
    while rest.len() >= 4 {
        let (r, number) = take_be_u16(rest, "block number")?;
        fields.u16("block_number", number, "Block number");
        let (r, flags) = take_u8(r, "block flags")?;
        fields.u8("block_flags", flags, "Block flags");
        let (r, lang) = take_u8(r, "block language")?;
        fields.u8(
            "block_language",
            lang,
            tables::describe8(tables::block_lang_name(lang), lang),
        );
        rest = r;
    }
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_block_info_request(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let rest = decode_block_type(payload, fields)?;
    let (rest, num) = take_slice(rest, 5, "block number")?;
    fields.str("block_number", latin1_to_string(num), "Block number", 5);
    let (rest, fs) = take_slice(rest, 1, "filesystem")?;
    fields.str("filesystem", latin1_to_string(fs), "Filesystem", 1);
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

/// Block timestamps count milliseconds since 1984-01-01 in six bytes.
fn block_timestamp(raw: &[u8]) -> Option<NaiveDateTime> {
    let mut millis: i64 = 0;
    for &b in raw {
        millis = millis << 8 | i64::from(b);
    }
    let base = NaiveDate::from_ymd_opt(1984, 1, 1)?.and_hms_opt(0, 0, 0)?;
    base.checked_add_signed(Duration::milliseconds(millis))
}

fn push_block_timestamp(name: &'static str, raw: &[u8], fields: &mut FieldStream) {
    match block_timestamp(raw) {
        Some(ts) => fields.time(
            name,
            ts,
            format!("{}", ts.format("%Y-%m-%d %H:%M:%S%.3f")),
            6,
        ),
        None => fields.bytes(name, raw, hex_string(raw)),
    }
}

fn decode_block_info_response(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, info_len) = take_be_u16(payload, "block info length")?;
    fields.u16("info_length", info_len, "Length of Info");
    let (rest, unknown) = take_slice(rest, 2, "block info")?;
    fields.bytes("unknown", unknown, "Unknown");
    let (rest, const3) = take_slice(rest, 2, "block info constant")?;
    fields.str("constant3", latin1_to_string(const3), "Constant 3", 2);
    let (rest, unknown2) = take_u8(rest, "block info")?;
    fields.u8("unknown", unknown2, "Unknown");
    let (rest, flags) = take_u8(rest, "block info flags")?;
    let mut set = Vec::new();
    if flags & 0x01 != 0 {
        set.push("Linked");
    }
    if flags & 0x02 != 0 {
        set.push("Standard block");
    }
    if flags & 0x08 != 0 {
        set.push("Non-retain");
    }
    let description = if set.is_empty() {
        "Block flags".to_owned()
    } else {
        format!("Block flags: {}", set.join(", "))
    };
    fields.u8("block_flags", flags, description);
    let (rest, lang) = take_u8(rest, "block language")?;
    fields.u8(
        "block_language",
        lang,
        tables::describe8(tables::block_lang_name(lang), lang),
    );
    let (rest, subblk) = take_u8(rest, "subblock type")?;
    fields.u8(
        "subblk_type",
        subblk,
        tables::describe8(tables::subblk_type_name(subblk), subblk),
    );
    let (rest, number) = take_be_u16(rest, "block number")?;
    fields.u16("block_number", number, "Block number");
    let (rest, load_len) = take_be_u32(rest, "load memory length")?;
    fields.u32("loadmem_length", load_len, "Length load memory");
    let (rest, security) = take_be_u32(rest, "block security")?;
    fields.push(
        "block_security",
        FieldValue::U32(security),
        tables::describe8(
            tables::block_security_name(security),
            (security & 0xff) as u8,
        ),
        4,
    );
    let (rest, code_ts) = take_slice(rest, 6, "code timestamp")?;
    push_block_timestamp("code_timestamp", code_ts, fields);
    let (rest, if_ts) = take_slice(rest, 6, "interface timestamp")?;
    push_block_timestamp("interface_timestamp", if_ts, fields);
    let (rest, ssb_len) = take_be_u16(rest, "ssb length")?;
    fields.u16("ssb_length", ssb_len, "SSB length");
    let (rest, add_len) = take_be_u16(rest, "add length")?;
    fields.u16("add_length", add_len, "ADD length");
    let (rest, local_len) = take_be_u16(rest, "localdata length")?;
    fields.u16("localdata_length", local_len, "Length localdata");
    let (rest, mc7_len) = take_be_u16(rest, "mc7 length")?;
    fields.u16("mc7_length", mc7_len, "Length MC7 code");
    let (rest, author) = take_slice(rest, 8, "block author")?;
    fields.str("author", latin1_to_string(author).trim_end_matches('\0'), "Author", 8);
    let (rest, family) = take_slice(rest, 8, "block family")?;
    fields.str("family", latin1_to_string(family).trim_end_matches('\0'), "Family", 8);
    let (rest, name) = take_slice(rest, 8, "block header name")?;
    fields.str(
        "header_name",
        latin1_to_string(name).trim_end_matches('\0'),
        "Name (Header)",
        8,
    );
    let (rest, version) = take_slice(rest, 8, "block header version")?;
    fields.str(
        "header_version",
        latin1_to_string(version).trim_end_matches('\0'),
        "Version (Header)",
        8,
    );
    let (rest, checksum) = take_be_u16(rest, "block checksum")?;
    fields.u16("checksum", checksum, "Block checksum");
    let (rest, res1) = take_be_u32(rest, "block reserved")?;
    fields.u32("reserved1", res1, "Reserved 1");
    let (rest, res2) = take_be_u32(rest, "block reserved")?;
    fields.u32("reserved2", res2, "Reserved 2");
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}
