//! USERDATA PDUs: a fixed parameter head carrying a packed type/function
//! group byte and a subfunction, followed by a data section whose payload
//! layout depends on (group, type, subfunction).

mod block;
mod cpu;
mod cyclic;
mod prog;
mod security;
mod time;

use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::field::{FieldStream, FieldValue};
use crate::tables;
use crate::types::{DataTransportSize, UserDataGroup, UserDataType};
use crate::wire::{hex_string, take_be_u16, take_slice, take_u8};

/// Expected constant in the three head bytes of every USERDATA parameter.
pub const PARAM_HEAD: u32 = 0x0001_12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserDataParam {
    pub head: u32,
    pub param_len: u8,
    pub ud_type: u8,
    pub group: u8,
    pub subfunction: u8,
    pub sequence: u8,
    /// Present only in the 8-byte (response-class) parameter form.
    pub data_unit_ref: Option<u8>,
    pub last_data_unit: Option<u8>,
    pub error_code: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDataPayload {
    pub return_code: u8,
    pub transport_size: u8,
    pub length: u16,
    pub raw: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserData {
    pub param: UserDataParam,
    pub data: Option<UserDataPayload>,
}

fn subfunc_name(group: u8, code: u8) -> Option<&'static str> {
    match UserDataGroup::try_from(group) {
        Ok(UserDataGroup::ModeTransition) => tables::modetrans_name(code),
        Ok(UserDataGroup::Programmer) => tables::prog_subfunc_name(code),
        Ok(UserDataGroup::Cyclic) => tables::cyclic_subfunc_name(code),
        Ok(UserDataGroup::Block) => tables::block_subfunc_name(code),
        Ok(UserDataGroup::Cpu) => tables::cpu_subfunc_name(code),
        Ok(UserDataGroup::Security) => tables::sec_subfunc_name(code),
        Ok(UserDataGroup::Time) => tables::time_subfunc_name(code),
        _ => None,
    }
}

/// Decodes parameter and data sections of a USERDATA PDU.
pub fn decode(param: &[u8], data: &[u8], fields: &mut FieldStream) -> Result<UserData> {
    let param = decode_param(param, fields)?;
    let data = if data.is_empty() {
        None
    } else {
        Some(decode_data(data, &param, fields)?)
    };
    Ok(UserData { param, data })
}

fn decode_param(input: &[u8], fields: &mut FieldStream) -> Result<UserDataParam> {
    let (rest, head_bytes) = take_slice(input, 3, "userdata parameter head")?;
    let head = u32::from(head_bytes[0]) << 16
        | u32::from(head_bytes[1]) << 8
        | u32::from(head_bytes[2]);
    if head != PARAM_HEAD {
        warn!(head = format_args!("0x{head:06x}"), "unexpected userdata parameter head");
    }
    fields.push(
        "parameter_head",
        FieldValue::U32(head),
        "Parameter head",
        3,
    );
    let (rest, param_len) = take_u8(rest, "userdata parameter length")?;
    fields.u8("parameter_length", param_len, "Parameter length");
    let (rest, req_res2) = take_u8(rest, "userdata request/response code")?;
    fields.u8("req_res2", req_res2, "Unknown (request/response)");
    let (rest, type_group) = take_u8(rest, "userdata type/group")?;
    let ud_type = type_group >> 4;
    let group = type_group & 0x0f;
    fields.push(
        "ud_type",
        FieldValue::U8(ud_type),
        tables::describe8(tables::userdata_type_name(ud_type), ud_type),
        1,
    );
    fields.push(
        "function_group",
        FieldValue::U8(group),
        tables::describe8(tables::userdata_group_name(group), group),
        0,
    );
    let (rest, subfunction) = take_u8(rest, "userdata subfunction")?;
    fields.u8(
        "subfunction",
        subfunction,
        tables::describe8(subfunc_name(group, subfunction), subfunction),
    );
    let (rest, sequence) = take_u8(rest, "userdata sequence number")?;
    fields.u8("sequence", sequence, "Sequence number");

    let (data_unit_ref, last_data_unit, error_code) = if param_len >= 8 {
        let (rest, dur) = take_u8(rest, "userdata data unit reference")?;
        fields.u8("data_unit_ref", dur, "Data unit reference");
        let (rest, last) = take_u8(rest, "userdata last data unit")?;
        fields.u8(
            "last_data_unit",
            last,
            if last == 0 { "Last data unit: Yes" } else { "Last data unit: No" },
        );
        let (_, err) = take_be_u16(rest, "userdata error code")?;
        fields.u16("userdata_errorcode", err, "Error code");
        (Some(dur), Some(last), Some(err))
    } else {
        let _ = rest;
        (None, None, None)
    };

    Ok(UserDataParam {
        head,
        param_len,
        ud_type,
        group,
        subfunction,
        sequence,
        data_unit_ref,
        last_data_unit,
        error_code,
    })
}

fn decode_data(
    input: &[u8],
    param: &UserDataParam,
    fields: &mut FieldStream,
) -> Result<UserDataPayload> {
    let (rest, return_code) = take_u8(input, "userdata return code")?;
    fields.u8(
        "return_code",
        return_code,
        tables::describe8(tables::item_return_value_name(return_code), return_code),
    );
    let (rest, transport_size) = take_u8(rest, "userdata transport size")?;
    fields.u8(
        "transport_size",
        transport_size,
        tables::describe8(
            tables::data_transport_size_name(transport_size),
            transport_size,
        ),
    );
    let (rest, length) = take_be_u16(rest, "userdata data length")?;
    fields.u16("length", length, "Data length");
    let byte_len = DataTransportSize::try_from(transport_size)
        .map(|ts| ts.len_in_bytes(length))
        .unwrap_or(usize::from(length));
    let (rest, payload) = take_slice(rest, byte_len, "userdata payload")?;

    dispatch_payload(param, payload, fields)?;
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }

    Ok(UserDataPayload {
        return_code,
        transport_size,
        length,
        raw: payload.to_vec(),
    })
}

fn dispatch_payload(
    param: &UserDataParam,
    payload: &[u8],
    fields: &mut FieldStream,
) -> Result<()> {
    if payload.is_empty() {
        return Ok(());
    }
    let ud_type = UserDataType::try_from(param.ud_type).unwrap_or(UserDataType::Push);
    match UserDataGroup::try_from(param.group) {
        Ok(UserDataGroup::Programmer) => {
            prog::decode(ud_type, param.subfunction, payload, fields)
        }
        Ok(UserDataGroup::Cyclic) => cyclic::decode(ud_type, param.subfunction, payload, fields),
        Ok(UserDataGroup::Block) => block::decode(ud_type, param.subfunction, payload, fields),
        Ok(UserDataGroup::Cpu) => cpu::decode(ud_type, param.subfunction, payload, fields),
        Ok(UserDataGroup::Security) => security::decode(param.subfunction, payload, fields),
        Ok(UserDataGroup::Time) => time::decode(param.subfunction, payload, fields),
        // mode transitions carry the mode in the subfunction; anything in
        // the payload stays raw, as do unmodeled groups
        _ => {
            fields.bytes("userdata_data", payload, hex_string(payload));
            Ok(())
        }
    }
}
