//! CPU function payloads: SZL reads, the message service, diagnostic
//! messages and the alarm family.

use crate::error::Result;
use crate::field::{FieldStream, FieldValue};
use crate::tables;
use crate::timestamp;
use crate::types::{DataTransportSize, UserDataType};
use crate::wire::{
    hex_string, latin1_to_string, take_be_u16, take_be_u32, take_slice, take_u8,
};

const SUBF_READSZL: u8 = 0x01;
const SUBF_MSGS: u8 = 0x02;
const SUBF_DIAGMSG: u8 = 0x03;
const SUBF_ALARM8_IND: u8 = 0x05;
const SUBF_NOTIFY_IND: u8 = 0x06;
const SUBF_ALARM8_LOCK: u8 = 0x07;
const SUBF_ALARM8_UNLOCK: u8 = 0x08;
const SUBF_ALARMACK: u8 = 0x0b;
const SUBF_ALARMACK_IND: u8 = 0x0c;
const SUBF_ALARM8LOCK_IND: u8 = 0x0d;
const SUBF_ALARM8UNLOCK_IND: u8 = 0x0e;
const SUBF_ALARMSQ_IND: u8 = 0x11;
const SUBF_ALARMS_IND: u8 = 0x12;
const SUBF_ALARMQUERY: u8 = 0x13;
const SUBF_NOTIFY8_IND: u8 = 0x16;

pub(super) fn decode(
    ud_type: UserDataType,
    subfunction: u8,
    payload: &[u8],
    fields: &mut FieldStream,
) -> Result<()> {
    match (subfunction, ud_type) {
        (SUBF_READSZL, UserDataType::Request) => decode_szl_request(payload, fields),
        (SUBF_READSZL, UserDataType::Response) => decode_szl_response(payload, fields),
        (SUBF_MSGS, UserDataType::Request) => decode_msgs_request(payload, fields),
        (SUBF_MSGS, UserDataType::Response) => decode_msgs_response(payload, fields),
        (SUBF_DIAGMSG, _) => decode_diag_message(payload, fields),
        (
            SUBF_ALARM8_IND | SUBF_NOTIFY_IND | SUBF_ALARMSQ_IND | SUBF_ALARMS_IND
            | SUBF_NOTIFY8_IND | SUBF_ALARMACK_IND | SUBF_ALARM8LOCK_IND
            | SUBF_ALARM8UNLOCK_IND,
            _,
        ) => decode_alarm_indication(payload, fields),
        (SUBF_ALARM8_LOCK | SUBF_ALARM8_UNLOCK, _) => decode_alarm_lock(payload, fields),
        (SUBF_ALARMACK, _) => decode_alarm_ack(payload, fields),
        (SUBF_ALARMQUERY, UserDataType::Request) => decode_alarm_query_request(payload, fields),
        (SUBF_ALARMQUERY, UserDataType::Response) => decode_alarm_query_response(payload, fields),
        _ => {
            fields.bytes("userdata_data", payload, hex_string(payload));
            Ok(())
        }
    }
}

fn decode_szl_request(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, szl_id) = take_be_u16(payload, "szl id")?;
    fields.u16("szl_id", szl_id, "SZL-ID");
    let (rest, szl_index) = take_be_u16(rest, "szl index")?;
    fields.u16("szl_index", szl_index, "SZL-Index");
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_szl_response(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, szl_id) = take_be_u16(payload, "szl id")?;
    fields.u16("szl_id", szl_id, "SZL-ID");
    let (rest, szl_index) = take_be_u16(rest, "szl index")?;
    fields.u16("szl_index", szl_index, "SZL-Index");
    let (rest, record_len) = take_be_u16(rest, "szl record length")?;
    fields.u16("szl_record_length", record_len, "SZL partial list length");
    let (mut rest, record_count) = take_be_u16(rest, "szl record count")?;
    fields.u16("szl_record_count", record_count, "SZL partial list count");
    // a fragmented response may carry fewer records than announced
    for _ in 0..record_count {
        if rest.is_empty() {
            break;
        }
        let n = usize::from(record_len).min(rest.len());
        let (r, record) = take_slice(rest, n, "szl record")?;
        fields.bytes("szl_record", record, "SZL data record");
        rest = r;
    }
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn push_subscribed_events(events: u8, fields: &mut FieldStream) {
    const NAMES: [(u8, &str); 4] = [
        (0x80, "Mode transitions"),
        (0x40, "System diagnostics"),
        (0x20, "Userdefined"),
        (0x02, "Alarms"),
    ];
    let set: Vec<&str> = NAMES
        .iter()
        .filter(|(mask, _)| events & mask != 0)
        .map(|(_, name)| *name)
        .collect();
    let description = if set.is_empty() {
        "Subscribed events: none".to_owned()
    } else {
        format!("Subscribed events: {}", set.join(", "))
    };
    fields.u8("subscribed_events", events, description);
}

fn push_almtype(almtype: u8, fields: &mut FieldStream) {
    fields.u8(
        "alarm_type",
        almtype,
        tables::describe8(tables::msgservice_almtype_name(almtype), almtype),
    );
}

fn decode_msgs_request(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, events) = take_u8(payload, "message service events")?;
    push_subscribed_events(events, fields);
    let (rest, reserved) = take_u8(rest, "message service reserved")?;
    fields.u8("reserved", reserved, "Reserved");
    let (rest, username) = take_slice(rest, 8, "message service username")?;
    fields.str(
        "username",
        latin1_to_string(username).trim_end_matches(['\0', ' ']),
        "Username",
        8,
    );
    if rest.len() >= 2 {
        let (rest, almtype) = take_u8(rest, "message service alarm type")?;
        push_almtype(almtype, fields);
        let (rest, reserved2) = take_u8(rest, "message service reserved")?;
        fields.u8("reserved", reserved2, "Reserved");
        if !rest.is_empty() {
            fields.bytes("data_trailer", rest, "Trailing data bytes");
        }
    } else if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_msgs_response(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, result) = take_u8(payload, "message service result")?;
    fields.u8("result", result, "Result");
    let (rest, reserved) = take_u8(rest, "message service reserved")?;
    fields.u8("reserved", reserved, "Reserved");
    if rest.len() >= 2 {
        let (rest, almtype) = take_u8(rest, "message service alarm type")?;
        push_almtype(almtype, fields);
        let (rest, reserved2) = take_u8(rest, "message service reserved")?;
        fields.u8("reserved", reserved2, "Reserved");
        if !rest.is_empty() {
            fields.bytes("data_trailer", rest, "Trailing data bytes");
        }
    } else if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

/// Event id description: full id in the fixed catalogue; classes 8 and 9
/// are looked up with the entering/leaving and source bits masked off.
fn event_description(event_id: u16) -> String {
    let class = (event_id >> 12) as u8;
    let fixed = if class == 0x8 || class == 0x9 {
        tables::diag_eventid_module_name(event_id & 0xf0ff)
    } else {
        tables::diag_eventid_name(event_id)
    };
    match fixed {
        Some(desc) => desc.to_owned(),
        None => format!(
            "{}, event 0x{:02x}",
            tables::describe8(tables::diag_eventid_class_name(class), class),
            event_id & 0xff
        ),
    }
}

fn push_event_id(event_id: u16, fields: &mut FieldStream) {
    let mut description = event_description(event_id);
    if event_id & 0x0100 != 0 {
        description.push_str(" (entering)");
    } else {
        description.push_str(" (leaving)");
    }
    fields.u16("event_id", event_id, description);
}

/// Timestamps inside message payloads degrade to raw bytes when unset or
/// garbled; the surrounding object list keeps decoding.
fn push_timestamp(name: &'static str, raw: &[u8], fields: &mut FieldStream) {
    let decoded = if raw.len() >= 10 {
        timestamp::decode_dt10(raw)
    } else {
        timestamp::decode_dt8(raw)
    };
    match decoded {
        Ok(ts) => fields.time(
            name,
            ts.datetime,
            format!(
                "{}, {}",
                ts.weekday_name(),
                ts.datetime.format("%Y-%m-%d %H:%M:%S%.3f")
            ),
            raw.len(),
        ),
        Err(_) => fields.bytes(name, raw, hex_string(raw)),
    }
}

fn decode_diag_message(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, event_id) = take_be_u16(payload, "diagnostic event id")?;
    push_event_id(event_id, fields);
    let (rest, prio) = take_u8(rest, "diagnostic priority class")?;
    fields.u8("priority_class", prio, "Priority class");
    let (rest, ob) = take_u8(rest, "diagnostic ob number")?;
    fields.u8("ob_number", ob, "OB number");
    let (rest, datid) = take_be_u16(rest, "diagnostic dat id")?;
    fields.u16("dat_id", datid, "DatID");
    let (rest, info1) = take_be_u16(rest, "diagnostic info1")?;
    fields.u16("info1", info1, "Additional information 1");
    let (rest, info2) = take_be_u16(rest, "diagnostic info2")?;
    fields.u16("info2", info2, "Additional information 2");
    let (rest, ts_raw) = take_slice(rest, 10, "diagnostic timestamp")?;
    push_timestamp("timestamp", ts_raw, fields);
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn push_signal_states(state: u8, name: &'static str, fields: &mut FieldStream) {
    let set: Vec<String> = (0..8)
        .filter(|bit| state & (1 << bit) != 0)
        .map(|bit| format!("SIG_{}", bit + 1))
        .collect();
    let description = if set.is_empty() {
        "no signals set".to_owned()
    } else {
        set.join(", ")
    };
    fields.u8(name, state, description);
}

/// One associated value, laid out like a data block item head.
fn decode_associated_value<'a>(input: &'a [u8], fields: &mut FieldStream) -> Result<&'a [u8]> {
    let (rest, return_code) = take_u8(input, "associated value return code")?;
    fields.u8(
        "return_code",
        return_code,
        tables::describe8(tables::item_return_value_name(return_code), return_code),
    );
    let (rest, transport_size) = take_u8(rest, "associated value transport size")?;
    fields.u8(
        "transport_size",
        transport_size,
        tables::describe8(
            tables::data_transport_size_name(transport_size),
            transport_size,
        ),
    );
    let (rest, length) = take_be_u16(rest, "associated value length")?;
    fields.u16("length", length, "Declared data length");
    let byte_len = DataTransportSize::try_from(transport_size)
        .map(|ts| ts.len_in_bytes(length))
        .unwrap_or(usize::from(length));
    let (rest, value) = take_slice(rest, byte_len, "associated value")?;
    if !value.is_empty() {
        fields.bytes("associated_value", value, "Associated value");
    }
    Ok(rest)
}

fn decode_alarm_indication(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, function) = take_u8(payload, "alarm message function")?;
    fields.u8("alarm_function", function, "Alarm message function");
    let (mut rest, nr_objects) = take_u8(rest, "alarm message object count")?;
    fields.u8("number_of_objects", nr_objects, "Number of message objects");
    for _ in 0..nr_objects {
        let (r, event_id) = take_be_u32(rest, "alarm event id")?;
        fields.push(
            "alarm_event_id",
            FieldValue::U32(event_id),
            format!("Event id 0x{event_id:08x}"),
            4,
        );
        let (r, eventstate) = take_u8(r, "alarm event state")?;
        push_signal_states(eventstate, "event_state", fields);
        let (r, ackstate_coming) = take_u8(r, "alarm ack state coming")?;
        push_signal_states(ackstate_coming, "ackstate_coming", fields);
        let (r, ackstate_going) = take_u8(r, "alarm ack state going")?;
        push_signal_states(ackstate_going, "ackstate_going", fields);
        let (r, ts_coming) = take_slice(r, 8, "alarm timestamp coming")?;
        push_timestamp("timestamp_coming", ts_coming, fields);
        let (r, ts_going) = take_slice(r, 8, "alarm timestamp going")?;
        push_timestamp("timestamp_going", ts_going, fields);
        let (mut r, nr_values) = take_u8(r, "alarm associated value count")?;
        fields.u8(
            "number_of_values",
            nr_values,
            "Number of associated values",
        );
        for _ in 0..nr_values {
            r = decode_associated_value(r, fields)?;
        }
        rest = r;
    }
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_alarm_lock(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, event_id) = take_be_u32(payload, "alarm event id")?;
    fields.push(
        "alarm_event_id",
        FieldValue::U32(event_id),
        format!("Event id 0x{event_id:08x}"),
        4,
    );
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_alarm_ack(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, function) = take_u8(payload, "alarm ack function")?;
    fields.u8("alarm_function", function, "Alarm message function");
    let (mut rest, nr_objects) = take_u8(rest, "alarm ack object count")?;
    fields.u8("number_of_objects", nr_objects, "Number of message objects");
    for _ in 0..nr_objects {
        let (r, event_id) = take_be_u32(rest, "alarm event id")?;
        fields.push(
            "alarm_event_id",
            FieldValue::U32(event_id),
            format!("Event id 0x{event_id:08x}"),
            4,
        );
        let (r, coming) = take_u8(r, "alarm ack state coming")?;
        push_signal_states(coming, "ackstate_coming", fields);
        let (r, going) = take_u8(r, "alarm ack state going")?;
        push_signal_states(going, "ackstate_going", fields);
        rest = r;
    }
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_alarm_query_request(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, unknown) = take_u8(payload, "alarm query head")?;
    fields.u8("unknown", unknown, "Unknown");
    let (rest, querytype) = take_u8(rest, "alarm query type")?;
    fields.u8(
        "query_type",
        querytype,
        tables::describe8(tables::alarm_querytype_name(querytype), querytype),
    );
    let (rest, unknown2) = take_u8(rest, "alarm query head")?;
    fields.u8("unknown", unknown2, "Unknown");
    let (rest, alarmtype) = take_be_u32(rest, "alarm query alarm type")?;
    fields.push(
        "query_alarm_type",
        FieldValue::U32(alarmtype),
        tables::alarm_query_alarmtype_name(alarmtype)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Unknown (0x{alarmtype:08x})")),
        4,
    );
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_alarm_query_response(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, complete_len) = take_be_u16(payload, "alarm query complete length")?;
    fields.u16("complete_length", complete_len, "Complete data length");
    if !rest.is_empty() {
        fields.bytes("query_dataset", rest, "Alarm query dataset");
    }
    Ok(())
}
