//! Cyclic services: subscription requests reuse the variable specification
//! items of read jobs, responses the data item layout of read responses.

use crate::data;
use crate::error::Result;
use crate::field::FieldStream;
use crate::item::parse_item;
use crate::types::UserDataType;
use crate::wire::{hex_string, take_be_u16, take_u8};

pub(super) fn decode(
    ud_type: UserDataType,
    subfunction: u8,
    payload: &[u8],
    fields: &mut FieldStream,
) -> Result<()> {
    match (subfunction, ud_type) {
        (0x01 | 0x05, UserDataType::Request) => decode_subscribe(payload, fields),
        (0x01 | 0x05, UserDataType::Response | UserDataType::Push) => {
            decode_indication(payload, fields)
        }
        _ => {
            fields.bytes("userdata_data", payload, hex_string(payload));
            Ok(())
        }
    }
}

fn decode_subscribe(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, item_count) = take_be_u16(payload, "cyclic item count")?;
    fields.u16("item_count", item_count, "Item count");
    let (rest, timebase) = take_u8(rest, "cyclic interval timebase")?;
    fields.u8("interval_timebase", timebase, "Interval timebase");
    let (mut rest, time) = take_u8(rest, "cyclic interval time")?;
    fields.u8("interval_time", time, "Interval time");
    for _ in 0..item_count {
        let (r, _) = parse_item(rest, fields)?;
        rest = r;
    }
    if !rest.is_empty() {
        fields.bytes("data_trailer", rest, "Trailing data bytes");
    }
    Ok(())
}

fn decode_indication(payload: &[u8], fields: &mut FieldStream) -> Result<()> {
    let (rest, item_count) = take_be_u16(payload, "cyclic item count")?;
    fields.u16("item_count", item_count, "Item count");
    data::decode_items(rest, usize::from(item_count), false, fields)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;

    #[test]
    fn subscription_with_one_item() {
        let mut payload = vec![0x00, 0x01, 0x01, 0x0a];
        payload.extend_from_slice(&[
            0x12, 0x0a, 0x10, 0x02, 0x00, 0x04, 0x00, 0x00, 0x83, 0x00, 0x00, 0x00,
        ]);
        let mut fields = FieldStream::new();
        decode(UserDataType::Request, 0x01, &payload, &mut fields).unwrap();
        assert_eq!(
            fields.get("interval_time").unwrap().value,
            FieldValue::U8(10)
        );
        assert_eq!(fields.get("area").unwrap().description, "Flags (M)");
        assert_eq!(fields.consumed(), payload.len());
    }

    #[test]
    fn indication_with_values() {
        let payload = [0x00, 0x01, 0xff, 0x04, 0x00, 0x20, 0x01, 0x02, 0x03, 0x04];
        let mut fields = FieldStream::new();
        decode(UserDataType::Push, 0x01, &payload, &mut fields).unwrap();
        assert_eq!(fields.get("return_code").unwrap().description, "Success");
        assert_eq!(fields.consumed(), payload.len());
    }

    #[test]
    fn unsubscribe_stays_raw() {
        let mut fields = FieldStream::new();
        decode(UserDataType::Request, 0x04, &[0x01], &mut fields).unwrap();
        assert_eq!(fields.get("userdata_data").unwrap().description, "01");
    }
}
