//! Data block of read responses and write requests: per-item heads of
//! return code, transport size and declared length, followed by the value
//! bytes and an alignment fill byte between odd-length items.

use serde::Serialize;

use crate::error::Result;
use crate::field::FieldStream;
use crate::tables;
use crate::types::DataTransportSize;
use crate::wire::{take_be_u16, take_slice, take_u8};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataItem {
    pub return_code: u8,
    pub transport_size: u8,
    /// Declared length in the unit selected by the transport size.
    pub length: u16,
    pub data: Vec<u8>,
}

/// Decodes `item_count` data items. With `pad_last` unset the fill byte
/// after an odd-length item is consumed only between items, mirroring
/// devices that do not pad the final item of the block.
pub fn decode_items(
    input: &[u8],
    item_count: usize,
    pad_last: bool,
    fields: &mut FieldStream,
) -> Result<Vec<DataItem>> {
    let mut rest = input;
    let mut items = Vec::with_capacity(item_count);
    for i in 0..item_count {
        let (r, item) = decode_item(rest, fields)?;
        rest = r;
        let is_last = i + 1 == item_count;
        if item.data.len() % 2 == 1 && (!is_last || pad_last) {
            let (r, fill) = take_u8(rest, "data fill byte")?;
            fields.u8("fill_byte", fill, "Fill byte");
            rest = r;
        }
        items.push(item);
    }
    Ok(items)
}

fn decode_item<'a>(input: &'a [u8], fields: &mut FieldStream) -> Result<(&'a [u8], DataItem)> {
    let (rest, return_code) = take_u8(input, "data item return code")?;
    fields.u8(
        "return_code",
        return_code,
        tables::describe8(tables::item_return_value_name(return_code), return_code),
    );
    let (rest, transport_size) = take_u8(rest, "data item transport size")?;
    fields.u8(
        "transport_size",
        transport_size,
        tables::describe8(
            tables::data_transport_size_name(transport_size),
            transport_size,
        ),
    );
    let (rest, length) = take_be_u16(rest, "data item length")?;
    fields.u16("length", length, "Declared data length");
    let byte_len = DataTransportSize::try_from(transport_size)
        .map(|ts| ts.len_in_bytes(length))
        // unlisted transport sizes are taken as byte counts
        .unwrap_or(usize::from(length));
    let (rest, data) = take_slice(rest, byte_len, "data item value")?;
    if !data.is_empty() {
        fields.bytes("data", data, "Item value");
    }
    Ok((
        rest,
        DataItem {
            return_code,
            transport_size,
            length,
            data: data.to_vec(),
        },
    ))
}

/// Write responses acknowledge each item with a bare return code byte.
pub fn decode_write_ack(
    input: &[u8],
    item_count: usize,
    fields: &mut FieldStream,
) -> Result<Vec<DataItem>> {
    let mut rest = input;
    let mut items = Vec::with_capacity(item_count);
    for _ in 0..item_count {
        let (r, return_code) = take_u8(rest, "write ack return code")?;
        fields.u8(
            "return_code",
            return_code,
            tables::describe8(tables::item_return_value_name(return_code), return_code),
        );
        items.push(DataItem {
            return_code,
            transport_size: 0,
            length: 0,
            data: Vec::new(),
        });
        rest = r;
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn decode_ok(input: &[u8], count: usize, pad_last: bool) -> (Vec<DataItem>, FieldStream) {
        let mut fields = FieldStream::new();
        let items = decode_items(input, count, pad_last, &mut fields)
            .unwrap_or_else(|e| panic!("data decode failed on {input:02x?}: {e}"));
        (items, fields)
    }

    #[test]
    fn single_word_item() {
        // success, BYTE/WORD/DWORD, 16 bits, value 0x0102
        let buf = [0xff, 0x04, 0x00, 0x10, 0x01, 0x02];
        let (items, fields) = decode_ok(&buf, 1, false);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].return_code, 0xff);
        assert_eq!(items[0].data, vec![0x01, 0x02]);
        assert_eq!(fields.get("return_code").unwrap().description, "Success");
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn odd_item_padded_between_but_not_after() {
        // two one-byte items: first is followed by a fill byte, last is not
        let buf = [
            0xff, 0x04, 0x00, 0x08, 0xaa, 0x00, 0xff, 0x04, 0x00, 0x08, 0xbb,
        ];
        let (items, fields) = decode_ok(&buf, 2, false);
        assert_eq!(items[0].data, vec![0xaa]);
        assert_eq!(items[1].data, vec![0xbb]);
        assert_eq!(fields.get("fill_byte").unwrap().len, 1);
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn pad_last_item_when_requested() {
        let buf = [0xff, 0x04, 0x00, 0x08, 0xaa, 0x00];
        let (items, fields) = decode_ok(&buf, 1, true);
        assert_eq!(items[0].data, vec![0xaa]);
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn bit_item_counts_bytes() {
        // BIT transport size declares its length in bytes
        let buf = [0xff, 0x03, 0x00, 0x01, 0x01];
        let (items, _) = decode_ok(&buf, 1, false);
        assert_eq!(items[0].data, vec![0x01]);
    }

    #[test]
    fn failed_item_with_null_size_has_no_value() {
        let buf = [0x0a, 0x00, 0x00, 0x00];
        let (items, fields) = decode_ok(&buf, 1, false);
        assert!(items[0].data.is_empty());
        assert_eq!(
            fields.get("return_code").unwrap().description,
            "Object does not exist"
        );
    }

    #[test]
    fn truncated_value_aborts_block() {
        let buf = [0xff, 0x04, 0x00, 0x20, 0x01, 0x02];
        let mut fields = FieldStream::new();
        let err = decode_items(&buf, 1, false, &mut fields).unwrap_err();
        assert_eq!(err, Error::Truncated { context: "data item value" });
        // fields recorded before the failure survive
        assert_eq!(fields.get("length").unwrap().len, 2);
    }

    #[test]
    fn write_ack_return_codes() {
        let mut fields = FieldStream::new();
        let items = decode_write_ack(&[0xff, 0x05], 2, &mut fields).unwrap();
        assert_eq!(items[0].return_code, 0xff);
        assert_eq!(items[1].return_code, 0x05);
        assert_eq!(fields.consumed(), 2);
    }
}
