//! Variable specification items of read/write jobs. Each item is a prefix
//! of var-spec type and length bytes followed by a syntax-id-selected
//! address layout.

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::field::{FieldStream, FieldValue};
use crate::tables;
use crate::types::{Area, SyntaxId};
use crate::wire::{take_be_u16, take_be_u32, take_slice, take_u8};

pub const VAR_SPEC_TYPE: u8 = 0x12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub syntax_id: u8,
    pub address: AddressVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbReadSubitem {
    pub byte_count: u8,
    pub db_number: u16,
    pub start_address: u16,
}

/// One 4-byte LID substructure entry of a symbolic S7-1200 address: a flag
/// nibble over a 28-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TiaLid {
    pub flags: u8,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AddressVariant {
    Classic {
        transport_size: u8,
        count: u16,
        db_number: u16,
        area: u8,
        /// Byte offset from the 24-bit packed address field.
        byte_address: u32,
        /// Bit offset, low three bits of the packed field.
        bit_address: u8,
    },
    DbRead {
        subitems: Vec<DbReadSubitem>,
    },
    Tia1200 {
        area1: u16,
        db_number: Option<u16>,
        area2: Option<u16>,
        crc: u32,
        lids: Vec<TiaLid>,
    },
    Nck {
        area: u8,
        unit: u8,
        column: u16,
        line: u16,
        module: u8,
        line_count: u8,
    },
    /// Recognized but unmodeled layout, kept as raw bytes.
    Unsupported {
        raw: Vec<u8>,
    },
}

/// Parses one item and appends its fields. The returned remainder always
/// starts after the full declared spec length, so an inner layout that does
/// not use every byte cannot desynchronize the item list.
pub fn parse_item<'a>(input: &'a [u8], fields: &mut FieldStream) -> Result<(&'a [u8], Item)> {
    let recorded_before = fields.consumed();
    let (rest, var_spec) = take_u8(input, "item var spec")?;
    if var_spec != VAR_SPEC_TYPE {
        warn!(var_spec, "unexpected variable specification type");
    }
    fields.u8("var_spec", var_spec, "Variable specification");
    let (rest, spec_len) = take_u8(rest, "item var spec length")?;
    fields.u8(
        "address_length",
        spec_len,
        "Length of following address specification",
    );
    if spec_len == 0 {
        return Err(Error::Truncated {
            context: "empty address specification",
        });
    }
    let (after_item, spec) = take_slice(rest, usize::from(spec_len), "item address")?;
    let (spec, syntax_id) = take_u8(spec, "item syntax id")?;
    fields.u8(
        "syntax_id",
        syntax_id,
        tables::describe8(tables::syntax_id_name(syntax_id), syntax_id),
    );

    let address = match SyntaxId::try_from(syntax_id) {
        Ok(SyntaxId::S7Any) => parse_classic(spec, fields)?,
        Ok(SyntaxId::DbRead) => parse_dbread(spec, fields)?,
        Ok(SyntaxId::Tia1200) => parse_tia1200(spec, fields)?,
        Ok(SyntaxId::Nck) => parse_nck(spec, fields)?,
        // Sized but unmodeled layouts degrade to raw bytes; an unknown
        // syntax id does the same since the spec length bounds it.
        Ok(SyntaxId::PbcRid) | Ok(SyntaxId::DriveEsAny) | Err(()) => {
            fields.bytes("address_raw", spec, tables::unknown8(syntax_id));
            AddressVariant::Unsupported { raw: spec.to_vec() }
        }
    };

    // the declared spec length may exceed what the modeled layout reads;
    // record the remainder so field positions stay aligned with the buffer
    let declared = 2 + usize::from(spec_len);
    let covered = fields.consumed() - recorded_before;
    if covered < declared {
        fields.bytes(
            "address_trailer",
            &input[covered..declared],
            "Trailing address bytes",
        );
    }

    Ok((after_item, Item { syntax_id, address }))
}

fn parse_classic(spec: &[u8], fields: &mut FieldStream) -> Result<AddressVariant> {
    let (spec, transport_size) = take_u8(spec, "classic transport size")?;
    fields.u8(
        "transport_size",
        transport_size,
        tables::describe8(tables::transport_size_name(transport_size), transport_size),
    );
    let (spec, count) = take_be_u16(spec, "classic length")?;
    fields.u16("length", count, "Element count");
    let (spec, db_number) = take_be_u16(spec, "classic db number")?;
    fields.u16("db_number", db_number, "DB number");
    let (spec, area) = take_u8(spec, "classic area")?;
    fields.u8(
        "area",
        area,
        tables::describe8(tables::area_name(area), area),
    );
    let (_, packed) = take_slice(spec, 3, "classic address")?;
    let packed = u32::from(packed[0]) << 16 | u32::from(packed[1]) << 8 | u32::from(packed[2]);
    let byte_address = packed >> 3;
    let bit_address = (packed & 0x7) as u8;
    let cell_addressed = Area::try_from(area)
        .map(Area::is_cell_addressed)
        .unwrap_or(false);
    let description = if cell_addressed {
        format!("Number {byte_address}")
    } else {
        format!("Byte {byte_address} Bit {bit_address}")
    };
    fields.push("address", FieldValue::U32(packed), description, 3);
    Ok(AddressVariant::Classic {
        transport_size,
        count,
        db_number,
        area,
        byte_address,
        bit_address,
    })
}

fn parse_dbread(spec: &[u8], fields: &mut FieldStream) -> Result<AddressVariant> {
    let (mut spec, num_areas) = take_u8(spec, "dbread area count")?;
    fields.u8("number_of_areas", num_areas, "Number of areas");
    let mut subitems = Vec::with_capacity(usize::from(num_areas));
    for _ in 0..num_areas {
        let (rest, byte_count) = take_u8(spec, "dbread byte count")?;
        fields.u8("byte_count", byte_count, "Number of bytes to read");
        let (rest, db_number) = take_be_u16(rest, "dbread db number")?;
        fields.u16("db_number", db_number, "DB number");
        let (rest, start_address) = take_be_u16(rest, "dbread start address")?;
        fields.u16("start_address", start_address, "Start address");
        subitems.push(DbReadSubitem {
            byte_count,
            db_number,
            start_address,
        });
        spec = rest;
    }
    Ok(AddressVariant::DbRead { subitems })
}

fn parse_tia1200(spec: &[u8], fields: &mut FieldStream) -> Result<AddressVariant> {
    let (spec, reserved) = take_u8(spec, "tia1200 reserved")?;
    fields.u8("tia1200_reserved", reserved, "Reserved");
    let (spec, area1) = take_be_u16(spec, "tia1200 root area")?;
    fields.u16(
        "tia1200_area1",
        area1,
        tables::describe16(tables::tia1200_area1_name(area1), area1),
    );
    let (spec, db_number, area2) = if area1 == 0x8a0e {
        let (spec, db) = take_be_u16(spec, "tia1200 db number")?;
        fields.u16("tia1200_db_number", db, "DB number");
        (spec, Some(db), None)
    } else {
        let (spec, a2) = take_be_u16(spec, "tia1200 detail area")?;
        fields.u16(
            "tia1200_area2",
            a2,
            tables::describe16(tables::tia1200_area2_name(a2), a2),
        );
        (spec, None, Some(a2))
    };
    let (mut spec, crc) = take_be_u32(spec, "tia1200 crc")?;
    fields.u32("tia1200_crc", crc, "CRC");

    // remainder of the spec is 4-byte LID substructure entries
    let mut lids = Vec::new();
    while !spec.is_empty() {
        let (rest, entry) = take_be_u32(spec, "tia1200 lid entry")?;
        let flags = (entry >> 28) as u8;
        let value = entry & 0x0fff_ffff;
        fields.push(
            "tia1200_lid",
            FieldValue::U32(value),
            format!(
                "{}: {value}",
                tables::describe8(tables::tia1200_lid_flag_name(flags), flags)
            ),
            4,
        );
        lids.push(TiaLid { flags, value });
        spec = rest;
    }
    Ok(AddressVariant::Tia1200 {
        area1,
        db_number,
        area2,
        crc,
        lids,
    })
}

fn parse_nck(spec: &[u8], fields: &mut FieldStream) -> Result<AddressVariant> {
    let (spec, area_unit) = take_u8(spec, "nck area/unit")?;
    let area = area_unit >> 5;
    let unit = area_unit & 0x1f;
    fields.push(
        "nck_area",
        FieldValue::U8(area),
        tables::describe8(tables::nck_area_name(area), area),
        1,
    );
    fields.push("nck_unit", FieldValue::U8(unit), format!("Unit {unit}"), 0);
    let (spec, column) = take_be_u16(spec, "nck column")?;
    fields.u16("nck_column", column, "NCK column");
    let (spec, line) = take_be_u16(spec, "nck line")?;
    fields.u16("nck_line", line, "NCK line");
    let (spec, module) = take_u8(spec, "nck module")?;
    fields.u8(
        "nck_module",
        module,
        tables::describe8(tables::nck_module_name(module), module),
    );
    let (_, line_count) = take_u8(spec, "nck line count")?;
    fields.u8("nck_linecount", line_count, "NCK line count");
    Ok(AddressVariant::Nck {
        area,
        unit,
        column,
        line,
        module,
        line_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(input: &[u8]) -> (Item, FieldStream) {
        let mut fields = FieldStream::new();
        let (rest, item) = parse_item(input, &mut fields)
            .unwrap_or_else(|e| panic!("item parse failed on {input:02x?}: {e}"));
        assert!(rest.is_empty(), "item left {} bytes", rest.len());
        (item, fields)
    }

    #[test]
    fn classic_db_address() {
        // DB1.DBX 4.3, 2 words
        let buf = [
            0x12, 0x0a, 0x10, 0x04, 0x00, 0x02, 0x00, 0x01, 0x84, 0x00, 0x00, 0x23,
        ];
        let (item, fields) = item(&buf);
        assert_eq!(item.syntax_id, 0x10);
        match item.address {
            AddressVariant::Classic {
                transport_size,
                count,
                db_number,
                area,
                byte_address,
                bit_address,
            } => {
                assert_eq!(transport_size, 0x04);
                assert_eq!(count, 2);
                assert_eq!(db_number, 1);
                assert_eq!(area, 0x84);
                assert_eq!(byte_address, 4);
                assert_eq!(bit_address, 3);
            }
            other => panic!("expected classic address, got {other:?}"),
        }
        assert_eq!(fields.get("address").unwrap().description, "Byte 4 Bit 3");
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn classic_timer_addressed_by_number() {
        let buf = [
            0x12, 0x0a, 0x10, 0x1d, 0x00, 0x01, 0x00, 0x00, 0x1d, 0x00, 0x00, 0x28,
        ];
        let (_, fields) = item(&buf);
        assert_eq!(fields.get("address").unwrap().description, "Number 5");
    }

    #[test]
    fn dbread_item_lists_subareas() {
        let buf = [
            0x12, 0x0c, 0xb0, 0x02, 0x08, 0x00, 0x05, 0x00, 0x10, 0x04, 0x00, 0x07, 0x00, 0x00,
        ];
        let (item, fields) = item(&buf);
        match item.address {
            AddressVariant::DbRead { subitems } => {
                assert_eq!(subitems.len(), 2);
                assert_eq!(subitems[0].byte_count, 8);
                assert_eq!(subitems[0].db_number, 5);
                assert_eq!(subitems[0].start_address, 16);
                assert_eq!(subitems[1].db_number, 7);
            }
            other => panic!("expected dbread address, got {other:?}"),
        }
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn tia1200_db_with_lid_chain() {
        let buf = [
            0x12, 0x0e, 0xb2, 0xff, 0x8a, 0x0e, 0x00, 0x03, 0xde, 0xad, 0xbe, 0xef, 0x4a, 0xbc,
            0xde, 0xf0,
        ];
        let (item, fields) = item(&buf);
        match item.address {
            AddressVariant::Tia1200 {
                area1,
                db_number,
                area2,
                crc,
                lids,
            } => {
                assert_eq!(area1, 0x8a0e);
                assert_eq!(db_number, Some(3));
                assert_eq!(area2, None);
                assert_eq!(crc, 0xdeadbeef);
                assert_eq!(lids.len(), 1);
                assert_eq!(lids[0].flags, 0x4);
                assert_eq!(lids[0].value, 0x0abc_def0);
            }
            other => panic!("expected tia1200 address, got {other:?}"),
        }
        assert!(fields
            .get("tia1200_lid")
            .unwrap()
            .description
            .starts_with("Obtain by LID"));
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn nck_packed_area_unit() {
        // area 2 (channel), unit 1
        let buf = [
            0x12, 0x08, 0x82, 0x41, 0x00, 0x03, 0x00, 0x11, 0x7f, 0x01,
        ];
        let (item, fields) = item(&buf);
        match item.address {
            AddressVariant::Nck {
                area,
                unit,
                column,
                line,
                module,
                line_count,
            } => {
                assert_eq!(area, 2);
                assert_eq!(unit, 1);
                assert_eq!(column, 3);
                assert_eq!(line, 0x11);
                assert_eq!(module, 0x7f);
                assert_eq!(line_count, 1);
            }
            other => panic!("expected nck address, got {other:?}"),
        }
        assert_eq!(fields.get("nck_area").unwrap().description, "C - Channel");
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn unknown_syntax_id_keeps_raw_bytes() {
        let buf = [0x12, 0x04, 0x77, 0xaa, 0xbb, 0xcc];
        let (item, fields) = item(&buf);
        match item.address {
            AddressVariant::Unsupported { raw } => assert_eq!(raw, vec![0xaa, 0xbb, 0xcc]),
            other => panic!("expected unsupported address, got {other:?}"),
        }
        assert_eq!(
            fields.get("syntax_id").unwrap().description,
            "Unknown (0x77)"
        );
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn overlong_spec_accounts_unmodeled_bytes() {
        // classic layout is 9 bytes past the syntax id; the two declared
        // extras must still be covered by a field
        let buf = [
            0x12, 0x0c, 0x10, 0x04, 0x00, 0x01, 0x00, 0x01, 0x84, 0x00, 0x00, 0x00, 0xaa, 0xbb,
        ];
        let (item, fields) = item(&buf);
        assert!(matches!(item.address, AddressVariant::Classic { .. }));
        match &fields.get("address_trailer").unwrap().value {
            FieldValue::Bytes(b) => assert_eq!(b, &vec![0xaa, 0xbb]),
            other => panic!("expected raw bytes, got {other:?}"),
        }
        assert_eq!(fields.consumed(), buf.len());
    }

    #[test]
    fn zero_length_spec_is_rejected() {
        let mut fields = FieldStream::new();
        let err = parse_item(&[0x12, 0x00], &mut fields).unwrap_err();
        assert_eq!(
            err,
            Error::Truncated {
                context: "empty address specification"
            }
        );
        // header bytes already recorded stay recorded
        assert_eq!(fields.consumed(), 2);
    }

    #[test]
    fn truncated_classic_address_aborts() {
        let buf = [0x12, 0x0a, 0x10, 0x04, 0x00];
        let mut fields = FieldStream::new();
        let err = parse_item(&buf, &mut fields).unwrap_err();
        assert_eq!(err, Error::Truncated { context: "item address" });
    }
}
