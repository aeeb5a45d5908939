mod common;

use bytes::Bytes;
use common::{build_pdu, classic_word_item, init_tracing};
use s7comm_dissect::{
    AddressVariant, DissectOptions, Error, FieldValue, Packet, ParamBlock, Rosctr,
};

fn dissect(raw: Bytes) -> Packet {
    Packet::dissect(raw, &DissectOptions::default())
        .unwrap_or_else(|e| panic!("dissect failed: {e}"))
}

#[test]
fn read_var_round_trip() {
    init_tracing();

    // job: read one word from DB1 and two from DB7
    let mut param = vec![0x04, 0x02];
    param.extend_from_slice(&classic_word_item(1, 1));
    param.extend_from_slice(&classic_word_item(7, 2));
    let job = dissect(build_pdu(0x01, None, &param, &[]));
    assert_eq!(job.header.rosctr, Rosctr::Job);
    assert!(job.block_error.is_none());
    match job.param.as_ref().unwrap() {
        ParamBlock::ReadWrite {
            item_count, items, ..
        } => {
            assert_eq!(*item_count, 2);
            match &items[1].address {
                AddressVariant::Classic {
                    db_number, count, ..
                } => {
                    assert_eq!(*db_number, 7);
                    assert_eq!(*count, 2);
                }
                other => panic!("unexpected address: {other:?}"),
            }
        }
        other => panic!("unexpected param block: {other:?}"),
    }
    assert_eq!(job.fields.consumed(), job.raw.len());

    // response: the parameter repeats only the item count
    let data = [
        0xff, 0x04, 0x00, 0x10, 0x12, 0x34, // item 1
        0xff, 0x04, 0x00, 0x20, 0x56, 0x78, 0x9a, 0xbc, // item 2
    ];
    let resp = dissect(build_pdu(0x03, Some((0, 0)), &[0x04, 0x02], &data));
    assert_eq!(resp.header.error, Some((0, 0)));
    let items = resp.data.as_ref().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].data, vec![0x12, 0x34]);
    assert_eq!(items[1].data, vec![0x56, 0x78, 0x9a, 0xbc]);
    assert_eq!(resp.fields.consumed(), resp.raw.len());
}

#[test]
fn write_var_job_and_ack() {
    init_tracing();

    let mut param = vec![0x05, 0x01];
    param.extend_from_slice(&classic_word_item(2, 1));
    let data = [0x00, 0x04, 0x00, 0x10, 0xca, 0xfe];
    let job = dissect(build_pdu(0x01, None, &param, &data));
    assert_eq!(job.data.as_ref().unwrap()[0].data, vec![0xca, 0xfe]);
    assert_eq!(job.fields.consumed(), job.raw.len());

    let ack = dissect(build_pdu(0x03, Some((0, 0)), &[0x05, 0x01], &[0xff]));
    let items = ack.data.as_ref().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].return_code, 0xff);
    assert!(items[0].data.is_empty());
    assert_eq!(ack.fields.consumed(), ack.raw.len());
}

#[test]
fn setup_communication_negotiation() {
    init_tracing();

    let param = [0xf0, 0x00, 0x00, 0x03, 0x00, 0x03, 0x03, 0xc0];
    let pkt = dissect(build_pdu(0x01, None, &param, &[]));
    match pkt.param.unwrap() {
        ParamBlock::SetupCommunication {
            max_amq_calling,
            max_amq_called,
            pdu_length,
        } => {
            assert_eq!(max_amq_calling, 3);
            assert_eq!(max_amq_called, 3);
            assert_eq!(pdu_length, 960);
        }
        other => panic!("unexpected param block: {other:?}"),
    }
    assert_eq!(
        pkt.fields.get("function").unwrap().description,
        "Setup communication"
    );
}

#[test]
fn bare_ack_carries_only_the_error_pair() {
    init_tracing();

    let pkt = dissect(build_pdu(0x02, Some((0x81, 0x04)), &[], &[]));
    assert_eq!(pkt.header.rosctr, Rosctr::Ack);
    assert_eq!(pkt.header.error, Some((0x81, 0x04)));
    assert!(pkt.param.is_none());
    assert!(pkt.data.is_none());
    assert_eq!(pkt.fields.consumed(), 12);
}

#[test]
fn clock_read_response_formats_timestamp() {
    init_tracing();

    // time functions group, response form with the extended parameter
    let param = [
        0x00, 0x01, 0x12, 0x08, 0x12, 0x87, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    let data = [
        0xff, 0x09, 0x00, 0x0a, // success, octet string, 10 bytes
        0x00, 0x19, 0x13, 0x06, 0x21, 0x10, 0x20, 0x30, 0x15, 0x76,
    ];
    let pkt = dissect(build_pdu(0x07, None, &param, &data));
    let ud = pkt.userdata.unwrap();
    assert_eq!(ud.param.group, 0x7);
    assert_eq!(ud.param.error_code, Some(0));
    assert_eq!(
        pkt.fields.get("timestamp").unwrap().description,
        "Friday, 2013-06-21 10:20:30.157"
    );
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn diagnostic_message_push() {
    init_tracing();

    let param = [0x00, 0x01, 0x12, 0x04, 0x12, 0x04, 0x03, 0x00];
    let mut data = vec![0xff, 0x09, 0x00, 0x14];
    data.extend_from_slice(&[0x43, 0x02]); // mode transition STARTUP -> RUN
    data.extend_from_slice(&[0x01, 0x64]); // priority, OB 100
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x00, 0x00]);
    data.extend_from_slice(&[0x00, 0x19, 0x13, 0x06, 0x21, 0x10, 0x20, 0x30, 0x15, 0x76]);
    let pkt = dissect(build_pdu(0x07, None, &param, &data));
    assert_eq!(
        pkt.fields.get("event_id").unwrap().description,
        "Mode transition from STARTUP to RUN (entering)"
    );
    assert_eq!(
        pkt.fields.get("function_group").unwrap().description,
        "CPU functions"
    );
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn block_list_response() {
    init_tracing();

    let param = [
        0x00, 0x01, 0x12, 0x08, 0x12, 0x83, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    // two entries: OB count 12, FB count 3
    let data = [
        0xff, 0x09, 0x00, 0x08, 0x30, 0x38, 0x00, 0x0c, 0x30, 0x45, 0x00, 0x03,
    ];
    let pkt = dissect(build_pdu(0x07, None, &param, &data));
    let block_types: Vec<_> = pkt
        .fields
        .iter()
        .filter(|f| f.name == "block_type")
        .map(|f| f.description.clone())
        .collect();
    assert_eq!(block_types, vec!["OB", "FB"]);
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn pad_byte_between_items_not_after() {
    init_tracing();

    let data = [
        0xff, 0x04, 0x00, 0x08, 0xaa, 0x00, // odd item plus fill
        0xff, 0x04, 0x00, 0x08, 0xbb, // last odd item, no fill
    ];
    let pkt = dissect(build_pdu(0x03, Some((0, 0)), &[0x04, 0x02], &data));
    assert!(pkt.block_error.is_none());
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn pad_last_item_option() {
    init_tracing();

    let data = [0xff, 0x04, 0x00, 0x08, 0xaa, 0x00];
    let raw = build_pdu(0x03, Some((0, 0)), &[0x04, 0x01], &data);
    let opts = DissectOptions {
        pad_last_item: true,
    };
    let pkt = Packet::dissect(raw, &opts).unwrap();
    assert!(pkt.block_error.is_none());
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn unlisted_function_code_degrades_to_raw() {
    init_tracing();

    let pkt = dissect(build_pdu(0x01, None, &[0x99, 0xde, 0xad], &[]));
    match pkt.param.unwrap() {
        ParamBlock::Unknown { function, raw } => {
            assert_eq!(function, 0x99);
            assert_eq!(raw, vec![0xde, 0xad]);
        }
        other => panic!("unexpected param block: {other:?}"),
    }
    assert_eq!(
        pkt.fields.get("function").unwrap().description,
        "Unknown (0x99)"
    );
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn dbread_job_item() {
    init_tracing();

    let param = [
        0x04, 0x01, 0x12, 0x07, 0xb0, 0x01, 0x0a, 0x00, 0x05, 0x00, 0x00,
    ];
    let pkt = dissect(build_pdu(0x01, None, &param, &[]));
    match pkt.param.unwrap() {
        ParamBlock::ReadWrite { items, .. } => match &items[0].address {
            AddressVariant::DbRead { subitems } => {
                assert_eq!(subitems.len(), 1);
                assert_eq!(subitems[0].byte_count, 10);
                assert_eq!(subitems[0].db_number, 5);
            }
            other => panic!("unexpected address: {other:?}"),
        },
        other => panic!("unexpected param block: {other:?}"),
    }
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn header_failures_reject_the_packet() {
    init_tracing();

    let err = Packet::dissect(
        Bytes::from_static(&[0x31, 0x01, 0, 0, 0, 0, 0, 0, 0, 0]),
        &DissectOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err, Error::BadProtocolId(0x31));
    assert!(err.is_fatal());

    let err = Packet::dissect(Bytes::from_static(&[0x32]), &DissectOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::ShortBuffer { .. }));
}

#[test]
fn truncated_data_item_keeps_earlier_fields() {
    init_tracing();

    // item declares 4 value bytes but carries 2
    let data = [0xff, 0x04, 0x00, 0x20, 0x12, 0x34];
    let pkt = dissect(build_pdu(0x03, Some((0, 0)), &[0x04, 0x01], &data));
    let err = pkt.block_error.unwrap();
    assert!(!err.is_fatal());
    assert_eq!(err, Error::Truncated { context: "data item value" });
    assert_eq!(
        pkt.fields.get("item_count").unwrap().value,
        FieldValue::U8(1)
    );
    assert_eq!(
        pkt.fields.get("length").unwrap().value,
        FieldValue::U16(0x20)
    );
}

#[test]
fn minimal_job_header_decodes_even_without_its_blocks() {
    init_tracing();

    // param length claims two bytes the buffer does not carry
    let raw = Bytes::from_static(&[
        0x32, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00,
    ]);
    let pkt = Packet::dissect(raw, &DissectOptions::default()).unwrap();
    assert_eq!(pkt.header.rosctr, Rosctr::Job);
    assert_eq!(pkt.header.pdu_ref, 1);
    assert_eq!(pkt.header.header_len(), 10);
    assert_eq!(
        pkt.block_error,
        Some(Error::Truncated {
            context: "parameter block"
        })
    );

    let err = Packet::dissect(
        Bytes::from_static(&[0x33, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00]),
        &DissectOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err, Error::BadProtocolId(0x33));
}

#[test]
fn classic_input_bit_address() {
    init_tracing();

    // I 5.1, one bit
    let param = [
        0x04, 0x01, 0x12, 0x0a, 0x10, 0x01, 0x00, 0x01, 0x00, 0x00, 0x81, 0x00, 0x00, 0x29,
    ];
    let pkt = dissect(build_pdu(0x01, None, &param, &[]));
    match pkt.param.unwrap() {
        ParamBlock::ReadWrite { items, .. } => match items[0].address {
            AddressVariant::Classic {
                byte_address,
                bit_address,
                ..
            } => {
                assert_eq!(byte_address, 5);
                assert_eq!(bit_address, 1);
            }
            ref other => panic!("unexpected address: {other:?}"),
        },
        other => panic!("unexpected param block: {other:?}"),
    }
    assert_eq!(pkt.fields.get("area").unwrap().description, "Inputs (I)");
}

#[test]
fn unknown_userdata_subfunction_degrades_to_raw() {
    init_tracing();

    let param = [0x00, 0x01, 0x12, 0x04, 0x11, 0x44, 0x7f, 0x00];
    let data = [0xff, 0x09, 0x00, 0x02, 0xab, 0xcd];
    let pkt = dissect(build_pdu(0x07, None, &param, &data));
    assert!(pkt.block_error.is_none());
    assert_eq!(
        pkt.fields.get("subfunction").unwrap().description,
        "Unknown (0x7f)"
    );
    assert_eq!(pkt.fields.get("userdata_data").unwrap().len, 2);
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn userdata_head_mismatch_is_tolerated() {
    init_tracing();

    let param = [0x00, 0x01, 0x13, 0x04, 0x11, 0x47, 0x01, 0x00];
    let pkt = dissect(build_pdu(0x07, None, &param, &[]));
    assert!(pkt.block_error.is_none());
    let ud = pkt.userdata.unwrap();
    assert_eq!(ud.param.head, 0x0001_13);
    assert_eq!(pkt.fields.consumed(), pkt.raw.len());
}

#[test]
fn packet_serializes_to_json() {
    init_tracing();

    let param = [0xf0, 0x00, 0x00, 0x01, 0x00, 0x01, 0x01, 0xe0];
    let pkt = dissect(build_pdu(0x01, None, &param, &[]));
    let json = serde_json::to_value(&pkt).unwrap();
    assert_eq!(json["header"]["pdu_ref"], 1);
    assert!(json["fields"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["name"] == "pdu_length"));
}
