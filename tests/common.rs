use std::sync::Once;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Assembles a PDU: header with the lengths filled in from the block
/// slices, then the parameter and data blocks.
pub fn build_pdu(rosctr: u8, error: Option<(u8, u8)>, param: &[u8], data: &[u8]) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u8(0x32);
    buf.put_u8(rosctr);
    buf.put_u16(0x0000); // redundancy id
    buf.put_u16(0x0001); // pdu reference
    buf.put_u16(param.len() as u16);
    buf.put_u16(data.len() as u16);
    if let Some((class, code)) = error {
        buf.put_u8(class);
        buf.put_u8(code);
    }
    buf.put_slice(param);
    buf.put_slice(data);
    buf.freeze()
}

/// Classic any-pointer item addressing `count` words at DB `db`, byte 0.
pub fn classic_word_item(db: u16, count: u16) -> Vec<u8> {
    let mut item = vec![0x12, 0x0a, 0x10, 0x04];
    item.extend_from_slice(&count.to_be_bytes());
    item.extend_from_slice(&db.to_be_bytes());
    item.push(0x84); // DB area
    item.extend_from_slice(&[0x00, 0x00, 0x00]);
    item
}
