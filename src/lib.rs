//! Dissector for the S7 communication protocol spoken by Siemens S7 PLCs.
//!
//! A PDU is decoded in two layers: a fixed header whose failures reject the
//! packet outright, and parameter/data blocks whose failures degrade into a
//! [`Packet::block_error`] while every field decoded up to that point is
//! kept. All decoded fields land, in wire order, in an ordered
//! [`FieldStream`]; for a fully decoded packet the field lengths sum to the
//! buffer length.
//!
//! ```
//! use bytes::Bytes;
//! use s7comm_dissect::{DissectOptions, Packet};
//!
//! let raw = Bytes::from_static(&[
//!     0x32, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x08, 0x00, 0x00,
//!     0xf0, 0x00, 0x00, 0x01, 0x00, 0x01, 0x03, 0xc0,
//! ]);
//! let packet = Packet::dissect(raw, &DissectOptions::default()).unwrap();
//! assert_eq!(packet.fields.get("pdu_length").unwrap().description, "Negotiated PDU length");
//! ```

pub mod data;
pub mod error;
pub mod field;
pub mod header;
pub mod item;
pub mod packet;
pub mod param;
pub mod tables;
pub mod timestamp;
pub mod types;
pub mod userdata;

mod wire;

pub use data::DataItem;
pub use error::{Error, Result};
pub use field::{Field, FieldStream, FieldValue};
pub use header::Header;
pub use item::{AddressVariant, Item};
pub use packet::{DissectOptions, Packet};
pub use param::ParamBlock;
pub use types::{Area, Function, Rosctr, SyntaxId};
pub use userdata::{UserData, UserDataParam, UserDataPayload};
