//! BCD timestamp forms used by time functions, diagnostic messages and
//! alarm objects.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};
use crate::tables;

/// Decoded wall-clock value plus the weekday nibble the wire carries
/// alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct S7Timestamp {
    pub datetime: NaiveDateTime,
    pub weekday: u8,
}

impl S7Timestamp {
    pub fn weekday_name(&self) -> String {
        tables::describe8(tables::weekday_name(self.weekday), self.weekday)
    }
}

fn bcd(byte: u8) -> Result<u8> {
    let hi = byte >> 4;
    let lo = byte & 0x0f;
    if hi > 9 || lo > 9 {
        return Err(Error::MalformedTimestamp);
    }
    Ok(hi * 10 + lo)
}

/// Two-digit BCD year to full year: 00..=89 map to 2000..=2089, 90..=99 to
/// 1990..=1999.
fn full_year(year2: u8) -> u16 {
    if year2 < 90 {
        2000 + u16::from(year2)
    } else {
        1900 + u16::from(year2)
    }
}

fn compose(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millis: u16,
) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .and_then(|d| {
            d.and_hms_milli_opt(
                u32::from(hour),
                u32::from(minute),
                u32::from(second),
                u32::from(millis),
            )
        })
        .ok_or(Error::MalformedTimestamp)
}

/// 8-byte DATE_AND_TIME: year, month, day, hour, minute, second, then the
/// millisecond hundreds/tens digits and a final byte packing the millisecond
/// units digit (high nibble) with the weekday (low nibble).
pub fn decode_dt8(buf: &[u8]) -> Result<S7Timestamp> {
    if buf.len() < 8 {
        return Err(Error::MalformedTimestamp);
    }
    let year = full_year(bcd(buf[0])?);
    let month = bcd(buf[1])?;
    let day = bcd(buf[2])?;
    let hour = bcd(buf[3])?;
    let minute = bcd(buf[4])?;
    let second = bcd(buf[5])?;
    let ms_units = buf[7] >> 4;
    if ms_units > 9 {
        return Err(Error::MalformedTimestamp);
    }
    let millis = u16::from(bcd(buf[6])?) * 10 + u16::from(ms_units);
    let weekday = buf[7] & 0x0f;
    Ok(S7Timestamp {
        datetime: compose(year, month, day, hour, minute, second, millis)?,
        weekday,
    })
}

/// 10-byte form used by the clock services and diagnostic messages: a
/// reserved byte and an ignored leading year byte precede the 8-byte layout.
pub fn decode_dt10(buf: &[u8]) -> Result<S7Timestamp> {
    if buf.len() < 10 {
        return Err(Error::MalformedTimestamp);
    }
    decode_dt8(&buf[2..10])
}
