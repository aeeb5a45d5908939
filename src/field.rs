use chrono::NaiveDateTime;
use serde::Serialize;

/// A single decoded wire field: stable name, typed value, human-readable
/// description and the number of buffer bytes it accounts for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub value: FieldValue,
    pub description: String,
    /// Bytes of the input this field consumed. Zero for synthesized fields
    /// that annotate without covering wire bytes.
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    Str(String),
    Bytes(Vec<u8>),
    Time(NaiveDateTime),
}

impl FieldValue {
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            FieldValue::U8(v) => Some(u32::from(*v)),
            FieldValue::U16(v) => Some(u32::from(*v)),
            FieldValue::U32(v) => Some(*v),
            _ => None,
        }
    }
}

/// Ordered, append-only accumulator the decoders write into. The sum of the
/// field lengths equals the bytes dissected so far; for a fully decoded
/// packet it equals the buffer length.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldStream {
    fields: Vec<Field>,
}

impl FieldStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        name: &'static str,
        value: FieldValue,
        description: impl Into<String>,
        len: usize,
    ) {
        self.fields.push(Field {
            name,
            value,
            description: description.into(),
            len,
        });
    }

    pub fn u8(&mut self, name: &'static str, v: u8, description: impl Into<String>) {
        self.push(name, FieldValue::U8(v), description, 1);
    }

    pub fn u16(&mut self, name: &'static str, v: u16, description: impl Into<String>) {
        self.push(name, FieldValue::U16(v), description, 2);
    }

    pub fn u32(&mut self, name: &'static str, v: u32, description: impl Into<String>) {
        self.push(name, FieldValue::U32(v), description, 4);
    }

    /// A string field covering `len` wire bytes (ASCII/Latin-1 regions).
    pub fn str(
        &mut self,
        name: &'static str,
        v: impl Into<String>,
        description: impl Into<String>,
        len: usize,
    ) {
        self.push(name, FieldValue::Str(v.into()), description, len);
    }

    pub fn bytes(&mut self, name: &'static str, v: &[u8], description: impl Into<String>) {
        self.push(name, FieldValue::Bytes(v.to_vec()), description, v.len());
    }

    pub fn time(
        &mut self,
        name: &'static str,
        v: NaiveDateTime,
        description: impl Into<String>,
        len: usize,
    ) {
        self.push(name, FieldValue::Time(v), description, len);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total wire bytes accounted for by the accumulated fields.
    pub fn consumed(&self) -> usize {
        self.fields.iter().map(|f| f.len).sum()
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldStream {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumed_sums_field_lengths() {
        let mut fs = FieldStream::new();
        fs.u8("a", 1, "first");
        fs.u16("b", 2, "second");
        fs.bytes("c", &[1, 2, 3], "third");
        assert_eq!(fs.consumed(), 6);
        assert_eq!(fs.len(), 3);
    }

    #[test]
    fn lookup_by_name_finds_first_occurrence() {
        let mut fs = FieldStream::new();
        fs.u8("function", 4, "Read variable");
        fs.u8("function", 5, "Write variable");
        let f = fs.get("function").unwrap();
        assert_eq!(f.value, FieldValue::U8(4));
        assert_eq!(f.description, "Read variable");
    }

    #[test]
    fn serializes_to_json() {
        let mut fs = FieldStream::new();
        fs.u16("pdu_ref", 0x1234, "PDU reference");
        let json = serde_json::to_string(&fs).unwrap();
        assert!(json.contains("pdu_ref"));
        assert!(json.contains("4660"));
    }

    #[test]
    fn time_value_serializes_to_json() {
        use chrono::NaiveDate;

        let dt = NaiveDate::from_ymd_opt(2013, 6, 21)
            .unwrap()
            .and_hms_opt(10, 20, 30)
            .unwrap();
        let mut fs = FieldStream::new();
        fs.time("timestamp", dt, "clock value", 10);
        let json = serde_json::to_string(&fs).unwrap();
        assert!(json.contains("2013-06-21"));
    }
}
