use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    DateTime(NaiveDateTime),
}

pub fn iso8601(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// One fetched row: column name to value, in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowRecord {
    fields: Vec<(String, FieldValue)>,
}

impl RowRecord {
    pub fn new() -> Self {
        RowRecord { fields: Vec::new() }
    }

    pub fn push<N>(&mut self, column: N, value: FieldValue)
    where
        N: Into<String>,
    {
        self.fields.push((column.into(), value));
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name.as_str() == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    // Rewrites every datetime value into its ISO-8601 string form and
    // leaves everything else untouched. Applying it twice is a no-op.
    pub fn normalize_timestamps(self) -> RowRecord {
        let fields = self
            .fields
            .into_iter()
            .map(|(column, value)| {
                let value = match value {
                    FieldValue::DateTime(dt) => FieldValue::String(iso8601(&dt)),
                    other => other,
                };
                (column, value)
            })
            .collect();
        RowRecord { fields }
    }
}

impl Serialize for RowRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Int(v) => serializer.serialize_i64(*v),
            FieldValue::UInt(v) => serializer.serialize_u64(*v),
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::String(v) => serializer.serialize_str(v),
            FieldValue::DateTime(dt) => serializer.serialize_str(&iso8601(dt)),
        }
    }
}
