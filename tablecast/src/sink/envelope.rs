use crate::record::record::RowRecord;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Envelope {
    pub records: Vec<EnvelopeRecord>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EnvelopeRecord {
    pub value: RowRecord,
}

impl Envelope {
    pub fn single(value: RowRecord) -> Self {
        Envelope {
            records: vec![EnvelopeRecord { value }],
        }
    }
}
