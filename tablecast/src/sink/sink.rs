use crate::error::error::TablecastResult;
use crate::record::record::RowRecord;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordSink {
    /// Delivers one record to `topic`. A non-200 response surfaces as a
    /// `PublishFailure`; no retry is attempted.
    async fn publish(&self, topic: &str, record: &RowRecord) -> TablecastResult<()>;
}
