use crate::error::error::TablecastResult;
use crate::record::record::RowRecord;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RowSource {
    /// Fetches the single row at `offset` from `table`. An offset past the
    /// end of the table is not an error: it yields `None`.
    async fn fetch_row(&self, table: &str, offset: u64) -> TablecastResult<Option<RowRecord>>;
}
