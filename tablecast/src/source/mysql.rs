use crate::config::database::DatabaseConfig;
use crate::error::error::TablecastResult;
use crate::record::record::{FieldValue, RowRecord};
use crate::source::source::RowSource;
use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use mysql_async::consts::ColumnType;
use mysql_async::prelude::Queryable;
use mysql_async::{Opts, Pool, Row, Value};
use std::time::Duration;
use tokio::time::timeout;

pub struct MySQLRowSource {
    pool: Pool,
    query_timeout: Duration,
}

impl MySQLRowSource {
    /// Builds the pool and verifies the database is reachable before the
    /// caller starts its run.
    pub async fn connect(
        config: &DatabaseConfig,
        query_timeout: Duration,
    ) -> TablecastResult<Self> {
        let opts = Opts::from_url(&config.connection_url()).map_err(mysql_async::Error::from)?;
        let pool = Pool::new(opts);

        let mut conn = timeout(query_timeout, pool.get_conn()).await??;
        timeout(query_timeout, conn.ping()).await??;
        drop(conn);
        debug!("connected to {}", config.sanitized_url());

        Ok(MySQLRowSource {
            pool,
            query_timeout,
        })
    }
}

#[async_trait]
impl RowSource for MySQLRowSource {
    async fn fetch_row(&self, table: &str, offset: u64) -> TablecastResult<Option<RowRecord>> {
        let mut conn = timeout(self.query_timeout, self.pool.get_conn()).await??;

        // Table names come from the fixed binding list; the offset is bound
        // as a statement parameter.
        let query = format!("SELECT * FROM {} LIMIT ?, 1", table);
        let row = timeout(
            self.query_timeout,
            conn.exec_first::<Row, _, _>(query.as_str(), (offset,)),
        )
        .await??;

        Ok(row.map(|row| row_to_record(&row)))
    }
}

fn row_to_record(row: &Row) -> RowRecord {
    let mut record = RowRecord::new();
    for (i, column) in row.columns_ref().iter().enumerate() {
        let value = row.as_ref(i).unwrap_or(&Value::NULL);
        record.push(
            column.name_str().to_string(),
            to_field_value(value, column.column_type()),
        );
    }
    record
}

fn to_field_value(value: &Value, column_type: ColumnType) -> FieldValue {
    match value {
        Value::NULL => FieldValue::Null,
        Value::Int(v) => FieldValue::Int(*v),
        Value::UInt(v) => FieldValue::UInt(*v),
        Value::Float(v) => FieldValue::Float(f64::from(*v)),
        Value::Double(v) => FieldValue::Float(*v),
        Value::Bytes(bytes) => FieldValue::String(String::from_utf8_lossy(bytes).into_owned()),
        Value::Date(year, month, day, hour, minute, second, micros) => match column_type {
            ColumnType::MYSQL_TYPE_DATE => {
                FieldValue::String(format!("{:04}-{:02}-{:02}", year, month, day))
            }
            _ => match NaiveDate::from_ymd_opt(i32::from(*year), u32::from(*month), u32::from(*day))
                .and_then(|date| {
                    date.and_hms_micro_opt(
                        u32::from(*hour),
                        u32::from(*minute),
                        u32::from(*second),
                        *micros,
                    )
                }) {
                Some(datetime) => FieldValue::DateTime(datetime),
                None => FieldValue::String(format!(
                    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                    year, month, day, hour, minute, second
                )),
            },
        },
        Value::Time(negative, days, hours, minutes, seconds, micros) => {
            let total_hours = u32::from(*hours) + days * 24;
            let sign = if *negative { "-" } else { "" };
            let mut repr = format!("{}{:02}:{:02}:{:02}", sign, total_hours, minutes, seconds);
            if *micros > 0 {
                repr.push_str(&format!(".{:06}", micros));
            }
            FieldValue::String(repr)
        }
    }
}
