use crate::config::emitter::EmitterConfig;
use crate::config::endpoint::TopicBinding;
use crate::error::error::{TablecastError, TablecastResult};
use crate::sink::sink::RecordSink;
use crate::source::source::RowSource;
use log::{debug, info, warn};
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

pub struct Emitter<S, K> {
    config: EmitterConfig,
    bindings: Vec<TopicBinding>,
    source: S,
    sink: K,
}

impl<S, K> Emitter<S, K>
where
    S: RowSource,
    K: RecordSink,
{
    pub fn new(config: EmitterConfig, bindings: Vec<TopicBinding>, source: S, sink: K) -> Self {
        Emitter {
            config,
            bindings,
            source,
            sink,
        }
    }

    /// Runs the bounded sampling loop: per iteration, one random offset is
    /// drawn and reused for every binding, in binding order.
    pub async fn run(&self) -> TablecastResult<()> {
        for iteration in 0..self.config.iterations {
            debug!("iteration {}", iteration);
            self.pause().await;

            let offset = self.draw_offset();
            for binding in &self.bindings {
                self.emit(binding, offset).await?;
            }
        }
        Ok(())
    }

    async fn emit(&self, binding: &TopicBinding, offset: u64) -> TablecastResult<()> {
        let row = self.source.fetch_row(&binding.table, offset).await?;
        let record = match row {
            Some(record) => record,
            None => {
                debug!("no row in {} at offset {}", binding.table, offset);
                return Ok(());
            }
        };

        let record = record.normalize_timestamps();
        match self.sink.publish(&binding.topic, &record).await {
            Ok(()) => info!("data successfully sent to topic {}", binding.topic),
            Err(TablecastError::PublishFailure(failure)) => {
                warn!(
                    "failed to send data to topic {}: {} - {}",
                    failure.topic, failure.status, failure.body
                );
            }
            Err(other) => return Err(other),
        }
        Ok(())
    }

    fn draw_offset(&self) -> u64 {
        if self.config.max_offset == 0 {
            return 0;
        }
        rand::rng().random_range(0..self.config.max_offset)
    }

    async fn pause(&self) {
        if self.config.sleep_max_secs == 0 {
            return;
        }
        let secs = rand::rng().random_range(0..self.config.sleep_max_secs);
        if secs > 0 {
            sleep(Duration::from_secs(secs)).await;
        }
    }
}
