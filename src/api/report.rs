//! Delivery report service.

use std::sync::Arc;

use crate::client::{ApiResponse, ChannelInner, Operation, ParameterSet};
use crate::models::{MessageStatus, TimerRecords, TopicRecords};
use crate::Result;

/// Service for querying what happened to sent messages.
///
/// # Example
///
/// ```no_run
/// use baidupush_rs::ParameterSet;
/// use baidupush_rs::models::RecordsQuery;
///
/// # async fn example(channel: baidupush_rs::Channel) -> baidupush_rs::Result<()> {
/// let status = channel.report().msg_status("8412263217423218281", ParameterSet::new()).await?;
/// for record in &status.records {
///     println!("{}: status {} reached {}", record.msg_id, record.status, record.success);
/// }
///
/// let topic = channel
///     .report()
///     .topic_records("topic_batch", RecordsQuery::new().limit(20))
///     .await?;
/// println!("{} pushes under {}", topic.records.len(), topic.topic_id);
/// # Ok(())
/// # }
/// ```
pub struct ReportService {
    inner: Arc<ChannelInner>,
}

impl ReportService {
    pub(crate) fn new(inner: Arc<ChannelInner>) -> Self {
        Self { inner }
    }

    /// Delivery status of a message.
    pub async fn msg_status(
        &self,
        msg_id: &str,
        options: impl Into<ParameterSet>,
    ) -> Result<ApiResponse<MessageStatus>> {
        let mandatory = ParameterSet::new().with("msg_id", msg_id);

        self.inner
            .call(Operation::QueryMsgStatus, mandatory, options.into())
            .await
    }

    /// Delivery records of a timer task.
    pub async fn timer_records(
        &self,
        timer_id: &str,
        query: impl Into<ParameterSet>,
    ) -> Result<ApiResponse<TimerRecords>> {
        let mandatory = ParameterSet::new().with("timer_id", timer_id);

        self.inner
            .call(Operation::QueryTimerRecords, mandatory, query.into())
            .await
    }

    /// Delivery records of a topic.
    pub async fn topic_records(
        &self,
        topic_id: &str,
        query: impl Into<ParameterSet>,
    ) -> Result<ApiResponse<TopicRecords>> {
        let mandatory = ParameterSet::new().with("topic_id", topic_id);

        self.inner
            .call(Operation::QueryTopicRecords, mandatory, query.into())
            .await
    }
}
