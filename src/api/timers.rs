//! Timer task service.

use std::sync::Arc;

use crate::client::{ApiResponse, ChannelInner, Operation, ParameterSet};
use crate::models::TimerTasks;
use crate::Result;

/// Service for scheduled pushes that have not run yet.
///
/// # Example
///
/// ```no_run
/// use baidupush_rs::models::TimerQuery;
///
/// # async fn example(channel: baidupush_rs::Channel) -> baidupush_rs::Result<()> {
/// let pending = channel.timers().list(TimerQuery::new().limit(10)).await?;
/// for task in &pending.tasks {
///     channel.timers().cancel(&task.timer_id).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct TimersService {
    inner: Arc<ChannelInner>,
}

impl TimersService {
    pub(crate) fn new(inner: Arc<ChannelInner>) -> Self {
        Self { inner }
    }

    /// List pending timer tasks.
    pub async fn list(&self, query: impl Into<ParameterSet>) -> Result<ApiResponse<TimerTasks>> {
        self.inner
            .call(Operation::QueryTimerTasks, ParameterSet::new(), query.into())
            .await
    }

    /// Cancel a timer task.
    ///
    /// Fails with server code 41004 if the task is about to run and 41005
    /// if it already ran.
    pub async fn cancel(&self, timer_id: &str) -> Result<ApiResponse<()>> {
        let mandatory = ParameterSet::new().with("timer_id", timer_id);

        self.inner
            .call_ack(Operation::CancelTimerTask, mandatory, ParameterSet::new())
            .await
    }
}
