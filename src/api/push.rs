//! Push service.

use std::sync::Arc;

use crate::client::{ApiResponse, ChannelInner, Operation, ParameterSet};
use crate::models::{ChannelId, PushResult};
use crate::Result;

/// Service for sending pushes.
///
/// `msg` is the JSON payload of the message or notification, passed through
/// to the service verbatim.
///
/// # Example
///
/// ```no_run
/// use baidupush_rs::models::{MsgType, PushOptions};
///
/// # async fn example(channel: baidupush_rs::Channel) -> baidupush_rs::Result<()> {
/// // Schedule a notification to every device two minutes from now
/// let send_at = chrono::Utc::now().timestamp() + 120;
/// let receipt = channel
///     .push()
///     .all(
///         r#"{"title":"hello","description":"hello world"}"#,
///         PushOptions::new()
///             .msg_type(MsgType::Notification)
///             .send_time(send_at),
///     )
///     .await?;
///
/// if let Some(timer_id) = &receipt.timer_id {
///     println!("scheduled as timer task {}", timer_id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PushService {
    inner: Arc<ChannelInner>,
}

impl PushService {
    pub(crate) fn new(inner: Arc<ChannelInner>) -> Self {
        Self { inner }
    }

    /// Push a message to one device.
    pub async fn single_device(
        &self,
        channel_id: &ChannelId,
        msg: &str,
        options: impl Into<ParameterSet>,
    ) -> Result<ApiResponse<PushResult>> {
        let mandatory = ParameterSet::new()
            .with("channel_id", channel_id)
            .with("msg", msg);

        self.inner
            .call(Operation::PushSingleDevice, mandatory, options.into())
            .await
    }

    /// Push a message to a list of devices.
    ///
    /// Set [`PushOptions::topic_id`](crate::models::PushOptions::topic_id)
    /// to group the push for later reporting.
    pub async fn batch_devices(
        &self,
        channel_ids: &[ChannelId],
        msg: &str,
        options: impl Into<ParameterSet>,
    ) -> Result<ApiResponse<PushResult>> {
        let mandatory = ParameterSet::new()
            .with("channel_ids", serde_json::to_string(channel_ids)?)
            .with("msg", msg);

        self.inner
            .call(Operation::PushBatchDevices, mandatory, options.into())
            .await
    }

    /// Push a message to every device running the app.
    ///
    /// With a `send_time` option the push becomes a timer task and the
    /// result carries its `timer_id`.
    pub async fn all(
        &self,
        msg: &str,
        options: impl Into<ParameterSet>,
    ) -> Result<ApiResponse<PushResult>> {
        let mandatory = ParameterSet::new().with("msg", msg);

        self.inner
            .call(Operation::PushAllDevices, mandatory, options.into())
            .await
    }

    /// Push a message to the devices bound to `tag`.
    pub async fn tagged(
        &self,
        tag: &str,
        msg: &str,
        options: impl Into<ParameterSet>,
    ) -> Result<ApiResponse<PushResult>> {
        let mandatory = ParameterSet::new()
            .with("type", 1)
            .with("tag", tag)
            .with("msg", msg);

        self.inner
            .call(Operation::PushTaggedDevices, mandatory, options.into())
            .await
    }
}
