//! Push request options and results.

use serde::{Deserialize, Serialize};

use super::primitives::{epoch_seconds, DeployStatus, DeviceType, MsgType};
use crate::client::ParameterSet;

/// Optional fields of a push request.
///
/// Not every field is accepted by every push operation: `send_time` only
/// applies to broadcast and tag pushes, `topic_id` only to batch pushes and
/// `deploy_status` to everything except batch pushes. Setting a field the
/// operation does not accept fails the call with
/// [`Error::InvalidParameter`](crate::Error::InvalidParameter).
///
/// # Example
///
/// ```
/// use baidupush_rs::models::{MsgType, PushOptions};
///
/// let options = PushOptions::new()
///     .msg_type(MsgType::Notification)
///     .msg_expires(3600);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOptions {
    /// Message or notification
    pub msg_type: Option<MsgType>,
    /// Unix time after which the service rejects this request
    pub expires: Option<i64>,
    /// Seconds the message stays deliverable to offline devices
    pub msg_expires: Option<u32>,
    /// iOS certificate environment
    pub deploy_status: Option<DeployStatus>,
    /// Unix time to deliver at, creating a timer task
    pub send_time: Option<i64>,
    /// Topic grouping for batch pushes
    pub topic_id: Option<String>,
    /// Platform override for this request
    pub device_type: Option<DeviceType>,
}

impl PushOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message type.
    pub fn msg_type(mut self, msg_type: MsgType) -> Self {
        self.msg_type = Some(msg_type);
        self
    }

    /// Set the request expiry time.
    pub fn expires(mut self, unix_seconds: i64) -> Self {
        self.expires = Some(unix_seconds);
        self
    }

    /// Set how long the message stays deliverable.
    pub fn msg_expires(mut self, seconds: u32) -> Self {
        self.msg_expires = Some(seconds);
        self
    }

    /// Set the iOS deploy status.
    pub fn deploy_status(mut self, status: DeployStatus) -> Self {
        self.deploy_status = Some(status);
        self
    }

    /// Schedule the push for a future time.
    pub fn send_time(mut self, unix_seconds: i64) -> Self {
        self.send_time = Some(unix_seconds);
        self
    }

    /// Group a batch push under a topic.
    pub fn topic_id(mut self, topic_id: impl Into<String>) -> Self {
        self.topic_id = Some(topic_id.into());
        self
    }

    /// Override the channel's device type for this request.
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = Some(device_type);
        self
    }
}

impl From<PushOptions> for ParameterSet {
    fn from(options: PushOptions) -> Self {
        let mut params = ParameterSet::new();
        if let Some(v) = options.msg_type {
            params.set("msg_type", v);
        }
        if let Some(v) = options.expires {
            params.set("expires", v);
        }
        if let Some(v) = options.msg_expires {
            params.set("msg_expires", v);
        }
        if let Some(v) = options.deploy_status {
            params.set("deploy_status", v);
        }
        if let Some(v) = options.send_time {
            params.set("send_time", v);
        }
        if let Some(v) = options.topic_id {
            params.set("topic_id", v);
        }
        if let Some(v) = options.device_type {
            params.set("device_type", v);
        }
        params
    }
}

/// Outcome of a push operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushResult {
    /// Identifier of the pushed message
    pub msg_id: String,
    /// Timer task created by a scheduled push; `None` for immediate pushes
    #[serde(default)]
    pub timer_id: Option<String>,
    /// Unix time the message was (or will be) sent
    #[serde(deserialize_with = "epoch_seconds")]
    pub send_time: i64,
}

impl PushResult {
    /// Returns `true` if the push created a timer task.
    pub fn is_scheduled(&self) -> bool {
        self.timer_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
