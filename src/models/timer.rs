//! Timer task models.

use serde::{Deserialize, Serialize};

use super::primitives::{epoch_seconds, DeviceType, MsgType};
use crate::client::ParameterSet;

/// A scheduled push that has not run yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerResult {
    /// Timer task identifier
    pub timer_id: String,
    /// Message payload that will be pushed
    pub msg: String,
    /// Unix time the task will run
    #[serde(deserialize_with = "epoch_seconds")]
    pub send_time: i64,
    /// Raw message type code
    pub msg_type: i64,
    /// Targeting range of the push
    pub range_type: i64,
}

impl TimerResult {
    /// Message type, if the code is one this crate knows.
    pub fn message_type(&self) -> Option<MsgType> {
        MsgType::from_code(self.msg_type)
    }
}

/// Result of a timer task listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerTasks {
    /// Number of pending timer tasks
    pub total_num: u64,
    /// The tasks on this page
    #[serde(rename = "result", default)]
    pub tasks: Vec<TimerResult>,
}

/// Filter and paging options for listing timer tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerQuery {
    /// Only this timer task
    pub timer_id: Option<String>,
    /// Offset of the first task
    pub start: Option<u32>,
    /// Maximum number of tasks
    pub limit: Option<u32>,
    /// Unix time after which the service rejects this request
    pub expires: Option<i64>,
    /// Platform override for this request
    pub device_type: Option<DeviceType>,
}

impl TimerQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return the given timer task.
    pub fn timer_id(mut self, timer_id: impl Into<String>) -> Self {
        self.timer_id = Some(timer_id.into());
        self
    }

    /// Set the offset of the first task.
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the maximum number of tasks.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the request expiry time.
    pub fn expires(mut self, unix_seconds: i64) -> Self {
        self.expires = Some(unix_seconds);
        self
    }

    /// Override the channel's device type for this request.
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = Some(device_type);
        self
    }
}

impl From<TimerQuery> for ParameterSet {
    fn from(query: TimerQuery) -> Self {
        let mut params = ParameterSet::new();
        if let Some(v) = query.timer_id {
            params.set("timer_id", v);
        }
        if let Some(v) = query.start {
            params.set("start", v);
        }
        if let Some(v) = query.limit {
            params.set("limit", v);
        }
        if let Some(v) = query.expires {
            params.set("expires", v);
        }
        if let Some(v) = query.device_type {
            params.set("device_type", v);
        }
        params
    }
}
