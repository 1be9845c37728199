//! Delivery report models.

use serde::{Deserialize, Serialize};

use super::primitives::{epoch_seconds, DeviceType};
use crate::client::ParameterSet;

/// Delivery information about one sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResult {
    /// Message identifier
    pub msg_id: String,
    /// Delivery status code
    pub status: i64,
    /// Number of devices the message reached
    #[serde(default)]
    pub success: i64,
    /// Unix time the message was sent
    #[serde(deserialize_with = "epoch_seconds")]
    pub send_time: i64,
}

/// Result of a message status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStatus {
    /// Number of matching messages
    pub total_num: u64,
    /// Per-message delivery information
    #[serde(rename = "result", default)]
    pub records: Vec<MessageResult>,
}

/// Delivery records of one timer task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRecords {
    /// Timer task the records belong to
    pub timer_id: String,
    /// One entry per execution of the task
    #[serde(rename = "result", default)]
    pub records: Vec<MessageResult>,
}

/// Delivery records of one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecords {
    /// Topic the records belong to
    pub topic_id: String,
    /// One entry per push under the topic
    #[serde(rename = "result", default)]
    pub records: Vec<MessageResult>,
}

/// Paging and time-range options for timer and topic record queries.
///
/// # Example
///
/// ```
/// use baidupush_rs::models::RecordsQuery;
///
/// let query = RecordsQuery::new().start(0).limit(50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordsQuery {
    /// Offset of the first record
    pub start: Option<u32>,
    /// Maximum number of records
    pub limit: Option<u32>,
    /// Only records sent at or after this Unix time
    pub range_start: Option<i64>,
    /// Only records sent at or before this Unix time
    pub range_end: Option<i64>,
    /// Unix time after which the service rejects this request
    pub expires: Option<i64>,
    /// Platform override for this request
    pub device_type: Option<DeviceType>,
}

impl RecordsQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset of the first record.
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the maximum number of records.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restrict to records sent within `[from, to]`.
    pub fn range(mut self, from: i64, to: i64) -> Self {
        self.range_start = Some(from);
        self.range_end = Some(to);
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

impl From<RecordsQuery> for ParameterSet {
    fn from(query: RecordsQuery) -> Self {
        let mut params = ParameterSet::new();
        if let Some(v) = query.start {
            params.set("start", v);
        }
        if let Some(v) = query.limit {
            params.set("limit", v);
        }
        if let Some(v) = query.range_start {
            params.set("range_start", v);
        }
        if let Some(v) = query.range_end {
            params.set("range_end", v);
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
