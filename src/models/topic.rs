//! Topic models.

use serde::{Deserialize, Serialize};

use super::primitives::{epoch_seconds, DeviceType};
use crate::client::ParameterSet;

/// Summary of one topic of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResult {
    /// Topic identifier
    pub topic_id: String,
    /// Unix time of the first push under the topic
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub first_push_time: i64,
    /// Unix time of the latest push under the topic
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub last_push_time: i64,
    /// Devices targeted across all pushes
    #[serde(default)]
    pub total_push_devs_num: u64,
    /// Devices that acknowledged delivery
    #[serde(default)]
    pub ack_push_num: u64,
}

/// Result of a topic listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicList {
    /// Number of topics of the app
    pub total_num: u64,
    /// The topics on this page
    #[serde(rename = "result", default)]
    pub topics: Vec<TopicResult>,
}

/// Paging options for listing topics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicQuery {
    /// Offset of the first topic
    pub start: Option<u32>,
    /// Maximum number of topics
    pub limit: Option<u32>,
    /// Unix time after which the service rejects this request
    pub expires: Option<i64>,
    /// Platform override for this request
    pub device_type: Option<DeviceType>,
}

impl TopicQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset of the first topic.
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the maximum number of topics.
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

impl From<TopicQuery> for ParameterSet {
    fn from(query: TopicQuery) -> Self {
        let mut params = ParameterSet::new();
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
