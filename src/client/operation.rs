//! The fixed table of API operations.
//!
//! Each operation has a registry name (used by the parameter validator),
//! an API class and method forming the request path, and an HTTP method.

use std::fmt;

/// HTTP method used by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    Get,
    /// Parameters travel form-encoded in the request body.
    Post,
}

impl HttpMethod {
    /// The method name as it appears on the wire and in the signature.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every operation the push service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Push to one device.
    PushSingleDevice,
    /// Push to a list of devices.
    PushBatchDevices,
    /// Push to every device running the app.
    PushAllDevices,
    /// Push to the devices bound to a tag.
    PushTaggedDevices,
    /// Delivery report for a message.
    QueryMsgStatus,
    /// Delivery records of a timer task.
    QueryTimerRecords,
    /// Delivery records of a topic.
    QueryTopicRecords,
    /// Timer tasks that have not run yet.
    QueryTimerTasks,
    /// Cancel a pending timer task.
    CancelTimerTask,
    /// List the app's tags.
    QueryTagsInfo,
    /// Create an empty tag.
    CreateTag,
    /// Delete a tag.
    DeleteTag,
    /// Bind devices to a tag.
    AddTagDevices,
    /// Unbind devices from a tag.
    DeleteTagDevices,
    /// Count the devices bound to a tag.
    GetTagDeviceNum,
    /// List the app's topics.
    QueryTopicList,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 16] = [
        Operation::PushSingleDevice,
        Operation::PushBatchDevices,
        Operation::PushAllDevices,
        Operation::PushTaggedDevices,
        Operation::QueryMsgStatus,
        Operation::QueryTimerRecords,
        Operation::QueryTopicRecords,
        Operation::QueryTimerTasks,
        Operation::CancelTimerTask,
        Operation::QueryTagsInfo,
        Operation::CreateTag,
        Operation::DeleteTag,
        Operation::AddTagDevices,
        Operation::DeleteTagDevices,
        Operation::GetTagDeviceNum,
        Operation::QueryTopicList,
    ];

    /// Registry name used to look up the optional-key whitelist.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::PushSingleDevice => "PushMsgToSingleDevice",
            Operation::PushBatchDevices => "PushMsgToBatchDevices",
            Operation::PushAllDevices => "PushMsgToAllDevice",
            Operation::PushTaggedDevices => "PushMsgToTag",
            Operation::QueryMsgStatus => "QueryMsgStatus",
            Operation::QueryTimerRecords => "QueryTimerRecords",
            Operation::QueryTopicRecords => "QueryTopicRecords",
            Operation::QueryTimerTasks => "QueryTimerTasks",
            Operation::CancelTimerTask => "CancelTimerTask",
            Operation::QueryTagsInfo => "QueryTagsInfo",
            Operation::CreateTag => "CreateTag",
            Operation::DeleteTag => "DeleteTag",
            Operation::AddTagDevices => "AddTagDevices",
            Operation::DeleteTagDevices => "DeleteTagDevices",
            Operation::GetTagDeviceNum => "GetTagDevicesNumber",
            Operation::QueryTopicList => "QueryTopicList",
        }
    }

    /// API class, the first path segment after the version.
    pub fn api_class(&self) -> &'static str {
        match self {
            Operation::PushSingleDevice
            | Operation::PushBatchDevices
            | Operation::PushAllDevices
            | Operation::PushTaggedDevices => "push",
            Operation::QueryMsgStatus
            | Operation::QueryTimerRecords
            | Operation::QueryTopicRecords => "report",
            Operation::QueryTimerTasks | Operation::CancelTimerTask => "timer",
            Operation::QueryTagsInfo | Operation::CreateTag | Operation::DeleteTag => "app",
            Operation::AddTagDevices
            | Operation::DeleteTagDevices
            | Operation::GetTagDeviceNum => "tag",
            Operation::QueryTopicList => "topic",
        }
    }

    /// API method, the last path segment.
    pub fn api_method(&self) -> &'static str {
        match self {
            Operation::PushSingleDevice => "single_device",
            Operation::PushBatchDevices => "batch_device",
            Operation::PushAllDevices => "all",
            Operation::PushTaggedDevices => "tags",
            Operation::QueryMsgStatus => "query_msg_status",
            Operation::QueryTimerRecords => "query_timer_records",
            Operation::QueryTopicRecords => "query_topic_records",
            Operation::QueryTimerTasks => "query_list",
            Operation::CancelTimerTask => "cancel",
            Operation::QueryTagsInfo => "query_tags",
            Operation::CreateTag => "create_tag",
            Operation::DeleteTag => "del_tag",
            Operation::AddTagDevices => "add_devices",
            Operation::DeleteTagDevices => "del_devices",
            Operation::GetTagDeviceNum => "device_num",
            Operation::QueryTopicList => "query_list",
        }
    }

    /// HTTP method the service expects for this operation.
    pub fn http_method(&self) -> HttpMethod {
        match self {
            Operation::QueryMsgStatus
            | Operation::QueryTimerRecords
            | Operation::QueryTopicRecords
            | Operation::QueryTimerTasks
            | Operation::QueryTagsInfo
            | Operation::GetTagDeviceNum
            | Operation::QueryTopicList => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    /// Full request URL on `host`.
    pub fn url(&self, host: &str) -> String {
        format!(
            "http://{}/rest/3.0/{}/{}",
            host,
            self.api_class(),
            self.api_method()
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
