//! Channel implementation for the Baidu Push API.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::api::{PushService, ReportService, TagsService, TimersService, TopicsService};
use crate::auth::{sign, Credentials, SIGN_KEY};
use crate::models::DeviceType;
use crate::Result;

use super::config::{ChannelConfig, FORM_CONTENT_TYPE};
use super::envelope::{self, ApiResponse};
use super::operation::{HttpMethod, Operation};
use super::params::ParameterSet;
use super::validator;

/// The main client for interacting with the push service.
///
/// A channel binds one application's credentials to a host and a device
/// platform. API operations are grouped into services returned by
/// accessor methods. Cloning a channel is cheap and clones share state.
///
/// # Example
///
/// ```no_run
/// use baidupush_rs::{Channel, ChannelId, Credentials, DeviceType};
/// use baidupush_rs::models::{MsgType, PushOptions};
///
/// # async fn example() -> baidupush_rs::Result<()> {
/// let channel = Channel::new(
///     Credentials::new("api-key", "secret-key"),
///     DeviceType::Android,
/// )?;
///
/// let receipt = channel
///     .push()
///     .single_device(
///         &ChannelId::new("4215667327923129295"),
///         r#"{"title":"hello","description":"hello world"}"#,
///         PushOptions::new().msg_type(MsgType::Notification),
///     )
///     .await?;
///
/// println!("message {} sent at {}", receipt.msg_id, receipt.send_time);
/// assert_eq!(channel.last_request_id(), Some(receipt.request_id));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Channel {
    pub(crate) inner: Arc<ChannelInner>,
}

pub(crate) struct ChannelInner {
    http: reqwest::Client,
    credentials: Credentials,
    device_type: DeviceType,
    config: ChannelConfig,
    last_request_id: AtomicU64,
}

impl Channel {
    /// Create a channel against the production host.
    pub fn new(credentials: Credentials, device_type: DeviceType) -> Result<Self> {
        Self::with_config(credentials, device_type, ChannelConfig::default())
    }

    /// Create a channel against a specific host.
    pub fn with_host(
        host: impl Into<String>,
        credentials: Credentials,
        device_type: DeviceType,
    ) -> Result<Self> {
        Self::with_config(
            credentials,
            device_type,
            ChannelConfig::default().with_host(host),
        )
    }

    /// Create a channel from `BAIDU_PUSH_API_KEY`, `BAIDU_PUSH_SECRET_KEY`
    /// and the optional `BAIDU_PUSH_HOST`.
    pub fn from_env(device_type: DeviceType) -> Result<Self> {
        Self::with_config(Credentials::from_env()?, device_type, ChannelConfig::from_env())
    }

    /// Create a channel with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlParse`](crate::Error::UrlParse) if the configured
    /// host cannot form a URL, or [`Error::Http`](crate::Error::Http) if the
    /// transport cannot be built.
    pub fn with_config(
        credentials: Credentials,
        device_type: DeviceType,
        config: ChannelConfig,
    ) -> Result<Self> {
        url::Url::parse(&format!("http://{}/", config.host))?;

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(ChannelInner {
                http,
                credentials,
                device_type,
                config,
                last_request_id: AtomicU64::new(0),
            }),
        })
    }

    /// Get the push service.
    pub fn push(&self) -> PushService {
        PushService::new(self.inner.clone())
    }

    /// Get the delivery report service.
    pub fn report(&self) -> ReportService {
        ReportService::new(self.inner.clone())
    }

    /// Get the timer task service.
    pub fn timers(&self) -> TimersService {
        TimersService::new(self.inner.clone())
    }

    /// Get the topic service.
    pub fn topics(&self) -> TopicsService {
        TopicsService::new(self.inner.clone())
    }

    /// Get the tag service.
    pub fn tags(&self) -> TagsService {
        TagsService::new(self.inner.clone())
    }

    /// Request identifier of the most recent successful call made through
    /// this channel or any of its clones.
    ///
    /// Concurrent callers sharing a channel observe whichever call finished
    /// last; use [`ApiResponse::request_id`] to tie an identifier to a call.
    pub fn last_request_id(&self) -> Option<u64> {
        match self.inner.last_request_id.load(Ordering::Acquire) {
            0 => None,
            id => Some(id),
        }
    }

    /// The device platform sent with every request.
    pub fn device_type(&self) -> DeviceType {
        self.inner.device_type
    }

    /// The service host.
    pub fn host(&self) -> &str {
        &self.inner.config.host
    }
}

impl ChannelInner {
    /// Fields every request carries.
    fn common_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("apikey", self.credentials.api_key())
            .with("timestamp", Utc::now().timestamp())
            .with("device_type", self.device_type)
    }

    /// Validate, merge, dispatch and decode one operation.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        mandatory: ParameterSet,
        optionals: ParameterSet,
    ) -> Result<ApiResponse<T>> {
        let body = self.send(operation, mandatory, optionals).await?;
        let response = envelope::decode(&body)?;
        self.record_request_id(response.request_id);
        Ok(response)
    }

    /// Like [`call`](Self::call) for operations with no result payload.
    pub(crate) async fn call_ack(
        &self,
        operation: Operation,
        mandatory: ParameterSet,
        optionals: ParameterSet,
    ) -> Result<ApiResponse<()>> {
        let body = self.send(operation, mandatory, optionals).await?;
        let response = envelope::decode_ack(&body)?;
        self.record_request_id(response.request_id);
        Ok(response)
    }

    async fn send(
        &self,
        operation: Operation,
        mandatory: ParameterSet,
        optionals: ParameterSet,
    ) -> Result<Vec<u8>> {
        validator::validate(operation.name(), &optionals)?;

        let mut params = self.common_params();
        params.absorb(mandatory);
        params.absorb(optionals);

        self.dispatch(operation, params).await
    }

    /// Sign `params` and perform one HTTP round trip.
    ///
    /// The status code is not inspected; the envelope decides success.
    async fn dispatch(&self, operation: Operation, mut params: ParameterSet) -> Result<Vec<u8>> {
        let url = operation.url(&self.config.host);
        let method = operation.http_method();

        let signature = sign(method.as_str(), &url, self.credentials.secret_key(), &params);
        params.set(SIGN_KEY, signature);

        let request = match method {
            HttpMethod::Post => self.http.post(&url).body(params.encode()?),
            HttpMethod::Get => self.http.get(&url).query(&params.pairs()),
        };

        tracing::debug!(
            operation = %operation,
            class = operation.api_class(),
            method = operation.api_method(),
            http_method = %method,
            "sending push service request"
        );

        let response = request
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .send()
            .await?;

        tracing::debug!(
            operation = %operation,
            status = response.status().as_u16(),
            "push service responded"
        );

        Ok(response.bytes().await?.to_vec())
    }

    fn record_request_id(&self, request_id: u64) {
        self.last_request_id.store(request_id, Ordering::Release);
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("host", &self.inner.config.host)
            .field("device_type", &self.inner.device_type)
            .field("credentials", &self.inner.credentials)
            .finish()
    }
}
