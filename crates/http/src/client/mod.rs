//! Budget Buddy HTTP client

pub mod auth;
pub mod budget;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod profile;

pub use config::ClientConfig;
pub use error::{ClientError, FailureKind};
pub use interceptor::{Outcome, Pipeline, RequestInterceptor, ResponseInterceptor};

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Request, RequestBuilder, Response};
use std::rc::Rc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Budget API client
///
/// Every request goes through the same steps: build, request interceptors,
/// transmission, status classification, response interceptors. Interceptors
/// run synchronously inside that sequence, so for one request the outbound
/// chain always precedes transmission, which precedes the inbound chain.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    pipeline: Pipeline,
}

impl ApiClient {
    /// Create a new client without interceptors
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a request builder with the default headers applied
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.config.url(path))
            .headers(self.config.default_headers().clone())
    }

    /// Run a request through the interceptor pipeline and return the raw
    /// response. Any non-2xx status is turned into an error.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let outcome = match self.pipeline.prepare(request.build().map_err(ClientError::from)) {
            Ok(request) => self.transmit(request).await,
            Err(error) => Err(error),
        };
        self.pipeline.complete(outcome)
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Execute a request whose response body is not needed
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.send(request).await.map(|_| ())
    }

    async fn transmit(&self, request: Request) -> Outcome {
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    headers: Vec<(HeaderName, HeaderValue)>,
    pipeline: Pipeline,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    #[cfg(not(target_arch = "wasm32"))]
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Add a default header sent with every request
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Set the request timeout. Browsers apply their own.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent. Browsers do not allow overriding it.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Append an interceptor to the request chain
    #[must_use]
    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.pipeline.push_request(Rc::new(interceptor));
        self
    }

    /// Append an interceptor to the response chain
    #[must_use]
    pub fn response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.pipeline.push_response(Rc::new(interceptor));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        let config = self
            .headers
            .into_iter()
            .fold(ClientConfig::new(base_url), |config, (name, value)| {
                config.with_header(name, value)
            });

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(
                self.user_agent
                    .unwrap_or_else(|| concat!("budget-client/", env!("CARGO_PKG_VERSION")).into()),
            );
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder
                .build()
                .map_err(|e| ClientError::Configuration(e.to_string()))?
        };

        #[cfg(target_arch = "wasm32")]
        let client = ClientBuilder::new()
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(ApiClient {
            client,
            config,
            pipeline: self.pipeline,
        })
    }
}
