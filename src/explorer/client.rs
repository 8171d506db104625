// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for Etherscan-compatible account endpoints

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tower::{Layer, Service};
use tracing::debug;
use url::Url;

use super::envelope::Envelope;
use crate::{
    config::{ApiKey, LedgerConfig},
    errors::{ConfigError, FetchError},
    pipeline::TransactionSource,
    transport::{MinDelayLayer, MinDelayService},
    types::raw::{RawNativeTransfer, RawTokenTransfer, TransferKind},
};

/// One explorer call
#[derive(Debug, Clone)]
pub struct ExplorerRequest {
    pub kind: TransferKind,
    pub url: Url,
}

/// Tower service performing a single GET and decoding the envelope
#[derive(Debug, Clone)]
pub struct HttpService {
    http: reqwest::Client,
}

impl Service<ExplorerRequest> for HttpService {
    type Response = Envelope;
    type Error = FetchError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: ExplorerRequest) -> Self::Future {
        let http = self.http.clone();

        Box::pin(async move {
            let action = request.kind.explorer_action();

            let response = http
                .get(request.url)
                .send()
                .await
                .map_err(|source| FetchError::Transport {
                    action: action.to_string(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    action: action.to_string(),
                    status: status.as_u16(),
                });
            }

            response
                .json::<Envelope>()
                .await
                .map_err(|source| FetchError::Decode {
                    action: action.to_string(),
                    source,
                })
        })
    }
}

/// Transaction source backed by an explorer's `account` module
///
/// Calls are paced by a [`MinDelayLayer`] using the configured delay, so one
/// client can be handed to the pipeline without further throttling.
///
/// # Example
///
/// ```rust,no_run
/// use semioledger::{ExplorerClient, LedgerConfig, LedgerPipeline, Normalizer};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LedgerConfig::new("my-api-key");
/// let client = ExplorerClient::new(&config)?;
/// let pipeline = LedgerPipeline::new(client, Normalizer::new(&config.base_explorer_url));
/// let ledger = pipeline
///     .build(["0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"])
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    endpoint: Url,
    api_key: ApiKey,
    chain_id: u64,
    page_size: u32,
    service: MinDelayService<HttpService>,
}

impl ExplorerClient {
    /// Create a client from configuration
    pub fn new(config: &LedgerConfig) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.api_url).map_err(|source| ConfigError::InvalidUrl {
            url: config.api_url.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        let service = MinDelayLayer::new(config.rate_limit_delay).layer(HttpService { http });

        Ok(Self {
            endpoint,
            api_key: config.api_key.clone(),
            chain_id: config.chain_id(),
            page_size: config.page_size,
            service,
        })
    }

    /// Full request URL listing one transfer class for an account
    pub fn request_url(&self, kind: TransferKind, address: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("chainid", &self.chain_id.to_string())
            .append_pair("module", "account")
            .append_pair("action", kind.explorer_action())
            .append_pair("address", address)
            .append_pair("startblock", "0")
            .append_pair("endblock", "99999999")
            .append_pair("page", "1")
            .append_pair("offset", &self.page_size.to_string())
            .append_pair("sort", "desc")
            .append_pair("apikey", self.api_key.expose());
        url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        kind: TransferKind,
        address: &str,
    ) -> Result<Vec<T>, FetchError> {
        let request = ExplorerRequest {
            kind,
            url: self.request_url(kind, address),
        };

        debug!(action = kind.explorer_action(), address = %address, "Explorer request");

        let mut service = self.service.clone();
        std::future::poll_fn(|cx| Service::<ExplorerRequest>::poll_ready(&mut service, cx))
            .await?;
        let envelope = service.call(request).await?;

        debug!(
            action = kind.explorer_action(),
            status = %envelope.status,
            message = %envelope.message,
            "Explorer response"
        );

        envelope.into_records(kind)
    }
}

#[async_trait]
impl TransactionSource for ExplorerClient {
    async fn fetch_native(&self, address: &str) -> Result<Vec<RawNativeTransfer>, FetchError> {
        self.fetch(TransferKind::Native, address).await
    }

    async fn fetch_token(&self, address: &str) -> Result<Vec<RawTokenTransfer>, FetchError> {
        self.fetch(TransferKind::Token, address).await
    }
}
