//! HTTP boundary to the profile backend.
//!
//! [`StatusClient`] is the seam the app layer is generic over. The production
//! implementation, [`HttpStatusClient`], speaks form-encoded requests and JSON
//! responses; tests use `FakeStatusClient` from `test_utils`.

use std::collections::BTreeMap;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use pdeck_core::prelude::*;

use crate::protocol::{
    parse_inject_response, parse_start_response, parse_status_map, parse_status_response,
    InjectOptions, InjectStats, StartAck, StatusLookup, StatusSnapshot,
};

/// Characters escaped in a profile id path segment. Leaves the RFC 3986
/// unreserved set alone, like `encodeURIComponent`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Longest response body excerpt carried in a transport error
const BODY_EXCERPT_LEN: usize = 200;

/// Operations against the profile backend.
///
/// None of these mutate panel state. A failure is either
/// [`Error::Remote`] (the backend said `ok=false`) or [`Error::Transport`].
#[trait_variant::make(StatusClient: Send)]
pub trait LocalStatusClient {
    /// `POST /start_profile`
    async fn start(&self, profile_id: &str) -> Result<StartAck>;

    /// `POST /inject`
    async fn inject(&self, profile_id: &str, options: &InjectOptions) -> Result<InjectStats>;

    /// `GET /status/{profile_id}`. An unknown profile is `Ok(NotFound)`.
    async fn fetch_status(&self, profile_id: &str) -> Result<StatusLookup>;

    /// `GET /status`: every profile the backend tracks
    async fn fetch_all(&self) -> Result<BTreeMap<String, StatusSnapshot>>;
}

/// [`StatusClient`] over HTTP via reqwest
#[derive(Debug, Clone)]
pub struct HttpStatusClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpStatusClient {
    /// Create a client rooted at `base_url`.
    ///
    /// `timeout` of `None` keeps the transport default (no overall deadline).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = normalize_base(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::config(format!("Invalid endpoint path '{}': {}", path, e)))
    }

    fn status_url(&self, profile_id: &str) -> Result<Url> {
        let escaped = utf8_percent_encode(profile_id, PATH_SEGMENT).to_string();
        self.endpoint(&format!("status/{}", escaped))
    }

    async fn read_body(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(Error::transport(format!(
                "HTTP {}: {}",
                status,
                excerpt(&body)
            )));
        }
        Ok(body)
    }
}

impl StatusClient for HttpStatusClient {
    async fn start(&self, profile_id: &str) -> Result<StartAck> {
        let url = self.endpoint("start_profile")?;
        debug!("POST {} profile_id={}", url, profile_id);

        let body = self
            .read_body(self.http.post(url).form(&[("profile_id", profile_id)]))
            .await?;
        parse_start_response(&body)
    }

    async fn inject(&self, profile_id: &str, options: &InjectOptions) -> Result<InjectStats> {
        let url = self.endpoint("inject")?;
        debug!(
            "POST {} profile_id={} script_url={:?} inline_js={}",
            url,
            profile_id,
            options.script_url,
            options.inline_js.is_some()
        );

        let fields = options.form_fields(profile_id);
        let body = self.read_body(self.http.post(url).form(&fields)).await?;
        parse_inject_response(&body)
    }

    async fn fetch_status(&self, profile_id: &str) -> Result<StatusLookup> {
        let url = self.status_url(profile_id)?;
        trace!("GET {}", url);

        let body = self.read_body(self.http.get(url)).await?;
        parse_status_response(&body)
    }

    async fn fetch_all(&self) -> Result<BTreeMap<String, StatusSnapshot>> {
        let url = self.endpoint("status")?;
        debug!("GET {}", url);

        let body = self.read_body(self.http.get(url)).await?;
        parse_status_map(&body)
    }
}

/// Parse the base URL and make sure relative joins append to its path.
fn normalize_base(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    let mut base = Url::parse(trimmed)
        .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", trimmed, e)))?;

    if base.cannot_be_a_base() {
        return Err(Error::config(format!("Invalid base URL '{}'", trimmed)));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::transport(err.to_string())
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
