//! Jenkins API client and methods

use std::time::Duration;

use butler_core::error::{
    Error,
    Result,
};
use butler_core::types::{
    JobParameter,
    TriggeredBuild,
};
use butler_core::ServerConfig;
use reqwest::header::{
    HeaderMap,
    HeaderValue,
    AUTHORIZATION,
};
use reqwest::StatusCode;
use tracing::debug;

use crate::{
    mapper,
    path,
    types,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Jenkins API client.
///
/// Owns the connection configuration only (base URL, credentials baked into
/// a default header); no request-scoped state, so one instance is built by
/// the command layer and shared for the whole process.
pub struct JenkinsClient {
    http: reqwest::Client,
    base_url: String,
}

impl JenkinsClient {
    /// Builds a client from a server profile: basic-auth default header,
    /// rustls TLS, explicit request and connect timeouts.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let auth_value = format!("{}:{}", config.username, config.token);
        let auth_header = format!(
            "Basic {}",
            base64::Engine::encode(
                &base64::engine::general_purpose::STANDARD,
                auth_value.as_bytes()
            )
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_header)
                .map_err(|e| Error::Configuration(format!("invalid credentials: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, request_path: &str) -> String {
        format!("{}{request_path}", self.base_url)
    }

    /// Lists the items directly under `full_name` ("" lists the root).
    /// A listing without a `jobs` array reads as empty.
    pub async fn list_items(&self, full_name: &str) -> Result<Vec<types::ItemSummary>> {
        let request_path = path::listing_path(full_name);
        debug!(path = %request_path, "listing items");

        let response = self
            .http
            .get(self.url(&request_path))
            .send()
            .await
            .map_err(|e| Error::Transport {
                path: request_path.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport {
                path: request_path,
                message: format!("HTTP {status}"),
            });
        }

        let listing: types::ListingResponse =
            response.json().await.map_err(|e| Error::Transport {
                path: request_path,
                message: format!("failed to parse listing: {e}"),
            })?;

        Ok(listing.jobs)
    }

    /// Fetches the full detail of the job (or folder) at `full_name`.
    pub async fn job_detail(&self, full_name: &str) -> Result<types::JobDetail> {
        let request_path = path::detail_path(full_name);
        debug!(path = %request_path, "fetching job detail");

        let response = self
            .http
            .get(self.url(&request_path))
            .send()
            .await
            .map_err(|e| Error::Resolution {
                full_name: full_name.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Resolution {
                full_name: full_name.to_string(),
                message: format!("HTTP {status}"),
            });
        }

        response.json().await.map_err(|e| Error::Resolution {
            full_name: full_name.to_string(),
            message: format!("failed to parse job detail: {e}"),
        })
    }

    /// Fetches the detail of a job's most recent build.
    ///
    /// Callers pre-check `buildable` and `last_build` on the job detail; a
    /// job without build history answers 404 here and surfaces as a
    /// resolution failure.
    pub async fn last_build(&self, full_name: &str) -> Result<types::BuildDetail> {
        let request_path = path::last_build_path(full_name);
        debug!(path = %request_path, "fetching last build");

        let response = self
            .http
            .get(self.url(&request_path))
            .send()
            .await
            .map_err(|e| Error::Resolution {
                full_name: full_name.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Resolution {
                full_name: full_name.to_string(),
                message: format!("HTTP {status}"),
            });
        }

        response.json().await.map_err(|e| Error::Resolution {
            full_name: full_name.to_string(),
            message: format!("failed to parse build detail: {e}"),
        })
    }

    /// Normalized parameter descriptors of the job at `full_name`, in
    /// server-declared order. Empty when the job declares none.
    pub async fn job_parameters(&self, full_name: &str) -> Result<Vec<JobParameter>> {
        let detail = self.job_detail(full_name).await?;
        Ok(mapper::parameters_from_detail(detail))
    }

    /// Submits a build. Non-empty `params` go form-encoded to
    /// `buildWithParameters`; an empty list POSTs to the plain `build`
    /// endpoint with no body.
    ///
    /// Not idempotent: every call enqueues a new build.
    pub async fn trigger_build(
        &self, full_name: &str, params: &[(String, String)],
    ) -> Result<TriggeredBuild> {
        let request_path = path::trigger_path(full_name, !params.is_empty());
        debug!(path = %request_path, params = params.len(), "triggering build");

        let request = self.http.post(self.url(&request_path));
        let request = if params.is_empty() {
            request
        } else {
            request.form(params)
        };

        let response = request.send().await.map_err(|e| Error::Trigger {
            full_name: full_name.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if status.is_success() || status == StatusCode::CREATED {
            // HeaderMap lookups are case-insensitive, so this covers both
            // `Location` and `location`. Jenkins omits the header on some
            // configurations; an empty queue URL is not a failure.
            let queue_url = response
                .headers()
                .get("Location")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();

            return Ok(TriggeredBuild {
                queue_url,
                message: format!("Build triggered for {full_name}"),
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Trigger {
            full_name: full_name.to_string(),
            message: format!("HTTP {status}: {}", error_preview(&body)),
        })
    }

    /// Raw console output of one build. `build_number` must be concrete;
    /// resolving "latest" is the caller's job.
    pub async fn console_text(&self, full_name: &str, build_number: i64) -> Result<String> {
        let request_path = path::console_text_path(full_name, build_number);
        debug!(path = %request_path, "fetching console text");

        let response = self
            .http
            .get(self.url(&request_path))
            .send()
            .await
            .map_err(|e| Error::LogFetch {
                full_name: full_name.to_string(),
                build: build_number.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::LogFetch {
                full_name: full_name.to_string(),
                build: build_number.to_string(),
                message: format!("HTTP {status}"),
            });
        }

        response.text().await.map_err(|e| Error::LogFetch {
            full_name: full_name.to_string(),
            build: build_number.to_string(),
            message: e.to_string(),
        })
    }
}

/// Servers answer trigger failures with HTML error pages; keep messages
/// short and drop markup.
fn error_preview(body: &str) -> String {
    if body.contains("<!DOCTYPE html>") || body.contains("<html") {
        return "server returned an HTML error page".to_string();
    }

    const MAX_PREVIEW: usize = 300;
    if body.len() > MAX_PREVIEW {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < MAX_PREVIEW)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
