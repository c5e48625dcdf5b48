// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use repboard_app::Representative;

/// Blocking client for the dashboard API: the roster endpoint and the
/// question endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("api.base_url must not be empty");
        }
        Url::parse(&base_url).with_context(|| format!("invalid api.base_url {base_url:?}"))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches the full roster. An absent `salesReps` field decodes as
    /// an empty roster rather than an error.
    pub fn fetch_sales_reps(&self) -> Result<Vec<Representative>> {
        let response = self
            .http
            .get(format!("{}/api/sales-reps", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: SalesRepsResponse = response.json().context("decode sales rep payload")?;
        Ok(parsed.sales_reps)
    }

    /// Sends one question to the answering service and returns its
    /// answer verbatim.
    pub fn ask(&self, question: &str) -> Result<String> {
        let request = AskRequest { question };
        let response = self
            .http
            .post(format!("{}/api/ai", self.base_url))
            .json(&request)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: AskResponse = response.json().context("decode answer payload")?;
        Ok(parsed.answer)
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- is the dashboard API running? ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<DetailEnvelope>(body)
        && let Some(detail) = parsed.detail
        && !detail.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), detail);
    }

    if body.len() < 100 && !body.contains('{') {
        return anyhow!("server error ({}): {}", status.as_u16(), body);
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct SalesRepsResponse {
    #[serde(default, rename = "salesReps")]
    sales_reps: Vec<Representative>,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    detail: Option<String>,
}
