use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;

use folio_logging::folio_debug;

use crate::{CardId, FailureKind, ProbeError, ProbeOutput};

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    /// Content-type prefixes counted as a usable preview.
    pub accepted_content_prefixes: Vec<String>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 8 * 1024 * 1024,
            accepted_content_prefixes: vec!["image/".to_string()],
        }
    }
}

/// One image-load attempt against a screenshot-provider endpoint.
///
/// A single failure is terminal for that candidate: no retry, no backoff.
#[async_trait::async_trait]
pub trait ImageProbe: Send + Sync {
    async fn probe(&self, card_id: CardId, url: &str) -> Result<ProbeOutput, ProbeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    settings: ProbeSettings,
}

impl ReqwestProbe {
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self, redirect_counter: Arc<AtomicUsize>) -> Result<reqwest::Client, ProbeError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let count = attempt.previous().len();
            redirect_counter.store(count, Ordering::Relaxed);
            if count >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(policy)
            .build()
            .map_err(|err| ProbeError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_accepted(&self, content_type: &str) -> bool {
        let ct = content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim()
            .to_ascii_lowercase();
        self.settings
            .accepted_content_prefixes
            .iter()
            .any(|prefix| ct.starts_with(&prefix.to_ascii_lowercase()))
    }
}

#[async_trait::async_trait]
impl ImageProbe for ReqwestProbe {
    async fn probe(&self, card_id: CardId, url: &str) -> Result<ProbeOutput, ProbeError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| ProbeError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.build_client(redirect_counter.clone())?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(ProbeError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_accepted(ct) {
                return Err(ProbeError::new(
                    FailureKind::NotAnImage {
                        content_type: ct.to_string(),
                    },
                    "unusable content type",
                ));
            }
        }

        // Drain the body to confirm the image actually arrives, counting
        // against the byte cap. Nothing is kept.
        let mut byte_len: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            byte_len += chunk.len() as u64;
            if byte_len > self.settings.max_bytes {
                return Err(ProbeError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(byte_len),
                    },
                    "response too large",
                ));
            }
        }

        folio_debug!(
            "probe ok card={} final_url={} bytes={}",
            card_id,
            final_url,
            byte_len
        );

        Ok(ProbeOutput {
            final_url,
            content_type,
            byte_len,
            redirect_count: redirect_counter.load(Ordering::Relaxed),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return ProbeError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    ProbeError::new(FailureKind::Network, err.to_string())
}
