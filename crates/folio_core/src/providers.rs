use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::link::normalize_href;

/// Characters escaped when embedding a URL as a single component:
/// everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// How a provider endpoint embeds the target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlEncoding {
    /// Spliced in verbatim, typically as a trailing path segment.
    Raw,
    /// Percent-encoded as a single query or path component.
    Component,
}

/// One screenshot-service endpoint template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotProvider {
    pub name: String,
    pub prefix: String,
    pub suffix: String,
    pub encoding: UrlEncoding,
}

impl ScreenshotProvider {
    fn endpoint(&self, normalized_url: &str) -> String {
        let embedded = match self.encoding {
            UrlEncoding::Raw => normalized_url.to_string(),
            UrlEncoding::Component => utf8_percent_encode(normalized_url, COMPONENT).to_string(),
        };
        format!("{}{}{}", self.prefix, embedded, self.suffix)
    }
}

/// Ordered fallback chain of screenshot providers.
///
/// The order is a priority list, not a random pick: the first provider is
/// the primary, later ones are degraded fallbacks whose failure modes are
/// independent of it. The concrete endpoints are tunable data rather than
/// a fixed contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderChain {
    providers: Vec<ScreenshotProvider>,
}

impl ProviderChain {
    pub fn new(providers: Vec<ScreenshotProvider>) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Renders every provider endpoint for `raw_url`, in priority order.
    ///
    /// The target is normalized once; the result is a pure function of the
    /// input and is built once per card URL, then only indexed.
    pub fn candidates_for(&self, raw_url: &str) -> Vec<String> {
        let normalized = normalize_href(raw_url);
        self.providers
            .iter()
            .map(|provider| provider.endpoint(&normalized))
            .collect()
    }
}

impl Default for ProviderChain {
    fn default() -> Self {
        Self::new(vec![
            ScreenshotProvider {
                name: "mshots".to_string(),
                prefix: "https://s.wordpress.com/mshots/v1/".to_string(),
                suffix: "?w=1400".to_string(),
                encoding: UrlEncoding::Component,
            },
            ScreenshotProvider {
                name: "thum.io".to_string(),
                prefix: "https://image.thum.io/get/width/1400/noanimate/".to_string(),
                suffix: String::new(),
                encoding: UrlEncoding::Raw,
            },
            ScreenshotProvider {
                name: "microlink".to_string(),
                prefix: "https://api.microlink.io/?url=".to_string(),
                suffix: "&screenshot=true&meta=false&embed=screenshot.url".to_string(),
                encoding: UrlEncoding::Component,
            },
        ])
    }
}
