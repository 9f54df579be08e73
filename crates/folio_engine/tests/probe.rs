use std::time::Duration;

use pretty_assertions::assert_eq;

use folio_engine::{FailureKind, ImageProbe, ProbeSettings, ReqwestProbe};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// 1x1 PNG header bytes; enough for a body, nothing decodes it.
const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[tokio::test]
async fn probe_accepts_image_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shot"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG_BYTES, "image/png"))
        .mount(&server)
        .await;

    let probe = ReqwestProbe::new(ProbeSettings::default());
    let url = format!("{}/shot", server.uri());

    let output = probe.probe(1, &url).await.expect("probe ok");
    assert_eq!(output.final_url, url);
    assert_eq!(output.content_type.as_deref(), Some("image/png"));
    assert_eq!(output.byte_len, PNG_BYTES.len() as u64);
    assert_eq!(output.redirect_count, 0);
}

#[tokio::test]
async fn probe_follows_redirect_to_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/screenshot.url"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/shot", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shot"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG_BYTES, "image/png"))
        .mount(&server)
        .await;

    let probe = ReqwestProbe::new(ProbeSettings::default());
    let url = format!("{}/screenshot.url", server.uri());

    let output = probe.probe(2, &url).await.expect("probe ok");
    assert_eq!(output.final_url, format!("{}/shot", server.uri()));
    assert_eq!(output.redirect_count, 1);
}

#[tokio::test]
async fn probe_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let probe = ReqwestProbe::new(ProbeSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = probe.probe(3, &url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn probe_rejects_non_image_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>rate limited</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let probe = ReqwestProbe::new(ProbeSettings::default());
    let url = format!("{}/page", server.uri());

    let err = probe.probe(4, &url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::NotAnImage {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn probe_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(PNG_BYTES, "image/png"),
        )
        .mount(&server)
        .await;

    let settings = ProbeSettings {
        request_timeout: Duration::from_millis(50),
        ..ProbeSettings::default()
    };
    let probe = ReqwestProbe::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = probe.probe(5, &url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn probe_rejects_oversized_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/png")
                .insert_header("Content-Length", "11")
                .set_body_bytes(&b"01234567890"[..]),
        )
        .mount(&server)
        .await;

    let settings = ProbeSettings {
        max_bytes: 10,
        ..ProbeSettings::default()
    };
    let probe = ReqwestProbe::new(settings);
    let url = format!("{}/large", server.uri());

    let err = probe.probe(6, &url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn probe_rejects_malformed_url() {
    let probe = ReqwestProbe::new(ProbeSettings::default());
    let err = probe.probe(7, "not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
