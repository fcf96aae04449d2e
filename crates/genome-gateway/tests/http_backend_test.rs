//! HTTP backend tests against a local one-shot metadata server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use genome_gateway::{
    FieldResult, GatewayError, HttpMetadataBackend, MetadataBackend, MetadataConfig,
    RegionDescriptor, RegionValidator,
};

/// Serve a fixed response to every request.
///
/// Returns the base URL and a channel carrying each request line received.
async fn serve(
    status: &'static str,
    body: &'static str,
) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (requests, received) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 8192];
            let mut read = 0;
            while read < buf.len() {
                let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let request = String::from_utf8_lossy(&buf[..read]);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = requests.send(request_line);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), received)
}

fn backend(base_url: &str) -> HttpMetadataBackend {
    HttpMetadataBackend::with_config(MetadataConfig::default().with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_found_region() {
    let (url, mut requests) = serve("200 OK", r#"{"length": 2000, "chromosomal": true}"#).await;

    let descriptor = backend(&url).describe_region("g1", "1").await.unwrap();
    assert_eq!(descriptor, RegionDescriptor::found(2000, true));
    assert_eq!(
        requests.recv().await.unwrap(),
        "GET /genomes/g1/regions/1 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_not_found_status_is_missing_region() {
    let (url, _requests) = serve("404 Not Found", "").await;

    let descriptor = backend(&url).describe_region("g1", "chrUn").await.unwrap();
    assert_eq!(descriptor, RegionDescriptor::missing());
}

#[tokio::test]
async fn test_empty_body_is_missing_region() {
    let (url, _requests) = serve("200 OK", "{}").await;

    let descriptor = backend(&url).describe_region("g1", "chrUn").await.unwrap();
    assert!(!descriptor.exists);
}

#[tokio::test]
async fn test_server_error_is_backend_error() {
    let (url, _requests) = serve("500 Internal Server Error", "boom").await;

    let err = backend(&url).describe_region("g1", "1").await.unwrap_err();
    match err {
        GatewayError::Backend {
            genome_id,
            region_name,
            message,
        } => {
            assert_eq!(genome_id, "g1");
            assert_eq!(region_name, "1");
            assert!(message.contains("500"));
            assert!(message.contains("boom"));
        }
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_reads_as_unknown_region() {
    let (url, _requests) = serve("500 Internal Server Error", "boom").await;
    let validator = RegionValidator::new(backend(&url));

    let outcome = validator.validate(Some("g1"), "1:500-1000").await;

    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.region(),
        &FieldResult::invalid("1", "Could not find region 1 for g1")
    );
    assert_eq!(outcome.start(), &FieldResult::Unattempted);
}

#[tokio::test]
async fn test_validation_over_http() {
    let (url, _requests) = serve("200 OK", r#"{"length": 2000, "chromosomal": true}"#).await;
    let validator = RegionValidator::new(backend(&url));

    let outcome = validator.validate(Some("g1"), "1:500-1,000").await;

    assert!(outcome.is_valid());
    assert_eq!(outcome.location(), Some("1:500-1000"));
}
