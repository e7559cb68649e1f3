// HTTP response utilities for JSON+Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use serde::Serialize;
use tokio::io::AsyncReadExt;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Whether the client lists `br` in `Accept-Encoding` with a non-zero q-value.
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(encoding_accepts_brotli))
        .unwrap_or(false)
}

fn encoding_accepts_brotli(entry: &str) -> bool {
    let mut parts = entry.split(';').map(str::trim);
    let coding = parts.next().unwrap_or_default();
    if !coding.eq_ignore_ascii_case("br") {
        return false;
    }
    // A malformed q-value counts as a refusal.
    parts.all(|param| match param.split_once('=') {
        Some((key, value)) if key.trim().eq_ignore_ascii_case("q") => value
            .trim()
            .parse::<f32>()
            .map(|q| q > 0.0)
            .unwrap_or(false),
        _ => true,
    })
}

pub async fn brotli_compress(bytes: Vec<u8>) -> std::io::Result<Vec<u8>> {
    let cursor = std::io::Cursor::new(bytes);
    let mut encoder = BrotliEncoder::new(cursor);
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;
    Ok(compressed)
}

/// Serialize to JSON with optional Brotli compression
pub async fn json_response<T: Serialize>(
    data: &T,
    status: StatusCode,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let json_bytes = serde_json::to_vec(data).map_err(|e| {
        tracing::error!("JSON serialization error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let (body_bytes, content_encoding) = if compress {
        let original_len = json_bytes.len();
        let compressed = brotli_compress(json_bytes).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!(
            original_len,
            compressed_len = compressed.len(),
            "Compressed JSON response"
        );
        (compressed, Some("br"))
    } else {
        (json_bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()));

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_compression::tokio::bufread::BrotliDecoder;

    pub(crate) async fn brotli_decompress(bytes: &[u8]) -> Vec<u8> {
        let mut decoder = BrotliDecoder::new(std::io::Cursor::new(bytes.to_vec()));
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).await.unwrap();
        out
    }

    #[test]
    fn test_accepts_brotli() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, br;q=0.9"));
        assert!(accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("BR"));
        assert!(accepts_brotli(&headers));
    }

    #[test]
    fn test_brotli_refused_by_zero_q_or_other_tokens() {
        let mut headers = HeaderMap::new();
        for value in ["gzip, br;q=0", "br; q=0.000", "br;q=abc", "brotli", "gzip, bro"] {
            headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static(value));
            assert!(!accepts_brotli(&headers), "{} should not accept br", value);
        }
    }

    #[tokio::test]
    async fn test_compressed_response_round_trips() {
        let payload = serde_json::json!({ "panels": ["Sec-1", "Sec-2", "Sec-3"] });

        let plain = json_response(&payload, StatusCode::OK, false).await.unwrap();
        assert!(plain.headers().get(header::CONTENT_ENCODING).is_none());

        let compressed = json_response(&payload, StatusCode::OK, true).await.unwrap();
        assert_eq!(compressed.headers()[header::CONTENT_ENCODING], "br");
        let body = axum::body::to_bytes(compressed.into_body(), usize::MAX)
            .await
            .unwrap();
        let decoded: serde_json::Value =
            serde_json::from_slice(&brotli_decompress(&body).await).unwrap();
        assert_eq!(decoded, payload);
    }
}
