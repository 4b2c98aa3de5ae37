use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::{PreviewImage, PreviewMeta, PreviewResponse};

/// Path prefix the mock intercepts; everything else passes through.
pub const PREVIEW_PATH: &str = "/api/link-preview";

/// Hostname substituted when the submitted URL is empty, malformed, or has
/// no host component.
pub const PLACEHOLDER_HOST: &str = "example.test";

/// Fixed stock image echoed back for every preview.
pub const MOCK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1472289065668-ce650ac443d2?auto=format&fit=crop&w=600&q=80";

// ── Public helpers ─────────────────────────────────────────────────────────

/// Build the deterministic mock metadata for a raw URL string.
///
/// Title and site_name are the URL's hostname, degrading to
/// [`PLACEHOLDER_HOST`] when no hostname can be resolved. The raw string is
/// echoed back unchanged in `meta.url`.
pub fn mock_preview(raw_url: &str) -> PreviewResponse {
    let host = hostname_of(raw_url).unwrap_or_else(|| PLACEHOLDER_HOST.to_string());
    let subject = if raw_url.is_empty() { "your link" } else { raw_url };

    PreviewResponse {
        success: 1,
        meta: PreviewMeta {
            title: host.clone(),
            description: format!("Mock preview for {subject}."),
            site_name: host,
            url: raw_url.to_string(),
            image: PreviewImage {
                url: MOCK_IMAGE_URL.to_string(),
            },
        },
    }
}

fn hostname_of(raw_url: &str) -> Option<String> {
    if raw_url.is_empty() {
        return None;
    }
    Url::parse(raw_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}

// ── Middleware ─────────────────────────────────────────────────────────────

/// POST /api/link-preview (prefix match)
///
/// Dev-only stand-in for a real link-preview fetcher: answers with fake Open
/// Graph metadata derived from the submitted URL's hostname, so the editor's
/// link tool works offline. Layered ahead of routing; requests that don't
/// match the path prefix and method are forwarded untouched, body unread.
pub async fn mock_link_preview(req: Request, next: Next) -> Response {
    if !req.uri().path().starts_with(PREVIEW_PATH) || req.method() != Method::POST {
        return next.run(req).await;
    }

    match preview_response(req.into_body()).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn preview_response(body: Body) -> AppResult<Response> {
    // Accumulate the whole body first; a partial body must never reach the
    // JSON parser. No size limit — this runs in local dev only.
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| AppError::MalformedBody(e.to_string()))?;

    // An empty body is an empty object, not a parse error.
    let payload: Value = if bytes.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(&bytes).map_err(|e| AppError::MalformedBody(e.to_string()))?
    };

    // Anything other than a string url degrades to "no url provided".
    let raw_url = payload.get("url").and_then(Value::as_str).unwrap_or("");

    Ok(Json(mock_preview(raw_url)).into_response())
}

// ── Unit tests ─────────────────────────────────────────────────────────────
