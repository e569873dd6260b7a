//! Per-bundle router construction.
//!
//! # Responsibilities
//! - Inject the bundle's declared response headers on every response in scope
//! - Serve the bundle directory as static content
//! - Serve the entry document at the namespace root
//!
//! # Design Decisions
//! - Header layers are outermost: error responses (404s included) carry them
//! - `ServeDir` provides extension-based content types and rejects path
//!   traversal outside the bundle directory
//! - A request-time miss is a normal 404; only construction failures are fatal

use std::path::PathBuf;

use axum::{
    body::Body,
    extract::OriginalUri,
    http::{
        header::{HeaderName, HeaderValue},
        Request, StatusCode, Uri,
    },
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tower::util::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::manifest::LoadedPoc;

/// Error type for router construction. Any variant aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("content root {0} is not a directory")]
    MissingContentRoot(PathBuf),

    #[error("'{0}' is not a valid header name")]
    HeaderName(String),

    #[error("value declared for header '{0}' is not a valid header value")]
    HeaderValue(String),
}

/// Build the isolated router for one bundle.
///
/// The returned router is self-contained: headers declared by this bundle
/// are applied only here and can never appear on another scope's responses.
pub fn poc_router(poc: &LoadedPoc) -> Result<Router, FactoryError> {
    if !poc.content_root.is_dir() {
        return Err(FactoryError::MissingContentRoot(poc.content_root.clone()));
    }

    let entry = poc.entry_path();
    let static_files = ServeDir::new(&poc.content_root).append_index_html_on_directories(false);

    let mut router = Router::new()
        .route(
            "/",
            get(move |OriginalUri(uri): OriginalUri| serve_entry(entry.clone(), uri)),
        )
        .fallback_service(static_files);

    for (name, value) in &poc.manifest.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| FactoryError::HeaderName(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| FactoryError::HeaderValue(name.clone()))?;
        router = router.layer(SetResponseHeaderLayer::overriding(
            header_name,
            header_value,
        ));
    }

    Ok(router)
}

/// Serve the entry document at the namespace root.
///
/// The nested router sees the stripped path, so the original URI decides
/// whether to normalize: without a trailing slash, relative links in the
/// entry document would resolve outside the bundle's namespace.
async fn serve_entry(entry: PathBuf, original: Uri) -> Response {
    let path = original.path();
    if !path.ends_with('/') {
        return Redirect::permanent(&format!("{path}/")).into_response();
    }

    match ServeFile::new(&entry)
        .oneshot(Request::new(Body::empty()))
        .await
    {
        Ok(res) if res.status() == StatusCode::NOT_FOUND => {
            tracing::debug!(entry = %entry.display(), "Entry document missing");
            StatusCode::NOT_FOUND.into_response()
        }
        Ok(res) => res.into_response(),
        Err(infallible) => match infallible {},
    }
}
