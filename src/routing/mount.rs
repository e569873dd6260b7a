//! Mounting bundle routers on the top-level dispatcher.
//!
//! # Responsibilities
//! - Compute each bundle's namespace prefix from its identifier
//! - Nest bundle routers in loader order
//! - Refuse to shadow one bundle with another on a prefix collision
//!
//! # Design Decisions
//! - Prefixes are disjoint when identifiers are unique, so mount order only
//!   affects log ordering, never routing
//! - A collision is a startup error, not a warning

use std::collections::HashSet;

use axum::Router;

use crate::manifest::LoadedPoc;
use crate::routing::factory::{poc_router, FactoryError};

/// Error type for mounting. Any variant aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("bundle '{bundle}': {source}")]
    Factory {
        bundle: String,
        source: FactoryError,
    },

    #[error("namespace collision: two bundles computed the prefix '{0}'")]
    NamespaceCollision(String),
}

/// Nest every bundle's router under `/<route_prefix>/<identifier>`.
///
/// Returns the dispatcher with all bundles attached, or the first fatal
/// error. Nothing observable is mounted when an error is returned; the
/// caller is expected to abort startup.
pub fn mount_pocs(
    mut app: Router,
    route_prefix: &str,
    pocs: &[LoadedPoc],
) -> Result<Router, MountError> {
    let mut mounted: HashSet<String> = HashSet::new();

    for poc in pocs {
        let prefix = format!("/{}/{}", route_prefix.trim_matches('/'), poc.identifier);
        if !mounted.insert(prefix.clone()) {
            return Err(MountError::NamespaceCollision(prefix));
        }

        let router = poc_router(poc).map_err(|source| MountError::Factory {
            bundle: poc.identifier.clone(),
            source,
        })?;
        app = app.nest(&prefix, router);
        tracing::info!(bundle = %poc.identifier, prefix = %prefix, "Mounted PoC");
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::manifest::PocManifest;

    fn bundle(dir: &Path, id: &str, headers: &[(&str, &str)]) -> LoadedPoc {
        let root = dir.join(id);
        fs::create_dir(&root).unwrap();
        fs::write(root.join("index.html"), format!("<h1>{id}</h1>")).unwrap();
        LoadedPoc {
            identifier: id.into(),
            manifest: PocManifest {
                title: id.to_uppercase(),
                description: format!("{id} demo"),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                entry: None,
            },
            content_root: root,
        }
    }

    async fn send(app: &Router, path: &str) -> axum::response::Response {
        app.clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn headers_stay_inside_their_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let pocs = vec![
            bundle(dir.path(), "a", &[("X-Test", "1")]),
            bundle(dir.path(), "b", &[]),
        ];

        let app = mount_pocs(Router::new(), "headers", &pocs).unwrap();

        let a = send(&app, "/headers/a/").await;
        assert_eq!(a.status(), StatusCode::OK);
        assert_eq!(a.headers()["x-test"], "1");

        let b = send(&app, "/headers/b/").await;
        assert_eq!(b.status(), StatusCode::OK);
        assert!(b.headers().get("x-test").is_none());
    }

    #[tokio::test]
    async fn bare_prefix_redirects_to_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        let pocs = vec![bundle(dir.path(), "a", &[])];

        let app = mount_pocs(Router::new(), "headers", &pocs).unwrap();
        let res = send(&app, "/headers/a").await;
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(res.headers()["location"], "/headers/a/");
    }

    #[tokio::test]
    async fn unmounted_identifier_falls_through_to_dispatcher_404() {
        let dir = tempfile::tempdir().unwrap();
        let pocs = vec![bundle(dir.path(), "a", &[("X-Test", "1")])];

        let app = mount_pocs(Router::new(), "headers", &pocs).unwrap();
        let res = send(&app, "/headers/c/").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers().get("x-test").is_none());
    }

    #[tokio::test]
    async fn collision_is_fatal_not_shadowing() {
        let dir = tempfile::tempdir().unwrap();
        let first = bundle(dir.path(), "a", &[]);
        // Same identifier pointing elsewhere, as if the loader's invariant broke.
        let mut second = first.clone();
        second.manifest.title = "other".into();

        let err = mount_pocs(Router::new(), "headers", &[first, second]).unwrap_err();
        assert!(matches!(err, MountError::NamespaceCollision(p) if p == "/headers/a"));
    }

    #[tokio::test]
    async fn factory_failure_names_the_bundle() {
        let poc = LoadedPoc {
            identifier: "ghost".into(),
            manifest: PocManifest {
                title: "Ghost".into(),
                description: "no directory".into(),
                headers: Default::default(),
                entry: None,
            },
            content_root: Path::new("/nonexistent/ghost").to_path_buf(),
        };

        let err = mount_pocs(Router::new(), "headers", &[poc]).unwrap_err();
        assert!(matches!(err, MountError::Factory { ref bundle, .. } if bundle == "ghost"));
    }
}
