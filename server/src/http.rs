use std::sync::Arc;

use anyhow::Context;
use axum::{Router, http::StatusCode, routing::get};
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

use common::config::HostConfig;

// the webapp is a single page, so any path under the mount that is not a file gets index.html
// and the browser sorts out the anchor
pub fn router(config: &HostConfig) -> Router {
    let files = ServeDir::new(&config.doc_root).fallback(ServeFile::new(config.index_file()));

    let mount = config.mount_path();

    // axum refuses to nest at the root
    let site = if mount == "/" {
        Router::new().fallback_service(files)
    } else {
        Router::new().nest_service(&mount, files)
    };

    site.route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub async fn serve_http(config: Arc<HostConfig>) -> anyhow::Result<()> {
    let socket = config.socket_addr()?;

    let listener = TcpListener::bind(socket)
        .await
        .with_context(|| format!("http listener failed to bind {socket}"))?;

    info!(
        "serving {:?} at http://{socket}{}",
        config.doc_root,
        config.mount_path()
    );

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    info!("http server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, write};

    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use tower::ServiceExt;

    use super::*;

    fn bundle() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path().join("index.html"), "<main>aromi</main>").unwrap();
        write(dir.path().join("aromi.js"), "launch()").unwrap();
        create_dir(dir.path().join("assets")).unwrap();
        write(dir.path().join("assets").join("site.css"), ".page {}").unwrap();
        dir
    }

    fn config(dir: &tempfile::TempDir, url_root: &str) -> HostConfig {
        HostConfig {
            socket: String::from("127.0.0.1:0"),
            doc_root: dir.path().to_path_buf(),
            url_root: url_root.to_owned(),
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_check() {
        let dir = bundle();

        let (status, body) = get(router(&config(&dir, "")), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn serves_files_at_root() {
        let dir = bundle();
        let app = router(&config(&dir, ""));

        assert_eq!(get(app.clone(), "/aromi.js").await, (StatusCode::OK, "launch()".to_owned()));
        assert_eq!(
            get(app.clone(), "/assets/site.css").await,
            (StatusCode::OK, ".page {}".to_owned())
        );
        assert_eq!(get(app, "/").await.1, "<main>aromi</main>");
    }

    #[tokio::test]
    async fn unknown_paths_get_the_page() {
        let dir = bundle();

        let (status, body) = get(router(&config(&dir, "")), "/services").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<main>aromi</main>");
    }

    #[tokio::test]
    async fn mounted_under_prefix() {
        let dir = bundle();
        let app = router(&config(&dir, "/spa/"));

        assert_eq!(
            get(app.clone(), "/spa/aromi.js").await,
            (StatusCode::OK, "launch()".to_owned())
        );
        assert_eq!(get(app.clone(), "/spa/reviews").await.1, "<main>aromi</main>");
        assert_eq!(get(app.clone(), "/aromi.js").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get(app, "/healthz").await.0, StatusCode::OK);
    }
}
