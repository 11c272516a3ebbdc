use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/aromi/config.toml";

fn default_socket() -> String {
    String::from("127.0.0.1:8080")
}

// static host configuration
//
// the site itself has no runtime configuration; this only describes where the built bundle lives
// and how it is exposed
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HostConfig {
    // ip and port for the http listener
    #[serde(default = "default_socket")]
    pub socket: String,

    // output directory of the webapp build, must contain index.html
    pub doc_root: PathBuf,

    // prefix the site is mounted under, useful behind a reverse proxy
    #[serde(default)]
    pub url_root: String,
}

impl HostConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.socket
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid socket address {:?}", self.socket))
    }

    // url_root with exactly one leading slash and no trailing one, or "/" when empty
    pub fn mount_path(&self) -> String {
        let trimmed = self.url_root.trim_matches('/');

        if trimmed.is_empty() {
            String::from("/")
        } else {
            format!("/{trimmed}")
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.doc_root.join("index.html")
    }
}

// the settings live in a [config] table so the same file can carry other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: HostConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<HostConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: &Path) -> anyhow::Result<Arc<HostConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(filename)
        .await
        .with_context(|| format!("failed to read config file {filename:?}"))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in() {
        let config = parse_config(
            r#"
            [config]
            doc_root = "/srv/aromi"
            "#,
        )
        .unwrap();

        assert_eq!(config.socket, "127.0.0.1:8080");
        assert_eq!(config.doc_root, PathBuf::from("/srv/aromi"));
        assert_eq!(config.mount_path(), "/");
        assert_eq!(config.index_file(), PathBuf::from("/srv/aromi/index.html"));
    }

    #[test]
    fn explicit_values() {
        let config = parse_config(
            r#"
            [config]
            socket = "[::]:9000"
            doc_root = "dist"
            url_root = "/spa/"
            "#,
        )
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().port(), 9000);
        assert_eq!(config.mount_path(), "/spa");
    }

    #[test]
    fn missing_table_is_an_error() {
        assert!(parse_config("doc_root = \"dist\"").is_err());
        assert!(parse_config("[config]\nsocket = \"127.0.0.1:1\"").is_err());
    }

    #[test]
    fn bad_socket() {
        let config = HostConfig {
            socket: String::from("localhost"),
            doc_root: PathBuf::from("dist"),
            url_root: String::new(),
        };

        assert!(config.socket_addr().is_err());
    }

    #[tokio::test]
    async fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[config]\ndoc_root = \"dist\"\nurl_root = \"aromi\"\n").unwrap();

        let config = read_config(&path).await.unwrap();
        assert_eq!(config.mount_path(), "/aromi");

        assert!(read_config(&dir.path().join("missing.toml")).await.is_err());
    }
}
