use std::fs::metadata;

use anyhow::{self, Context};

use common::config::HostConfig;

// the host is useless without a built bundle, so refuse to start instead of serving 404s
pub fn doc_root_ready(config: &HostConfig) -> anyhow::Result<()> {
    let root = metadata(&config.doc_root)
        .with_context(|| format!("doc_root {:?} is not accessible", config.doc_root))?;

    if !root.is_dir() {
        return Err(anyhow::Error::msg(format!(
            "doc_root {:?} is not a directory",
            config.doc_root
        )));
    }

    let index = config.index_file();

    let found = metadata(&index)
        .with_context(|| format!("no index.html in {:?}, was the webapp built?", config.doc_root))?;

    if !found.is_file() {
        return Err(anyhow::Error::msg(format!("{index:?} is not a file")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, write};

    use super::*;

    fn config(doc_root: &std::path::Path) -> HostConfig {
        HostConfig {
            socket: String::from("127.0.0.1:0"),
            doc_root: doc_root.to_path_buf(),
            url_root: String::new(),
        }
    }

    #[test]
    fn built_bundle_passes() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path().join("index.html"), "<html></html>").unwrap();

        doc_root_ready(&config(dir.path())).unwrap();
    }

    #[test]
    fn missing_index() {
        let dir = tempfile::tempdir().unwrap();

        assert!(doc_root_ready(&config(dir.path())).is_err());
    }

    #[test]
    fn index_must_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        create_dir(dir.path().join("index.html")).unwrap();

        assert!(doc_root_ready(&config(dir.path())).is_err());
    }

    #[test]
    fn doc_root_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bundle");
        write(&file, "not a directory").unwrap();

        assert!(doc_root_ready(&config(&file)).is_err());
        assert!(doc_root_ready(&config(&dir.path().join("absent"))).is_err());
    }
}
