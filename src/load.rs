//! Loading of the two source tables.
//!
//! Both sources load concurrently and the dashboard only renders once both
//! have settled (join semantics, not first-wins). Either failure is fatal
//! for the view and its reason is surfaced verbatim; nothing is retried
//! and in-flight requests carry no timeout.

use crate::error::LoadError;
use std::path::PathBuf;

/// Fetch the schools table and the energy log concurrently.
///
/// Each source is either an `http(s)://` URL fetched as plain text or a
/// local file path. A non-success status on either is a load error naming
/// the URL and status.
pub fn load_sources(schools_src: &str, logs_src: &str) -> Result<(String, String), LoadError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| LoadError::Runtime { source })?;

    runtime.block_on(async { tokio::try_join!(fetch_source(schools_src), fetch_source(logs_src)) })
}

async fn fetch_source(source: &str) -> Result<String, LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source).await
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| LoadError::FileRead {
                path: PathBuf::from(source),
                source: e,
            })
    }
}

async fn fetch_url(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url).await.map_err(|e| LoadError::Request {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| LoadError::Request {
        url: url.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::load_sources;
    use crate::error::LoadError;

    #[test]
    fn missing_file_fails_with_the_path_in_the_message() {
        let err = load_sources("/nonexistent/schools.csv", "/nonexistent/logs.csv").unwrap_err();
        match err {
            LoadError::FileRead { path, .. } => {
                assert!(path.to_string_lossy().contains("nonexistent"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn both_files_load_together() {
        let dir = std::env::temp_dir();
        let schools = dir.join("solar_schools_test_schools.csv");
        let logs = dir.join("solar_schools_test_logs.csv");
        std::fs::write(&schools, "school_id,school_name\nS1,A\n").unwrap();
        std::fs::write(&logs, "school_id,month\nS1,2024-01\n").unwrap();

        let (schools_text, logs_text) =
            load_sources(&schools.to_string_lossy(), &logs.to_string_lossy()).unwrap();
        assert!(schools_text.starts_with("school_id"));
        assert!(logs_text.contains("2024-01"));

        let _ = std::fs::remove_file(schools);
        let _ = std::fs::remove_file(logs);
    }
}
