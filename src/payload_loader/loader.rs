use odata_models::round_trip::{RoundTripError, RoundTripReport, verify};
use futures::stream::FuturesUnordered;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

#[derive(Debug)]
pub struct PayloadReport {
    path: PathBuf,
    report: RoundTripReport,
}

impl PayloadReport {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        file_name(&self.path)
    }

    pub fn report(&self) -> &RoundTripReport {
        &self.report
    }
}

/// The outcome of verifying every payload in a directory, sorted by path.
#[derive(Debug, Default)]
pub struct PayloadSummary {
    reports: Vec<PayloadReport>,
    failures: Vec<LoaderError>,
}

impl PayloadSummary {
    pub fn reports(&self) -> &[PayloadReport] {
        &self.reports
    }

    pub fn failures(&self) -> &[LoaderError] {
        &self.failures
    }

    pub fn mismatches(&self) -> usize {
        self.reports.iter().filter(|payload| !payload.report.is_equivalent()).count()
    }
}

#[instrument]
pub async fn load_payloads_from(directory: &str, extension: &str) -> Result<PayloadSummary, LoaderError> {
    info!("📁 Loading payloads...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = verify_files(files).await;
    let mut summary = PayloadSummary::default();
    for result in results {
        match result {
            Ok(report) => summary.reports.push(report),
            Err(err) => {
                log_error(&err);
                summary.failures.push(err);
            }
        }
    }
    summary.reports.sort_by(|lhs, rhs| lhs.path.cmp(&rhs.path));

    info!(
        "📁 Loading payloads... OK, {} verified, {} failed",
        summary.reports.len(),
        summary.failures.len()
    );
    Ok(summary)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn verify_files(paths: Vec<PathBuf>) -> Vec<Result<PayloadReport, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => task::spawn_blocking(move || match verify(&content) {
                Ok(report) => Ok(PayloadReport { path, report }),
                Err(err) => Err(LoaderError::RoundTrip { source: err, path }),
            })
            .await?,
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

fn log_error(error: &LoaderError) {
    match error {
        LoaderError::RoundTrip { source, path } => warn!("⚠️ Failed to verify '{}': {}", file_name(path), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to read '{}': {}", file_name(path), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    RoundTrip { source: RoundTripError, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use odata_models::serialization::DecodeError;
    use pretty_assertions::assert_eq;
    use std::env::temp_dir;
    use test_log::test;

    fn payload(name: &str) -> PathBuf {
        PathBuf::from(format!("{}/tests/resources/payloads/{}", env!("CARGO_MANIFEST_DIR"), name))
    }

    #[tokio::test]
    async fn list_files_returns_all_relevant_files() -> io::Result<()> {
        let temp_dir = temp_dir().join("odata_models_list_files");
        fs::create_dir_all(&temp_dir).await?;

        let file1 = temp_dir.join("entity.json");
        let file2 = temp_dir.join("notes.txt");
        let file3 = temp_dir.join("entity2.json");

        fs::write(&file1, "{}").await?;
        fs::write(&file2, "text").await?;
        fs::write(&file3, "{}").await?;

        let mut files = list_files(temp_dir.to_string_lossy().as_ref(), "json").await?;
        files.sort();

        assert_eq!(files, vec![file1, file3]);

        Ok(())
    }

    #[test(tokio::test)]
    async fn verify_files_returns_a_report_for_a_valid_payload() {
        let path = payload("deviceShellScript.json");
        assert!(path.is_file(), "expected path to be a file");

        let result = verify_files(vec![path]).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Ok(payload) => {
                assert_eq!(payload.file_name(), "deviceShellScript.json");
                assert_eq!(payload.report().odata_type(), Some("#microsoft.graph.deviceShellScript"));
                assert!(payload.report().is_equivalent());
            }
            Err(err) => panic!("Expected a report, found {:?}", err),
        }
    }

    #[test(tokio::test)]
    async fn verify_files_returns_an_error_for_an_invalid_payload() {
        let path = payload("invalid/typeMismatch.json");
        assert!(path.is_file(), "expected path to be a file");

        let result = verify_files(vec![path]).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Err(LoaderError::RoundTrip {
                source: RoundTripError::Decode(err @ DecodeError::TypeMismatch { .. }),
                ..
            }) => assert_eq!(err.field(), Some("ipRanges[0].cidrAddress")),
            other => panic!("Expected a type mismatch, found {:?}", other),
        }
    }

    #[test(tokio::test)]
    async fn verify_files_returns_an_error_for_a_missing_file() {
        let result = verify_files(vec![payload("missing.json")]).await;

        assert!(matches!(&result[0], Err(LoaderError::Io { path: Some(_), .. })));
    }

    #[test(tokio::test)]
    async fn load_payloads_from_verifies_every_fixture() -> Result<(), LoaderError> {
        let config = AppConfigBuilder::new().build();

        let summary = load_payloads_from(config.payloads().directory(), config.payloads().extension()).await?;

        let names: Vec<&str> = summary.reports().iter().map(PayloadReport::file_name).collect();
        assert_eq!(
            names,
            vec![
                "deviceShellScript.json",
                "ipNamedLocation.json",
                "recommendation.json",
                "startupProcessPerformance.json",
                "unknownEntity.json",
                "vpnTrafficRule.json",
            ]
        );
        assert_eq!(summary.mismatches(), 0);
        assert!(summary.failures().is_empty());

        Ok(())
    }

    #[test(tokio::test)]
    async fn load_payloads_from_fails_for_a_missing_directory() {
        let config = AppConfigBuilder::new().directory("does/not/exist".to_string()).build();

        let result = load_payloads_from(config.payloads().directory(), config.payloads().extension()).await;

        assert!(matches!(result, Err(LoaderError::Io { path: None, .. })));
    }
}
