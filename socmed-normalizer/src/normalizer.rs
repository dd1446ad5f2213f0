use serde::Serialize;
use serde_json::Value;
use socmed_types::{BatchResults, Document, ExtractionError, Platform, SummaryReport};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::envelope;
use crate::registry::ExtractorRegistry;

/// Field added by [`tag_source`]
pub const SOURCE_FIELD: &str = "source_socmed";

/// How documents are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputFormat {
    pub pretty: bool,
    /// Wrap each document as a search-index hit
    pub envelope: bool,
}

/// Dispatches raw responses to the right platform extractor
pub struct Normalizer {
    registry: ExtractorRegistry,
}

impl Normalizer {
    pub fn new(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Normalize one raw response for the named platform
    pub fn parse_platform_data(
        &self,
        platform: &str,
        raw: &Value,
    ) -> Result<Vec<Document>, ExtractionError> {
        let extractor = self.registry.lookup(platform)?;
        let documents = extractor.extract(raw);
        debug!(
            "{} extractor {} produced {} documents",
            extractor.platform(),
            extractor.version(),
            documents.len()
        );
        Ok(documents)
    }

    /// Guess the platform from a file name
    pub fn detect_platform(&self, path: &Path) -> Result<Platform, ExtractionError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.registry
            .detect(&file_name)
            .ok_or_else(|| ExtractionError::PlatformNotDetected(file_name))
    }

    /// Read and normalize a JSON file. Without an explicit platform it is
    /// detected from the file name.
    pub fn parse_file(
        &self,
        path: &Path,
        platform: Option<&str>,
    ) -> Result<(Platform, Vec<Document>), ExtractionError> {
        let platform = match platform {
            Some(name) => self.registry.lookup(name)?.platform(),
            None => self.detect_platform(path)?,
        };

        let raw = read_json(path)?;
        let documents = self.parse_platform_data(platform.as_str(), &raw)?;
        Ok((platform, documents))
    }

    /// Parse every (platform, file name) pair under `input_dir`, in order.
    ///
    /// A platform whose file is missing or fails to parse contributes an empty
    /// result; the batch always completes.
    pub fn parse_all(&self, input_dir: &Path, files: &[(Platform, String)]) -> BatchResults {
        let mut results = BatchResults::new();

        for (platform, file_name) in files {
            let path = input_dir.join(file_name);

            if !path.exists() {
                warn!("{} file not found: {:?}", platform, path);
                results.insert(*platform, Vec::new());
                continue;
            }

            match self.parse_file(&path, Some(platform.as_str())) {
                Ok((_, documents)) => {
                    info!("Parsed {} {} documents", documents.len(), platform);
                    results.insert(*platform, documents);
                }
                Err(e) => {
                    warn!("Failed to parse {} from {:?}: {}", platform, path, e);
                    results.insert(*platform, Vec::new());
                }
            }
        }

        results
    }

    /// Parse files whose platform is detected from their names. Files of the
    /// same platform are merged in the order given; a file that fails is logged
    /// and skipped.
    pub fn parse_files(&self, paths: &[PathBuf]) -> BatchResults {
        let mut results = BatchResults::new();

        for path in paths {
            match self.parse_file(path, None) {
                Ok((platform, documents)) => {
                    info!("Parsed {} {} documents from {:?}", documents.len(), platform, path);
                    results.extend(platform, documents);
                }
                Err(e) => warn!("Skipping {:?}: {}", path, e),
            }
        }

        results
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(ExtractorRegistry::with_defaults())
    }
}

/// Add the `source_socmed` field to each document
pub fn tag_source(documents: Vec<Document>) -> Result<Vec<Document>, ExtractionError> {
    documents
        .into_iter()
        .map(|doc| {
            let platform = doc.platform().to_string();
            doc.with_field(SOURCE_FIELD, platform)
        })
        .collect()
}

/// Write `{platform}_parsed.json` for every platform that produced documents.
/// Returns the written paths.
pub fn save_parsed_results(
    results: &BatchResults,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>, ExtractionError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ExtractionError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for (platform, documents) in results.iter() {
        if documents.is_empty() {
            continue;
        }

        let path = output_dir.join(format!("{}_parsed.json", platform));
        write_documents(&path, documents, format)?;
        info!("Saved {} {} documents to {:?}", documents.len(), platform, path);
        written.push(path);
    }

    Ok(written)
}

pub fn write_summary_report(
    report: &SummaryReport,
    path: &Path,
    pretty: bool,
) -> Result<(), ExtractionError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ExtractionError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_json(path, report, pretty)
}

/// Serialize documents in the requested shape
pub fn render_documents(documents: &[Document], format: OutputFormat) -> serde_json::Result<String> {
    match (format.envelope, format.pretty) {
        (true, true) => serde_json::to_string_pretty(&envelope::wrap_all(documents)),
        (true, false) => serde_json::to_string(&envelope::wrap_all(documents)),
        (false, true) => serde_json::to_string_pretty(documents),
        (false, false) => serde_json::to_string(documents),
    }
}

fn write_documents(
    path: &Path,
    documents: &[Document],
    format: OutputFormat,
) -> Result<(), ExtractionError> {
    let body = render_documents(documents, format).map_err(|source| ExtractionError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, body).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json(path: &Path) -> Result<Value, ExtractionError> {
    let body = std::fs::read_to_string(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&body).map_err(|source| ExtractionError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    pretty: bool,
) -> Result<(), ExtractionError> {
    let body = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|source| ExtractionError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, body).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })
}
