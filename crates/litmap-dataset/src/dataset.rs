//! In-memory publication table: one-time load and process-wide cache.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use litmap_common::{LitmapError, Result};

use crate::artifact::{DatasetArtifact, SCHEMA_VERSION};
use crate::document::DocumentRecord;

/// The loaded publication table. Immutable for the process lifetime and
/// shared read-only across all filter passes.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<DocumentRecord>,
    /// Distinct hierarchy levels, ascending. Computed once at construction.
    levels: Vec<u8>,
}

impl Dataset {
    /// Build a table from rows, indexing the hierarchy levels up front.
    pub fn new(records: Vec<DocumentRecord>) -> Self {
        let mut levels: Vec<u8> = records.iter().map(|r| r.level).collect();
        levels.sort_unstable();
        levels.dedup();
        Self { records, levels }
    }

    /// All rows, in artifact order.
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    /// Distinct `level` values present in the table, sorted ascending.
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Number of rows (pre-deduplication).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read and validate the artifact at `path`.
    ///
    /// One read per call; the file contents are dropped as soon as the
    /// table is materialized. A missing, unreadable, unparsable, or
    /// wrong-version artifact is unrecoverable — the dashboard has no
    /// other data source.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LitmapError::DatasetRead {
                path: path.to_path_buf(),
                source,
            })?;

        let artifact: DatasetArtifact =
            serde_json::from_str(&content).map_err(|source| LitmapError::DatasetParse {
                path: path.to_path_buf(),
                source,
            })?;

        if artifact.schema_version != SCHEMA_VERSION {
            return Err(LitmapError::SchemaVersion {
                path: path.to_path_buf(),
                found: artifact.schema_version,
                supported: SCHEMA_VERSION,
            });
        }

        let dataset = Self::new(artifact.documents);
        info!(
            rows = dataset.records.len(),
            levels = dataset.levels.len(),
            "Loaded publication table from {}",
            path.display()
        );
        Ok(dataset)
    }
}

// Global table instance: initialized lazily on first access, never
// invalidated until process restart.
static GLOBAL_TABLE: tokio::sync::OnceCell<Arc<Dataset>> = tokio::sync::OnceCell::const_new();

impl Dataset {
    /// Get the process-wide publication table, loading it from `path` on
    /// the first call. Every later call returns the same cached table; the
    /// `path` argument of later calls is ignored.
    pub async fn global(path: &Path) -> Result<Arc<Dataset>> {
        GLOBAL_TABLE
            .get_or_try_init(|| async {
                info!("Initializing global publication table");
                Dataset::load(path).await.map(Arc::new)
            })
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::DatasetArtifact;

    fn row(id: &str, level: u8) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            title: format!("paper {id}"),
            year: "2010".to_string(),
            source: format!("https://example.org/{id}"),
            name: "biology".to_string(),
            level,
            citations: 1,
            component_1: 5.0,
            component_2: 9.0,
        }
    }

    fn write_artifact(dir: &Path, documents: Vec<DocumentRecord>, version: u32) -> std::path::PathBuf {
        let path = dir.join("publications.json");
        let artifact = DatasetArtifact {
            schema_version: version,
            documents,
        };
        std::fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();
        path
    }

    #[test]
    fn levels_are_distinct_and_ascending() {
        let dataset = Dataset::new(vec![row("a", 2), row("b", 0), row("c", 2), row("d", 1)]);
        assert_eq!(dataset.levels(), &[0, 1, 2]);
    }

    #[test]
    fn empty_table_has_no_levels() {
        let dataset = Dataset::new(vec![]);
        assert!(dataset.is_empty());
        assert!(dataset.levels().is_empty());
    }

    #[tokio::test]
    async fn load_reads_a_valid_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(dir.path(), vec![row("a", 0), row("b", 1)], SCHEMA_VERSION);

        let dataset = Dataset::load(&path).await.unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.levels(), &[0, 1]);
    }

    #[tokio::test]
    async fn missing_file_error_names_the_path() {
        let err = Dataset::load(Path::new("/nonexistent/publications.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LitmapError::DatasetRead { .. }));
        assert!(err.to_string().contains("/nonexistent/publications.json"));
    }

    #[tokio::test]
    async fn wrong_schema_version_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(dir.path(), vec![row("a", 0)], SCHEMA_VERSION + 1);

        let err = Dataset::load(&path).await.unwrap_err();
        match err {
            LitmapError::SchemaVersion { found, supported, .. } => {
                assert_eq!(found, SCHEMA_VERSION + 1);
                assert_eq!(supported, SCHEMA_VERSION);
            }
            other => panic!("expected SchemaVersion error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn global_returns_the_same_table_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(dir.path(), vec![row("a", 0)], SCHEMA_VERSION);

        let first = Dataset::global(&path).await.unwrap();
        let second = Dataset::global(&path).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), second.len());
    }
}
