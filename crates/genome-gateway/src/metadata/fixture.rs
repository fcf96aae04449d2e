//! In-memory metadata backend backed by a region table.
//!
//! Used for offline validation and tests. The table can be built in code or
//! loaded from a JSON fixture:
//!
//! ```json
//! {
//!   "genomes": {
//!     "a7335667-93e7-11ec-a39d-005056b38ce3": {
//!       "1": { "length": 248956422, "chromosomal": true },
//!       "KI270728.1": { "length": 1872759, "chromosomal": false }
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

use super::backend::{MetadataBackend, RegionDescriptor};

/// One region entry in a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub length: u64,
    #[serde(default)]
    pub chromosomal: bool,
}

/// On-disk fixture layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RegionFixture {
    #[serde(default)]
    genomes: HashMap<String, HashMap<String, RegionRecord>>,
}

/// Metadata backend that answers from a fixed region table.
#[derive(Debug, Default)]
pub struct StaticMetadataBackend {
    genomes: HashMap<String, HashMap<String, RegionRecord>>,
    lookups: AtomicUsize,
}

impl StaticMetadataBackend {
    /// Create an empty backend; every lookup reports a missing region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a region table from a JSON fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GatewayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a region table from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let fixture: RegionFixture = serde_json::from_str(json)?;

        for (genome_id, regions) in &fixture.genomes {
            if genome_id.is_empty() {
                return Err(GatewayError::Fixture("empty genome identifier".to_string()));
            }
            if regions.contains_key("") {
                return Err(GatewayError::Fixture(format!(
                    "empty region name in genome '{}'",
                    genome_id
                )));
            }
        }

        Ok(Self {
            genomes: fixture.genomes,
            lookups: AtomicUsize::new(0),
        })
    }

    /// Add a region to the table.
    pub fn with_region(
        mut self,
        genome_id: impl Into<String>,
        region_name: impl Into<String>,
        length: u64,
        chromosomal: bool,
    ) -> Self {
        self.genomes
            .entry(genome_id.into())
            .or_default()
            .insert(region_name.into(), RegionRecord { length, chromosomal });
        self
    }

    /// Number of genomes in the table.
    pub fn genome_count(&self) -> usize {
        self.genomes.len()
    }

    /// Number of regions across all genomes.
    pub fn region_count(&self) -> usize {
        self.genomes.values().map(HashMap::len).sum()
    }

    /// Number of `describe_region` calls served so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn lookup(&self, genome_id: &str, region_name: &str) -> RegionDescriptor {
        self.genomes
            .get(genome_id)
            .and_then(|regions| regions.get(region_name))
            .map(|record| RegionDescriptor::found(record.length, record.chromosomal))
            .unwrap_or_else(RegionDescriptor::missing)
    }
}

impl MetadataBackend for StaticMetadataBackend {
    async fn describe_region(&self, genome_id: &str, region_name: &str) -> Result<RegionDescriptor> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.lookup(genome_id, region_name))
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_lookup() {
        let backend = StaticMetadataBackend::new()
            .with_region("g1", "1", 2000, true)
            .with_region("g1", "MT", 16569, false);

        assert_eq!(backend.genome_count(), 1);
        assert_eq!(backend.region_count(), 2);
        assert_eq!(backend.lookup("g1", "1"), RegionDescriptor::found(2000, true));
        assert_eq!(backend.lookup("g1", "2"), RegionDescriptor::missing());
        assert_eq!(backend.lookup("g2", "1"), RegionDescriptor::missing());
    }

    #[test]
    fn test_from_json_defaults_chromosomal() {
        let backend =
            StaticMetadataBackend::from_json_str(r#"{"genomes": {"g1": {"contig_7": {"length": 90}}}}"#)
                .unwrap();
        assert_eq!(backend.lookup("g1", "contig_7"), RegionDescriptor::found(90, false));
    }

    #[test]
    fn test_from_json_rejects_empty_names() {
        let err = StaticMetadataBackend::from_json_str(r#"{"genomes": {"g1": {"": {"length": 1}}}}"#)
            .unwrap_err();
        assert!(matches!(err, GatewayError::Fixture(_)));

        let err = StaticMetadataBackend::from_json_str(r#"{"genomes": {"": {}}}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Fixture(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = StaticMetadataBackend::from_json_str("{\"genomes\": [").unwrap_err();
        assert!(matches!(err, GatewayError::Json(_)));
    }
}
