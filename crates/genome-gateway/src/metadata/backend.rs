//! Metadata backend trait and types.

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the backend knows about one named region of a genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDescriptor {
    /// Whether the region exists in the genome.
    pub exists: bool,
    /// Region length in bases (0 when the region does not exist).
    pub length: u64,
    /// Whether the region is a whole chromosome.
    pub is_chromosomal: bool,
}

impl RegionDescriptor {
    /// Descriptor for an existing region.
    pub fn found(length: u64, is_chromosomal: bool) -> Self {
        Self {
            exists: true,
            length,
            is_chromosomal,
        }
    }

    /// Descriptor for a region the backend does not know.
    pub fn missing() -> Self {
        Self {
            exists: false,
            length: 0,
            is_chromosomal: false,
        }
    }

    /// Kind of the region, if it exists.
    pub fn kind(&self) -> Option<RegionKind> {
        self.exists.then(|| RegionKind::from_chromosomal(self.is_chromosomal))
    }
}

/// Whether an existing region is a whole chromosome or another fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    Chromosome,
    NonChromosome,
}

impl RegionKind {
    pub fn from_chromosomal(is_chromosomal: bool) -> Self {
        if is_chromosomal {
            RegionKind::Chromosome
        } else {
            RegionKind::NonChromosome
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RegionKind::Chromosome => "chromosome",
            RegionKind::NonChromosome => "non-chromosome",
        }
    }
}

/// Trait for genome metadata backends.
///
/// Implementations must be thread-safe (Send + Sync) so one backend can serve
/// concurrent validations.
pub trait MetadataBackend: Send + Sync {
    /// Describe a named region of a genome.
    ///
    /// An unknown region is reported as `Ok` with `exists == false`. Transport
    /// and protocol failures are reported as `Err`; callers that only need to
    /// know whether the region is usable treat both the same way.
    ///
    /// # Arguments
    /// * `genome_id` - Opaque identifier of the genome assembly
    /// * `region_name` - Name of the region, e.g. `"1"` or `"X"`
    fn describe_region(
        &self,
        genome_id: &str,
        region_name: &str,
    ) -> impl Future<Output = Result<RegionDescriptor>> + Send;

    /// Get the name of this backend (for logging/debugging).
    fn name(&self) -> &str;
}

impl<B: MetadataBackend> MetadataBackend for Arc<B> {
    fn describe_region(
        &self,
        genome_id: &str,
        region_name: &str,
    ) -> impl Future<Output = Result<RegionDescriptor>> + Send {
        (**self).describe_region(genome_id, region_name)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_descriptor_has_no_kind() {
        assert_eq!(RegionDescriptor::missing().kind(), None);
    }

    #[test]
    fn test_found_descriptor_kind() {
        assert_eq!(
            RegionDescriptor::found(2000, true).kind(),
            Some(RegionKind::Chromosome)
        );
        assert_eq!(
            RegionDescriptor::found(2000, false).kind(),
            Some(RegionKind::NonChromosome)
        );
    }

    #[test]
    fn test_region_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&RegionKind::NonChromosome).unwrap();
        assert_eq!(json, "\"non-chromosome\"");
    }
}
