//! Ordered region collections and the walkability query
//!
//! A [`RegionSet`] holds all walkable geometry for one room. Sets are built
//! once by scene-setup code and replaced wholesale on room transitions; the
//! classifier never mutates them.

use serde::{Deserialize, Serialize};

use crate::point::WalkPoint;
use crate::region::Region;

/// Ordered collection of walkable regions for one room
///
/// Membership is the union over all regions, so region order never changes a
/// query result, only how early the scan can stop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    /// Create a region set from a list of regions
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// The regions in scan order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions in the set
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True when the set contains no regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Check if a point lies inside at least one region
    ///
    /// Linear scan with short-circuit on the first match. Total over finite
    /// inputs; an empty set rejects every point.
    pub fn is_walkable(&self, p: WalkPoint) -> bool {
        self.regions.iter().any(|region| region.contains(p))
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        Self::new(regions)
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
