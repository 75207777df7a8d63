//! WASM bindings for browser scene integration
//!
//! Exposes the classifier to JavaScript so the render loop can gate player
//! movement without shipping the scene data back and forth every tick. Region
//! lists are passed once as JSON in the original scene-data shape.

use wasm_bindgen::prelude::*;

use crate::region_set::RegionSet;

/// Walkable-area map handle held by the browser scene
#[wasm_bindgen]
pub struct WalkMap {
    regions: RegionSet,
}

#[wasm_bindgen]
impl WalkMap {
    /// Create an empty map that rejects every point
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            regions: RegionSet::default(),
        }
    }

    /// Build a map from a JSON array of region descriptors
    ///
    /// Accepts the `type`-tagged shape used by the scene setup code, e.g.
    /// `[{ "type": "line", "x1": 0, "y1": 0, "x2": 0, "y2": -62.8 }]`.
    /// Unrecognized region types load as inert entries.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WalkMap, JsError> {
        let regions: RegionSet = serde_json::from_str(json)?;
        Ok(Self { regions })
    }

    /// Check if a world-space point is walkable
    #[wasm_bindgen(js_name = isWalkable)]
    pub fn is_walkable(&self, x: f32, y: f32) -> bool {
        self.regions.is_walkable((x, y).into())
    }

    /// Number of regions in the active set
    #[wasm_bindgen(js_name = regionCount)]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

impl Default for WalkMap {
    fn default() -> Self {
        Self::new()
    }
}
