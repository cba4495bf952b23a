//! Simulation file loader
//!
//! A simulation file carries one static map and a list of per-tick states:
//!
//! ```json
//! { "map": { "width": 2, "height": 1, "tiles": [0, 1] },
//!   "state": [ { "paused": false, "objects": [], "units": [] } ] }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::terrain::RawTerrainGrid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldObject {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub facing: f32,
    pub velocity: f32,
    pub owner: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickState {
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub objects: Vec<WorldObject>,
    #[serde(default)]
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationFile {
    pub map: RawTerrainGrid,
    pub state: Vec<TickState>,
}

impl SimulationFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read simulation file {}", path.display()))?;
        let file = Self::from_json(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(
            path = %path.display(),
            ticks = file.tick_count(),
            "simulation file loaded"
        );
        Ok(file)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let file: SimulationFile = serde_json::from_str(data)?;
        if file.state.is_empty() {
            bail!("simulation has no tick states");
        }
        Ok(file)
    }

    pub fn map(&self) -> &RawTerrainGrid {
        &self.map
    }

    pub fn tick_count(&self) -> usize {
        self.state.len()
    }

    pub fn max_tick(&self) -> usize {
        self.state.len().saturating_sub(1)
    }

    /// State at `tick`, clamped into the available range.
    pub fn state_at(&self, tick: i64) -> &TickState {
        let clamped = tick.clamp(0, self.max_tick() as i64) as usize;
        if clamped as i64 != tick {
            warn!(requested = tick, used = clamped, "tick out of range, clamped");
        }
        &self.state[clamped]
    }
}
