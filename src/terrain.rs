//! Raw per-cell terrain as delivered by the simulation loader.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawTerrain {
    Water,
    Land,
    Dirt,
    Rock,
}

impl RawTerrain {
    pub const ALL: [RawTerrain; 4] = [
        RawTerrain::Water,
        RawTerrain::Land,
        RawTerrain::Dirt,
        RawTerrain::Rock,
    ];

    /// Decode a wire terrain code. Only 0..=3 are defined.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(RawTerrain::Water),
            1 => Some(RawTerrain::Land),
            2 => Some(RawTerrain::Dirt),
            3 => Some(RawTerrain::Rock),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            RawTerrain::Water => 0,
            RawTerrain::Land => 1,
            RawTerrain::Dirt => 2,
            RawTerrain::Rock => 3,
        }
    }

    pub fn is_water(self) -> bool {
        self == RawTerrain::Water
    }
}

/// Unvalidated terrain grid in its wire form. Dimensions and codes are kept
/// as signed integers so that bad input surfaces as a `MalformedMap` from the
/// transformer rather than as a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTerrainGrid {
    pub width: i64,
    pub height: i64,
    pub tiles: Vec<i64>,
}

impl RawTerrainGrid {
    pub fn new(width: i64, height: i64, tiles: Vec<i64>) -> Self {
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Parse rows of glyphs (`~` water, `#` land, `.` dirt, `^` rock).
    /// Unknown glyphs become an out-of-range code so validation rejects them.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i64;
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0) as i64;
        let tiles = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|glyph| match glyph {
                '~' => 0,
                '#' => 1,
                '.' => 2,
                '^' => 3,
                _ => -1,
            })
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }
}
