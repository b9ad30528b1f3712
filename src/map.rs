//! Terrain grid consulted by the neighbourhood sampler.
//!
//! The steering core only needs two questions answered: is a point on the
//! map, and what occupies a given tile. [`TerrainMap`] captures exactly that;
//! [`TileMap`] is the grid used by the simulation driver and the tests.
//! Tiles are unit squares with tile `(x, y)` spanning `[x, x + 1) × [y, y + 1)`.
use glam::Vec2;
use hashbrown::HashSet;

use crate::error::MapError;
use crate::geometry::BoundingShape;
use crate::numeric::floor_to_i32;

/// Integer tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileCoord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl TileCoord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The tile containing `point`.
    #[must_use]
    pub fn containing(point: Vec2) -> Self {
        Self::new(floor_to_i32(point.x), floor_to_i32(point.y))
    }

    /// This coordinate shifted by the given tile offsets.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Terrain classification of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terrain {
    /// Walkable ground.
    #[default]
    Ground,
    /// Impassable cliff.
    Cliff,
}

/// A single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Where the tile sits on the grid.
    pub coord: TileCoord,
    /// What the tile is made of.
    pub terrain: Terrain,
}

impl Tile {
    /// Whether ground movers must steer around this tile.
    #[must_use]
    pub const fn is_impassable(&self) -> bool {
        matches!(self.terrain, Terrain::Cliff)
    }

    /// The unit square covered by the tile.
    #[must_use]
    pub fn bounds(&self) -> BoundingShape {
        let min = Vec2::new(self.coord.x as f32, self.coord.y as f32);
        BoundingShape::aabb(min, min + Vec2::ONE)
    }
}

/// Read-only view of the terrain.
#[cfg_attr(test, mockall::automock)]
pub trait TerrainMap {
    /// Whether `point` lies on the map.
    fn contains(&self, point: Vec2) -> bool;

    /// The tile at `coord`, or `None` outside the map.
    fn tile(&self, coord: TileCoord) -> Option<Tile>;
}

/// Rectangular grid of unit tiles with a sparse set of cliffs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMap {
    width: i32,
    height: i32,
    cliffs: HashSet<TileCoord>,
}

impl TileMap {
    /// An all-ground map of `width × height` tiles.
    #[must_use]
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            cliffs: HashSet::new(),
        }
    }

    /// Parses a map drawn as text, `.` for ground and `#` for cliffs.
    ///
    /// The first line is the top row, so the last line holds `y = 0`.
    /// Surrounding blank lines and per-line indentation are ignored.
    ///
    /// # Errors
    /// Returns [`MapError`] for empty input, rows of unequal width, unknown
    /// glyphs or dimensions beyond `i32`.
    ///
    /// # Examples
    /// ```
    /// use sidestep::map::{TerrainMap, TileCoord, TileMap};
    /// let map = TileMap::from_ascii("
    ///     #..
    ///     ...
    /// ").unwrap();
    /// assert_eq!((map.width(), map.height()), (3, 2));
    /// assert!(map.tile(TileCoord::new(0, 1)).unwrap().is_impassable());
    /// ```
    pub fn from_ascii(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let expected = rows.first().ok_or(MapError::Empty)?.chars().count();
        let height = i32::try_from(rows.len()).map_err(|_| MapError::TooLarge(rows.len()))?;
        let width = i32::try_from(expected).map_err(|_| MapError::TooLarge(expected))?;

        let mut map = Self::open(width, height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(MapError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            // Both indices are bounded by the dimensions checked above.
            let y = height - 1 - i32::try_from(row).map_err(|_| MapError::TooLarge(row))?;
            for (column, glyph) in line.chars().enumerate() {
                let x = i32::try_from(column).map_err(|_| MapError::TooLarge(column))?;
                match glyph {
                    '.' => {}
                    '#' => map.set_cliff(TileCoord::new(x, y)),
                    _ => return Err(MapError::UnknownGlyph { glyph, column, row }),
                }
            }
        }
        Ok(map)
    }

    /// Marks a tile as cliff. Coordinates off the map are ignored.
    pub fn set_cliff(&mut self, coord: TileCoord) {
        if self.in_grid(coord) {
            self.cliffs.insert(coord);
        }
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Number of cliff tiles.
    #[must_use]
    pub fn cliff_count(&self) -> usize {
        self.cliffs.len()
    }

    const fn in_grid(&self, coord: TileCoord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }
}

impl TerrainMap for TileMap {
    fn contains(&self, point: Vec2) -> bool {
        point.is_finite()
            && point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f32
            && point.y < self.height as f32
    }

    fn tile(&self, coord: TileCoord) -> Option<Tile> {
        if !self.in_grid(coord) {
            return None;
        }
        let terrain = if self.cliffs.contains(&coord) {
            Terrain::Cliff
        } else {
            Terrain::Ground
        };
        Some(Tile { coord, terrain })
    }
}
