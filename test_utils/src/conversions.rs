//! Conversion helpers for test coordinate newtypes.
//! Centralises `From` implementations enabling literal usage in tests.

use glam::{Vec2, Vec3};

use crate::steering::{Coords2D, Coords3D};

impl From<(f32, f32)> for Coords2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Coords2D {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Coords2D> for Vec2 {
    fn from(coords: Coords2D) -> Self {
        Self::new(coords.x, coords.y)
    }
}

impl From<(f32, f32, f32)> for Coords3D {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

impl From<(f32, f32)> for Coords3D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl From<Coords3D> for Vec3 {
    fn from(coords: Coords3D) -> Self {
        Self::new(coords.x, coords.y, coords.z)
    }
}
