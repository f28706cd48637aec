/// Logical extent of the routing grid, in grid units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub width: u32,
    pub height: u32,
}

impl GridDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A point in grid units. Points are not clipped against [`GridDims`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for GridPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// An ordered polyline from a start terminal to an end terminal.
///
/// Always holds at least two points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Wire {
    points: Vec<GridPoint>,
}

impl Wire {
    /// Returns `None` when fewer than two points are given.
    pub fn new(points: Vec<GridPoint>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self { points })
    }

    /// Pairs up a flat coordinate list (`x0 y0 x1 y1 ...`), dropping an unpaired trailing value.
    pub fn from_coords(coords: &[i64]) -> Option<Self> {
        let points = coords
            .chunks_exact(2)
            .map(|pair| GridPoint::new(pair[0], pair[1]))
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn start(&self) -> GridPoint {
        self.points[0]
    }

    pub fn end(&self) -> GridPoint {
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }
}

/// Wires in file order. Order drives color assignment and draw order.
pub type WireSet = Vec<Wire>;

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
