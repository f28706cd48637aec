use std::num::NonZeroU32;

use crate::{
    foundation::{
        core::{GridDims, GridPoint, Wire},
        error::{PlotError, PlotResult},
    },
    render::style::PlotStyle,
};

/// Integer pixel coordinate on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Center of the pixel in continuous canvas space.
    pub fn center(self) -> kurbo::Point {
        kurbo::Point::new(self.x as f64 + 0.5, self.y as f64 + 0.5)
    }
}

/// Pixel geometry of a plot: canvas size, grid origin and stroke sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotLayout {
    /// Pixels per grid unit.
    pub scale: u32,
    pub area_width: u32,
    pub area_height: u32,
    pub image_width: u32,
    pub image_height: u32,
    /// Top-left corner of the drawable area.
    pub origin: PixelPoint,
    pub border_thickness: u32,
    pub line_width: u32,
    pub dot_radius: u32,
}

/// Largest canvas edge the raster backend accepts.
pub const MAX_CANVAS_EDGE: u64 = u16::MAX as u64;

/// Largest pixel coordinate magnitude handed to the rasterizer.
pub const MAX_DRAW_COORD: u64 = 1 << 40;

impl PlotLayout {
    pub fn new(dims: GridDims, scale: NonZeroU32, style: &PlotStyle) -> PlotResult<Self> {
        let scale = scale.get();
        let area_w = u64::from(dims.width) * u64::from(scale);
        let area_h = u64::from(dims.height) * u64::from(scale);
        let margin = u64::from(style.margin);
        let img_w = area_w + 2 * margin;
        let img_h = area_h + 2 * margin + u64::from(style.title_band);

        if img_w == 0 || img_h == 0 {
            return Err(PlotError::validation(format!(
                "canvas {img_w}x{img_h} has no area"
            )));
        }
        if img_w > MAX_CANVAS_EDGE || img_h > MAX_CANVAS_EDGE {
            return Err(PlotError::CanvasTooLarge {
                width: img_w,
                height: img_h,
            });
        }

        let line_width = (scale / 2).max(1);
        Ok(Self {
            scale,
            area_width: area_w as u32,
            area_height: area_h as u32,
            image_width: img_w as u32,
            image_height: img_h as u32,
            origin: PixelPoint::new(
                i64::from(style.margin),
                i64::from(style.title_band) + i64::from(style.margin),
            ),
            border_thickness: style.border_thickness,
            line_width,
            dot_radius: line_width + 1,
        })
    }

    /// Map a grid point to the pixel at the center of its cell.
    ///
    /// Points far outside the grid saturate at the `i64` range instead of overflowing.
    pub fn to_pixel(&self, p: GridPoint) -> PixelPoint {
        let s = i128::from(self.scale);
        let half = s / 2;
        let axis = |v: i64, origin: i64| -> i64 {
            let px = i128::from(v) * s + half + i128::from(origin);
            px.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
        };
        PixelPoint::new(axis(p.x, self.origin.x), axis(p.y, self.origin.y))
    }

    /// Whether every point is within [`MAX_DRAW_COORD`] of the canvas origin on both axes.
    pub fn is_drawable(points: &[PixelPoint]) -> bool {
        points
            .iter()
            .all(|p| p.x.unsigned_abs() <= MAX_DRAW_COORD && p.y.unsigned_abs() <= MAX_DRAW_COORD)
    }

    pub fn map_wire(&self, wire: &Wire) -> Vec<PixelPoint> {
        wire.points().iter().map(|&p| self.to_pixel(p)).collect()
    }

    /// Polyline through the pixel centers of `points`.
    pub fn wire_path(points: &[PixelPoint]) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path.move_to(first.center());
            for p in iter {
                path.line_to(p.center());
            }
        }
        path
    }

    /// Filled disc covering the endpoint dot around `p`.
    pub fn dot_circle(&self, p: PixelPoint) -> kurbo::Circle {
        kurbo::Circle::new(p.center(), f64::from(self.dot_radius) + 0.5)
    }

    /// Outer bounds of the border ring, in inclusive pixel coordinates.
    pub fn border_bounds(&self) -> (PixelPoint, PixelPoint) {
        let t = i64::from(self.border_thickness);
        let o = self.origin;
        (
            PixelPoint::new(o.x - t, o.y - t),
            PixelPoint::new(
                o.x + i64::from(self.area_width) + t,
                o.y + i64::from(self.area_height) + t,
            ),
        )
    }

    /// The border ring as four non-overlapping bands (top, bottom, left, right).
    ///
    /// The ring is `border_thickness` pixels wide measured inward from [`Self::border_bounds`].
    pub fn border_rects(&self) -> [kurbo::Rect; 4] {
        let t = f64::from(self.border_thickness);
        let (outer_min, outer_max) = self.border_bounds();
        let x0 = outer_min.x as f64;
        let y0 = outer_min.y as f64;
        let x1 = outer_max.x as f64 + 1.0;
        let y1 = outer_max.y as f64 + 1.0;
        [
            kurbo::Rect::new(x0, y0, x1, y0 + t),
            kurbo::Rect::new(x0, y1 - t, x1, y1),
            kurbo::Rect::new(x0, y0 + t, x0 + t, y1 - t),
            kurbo::Rect::new(x1 - t, y0 + t, x1, y1 - t),
        ]
    }

    /// Position of the title's top-left corner.
    pub fn title_anchor(&self, style: &PlotStyle) -> PixelPoint {
        PixelPoint::new(i64::from(style.margin), i64::from(style.margin))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
