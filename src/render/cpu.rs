use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::error::{PlotError, PlotResult},
    render::{
        builtin_font,
        fonts::{OutlineFont, TextBrushRgba8},
        layout::{PixelPoint, PlotLayout},
        style::Rgb8,
    },
};

/// A rendered plot as straight (non-premultiplied) RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PlotFrame {
    /// RGBA value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Drop the alpha channel. The canvas background is opaque, so nothing is lost.
    pub fn to_rgb_image(&self) -> PlotResult<image::RgbImage> {
        let rgb: Vec<u8> = self
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        image::RgbImage::from_raw(self.width, self.height, rgb)
            .ok_or_else(|| PlotError::validation("frame byte length does not match its size"))
    }
}

/// Single-use raster canvas. Draw calls composite in call order.
pub(crate) struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuCanvas {
    pub(crate) fn new(layout: &PlotLayout) -> PlotResult<Self> {
        let too_large = || PlotError::CanvasTooLarge {
            width: u64::from(layout.image_width),
            height: u64::from(layout.image_height),
        };
        let width: u16 = layout.image_width.try_into().map_err(|_| too_large())?;
        let height: u16 = layout.image_height.try_into().map_err(|_| too_large())?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    fn set_color(&mut self, c: Rgb8) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
    }

    pub(crate) fn fill_background(&mut self, c: Rgb8) {
        let full = kurbo::Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        self.fill_rect(full, c);
    }

    pub(crate) fn fill_rect(&mut self, r: kurbo::Rect, c: Rgb8) {
        if r.width() <= 0.0 || r.height() <= 0.0 {
            return;
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(c);
        self.ctx.fill_rect(&rect_to_cpu(r));
    }

    /// Stroke an open polyline with round joins and butt caps.
    pub(crate) fn stroke_polyline(&mut self, path: &kurbo::BezPath, width: f64, c: Rgb8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(c);
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width)
                .with_join(vello_cpu::kurbo::Join::Round)
                .with_caps(vello_cpu::kurbo::Cap::Butt),
        );
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    pub(crate) fn fill_circle(&mut self, circle: kurbo::Circle, c: Rgb8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(c);
        let cpu_circle = vello_cpu::kurbo::Circle::new(point_to_cpu(circle.center), circle.radius);
        self.ctx.fill_path(&cpu_circle.to_path(0.1));
    }

    /// Draw a shaped Parley layout with its top-left corner at `origin`.
    pub(crate) fn draw_text_layout(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        font: &OutlineFont,
        origin: PixelPoint,
    ) {
        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            font.index,
        );
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((
                origin.x as f64,
                origin.y as f64,
            )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    /// Draw `text` with the built-in bitmap face, each dot `dot` pixels square.
    pub(crate) fn draw_bitmap_text(&mut self, text: &str, dot: u32, origin: PixelPoint, c: Rgb8) {
        let d = f64::from(dot);
        for (col, row) in builtin_font::lit_cells(text) {
            let x = origin.x as f64 + f64::from(col) * d;
            let y = origin.y as f64 + f64::from(row) * d;
            self.fill_rect(kurbo::Rect::new(x, y, x + d, y + d), c);
        }
    }

    pub(crate) fn finish(mut self) -> PlotFrame {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        let data = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .flat_map(|px| unpremul_rgba8(px[0], px[1], px[2], px[3]))
            .collect();

        PlotFrame {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
        }
    }
}

fn unpremul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    match a {
        0 => [0, 0, 0, 0],
        255 => [r, g, b, a],
        _ => {
            let un = |c: u8| -> u8 {
                ((u16::from(c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8
            };
            [un(r), un(g), un(b), a]
        }
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
