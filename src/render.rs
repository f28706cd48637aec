pub(crate) mod builtin_font;
pub(crate) mod cpu;
pub(crate) mod fonts;
pub(crate) mod layout;
pub(crate) mod output;
pub(crate) mod style;

use std::num::NonZeroU32;

use crate::{
    foundation::{
        core::{GridDims, Wire},
        error::PlotResult,
    },
    render::{
        cpu::{CpuCanvas, PlotFrame},
        fonts::{TextLayoutEngine, TitleFont, resolve_title_font},
        layout::{PixelPoint, PlotLayout},
        style::PlotStyle,
    },
};

/// Title line shown above the grid.
pub fn title_text(dims: GridDims, wire_count: usize) -> String {
    format!(
        "Wire Routing: {}x{} Grid, {} Wires",
        dims.width, dims.height, wire_count
    )
}

/// Render a plot, resolving the title font from `style.title_fonts`.
pub fn render_plot(
    dims: GridDims,
    wires: &[Wire],
    style: &PlotStyle,
    scale: NonZeroU32,
) -> PlotResult<PlotFrame> {
    let font = resolve_title_font(&style.title_fonts);
    render_plot_with_font(dims, wires, style, scale, &font)
}

/// Render a plot with an already-resolved title font.
///
/// Draw order: background, title, border, then wires in order (each wire's path followed by
/// its two terminal dots).
#[tracing::instrument(skip_all, fields(wires = wires.len(), scale = scale.get()))]
pub fn render_plot_with_font(
    dims: GridDims,
    wires: &[Wire],
    style: &PlotStyle,
    scale: NonZeroU32,
    font: &TitleFont,
) -> PlotResult<PlotFrame> {
    let layout = PlotLayout::new(dims, scale, style)?;
    tracing::info!(
        width = layout.image_width,
        height = layout.image_height,
        "creating image"
    );

    let mut canvas = CpuCanvas::new(&layout)?;
    canvas.fill_background(style.background);

    let title = title_text(dims, wires.len());
    draw_title(&mut canvas, &title, layout.title_anchor(style), style, font);

    for band in layout.border_rects() {
        canvas.fill_rect(band, style.border);
    }

    tracing::info!(count = wires.len(), "drawing wires");
    let line_width = f64::from(layout.line_width);
    for (i, wire) in wires.iter().enumerate() {
        let points = layout.map_wire(wire);
        if !PlotLayout::is_drawable(&points) {
            tracing::warn!(wire = i, "wire lies too far outside the canvas, skipping");
            continue;
        }
        canvas.stroke_polyline(&PlotLayout::wire_path(&points), line_width, style.wire_color(i));
        canvas.fill_circle(
            layout.dot_circle(layout.to_pixel(wire.start())),
            style.endpoint,
        );
        canvas.fill_circle(layout.dot_circle(layout.to_pixel(wire.end())), style.endpoint);
    }

    Ok(canvas.finish())
}

fn draw_title(
    canvas: &mut CpuCanvas,
    text: &str,
    anchor: PixelPoint,
    style: &PlotStyle,
    font: &TitleFont,
) {
    if let TitleFont::Outline(outline) = font {
        let mut engine = TextLayoutEngine::new();
        match engine.layout_line(
            text,
            outline,
            style.title_font_size,
            style.title_color.into(),
        ) {
            Ok(layout) => {
                canvas.draw_text_layout(&layout, outline, anchor);
                return;
            }
            Err(e) => {
                tracing::warn!(family = %outline.family, error = %e, "title layout failed, using built-in font");
            }
        }
    }

    let dot = builtin_font::dot_size(style.title_font_size);
    canvas.draw_bitmap_text(text, dot, anchor, style.title_color);
}

#[cfg(test)]
#[path = "../tests/unit/render/mod.rs"]
mod tests;
