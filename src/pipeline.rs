use std::{num::NonZeroU32, path::PathBuf};

use crate::{
    foundation::{core::GridDims, error::PlotResult},
    parse::wire_file::read_wire_file,
    render::{
        fonts::{TitleFont, resolve_title_font},
        output::{OutputTarget, write_output},
        render_plot_with_font,
        style::PlotStyle,
    },
};

/// Everything needed to turn a wire file into an image.
#[derive(Clone, Debug)]
pub struct PlotOptions {
    pub input: PathBuf,
    /// `None` previews the image instead of writing it.
    pub output: Option<PathBuf>,
    pub scale: NonZeroU32,
    pub style: PlotStyle,
}

impl PlotOptions {
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output,
            scale: NonZeroU32::new(4).unwrap_or(NonZeroU32::MIN),
            style: PlotStyle::default(),
        }
    }
}

/// What [`plot_file`] produced.
#[derive(Clone, Debug)]
pub struct PlotSummary {
    pub dims: GridDims,
    pub wire_count: usize,
    /// Wire lines dropped while parsing.
    pub skipped_lines: usize,
    pub image_width: u32,
    pub image_height: u32,
    /// Font the title was drawn with.
    pub title_font: TitleFont,
    pub target: OutputTarget,
}

/// Parse, render and write in one go.
///
/// Nothing is written if parsing or rendering fails.
#[tracing::instrument(skip_all, fields(input = %opts.input.display()))]
pub fn plot_file(opts: &PlotOptions) -> PlotResult<PlotSummary> {
    let file = read_wire_file(&opts.input)?;
    let font = resolve_title_font(&opts.style.title_fonts);
    let frame = render_plot_with_font(file.dims, &file.wires, &opts.style, opts.scale, &font)?;
    let target = write_output(&frame, opts.output.as_deref())?;

    Ok(PlotSummary {
        dims: file.dims,
        wire_count: file.wires.len(),
        skipped_lines: file.report.skipped_lines(),
        image_width: frame.width,
        image_height: frame.height,
        title_font: font,
        target,
    })
}
