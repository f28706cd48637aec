//! wireplot renders routed wires on a 2D grid to a raster image.
//!
//! # Pipeline
//!
//! 1. **Parse**: a whitespace-delimited text file becomes [`GridDims`] plus an ordered
//!    [`WireSet`] ([`read_wire_file`], [`parse_wire_text`]).
//! 2. **Render**: [`render_plot`] maps grid points to pixels ([`PlotLayout`]) and draws the
//!    background, title, border and wires onto a CPU canvas, producing a [`PlotFrame`].
//! 3. **Write**: [`write_output`] encodes the frame by file extension, or previews it.
//!
//! [`plot_file`] runs all three steps.
//!
//! The dimension line of the input is mandatory and errors there are fatal. Individual wire
//! lines are best-effort and skipped when malformed. Title fonts come from an ordered
//! fallback chain ([`FontStrategy`]) that always ends in a built-in bitmap face.
#![forbid(unsafe_code)]

mod foundation;
mod parse;
mod pipeline;
mod render;

pub use foundation::core::{GridDims, GridPoint, Wire, WireSet};
pub use foundation::error::{PlotError, PlotResult};
pub use parse::wire_file::{ParseReport, WireFile, parse_wire_text, read_wire_file};
pub use pipeline::{PlotOptions, PlotSummary, plot_file};
pub use render::cpu::PlotFrame;
pub use render::fonts::{OutlineFont, TitleFont, resolve_title_font};
pub use render::layout::{PixelPoint, PlotLayout};
pub use render::output::{OutputTarget, ensure_parent_dir, save_frame, show_frame, write_output};
pub use render::style::{DEFAULT_PALETTE, FontStrategy, PlotStyle, Rgb8};
pub use render::{render_plot, render_plot_with_font, title_text};
