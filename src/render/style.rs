use std::path::PathBuf;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Wire colors, assigned cyclically by wire index.
pub const DEFAULT_PALETTE: [Rgb8; 9] = [
    Rgb8::new(0, 0, 255),
    Rgb8::new(0, 0, 0),
    Rgb8::new(0, 128, 0),
    Rgb8::new(255, 0, 0),
    Rgb8::new(0, 255, 255),
    Rgb8::new(255, 0, 255),
    Rgb8::new(90, 200, 90),
    Rgb8::new(187, 92, 80),
    Rgb8::new(90, 88, 177),
];

/// One step of the title font fallback chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontStrategy {
    /// Load a font file from disk.
    File(PathBuf),
    /// Look up an installed font family by name.
    Family(String),
    /// The bitmap face compiled into the crate. Never fails.
    Builtin,
}

impl std::fmt::Display for FontStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "file '{}'", p.display()),
            Self::Family(name) => write!(f, "family '{name}'"),
            Self::Builtin => f.write_str("builtin"),
        }
    }
}

/// Visual constants for a plot.
///
/// Passed explicitly to the renderer; nothing here is global.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotStyle {
    pub background: Rgb8,
    pub border: Rgb8,
    /// Fill for the start/end terminal dots.
    pub endpoint: Rgb8,
    pub title_color: Rgb8,
    pub palette: Vec<Rgb8>,
    pub title_font_size: f32,
    /// Height of the band above the grid area reserved for the title.
    pub title_band: u32,
    /// Space around the grid area on every side.
    pub margin: u32,
    pub border_thickness: u32,
    /// Tried in order; the first strategy that yields a font wins.
    pub title_fonts: Vec<FontStrategy>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: Rgb8::WHITE,
            border: Rgb8::new(0, 128, 0),
            endpoint: Rgb8::BLACK,
            title_color: Rgb8::BLACK,
            palette: DEFAULT_PALETTE.to_vec(),
            title_font_size: 40.0,
            title_band: 80,
            margin: 20,
            border_thickness: 5,
            title_fonts: vec![
                FontStrategy::Family("Arial".to_string()),
                FontStrategy::Family("DejaVu Sans".to_string()),
                FontStrategy::Builtin,
            ],
        }
    }
}

impl PlotStyle {
    /// Color for the wire at `index`. Falls back to black for an empty palette.
    pub fn wire_color(&self, index: usize) -> Rgb8 {
        if self.palette.is_empty() {
            return Rgb8::BLACK;
        }
        self.palette[index % self.palette.len()]
    }

    /// Put a font file at the front of the title font chain.
    pub fn with_title_font_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.title_fonts.insert(0, FontStrategy::File(path.into()));
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
