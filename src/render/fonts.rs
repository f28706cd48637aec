use std::{path::Path, sync::Arc};

use crate::{
    foundation::error::{PlotError, PlotResult},
    render::style::{FontStrategy, Rgb8},
};

/// An outline font loaded into memory.
#[derive(Clone, Debug)]
pub struct OutlineFont {
    /// Strategy that produced this font.
    pub strategy: FontStrategy,
    /// Family name as reported by the font collection.
    pub family: String,
    /// Raw font file bytes.
    pub bytes: Arc<Vec<u8>>,
    /// Face index within `bytes` (non-zero for collections).
    pub index: u32,
}

/// Result of walking the title font chain.
#[derive(Clone, Debug)]
pub enum TitleFont {
    Outline(OutlineFont),
    /// The bitmap face from [`crate::render::builtin_font`].
    Builtin,
}

impl TitleFont {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    pub fn family(&self) -> &str {
        match self {
            Self::Outline(f) => &f.family,
            Self::Builtin => "builtin 5x7",
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Outline(f) => Some(f.bytes.as_slice()),
            Self::Builtin => None,
        }
    }
}

/// Walk `chain` in order and return the first font that loads.
///
/// Never fails: if every strategy fails the built-in face is returned. A warning is logged
/// when the built-in face is reached after other strategies were tried.
#[tracing::instrument(skip_all, fields(strategies = chain.len()))]
pub fn resolve_title_font(chain: &[FontStrategy]) -> TitleFont {
    let mut probe = FontProbe::default();
    for (i, strategy) in chain.iter().enumerate() {
        match probe.load(strategy) {
            Ok(TitleFont::Builtin) => {
                if i > 0 {
                    tracing::warn!("custom fonts not found, using built-in bitmap font");
                }
                return TitleFont::Builtin;
            }
            Ok(font) => {
                tracing::debug!(%strategy, family = font.family(), "title font resolved");
                return font;
            }
            Err(e) => tracing::debug!(%strategy, error = %e, "font strategy failed"),
        }
    }
    tracing::warn!("no title font strategy succeeded, using built-in bitmap font");
    TitleFont::Builtin
}

/// Lazily-created font context shared by the strategies of one resolution.
#[derive(Default)]
struct FontProbe {
    ctx: Option<parley::FontContext>,
}

impl FontProbe {
    fn ctx(&mut self) -> &mut parley::FontContext {
        self.ctx.get_or_insert_with(parley::FontContext::default)
    }

    fn load(&mut self, strategy: &FontStrategy) -> PlotResult<TitleFont> {
        match strategy {
            FontStrategy::File(path) => self.load_file(path, strategy),
            FontStrategy::Family(name) => self.load_family(name, strategy),
            FontStrategy::Builtin => Ok(TitleFont::Builtin),
        }
    }

    fn load_file(&mut self, path: &Path, strategy: &FontStrategy) -> PlotResult<TitleFont> {
        let bytes = std::fs::read(path).map_err(|e| PlotError::io(path, e))?;
        let collection = &mut self.ctx().collection;
        let families =
            collection.register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let (family_id, fonts) = families.first().ok_or_else(|| {
            PlotError::font(format!("'{}' contains no usable faces", path.display()))
        })?;
        let family = collection
            .family_name(*family_id)
            .ok_or_else(|| PlotError::font("registered font family has no name"))?
            .to_string();
        let index = fonts.first().map(|f| f.index()).unwrap_or(0);

        Ok(TitleFont::Outline(OutlineFont {
            strategy: strategy.clone(),
            family,
            bytes: Arc::new(bytes),
            index,
        }))
    }

    fn load_family(&mut self, name: &str, strategy: &FontStrategy) -> PlotResult<TitleFont> {
        let ctx = self.ctx();
        let family = ctx
            .collection
            .family_by_name(name)
            .ok_or_else(|| PlotError::font(format!("family '{name}' is not installed")))?;
        let font = family
            .default_font()
            .ok_or_else(|| PlotError::font(format!("family '{name}' has no faces")))?;
        let blob = font
            .load(Some(&mut ctx.source_cache))
            .ok_or_else(|| PlotError::font(format!("family '{name}' failed to load")))?;

        Ok(TitleFont::Outline(OutlineFont {
            strategy: strategy.clone(),
            family: family.name().to_string(),
            bytes: Arc::new(blob.data().to_vec()),
            index: font.index(),
        }))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgb8> for TextBrushRgba8 {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Builds single-line Parley layouts for a loaded outline font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape `text` on one line with the given font, size and color.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &OutlineFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> PlotResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PlotError::validation(
                "title font size must be finite and > 0",
            ));
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| PlotError::font("no font families registered from font bytes"))?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PlotError::font("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
