use super::*;

#[test]
fn builtin_only_chain_resolves_to_builtin() {
    let font = resolve_title_font(&[FontStrategy::Builtin]);
    assert!(font.is_builtin());
    assert!(font.bytes().is_none());
}

#[test]
fn empty_chain_falls_back_to_builtin() {
    assert!(resolve_title_font(&[]).is_builtin());
}

#[test]
fn failing_strategies_fall_through() {
    let chain = [
        FontStrategy::File("target/no/such/font.ttf".into()),
        FontStrategy::Family("No Such Family 7f3a91".to_string()),
        FontStrategy::Builtin,
    ];
    assert!(resolve_title_font(&chain).is_builtin());
}

#[test]
fn garbage_font_file_is_rejected() {
    let dir = std::path::PathBuf::from("target").join("fonts_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("not_a_font.ttf");
    std::fs::write(&path, b"definitely not sfnt data").unwrap();

    let mut probe = FontProbe::default();
    let strategy = FontStrategy::File(path.clone());
    assert!(probe.load(&strategy).is_err());
    assert!(resolve_title_font(&[strategy]).is_builtin());
}

#[test]
fn missing_font_file_reports_io_error() {
    let mut probe = FontProbe::default();
    let err = probe
        .load(&FontStrategy::File("target/no/such/font.ttf".into()))
        .unwrap_err();
    assert!(matches!(err, PlotError::Io { .. }));
}

#[test]
fn brush_from_rgb_is_opaque() {
    let b = TextBrushRgba8::from(Rgb8::new(1, 2, 3));
    assert_eq!(b, TextBrushRgba8 { r: 1, g: 2, b: 3, a: 255 });
}

#[test]
fn font_file_resolves_to_outline() {
    let path = std::path::PathBuf::from("tests/data/fonts/DejaVuSansMono.ttf");
    let font = resolve_title_font(&[FontStrategy::File(path.clone()), FontStrategy::Builtin]);
    let TitleFont::Outline(outline) = font else {
        panic!("expected an outline font from {}", path.display());
    };
    assert_eq!(outline.strategy, FontStrategy::File(path));
    assert!(outline.family.contains("DejaVu"));
    assert!(!outline.bytes.is_empty());

    let layout = TextLayoutEngine::new()
        .layout_line("Wire Routing", &outline, 40.0, Rgb8::BLACK.into())
        .unwrap();
    assert!(layout.width() > 0.0);
    assert!(layout.height() > 0.0);
}
