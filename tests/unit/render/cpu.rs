use std::num::NonZeroU32;

use super::*;
use crate::{foundation::core::GridDims, render::style::PlotStyle};

fn small_canvas() -> (CpuCanvas, PlotLayout) {
    let style = PlotStyle::default();
    let layout =
        PlotLayout::new(GridDims::new(10, 10), NonZeroU32::new(4).unwrap(), &style).unwrap();
    (CpuCanvas::new(&layout).unwrap(), layout)
}

#[test]
fn background_covers_every_pixel() {
    let (mut canvas, layout) = small_canvas();
    canvas.fill_background(Rgb8::new(10, 20, 30));
    let frame = canvas.finish();
    assert_eq!(frame.width, layout.image_width);
    assert_eq!(frame.height, layout.image_height);
    assert_eq!(frame.data.len(), (frame.width * frame.height * 4) as usize);
    assert!(frame.data.chunks_exact(4).all(|px| px == [10, 20, 30, 255]));
}

#[test]
fn later_draws_overwrite_earlier_ones() {
    let (mut canvas, _) = small_canvas();
    canvas.fill_background(Rgb8::WHITE);
    canvas.fill_rect(kurbo::Rect::new(4.0, 4.0, 12.0, 12.0), Rgb8::new(255, 0, 0));
    canvas.fill_rect(kurbo::Rect::new(8.0, 8.0, 12.0, 12.0), Rgb8::new(0, 0, 255));
    let frame = canvas.finish();
    assert_eq!(frame.pixel(5, 5), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(9, 9), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(2, 2), Some([255, 255, 255, 255]));
}

#[test]
fn polyline_and_circle_paint_their_centers() {
    let (mut canvas, _) = small_canvas();
    canvas.fill_background(Rgb8::WHITE);
    let path = PlotLayout::wire_path(&[
        PixelPoint::new(5, 30),
        PixelPoint::new(35, 30),
        PixelPoint::new(35, 60),
    ]);
    canvas.stroke_polyline(&path, 4.0, Rgb8::new(0, 128, 0));
    canvas.fill_circle(
        kurbo::Circle::new(kurbo::Point::new(5.5, 30.5), 3.5),
        Rgb8::BLACK,
    );
    let frame = canvas.finish();
    assert_eq!(frame.pixel(20, 30), Some([0, 128, 0, 255]));
    assert_eq!(frame.pixel(35, 45), Some([0, 128, 0, 255]));
    assert_eq!(frame.pixel(5, 30), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(20, 40), Some([255, 255, 255, 255]));
}

#[test]
fn bitmap_text_lights_pixels_in_its_band() {
    let (mut canvas, _) = small_canvas();
    canvas.fill_background(Rgb8::WHITE);
    canvas.draw_bitmap_text("|", 2, PixelPoint::new(0, 0), Rgb8::BLACK);
    let frame = canvas.finish();
    // '|' is a full-height bar in the middle column.
    assert_eq!(frame.pixel(4, 0), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(5, 13), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(4, 14), Some([255, 255, 255, 255]));
}

#[test]
fn pixel_outside_frame_is_none() {
    let (canvas, layout) = small_canvas();
    let frame = canvas.finish();
    assert!(frame.pixel(layout.image_width, 0).is_none());
    assert!(frame.pixel(0, layout.image_height).is_none());
}

#[test]
fn rgb_image_keeps_size() {
    let (mut canvas, layout) = small_canvas();
    canvas.fill_background(Rgb8::new(1, 2, 3));
    let img = canvas.finish().to_rgb_image().unwrap();
    assert_eq!(img.dimensions(), (layout.image_width, layout.image_height));
    assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3]);
}

#[test]
fn unpremul_restores_straight_color() {
    assert_eq!(unpremul_rgba8(0, 0, 0, 0), [0, 0, 0, 0]);
    assert_eq!(unpremul_rgba8(9, 8, 7, 255), [9, 8, 7, 255]);
    assert_eq!(unpremul_rgba8(64, 0, 128, 128), [128, 0, 255, 128]);
}
