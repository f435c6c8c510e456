use eframe_sketch::element::{Drawable, DrawableKind, FreehandStroke, StickerStamp, factory};
use egui::{Color32, pos2};

// Run a paint closure inside a frame so text layout has font data.
fn with_painter(paint: impl Fn(&egui::Painter)) {
    let ctx = egui::Context::default();
    let rect = egui::Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
    let _ = ctx.run(Default::default(), |ctx| {
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);
        paint(&painter);
    });
}

#[test]
fn test_stroke_extend_appends_points_in_order() {
    let mut stroke = FreehandStroke::new(vec![pos2(1.0, 1.0)], 2.0, Color32::BLACK);

    stroke.extend(pos2(2.0, 2.0));
    stroke.extend(pos2(3.0, 1.0));

    assert_eq!(
        stroke.points(),
        &[pos2(1.0, 1.0), pos2(2.0, 2.0), pos2(3.0, 1.0)]
    );
    assert_eq!(stroke.thickness(), 2.0);
    assert_eq!(stroke.color(), Color32::BLACK);
}

#[test]
fn test_single_point_stroke_draw_is_a_noop() {
    let stroke = FreehandStroke::new(vec![pos2(1.0, 1.0)], 2.0, Color32::BLACK);

    with_painter(|painter| {
        // Under two points there is nothing to trace; drawing twice must
        // neither panic nor change the model.
        stroke.draw(painter);
        stroke.draw(painter);
    });

    assert_eq!(stroke.points().len(), 1);
}

#[test]
fn test_sticker_extend_replaces_anchor() {
    let mut sticker = StickerStamp::new("🎃", 28.0, pos2(5.0, 5.0));

    sticker.extend(pos2(9.0, 9.0));
    sticker.extend(pos2(12.0, 3.0));

    assert_eq!(sticker.anchor(), pos2(12.0, 3.0));
    assert_eq!(sticker.glyph(), "🎃");
    assert_eq!(sticker.size(), 28.0);
}

#[test]
fn test_drawables_paint_without_mutating() {
    let stroke = FreehandStroke::new(vec![pos2(1.0, 1.0), pos2(8.0, 8.0)], 2.0, Color32::BLACK);
    let sticker = StickerStamp::new("⭐", 28.0, pos2(20.0, 20.0));

    with_painter(|painter| {
        stroke.draw(painter);
        sticker.draw(painter);
    });

    assert_eq!(stroke.points().len(), 2);
    assert_eq!(sticker.anchor(), pos2(20.0, 20.0));
}

#[test]
fn test_factory_seeds_variants() {
    let stroke = factory::create_stroke(pos2(4.0, 4.0), 6.0, Color32::BLACK);
    assert_eq!(stroke.kind(), "stroke");
    match stroke {
        DrawableKind::Stroke(stroke) => assert_eq!(stroke.points(), &[pos2(4.0, 4.0)]),
        other => panic!("expected a stroke, got a {}", other.kind()),
    }

    let sticker = factory::create_sticker("⭐", 28.0, pos2(7.0, 7.0));
    assert_eq!(sticker.kind(), "sticker");
    match sticker {
        DrawableKind::Sticker(sticker) => assert_eq!(sticker.anchor(), pos2(7.0, 7.0)),
        other => panic!("expected a sticker, got a {}", other.kind()),
    }
}
