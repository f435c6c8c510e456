use eframe_sketch::tools::{THIN_MARKER, Tool, ToolPreview, ToolSelector};
use egui::pos2;

fn star_sticker() -> Tool {
    Tool::Sticker {
        glyph: "⭐".to_string(),
        size: 28.0,
    }
}

#[test]
fn test_default_tool_is_thin_marker() {
    let selector = ToolSelector::new();
    assert_eq!(
        selector.current(),
        &Tool::Marker {
            thickness: THIN_MARKER
        }
    );
}

#[test]
fn test_select_replaces_active_tool() {
    let mut selector = ToolSelector::new();
    let before = selector.revision();

    selector.select(star_sticker());

    assert_eq!(selector.current(), &star_sticker());
    assert!(selector.revision() > before);
}

#[test]
fn test_no_preview_without_hover() {
    let selector = ToolSelector::new();
    assert_eq!(selector.preview(), None);
}

#[test]
fn test_preview_follows_hover_position() {
    let mut selector = ToolSelector::new();
    selector.select(Tool::Marker { thickness: 4.0 });

    selector.pointer_moved(pos2(30.0, 40.0));

    assert_eq!(
        selector.preview(),
        Some(ToolPreview::Marker {
            center: pos2(30.0, 40.0),
            thickness: 4.0,
        })
    );
}

#[test]
fn test_switching_tools_while_hovering_updates_preview() {
    let mut selector = ToolSelector::new();
    selector.pointer_moved(pos2(30.0, 40.0));

    // No pointer motion between select and preview: the preview must already
    // reflect the new tool at the remembered position.
    selector.select(star_sticker());

    assert_eq!(
        selector.preview(),
        Some(ToolPreview::Sticker {
            glyph: "⭐".to_string(),
            size: 28.0,
            anchor: pos2(30.0, 40.0),
        })
    );
}

#[test]
fn test_pointer_leave_discards_preview() {
    let mut selector = ToolSelector::new();
    selector.pointer_moved(pos2(30.0, 40.0));

    selector.pointer_left();

    assert_eq!(selector.preview(), None);

    // Leaving again changes nothing and raises no notification.
    let before = selector.revision();
    selector.pointer_left();
    assert_eq!(selector.revision(), before);
}

#[test]
fn test_preview_at_explicit_position() {
    let mut selector = ToolSelector::new();
    selector.select(star_sticker());

    let preview = selector.preview_at(pos2(7.0, 8.0));

    assert_eq!(
        preview,
        ToolPreview::Sticker {
            glyph: "⭐".to_string(),
            size: 28.0,
            anchor: pos2(7.0, 8.0),
        }
    );
}
