//! End-to-end checks of the document store and color picker working together.

use kurbo::Point;
use pagecraft_core::{
    BackgroundKind, ColorPicker, DocumentStore, EditorError, IconAttributes, IconRegistry,
    NewOverlay, OverlayKind, Partition, grid_position, hex_to_hsv, hsv_to_hex,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn mirror_holds(store: &DocumentStore) -> bool {
    match store.selected_text_box() {
        Some(text_box) => store.active_style().matches(&text_box.style),
        None => store.selection().is_none(),
    }
}

#[test]
fn selection_mirror_survives_mixed_operations() {
    let mut store = DocumentStore::new();
    let a = store.create_text_box();
    assert!(mirror_holds(&store));
    store.set_active_font_size(30);
    assert!(mirror_holds(&store));
    let b = store.create_text_box();
    store.set_active_text_color("#00ff00");
    store.toggle_italic();
    assert!(mirror_holds(&store));
    store.select(Some(a));
    assert!(mirror_holds(&store));
    store.set_active_font("Poppins");
    store.select(None);
    store.set_active_font("Lora");
    assert!(mirror_holds(&store));
    store.select(Some(b));
    assert!(mirror_holds(&store));
    store.remove_text_box(b);
    assert!(mirror_holds(&store));

    let a_style = &store.text_box(a).unwrap().style;
    assert_eq!(a_style.font_family, "Poppins");
    assert_eq!(a_style.font_size, 30);
}

#[test]
fn placement_is_per_partition() {
    let mut store = DocumentStore::new();
    let registry = IconRegistry::with_builtin();
    let text = store.create_text_box();
    let icon = store
        .add_icon_overlay(
            &registry,
            IconAttributes {
                name: "Circle".into(),
                size: 32.0,
                stroke_width: 1.5,
                color: "#333333".into(),
                fill: "none".into(),
            },
        )
        .unwrap();
    let image = store.add_overlay(NewOverlay::image("data:image/png;base64,AAAA"));

    for id in [icon, image] {
        assert_eq!(store.overlay(id).unwrap().position, Point::new(40.0, 40.0));
    }
    assert_eq!(store.text_box(text).unwrap().position, Point::new(40.0, 40.0));
    assert_eq!(
        store.next_position(Partition::Overlays(OverlayKind::Icon)),
        grid_position(1)
    );
    assert_eq!(
        store.next_position(Partition::Overlays(OverlayKind::Text)),
        Point::new(40.0, 40.0)
    );
}

#[test]
fn ids_are_unique_across_removals() {
    let mut store = DocumentStore::new();
    let mut seen = HashSet::new();
    for round in 0..25 {
        let id = store.create_text_box();
        assert!(seen.insert(id));
        if round % 2 == 0 {
            store.remove_text_box(id);
        }
    }
}

#[test]
fn color_round_trip_for_saturated_colors() {
    for hex in ["#ff0000", "#12ab34", "#808000", "#0a0b0c", "#fedcba", "#336699"] {
        let hsv = hex_to_hsv(hex).unwrap();
        assert_eq!(hsv_to_hex(hsv.h, hsv.s, hsv.v), hex);
    }
    for hex in ["#000000", "#ffffff", "#777777"] {
        let hsv = hex_to_hsv(hex).unwrap();
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv_to_hex(hsv.h, hsv.s, hsv.v), hex);
    }
}

#[test]
fn picker_drives_store_through_callback() {
    let store = Rc::new(RefCell::new(DocumentStore::new()));
    let id = store.borrow_mut().create_text_box();

    let sink = Rc::clone(&store);
    let mut picker = ColorPicker::new(&store.borrow().active_style().text_color)
        .on_change(move |hex| {
            sink.borrow_mut().set_active_text_color(hex);
        });

    picker.set_hue_from_pointer(0.0, 100.0);
    picker.set_shade_from_pointer(200.0, 0.0, 200.0, 150.0);
    assert_eq!(store.borrow().text_box(id).unwrap().style.text_color, "#ff0000");

    let before = picker.hsv();
    assert!(matches!(picker.set_from_hex("not-a-color"), Err(EditorError::InvalidColor(_))));
    assert_eq!(picker.hsv(), before);
    assert_eq!(store.borrow().text_box(id).unwrap().style.text_color, "#ff0000");
}

#[test]
fn background_switching_keeps_color() {
    let mut store = DocumentStore::new();
    store.set_background(BackgroundKind::Color, "#112233");
    store.set_background(BackgroundKind::Paper, "none");
    assert_eq!(store.background().color, "#112233");
    assert_eq!(store.snapshot().background.background_image, None);
    let color = store.background().color.clone();
    store.set_background(BackgroundKind::Color, &color);
    assert_eq!(store.background().value, "#112233");
}
