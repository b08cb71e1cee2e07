mod common;

use labelforge::{Error, Size};

// The 60mm area loses the default 0.4mm margin on each side before being
// split, so three slots are (60 - 0.8) / 3 mm wide with the outer centers
// at +/- that width.
const SLOT: f32 = (60.0 - 0.8) / 3.0;

#[test]
fn labels_land_centered_in_their_slots() {
    let renderer = common::renderer();
    let result = renderer
        .render_divided(&["A", "B", "C"], Size::new(60.0, 10.0), 3)
        .unwrap();

    assert_eq!(result.elements.len(), 3);
    assert!((result.elements[0].x + SLOT).abs() < 1e-4);
    assert!(result.elements[1].x.abs() < 1e-4);
    assert!((result.elements[2].x - SLOT).abs() < 1e-4);
}

#[test]
fn blank_specs_leave_their_slot_empty() {
    let renderer = common::renderer();
    let result = renderer
        .render_divided(&["A", "  ", "C"], Size::new(60.0, 10.0), 3)
        .unwrap();

    assert_eq!(result.elements.len(), 2);
    assert!((result.elements[0].x + SLOT).abs() < 1e-4);
    assert!((result.elements[1].x - SLOT).abs() < 1e-4);
}

#[test]
fn fewer_labels_than_divisions_fill_from_the_left() {
    let renderer = common::renderer();
    let result = renderer
        .render_divided(&["A"], Size::new(60.0, 10.0), 3)
        .unwrap();
    assert_eq!(result.elements.len(), 1);
    assert!((result.elements[0].x + SLOT).abs() < 1e-4);
}

#[test]
fn margins_come_off_the_whole_area_before_splitting() {
    let renderer = common::renderer();
    // A 20mm x 10mm area shrinks to 19.2mm x 9.2mm, so a single slot's
    // row height is 9.2mm.
    let result = renderer
        .render_divided(&["A"], Size::new(20.0, 10.0), 1)
        .unwrap();
    assert_eq!(result.elements.len(), 1);
    assert!((result.elements[0].height - 9.2).abs() < 1e-4);

    // With two slots the margin is still paid once: each slot is
    // (40 - 0.8) / 2 = 19.6mm wide, centers at -9.8 and 9.8.
    let result = renderer
        .render_divided(&["A", "B"], Size::new(40.0, 10.0), 2)
        .unwrap();
    assert!((result.elements[0].x + 9.8).abs() < 1e-4);
    assert!((result.elements[1].x - 9.8).abs() < 1e-4);
    assert!((result.elements[0].height - 9.2).abs() < 1e-4);
}

#[test]
fn too_many_labels_is_an_error() {
    let renderer = common::renderer();
    let err = renderer
        .render_divided(&["A", "B"], Size::new(60.0, 10.0), 1)
        .unwrap_err();
    assert!(matches!(err, Error::TooManyLabels { got: 2, slots: 1 }));
}

#[test]
fn divided_result_reports_the_full_area() {
    let renderer = common::renderer();
    let area = Size::new(60.0, 10.0);
    let result = renderer.render_divided(&["A", "B"], area, 2).unwrap();
    assert_eq!(result.size, area);
    assert!(!result.rescaled);
}
