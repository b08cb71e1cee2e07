use crate::engine::render_area;
use crate::parser::RawToken;
use crate::test_utils::TestContext;
use labelforge_traits::FixedMetrics;
use labelforge_types::Size;

fn lines(spec: &[&str]) -> Vec<Vec<RawToken>> {
    spec.iter()
        .map(|line| crate::parser::scan(line).unwrap())
        .collect()
}

#[test]
fn rows_share_the_height_and_stack_downwards() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let result = render_area(&lines(&["A", "B"]), Size::new(30.0, 10.0), &session).unwrap();

    assert!(!result.rescaled);
    assert_eq!(result.elements.len(), 2);
    // Two rows of (10 - 0.1) / 2 = 4.95mm, the first centered above the
    // second.
    let row = 4.95;
    assert!((result.elements[0].y - (5.0 - row / 2.0)).abs() < 1e-4);
    assert!((result.elements[1].y - (5.0 - row - 0.1 - row / 2.0)).abs() < 1e-4);
    assert!((result.elements[0].height - row).abs() < 1e-4);
}

#[test]
fn empty_lines_occupy_a_row_without_elements() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let result = render_area(&lines(&["A", "", "B"]), Size::new(30.0, 10.0), &session).unwrap();

    assert_eq!(result.elements.len(), 2);
    // Three rows were allocated, so A and B sit in the outer thirds.
    let row = (10.0 - 0.2) / 3.0;
    assert!((result.elements[0].y - (5.0 - row / 2.0)).abs() < 1e-4);
    assert!((result.elements[1].y - (5.0 - 2.0 * (row + 0.1) - row / 2.0)).abs() < 1e-4);
}

#[test]
fn fitting_content_is_left_alone() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let result = render_area(&lines(&["M6"]), Size::new(30.0, 10.0), &session).unwrap();

    assert!(!result.rescaled);
    let bounds = result.visible_bounds();
    assert!((bounds.width() - 12.0).abs() < 1e-4);
    assert!((bounds.height() - 10.0).abs() < 1e-4);
}

#[test]
fn overwide_content_rescales_exactly_once() {
    let ctx = TestContext::new();
    let session = ctx.session();
    // Two 10mm hexnuts plus text and spaces come to 38mm in a 30mm area.
    let result = render_area(
        &lines(&["{hexnut} M6 {hexnut}"]),
        Size::new(30.0, 10.0),
        &session,
    )
    .unwrap();

    assert!(result.rescaled);
    let bounds = result.visible_bounds();
    assert!(bounds.width() <= 30.0);
    assert!(bounds.height() <= 10.0);
    // The retry lands at 10 * (30/38) * 0.95 = 7.5mm of line height.
    assert!((bounds.height() - 7.5).abs() < 1e-2);
}

#[test]
fn overtall_content_rescales_against_the_height() {
    let backend = FixedMetrics::new().with_symbol_factors("washer", 1.0, 1.2);
    let ctx = TestContext::with_backend(backend);
    let session = ctx.session();
    let result = render_area(&lines(&["{washer}"]), Size::new(20.0, 10.0), &session).unwrap();

    assert!(result.rescaled);
    // 12mm of content against 10mm of area retries at 10 * (10/12) * 0.95,
    // leaving the washer at 95% of the area height.
    let bounds = result.visible_bounds();
    assert!((bounds.height() - 9.5).abs() < 1e-2);
}

#[test]
fn rescale_result_stays_centered() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let result = render_area(
        &lines(&["{hexnut} M6 {hexnut}"]),
        Size::new(30.0, 10.0),
        &session,
    )
    .unwrap();

    let bounds = result.visible_bounds();
    let center_x = bounds.x + bounds.width() / 2.0;
    assert!(center_x.abs() < 1e-3);
    // The reported size is still the area the caller asked for.
    assert_eq!(result.size, Size::new(30.0, 10.0));
}

#[test]
fn empty_area_renders_nothing() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let result = render_area(&[], Size::new(30.0, 10.0), &session).unwrap();
    assert!(result.elements.is_empty());
    assert!(result.visible_bounds().is_empty());
}
