use crate::fragments::{
    ExpandingFragment, Fragment, MeasureFragment, ScaleFragment, SpacerFragment, TextFragment,
    WebbBoltFragment,
};
use crate::line::fit_line;
use crate::test_utils::TestContext;

fn boxed(fragments: Vec<Box<dyn Fragment>>) -> Vec<Box<dyn Fragment>> {
    fragments
}

#[test]
fn fixed_fragments_keep_order_and_sum_width() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let fragments = boxed(vec![
        Box::new(TextFragment::new("AB")),
        Box::new(SpacerFragment::new(4.0)),
        Box::new(TextFragment::new("C")),
    ]);

    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    // 2 glyphs + 4mm gap + 1 glyph at the fixed advance of 0.6 * height.
    assert!((line.width - 22.0).abs() < 1e-4);
    assert_eq!(line.elements.len(), 3);

    // Centered as a group around zero.
    let left = line.elements[0].x - line.elements[0].width / 2.0;
    let right = line.elements[2].x + line.elements[2].width / 2.0;
    assert!((left + 11.0).abs() < 1e-4);
    assert!((right - 11.0).abs() < 1e-4);
}

#[test]
fn expander_pushes_content_to_the_edges() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let fragments = boxed(vec![
        Box::new(TextFragment::new("L")),
        Box::new(ExpandingFragment),
        Box::new(TextFragment::new("R")),
    ]);

    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    assert!((line.width - 100.0).abs() < 1e-4);
    assert!((line.elements[0].x + 47.0).abs() < 1e-4);
    assert!((line.elements[2].x - 47.0).abs() < 1e-4);
}

#[test]
fn two_expanders_balance_the_leftover() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let fragments = boxed(vec![
        Box::new(ExpandingFragment),
        Box::new(TextFragment::new("M")),
        Box::new(ExpandingFragment),
    ]);

    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    assert!((line.elements[0].width - 47.0).abs() < 1e-4);
    assert!((line.elements[2].width - 47.0).abs() < 1e-4);
    // The text ends up centered.
    assert!(line.elements[1].x.abs() < 1e-4);
}

#[test]
fn measure_outranks_expanding_glue() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let fragments = boxed(vec![
        Box::new(ExpandingFragment),
        Box::new(MeasureFragment),
    ]);

    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    // The measure renders first at half the budget; the glue then absorbs
    // everything left over.
    assert!((line.elements[1].width - 50.0).abs() < 1e-4);
    assert!((line.elements[0].width - 50.0).abs() < 1e-4);
}

#[test]
fn overfull_lines_keep_their_width() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let fragments = boxed(vec![
        Box::new(SpacerFragment::new(50.0)),
        Box::new(SpacerFragment::new(60.0)),
    ]);

    // No clipping: the line reports its true width and the caller decides.
    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    assert!((line.width - 110.0).abs() < 1e-4);
}

#[test]
fn scale_modifier_applies_to_later_fragments_only() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let fragments = boxed(vec![
        Box::new(TextFragment::new("A")),
        Box::new(ScaleFragment::from_args(&["0.5".to_string()]).unwrap()),
        Box::new(TextFragment::new("B")),
    ]);

    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    // The modifier itself is stripped from placement.
    assert_eq!(line.elements.len(), 2);
    assert!((line.elements[0].width - 6.0).abs() < 1e-4);
    assert!((line.elements[1].width - 3.0).abs() < 1e-4);
}

#[test]
fn overheight_fragment_shrinks_the_working_height() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let fragments = boxed(vec![
        Box::new(WebbBoltFragment::from_args(&[]).unwrap()),
        Box::new(TextFragment::new("A")),
    ]);

    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    // The webbolt renders back up to the nominal height; neighbouring text
    // shares the shrunk working height.
    assert!((line.elements[0].height - 10.0).abs() < 1e-3);
    assert!((line.elements[1].height - 10.0 / 1.6).abs() < 1e-3);
    assert!((line.elements[1].width - 0.6 * 10.0 / 1.6).abs() < 1e-3);
}

#[test]
fn overheight_scaling_can_be_disabled() {
    let mut ctx = TestContext::new();
    ctx.options.allow_overheight = false;
    let session = ctx.session();
    let fragments = boxed(vec![
        Box::new(WebbBoltFragment::from_args(&[]).unwrap()),
        Box::new(TextFragment::new("A")),
    ]);

    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    // The webbolt alone is reduced; the text keeps the full line height.
    assert!((line.elements[0].height - 10.0).abs() < 1e-3);
    assert!((line.elements[1].height - 10.0).abs() < 1e-3);
    assert!((line.elements[1].width - 6.0).abs() < 1e-3);
}

#[test]
fn whitespace_only_line_is_invisible() {
    let ctx = TestContext::new();
    let session = ctx.session();
    let fragments = boxed(vec![Box::new(SpacerFragment::new(5.0))]);
    let line = fit_line(&fragments, 10.0, 100.0, &session).unwrap();
    assert!(!line.elements[0].is_visible());
}
