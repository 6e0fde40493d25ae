use linked_chart::board::{button_rect, compute_slot, parking_index};
use linked_chart::config::LayoutConfig;
use linked_chart::surface::NormRect;

fn assert_rect(actual: NormRect, expected: [f32; 4]) {
    let got = [actual.left, actual.bottom, actual.width, actual.height];
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-5, "{got:?} != {expected:?}");
    }
}

#[test]
fn test_two_visible_slots() {
    let layout = LayoutConfig::default();
    assert_rect(compute_slot(&layout, 0, 2).plot, [0.13, 0.54, 0.85, 0.46]);
    assert_rect(compute_slot(&layout, 1, 2).plot, [0.13, 0.04, 0.85, 0.46]);
}

#[test]
fn test_three_visible_slots() {
    let layout = LayoutConfig::default();
    let third = 1.0 / 3.0;
    assert_rect(compute_slot(&layout, 0, 3).plot, [0.13, 1.0 - third + 0.04, 0.85, third - 0.04]);
    assert_rect(compute_slot(&layout, 2, 3).plot, [0.13, 0.04, 0.85, third - 0.04]);
}

#[test]
fn test_single_slot_fills_the_figure() {
    let layout = LayoutConfig::default();
    let slot = compute_slot(&layout, 0, 1);
    assert_rect(slot.plot, [0.13, 0.04, 0.85, 0.96]);
    assert!((slot.plot.top() - 1.0).abs() < 1e-6);
}

#[test]
fn test_checklist_shares_slot_bottom() {
    let layout = LayoutConfig::default();
    let slot = compute_slot(&layout, 1, 2);
    assert_rect(slot.checklist, [0.005, 0.04, 0.10, 0.10]);
}

#[test]
fn test_buttons_stack_by_registration() {
    let layout = LayoutConfig::default();
    assert_rect(button_rect(&layout, 0), [0.005, 0.97, 0.08, 0.03]);
    assert_rect(button_rect(&layout, 3), [0.005, 0.88, 0.08, 0.03]);
}

#[test]
fn test_parking_slot_is_offscreen() {
    let layout = LayoutConfig::default();
    assert_eq!(parking_index(3), 4);
    for count in 1..=3 {
        let slot = compute_slot(&layout, parking_index(3), count);
        assert!(!slot.plot.is_onscreen());
        assert!(!slot.checklist.is_onscreen());
    }
}

#[test]
fn test_visible_slots_do_not_overlap() {
    let layout = LayoutConfig::default();
    for count in 1..=3 {
        for i in 1..count {
            let upper = compute_slot(&layout, i - 1, count).plot;
            let lower = compute_slot(&layout, i, count).plot;
            assert!(lower.top() <= upper.bottom + 1e-6);
        }
    }
}
