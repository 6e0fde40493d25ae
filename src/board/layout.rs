//! Slot geometry for the stacked panel layout.
//!
//! Every function here is pure: the board only keeps the ordered membership
//! of its visible queue and asks for rectangles when it needs them.

use crate::config::LayoutConfig;
use crate::surface::NormRect;
use serde::{Deserialize, Serialize};

/// Plot area and curve checklist of one panel slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotRects {
    pub plot: NormRect,
    pub checklist: NormRect,
}

/// Rectangles for the slot at `index` (0 = top) when `visible_count` panels
/// share the figure. A count of zero lays out as one.
pub fn compute_slot(layout: &LayoutConfig, index: usize, visible_count: usize) -> SlotRects {
    let step = layout.top / visible_count.max(1) as f32;
    let bottom = layout.top - (index + 1) as f32 * step + layout.slot_gap;

    SlotRects {
        plot: NormRect::new(layout.plot_left, bottom, layout.plot_width, step - layout.slot_gap),
        checklist: NormRect::new(
            layout.checklist_left,
            bottom,
            layout.checklist_width,
            layout.checklist_height,
        ),
    }
}

/// Toggle button of the panel registered at `panel_index`. Buttons are
/// stacked by registration order and never move.
pub fn button_rect(layout: &LayoutConfig, panel_index: usize) -> NormRect {
    NormRect::new(
        layout.button_left,
        layout.top - (panel_index + 1) as f32 * layout.button_height,
        layout.button_width,
        layout.button_height,
    )
}

/// Slot index used to park hidden panels below the figure.
pub fn parking_index(capacity: usize) -> usize {
    capacity + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parked_slot_is_offscreen_for_every_count() {
        let layout = LayoutConfig::default();
        for count in 1..=3 {
            let slot = compute_slot(&layout, parking_index(3), count);
            assert!(!slot.plot.is_onscreen(), "count {count}");
        }
    }

    #[test]
    fn zero_count_lays_out_as_one() {
        let layout = LayoutConfig::default();
        assert_eq!(compute_slot(&layout, 0, 0), compute_slot(&layout, 0, 1));
    }
}
