//! Pure paging math for the content surface.

use std::ops::Range;

/// Fling speed (offset units per second) above which a released drag moves
/// one page in the fling direction instead of snapping to the nearest page.
pub const FLING_VELOCITY_THRESHOLD: f32 = 400.0;

/// Progress between two neighbouring pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageProgress {
    pub old_index: usize,
    pub new_index: usize,
    /// 0 at `old_index`, 1 at `new_index`.
    pub progress: f32,
}

/// Largest valid content offset.
pub fn max_offset(page_width: f32, page_count: usize) -> f32 {
    (page_width * page_count.saturating_sub(1) as f32).max(0.0)
}

/// Progress report for `offset`, with direction inferred from `drag_start`.
///
/// Moving forward reports from the page on the left towards the next one;
/// moving backward reports from the page on the right towards the one on the
/// left. Returns `None` when there is no neighbouring page to report towards.
pub fn page_progress(
    offset: f32,
    drag_start: f32,
    page_width: f32,
    page_count: usize,
) -> Option<PageProgress> {
    if page_width <= 0.0 || offset < 0.0 {
        return None;
    }
    let raw = offset / page_width;
    let floor = raw.floor();
    let fractional = raw - floor;
    let floor = floor as usize;

    if offset - drag_start >= 0.0 {
        let new_index = floor + 1;
        if fractional == 0.0 || new_index >= page_count {
            return None;
        }
        Some(PageProgress {
            old_index: floor,
            new_index,
            progress: fractional,
        })
    } else {
        let old_index = floor + 1;
        if old_index >= page_count {
            return None;
        }
        Some(PageProgress {
            old_index,
            new_index: floor,
            progress: 1.0 - fractional,
        })
    }
}

/// Page reported when scrolling comes to rest at `offset`.
pub fn settled_index(offset: f32, page_width: f32, page_count: usize) -> Option<usize> {
    if page_width <= 0.0 || page_count == 0 {
        return None;
    }
    let index = (offset / page_width).floor().max(0.0) as usize;
    Some(index.min(page_count - 1))
}

/// Page a released drag snaps to.
pub fn snap_target(offset: f32, page_width: f32, page_count: usize, velocity: f32) -> usize {
    if page_width <= 0.0 || page_count == 0 {
        return 0;
    }
    let raw = (offset / page_width).max(0.0);
    let target = if velocity > FLING_VELOCITY_THRESHOLD {
        raw.floor() + 1.0
    } else if velocity < -FLING_VELOCITY_THRESHOLD {
        (raw.ceil() - 1.0).max(0.0)
    } else {
        raw.round()
    };
    (target as usize).min(page_count - 1)
}

/// Pages intersecting the viewport `[offset, offset + page_width)`.
pub fn visible_range(offset: f32, page_width: f32, page_count: usize) -> Range<usize> {
    if page_width <= 0.0 || page_count == 0 {
        return 0..0;
    }
    let start = ((offset / page_width).floor().max(0.0) as usize).min(page_count);
    let end = (((offset + page_width) / page_width).ceil().max(0.0) as usize).min(page_count);
    start..end
}
