//! Cyclic windowing over lists whose length is only known once data arrives.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

pub const BRAND_STRIP_VISIBLE: usize = 5;
pub const TESTIMONIAL_STRIP_VISIBLE: usize = 3;
/// Brand shown on load, before the visitor picks one.
pub const DEFAULT_BRAND_INDEX: usize = 3;

/// `preferred` clamped to the last item, or `None` for an empty list.
pub fn default_selection(total: usize, preferred: usize) -> Option<usize> {
    total.checked_sub(1).map(|last| preferred.min(last))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselWindow {
    pub start_index: usize,
    pub visible_count: usize,
    pub total_count: usize,
}

/// Clamps `index` into the valid window positions for `total` items.
/// When everything fits the window starts at 0 and shows all items.
pub fn derive_window(total: usize, visible: usize, index: usize) -> CarouselWindow {
    let start_index = if total > visible { index.min(total - visible) } else { 0 };
    CarouselWindow { start_index, visible_count: visible, total_count: total }
}

impl CarouselWindow {
    pub fn is_degenerate(&self) -> bool {
        self.total_count <= self.visible_count
    }

    /// Start index of the last full window.
    pub fn last_start(&self) -> usize {
        self.total_count.saturating_sub(self.visible_count)
    }

    pub fn visible_range(&self) -> Range<usize> {
        if self.is_degenerate() {
            0..self.total_count
        } else {
            self.start_index..self.start_index + self.visible_count
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselController {
    window: CarouselWindow,
}

impl CarouselController {
    pub fn new(visible_count: usize) -> Self {
        Self { window: derive_window(0, visible_count, 0) }
    }

    pub fn window(&self) -> CarouselWindow {
        self.window
    }

    pub fn start_index(&self) -> usize {
        self.window.start_index
    }

    /// Re-derives the window for a new item count, keeping the position when it still fits.
    pub fn set_total(&mut self, total: usize) {
        self.window = derive_window(total, self.window.visible_count, self.window.start_index);
    }

    pub fn jump_to(&mut self, index: usize) {
        self.window = derive_window(self.window.total_count, self.window.visible_count, index);
    }

    pub fn reset(&mut self) {
        self.jump_to(0);
    }

    pub fn can_advance(&self) -> bool {
        self.window.start_index < self.window.last_start()
    }

    pub fn can_retreat(&self) -> bool {
        self.window.start_index > 0
    }

    /// True when there is more than one position, so a move in either
    /// direction lands somewhere else once wrapping is allowed.
    pub fn can_cycle(&self) -> bool {
        !self.window.is_degenerate()
    }

    pub fn advance(&mut self) {
        if self.window.is_degenerate() {
            return;
        }
        let next = if self.window.start_index == self.window.last_start() { 0 } else { self.window.start_index + 1 };
        self.jump_to(next);
    }

    pub fn retreat(&mut self) {
        if self.window.is_degenerate() {
            return;
        }
        let prev = if self.window.start_index == 0 { self.window.last_start() } else { self.window.start_index - 1 };
        self.jump_to(prev);
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.window.visible_range()
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}

/// Single-item pager nested under a primary selection (listings of the
/// selected brand). Changing the primary selection starts over at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPager<K> {
    primary: Option<K>,
    controller: CarouselController,
}

impl<K> Default for DetailPager<K> {
    fn default() -> Self {
        Self { primary: None, controller: CarouselController::new(1) }
    }
}

impl<K: PartialEq> DetailPager<K> {
    pub fn select_primary(&mut self, key: K, total: usize) {
        if self.primary.as_ref() != Some(&key) {
            self.primary = Some(key);
            self.controller = CarouselController::new(1);
        }
        self.controller.set_total(total);
    }

    pub fn primary(&self) -> Option<&K> {
        self.primary.as_ref()
    }

    pub fn current(&self) -> usize {
        self.controller.start_index()
    }

    pub fn total(&self) -> usize {
        self.controller.window().total_count
    }

    pub fn advance(&mut self) {
        self.controller.advance();
    }

    pub fn retreat(&mut self) {
        self.controller.retreat();
    }

    pub fn can_advance(&self) -> bool {
        self.controller.can_advance()
    }

    pub fn can_retreat(&self) -> bool {
        self.controller.can_retreat()
    }
}

/// Which image each card is currently showing while it is hovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCycler<K: Eq + Hash> {
    indices: HashMap<K, usize>,
}

impl<K: Eq + Hash> Default for ImageCycler<K> {
    fn default() -> Self {
        Self { indices: HashMap::new() }
    }
}

impl<K: Eq + Hash> ImageCycler<K> {
    pub fn current(&self, key: &K) -> usize {
        self.indices.get(key).copied().unwrap_or(0)
    }

    pub fn cycle(&mut self, key: K, image_count: usize) -> usize {
        if image_count == 0 {
            self.indices.remove(&key);
            return 0;
        }
        let entry = self.indices.entry(key).or_insert(0);
        *entry = (*entry + 1) % image_count;
        *entry
    }

    pub fn forget(&mut self, key: &K) {
        self.indices.remove(key);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn controller_at(total: usize, visible: usize, index: usize) -> CarouselController {
        let mut c = CarouselController::new(visible);
        c.set_total(total);
        c.jump_to(index);
        c
    }

    #[test]
    fn advance_wraps_from_last_window() {
        let mut c = controller_at(7, 5, 2);
        assert!(!c.can_advance());
        c.advance();
        assert_eq!(c.start_index(), 0);
    }

    #[test]
    fn retreat_wraps_from_first_window() {
        let mut c = controller_at(7, 5, 0);
        assert!(!c.can_retreat());
        c.retreat();
        assert_eq!(c.start_index(), 2);
        assert!(c.can_retreat());
    }

    #[test]
    fn steps_one_at_a_time() {
        let mut c = controller_at(10, 3, 0);
        c.advance();
        c.advance();
        assert_eq!(c.start_index(), 2);
        c.retreat();
        assert_eq!(c.start_index(), 1);
        assert_eq!(c.visible_range(), 1..4);
    }

    #[test]
    fn degenerate_window_shows_everything() {
        let mut c = controller_at(3, 5, 0);
        c.advance();
        assert_eq!(c.start_index(), 0);
        c.retreat();
        assert_eq!(c.start_index(), 0);
        assert!(!c.can_advance());
        assert!(!c.can_retreat());
        assert_eq!(c.visible_range(), 0..3);
    }

    #[test]
    fn shrinking_total_clamps_start() {
        let mut c = controller_at(12, 5, 7);
        assert_eq!(c.start_index(), 7);
        c.set_total(9);
        assert_eq!(c.start_index(), 4);
        c.set_total(2);
        assert_eq!(c.window(), CarouselWindow { start_index: 0, visible_count: 5, total_count: 2 });
    }

    #[test]
    fn derive_window_clamps_index() {
        assert_eq!(derive_window(7, 5, 6).start_index, 2);
        assert_eq!(derive_window(0, 5, 6).start_index, 0);
        assert_eq!(derive_window(5, 5, 1).start_index, 0);
    }

    #[test]
    fn visible_slice_matches_window() {
        let items = ["a", "b", "c", "d", "e", "f", "g"];
        let c = controller_at(items.len(), 5, 2);
        assert_eq!(c.visible(&items), &["c", "d", "e", "f", "g"]);
    }

    #[test]
    fn detail_pager_resets_on_new_primary() {
        let mut pager = DetailPager::default();
        pager.select_primary("skyline", 4);
        pager.advance();
        pager.advance();
        assert_eq!(pager.current(), 2);

        pager.select_primary("skyline", 4);
        assert_eq!(pager.current(), 2);

        pager.select_primary("harbour", 3);
        assert_eq!(pager.current(), 0);
        pager.retreat();
        assert_eq!(pager.current(), 2);
    }

    #[test]
    fn detail_pager_wraps_on_last_item() {
        let mut pager = DetailPager::default();
        pager.select_primary(1_u64, 2);
        pager.advance();
        assert!(!pager.can_advance());
        pager.advance();
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn image_cycler_wraps_per_key() {
        let mut cycler = ImageCycler::default();
        assert_eq!(cycler.cycle(7_u64, 3), 1);
        assert_eq!(cycler.cycle(7, 3), 2);
        assert_eq!(cycler.cycle(7, 3), 0);
        assert_eq!(cycler.cycle(8, 2), 1);
        assert_eq!(cycler.current(&7), 0);
        cycler.forget(&8);
        assert_eq!(cycler.current(&8), 0);
        assert_eq!(cycler.cycle(9, 0), 0);
    }

    #[test]
    fn default_selection_clamps_to_list() {
        assert_eq!(default_selection(7, DEFAULT_BRAND_INDEX), Some(3));
        assert_eq!(default_selection(2, DEFAULT_BRAND_INDEX), Some(1));
        assert_eq!(default_selection(0, DEFAULT_BRAND_INDEX), None);
    }

    #[test]
    fn single_slide_pager_cycles_past_both_ends() {
        let mut c = controller_at(3, 1, 0);
        assert!(c.can_cycle());
        assert!(!c.can_retreat());
        c.retreat();
        assert_eq!(c.start_index(), 2);
        c.advance();
        assert_eq!(c.start_index(), 0);
        assert!(!controller_at(1, 1, 0).can_cycle());
    }
}
