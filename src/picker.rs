//! Value selection for the horizontal scroll picker.
//!
//! The picker renders one slot per allowed value on a horizontal strip. The
//! strip has half a viewport of padding on each side, so a scroll offset of
//! `slot * slot_width` puts that slot in the centre of the viewport. This
//! module only deals with offsets and values; the DOM side lives in the app.
//!
//! Nothing here fails: a picker without values is disabled and every
//! operation on it returns an empty [`PickerUpdate`].

use crate::defaults::SNAP_TOLERANCE_PX;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerMode {
    /// Positions past either end resolve to the boundary value.
    #[default]
    Bounded,
    /// The sequence is rendered three times. A settle that lands in an outer
    /// copy is moved back into the middle copy without animation.
    Wheel,
}

impl PickerMode {
    fn copies(self) -> usize {
        match self {
            PickerMode::Bounded => 1,
            PickerMode::Wheel => 3,
        }
    }
}

/// `min, min + increment, ...` up to the last term not above `max`.
///
/// Empty when `increment` is 0 or `min > max`.
pub fn allowed_values(min: u32, max: u32, increment: u32) -> Vec<u32> {
    if increment == 0 || min > max {
        return Vec::new();
    }
    (min..=max).step_by(increment as usize).collect()
}

/// Index of the member closest to `value`. Ties go to the lower member.
pub fn nearest_index(values: &[u32], value: u32) -> Option<usize> {
    match values.binary_search(&value) {
        Ok(i) => Some(i),
        Err(0) => (!values.is_empty()).then_some(0),
        Err(i) if i == values.len() => Some(i - 1),
        Err(i) => {
            let below = value - values[i - 1];
            let above = values[i] - value;
            Some(if above < below { i } else { i - 1 })
        }
    }
}

/// What the view has to do after a picker operation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickerUpdate {
    /// New value to report to the owner.
    pub commit: Option<u32>,
    /// Offset to jump to instantly, before any animation.
    pub jump_to: Option<f64>,
    /// Offset to animate to.
    pub snap_to: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerModel {
    values: Vec<u32>,
    mode: PickerMode,
    slot_width: f64,
    /// Index into `values` of the last committed value.
    selected: Option<usize>,
    /// Current scroll offset of the strip, in pixels.
    position: f64,
}

impl PickerModel {
    pub fn new(
        min: u32,
        max: u32,
        increment: u32,
        value: u32,
        mode: PickerMode,
        slot_width: f64,
    ) -> Self {
        let values = allowed_values(min, max, increment);
        let selected = nearest_index(&values, value);
        let mut model = Self {
            values,
            mode,
            slot_width: if slot_width > 0.0 { slot_width } else { 1.0 },
            selected,
            position: 0.0,
        };
        model.position = model.home_position();
        model
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn selected_value(&self) -> Option<u32> {
        self.selected.map(|i| self.values[i])
    }

    pub fn is_disabled(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of rendered slots.
    pub fn slot_count(&self) -> usize {
        self.values.len() * self.mode.copies()
    }

    pub fn value_at(&self, slot: usize) -> Option<u32> {
        if slot >= self.slot_count() {
            return None;
        }
        self.values.get(slot % self.values.len()).copied()
    }

    /// Scroll offset that centres `slot`.
    pub fn slot_offset(&self, slot: usize) -> f64 {
        slot as f64 * self.slot_width
    }

    /// Slot whose centre is nearest to `position`, clamped to the strip.
    pub fn slot_at(&self, position: f64) -> Option<usize> {
        let count = self.slot_count();
        if count == 0 {
            return None;
        }
        let raw = ((position + self.slot_width / 2.0) / self.slot_width).floor();
        Some((raw.max(0.0) as usize).min(count - 1))
    }

    /// Track the strip while a gesture is in progress. Never commits.
    pub fn scroll_to(&mut self, position: f64) {
        if position.is_finite() {
            self.position = position;
        }
    }

    /// Resolve the current offset to a value once the gesture has settled.
    ///
    /// Commits only when the value differs from the last commit, so settling
    /// twice at the same offset commits once.
    pub fn settle(&mut self) -> PickerUpdate {
        let Some(mut slot) = self.slot_at(self.position) else {
            return PickerUpdate::default();
        };
        let mut update = PickerUpdate::default();
        if let Some(shifted) = self.recentre(slot) {
            update.jump_to = Some(self.position);
            slot = shifted;
        }
        update.commit = self.commit_index(slot % self.values.len());
        update.snap_to = self.snap(slot);
        debug!(
            "Picker settled on slot {} -> {:?} (commit: {:?})",
            slot,
            self.selected_value(),
            update.commit
        );
        update
    }

    /// Tap on a rendered slot: commit at once and animate to it.
    pub fn select_slot(&mut self, slot: usize) -> PickerUpdate {
        if slot >= self.slot_count() {
            return PickerUpdate::default();
        }
        PickerUpdate {
            commit: self.commit_index(slot % self.values.len()),
            jump_to: None,
            snap_to: self.snap(slot),
        }
    }

    /// Move by `delta` slots from the one under the centre.
    ///
    /// Bounded pickers stop at either end; wheels wrap around.
    pub fn step(&mut self, delta: i32) -> PickerUpdate {
        let Some(mut slot) = self.slot_at(self.position) else {
            return PickerUpdate::default();
        };
        let mut update = PickerUpdate::default();
        if let Some(shifted) = self.recentre(slot) {
            update.jump_to = Some(self.position);
            slot = shifted;
        }

        let count = self.slot_count() as i64;
        let moved = slot as i64 + delta as i64;
        let target = match self.mode {
            PickerMode::Bounded => moved.clamp(0, count - 1) as usize,
            PickerMode::Wheel if (0..count).contains(&moved) => moved as usize,
            PickerMode::Wheel => {
                let len = self.values.len();
                len + moved.rem_euclid(len as i64) as usize
            }
        };

        update.commit = self.commit_index(target % self.values.len());
        update.snap_to = self.snap(target);
        update
    }

    /// The owner supplied `value`: select the nearest member and jump to it.
    ///
    /// Only a value that is not a member is committed back, as its nearest
    /// replacement.
    pub fn sync_value(&mut self, value: u32) -> PickerUpdate {
        let Some(index) = nearest_index(&self.values, value) else {
            return PickerUpdate::default();
        };
        let nearest = self.values[index];
        let commit = (nearest != value).then_some(nearest);
        if self.selected == Some(index) {
            return PickerUpdate {
                commit,
                ..PickerUpdate::default()
            };
        }

        self.selected = Some(index);
        self.position = self.home_position();
        PickerUpdate {
            commit,
            jump_to: Some(self.position),
            snap_to: None,
        }
    }

    /// Regenerate the sequence for a new range, keeping `value` when it is
    /// still a member and falling back to its nearest member otherwise.
    pub fn set_range(&mut self, min: u32, max: u32, increment: u32, value: u32) -> PickerUpdate {
        self.values = allowed_values(min, max, increment);
        self.selected = None;
        self.position = 0.0;
        self.sync_value(value)
    }

    fn home_position(&self) -> f64 {
        self.selected
            .map_or(0.0, |i| self.slot_offset(self.middle_offset() + i))
    }

    fn middle_offset(&self) -> usize {
        match self.mode {
            PickerMode::Bounded => 0,
            PickerMode::Wheel => self.values.len(),
        }
    }

    /// Shift a wheel offset resolving into an outer copy by one sequence
    /// width into the middle copy. Returns the shifted slot.
    fn recentre(&mut self, slot: usize) -> Option<usize> {
        if self.mode != PickerMode::Wheel {
            return None;
        }
        let len = self.values.len();
        let width = self.slot_offset(len);
        if slot < len {
            self.position += width;
            Some(slot + len)
        } else if slot >= 2 * len {
            self.position -= width;
            Some(slot - len)
        } else {
            None
        }
    }

    fn snap(&mut self, slot: usize) -> Option<f64> {
        let target = self.slot_offset(slot);
        let moved = (target - self.position).abs() > SNAP_TOLERANCE_PX;
        self.position = target;
        moved.then_some(target)
    }

    fn commit_index(&mut self, index: usize) -> Option<u32> {
        if self.selected == Some(index) {
            return None;
        }
        self.selected = Some(index);
        Some(self.values[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOT: f64 = 10.0;

    fn bounded(min: u32, max: u32, increment: u32, value: u32) -> PickerModel {
        PickerModel::new(min, max, increment, value, PickerMode::Bounded, SLOT)
    }

    fn wheel(min: u32, max: u32, increment: u32, value: u32) -> PickerModel {
        PickerModel::new(min, max, increment, value, PickerMode::Wheel, SLOT)
    }

    #[test]
    fn allowed_values_properties() {
        for min in 0..15u32 {
            for max in min..45 {
                for increment in 1..12 {
                    let values = allowed_values(min, max, increment);
                    assert_eq!(values[0], min);
                    assert!(values.windows(2).all(|w| w[0] < w[1]));
                    let last = *values.last().unwrap();
                    assert!(last <= max);
                    assert!(last as i64 > max as i64 - increment as i64);
                }
            }
        }
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        assert!(allowed_values(5, 20, 0).is_empty());
        assert!(allowed_values(20, 5, 5).is_empty());
        assert_eq!(allowed_values(7, 7, 5), vec![7]);
        assert_eq!(allowed_values(5, 22, 5), vec![5, 10, 15, 20]);
    }

    #[test]
    fn nearest_prefers_lower_on_ties() {
        let values = [5, 10, 15, 20];
        assert_eq!(nearest_index(&values, 10), Some(1));
        assert_eq!(nearest_index(&values, 12), Some(1));
        assert_eq!(nearest_index(&values, 13), Some(2));
        assert_eq!(nearest_index(&values, 0), Some(0));
        assert_eq!(nearest_index(&values, 99), Some(3));
        assert_eq!(nearest_index(&[], 3), None);
    }

    #[test]
    fn settle_past_end_clamps_to_max() {
        let mut picker = bounded(5, 20, 5, 5);
        assert_eq!(picker.position(), 0.0);

        picker.scroll_to(2.6 * SLOT);
        let update = picker.settle();
        assert_eq!(update.commit, Some(20));
        assert_eq!(update.snap_to, Some(3.0 * SLOT));
        assert_eq!(update.jump_to, None);

        picker.scroll_to(40.0 * SLOT);
        assert_eq!(picker.settle().commit, None);
        assert_eq!(picker.selected_value(), Some(20));

        picker.scroll_to(-7.0 * SLOT);
        assert_eq!(picker.settle().commit, Some(5));
    }

    #[test]
    fn settle_is_idempotent() {
        let mut picker = bounded(1, 30, 1, 3);
        picker.scroll_to(54.0);
        assert_eq!(picker.settle().commit, Some(6));

        picker.scroll_to(54.0);
        let again = picker.settle();
        assert_eq!(again.commit, None);
        assert_eq!(again.snap_to, Some(5.0 * SLOT));

        let centred = picker.settle();
        assert_eq!(centred, PickerUpdate::default());
    }

    #[test]
    fn gesture_updates_do_not_commit() {
        let mut picker = bounded(5, 120, 5, 30);
        picker.scroll_to(0.0);
        picker.scroll_to(11.0 * SLOT);
        picker.scroll_to(f64::NAN);
        assert_eq!(picker.selected_value(), Some(30));
        assert_eq!(picker.position(), 11.0 * SLOT);
    }

    #[test]
    fn wheel_starts_in_middle_copy() {
        let picker = wheel(1, 3, 1, 2);
        assert_eq!(picker.slot_count(), 9);
        assert_eq!(picker.position(), 4.0 * SLOT);
        assert_eq!(picker.value_at(7), Some(2));
        assert_eq!(picker.value_at(9), None);
    }

    #[test]
    fn wheel_recentres_without_commit() {
        let mut picker = wheel(1, 3, 1, 2);

        // slot 1 holds the same value as the selected middle slot 4
        picker.scroll_to(12.0);
        let update = picker.settle();
        assert_eq!(update.commit, None);
        assert_eq!(update.jump_to, Some(42.0));
        assert_eq!(update.snap_to, Some(4.0 * SLOT));

        picker.scroll_to(8.0 * SLOT);
        let update = picker.settle();
        assert_eq!(update.commit, Some(3));
        assert_eq!(update.jump_to, Some(5.0 * SLOT));
        assert_eq!(update.snap_to, None);
        assert_eq!(picker.position(), 5.0 * SLOT);
    }

    #[test]
    fn tap_commits_immediately() {
        let mut picker = bounded(5, 90, 5, 15);
        let update = picker.select_slot(5);
        assert_eq!(update.commit, Some(30));
        assert_eq!(update.snap_to, Some(5.0 * SLOT));

        assert_eq!(picker.select_slot(5).commit, None);
        assert_eq!(picker.select_slot(99), PickerUpdate::default());
    }

    #[test]
    fn bounded_step_stops_at_ends() {
        let mut picker = bounded(1, 3, 1, 3);
        assert_eq!(picker.step(1), PickerUpdate::default());
        let update = picker.step(-1);
        assert_eq!(update.commit, Some(2));
        assert_eq!(update.snap_to, Some(SLOT));
        assert_eq!(picker.step(-10).commit, Some(1));
        assert_eq!(picker.step(-1).commit, None);
    }

    #[test]
    fn wheel_step_wraps() {
        let mut picker = wheel(1, 3, 1, 3);
        let update = picker.step(1);
        assert_eq!(update.commit, Some(1));
        assert_eq!(update.snap_to, Some(6.0 * SLOT));

        // next interaction pulls the wheel back into the middle copy
        let update = picker.step(1);
        assert_eq!(update.jump_to, Some(3.0 * SLOT));
        assert_eq!(update.commit, Some(2));
        assert_eq!(update.snap_to, Some(4.0 * SLOT));

        assert_eq!(picker.step(-7).commit, Some(1));
    }

    #[test]
    fn empty_picker_is_disabled() {
        let mut picker = bounded(10, 5, 1, 7);
        assert!(picker.is_disabled());
        assert_eq!(picker.selected_value(), None);
        assert_eq!(picker.slot_at(0.0), None);
        picker.scroll_to(30.0);
        assert_eq!(picker.settle(), PickerUpdate::default());
        assert_eq!(picker.step(1), PickerUpdate::default());
        assert_eq!(picker.select_slot(0), PickerUpdate::default());
        assert_eq!(picker.sync_value(7), PickerUpdate::default());

        let zero_step = bounded(1, 10, 0, 1);
        assert!(zero_step.is_disabled());
    }

    #[test]
    fn range_change_keeps_member_value() {
        let mut picker = bounded(5, 120, 5, 30);
        let update = picker.set_range(10, 60, 10, 30);
        assert_eq!(update.commit, None);
        assert_eq!(picker.selected_value(), Some(30));
        assert_eq!(update.jump_to, Some(2.0 * SLOT));
    }

    #[test]
    fn range_change_falls_back_to_nearest() {
        let mut picker = bounded(5, 120, 5, 35);
        let update = picker.set_range(10, 60, 10, 35);
        assert_eq!(update.commit, Some(30));
        assert_eq!(picker.selected_value(), Some(30));

        let update = picker.set_range(100, 200, 50, 30);
        assert_eq!(update.commit, Some(100));
    }

    #[test]
    fn external_value_is_not_committed_back() {
        let mut picker = bounded(1, 30, 1, 3);
        let update = picker.sync_value(12);
        assert_eq!(update.commit, None);
        assert_eq!(update.jump_to, Some(11.0 * SLOT));
        assert_eq!(picker.sync_value(12), PickerUpdate::default());
        assert_eq!(picker.sync_value(99).commit, Some(30));
    }
}
