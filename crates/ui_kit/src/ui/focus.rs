//! Keyboard focus groups
//!
//! A [`FocusGroup`] is an ordered set of focusable targets, typically the inputs of
//! one form. At most one target holds focus; Tab moves it forward and Shift+Tab
//! backward, wrapping at both ends.
//!
//! Focus is two-level: a target only reports itself as focused when the host
//! window has input focus *and* its group points at it.

use std::sync::atomic::{AtomicU64, Ordering};

use super::feedback::{Feedback, FeedbackCue};
use super::input::{KeyboardState, Keys};

static NEXT_GROUP_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_TARGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a focus group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusGroupId(u64);

/// Unique identifier for a focusable target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusTargetId(u64);

/// Focus group usage errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    /// The target is already registered in this group
    #[error("focus target {0:?} already in group")]
    DuplicateTarget(FocusTargetId),

    /// The target was never added to this group
    #[error("focus target {0:?} not in group")]
    NotInGroup(FocusTargetId),
}

/// Focus identity carried by a focusable widget.
///
/// Holds the widget's target id and a non-owning back-reference to the group it
/// was added to. Handles are deliberately not `Clone`: two widgets must never
/// share one identity.
#[derive(Debug)]
pub struct FocusHandle {
    id: FocusTargetId,
    group: Option<FocusGroupId>,
}

impl FocusHandle {
    /// Create a handle with a fresh identity and no group
    pub fn new() -> Self {
        Self {
            id: FocusTargetId(NEXT_TARGET_ID.fetch_add(1, Ordering::Relaxed)),
            group: None,
        }
    }

    /// Target identity
    pub fn id(&self) -> FocusTargetId {
        self.id
    }

    /// Group this target was added to, if any
    pub fn group(&self) -> Option<FocusGroupId> {
        self.group
    }
}

impl Default for FocusHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered set of focus targets with one current focus
#[derive(Debug)]
pub struct FocusGroup {
    id: FocusGroupId,
    targets: Vec<FocusTargetId>,
    current: Option<FocusTargetId>,
}

impl FocusGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self {
            id: FocusGroupId(NEXT_GROUP_ID.fetch_add(1, Ordering::Relaxed)),
            targets: Vec::new(),
            current: None,
        }
    }

    /// Group identity
    pub fn id(&self) -> FocusGroupId {
        self.id
    }

    /// Number of registered targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the group has no targets
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Registered targets in navigation order
    pub fn targets(&self) -> &[FocusTargetId] {
        &self.targets
    }

    /// Whether `target` is registered here
    pub fn contains(&self, target: FocusTargetId) -> bool {
        self.targets.contains(&target)
    }

    /// Currently focused target; `None` only while the group is empty
    pub fn focused(&self) -> Option<FocusTargetId> {
        self.current
    }

    /// Append a target to the navigation order.
    ///
    /// The first target added becomes the focused one. The target's group
    /// back-reference now points here; any earlier group no longer reports it
    /// as focused.
    pub fn add(&mut self, target: &mut FocusHandle) -> Result<(), FocusError> {
        if self.contains(target.id) {
            return Err(FocusError::DuplicateTarget(target.id));
        }

        self.targets.push(target.id);
        target.group = Some(self.id);
        if self.current.is_none() {
            self.current = Some(target.id);
        }

        log::debug!("Added {:?} to focus group {:?} ({} targets)", target.id, self.id, self.len());
        Ok(())
    }

    /// Remove a target, returning whether it was registered.
    ///
    /// If it held focus, focus moves to the target that takes its place in the
    /// order (wrapping to the first), or to nothing when the group empties.
    pub fn remove(&mut self, target: &mut FocusHandle) -> bool {
        let Some(index) = self.targets.iter().position(|id| *id == target.id) else {
            return false;
        };

        self.targets.remove(index);
        if target.group == Some(self.id) {
            target.group = None;
        }

        if self.current == Some(target.id) {
            self.current = if self.targets.is_empty() {
                None
            } else {
                Some(self.targets[index % self.targets.len()])
            };
            log::debug!("Focus moved to {:?} after removing {:?}", self.current, target.id);
        }

        true
    }

    /// Give focus to a registered target
    pub fn focus(&mut self, target: &FocusHandle) -> Result<(), FocusError> {
        if !self.contains(target.id) {
            return Err(FocusError::NotInGroup(target.id));
        }

        self.current = Some(target.id);
        log::debug!("Focus group {:?} focused {:?}", self.id, target.id);
        Ok(())
    }

    /// Move focus one step forward (or backward), wrapping around.
    ///
    /// Returns `true` when focus actually cycled between two or more targets.
    pub fn focus_next(&mut self, reverse: bool) -> bool {
        let count = self.targets.len();
        match count {
            0 => false,
            1 => {
                self.current = Some(self.targets[0]);
                false
            }
            _ => {
                let next = match self.current_index() {
                    Some(index) if reverse => (index + count - 1) % count,
                    Some(index) => (index + 1) % count,
                    None if reverse => count - 1,
                    None => 0,
                };
                self.current = Some(self.targets[next]);
                log::debug!("Focus group {:?} cycled to {:?}", self.id, self.current);
                true
            }
        }
    }

    /// Tab rising-edge check.
    ///
    /// Moves focus (backward when shift is held) only on the frame tab goes down
    /// while the host has focus. Returns whether focus navigation ran.
    pub fn check_tab_edge(
        &mut self,
        tab_down: bool,
        tab_was_down: bool,
        shift_down: bool,
        host_has_focus: bool,
    ) -> bool {
        if !host_has_focus || !tab_down || tab_was_down {
            return false;
        }

        self.focus_next(shift_down);
        true
    }

    /// Keyboard-driven tab check.
    ///
    /// When the tab edge fires, the keyboard's current input is consumed so no
    /// other handler reacts to the same press, and a tick is played if focus moved.
    pub fn check_tab(
        &mut self,
        keyboard: &mut KeyboardState,
        host_has_focus: bool,
        feedback: &mut dyn Feedback,
    ) -> bool {
        let before = self.current;
        let fired = self.check_tab_edge(
            keyboard.is_down(Keys::TAB) && !keyboard.is_consumed(),
            keyboard.was_down(Keys::TAB),
            keyboard.shift_down(),
            host_has_focus,
        );

        if fired {
            keyboard.consume();
            if self.current != before {
                feedback.play(FeedbackCue::MenuTick);
            }
        }
        fired
    }

    /// Whether `target` is focused: host has focus and this group points at it
    pub fn is_focused(&self, target: &FocusHandle, host_has_focus: bool) -> bool {
        host_has_focus && target.group == Some(self.id) && self.current == Some(target.id)
    }

    fn current_index(&self) -> Option<usize> {
        let current = self.current?;
        self.targets.iter().position(|id| *id == current)
    }
}

impl Default for FocusGroup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::feedback::RecordingFeedback;

    fn group_of(count: usize) -> (FocusGroup, Vec<FocusHandle>) {
        let mut group = FocusGroup::new();
        let mut handles: Vec<FocusHandle> = (0..count).map(|_| FocusHandle::new()).collect();
        for handle in &mut handles {
            group.add(handle).unwrap();
        }
        (group, handles)
    }

    #[test]
    fn test_first_add_takes_focus() {
        let (group, handles) = group_of(3);
        assert_eq!(group.focused(), Some(handles[0].id()));
        assert_eq!(handles[2].group(), Some(group.id()));
        assert_eq!(group.targets(), &[handles[0].id(), handles[1].id(), handles[2].id()]);
    }

    #[test]
    fn test_duplicate_target() {
        let (mut group, mut handles) = group_of(1);
        assert_eq!(
            group.add(&mut handles[0]),
            Err(FocusError::DuplicateTarget(handles[0].id()))
        );
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_rejoin_after_group_dropped() {
        let mut handle = FocusHandle::new();
        {
            let mut first = FocusGroup::new();
            first.add(&mut handle).unwrap();
        }

        let mut second = FocusGroup::new();
        second.add(&mut handle).unwrap();
        assert_eq!(handle.group(), Some(second.id()));
        assert!(second.is_focused(&handle, true));
    }

    #[test]
    fn test_moving_target_between_live_groups() {
        let (first, mut handles) = group_of(1);
        let mut second = FocusGroup::new();
        second.add(&mut handles[0]).unwrap();

        // Still listed in the first group, but only the new owner reports focus
        assert!(first.contains(handles[0].id()));
        assert!(!first.is_focused(&handles[0], true));
        assert!(second.is_focused(&handles[0], true));
    }

    #[test]
    fn test_focus_unregistered_target() {
        let (mut group, handles) = group_of(2);
        let stranger = FocusHandle::new();
        assert_eq!(group.focus(&stranger), Err(FocusError::NotInGroup(stranger.id())));
        assert_eq!(group.focused(), Some(handles[0].id()));

        group.focus(&handles[1]).unwrap();
        assert_eq!(group.focused(), Some(handles[1].id()));
    }

    #[test]
    fn test_focus_next_cycles_forward() {
        let (mut group, handles) = group_of(3);
        let ids: Vec<_> = handles.iter().map(FocusHandle::id).collect();

        assert!(group.focus_next(false));
        assert_eq!(group.focused(), Some(ids[1]));
        group.focus_next(false);
        assert_eq!(group.focused(), Some(ids[2]));
        group.focus_next(false);
        assert_eq!(group.focused(), Some(ids[0]));
    }

    #[test]
    fn test_focus_next_wraps_backward() {
        let (mut group, handles) = group_of(3);
        assert!(group.focus_next(true));
        assert_eq!(group.focused(), Some(handles[2].id()));
        group.focus_next(true);
        assert_eq!(group.focused(), Some(handles[1].id()));
    }

    #[test]
    fn test_single_target_is_idempotent() {
        let (mut group, handles) = group_of(1);
        for reverse in [false, true, false] {
            assert!(!group.focus_next(reverse));
            assert_eq!(group.focused(), Some(handles[0].id()));
            assert_eq!(group.len(), 1);
        }
    }

    #[test]
    fn test_empty_group_is_noop() {
        let mut group = FocusGroup::new();
        assert!(!group.focus_next(false));
        assert_eq!(group.focused(), None);
        assert!(group.check_tab_edge(true, false, false, true));
        assert_eq!(group.focused(), None);
    }

    #[test]
    fn test_tab_edge_fires_once_per_press() {
        let (mut group, handles) = group_of(3);

        assert!(group.check_tab_edge(true, false, false, true));
        assert_eq!(group.focused(), Some(handles[1].id()));

        // Held across frames
        for _ in 0..5 {
            assert!(!group.check_tab_edge(true, true, false, true));
        }
        assert_eq!(group.focused(), Some(handles[1].id()));

        // Released, then pressed again with shift
        assert!(!group.check_tab_edge(false, true, false, true));
        assert!(group.check_tab_edge(true, false, true, true));
        assert_eq!(group.focused(), Some(handles[0].id()));
    }

    #[test]
    fn test_tab_edge_requires_host_focus() {
        let (mut group, handles) = group_of(2);
        assert!(!group.check_tab_edge(true, false, false, false));
        assert_eq!(group.focused(), Some(handles[0].id()));
    }

    #[test]
    fn test_is_focused_needs_both_levels() {
        let (mut group, handles) = group_of(2);
        assert!(group.is_focused(&handles[0], true));
        assert!(!group.is_focused(&handles[0], false));
        assert!(!group.is_focused(&handles[1], true));

        group.focus(&handles[1]).unwrap();
        assert!(group.is_focused(&handles[1], true));
        assert!(!group.is_focused(&handles[0], true));

        let outsider = FocusHandle::new();
        assert!(!group.is_focused(&outsider, true));
    }

    #[test]
    fn test_remove_focused_moves_focus() {
        let (mut group, mut handles) = group_of(3);
        group.focus(&handles[1]).unwrap();

        assert!(group.remove(&mut handles[1]));
        assert_eq!(handles[1].group(), None);
        assert_eq!(group.focused(), Some(handles[2].id()));

        // Removing the last element wraps to the first
        assert!(group.remove(&mut handles[2]));
        assert_eq!(group.focused(), Some(handles[0].id()));

        assert!(group.remove(&mut handles[0]));
        assert_eq!(group.focused(), None);
        assert!(group.is_empty());
    }

    #[test]
    fn test_remove_unfocused_and_unknown() {
        let (mut group, mut handles) = group_of(2);
        let mut stranger = FocusHandle::new();
        assert!(!group.remove(&mut stranger));

        assert!(group.remove(&mut handles[1]));
        assert!(!group.remove(&mut handles[1]));
        assert_eq!(group.focused(), Some(handles[0].id()));

        // A removed target can join again
        group.add(&mut handles[1]).unwrap();
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_check_tab_consumes_input_and_ticks() {
        let (mut group, handles) = group_of(2);
        let mut keyboard = KeyboardState::new();
        let mut feedback = RecordingFeedback::new();

        keyboard.press(Keys::TAB);
        keyboard.type_text("\t");
        assert!(group.check_tab(&mut keyboard, true, &mut feedback));
        assert!(keyboard.is_consumed());
        assert!(keyboard.text_edits().is_empty());
        assert_eq!(group.focused(), Some(handles[1].id()));
        assert_eq!(feedback.cues(), &[FeedbackCue::MenuTick]);

        // Still held next frame
        keyboard.advance();
        assert!(!group.check_tab(&mut keyboard, true, &mut feedback));
        assert_eq!(feedback.count(), 1);
    }

    #[test]
    fn test_check_tab_single_target_is_silent() {
        let (mut group, _handles) = group_of(1);
        let mut keyboard = KeyboardState::new();
        let mut feedback = RecordingFeedback::new();

        keyboard.press(Keys::TAB);
        assert!(group.check_tab(&mut keyboard, true, &mut feedback));
        assert_eq!(feedback.count(), 0);
    }
}
