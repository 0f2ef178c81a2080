//! Selection state machine.
//!
//! Three indices are tracked:
//! - `focus`: the item the indicator is over (hover preview)
//! - `committed`: the item the user confirmed
//! - `announced`: the item whose enter hook fired last
//!
//! This type only moves indices around. Hooks, geometry and timers are
//! driven by [`crate::SlidingChoices`] from the values returned here.

/// Whether the indicator is settled or retracting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    OnPlace,
    OffPlace,
}

/// Stages of the retraction that follows a pointer-leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetractStep {
    /// Move the focus back to the committed item.
    Refocus,
    /// Mark the indicator as settled again.
    Settle,
}

/// Enter/leave pair owed after the focus moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement {
    pub enter: usize,
    pub leave: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    focus: usize,
    committed: usize,
    announced: usize,
    placement: Placement,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn committed(&self) -> usize {
        self.committed
    }

    pub fn announced(&self) -> usize {
        self.announced
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Pointer entered item `index`. Returns true if the focus moved.
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        self.placement = Placement::OnPlace;
        let moved = self.focus != index;
        self.focus = index;
        moved
    }

    /// Item `index` was clicked. Returns true if the commitment changed.
    pub fn click(&mut self, index: usize) -> bool {
        let changed = self.committed != index;
        self.committed = index;
        changed
    }

    /// Item `index` received keyboard focus.
    ///
    /// With hover hooks present, focus defers to hover and nothing changes.
    /// Otherwise focus is a full commit. Returns true if the focus moved.
    pub fn focus_item(&mut self, index: usize, hover_hooks: bool) -> bool {
        if hover_hooks {
            return false;
        }
        self.committed = index;
        self.pointer_enter(index)
    }

    /// Pointer left the container. Returns true if a retraction must run.
    pub fn begin_retraction(&mut self) -> bool {
        if self.committed == self.focus {
            return false;
        }
        self.placement = Placement::OffPlace;
        true
    }

    /// Apply a retraction stage. Returns true if the focus moved.
    pub fn retract(&mut self, step: RetractStep) -> bool {
        match step {
            RetractStep::Refocus => {
                let moved = self.focus != self.committed;
                self.focus = self.committed;
                moved
            }
            RetractStep::Settle => {
                self.placement = Placement::OnPlace;
                false
            }
        }
    }

    /// Take the enter/leave pair owed for the current focus, if any.
    pub fn announce(&mut self) -> Option<Announcement> {
        if self.announced == self.focus {
            return None;
        }
        let announcement = Announcement {
            enter: self.focus,
            leave: self.announced,
        };
        self.announced = self.focus;
        Some(announcement)
    }

    /// Reset focus or commitment that no longer fits `len` items back to 0.
    ///
    /// An out-of-range announcement follows the focus, so no hook fires for
    /// an item that was never entered.
    pub fn clamp(&mut self, len: usize) {
        for index in [&mut self.focus, &mut self.committed] {
            if *index >= len {
                *index = 0;
            }
        }
        if self.announced >= len {
            self.announced = self.focus;
        }
        self.placement = Placement::OnPlace;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announce_is_taken_once() {
        let mut selection = Selection::new();
        selection.pointer_enter(2);
        assert_eq!(
            selection.announce(),
            Some(Announcement { enter: 2, leave: 0 })
        );
        assert_eq!(selection.announce(), None);
        assert_eq!(selection.announced(), 2);
    }

    #[test]
    fn retraction_skipped_when_committed_matches_focus() {
        let mut selection = Selection::new();
        selection.pointer_enter(1);
        selection.click(1);
        assert!(!selection.begin_retraction());
        assert_eq!(selection.placement(), Placement::OnPlace);
    }

    #[test]
    fn refocus_reads_committed_at_fire_time() {
        let mut selection = Selection::new();
        selection.pointer_enter(2);
        assert!(selection.begin_retraction());
        selection.click(1);
        assert!(selection.retract(RetractStep::Refocus));
        assert_eq!(selection.focus(), 1);
    }

    #[test]
    fn clamp_resets_out_of_range_indices() {
        let mut selection = Selection::new();
        selection.pointer_enter(4);
        selection.click(3);
        selection.announce();
        selection.clamp(4);
        assert_eq!(selection.focus(), 0);
        assert_eq!(selection.committed(), 3);
        assert_eq!(selection.announced(), 0);
    }

    #[test]
    fn clamp_moves_stale_announcement_to_focus() {
        let mut selection = Selection::new();
        selection.pointer_enter(4);
        selection.announce();
        // Focus moved but the announcement was never taken
        selection.pointer_enter(1);
        selection.clamp(3);
        assert_eq!(selection.focus(), 1);
        assert_eq!(selection.announced(), 1);
        assert_eq!(selection.announce(), None);
    }
}
