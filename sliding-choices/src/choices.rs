//! The sliding choices widget.
//!
//! [`SlidingChoices`] renders nothing itself. The host lays out the items,
//! forwards pointer/keyboard/resize input as [`ChoiceEvent`]s together with a
//! [`GeometrySource`] for the current layout, calls [`SlidingChoices::tick`]
//! when [`SlidingChoices::next_deadline`] passes, and paints
//! [`SlidingChoices::indicator`] underneath the items.
//!
//! Every call runs to completion: the state update comes first, then the
//! reconciliation (geometry handoff plus enter/leave hooks) that it owes.

use std::time::Instant;

use crate::animation::{IndicatorAnimator, IndicatorFrame};
use crate::config::ChoicesConfig;
use crate::event::ChoiceEvent;
use crate::geometry::{GeometrySource, GeometryTracker};
use crate::hooks::{HookTable, ItemHooks};
use crate::selection::{Placement, RetractStep, Selection};
use crate::timer::Timers;

/// Render state of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    pub index: usize,
    /// The indicator is over this item.
    pub focused: bool,
    /// This item is the committed choice.
    pub committed: bool,
}

/// Animated selector over a row of items.
///
/// `T` is whatever the host renders per item, `S` the style tag applied to
/// every item alike.
#[derive(Debug)]
pub struct SlidingChoices<T, S> {
    items: Vec<T>,
    item_style: S,
    hooks: HookTable,
    config: ChoicesConfig,
    selection: Selection,
    tracker: GeometryTracker,
    animator: IndicatorAnimator,
    timers: Timers<RetractStep>,
}

impl<T, S> SlidingChoices<T, S> {
    pub fn new(items: Vec<T>, item_style: S) -> Self {
        Self::with_config(items, item_style, ChoicesConfig::default())
    }

    pub fn with_config(items: Vec<T>, item_style: S, config: ChoicesConfig) -> Self {
        let mut animator = IndicatorAnimator::new(config.slide);
        animator.set_reduced_motion(config.reduced_motion);

        Self {
            tracker: GeometryTracker::new(items.len()),
            items,
            item_style,
            hooks: HookTable::new(),
            config,
            selection: Selection::new(),
            animator,
            timers: Timers::new(),
        }
    }

    /// Attach hooks to item `index`.
    pub fn hooks(mut self, index: usize, hooks: ItemHooks) -> Self {
        self.hooks.set(index, hooks);
        self
    }

    /// Replace every hook record at once.
    pub fn with_hook_table(mut self, table: HookTable) -> Self {
        self.hooks = table;
        self
    }

    pub fn set_hooks(&mut self, index: usize, hooks: ItemHooks) {
        self.hooks.set(index, hooks);
    }

    pub fn config(&self) -> &ChoicesConfig {
        &self.config
    }

    /// Enable or disable reduced motion for subsequent slides.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.config.reduced_motion = enabled;
        self.animator.set_reduced_motion(enabled);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item_style(&self) -> &S {
        &self.item_style
    }

    /// Items paired with their render state, in order.
    pub fn item_states(&self) -> impl Iterator<Item = (ItemState, &T)> + '_ {
        let focus = self.selection.focus();
        let committed = self.selection.committed();
        self.items.iter().enumerate().map(move |(index, item)| {
            let state = ItemState {
                index,
                focused: index == focus,
                committed: index == committed,
            };
            (state, item)
        })
    }

    /// Item under the indicator. None when there are no items.
    pub fn focus_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.selection.focus())
    }

    /// Confirmed item. None when there are no items.
    pub fn committed_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.selection.committed())
    }

    /// Item whose enter hook fired last. None when there are no items.
    pub fn last_announced(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.selection.announced())
    }

    pub fn placement(&self) -> Placement {
        self.selection.placement()
    }

    /// Returns true while a retraction is scheduled.
    pub fn is_retracting(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: ChoiceEvent, source: &dyn GeometrySource, now: Instant) {
        if self.is_empty() {
            log::trace!("[choices] ignoring {:?}: no items", event);
            return;
        }
        if let Some(index) = event.index() {
            if index >= self.len() {
                log::debug!(
                    "[choices] ignoring {:?}: only {} items",
                    event,
                    self.len()
                );
                return;
            }
        }

        log::debug!("[choices] {:?}", event);
        match event {
            ChoiceEvent::PointerEnter(index) => {
                self.cancel_retraction();
                if self.selection.pointer_enter(index) {
                    self.tracker.invalidate();
                }
            }
            ChoiceEvent::Click(index) => {
                self.selection.click(index);
                self.hooks.fire_click(index);
            }
            ChoiceEvent::Focus(index) => {
                let hover_hooks = self.hooks.any_enter(self.len());
                if !hover_hooks {
                    self.cancel_retraction();
                }
                if self.selection.focus_item(index, hover_hooks) {
                    self.tracker.invalidate();
                }
            }
            ChoiceEvent::PointerLeave => self.begin_retraction(now),
            ChoiceEvent::Resize => self.tracker.invalidate(),
        }

        self.reconcile(source, now);
    }

    /// Fire due retraction stages and retry any skipped reconciliation.
    pub fn tick(&mut self, source: &dyn GeometrySource, now: Instant) {
        for (id, step) in self.timers.take_due(now) {
            log::trace!("[choices] timer {:?} fired: {:?}", id, step);
            if self.selection.retract(step) {
                self.tracker.invalidate();
            }
            self.reconcile(source, now);
        }
        self.reconcile(source, now);
    }

    /// Indicator to paint at `now`. None with no items or before the first
    /// successful measurement.
    pub fn indicator(&self, now: Instant) -> Option<IndicatorFrame> {
        if self.is_empty() {
            return None;
        }
        self.animator.frame(now).map(|geometry| IndicatorFrame {
            left: geometry.left,
            width: geometry.width,
            placement: self.selection.placement(),
        })
    }

    /// Returns true while the indicator is sliding at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animator.is_animating(now)
    }

    /// Earliest instant after `now` at which [`Self::tick`] or a redraw is
    /// due.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let timer = self.timers.next_deadline();
        let slide = self.animator.completion_time(now);
        timer.into_iter().chain(slide).min()
    }

    /// Replace the item set. Held indices that no longer fit reset to 0.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.cancel_retraction();
        self.items = items;
        self.tracker.set_len(self.items.len());
        self.selection.clamp(self.items.len());
        if self.items.is_empty() {
            self.animator.clear();
        }
    }

    /// Back to the freshly constructed state, keeping items and hooks.
    pub fn reset(&mut self) {
        self.cancel_retraction();
        self.selection = Selection::new();
        self.tracker.invalidate();
        self.animator.clear();
    }

    fn begin_retraction(&mut self, now: Instant) {
        // A leave with nothing to retract keeps any pending stage alive
        if !self.selection.begin_retraction() {
            return;
        }
        self.cancel_retraction();
        self.timers
            .schedule(now + self.config.refocus_delay, RetractStep::Refocus);
        self.timers
            .schedule(now + self.config.settle_delay, RetractStep::Settle);
    }

    fn cancel_retraction(&mut self) {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            log::debug!("[choices] cancelled {} retraction timers", cancelled);
        }
    }

    /// Hand geometry for the focused item to the animator, then fire the
    /// enter/leave hooks owed since the last announcement.
    fn reconcile(&mut self, source: &dyn GeometrySource, now: Instant) {
        if self.is_empty() {
            return;
        }
        let focus = self.selection.focus();
        if !self.tracker.is_stale() && self.selection.announced() == focus {
            return;
        }

        match self.tracker.measure(source, focus) {
            Ok(geometry) => {
                self.animator.retarget(geometry, now);
            }
            Err(err) => {
                log::debug!("[choices] reconciliation skipped: {}", err);
                return;
            }
        }

        if let Some(announcement) = self.selection.announce() {
            self.hooks.fire_enter(announcement.enter);
            self.hooks.fire_leave(announcement.leave);
        }
    }
}

impl<T, S> Drop for SlidingChoices<T, S> {
    fn drop(&mut self) {
        self.cancel_retraction();
    }
}
