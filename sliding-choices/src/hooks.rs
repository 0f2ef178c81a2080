//! Per-item callbacks.

use std::fmt;

type Hook = Box<dyn FnMut()>;

/// Optional callbacks for a single item.
#[derive(Default)]
pub struct ItemHooks {
    on_enter: Option<Hook>,
    on_leave: Option<Hook>,
    on_click: Option<Hook>,
}

impl ItemHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the indicator arrives on this item.
    pub fn on_enter(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Called when the indicator moves away from this item.
    pub fn on_leave(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_leave = Some(Box::new(hook));
        self
    }

    /// Called after this item is clicked and committed.
    pub fn on_click(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(hook));
        self
    }

    pub fn has_enter(&self) -> bool {
        self.on_enter.is_some()
    }

    pub fn has_leave(&self) -> bool {
        self.on_leave.is_some()
    }

    pub fn has_click(&self) -> bool {
        self.on_click.is_some()
    }
}

impl fmt::Debug for ItemHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemHooks")
            .field("on_enter", &self.has_enter())
            .field("on_leave", &self.has_leave())
            .field("on_click", &self.has_click())
            .finish()
    }
}

/// Index-keyed hook records. Missing entries mean "no hooks".
#[derive(Debug, Default)]
pub struct HookTable {
    entries: Vec<ItemHooks>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach hooks to item `index`, replacing any previous record.
    pub fn set(&mut self, index: usize, hooks: ItemHooks) {
        if self.entries.len() <= index {
            self.entries.resize_with(index + 1, ItemHooks::default);
        }
        self.entries[index] = hooks;
    }

    pub fn get(&self, index: usize) -> Option<&ItemHooks> {
        self.entries.get(index)
    }

    /// True if any of the first `len` items has an enter hook.
    pub fn any_enter(&self, len: usize) -> bool {
        self.entries.iter().take(len).any(ItemHooks::has_enter)
    }

    pub fn fire_enter(&mut self, index: usize) {
        if let Some(hook) = self.entries.get_mut(index).and_then(|h| h.on_enter.as_mut()) {
            log::debug!("[hooks] enter {}", index);
            hook();
        }
    }

    pub fn fire_leave(&mut self, index: usize) {
        if let Some(hook) = self.entries.get_mut(index).and_then(|h| h.on_leave.as_mut()) {
            log::debug!("[hooks] leave {}", index);
            hook();
        }
    }

    pub fn fire_click(&mut self, index: usize) {
        if let Some(hook) = self.entries.get_mut(index).and_then(|h| h.on_click.as_mut()) {
            log::debug!("[hooks] click {}", index);
            hook();
        }
    }
}

impl FromIterator<(usize, ItemHooks)> for HookTable {
    fn from_iter<I: IntoIterator<Item = (usize, ItemHooks)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (index, hooks) in iter {
            table.set(index, hooks);
        }
        table
    }
}
