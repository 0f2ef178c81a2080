//! Application state and input handling.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::debug;
use sliding_choices::{ChoiceEvent, ChoicesConfig, ItemHooks, LayoutSnapshot, SlidingChoices};

use crate::data::{Ownership, PlantingLocation, Priority, sample_locations};
use crate::filters::{FilterField, Filters};
use crate::view::Layout;

/// Horizontal padding, in cells, on each side of every item of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPadding(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Home,
    Search,
    AddLocation,
    Profile,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    /// Shown instead of the label on narrow terminals.
    pub icon: &'static str,
    pub action: MenuAction,
}

const MENU: [MenuEntry; 5] = [
    MenuEntry {
        label: "Home",
        icon: "H",
        action: MenuAction::Home,
    },
    MenuEntry {
        label: "Search",
        icon: "/",
        action: MenuAction::Search,
    },
    MenuEntry {
        label: "Add Location",
        icon: "+",
        action: MenuAction::AddLocation,
    },
    MenuEntry {
        label: "Profile",
        icon: "@",
        action: MenuAction::Profile,
    },
    MenuEntry {
        label: "Info",
        icon: "i",
        action: MenuAction::Info,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    /// Index into [`App::locations`].
    Detail(usize),
    NewEntry,
    Info,
    Filters,
    /// Typing a query; the list narrows as it changes.
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Priority,
    Ownership,
}

pub type ChoiceGroup = SlidingChoices<&'static str, ItemPadding>;

/// The new-entry form's two choice groups.
#[derive(Debug)]
pub struct EntryForm {
    pub priority: ChoiceGroup,
    pub ownership: ChoiceGroup,
    /// Keyboard focus: field and item index.
    pub focus: Option<(Field, usize)>,
}

impl EntryForm {
    fn new(config: ChoicesConfig) -> Self {
        Self {
            priority: SlidingChoices::with_config(
                Priority::ALL.iter().map(|p| p.label()).collect(),
                ItemPadding(2),
                config,
            ),
            ownership: SlidingChoices::with_config(
                Ownership::ALL.iter().map(|o| o.label()).collect(),
                ItemPadding(2),
                config,
            ),
            focus: None,
        }
    }

    pub fn group(&self, field: Field) -> &ChoiceGroup {
        match field {
            Field::Priority => &self.priority,
            Field::Ownership => &self.ownership,
        }
    }

    fn group_mut(&mut self, field: Field) -> &mut ChoiceGroup {
        match field {
            Field::Priority => &mut self.priority,
            Field::Ownership => &mut self.ownership,
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
            .committed_index()
            .and_then(|i| Priority::ALL.get(i).copied())
            .unwrap_or(Priority::Low)
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
            .committed_index()
            .and_then(|i| Ownership::ALL.get(i).copied())
            .unwrap_or(Ownership::Unknown)
    }

    /// Every focusable (field, index) pair in tab order.
    fn tab_order(&self) -> Vec<(Field, usize)> {
        [Field::Priority, Field::Ownership]
            .into_iter()
            .flat_map(|field| (0..self.group(field).len()).map(move |i| (field, i)))
            .collect()
    }

    fn step_focus(&mut self, forward: bool) -> Option<(Field, usize)> {
        let order = self.tab_order();
        if order.is_empty() {
            return None;
        }
        let next = match self.focus.and_then(|f| order.iter().position(|o| *o == f)) {
            None if forward => 0,
            None => order.len() - 1,
            Some(i) if forward => (i + 1) % order.len(),
            Some(0) => order.len() - 1,
            Some(i) => i - 1,
        };
        self.focus = Some(order[next]);
        self.focus
    }

    fn reset(&mut self) {
        self.priority.reset();
        self.ownership.reset();
        self.focus = None;
    }
}

/// Which widgets currently have the pointer inside their container.
#[derive(Debug, Default)]
struct Hover {
    menu: bool,
    priority: bool,
    ownership: bool,
}

pub struct App {
    pub menu: SlidingChoices<MenuEntry, ItemPadding>,
    pub form: EntryForm,
    pub locations: Vec<PlantingLocation>,
    pub filters: Filters,
    /// Row of the filter panel under the cursor.
    pub filter_cursor: usize,
    /// Index into [`App::visible`].
    pub selected: usize,
    pub screen: Screen,
    profile_open: Rc<Cell<bool>>,
    menu_action: Rc<Cell<Option<MenuAction>>>,
    hover: Hover,
    quit: bool,
}

impl App {
    pub fn new(config: ChoicesConfig) -> Self {
        let profile_open = Rc::new(Cell::new(false));
        let menu_action = Rc::new(Cell::new(None));

        let mut menu = SlidingChoices::with_config(MENU.to_vec(), ItemPadding(3), config);
        for (index, entry) in MENU.iter().enumerate() {
            let action = Rc::clone(&menu_action);
            let target = entry.action;
            let mut hooks = ItemHooks::new().on_click(move || action.set(Some(target)));
            if entry.action == MenuAction::Profile {
                let open = Rc::clone(&profile_open);
                let close = Rc::clone(&profile_open);
                hooks = hooks
                    .on_enter(move || open.set(true))
                    .on_leave(move || close.set(false));
            }
            menu.set_hooks(index, hooks);
        }

        Self {
            menu,
            form: EntryForm::new(config),
            locations: sample_locations(),
            filters: Filters::default(),
            filter_cursor: 0,
            selected: 0,
            screen: Screen::List,
            profile_open,
            menu_action,
            hover: Hover::default(),
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn profile_open(&self) -> bool {
        self.profile_open.get()
    }

    /// Fire due timers and retry any owed indicator measurement.
    pub fn tick(&mut self, layout: &Layout, now: Instant) {
        self.menu.tick(&layout.menu, now);
        let (priority, ownership) = dialog_snapshots(layout);
        self.form.priority.tick(priority, now);
        self.form.ownership.tick(ownership, now);
    }

    /// Indices of the locations that pass the filters and search.
    pub fn visible(&self) -> Vec<usize> {
        self.locations
            .iter()
            .enumerate()
            .filter(|(_, location)| self.filters.matches(location))
            .map(|(i, _)| i)
            .collect()
    }

    /// Earliest instant after `now` a widget needs another tick or frame.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        [
            self.menu.next_deadline(now),
            self.form.priority.next_deadline(now),
            self.form.ownership.next_deadline(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.menu.is_animating(now)
            || self.form.priority.is_animating(now)
            || self.form.ownership.is_animating(now)
    }

    pub fn on_event(&mut self, event: CrosstermEvent, layout: &Layout, now: Instant) {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.on_key(key, layout, now)
            }
            CrosstermEvent::Mouse(mouse) => self.on_mouse(mouse, layout, now),
            CrosstermEvent::Resize(width, height) => {
                debug!("[app] resize {}x{}", width, height);
                self.on_resize(layout, now);
            }
            _ => {}
        }
    }

    /// Re-measure every widget against a fresh layout.
    pub fn on_resize(&mut self, layout: &Layout, now: Instant) {
        self.menu.handle(ChoiceEvent::Resize, &layout.menu, now);
        let (priority, ownership) = dialog_snapshots(layout);
        self.form.priority.handle(ChoiceEvent::Resize, priority, now);
        self.form.ownership.handle(ChoiceEvent::Resize, ownership, now);
    }

    fn on_key(&mut self, key: KeyEvent, layout: &Layout, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        if self.screen == Screen::Search {
            self.on_search_key(key.code, ctrl);
            return;
        }

        let on_list = self.screen == Screen::List;
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.open(Screen::List),
            KeyCode::Char('n') if self.screen != Screen::NewEntry => self.open(Screen::NewEntry),
            KeyCode::Char('f') if on_list => self.open(Screen::Filters),
            KeyCode::Char('/') if on_list => self.open(Screen::Search),
            _ => match self.screen {
                Screen::List => self.on_list_key(key.code),
                Screen::NewEntry => self.on_form_key(key.code, layout, now),
                Screen::Filters => self.on_filter_key(key.code),
                Screen::Detail(_) | Screen::Info | Screen::Search => {}
            },
        }
    }

    fn on_list_key(&mut self, code: KeyCode) {
        let visible = self.visible();
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(visible.len().saturating_sub(1)),
            KeyCode::Enter => {
                if let Some(&index) = visible.get(self.selected) {
                    self.open(Screen::Detail(index));
                }
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, code: KeyCode, ctrl: bool) {
        match code {
            KeyCode::Esc => {
                self.filters.query.clear();
                self.open(Screen::List);
            }
            KeyCode::Enter => self.open(Screen::List),
            KeyCode::Backspace => {
                self.filters.query.pop();
            }
            KeyCode::Up | KeyCode::Down => self.on_list_key(code),
            KeyCode::Char(c) if !ctrl => self.filters.query.push(c),
            _ => {}
        }
        self.clamp_selection();
    }

    fn on_filter_key(&mut self, code: KeyCode) {
        let field = FilterField::ALL[self.filter_cursor.min(FilterField::ALL.len() - 1)];
        match code {
            KeyCode::Up => self.filter_cursor = self.filter_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.filter_cursor = (self.filter_cursor + 1).min(FilterField::ALL.len() - 1)
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.filters.toggle(field),
            KeyCode::Left | KeyCode::Right => self.filters.nudge(field, code == KeyCode::Right),
            _ => {}
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible().len().saturating_sub(1));
    }

    fn on_form_key(&mut self, code: KeyCode, layout: &Layout, now: Instant) {
        let target = match code {
            KeyCode::Tab => self.form.step_focus(true),
            KeyCode::BackTab => self.form.step_focus(false),
            KeyCode::Left | KeyCode::Right => self.form.focus.map(|(field, index)| {
                let len = self.form.group(field).len();
                let index = if code == KeyCode::Right {
                    (index + 1).min(len.saturating_sub(1))
                } else {
                    index.saturating_sub(1)
                };
                (field, index)
            }),
            _ => None,
        };

        if let Some((field, index)) = target {
            self.form.focus = Some((field, index));
            let (priority, ownership) = dialog_snapshots(layout);
            let snapshot = match field {
                Field::Priority => priority,
                Field::Ownership => ownership,
            };
            self.form
                .group_mut(field)
                .handle(ChoiceEvent::Focus(index), snapshot, now);
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent, layout: &Layout, now: Instant) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.on_pointer_moved(x, y, layout, now)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_pointer_moved(x, y, layout, now);
                self.on_click(x, y, layout, now);
            }
            _ => {}
        }
    }

    fn on_pointer_moved(&mut self, x: u16, y: u16, layout: &Layout, now: Instant) {
        track_pointer(&mut self.menu, &layout.menu, &mut self.hover.menu, x, y, now);
        let (priority, ownership) = dialog_snapshots(layout);
        track_pointer(
            &mut self.form.priority,
            priority,
            &mut self.hover.priority,
            x,
            y,
            now,
        );
        track_pointer(
            &mut self.form.ownership,
            ownership,
            &mut self.hover.ownership,
            x,
            y,
            now,
        );
    }

    fn on_click(&mut self, x: u16, y: u16, layout: &Layout, now: Instant) {
        if let Some(index) = layout.menu.item_at(x, y) {
            self.menu.handle(ChoiceEvent::Click(index), &layout.menu, now);
            if let Some(action) = self.menu_action.take() {
                self.on_menu_action(action);
            }
            return;
        }

        if let Some(dialog) = &layout.dialog {
            for (field, snapshot) in [
                (Field::Priority, &dialog.priority),
                (Field::Ownership, &dialog.ownership),
            ] {
                if let Some(index) = snapshot.item_at(x, y) {
                    self.form.focus = Some((field, index));
                    self.form
                        .group_mut(field)
                        .handle(ChoiceEvent::Click(index), snapshot, now);
                    return;
                }
            }
            return;
        }

        if matches!(self.screen, Screen::List | Screen::Search) {
            let row = layout.rows.iter().position(|rect| rect.contains(x, y));
            if let Some((row, index)) = row.and_then(|row| Some((row, *self.visible().get(row)?))) {
                self.selected = row;
                self.open(Screen::Detail(index));
            }
        }
    }

    fn on_menu_action(&mut self, action: MenuAction) {
        debug!("[app] menu action {:?}", action);
        match action {
            MenuAction::Home => self.open(Screen::List),
            MenuAction::Search => self.open(Screen::Search),
            MenuAction::AddLocation => self.open(Screen::NewEntry),
            MenuAction::Info => self.open(Screen::Info),
            // The dropdown follows hover
            MenuAction::Profile => {}
        }
    }

    fn open(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        if self.screen == Screen::NewEntry {
            // Closing the dialog unmounts its choice groups
            self.form.reset();
            self.hover.priority = false;
            self.hover.ownership = false;
        }
        debug!("[app] screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }
}

/// Layout of the dialog's groups, or empty snapshots while it is closed.
fn dialog_snapshots(layout: &Layout) -> (&LayoutSnapshot, &LayoutSnapshot) {
    match &layout.dialog {
        Some(dialog) => (&dialog.priority, &dialog.ownership),
        None => (&layout.unmounted, &layout.unmounted),
    }
}

/// Translate a pointer position into enter/leave events for one widget.
fn track_pointer<T, S>(
    choices: &mut SlidingChoices<T, S>,
    snapshot: &LayoutSnapshot,
    hovered: &mut bool,
    x: u16,
    y: u16,
    now: Instant,
) {
    if snapshot.contains(x, y) {
        *hovered = true;
        if let Some(index) = snapshot.item_at(x, y) {
            if choices.focus_index() != Some(index) || choices.is_retracting() {
                choices.handle(ChoiceEvent::PointerEnter(index), snapshot, now);
            }
        }
    } else if std::mem::take(hovered) {
        choices.handle(ChoiceEvent::PointerLeave, snapshot, now);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sliding_choices::Placement;

    use super::*;

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 30;

    fn app() -> App {
        App::new(ChoicesConfig::new())
    }

    fn layout(app: &App) -> Layout {
        Layout::compute(app, WIDTH, HEIGHT)
    }

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn menu_cell(layout: &Layout, index: usize) -> (u16, u16) {
        let rect = layout.menu.items[index];
        (rect.x, rect.y)
    }

    #[test]
    fn quits_on_q_and_ctrl_c() {
        let mut app = app();
        let now = Instant::now();
        let layout = layout(&app);
        app.on_event(key(KeyCode::Char('q')), &layout, now);
        assert!(app.should_quit());

        let mut app = self::app();
        let ctrl_c = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        app.on_event(ctrl_c, &layout, now);
        assert!(app.should_quit());
    }

    #[test]
    fn clicking_add_location_opens_dialog() {
        let mut app = app();
        let now = Instant::now();
        let layout = layout(&app);
        app.tick(&layout, now);

        let (x, y) = menu_cell(&layout, 2);
        app.on_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y), &layout, now);

        assert_eq!(app.screen, Screen::NewEntry);
        assert_eq!(app.menu.committed_index(), Some(2));
    }

    #[test]
    fn hovering_profile_toggles_dropdown() {
        let mut app = app();
        let t0 = Instant::now();
        let layout = layout(&app);
        app.tick(&layout, t0);

        let (x, y) = menu_cell(&layout, 3);
        app.on_event(mouse(MouseEventKind::Moved, x, y), &layout, t0);
        assert!(app.profile_open());

        // Off the menu bar: retraction returns focus to Home and fires leave
        app.on_event(mouse(MouseEventKind::Moved, x, 20), &layout, t0);
        assert!(app.profile_open());
        app.tick(&layout, t0 + Duration::from_millis(100));
        assert!(!app.profile_open());
        assert_eq!(app.menu.focus_index(), Some(0));
    }

    #[test]
    fn list_navigation_and_detail() {
        let mut app = app();
        let now = Instant::now();
        let layout = layout(&app);

        app.on_event(key(KeyCode::Down), &layout, now);
        app.on_event(key(KeyCode::Down), &layout, now);
        app.on_event(key(KeyCode::Up), &layout, now);
        assert_eq!(app.selected, 1);

        app.on_event(key(KeyCode::Enter), &layout, now);
        assert_eq!(app.screen, Screen::Detail(1));

        app.on_event(key(KeyCode::Esc), &layout, now);
        assert_eq!(app.screen, Screen::List);

        let row = layout.rows[3];
        app.on_event(mouse(MouseEventKind::Down(MouseButton::Left), row.x + 4, row.y), &layout, now);
        assert_eq!(app.screen, Screen::Detail(3));
        assert_eq!(app.selected, 3);
    }

    #[test]
    fn tab_focus_commits_form_choices() {
        let mut app = app();
        let now = Instant::now();
        app.on_event(key(KeyCode::Char('n')), &layout(&app), now);
        assert_eq!(app.screen, Screen::NewEntry);

        let layout = layout(&app);
        app.tick(&layout, now);

        app.on_event(key(KeyCode::Tab), &layout, now);
        app.on_event(key(KeyCode::Tab), &layout, now);
        assert_eq!(app.form.focus, Some((Field::Priority, 1)));
        assert_eq!(app.form.priority(), Priority::Medium);

        for _ in 0..3 {
            app.on_event(key(KeyCode::Tab), &layout, now);
        }
        assert_eq!(app.form.focus, Some((Field::Ownership, 1)));
        app.on_event(key(KeyCode::Right), &layout, now);
        assert_eq!(app.form.ownership(), Ownership::Private);

        app.on_event(key(KeyCode::BackTab), &layout, now);
        assert_eq!(app.form.focus, Some((Field::Ownership, 1)));
        assert_eq!(app.form.ownership(), Ownership::Government);
    }

    #[test]
    fn closing_dialog_resets_form() {
        let mut app = app();
        let now = Instant::now();
        app.on_event(key(KeyCode::Char('n')), &layout(&app), now);
        let layout = layout(&app);

        let dialog = layout.dialog.clone().unwrap();
        let high = dialog.priority.items[2];
        app.on_event(mouse(MouseEventKind::Down(MouseButton::Left), high.x, high.y), &layout, now);
        assert_eq!(app.form.priority(), Priority::High);

        app.on_event(key(KeyCode::Esc), &layout, now);
        assert_eq!(app.screen, Screen::List);
        assert_eq!(app.form.priority(), Priority::Low);
        assert_eq!(app.form.focus, None);
    }

    #[test]
    fn next_deadline_covers_pending_retraction() {
        let mut app = app();
        let t0 = Instant::now();
        let layout = layout(&app);
        app.tick(&layout, t0);
        assert_eq!(app.next_deadline(t0), None);

        let (x, y) = menu_cell(&layout, 1);
        app.on_event(mouse(MouseEventKind::Moved, x, y), &layout, t0);
        app.on_event(mouse(MouseEventKind::Moved, x, 25), &layout, t0);
        assert_eq!(app.next_deadline(t0), Some(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn leave_after_finished_slide_still_schedules_retraction() {
        let mut app = app();
        let t0 = Instant::now();
        let layout = layout(&app);
        app.tick(&layout, t0);

        let (x, y) = menu_cell(&layout, 1);
        app.on_event(mouse(MouseEventKind::Moved, x, y), &layout, t0);
        let left = t0 + Duration::from_millis(2000);
        app.on_event(mouse(MouseEventKind::Moved, x, 25), &layout, left);

        assert!(!app.is_animating(left));
        assert_eq!(app.next_deadline(left), Some(left + Duration::from_millis(100)));
    }

    #[test]
    fn crossing_menu_border_keeps_indicator_settling() {
        let mut app = app();
        let t0 = Instant::now();
        let layout = layout(&app);
        app.tick(&layout, t0);

        let (x, y) = menu_cell(&layout, 1);
        app.on_event(mouse(MouseEventKind::Moved, x, y), &layout, t0);
        app.on_event(mouse(MouseEventKind::Moved, x, 20), &layout, t0);
        app.tick(&layout, t0 + Duration::from_millis(100));

        // Top border row: inside the container, over no item
        let border = t0 + Duration::from_millis(200);
        app.on_event(mouse(MouseEventKind::Moved, x, 0), &layout, border);
        app.on_event(mouse(MouseEventKind::Moved, x, 20), &layout, border);

        app.tick(&layout, t0 + Duration::from_secs(10));
        assert_eq!(app.menu.placement(), Placement::OnPlace);
        assert_eq!(app.menu.focus_index(), Some(0));
    }

    #[test]
    fn filter_panel_narrows_list() {
        let mut app = app();
        let now = Instant::now();
        let layout = layout(&app);

        app.on_event(key(KeyCode::Char('f')), &layout, now);
        assert_eq!(app.screen, Screen::Filters);
        for _ in 0..4 {
            app.on_event(key(KeyCode::Down), &layout, now);
        }
        app.on_event(key(KeyCode::Char(' ')), &layout, now);
        assert!(app.filters.only_verified);
        assert_eq!(app.visible(), vec![0, 1, 3]);

        app.on_event(key(KeyCode::Esc), &layout, now);
        let layout = self::layout(&app);
        assert_eq!(layout.rows.len(), 3);

        app.on_event(key(KeyCode::Down), &layout, now);
        app.on_event(key(KeyCode::Down), &layout, now);
        app.on_event(key(KeyCode::Down), &layout, now);
        assert_eq!(app.selected, 2);
        app.on_event(key(KeyCode::Enter), &layout, now);
        assert_eq!(app.screen, Screen::Detail(3));
    }

    #[test]
    fn filters_keep_selection_in_range() {
        let mut app = app();
        let now = Instant::now();
        let layout = layout(&app);
        for _ in 0..4 {
            app.on_event(key(KeyCode::Down), &layout, now);
        }
        assert_eq!(app.selected, 4);

        app.on_event(key(KeyCode::Char('f')), &layout, now);
        app.filter_cursor = FilterField::ALL.len() - 1;
        app.on_event(key(KeyCode::Enter), &layout, now);
        assert!(app.filters.highest_priority);
        assert_eq!(app.visible(), vec![1]);
        assert_eq!(app.selected, 0);

        // The last event type cannot be switched off
        app.filter_cursor = 0;
        app.on_event(key(KeyCode::Char(' ')), &layout, now);
        app.filter_cursor = 1;
        app.on_event(key(KeyCode::Char(' ')), &layout, now);
        assert!(!app.filters.planting);
        assert!(app.filters.maintenance);
    }

    #[test]
    fn search_from_menu_filters_by_text() {
        let mut app = app();
        let now = Instant::now();
        let layout = layout(&app);
        app.tick(&layout, now);

        let (x, y) = menu_cell(&layout, 1);
        app.on_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y), &layout, now);
        assert_eq!(app.screen, Screen::Search);

        for c in "lodhiq".chars() {
            app.on_event(key(KeyCode::Char(c)), &layout, now);
        }
        assert!(!app.should_quit());
        assert_eq!(app.filters.query, "lodhiq");
        assert!(app.visible().is_empty());

        app.on_event(key(KeyCode::Backspace), &layout, now);
        assert_eq!(app.visible(), vec![4]);

        app.on_event(key(KeyCode::Enter), &layout, now);
        assert_eq!(app.screen, Screen::List);
        app.on_event(key(KeyCode::Enter), &layout, now);
        assert_eq!(app.screen, Screen::Detail(4));
    }

    #[test]
    fn escape_clears_search() {
        let mut app = app();
        let now = Instant::now();
        let layout = layout(&app);

        app.on_event(key(KeyCode::Char('/')), &layout, now);
        app.on_event(key(KeyCode::Char('x')), &layout, now);
        assert!(app.visible().is_empty());

        app.on_event(key(KeyCode::Esc), &layout, now);
        assert_eq!(app.screen, Screen::List);
        assert!(app.filters.query.is_empty());
        assert_eq!(app.visible().len(), app.locations.len());
    }
}
