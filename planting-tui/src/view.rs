//! Layout and painting.
//!
//! The layout pass is pure: it turns app state and terminal size into
//! rects, which double as the geometry the choice groups measure against
//! and as hit-test targets for the mouse.

use std::time::Instant;

use sliding_choices::{LayoutSnapshot, Placement, Rect, SlidingChoices};

use crate::app::{App, ChoiceGroup, Field, ItemPadding, MenuAction, MenuEntry, Screen};
use crate::filters::{FilterField, MAX_DISTANCE_KM};
use crate::terminal::{Buffer, Pen};
use crate::theme::Theme;

/// Below this width menu entries collapse to their icons.
const COMPACT_WIDTH: u16 = 60;
const MENU_HEIGHT: u16 = 3;
const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 13;
const DROPDOWN_ENTRIES: [&str; 3] = ["Profile Name", "My List", "Log out"];

#[derive(Debug, Clone)]
pub struct DialogLayout {
    pub area: Rect,
    pub priority: LayoutSnapshot,
    pub ownership: LayoutSnapshot,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub compact: bool,
    pub menu: LayoutSnapshot,
    pub body: Rect,
    /// One rect per visible location row on the list and search screens.
    pub rows: Vec<Rect>,
    pub dialog: Option<DialogLayout>,
    /// Stand-in geometry for groups that are not on screen.
    pub unmounted: LayoutSnapshot,
}

impl Layout {
    pub fn compute(app: &App, width: u16, height: u16) -> Self {
        let compact = width < COMPACT_WIDTH;
        let menu = row_layout(
            app.menu.items().iter().map(|entry| menu_label(entry, compact)),
            app.menu.item_style(),
            1,
            0,
        );
        let body = Rect::new(
            0,
            MENU_HEIGHT,
            width,
            height.saturating_sub(MENU_HEIGHT + 1),
        );

        let rows = match app.screen {
            Screen::List | Screen::Search => (0..app.visible().len())
                .map(|i| {
                    let y = body.y + 1 + i as u16;
                    Rect::new(body.x + 1, y, body.width.saturating_sub(2), 1)
                })
                .take_while(|rect| rect.y < body.bottom().saturating_sub(1))
                .collect(),
            _ => Vec::new(),
        };

        let dialog = (app.screen == Screen::NewEntry).then(|| dialog_layout(app, body));

        Self {
            width,
            height,
            compact,
            menu,
            body,
            rows,
            dialog,
            unmounted: LayoutSnapshot::empty(),
        }
    }

    /// Rect of the profile dropdown, anchored under the Profile entry.
    pub fn dropdown(&self, app: &App) -> Option<Rect> {
        let index = app
            .menu
            .items()
            .iter()
            .position(|entry| entry.action == MenuAction::Profile)?;
        let anchor = self.menu.items.get(index)?;
        let width = DROPDOWN_ENTRIES.iter().map(|e| e.len() as u16).max().unwrap_or(0) + 4;
        let x = anchor.x.min(self.width.saturating_sub(width));
        Some(Rect::new(x, MENU_HEIGHT, width, DROPDOWN_ENTRIES.len() as u16 + 2))
    }
}

fn menu_label(entry: &MenuEntry, compact: bool) -> &'static str {
    if compact { entry.icon } else { entry.label }
}

/// Lay out a bordered row of padded labels with its top-left corner at (x, y).
fn row_layout<'a>(
    labels: impl Iterator<Item = &'a str>,
    padding: &ItemPadding,
    x: u16,
    y: u16,
) -> LayoutSnapshot {
    let mut cursor = x + 1;
    let items: Vec<Rect> = labels
        .map(|label| {
            let width = label.chars().count() as u16 + padding.0 * 2;
            let rect = Rect::new(cursor, y + 1, width, 1);
            cursor += width;
            rect
        })
        .collect();
    let container = Rect::new(x, y, cursor + 1 - x, 3);
    LayoutSnapshot::new(container, items)
}

fn dialog_layout(app: &App, body: Rect) -> DialogLayout {
    let width = DIALOG_WIDTH.min(body.width);
    let height = DIALOG_HEIGHT.min(body.height);
    let area = Rect::new(
        body.x + (body.width - width) / 2,
        body.y + (body.height - height) / 2,
        width,
        height,
    );
    let group = |choices: &ChoiceGroup, y: u16| {
        row_layout(
            choices.items().iter().copied(),
            choices.item_style(),
            area.x + 2,
            y,
        )
    };
    DialogLayout {
        area,
        priority: group(&app.form.priority, area.y + 3),
        ownership: group(&app.form.ownership, area.y + 7),
    }
}

/// Paint a full frame.
pub fn render(app: &App, layout: &Layout, theme: &Theme, buffer: &mut Buffer, now: Instant) {
    buffer.fill(Rect::new(0, 0, layout.width, layout.height), theme.background);

    match app.screen {
        Screen::List | Screen::NewEntry | Screen::Search => {
            render_list(app, layout, theme, buffer)
        }
        Screen::Filters => render_filters(app, layout, theme, buffer),
        Screen::Detail(index) => render_detail(app, index, layout, theme, buffer),
        Screen::Info => render_info(layout, theme, buffer),
    }

    render_group(
        &app.menu,
        |entry| menu_label(entry, layout.compact),
        &layout.menu,
        theme,
        buffer,
        now,
    );

    if let Some(dialog) = &layout.dialog {
        render_dialog(app, dialog, theme, buffer, now);
    }
    if app.profile_open() {
        if let Some(rect) = layout.dropdown(app) {
            render_dropdown(rect, theme, buffer);
        }
    }
    render_footer(app, layout, theme, buffer);
}

/// Paint one choice group: frame, sliding indicator, then labels on top.
fn render_group<T, S>(
    choices: &SlidingChoices<T, S>,
    label: impl Fn(&T) -> &str,
    snapshot: &LayoutSnapshot,
    theme: &Theme,
    buffer: &mut Buffer,
    now: Instant,
) {
    let Some(container) = snapshot.container else {
        return;
    };
    buffer.fill(container, theme.surface);
    buffer.border(container, theme.border);

    let span = choices.indicator(now).map(|frame| {
        let start = (i32::from(container.x) + frame.left).max(0) as u16;
        let color = match frame.placement {
            Placement::OnPlace => theme.indicator,
            Placement::OffPlace => theme.indicator_dim,
        };
        (start, start.saturating_add(frame.width), color)
    });

    let row = container.y + 1;
    if let Some((start, end, color)) = span {
        buffer.fill(Rect::new(start, row, end - start, 1), color);
    }

    for ((state, item), rect) in choices.item_states().zip(&snapshot.items) {
        let text = label(item);
        let text_x = rect.x + rect.width.saturating_sub(text.chars().count() as u16) / 2;
        for (offset, ch) in text.chars().enumerate() {
            let x = text_x + offset as u16;
            let under_indicator = span.is_some_and(|(start, end, _)| (start..end).contains(&x));
            let mut pen = Pen::new(if under_indicator {
                theme.on_indicator
            } else if state.committed {
                theme.accent
            } else {
                theme.foreground
            });
            if state.committed {
                pen = pen.bold();
            }
            let mut utf8 = [0; 4];
            buffer.print(x, row, ch.encode_utf8(&mut utf8), 1, pen);
        }
    }
}

fn render_list(app: &App, layout: &Layout, theme: &Theme, buffer: &mut Buffer) {
    let body = layout.body;
    buffer.border(body, theme.border);
    let visible = app.visible();
    let query = &app.filters.query;
    let title = if app.screen == Screen::Search {
        format!(" Search: {}_ ", query)
    } else if query.is_empty() {
        format!(" Planting locations {}/{} ", visible.len(), app.locations.len())
    } else {
        format!(" Planting locations matching \"{}\" ", query)
    };
    let pen = if app.screen == Screen::Search {
        Pen::new(theme.accent).bold()
    } else {
        Pen::new(theme.muted)
    };
    buffer.print(body.x + 2, body.y, &title, body.width.saturating_sub(4), pen);

    if visible.is_empty() {
        let pen = Pen::new(theme.muted);
        buffer.print(body.x + 2, body.y + 1, "No places match.", body.width, pen);
        return;
    }

    let rows = visible.iter().filter_map(|&i| app.locations.get(i));
    for ((row, location), rect) in rows.enumerate().zip(&layout.rows) {
        let selected = row == app.selected;
        if selected {
            buffer.fill(*rect, theme.selected);
        }
        let marker = if location.verified { "+" } else { " " };
        let line = format!(
            " {} {:<36} {:<12} {:<7}",
            marker,
            location.name,
            location.event_type.label(),
            location.priority.label()
        );
        let pen = Pen::new(if selected { theme.foreground } else { theme.muted });
        buffer.print(rect.x, rect.y, &line, rect.width, if selected { pen.bold() } else { pen });
    }
}

fn render_detail(app: &App, index: usize, layout: &Layout, theme: &Theme, buffer: &mut Buffer) {
    let body = layout.body;
    buffer.border(body, theme.border);
    let Some(location) = app.locations.get(index) else {
        return;
    };
    let width = body.width.saturating_sub(4);
    let x = body.x + 2;
    buffer.print(x, body.y + 1, location.name, width, Pen::new(theme.accent).bold());

    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    let lines = [
        ("Location", location.location.to_string()),
        ("Event", location.event_type.label().to_string()),
        ("Ownership", location.ownership.label().to_string()),
        ("Priority", location.priority.label().to_string()),
        ("Verified", yes_no(location.verified).to_string()),
        ("Volunteers", yes_no(location.open_for_volunteering).to_string()),
        ("Site", location.location_types.join(", ")),
        ("Plants", location.plants_allowed.join(", ")),
        ("Participants", location.participants.len().to_string()),
    ];
    for (row, (key, value)) in lines.iter().enumerate() {
        let y = body.y + 3 + row as u16;
        if y >= body.bottom().saturating_sub(1) {
            break;
        }
        let used = buffer.print(x, y, &format!("{key:<14}"), width, Pen::new(theme.muted));
        buffer.print(x + used, y, value, width.saturating_sub(used), Pen::new(theme.foreground));
    }
}

fn render_info(layout: &Layout, theme: &Theme, buffer: &mut Buffer) {
    let body = layout.body;
    buffer.border(body, theme.border);
    let lines = [
        "Find places that need trees and people to plant them.",
        "",
        "Hover the menu to move the indicator, click to choose.",
        "Press n to add a location, Esc to go back.",
    ];
    for (row, line) in lines.iter().enumerate() {
        buffer.print(
            body.x + 2,
            body.y + 1 + row as u16,
            line,
            body.width.saturating_sub(4),
            Pen::new(theme.foreground),
        );
    }
}

fn render_dialog(app: &App, dialog: &DialogLayout, theme: &Theme, buffer: &mut Buffer, now: Instant) {
    let area = dialog.area;
    let width = area.width.saturating_sub(4);
    buffer.fill(area, theme.surface);
    buffer.border(area, theme.accent);
    buffer.print(area.x + 2, area.y, " New planting location ", width, Pen::new(theme.accent).bold());

    for (field, title, snapshot, y) in [
        (Field::Priority, "Priority", &dialog.priority, area.y + 2),
        (Field::Ownership, "Ownership", &dialog.ownership, area.y + 6),
    ] {
        let focused = app.form.focus.is_some_and(|(f, _)| f == field);
        let pen = if focused {
            Pen::new(theme.foreground).bold()
        } else {
            Pen::new(theme.muted)
        };
        buffer.print(area.x + 2, y, title, width, pen);
        render_group(app.form.group(field), |label| *label, snapshot, theme, buffer, now);
    }

    let summary = format!(
        "{} priority, {} land",
        app.form.priority().label(),
        app.form.ownership().label()
    );
    buffer.print(area.x + 2, area.bottom().saturating_sub(2), &summary, width, Pen::new(theme.muted));
}

fn render_dropdown(rect: Rect, theme: &Theme, buffer: &mut Buffer) {
    buffer.fill(rect, theme.surface);
    buffer.border(rect, theme.border);
    for (row, entry) in DROPDOWN_ENTRIES.iter().enumerate() {
        buffer.print(
            rect.x + 2,
            rect.y + 1 + row as u16,
            entry,
            rect.width.saturating_sub(4),
            Pen::new(theme.foreground),
        );
    }
}

fn render_filters(app: &App, layout: &Layout, theme: &Theme, buffer: &mut Buffer) {
    let body = layout.body;
    buffer.border(body, theme.border);
    buffer.print(body.x + 2, body.y, " Filters ", body.width, Pen::new(theme.accent).bold());

    let (min, max) = app.filters.distance;
    let width = body.width.saturating_sub(4);
    for (row, field) in FilterField::ALL.iter().enumerate() {
        let y = body.y + 1 + row as u16;
        if y >= body.bottom().saturating_sub(1) {
            break;
        }
        let rect = Rect::new(body.x + 1, y, body.width.saturating_sub(2), 1);
        let focused = row == app.filter_cursor;
        if focused {
            buffer.fill(rect, theme.selected);
        }
        let value = match field {
            FilterField::MinDistance => format!("< {:>3} >", min),
            FilterField::MaxDistance => format!("< {:>3} >", max),
            _ if app.filters.is_on(*field) => "[x]".to_string(),
            _ => "[ ]".to_string(),
        };
        let pen = Pen::new(if focused { theme.foreground } else { theme.muted });
        let used = buffer.print(rect.x + 1, y, &format!("{:<24}", field.label()), width, pen);
        buffer.print(rect.x + 1 + used, y, &value, width.saturating_sub(used), pen.bold());
    }

    let shown = app.visible().len();
    let scale = format!("distance frame 0..{MAX_DISTANCE_KM} km, {shown} shown");
    let y = body.y + 2 + FilterField::ALL.len() as u16;
    if y < body.bottom().saturating_sub(1) {
        buffer.print(body.x + 2, y, &scale, width, Pen::new(theme.muted));
    }
}

fn render_footer(app: &App, layout: &Layout, theme: &Theme, buffer: &mut Buffer) {
    let help = match app.screen {
        Screen::List => "up/down move  enter open  / search  f filters  n new  q quit",
        Screen::Detail(_) | Screen::Info => "esc back  q quit",
        Screen::NewEntry => "tab focus  left/right move  esc close",
        Screen::Filters => "up/down move  space toggle  left/right distance  esc back",
        Screen::Search => "type to search  enter keep  esc clear",
    };
    let y = layout.height.saturating_sub(1);
    buffer.print(1, y, help, layout.width.saturating_sub(2), Pen::new(theme.muted));
}
