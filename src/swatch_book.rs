//! Fixed-column grid of selectable color swatches.

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color;
use crate::constants;
use crate::swatch::swatch;
use crate::SelectCallback;

/// Creates an 8-column grid of swatch cells.
///
/// - `colors`: display order, duplicates permitted; duplicate cells render
///   and react independently.
/// - `selected`: the host-owned current value. A cell is marked selected
///   when its color equals the current value case-insensitively; `None`
///   marks no cell.
/// - `on_select`: invoked with the cell's original color string on pointer
///   click, Enter, or Space while the cell is focused. `None` is tolerated.
///
/// Every cell is independently keyboard focusable and carries a
/// `color-swatch-<slug>` debug name for inspector and test hooks, where the
/// slug is the color with `#` stripped, truncated to 6 characters.
pub fn swatch_book(
    colors: Vec<String>,
    selected: RwSignal<Option<String>>,
    on_select: Option<SelectCallback>,
) -> impl IntoView {
    let mut rows = Vec::new();
    let mut iter = colors.into_iter().peekable();
    while iter.peek().is_some() {
        let row: Vec<String> = iter.by_ref().take(constants::GRID_COLUMNS).collect();
        rows.push(
            h_stack_from_iter(
                row.into_iter()
                    .map(|c| swatch_cell(c, selected, on_select.clone())),
            )
            .style(|s| s.gap(constants::GRID_GAP)),
        );
    }

    v_stack_from_iter(rows).style(|s| s.gap(constants::GRID_GAP))
}

fn swatch_cell(
    value: String,
    selected: RwSignal<Option<String>>,
    on_select: Option<SelectCallback>,
) -> impl IntoView {
    let slug = color::swatch_slug(&value);

    let selected_fn = {
        let value = value.clone();
        move || match selected.get() {
            Some(current) => color::matches(&value, &current),
            None => false,
        }
    };

    let activate = {
        let value = value.clone();
        move || {
            if let Some(cb) = &on_select {
                cb(&value);
            }
        }
    };
    let activate_key = activate.clone();

    container(swatch(value, selected_fn))
        .debug_name(format!("color-swatch-{slug}"))
        .style(|s| {
            s.items_center()
                .justify_center()
                .border_radius(constants::SWATCH_RADIUS)
                .cursor(floem::style::CursorStyle::Pointer)
                .focus(|s| s.outline(2.0).outline_color(constants::ACCENT_COLOR))
        })
        .keyboard_navigable()
        .on_click_stop(move |_| {
            activate();
        })
        .on_event(EventListener::KeyDown, move |e| {
            if let Event::KeyDown(ke) = e {
                let key = &ke.key.logical_key;
                if *key == Key::Named(NamedKey::Enter) || *key == Key::Named(NamedKey::Space) {
                    activate_key();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
}
