//! Reset row: a swatch plus a label that reports a fixed reset color when
//! activated.

use std::rc::Rc;

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;

use crate::constants;
use crate::swatch::swatch;
use crate::SelectCallback;

/// Creates a clickable reset row.
///
/// - `reset_color`: the fixed color handed to `on_reset` on every activation.
/// - `label_text`: row label, `"Reset"` when `None`.
/// - `on_reset`: invoked with `reset_color` on pointer click or Enter while
///   focused. `None` makes activation a no-op.
///
/// The swatch in the row is never marked selected.
pub fn reset_control(
    reset_color: impl Into<String>,
    label_text: Option<String>,
    on_reset: Option<SelectCallback>,
) -> impl IntoView {
    let reset_color = reset_color.into();
    let text = label_text.unwrap_or_else(|| "Reset".to_string());

    let activate = {
        let color = reset_color.clone();
        Rc::new(move || {
            if let Some(cb) = &on_reset {
                cb(&color);
            }
        })
    };
    let activate_key = activate.clone();

    h_stack((
        swatch(reset_color, || false),
        label(move || text.clone()).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::LABEL_COLOR)
        }),
    ))
    .debug_name("color-reset")
    .style(|s| {
        s.items_center()
            .gap(constants::ROW_GAP)
            .padding(4.0)
            .border_radius(constants::SWATCH_RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(constants::HOVER_BG))
            .focus(|s| s.outline(2.0).outline_color(constants::ACCENT_COLOR))
    })
    .keyboard_navigable()
    .on_click_stop(move |_| {
        activate();
    })
    .on_event(EventListener::KeyDown, move |e| {
        if let Event::KeyDown(ke) = e {
            if ke.key.logical_key == Key::Named(NamedKey::Enter) {
                activate_key();
                return EventPropagation::Stop;
            }
        }
        EventPropagation::Continue
    })
}
