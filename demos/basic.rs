//! Standalone demo: a swatch book with a reset row and two sliders.

use std::rc::Rc;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_color_inputs::{range_slider, range_slider_row, reset_control, swatch_book};

const PALETTE: &[&str] = &[
    "#0875E1", "#1EA446", "#FF7A45", "#DE2E21", "#F5A623", "#7B61FF", "#12A5A5", "#56606E",
    "#AAD3FF", "#A6E5B8", "#FFD3BF", "#FAB9B5", "#FCE4A8", "#D6CCFF", "#B0E8E8", "#CBD2D9",
];

fn app_view() -> impl IntoView {
    let selected = RwSignal::new(Some("#0875E1".to_string()));
    let opacity = RwSignal::new(50.0);
    let hue = RwSignal::new(180.0);

    let colors: Vec<String> = PALETTE.iter().map(|c| c.to_string()).collect();
    let on_select: floem_color_inputs::SelectCallback = Rc::new(move |color: &str| {
        selected.set(Some(color.to_string()));
    });
    let on_reset = on_select.clone();

    v_stack((
        reset_control("#CBD2D9", None, Some(on_reset)),
        swatch_book(colors, selected, Some(on_select)),
        range_slider_row(
            range_slider(opacity, 0.0, 100.0)
                .step(1.0)
                .on_change(move |v| println!("opacity: {v}")),
            true,
        ),
        range_slider_row(
            range_slider(hue, 0.0, 360.0)
                .on_start_drag(|v| println!("drag start at {v}"))
                .on_end_drag(|v| println!("drag end at {v}")),
            false,
        ),
    ))
    .style(|s| s.gap(12.0).padding(16.0).width_full())
}

fn main() {
    floem::Application::new()
        .window(
            move |_| {
                app_view().on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 320.0))
                    .title("floem-color-inputs"),
            ),
        )
        .run();
}
