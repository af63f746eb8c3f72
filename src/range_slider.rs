//! Horizontal range slider with a progress track, thumb, optional interval
//! labels, and an optional mirrored value box.

use floem::context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx};
use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::kurbo::{Circle, Rect, Stroke};
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{View, ViewId};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;

pub struct RangeSlider {
    id: ViewId,
    held: bool,
    value: f64,
    min: f64,
    max: f64,
    step: Option<f64>,
    value_signal: RwSignal<f64>,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    on_start_drag: Option<Box<dyn Fn(f64)>>,
    on_end_drag: Option<Box<dyn Fn(f64)>>,
    on_key_down: Option<Box<dyn Fn(f64)>>,
    on_key_up: Option<Box<dyn Fn(f64)>>,
}

/// Creates a horizontal range slider over `[min, max]`.
///
/// `value` supplies the start value; external writes to it move the slider,
/// and every user interaction writes the new value back. All callbacks are
/// optional and attached with the builder methods below.
pub fn range_slider(value: RwSignal<f64>, min: f64, max: f64) -> RangeSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(v);
    });

    RangeSlider {
        id,
        held: false,
        value: value.get_untracked(),
        min,
        max,
        step: None,
        value_signal: value,
        size: Default::default(),
        on_change: None,
        on_start_drag: None,
        on_end_drag: None,
        on_key_down: None,
        on_key_up: None,
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .width_full()
            .min_width(120.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .focus(|s| s.outline(2.0).outline_color(constants::ACCENT_COLOR))
    })
    .keyboard_navigable()
}

impl RangeSlider {
    /// Snap pointer values to multiples of `step` from `min`. Also the
    /// keyboard increment (which defaults to 1 when no step is set).
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Invoked with the new value on every value change.
    pub fn on_change(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Invoked on pointer-down with the value at the moment of press.
    pub fn on_start_drag(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_start_drag = Some(Box::new(f));
        self
    }

    /// Invoked on pointer-up with the value current at release.
    pub fn on_end_drag(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_end_drag = Some(Box::new(f));
        self
    }

    /// Invoked on key-down while focused, after the key has been applied.
    pub fn on_key_down(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_key_down = Some(Box::new(f));
        self
    }

    /// Invoked on key-up while focused with the current value.
    pub fn on_key_up(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_key_up = Some(Box::new(f));
        self
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// The signal the slider reads its value from and writes it back to.
    pub fn value_signal(&self) -> RwSignal<f64> {
        self.value_signal
    }

    fn store(&mut self, v: f64) {
        self.value = v;
        if self.value_signal.get_untracked() != v {
            self.value_signal.set(v);
        }
    }

    fn move_to_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable <= 0.0 {
            return;
        }
        let frac = ((x - r) / usable).clamp(0.0, 1.0);
        let raw = self.min + frac * (self.max - self.min);
        let next = math::snap_to_step(raw, self.min, self.max, self.step);
        if next != self.value {
            self.store(next);
            if let Some(cb) = &self.on_change {
                cb(next);
            }
            self.id.request_paint();
        }
    }

    fn handle_key_down(&mut self, key: &Key) -> EventPropagation {
        let step = self.step.unwrap_or(1.0);
        let next = match key {
            Key::Named(NamedKey::ArrowRight) | Key::Named(NamedKey::ArrowUp) => {
                Some(self.value + step)
            }
            Key::Named(NamedKey::ArrowLeft) | Key::Named(NamedKey::ArrowDown) => {
                Some(self.value - step)
            }
            Key::Named(NamedKey::Home) => Some(self.min),
            Key::Named(NamedKey::End) => Some(self.max),
            _ => None,
        };
        match next {
            Some(next) => {
                let next = next.clamp(self.min, self.max);
                self.store(next);
                if let Some(cb) = &self.on_key_down {
                    cb(next);
                }
                self.id.request_paint();
                EventPropagation::Stop
            }
            None => {
                // Unhandled keys still report the current value, like the
                // key-down event of a native range input.
                if let Some(cb) = &self.on_key_down {
                    cb(self.value);
                }
                EventPropagation::Continue
            }
        }
    }
}

impl View for RangeSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(v) = state.downcast::<f64>() {
            if self.value != *v {
                self.value = *v;
                self.id.request_paint();
            }
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                if let Some(cb) = &self.on_start_drag {
                    cb(self.value);
                }
                self.move_to_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.move_to_pointer(e.pos.x);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                if self.held {
                    self.held = false;
                    if let Some(cb) = &self.on_end_drag {
                        cb(self.value);
                    }
                }
                EventPropagation::Continue
            }
            Event::KeyDown(ke) => self.handle_key_down(&ke.key.logical_key),
            Event::KeyUp(_) => {
                if let Some(cb) = &self.on_key_up {
                    cb(self.value);
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        let y0 = (h - constants::TRACK_HEIGHT) / 2.0;
        let track =
            Rect::new(0.0, y0, w, y0 + constants::TRACK_HEIGHT).to_rounded_rect(constants::TRACK_RADIUS);
        cx.fill(&track, constants::TRACK_COLOR, 0.0);

        // Fill width uses the padded 1–99% mapping so the bar never quite
        // touches the rounded end caps.
        let percent = math::track_fill_percent(self.value, self.min, self.max).clamp(0.0, 100.0);
        let fill_w = w * percent / 100.0;
        if fill_w > 0.0 {
            let fill = Rect::new(0.0, y0, fill_w, y0 + constants::TRACK_HEIGHT)
                .to_rounded_rect(constants::TRACK_RADIUS);
            cx.fill(&fill, constants::ACCENT_COLOR, 0.0);
        }
        cx.stroke(&track, constants::HAIRLINE, &Stroke::new(1.0));

        // Thumb (filled circle with a white ring)
        let r = constants::THUMB_RADIUS;
        let frac = math::range_fraction(self.value, self.min, self.max);
        let thumb_x = r + frac * (w - 2.0 * r);
        let thumb = Circle::new((thumb_x, h / 2.0), r);
        cx.fill(&thumb, constants::ACCENT_COLOR, 0.0);
        cx.stroke(
            &Circle::new((thumb_x, h / 2.0), r - 1.0),
            Color::WHITE,
            &Stroke::new(1.5),
        );
        cx.stroke(&thumb, constants::HAIRLINE, &Stroke::new(1.0));
    }
}

/// Composes a slider row: min/max interval labels flanking the track and,
/// when `use_value_box` is set, an editable text box mirroring the value.
///
/// Box commits happen on Enter or focus-lost; a non-numeric entry is dropped
/// and the box reverts to the current value, and numeric entries are clamped
/// to the slider's bounds.
pub fn range_slider_row(slider: RangeSlider, use_value_box: bool) -> impl IntoView {
    let value = slider.value_signal();
    let (min, max) = (slider.min(), slider.max());

    let interval = |bound: f64| {
        label(move || format!("{bound}")).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::LABEL_COLOR)
        })
    };

    let row = h_stack((
        interval(min),
        container(slider).style(|s| s.flex_grow(1.0).items_center()),
        interval(max),
    ))
    .style(|s| s.items_center().gap(constants::ROW_GAP).width_full());

    if use_value_box {
        h_stack((row, value_box(value, min, max)))
            .style(|s| s.items_center().gap(constants::ROW_GAP).width_full())
            .into_any()
    } else {
        row.into_any()
    }
}

/// An editable text box mirroring the slider value.
fn value_box(value: RwSignal<f64>, min: f64, max: f64) -> impl IntoView {
    let text = RwSignal::new(format!("{}", value.get_untracked()));

    // Signal → text (external updates and slider motion)
    create_effect(move |_| {
        let display = format!("{}", value.get());
        if text.get_untracked() != display {
            text.set(display);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match math::coerce_box_value(&raw, min, max) {
            Some(v) => {
                if value.get_untracked() != v {
                    value.set(v);
                }
                let formatted = format!("{v}");
                if raw != formatted {
                    text.set(formatted);
                }
            }
            None => {
                // Non-numeric entry is dropped; revert to the current value.
                let formatted = format!("{}", value.get_untracked());
                if raw != formatted {
                    text.set(formatted);
                }
            }
        }
    };
    let on_commit_clone = on_commit;

    text_input(text)
        .style(|s| {
            s.width(constants::VALUE_BOX_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event_stop(EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(EventListener::KeyDown, move |e| {
            if let Event::KeyDown(ke) = e {
                if ke.key.logical_key == Key::Named(NamedKey::Enter) {
                    on_commit_clone();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
}
