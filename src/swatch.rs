//! Single color swatch with an optional selection indicator.

use floem::kurbo::{BezPath, Rect, Stroke};
use floem::peniko::Color;
use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color;
use crate::constants;

/// How a selected swatch is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchIndicator {
    /// White check mark drawn over the fill.
    Check,
    /// Highlight ring drawn around the fill.
    Ring,
}

pub struct Swatch {
    id: ViewId,
    fill: Color,
    selected: bool,
    indicator: SwatchIndicator,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a fixed-size color swatch.
///
/// - `value`: any color string; unparseable strings render as mid-gray.
/// - `selected`: re-evaluated reactively; when true the swatch draws its
///   selection indicator (check mark by default).
pub fn swatch(value: impl Into<String>, selected: impl Fn() -> bool + 'static) -> Swatch {
    let id = ViewId::new();
    let value = value.into();

    create_effect(move |_| {
        let sel = selected();
        id.update_state(sel);
    });

    Swatch {
        id,
        fill: color::resolve(&value),
        selected: false,
        indicator: SwatchIndicator::Check,
        size: Default::default(),
    }
    .style(|s| {
        s.width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
            .border_radius(constants::SWATCH_RADIUS)
    })
}

impl Swatch {
    /// Choose the selection indicator variant.
    pub fn indicator(mut self, indicator: SwatchIndicator) -> Self {
        self.indicator = indicator;
        self
    }

    fn paint_check(&self, cx: &mut PaintCx, w: f64, h: f64) {
        let mut path = BezPath::new();
        path.move_to((w * 0.22, h * 0.52));
        path.line_to((w * 0.42, h * 0.72));
        path.line_to((w * 0.78, h * 0.30));
        // Dark underlay keeps the mark visible on light fills
        cx.stroke(&path, Color::rgba8(0, 0, 0, 90), &Stroke::new(3.0));
        cx.stroke(&path, Color::WHITE, &Stroke::new(1.8));
    }

    fn paint_ring(&self, cx: &mut PaintCx, w: f64, h: f64) {
        let outer = Rect::new(0.5, 0.5, w - 0.5, h - 0.5)
            .to_rounded_rect(constants::SWATCH_RADIUS as f64);
        let gap = Rect::new(2.0, 2.0, w - 2.0, h - 2.0)
            .to_rounded_rect(constants::SWATCH_RADIUS as f64 - 1.0);
        cx.stroke(&gap, Color::WHITE, &Stroke::new(1.5));
        cx.stroke(&outer, constants::ACCENT_COLOR, &Stroke::new(2.0));
    }
}

impl View for Swatch {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(selected) = state.downcast::<bool>() {
            if self.selected != *selected {
                self.selected = *selected;
                self.id.request_paint();
            }
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
        let rrect =
            Rect::new(0.0, 0.0, w, h).to_rounded_rect(constants::SWATCH_RADIUS as f64);

        cx.fill(&rrect, self.fill, 0.0);
        cx.stroke(&rrect, constants::HAIRLINE, &Stroke::new(1.0));

        if self.selected {
            match self.indicator {
                SwatchIndicator::Check => self.paint_check(cx, w, h),
                SwatchIndicator::Ring => self.paint_ring(cx, w, h),
            }
        }
    }
}
