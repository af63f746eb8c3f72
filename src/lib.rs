//! # floem-color-inputs
//!
//! Reusable color input widgets for [Floem](https://github.com/lapce/floem):
//! a color swatch, a reset control, an 8-column swatch book, and a range
//! slider with a progress track and optional mirrored value box.
//!
//! The host application owns every value. Widgets receive signals and color
//! strings, derive their display state from them on each render, and report
//! interactions through optional callbacks; the only widget-held state is
//! the slider's in-progress value while dragging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_color_inputs::{range_slider, swatch_book};
//!
//! let selected = RwSignal::new(Some("#0875E1".to_string()));
//! let volume = RwSignal::new(50.0);
//! // Use `swatch_book(colors, selected, on_select)` and
//! // `range_slider(volume, 0.0, 100.0)` in your Floem view tree.
//! ```

mod color;
mod constants;
mod math;
mod range_slider;
mod reset_control;
mod swatch;
mod swatch_book;

use std::rc::Rc;

/// Callback invoked with a color string when a swatch or the reset control
/// is activated. `Rc` so a single callback can serve both the pointer and
/// keyboard activation paths.
pub type SelectCallback = Rc<dyn Fn(&str)>;

pub use range_slider::{range_slider, range_slider_row, RangeSlider};
pub use reset_control::reset_control;
pub use swatch::{swatch, Swatch, SwatchIndicator};
pub use swatch_book::swatch_book;
