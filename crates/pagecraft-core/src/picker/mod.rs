//! Interactive color picker engine.
//!
//! The picker is a hue strip that is always visible, a hex text field, and a
//! detail popup with a saturation/brightness square that is shown while the
//! picker is open. Pointer positions on the two canvases map to HSV and back;
//! every change is reported to the owner as a `#rrggbb` string.

mod outside;
mod render;

pub use outside::{OutsideClickGuard, OutsideClickSignal};
pub use render::{
    hue_strip, marker_position, shade_square, GradientStop, LinearGradient, Ring, ShadeSquare,
    HUE_STOP_STEP, MARKER_INNER_RADIUS, MARKER_OUTER_RADIUS,
};

use crate::color::{clamp_unit, is_full_hex, normalize_hex, wrap_hue, Hsv};
use crate::error::EditorResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default hue strip canvas size.
pub const HUE_STRIP_SIZE: (f64, f64) = (100.0, 24.0);
/// Default shade square canvas size.
pub const SHADE_SQUARE_SIZE: (f64, f64) = (200.0, 150.0);

/// Observable state of a picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPickerState {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    pub is_open: bool,
    /// Contents of the hex field; may be invalid while the user is typing.
    pub hex_text: String,
}

type ChangeListener = Box<dyn FnMut(&str)>;

/// Color picker controller.
///
/// Each picker instance is independent. Colors leave the picker through the
/// return values of its operations and through the optional change listener.
pub struct ColorPicker {
    hsv: Hsv,
    /// Last color emitted or synced, lowercase `#rrggbb`.
    color: String,
    is_open: bool,
    hex_text: String,
    signal: OutsideClickSignal,
    subscription: Option<OutsideClickGuard>,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("hsv", &self.hsv)
            .field("color", &self.color)
            .field("is_open", &self.is_open)
            .field("hex_text", &self.hex_text)
            .finish_non_exhaustive()
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new("#000000")
    }
}

impl ColorPicker {
    /// Create a closed picker showing `initial`.
    ///
    /// An unparsable initial color falls back to pure red, with the text kept
    /// in the hex field as given.
    pub fn new(initial: &str) -> Self {
        let mut picker = Self {
            hsv: Hsv::pure_hue(0.0),
            color: Hsv::pure_hue(0.0).to_hex(),
            is_open: false,
            hex_text: initial.to_string(),
            signal: OutsideClickSignal::new(),
            subscription: None,
            on_change: None,
        };
        if picker.sync_external(initial).is_err() {
            log::debug!("Color picker initialized with invalid color {:?}", initial);
        }
        picker
    }

    /// Share an outside-press signal with the host.
    pub fn with_outside_signal(mut self, signal: OutsideClickSignal) -> Self {
        let was_open = self.subscription.is_some();
        self.subscription = None;
        self.signal = signal;
        if was_open {
            self.subscription = Some(self.signal.subscribe());
        }
        self
    }

    /// Register the owner's change listener.
    pub fn on_change(mut self, listener: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Current color as lowercase `#rrggbb`.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Snapshot of the observable state.
    pub fn state(&self) -> ColorPickerState {
        ColorPickerState {
            hue: self.hsv.h,
            saturation: self.hsv.s,
            value: self.hsv.v,
            is_open: self.is_open,
            hex_text: self.hex_text.clone(),
        }
    }

    // --- Open / close ---

    pub fn open(&mut self) {
        if !self.is_open {
            self.is_open = true;
            self.subscription = Some(self.signal.subscribe());
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.subscription = None;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Host signal: a pointer press landed outside the picker's bounds.
    pub fn pointer_pressed_outside(&mut self) {
        if self.subscription.is_some() {
            self.close();
        }
    }

    // --- Color input ---

    /// Set the color from a hex string and emit it.
    ///
    /// On failure nothing changes and nothing is emitted.
    pub fn set_from_hex(&mut self, hex: &str) -> EditorResult<String> {
        let color = self.apply_hex(hex)?;
        self.hex_text = color.clone();
        self.emit();
        Ok(color)
    }

    /// Follow a color change made by the owner (e.g. a new selection)
    /// without emitting it back.
    pub fn sync_external(&mut self, hex: &str) -> EditorResult<()> {
        let color = self.apply_hex(hex)?;
        self.hex_text = color;
        Ok(())
    }

    /// Live edit of the hex field.
    ///
    /// The text is always kept as typed. The color is applied and emitted only
    /// once the text is a complete six-digit hex color; returns the emitted
    /// color, or `None` if no update occurred.
    pub fn edit_hex_text(&mut self, text: &str) -> Option<String> {
        self.hex_text = text.to_string();
        if !is_full_hex(text) {
            return None;
        }
        match self.apply_hex(text) {
            Ok(color) => {
                self.emit();
                Some(color)
            }
            Err(err) => {
                log::debug!("Ignoring hex input: {}", err);
                None
            }
        }
    }

    /// Click on the hue strip at `x` of a `width`-wide canvas.
    ///
    /// Selects the hue, keeps saturation and value, emits, and opens the
    /// detail popup.
    ///
    /// Saturation and value are kept even when they are zero, so on black,
    /// white or grey the emitted color does not change. Pick a shade in the
    /// popup to leave the grey axis.
    pub fn set_hue_from_pointer(&mut self, x: f64, width: f64) -> Option<String> {
        if !(width > 0.0) || !x.is_finite() {
            return None;
        }
        let hue = wrap_hue(clamp_unit(x / width) * 360.0);
        self.hsv = Hsv::new(hue, self.hsv.s, self.hsv.v);
        let color = self.update_from_hsv();
        self.open();
        Some(color)
    }

    /// Click on the shade square at `(x, y)` of a `width` x `height` canvas.
    ///
    /// Only honored while the picker is open.
    pub fn set_shade_from_pointer(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Option<String> {
        if !self.is_open {
            return None;
        }
        if !(width > 0.0) || !(height > 0.0) || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let s = clamp_unit(x / width);
        let v = clamp_unit(1.0 - y / height);
        self.hsv = Hsv::new(self.hsv.h, s, v);
        Some(self.update_from_hsv())
    }

    /// Pick one of the quick swatches: applies the color, emits, and closes.
    pub fn pick_quick_color(&mut self, hex: &str) -> EditorResult<String> {
        let color = self.set_from_hex(hex)?;
        self.close();
        Ok(color)
    }

    // --- Rendering ---

    /// Paint instructions for the hue strip.
    pub fn hue_strip(&self, width: f64) -> LinearGradient {
        hue_strip(width)
    }

    /// Paint instructions for the shade square, or `None` while closed.
    pub fn shade_square(&self, width: f64, height: f64) -> Option<ShadeSquare> {
        self.is_open.then(|| shade_square(self.hsv, width, height))
    }

    // --- Internals ---

    fn apply_hex(&mut self, hex: &str) -> EditorResult<String> {
        let color = normalize_hex(hex)?;
        self.hsv = crate::color::hex_to_hsv(&color)?;
        self.color = color.clone();
        Ok(color)
    }

    fn update_from_hsv(&mut self) -> String {
        self.color = self.hsv.to_hex();
        self.hex_text = self.color.clone();
        self.emit();
        self.color.clone()
    }

    fn emit(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.color);
        }
    }
}
