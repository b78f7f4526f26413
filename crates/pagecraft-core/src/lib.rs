//! Pagecraft Core Library
//!
//! Platform-agnostic document model, color engine and placement logic for the
//! Pagecraft page editor.

pub mod background;
pub mod color;
pub mod config;
pub mod entities;
pub mod error;
pub mod export;
pub mod formatting;
pub mod gradient;
pub mod icons;
pub mod pattern;
pub mod picker;
pub mod placement;
pub mod presets;
pub mod seed;
pub mod store;
pub mod style;

pub use background::{Background, BackgroundKind, BackgroundPaint};
pub use color::{hex_to_hsv, hsv_to_hex, Hsv, Rgb};
pub use config::EditorConfig;
pub use entities::{EntityId, IconAttributes, NewOverlay, Overlay, OverlayKind, TextBox, TextBoxPatch};
pub use error::{EditorError, EditorResult};
pub use export::ExportSnapshot;
pub use formatting::{FormatCommand, FormattingBridge, TextFormatter};
pub use gradient::generate_gradient;
pub use icons::{IconRegistry, IconShape};
pub use pattern::{blank_pattern, DoodlePatterns, GeneratedPattern, PatternGenerator, PatternMode};
pub use picker::{ColorPicker, ColorPickerState, OutsideClickGuard, OutsideClickSignal};
pub use placement::{grid_position, Partition, GRID_SIZE, INITIAL_OFFSET};
pub use store::DocumentStore;
pub use style::{ActiveStyle, FormatFlags, FormatPatch, TextStyle, TextStylePatch};
