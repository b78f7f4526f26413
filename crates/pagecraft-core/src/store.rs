//! Document store: the single owner of all editable document state.
//!
//! Every mutation goes through a method here. After each call the selection is
//! either empty or names an existing text box, and while a text box is selected
//! the [`ActiveStyle`] equals that box's style field for field.
//!
//! Operations that cannot complete (unknown id, invalid color) leave the state
//! unchanged and report it through their return value only.

use crate::background::{Background, BackgroundKind};
use crate::color::normalize_hex;
use crate::config::EditorConfig;
use crate::entities::{
    new_entity_id, EntityId, IconAttributes, NewOverlay, Overlay, OverlayKind, TextBox,
    TextBoxPatch,
};
use crate::error::{EditorError, EditorResult};
use crate::export::ExportSnapshot;
use crate::icons::IconRegistry;
use crate::pattern::{PatternGenerator, PatternMode};
use crate::placement::{grid_position, Partition};
use crate::style::{ActiveStyle, FormatPatch, TextStyle, TextStylePatch};
use kurbo::Point;

/// Editable document state.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    text_boxes: Vec<TextBox>,
    overlays: Vec<Overlay>,
    selection: Option<EntityId>,
    active: ActiveStyle,
    background: Background,
    /// Full payload of the last generated pattern.
    pattern_url: Option<String>,
    simple_mode: bool,
    panel_docked: bool,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create an empty document with built-in defaults.
    pub fn new() -> Self {
        Self {
            text_boxes: Vec::new(),
            overlays: Vec::new(),
            selection: None,
            active: ActiveStyle::default(),
            background: Background::default(),
            pattern_url: None,
            simple_mode: false,
            panel_docked: true,
        }
    }

    /// Create an empty document seeded from `config`.
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            active: ActiveStyle::from(&config.default_text_style),
            background: config.default_background.clone(),
            ..Self::new()
        }
    }

    // --- Queries ---

    pub fn text_boxes(&self) -> &[TextBox] {
        &self.text_boxes
    }

    pub fn text_box(&self, id: EntityId) -> Option<&TextBox> {
        self.text_boxes.iter().find(|b| b.id == id)
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn overlay(&self, id: EntityId) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id == id)
    }

    pub fn selection(&self) -> Option<EntityId> {
        self.selection
    }

    /// The selected text box, if any.
    pub fn selected_text_box(&self) -> Option<&TextBox> {
        self.selection.and_then(|id| self.text_box(id))
    }

    pub fn active_style(&self) -> &ActiveStyle {
        &self.active
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn pattern_url(&self) -> Option<&str> {
        self.pattern_url.as_deref()
    }

    pub fn is_simple_mode(&self) -> bool {
        self.simple_mode
    }

    pub fn is_panel_docked(&self) -> bool {
        self.panel_docked
    }

    /// Number of entities currently in `partition`.
    pub fn partition_len(&self, partition: Partition) -> usize {
        match partition {
            Partition::TextBoxes => self.text_boxes.len(),
            Partition::Overlays(kind) => self.overlays.iter().filter(|o| o.kind == kind).count(),
        }
    }

    /// Where the next entity in `partition` will be placed.
    pub fn next_position(&self, partition: Partition) -> Point {
        grid_position(self.partition_len(partition))
    }

    // --- Text boxes ---

    /// Create an empty text box in the next grid slot and select it.
    ///
    /// The new box takes a copy of the active style, which is the default for
    /// the next creation while nothing is selected.
    pub fn create_text_box(&mut self) -> EntityId {
        let id = new_entity_id();
        let position = self.next_position(Partition::TextBoxes);
        let style = self.active.to_text_style();
        self.text_boxes.push(TextBox::new(id, position, style));
        self.select(Some(id));
        log::debug!("Created text box {} at ({}, {})", id, position.x, position.y);
        id
    }

    /// Select a text box, or clear the selection with `None`.
    ///
    /// Selecting copies the box's style into the active style. Clearing leaves
    /// the active style as it is. An id that does not name a text box clears
    /// the selection.
    pub fn select(&mut self, id: Option<EntityId>) {
        let Some(id) = id else {
            self.selection = None;
            return;
        };
        match self.text_box(id).map(|b| ActiveStyle::from(&b.style)) {
            Some(style) => {
                self.active = style;
                self.selection = Some(id);
            }
            None => {
                log::debug!("Select: {}", EditorError::UnknownEntityId(id));
                self.selection = None;
            }
        }
    }

    /// Merge a partial update into a text box.
    ///
    /// Returns false if no text box has `id` or the style part is invalid
    /// (zero size, blank family, bad color). A rejected patch changes nothing.
    pub fn update_text_box(&mut self, id: EntityId, mut patch: TextBoxPatch) -> bool {
        if let Some(style) = patch.style.take() {
            match style.validated() {
                Ok(style) => patch.style = Some(style),
                Err(err) => {
                    log::debug!("Update text box {}: {}", id, err);
                    return false;
                }
            }
        }
        let Some(text_box) = self.text_boxes.iter_mut().find(|b| b.id == id) else {
            log::debug!("Update text box: {}", EditorError::UnknownEntityId(id));
            return false;
        };
        let style_changed = text_box.apply(patch);
        if style_changed && self.selection == Some(id) {
            self.active = ActiveStyle::from(&text_box.style);
        }
        true
    }

    /// Store content committed by the editing surface.
    ///
    /// Whitespace-only content is ignored so an accidental blur does not wipe
    /// a box.
    pub fn commit_text_box_content(&mut self, id: EntityId, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        self.update_text_box(id, TextBoxPatch::content(content))
    }

    /// Persist the final position of a drag, verbatim.
    pub fn move_text_box(&mut self, id: EntityId, position: Point) -> bool {
        self.update_text_box(id, TextBoxPatch::position(position))
    }

    /// Remove a text box. Removing the selected box clears the selection but
    /// keeps the active style.
    pub fn remove_text_box(&mut self, id: EntityId) -> Option<TextBox> {
        let Some(index) = self.text_boxes.iter().position(|b| b.id == id) else {
            log::debug!("Remove text box: {}", EditorError::UnknownEntityId(id));
            return None;
        };
        if self.selection == Some(id) {
            self.selection = None;
        }
        Some(self.text_boxes.remove(index))
    }

    /// Patch the selected text box's style. Returns false with no selection.
    pub fn update_selected_text_box_style(&mut self, patch: TextStylePatch) -> bool {
        let Some(id) = self.selection else {
            return false;
        };
        self.update_text_box(id, TextBoxPatch::style(patch))
    }

    // --- Active style ---

    pub fn set_active_font(&mut self, family: &str) -> bool {
        let family = family.trim();
        if family.is_empty() {
            log::debug!("Ignoring empty font family");
            return false;
        }
        self.apply_active(TextStylePatch {
            font_family: Some(family.to_string()),
            ..Default::default()
        });
        true
    }

    /// Set the active font size in pixels. Zero is ignored.
    pub fn set_active_font_size(&mut self, size: u32) -> bool {
        if size == 0 {
            log::debug!("Ignoring zero font size");
            return false;
        }
        self.apply_active(TextStylePatch {
            font_size: Some(size),
            ..Default::default()
        });
        true
    }

    /// Set the active text color. Invalid colors are ignored.
    pub fn set_active_text_color(&mut self, hex: &str) -> bool {
        match normalize_hex(hex) {
            Ok(color) => {
                self.apply_active(TextStylePatch {
                    text_color: Some(color),
                    ..Default::default()
                });
                true
            }
            Err(err) => {
                log::debug!("Set text color: {}", err);
                false
            }
        }
    }

    /// Set any of bold, italic and underline.
    pub fn set_active_text_style(&mut self, format: FormatPatch) {
        self.apply_active(TextStylePatch {
            format,
            ..Default::default()
        });
    }

    pub fn toggle_bold(&mut self) {
        let value = !self.active.text_style.is_bold;
        self.set_active_text_style(FormatPatch::bold(value));
    }

    pub fn toggle_italic(&mut self) {
        let value = !self.active.text_style.is_italic;
        self.set_active_text_style(FormatPatch::italic(value));
    }

    pub fn toggle_underline(&mut self) {
        let value = !self.active.text_style.is_underline;
        self.set_active_text_style(FormatPatch::underline(value));
    }

    /// Write through to the active style and the selected box, if any.
    fn apply_active(&mut self, patch: TextStylePatch) {
        let mut style: TextStyle = self.active.to_text_style();
        style.apply(&patch);
        self.active = ActiveStyle::from(&style);

        let Some(id) = self.selection else {
            return;
        };
        if let Some(text_box) = self.text_boxes.iter_mut().find(|b| b.id == id) {
            text_box.style.apply(&patch);
        }
    }

    // --- Overlays ---

    /// Add an overlay in the next grid slot of its kind.
    pub fn add_overlay(&mut self, overlay: NewOverlay) -> EntityId {
        let id = new_entity_id();
        let position = self.next_position(Partition::Overlays(overlay.kind));
        log::debug!(
            "Added {} overlay {} at ({}, {})",
            overlay.kind.name(),
            id,
            position.x,
            position.y
        );
        self.overlays.push(overlay.into_overlay(id, position));
        id
    }

    /// Add an icon overlay, resolving its name through `registry` first.
    pub fn add_icon_overlay(
        &mut self,
        registry: &IconRegistry,
        attributes: IconAttributes,
    ) -> EditorResult<EntityId> {
        registry.resolve(&attributes.name)?;
        Ok(self.add_overlay(NewOverlay::icon(attributes)))
    }

    /// Persist the final position of a drag, verbatim.
    pub fn update_overlay_position(&mut self, id: EntityId, position: Point) -> bool {
        match self.overlay_mut(id) {
            Some(overlay) => {
                overlay.position = position;
                true
            }
            None => false,
        }
    }

    pub fn update_overlay_content(&mut self, id: EntityId, content: impl Into<String>) -> bool {
        match self.overlay_mut(id) {
            Some(overlay) => {
                overlay.content = content.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_overlay(&mut self, id: EntityId) -> Option<Overlay> {
        let Some(index) = self.overlays.iter().position(|o| o.id == id) else {
            log::debug!("Remove overlay: {}", EditorError::UnknownEntityId(id));
            return None;
        };
        Some(self.overlays.remove(index))
    }

    /// Overlays of one kind, in insertion order.
    pub fn overlays_of(&self, kind: OverlayKind) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().filter(move |o| o.kind == kind)
    }

    fn overlay_mut(&mut self, id: EntityId) -> Option<&mut Overlay> {
        let overlay = self.overlays.iter_mut().find(|o| o.id == id);
        if overlay.is_none() {
            log::debug!("Update overlay: {}", EditorError::UnknownEntityId(id));
        }
        overlay
    }

    // --- Background ---

    /// Replace the background kind and paint value.
    ///
    /// For [`BackgroundKind::Color`] the value must be a valid color and is
    /// mirrored into the background color; other kinds keep the last color.
    pub fn set_background(&mut self, kind: BackgroundKind, value: &str) -> bool {
        if kind == BackgroundKind::Color {
            match normalize_hex(value) {
                Ok(color) => {
                    self.background.color = color.clone();
                    self.background.value = color;
                }
                Err(err) => {
                    log::debug!("Set background: {}", err);
                    return false;
                }
            }
        } else {
            self.background.value = value.to_string();
        }
        self.background.kind = kind;
        true
    }

    /// Set the background color without changing the kind.
    pub fn set_background_color(&mut self, hex: &str) -> bool {
        match normalize_hex(hex) {
            Ok(color) => {
                self.background.color = color;
                true
            }
            Err(err) => {
                log::debug!("Set background color: {}", err);
                false
            }
        }
    }

    /// Switch to a freshly generated gradient and return it.
    pub fn randomize_gradient(&mut self, seed: u32) -> String {
        let gradient = crate::gradient::generate_gradient(seed);
        self.set_background(BackgroundKind::Gradient, &gradient);
        gradient
    }

    /// Generate a new pattern and make it the background.
    pub fn regenerate_pattern(
        &mut self,
        generator: &mut dyn PatternGenerator,
        mode: PatternMode,
    ) -> &str {
        let pattern = generator.generate(mode);
        self.set_background(BackgroundKind::Pattern, &pattern.full);
        self.pattern_url.insert(pattern.full).as_str()
    }

    // --- Editor mode ---

    pub fn set_simple_mode(&mut self, simple: bool) {
        self.simple_mode = simple;
    }

    pub fn set_panel_docked(&mut self, docked: bool) {
        self.panel_docked = docked;
    }

    // --- Export ---

    /// Read-only view of the current page for printing or export.
    pub fn snapshot(&self) -> ExportSnapshot {
        ExportSnapshot {
            background: self.background.paint(),
            text_boxes: self.text_boxes.clone(),
            overlays: self.overlays.clone(),
        }
    }
}
