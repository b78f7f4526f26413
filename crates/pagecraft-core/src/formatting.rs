//! Bridge between the toolbar and an external rich-text formatter.
//!
//! Rich-text editing is done by the host's formatter; the core only issues
//! commands and inline styles to it.

use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};

/// Command understood by a [`TextFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    AlignLeft,
    AlignCenter,
    AlignRight,
}

/// Rich-text formatting capability provided by the host.
pub trait TextFormatter {
    /// Apply a formatting command to the current selection.
    fn format(&mut self, command: FormatCommand);
    fn undo(&mut self);
    fn redo(&mut self);
    /// Apply CSS-like declarations to the current selection.
    fn apply_inline_style(&mut self, css: &str);
}

/// Keeps the store's toolbar state and a formatter in step.
pub struct FormattingBridge<'a, F: TextFormatter + ?Sized> {
    store: &'a mut DocumentStore,
    formatter: &'a mut F,
}

impl<'a, F: TextFormatter + ?Sized> FormattingBridge<'a, F> {
    pub fn new(store: &'a mut DocumentStore, formatter: &'a mut F) -> Self {
        Self { store, formatter }
    }

    /// Set the active font family and apply it to the formatter's selection.
    pub fn set_font(&mut self, family: &str) {
        if self.store.set_active_font(family) {
            self.formatter.apply_inline_style(&font_family_css(family));
        }
    }

    /// Set the active font size and apply it to the formatter's selection.
    pub fn set_font_size(&mut self, size: u32) {
        if self.store.set_active_font_size(size) {
            self.formatter.apply_inline_style(&font_size_css(size));
        }
    }

    /// Push the current active family and size to the formatter.
    pub fn sync_active_style(&mut self) {
        let active = self.store.active_style();
        let css = format!(
            "{}; {}",
            font_family_css(&active.font_family),
            font_size_css(active.font_size)
        );
        self.formatter.apply_inline_style(&css);
    }

    /// Run a command. Bold, italic and underline also flip the toolbar flags.
    pub fn command(&mut self, command: FormatCommand) {
        match command {
            FormatCommand::Bold => self.store.toggle_bold(),
            FormatCommand::Italic => self.store.toggle_italic(),
            FormatCommand::Underline => self.store.toggle_underline(),
            FormatCommand::AlignLeft | FormatCommand::AlignCenter | FormatCommand::AlignRight => {}
        }
        self.formatter.format(command);
    }

    pub fn undo(&mut self) {
        self.formatter.undo();
    }

    pub fn redo(&mut self) {
        self.formatter.redo();
    }
}

pub fn font_family_css(family: &str) -> String {
    format!("font-family: {family}")
}

pub fn font_size_css(size: u32) -> String {
    format!("font-size: {size}px")
}
