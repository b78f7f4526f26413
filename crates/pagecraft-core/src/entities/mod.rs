//! Entities placed on the document canvas.

mod overlay;
mod text_box;

pub use overlay::{IconAttributes, NewOverlay, Overlay, OverlayKind};
pub use text_box::{TextBox, TextBoxPatch};

use uuid::Uuid;

/// Unique identifier for entities.
///
/// Random v4 ids are never reused, even after the entity is removed.
pub type EntityId = Uuid;

/// Allocate a fresh entity id.
pub(crate) fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}
