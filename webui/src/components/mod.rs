//! Reusable view components.

pub mod mask_editor;
pub mod nav;
