//! Editor and admin components.

use super::{Category, ComponentDescriptor};

/// Version of the editor category.
pub const EDITOR_VERSION: &str = "0.2.0";

/// Markdown editing surface.
pub const MARKDOWN_EDITOR: ComponentDescriptor = ComponentDescriptor {
    name: "MarkdownEditor",
    category: Category::Editor,
    summary: "Markdown editing surface",
};

/// Admin tool for gutter annotations.
pub const GUTTER_MANAGER: ComponentDescriptor = ComponentDescriptor {
    name: "GutterManager",
    category: Category::Editor,
    summary: "Manages gutter annotations for a post",
};

pub(super) const COMPONENTS: &[ComponentDescriptor] = &[MARKDOWN_EDITOR, GUTTER_MANAGER];
