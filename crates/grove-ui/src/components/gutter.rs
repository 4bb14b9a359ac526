//! The Grove annotation gutter.
//!
//! Annotations, a table of contents, and supplementary content rendered
//! alongside the main prose column.

use super::{Category, ComponentDescriptor};

/// Version of the gutter category.
pub const GUTTER_VERSION: &str = "0.2.0";

/// Prose column with an attached gutter.
pub const CONTENT_WITH_GUTTER: ComponentDescriptor = ComponentDescriptor {
    name: "ContentWithGutter",
    category: Category::Gutter,
    summary: "Prose layout with an annotation gutter",
};

/// Gutter column on the left of the prose.
pub const LEFT_GUTTER: ComponentDescriptor = ComponentDescriptor {
    name: "LeftGutter",
    category: Category::Gutter,
    summary: "Left-hand annotation column",
};

/// Single annotation anchored to the prose.
pub const GUTTER_ITEM: ComponentDescriptor = ComponentDescriptor {
    name: "GutterItem",
    category: Category::Gutter,
    summary: "One annotation in the gutter",
};

/// Heading outline for wide layouts.
pub const TABLE_OF_CONTENTS: ComponentDescriptor = ComponentDescriptor {
    name: "TableOfContents",
    category: Category::Gutter,
    summary: "Heading outline",
};

/// Heading outline for narrow layouts.
pub const MOBILE_TOC: ComponentDescriptor = ComponentDescriptor {
    name: "MobileTOC",
    category: Category::Gutter,
    summary: "Collapsed heading outline for small screens",
};

/// Expandable block of supplementary content.
pub const COLLAPSIBLE_SECTION: ComponentDescriptor = ComponentDescriptor {
    name: "CollapsibleSection",
    category: Category::Gutter,
    summary: "Expandable supplementary content",
};

pub(super) const COMPONENTS: &[ComponentDescriptor] = &[
    CONTENT_WITH_GUTTER,
    LEFT_GUTTER,
    GUTTER_ITEM,
    TABLE_OF_CONTENTS,
    MOBILE_TOC,
    COLLAPSIBLE_SECTION,
];
