//! SVG icon components used across the Grove platform.

use super::{Category, ComponentDescriptor};

/// Version of the icons category.
pub const ICONS_VERSION: &str = "0.2.0";

/// Icon set.
pub const ICONS: ComponentDescriptor = ComponentDescriptor {
    name: "Icons",
    category: Category::Icons,
    summary: "SVG icon set",
};

/// Legend explaining icon meanings.
pub const ICON_LEGEND: ComponentDescriptor = ComponentDescriptor {
    name: "IconLegend",
    category: Category::Icons,
    summary: "Legend for the icon set",
};

pub(super) const COMPONENTS: &[ComponentDescriptor] = &[ICONS, ICON_LEGEND];
