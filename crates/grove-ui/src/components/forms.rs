//! Specialized form inputs.

use super::{Category, ComponentDescriptor};

/// Version of the forms category.
pub const FORMS_VERSION: &str = "0.2.0";

/// Search field.
pub const SEARCH_INPUT: ComponentDescriptor = ComponentDescriptor {
    name: "SearchInput",
    category: Category::Forms,
    summary: "Search input with clear affordance",
};

pub(super) const COMPONENTS: &[ComponentDescriptor] = &[SEARCH_INPUT];
