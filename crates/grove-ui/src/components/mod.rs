//! Component catalog.
//!
//! Components render in the host framework; this crate only describes what
//! each category exports so tooling can list, look up and version them.

pub mod editor;
pub mod forms;
pub mod gutter;
pub mod icons;

use std::fmt;

use serde::Serialize;

/// Component category, matching the package's import paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Editor and admin components.
    Editor,
    /// Annotation gutter and table-of-contents layout.
    Gutter,
    /// SVG icon set.
    Icons,
    /// Specialized form inputs.
    Forms,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Self; 4] = [Self::Editor, Self::Gutter, Self::Icons, Self::Forms];

    /// Import path segment (`@groveengine/ui/<segment>`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Gutter => "gutter",
            Self::Icons => "icons",
            Self::Forms => "forms",
        }
    }

    /// Version exported by the category.
    #[must_use]
    pub const fn version(self) -> &'static str {
        match self {
            Self::Editor => editor::EDITOR_VERSION,
            Self::Gutter => gutter::GUTTER_VERSION,
            Self::Icons => icons::ICONS_VERSION,
            Self::Forms => forms::FORMS_VERSION,
        }
    }

    /// Components exported by the category.
    #[must_use]
    pub const fn components(self) -> &'static [ComponentDescriptor] {
        match self {
            Self::Editor => editor::COMPONENTS,
            Self::Gutter => gutter::COMPONENTS,
            Self::Icons => icons::COMPONENTS,
            Self::Forms => forms::COMPONENTS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exported component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    /// Export name (`MarkdownEditor`).
    pub name: &'static str,
    /// Owning category.
    pub category: Category,
    /// Short description of the component's role.
    pub summary: &'static str,
}

impl ComponentDescriptor {
    /// Import specifier for the component, e.g. `@groveengine/ui/editor`.
    #[must_use]
    pub fn import_path(&self) -> String {
        format!("@groveengine/ui/{}", self.category)
    }
}

/// Every component across all categories.
pub fn all() -> impl Iterator<Item = &'static ComponentDescriptor> {
    Category::ALL
        .into_iter()
        .flat_map(|category| category.components().iter())
}

/// Look up a component by export name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ComponentDescriptor> {
    all().find(|component| component.name == name)
}
