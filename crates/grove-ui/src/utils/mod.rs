//! Class-name utilities for the Grove design system.
//!
//! ```
//! use grove_ui::cn;
//!
//! let active = true;
//! assert_eq!(cn!["px-2 py-1", active.then_some("px-4")], "py-1 px-4");
//! ```

mod class_value;
mod merge;

pub use class_value::{ClassValue, clsx};
pub use merge::merge_classes;

/// Version of the utilities module.
pub const UTILS_VERSION: &str = "0.2.0";

/// Combine conditional class values and resolve Tailwind conflicts.
///
/// Later classes win over earlier classes of the same utility family.
#[must_use]
pub fn cn(inputs: &[ClassValue<'_>]) -> String {
    merge_classes(&clsx(inputs))
}

/// Variadic form of [`cn`]; each argument converts into a [`ClassValue`].
#[macro_export]
macro_rules! cn {
    ($($input:expr),* $(,)?) => {
        $crate::utils::cn(&[$($crate::utils::ClassValue::from($input)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn merging_a_class_with_itself_is_idempotent() {
        assert_eq!(crate::cn!["p-4", "p-4"], "p-4");
    }

    #[test]
    fn later_conflicting_class_wins() {
        assert_eq!(crate::cn!["px-2", "px-4"], "px-4");
        assert_eq!(crate::cn!["px-2 py-1", "px-4"], "py-1 px-4");
    }

    #[test]
    fn falsy_inputs_are_dropped() {
        assert_eq!(crate::cn!["a", false, None::<&str>, "b"], "a b");
    }

    #[test]
    fn conditional_maps_and_nested_lists() {
        let mut toggles = BTreeMap::new();
        toggles.insert("bg-white", false);
        toggles.insert("bg-black", true);
        let nested = vec![ClassValue::from("text-sm"), ClassValue::from(vec!["font-bold"])];
        assert_eq!(
            crate::cn!["p-4 bg-white", toggles, nested],
            "p-4 bg-black text-sm font-bold"
        );
    }

    #[test]
    fn empty_invocation_is_empty() {
        assert_eq!(crate::cn![], "");
        assert_eq!(cn(&[]), "");
    }
}
