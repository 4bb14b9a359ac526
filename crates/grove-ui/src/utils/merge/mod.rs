//! Tailwind-aware class merging.
//!
//! Classes are grouped by the utility they set (`px-*`, `text-<size>`,
//! `bg-<color>`, ...). When two classes with the same variants land in the
//! same group, or the later one's group overrides the earlier one's (`p-*`
//! over `px-*`), only the later class survives. Classes outside every known
//! group pass through; repeats of the same unknown class collapse to the last
//! occurrence.

mod groups;
mod validators;

use std::collections::HashSet;

use groups::CLASS_GROUPS;

/// Group a class claims once variants and flags are stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Group<'a> {
    Utility(&'static str),
    /// `[property:value]` classes, keyed by property name.
    Property(&'a str),
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum Claim<'a> {
    Grouped { modifiers: String, group: Group<'a> },
    Literal(&'a str),
}

#[derive(Debug, PartialEq, Eq)]
struct ParsedClass<'a> {
    variants: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(class: &'a str) -> Self {
        let mut variants = Vec::new();
        let mut depth = 0_usize;
        let mut start = 0;
        for (index, ch) in class.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    variants.push(&class[start..index]);
                    start = index + 1;
                }
                _ => {}
            }
        }

        let mut base = &class[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }
        Self {
            variants,
            important,
            base,
        }
    }

    /// Variants in canonical order plus the important marker.
    ///
    /// Ordinary variants commute, so runs of them are sorted. Arbitrary
    /// variants (`[&>p]`) keep their position because order matters there.
    fn modifier_key(&self) -> String {
        let mut ordered: Vec<&str> = Vec::with_capacity(self.variants.len());
        let mut run: Vec<&str> = Vec::new();
        for variant in &self.variants {
            if variant.starts_with('[') {
                run.sort_unstable();
                ordered.append(&mut run);
                ordered.push(variant);
            } else {
                run.push(variant);
            }
        }
        run.sort_unstable();
        ordered.append(&mut run);

        let mut key = ordered.join(":");
        if self.important {
            key.push('!');
        }
        key
    }

    fn group(&self) -> Option<Group<'a>> {
        if let Some(property) = arbitrary_property(self.base) {
            return Some(Group::Property(property));
        }
        let base = self.base.strip_prefix('-').unwrap_or(self.base);
        if let Some(slash) = top_level_slash(base)
            && let Some(group) = CLASS_GROUPS.group_of(&base[..slash])
        {
            return Some(Group::Utility(group));
        }
        CLASS_GROUPS.group_of(base).map(Group::Utility)
    }
}

fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    (!property.is_empty() && !value.is_empty()).then_some(property)
}

fn top_level_slash(base: &str) -> Option<usize> {
    let mut depth = 0_usize;
    for (index, ch) in base.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => return Some(index),
            _ => {}
        }
    }
    None
}

/// Resolve Tailwind conflicts in a space-separated class list.
///
/// The relative order of surviving classes is preserved.
///
/// ```
/// use grove_ui::merge_classes;
///
/// assert_eq!(merge_classes("px-2 py-1 bg-red-500 hover:bg-grove p-3 bg-bark"), "hover:bg-grove p-3 bg-bark");
/// ```
#[must_use]
pub fn merge_classes(classes: &str) -> String {
    let mut claimed: HashSet<Claim<'_>> = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();

    for class in classes.split_whitespace().rev() {
        let parsed = ParsedClass::parse(class);
        let Some(group) = parsed.group() else {
            if claimed.insert(Claim::Literal(class)) {
                kept.push(class);
            }
            continue;
        };

        let modifiers = parsed.modifier_key();
        let claim = Claim::Grouped {
            modifiers: modifiers.clone(),
            group,
        };
        if !claimed.insert(claim) {
            continue;
        }
        if let Group::Utility(name) = group {
            for &conflict in CLASS_GROUPS.conflicts_of(name) {
                claimed.insert(Claim::Grouped {
                    modifiers: modifiers.clone(),
                    group: Group::Utility(conflict),
                });
            }
        }
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_split_outside_brackets() {
        let parsed = ParsedClass::parse("dark:md:[&>p]:!bg-[url(a:b)]");
        assert_eq!(parsed.variants, vec!["dark", "md", "[&>p]"]);
        assert!(parsed.important);
        assert_eq!(parsed.base, "bg-[url(a:b)]");
    }

    #[test]
    fn modifier_key_sorts_ordinary_variants_only() {
        assert_eq!(ParsedClass::parse("hover:dark:p-2").modifier_key(), "dark:hover");
        assert_eq!(
            ParsedClass::parse("hover:[&>p]:dark:focus:p-2").modifier_key(),
            "hover:[&>p]:dark:focus"
        );
        assert_eq!(ParsedClass::parse("p-2!").modifier_key(), "!");
    }

    #[test]
    fn same_group_keeps_the_last_class() {
        assert_eq!(merge_classes("p-2 p-4"), "p-4");
        assert_eq!(merge_classes("text-[14px] text-lg"), "text-lg");
        assert_eq!(merge_classes("bg-black/50 bg-white"), "bg-white");
        assert_eq!(merge_classes("-mt-2 mt-4"), "mt-4");
        assert_eq!(merge_classes("w-1/2 w-full"), "w-full");
    }

    #[test]
    fn different_variants_do_not_conflict() {
        assert_eq!(merge_classes("hover:p-2 p-4"), "hover:p-2 p-4");
        assert_eq!(merge_classes("dark:hover:p-2 hover:dark:p-4"), "hover:dark:p-4");
        assert_eq!(merge_classes("!p-2 p-4"), "!p-2 p-4");
    }

    #[test]
    fn shorthands_override_earlier_longhands_only() {
        assert_eq!(merge_classes("px-2 p-4"), "p-4");
        assert_eq!(merge_classes("p-4 px-2"), "p-4 px-2");
        assert_eq!(merge_classes("leading-none text-lg"), "text-lg");
        assert_eq!(merge_classes("text-lg leading-none"), "text-lg leading-none");
        assert_eq!(merge_classes("border-t-2 border-4"), "border-4");
    }

    #[test]
    fn value_kinds_split_shared_prefixes() {
        assert_eq!(merge_classes("text-lg text-red-500"), "text-lg text-red-500");
        assert_eq!(merge_classes("text-[14px] text-[#fff]"), "text-[14px] text-[#fff]");
        assert_eq!(merge_classes("border-2 border-grove"), "border-2 border-grove");
        assert_eq!(merge_classes("flex flex-col flex-1"), "flex flex-col flex-1");
    }

    #[test]
    fn arbitrary_properties_group_by_property() {
        assert_eq!(
            merge_classes("[mask-type:luminance] [mask-type:alpha]"),
            "[mask-type:alpha]"
        );
        assert_eq!(
            merge_classes("[mask-type:alpha] [color:red]"),
            "[mask-type:alpha] [color:red]"
        );
    }

    #[test]
    fn unknown_classes_pass_through_once() {
        assert_eq!(
            merge_classes("gutter-item prose-grove p-2 gutter-item p-3"),
            "prose-grove gutter-item p-3"
        );
    }

    #[test]
    fn whitespace_is_normalized() {
        assert_eq!(merge_classes("  p-2 \n\t m-1  "), "p-2 m-1");
        assert_eq!(merge_classes(""), "");
    }
}
