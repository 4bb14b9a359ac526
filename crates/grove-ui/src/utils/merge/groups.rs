//! Tailwind utility class groups and their conflicts.
//!
//! A class belongs to the first rule whose prefix matches and whose matcher
//! accepts the remainder. Prefixes are tried longest first, so `border-t-2`
//! is checked against `border-t` before `border`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::validators::{
    Validator, is_animation, is_any, is_aspect, is_bg_image, is_blur, is_color, is_duration,
    is_ease, is_empty, is_flex, is_font_size, is_font_weight, is_fraction, is_grid_template, is_grow,
    is_inset, is_integer_or_arbitrary, is_leading, is_line_position, is_margin,
    is_number_or_arbitrary, is_order, is_radius, is_shadow_size, is_size, is_spacing, is_span,
    is_tracking, is_transition, is_translate, is_width, is_z_index,
};

#[derive(Clone, Copy)]
enum Matcher {
    Empty,
    Keywords(&'static [&'static str]),
    Test(Validator),
}

impl Matcher {
    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Empty => value.is_empty(),
            Self::Keywords(words) => words.contains(&value),
            Self::Test(test) => test(value),
        }
    }
}

#[derive(Clone, Copy)]
struct Rule {
    group: &'static str,
    matcher: Matcher,
}

/// Lookup tables for class group membership and cross-group conflicts.
pub(super) struct ClassGroups {
    rules: HashMap<&'static str, Vec<Rule>>,
    conflicts: HashMap<&'static str, &'static [&'static str]>,
}

pub(super) static CLASS_GROUPS: Lazy<ClassGroups> = Lazy::new(ClassGroups::tailwind);

/// Border side prefixes with their width and color groups.
const BORDER_SIDES: [(&str, &str, &str); 8] = [
    ("border-x", "border-w-x", "border-color-x"),
    ("border-y", "border-w-y", "border-color-y"),
    ("border-s", "border-w-s", "border-color-s"),
    ("border-e", "border-w-e", "border-color-e"),
    ("border-t", "border-w-t", "border-color-t"),
    ("border-r", "border-w-r", "border-color-r"),
    ("border-b", "border-w-b", "border-color-b"),
    ("border-l", "border-w-l", "border-color-l"),
];
const ALIGN: &[&str] = &[
    "normal", "start", "end", "center", "between", "around", "evenly", "stretch", "baseline",
];

impl ClassGroups {
    fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            conflicts: HashMap::new(),
        }
    }

    fn rule(&mut self, prefix: &'static str, group: &'static str, matcher: Matcher) {
        self.rules
            .entry(prefix)
            .or_default()
            .push(Rule { group, matcher });
    }

    fn test(&mut self, prefix: &'static str, group: &'static str, validator: Validator) {
        self.rule(prefix, group, Matcher::Test(validator));
    }

    fn keywords(
        &mut self,
        prefix: &'static str,
        group: &'static str,
        words: &'static [&'static str],
    ) {
        self.rule(prefix, group, Matcher::Keywords(words));
    }

    fn exact(&mut self, group: &'static str, names: &'static [&'static str]) {
        for name in names {
            self.rule(name, group, Matcher::Empty);
        }
    }

    fn conflict(&mut self, group: &'static str, others: &'static [&'static str]) {
        self.conflicts.insert(group, others);
    }

    /// Group of a class with variants, important flag and sign removed.
    pub(super) fn group_of(&self, class: &str) -> Option<&'static str> {
        if let Some(group) = self.match_rule(class, "") {
            return Some(group);
        }
        for index in top_level_dashes(class).into_iter().rev() {
            if index == 0 {
                continue;
            }
            if let Some(group) = self.match_rule(&class[..index], &class[index + 1..]) {
                return Some(group);
            }
        }
        None
    }

    /// Groups overridden by a class of `group`.
    pub(super) fn conflicts_of(&self, group: &str) -> &'static [&'static str] {
        self.conflicts.get(group).copied().unwrap_or(&[])
    }

    fn match_rule(&self, prefix: &str, value: &str) -> Option<&'static str> {
        self.rules
            .get(prefix)?
            .iter()
            .find(|rule| rule.matcher.accepts(value))
            .map(|rule| rule.group)
    }

    fn tailwind() -> Self {
        let mut groups = Self::empty();
        groups.layout();
        groups.flexbox_and_grid();
        groups.spacing();
        groups.sizing();
        groups.typography();
        groups.backgrounds();
        groups.borders();
        groups.effects_and_motion();
        groups.interactivity();
        groups.conflicts();
        groups
    }

    #[allow(clippy::too_many_lines)]
    fn layout(&mut self) {
        self.test("container", "container", is_empty);
        self.exact(
            "display",
            &[
                "block",
                "inline-block",
                "inline",
                "flex",
                "inline-flex",
                "table",
                "inline-table",
                "table-caption",
                "table-cell",
                "table-column",
                "table-column-group",
                "table-footer-group",
                "table-header-group",
                "table-row-group",
                "table-row",
                "flow-root",
                "grid",
                "inline-grid",
                "contents",
                "list-item",
                "hidden",
            ],
        );
        self.exact("position", &["static", "fixed", "absolute", "relative", "sticky"]);
        self.exact("visibility", &["visible", "invisible", "collapse"]);
        self.exact("sr", &["sr-only", "not-sr-only"]);
        self.exact("isolation", &["isolate", "isolation-auto"]);
        self.keywords("box", "box", &["border", "content"]);
        self.keywords("float", "float", &["right", "left", "none", "start", "end"]);
        self.keywords("clear", "clear", &["left", "right", "both", "none", "start", "end"]);
        self.keywords(
            "object",
            "object-fit",
            &["contain", "cover", "fill", "none", "scale-down"],
        );
        self.keywords(
            "object",
            "object-position",
            &[
                "bottom",
                "center",
                "left",
                "left-bottom",
                "left-top",
                "right",
                "right-bottom",
                "right-top",
                "top",
            ],
        );
        for (prefix, group) in [
            ("overflow", "overflow"),
            ("overflow-x", "overflow-x"),
            ("overflow-y", "overflow-y"),
        ] {
            self.keywords(prefix, group, &["auto", "hidden", "clip", "visible", "scroll"]);
        }
        for (prefix, group) in [
            ("overscroll", "overscroll"),
            ("overscroll-x", "overscroll-x"),
            ("overscroll-y", "overscroll-y"),
        ] {
            self.keywords(prefix, group, &["auto", "contain", "none"]);
        }
        for prefix in [
            "inset", "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
        ] {
            self.test(prefix, prefix, is_inset);
        }
        self.test("z", "z", is_z_index);
        self.keywords("aspect", "aspect", &["auto", "square", "video"]);
        self.test("aspect", "aspect", is_aspect);
    }

    fn flexbox_and_grid(&mut self) {
        self.test("basis", "basis", is_size);
        self.keywords(
            "flex",
            "flex-direction",
            &["row", "row-reverse", "col", "col-reverse"],
        );
        self.keywords("flex", "flex-wrap", &["wrap", "wrap-reverse", "nowrap"]);
        self.test("flex", "flex", is_flex);
        self.test("grow", "grow", is_grow);
        self.test("shrink", "shrink", is_grow);
        self.test("order", "order", is_order);
        self.test("grid-cols", "grid-cols", is_grid_template);
        self.test("grid-rows", "grid-rows", is_grid_template);
        self.keywords("col", "col-start-end", &["auto"]);
        self.test("col-span", "col-start-end", is_span);
        self.test("col-start", "col-start", is_line_position);
        self.test("col-end", "col-end", is_line_position);
        self.keywords("row", "row-start-end", &["auto"]);
        self.test("row-span", "row-start-end", is_span);
        self.test("row-start", "row-start", is_line_position);
        self.test("row-end", "row-end", is_line_position);
        self.keywords(
            "grid-flow",
            "grid-flow",
            &["row", "col", "dense", "row-dense", "col-dense"],
        );
        self.keywords("auto-cols", "auto-cols", &["auto", "min", "max", "fr"]);
        self.keywords("auto-rows", "auto-rows", &["auto", "min", "max", "fr"]);
        self.test("gap", "gap", is_spacing);
        self.test("gap-x", "gap-x", is_spacing);
        self.test("gap-y", "gap-y", is_spacing);
        self.keywords("justify", "justify-content", ALIGN);
        self.keywords(
            "justify-items",
            "justify-items",
            &["start", "end", "center", "stretch"],
        );
        self.keywords(
            "justify-self",
            "justify-self",
            &["auto", "start", "end", "center", "stretch"],
        );
        self.keywords("content", "align-content", ALIGN);
        self.keywords(
            "items",
            "align-items",
            &["start", "end", "center", "baseline", "stretch"],
        );
        self.keywords(
            "self",
            "align-self",
            &["auto", "start", "end", "center", "stretch", "baseline"],
        );
        self.keywords("place-content", "place-content", ALIGN);
        self.keywords(
            "place-items",
            "place-items",
            &["start", "end", "center", "baseline", "stretch"],
        );
        self.keywords(
            "place-self",
            "place-self",
            &["auto", "start", "end", "center", "stretch"],
        );
    }

    fn spacing(&mut self) {
        for prefix in ["p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl"] {
            self.test(prefix, prefix, is_spacing);
        }
        for prefix in ["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"] {
            self.test(prefix, prefix, is_margin);
        }
        self.test("space-x", "space-x", is_spacing);
        self.exact("space-x-reverse", &["space-x-reverse"]);
        self.test("space-y", "space-y", is_spacing);
        self.exact("space-y-reverse", &["space-y-reverse"]);
    }

    fn sizing(&mut self) {
        for prefix in ["w", "min-w", "max-w", "h", "min-h", "max-h", "size"] {
            self.test(prefix, prefix, is_size);
        }
    }

    fn typography(&mut self) {
        self.test("text", "font-size", is_font_size);
        self.keywords(
            "text",
            "text-alignment",
            &["left", "center", "right", "justify", "start", "end"],
        );
        self.keywords("text", "text-wrap", &["wrap", "nowrap", "balance", "pretty"]);
        self.test("text", "text-color", is_color);
        self.exact("font-smoothing", &["antialiased", "subpixel-antialiased"]);
        self.exact("font-style", &["italic", "not-italic"]);
        self.test("font", "font-weight", is_font_weight);
        self.test("font", "font-family", is_any);
        self.test("tracking", "tracking", is_tracking);
        self.test("leading", "leading", is_leading);
        self.keywords("list", "list-style-type", &["none", "disc", "decimal"]);
        self.keywords("list", "list-style-position", &["inside", "outside"]);
        self.exact(
            "text-decoration",
            &["underline", "overline", "line-through", "no-underline"],
        );
        self.keywords(
            "decoration",
            "text-decoration-style",
            &["solid", "dashed", "dotted", "double", "wavy"],
        );
        self.test("decoration", "text-decoration-color", is_color);
        self.exact(
            "text-transform",
            &["uppercase", "lowercase", "capitalize", "normal-case"],
        );
        self.exact("text-overflow", &["truncate", "text-ellipsis", "text-clip"]);
        self.test("indent", "indent", is_spacing);
        self.keywords(
            "align",
            "vertical-align",
            &[
                "baseline",
                "top",
                "middle",
                "bottom",
                "text-top",
                "text-bottom",
                "sub",
                "super",
            ],
        );
        self.keywords(
            "whitespace",
            "whitespace",
            &["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"],
        );
        self.keywords("break", "break", &["normal", "words", "all", "keep"]);
        self.keywords("hyphens", "hyphens", &["none", "manual", "auto"]);
    }

    fn backgrounds(&mut self) {
        self.keywords("bg", "bg-attachment", &["fixed", "local", "scroll"]);
        self.keywords(
            "bg-clip",
            "bg-clip",
            &["border", "padding", "content", "text"],
        );
        self.keywords("bg-origin", "bg-origin", &["border", "padding", "content"]);
        self.keywords(
            "bg",
            "bg-position",
            &[
                "bottom",
                "center",
                "left",
                "left-bottom",
                "left-top",
                "right",
                "right-bottom",
                "right-top",
                "top",
            ],
        );
        self.keywords("bg", "bg-repeat", &["repeat", "no-repeat"]);
        self.keywords("bg-repeat", "bg-repeat", &["x", "y", "round", "space"]);
        self.keywords("bg", "bg-size", &["auto", "cover", "contain"]);
        self.test("bg", "bg-image", is_bg_image);
        self.keywords(
            "bg-gradient-to",
            "bg-image",
            &["t", "tr", "r", "br", "b", "bl", "l", "tl"],
        );
        self.test("bg", "bg-color", is_color);
        self.test("from", "gradient-from", is_color);
        self.test("via", "gradient-via", is_color);
        self.test("to", "gradient-to", is_color);
        self.test("opacity", "opacity", is_number_or_arbitrary);
    }

    fn borders(&mut self) {
        self.test("rounded", "rounded", is_radius);
        for prefix in [
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ] {
            self.test(prefix, prefix, is_radius);
        }

        self.test("border", "border-w", is_width);
        self.keywords(
            "border",
            "border-style",
            &["solid", "dashed", "dotted", "double", "hidden", "none"],
        );
        self.test("border", "border-color", is_color);
        for (prefix, width, color) in BORDER_SIDES {
            self.test(prefix, width, is_width);
            self.test(prefix, color, is_color);
        }

        self.test("divide-x", "divide-x", is_width);
        self.exact("divide-x-reverse", &["divide-x-reverse"]);
        self.test("divide-y", "divide-y", is_width);
        self.exact("divide-y-reverse", &["divide-y-reverse"]);
        self.keywords(
            "divide",
            "divide-style",
            &["solid", "dashed", "dotted", "double", "none"],
        );
        self.test("divide", "divide-color", is_color);

        self.exact("outline-style", &["outline"]);
        self.keywords(
            "outline",
            "outline-style",
            &["none", "dashed", "dotted", "double"],
        );
        self.test("outline-offset", "outline-offset", is_width);
        self.test("outline", "outline-w", is_width);
        self.test("outline", "outline-color", is_color);

        self.exact("ring-w-inset", &["ring-inset"]);
        self.test("ring", "ring-w", is_width);
        self.test("ring", "ring-color", is_color);
        self.test("ring-offset", "ring-offset-w", is_width);
        self.test("ring-offset", "ring-offset-color", is_color);
    }

    fn effects_and_motion(&mut self) {
        self.test("shadow", "shadow", is_shadow_size);
        self.test("shadow", "shadow-color", is_color);
        self.test("blur", "blur", is_blur);
        self.test("transition", "transition", is_transition);
        self.test("duration", "duration", is_duration);
        self.test("ease", "ease", is_ease);
        self.test("delay", "delay", is_duration);
        self.test("animate", "animate", is_animation);
        self.test("scale", "scale", is_number_or_arbitrary);
        self.test("scale-x", "scale-x", is_number_or_arbitrary);
        self.test("scale-y", "scale-y", is_number_or_arbitrary);
        self.test("rotate", "rotate", is_number_or_arbitrary);
        self.test("translate-x", "translate-x", is_translate);
        self.test("translate-y", "translate-y", is_translate);
        self.test("skew-x", "skew-x", is_number_or_arbitrary);
        self.test("skew-y", "skew-y", is_number_or_arbitrary);
    }

    fn interactivity(&mut self) {
        self.test("cursor", "cursor", is_any);
        self.keywords("select", "select", &["none", "text", "all", "auto"]);
        self.keywords("pointer-events", "pointer-events", &["none", "auto"]);
        self.exact("resize", &["resize"]);
        self.keywords("resize", "resize", &["none", "y", "x"]);
        self.keywords("appearance", "appearance", &["none", "auto"]);
        self.test("fill", "fill", is_color);
        self.test("stroke", "stroke-w", is_width);
        self.test("stroke", "stroke", is_color);
        self.test("columns", "columns", is_integer_or_arbitrary);
        self.test("columns", "columns", is_fraction);
    }

    fn conflicts(&mut self) {
        self.conflict("overflow", &["overflow-x", "overflow-y"]);
        self.conflict("overscroll", &["overscroll-x", "overscroll-y"]);
        self.conflict(
            "inset",
            &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        );
        self.conflict("inset-x", &["right", "left"]);
        self.conflict("inset-y", &["top", "bottom"]);
        self.conflict("flex", &["basis", "grow", "shrink"]);
        self.conflict("gap", &["gap-x", "gap-y"]);
        self.conflict("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]);
        self.conflict("px", &["pr", "pl"]);
        self.conflict("py", &["pt", "pb"]);
        self.conflict("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]);
        self.conflict("mx", &["mr", "ml"]);
        self.conflict("my", &["mt", "mb"]);
        self.conflict("size", &["w", "h"]);
        self.conflict("font-size", &["leading"]);
        self.conflict(
            "rounded",
            &[
                "rounded-s",
                "rounded-e",
                "rounded-t",
                "rounded-r",
                "rounded-b",
                "rounded-l",
                "rounded-ss",
                "rounded-se",
                "rounded-ee",
                "rounded-es",
                "rounded-tl",
                "rounded-tr",
                "rounded-br",
                "rounded-bl",
            ],
        );
        self.conflict("rounded-s", &["rounded-ss", "rounded-es"]);
        self.conflict("rounded-e", &["rounded-se", "rounded-ee"]);
        self.conflict("rounded-t", &["rounded-tl", "rounded-tr"]);
        self.conflict("rounded-r", &["rounded-tr", "rounded-br"]);
        self.conflict("rounded-b", &["rounded-br", "rounded-bl"]);
        self.conflict("rounded-l", &["rounded-tl", "rounded-bl"]);
        self.conflict(
            "border-w",
            &[
                "border-w-x",
                "border-w-y",
                "border-w-s",
                "border-w-e",
                "border-w-t",
                "border-w-r",
                "border-w-b",
                "border-w-l",
            ],
        );
        self.conflict("border-w-x", &["border-w-r", "border-w-l"]);
        self.conflict("border-w-y", &["border-w-t", "border-w-b"]);
        self.conflict(
            "border-color",
            &[
                "border-color-x",
                "border-color-y",
                "border-color-s",
                "border-color-e",
                "border-color-t",
                "border-color-r",
                "border-color-b",
                "border-color-l",
            ],
        );
        self.conflict("border-color-x", &["border-color-r", "border-color-l"]);
        self.conflict("border-color-y", &["border-color-t", "border-color-b"]);
        self.conflict("scale", &["scale-x", "scale-y"]);
    }
}

/// Byte offsets of `-` characters outside `[...]` and `(...)`.
fn top_level_dashes(class: &str) -> Vec<usize> {
    let mut depth = 0_usize;
    let mut dashes = Vec::new();
    for (index, ch) in class.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '-' if depth == 0 => dashes.push(index),
            _ => {}
        }
    }
    dashes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(class: &str) -> Option<&'static str> {
        CLASS_GROUPS.group_of(class)
    }

    #[test]
    fn text_utilities_split_by_value_kind() {
        assert_eq!(group("text-lg"), Some("font-size"));
        assert_eq!(group("text-[14px]"), Some("font-size"));
        assert_eq!(group("text-center"), Some("text-alignment"));
        assert_eq!(group("text-grove-600"), Some("text-color"));
        assert_eq!(group("text-[#fff]"), Some("text-color"));
        assert_eq!(group("text-ellipsis"), Some("text-overflow"));
    }

    #[test]
    fn longer_prefixes_take_precedence() {
        assert_eq!(group("border-t-2"), Some("border-w-t"));
        assert_eq!(group("border-t-bark"), Some("border-color-t"));
        assert_eq!(group("border"), Some("border-w"));
        assert_eq!(group("border-dashed"), Some("border-style"));
        assert_eq!(group("min-w-0"), Some("min-w"));
        assert_eq!(group("rounded-tl-lg"), Some("rounded-tl"));
    }

    #[test]
    fn flex_family_is_disambiguated() {
        assert_eq!(group("flex"), Some("display"));
        assert_eq!(group("flex-row-reverse"), Some("flex-direction"));
        assert_eq!(group("flex-wrap"), Some("flex-wrap"));
        assert_eq!(group("flex-1"), Some("flex"));
        assert_eq!(group("inline-flex"), Some("display"));
    }

    #[test]
    fn dashes_inside_brackets_are_not_split_points() {
        assert_eq!(top_level_dashes("p-[calc(1rem-2px)]"), vec![1]);
        assert_eq!(group("p-[calc(1rem-2px)]"), Some("p"));
    }

    #[test]
    fn unknown_classes_have_no_group() {
        assert_eq!(group("prose-grove"), None);
        assert_eq!(group("gutter-item"), None);
    }

    #[test]
    fn conflicts_are_directional() {
        assert!(CLASS_GROUPS.conflicts_of("p").contains(&"px"));
        assert_eq!(CLASS_GROUPS.conflicts_of("px"), &["pr", "pl"]);
        assert!(CLASS_GROUPS.conflicts_of("pl").is_empty());
    }
}
