//! Conditional class-name inputs.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// One input to [`clsx`](crate::utils::clsx) / [`cn`](crate::utils::cn).
///
/// Strings contribute their classes, falsy values contribute nothing, lists
/// flatten recursively, and toggles contribute the names whose flag is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassValue<'a> {
    /// Falsy input (`false`, `None`).
    #[default]
    Empty,
    /// Space-separated class names.
    Text(Cow<'a, str>),
    /// Nested inputs.
    List(Vec<ClassValue<'a>>),
    /// Class names with inclusion flags, in insertion order.
    Toggles(Vec<(Cow<'a, str>, bool)>),
}

impl<'a> ClassValue<'a> {
    /// Build a toggle set from `(class, enabled)` pairs.
    pub fn toggles<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<Cow<'a, str>>,
    {
        Self::Toggles(
            pairs
                .into_iter()
                .map(|(name, enabled)| (name.into(), enabled))
                .collect(),
        )
    }

    fn write_into(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(text) => push_class(out, text),
            Self::List(values) => {
                for value in values {
                    value.write_into(out);
                }
            }
            Self::Toggles(pairs) => {
                for (name, enabled) in pairs {
                    if *enabled {
                        push_class(out, name);
                    }
                }
            }
        }
    }
}

fn push_class(out: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(text);
}

/// Flatten conditional inputs into one space-joined class string.
#[must_use]
pub fn clsx(inputs: &[ClassValue<'_>]) -> String {
    let mut out = String::new();
    for input in inputs {
        input.write_into(&mut out);
    }
    out
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ClassValue<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for ClassValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

/// Booleans are never class names; both `true` and `false` contribute nothing.
impl From<bool> for ClassValue<'_> {
    fn from(_: bool) -> Self {
        Self::Empty
    }
}

impl<'a, T> From<Option<T>> for ClassValue<'a>
where
    T: Into<ClassValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<'a, T> From<Vec<T>> for ClassValue<'a>
where
    T: Into<ClassValue<'a>>,
{
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T, const N: usize> From<[T; N]> for ClassValue<'a>
where
    T: Into<ClassValue<'a>>,
{
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a> From<(&'a str, bool)> for ClassValue<'a> {
    fn from((name, enabled): (&'a str, bool)) -> Self {
        Self::toggles([(name, enabled)])
    }
}

impl<'a> From<BTreeMap<&'a str, bool>> for ClassValue<'a> {
    fn from(map: BTreeMap<&'a str, bool>) -> Self {
        Self::toggles(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_nested_inputs_in_order() {
        let inputs = [
            ClassValue::from("a  b"),
            ClassValue::from(vec![
                ClassValue::from("c"),
                ClassValue::from(vec![("d", true), ("e", false)]),
            ]),
            ClassValue::from(Some(String::from("f"))),
        ];
        assert_eq!(clsx(&inputs), "a  b c d f");
    }

    #[test]
    fn blank_and_falsy_inputs_add_no_separators() {
        let inputs = [
            ClassValue::from(""),
            ClassValue::from("   "),
            ClassValue::from(true),
            ClassValue::from(None::<&str>),
            ClassValue::from("x"),
        ];
        assert_eq!(clsx(&inputs), "x");
    }

    #[test]
    fn toggles_keep_insertion_order() {
        let value = ClassValue::toggles([("z", true), ("a", true), ("m", false)]);
        assert_eq!(clsx(&[value]), "z a");
    }
}
