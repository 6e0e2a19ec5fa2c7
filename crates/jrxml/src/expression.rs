//! Field references inside report expressions.
//!
//! Expressions are opaque to the codec except for one shape: `$F{name}`,
//! which is what a text field bound to a field name turns into. The reverse
//! lookup is a heuristic and recognises that exact shape only.

const FIELD_PREFIX: &str = "$F{";
const FIELD_SUFFIX: &str = "}";

/// The expression reading field `name`.
pub fn field_reference(name: &str) -> String {
    format!("{FIELD_PREFIX}{name}{FIELD_SUFFIX}")
}

/// The field read by `expression`, if it is a bare field reference.
pub fn referenced_field(expression: &str) -> Option<&str> {
    let name = expression
        .strip_prefix(FIELD_PREFIX)?
        .strip_suffix(FIELD_SUFFIX)?;
    if name.is_empty() || name.contains(['{', '}']) {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_round_trip() {
        assert_eq!(field_reference("total"), "$F{total}");
        assert_eq!(referenced_field("$F{total}"), Some("total"));
    }

    #[test]
    fn test_surrounding_whitespace_is_not_a_reference() {
        assert_eq!(referenced_field("  $F{total}\n"), None);
        assert_eq!(referenced_field(" $F{total} "), None);
        assert_eq!(referenced_field("$F{ total }"), Some(" total "));
    }

    #[test]
    fn test_other_shapes_are_not_references() {
        assert_eq!(referenced_field("$F{}"), None);
        assert_eq!(referenced_field("$F{a} + $F{b}"), None);
        assert_eq!(referenced_field("$P{title}"), None);
        assert_eq!(referenced_field("\"literal\""), None);
        assert_eq!(referenced_field("$F{total}.toString()"), None);
    }
}
