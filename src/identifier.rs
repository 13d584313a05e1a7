//! C# identifier checks used for namespace, class, enum and value names.

use regex::Regex;
use std::sync::LazyLock;

/// Words reserved by the C# grammar. They are only legal as identifiers
/// when escaped with a leading `@`.
pub const KEYWORDS: [&str; 77] = [
    "abstract", "as", "base", "bool", "break",
    "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default",
    "delegate", "do", "double", "else", "enum",
    "event", "explicit", "extern", "false", "finally",
    "fixed", "float", "for", "foreach", "goto",
    "if", "implicit", "in", "int", "interface",
    "internal", "is", "lock", "long", "namespace",
    "new", "null", "object", "operator", "out",
    "override", "params", "private", "protected", "public",
    "readonly", "ref", "return", "sbyte", "sealed",
    "short", "sizeof", "stackalloc", "static", "string",
    "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked",
    "unsafe", "ushort", "using", "virtual", "void",
    "volatile", "while",
];

// Start: letter or underscore.
// Rest: letter, decimal digit, connector punctuation, non-spacing mark,
// spacing combining mark, or format character.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_][\p{L}\p{Nd}\p{Pc}\p{Mn}\p{Mc}\p{Cf}]*$")
        .expect("invalid identifier regex")
});

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns true if `identifier` could be declared as a C# name.
///
/// Bare keywords are rejected, `@`-escaped keywords are accepted. Any other
/// use of `@` is rejected.
pub fn is_valid_identifier(identifier: &str) -> bool {
    if identifier.is_empty() {
        return false;
    }

    if let Some(escaped) = identifier.strip_prefix('@') {
        if is_keyword(escaped) {
            return true;
        }
    }

    if is_keyword(identifier) {
        return false;
    }

    IDENTIFIER.is_match(identifier)
}

/// Every `.`-separated segment of `namespace` must be an identifier.
/// Callers treat the empty namespace as absent before calling this.
pub fn is_valid_namespace(namespace: &str) -> bool {
    namespace.split('.').all(is_valid_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_identifiers() {
        assert!(is_valid_identifier("Red"));
        assert!(is_valid_identifier("_hidden"));
        assert!(is_valid_identifier("Value2"));
        assert!(is_valid_identifier("snake_case_name"));
    }

    #[test]
    fn test_rejects_bad_starts() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2Fast"));
        assert!(!is_valid_identifier("-dash"));
        assert!(!is_valid_identifier("@notakeyword"));
        assert!(!is_valid_identifier("@"));
    }

    #[test]
    fn test_rejects_bad_middles() {
        assert!(!is_valid_identifier("Big Boom"));
        assert!(!is_valid_identifier("a-b"));
        assert!(!is_valid_identifier("a.b"));
        assert!(!is_valid_identifier("tab\there"));
    }

    #[test]
    fn test_escaped_keywords() {
        for keyword in KEYWORDS {
            assert!(is_valid_identifier(&format!("@{keyword}")), "@{keyword}");
            assert!(!is_valid_identifier(keyword), "{keyword}");
        }
    }

    #[test]
    fn test_unicode_categories() {
        // letters outside ASCII
        assert!(is_valid_identifier("Ñandú"));
        assert!(is_valid_identifier("名前"));
        // combining acute accent (Mn) after the first char
        assert!(is_valid_identifier("e\u{0301}"));
        // zero width non-joiner (Cf)
        assert!(is_valid_identifier("a\u{200C}b"));
        // undertie (Pc)
        assert!(is_valid_identifier("a\u{203F}b"));
        // a mark cannot start an identifier
        assert!(!is_valid_identifier("\u{0301}e"));
        // non-decimal numbers are not digits
        assert!(!is_valid_identifier("aⅫ"));
    }

    #[test]
    fn test_namespace_segments() {
        assert!(is_valid_namespace("Game"));
        assert!(is_valid_namespace("Game.Ui.Colors"));
        assert!(is_valid_namespace("Game.@class"));
        assert!(!is_valid_namespace("Game..Ui"));
        assert!(!is_valid_namespace("Game."));
        assert!(!is_valid_namespace("Game.2d"));
        assert!(!is_valid_namespace("Game.class"));
    }
}
