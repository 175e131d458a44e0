//! Text helpers
//!
//! Normalization of technology names and sanitization of generated markdown

/// Normalize a technology name for use as an identity key
///
/// Trims surrounding whitespace, drops apostrophes and internal spaces,
/// and lowercases. Idempotent.
pub fn normalize_technology(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace('\'', "")
        .replace(' ', "")
}

/// Capitalize each whitespace-separated word
///
/// Used to build the display name shown in the navigation menu.
pub fn capitalize_each_word(words: &str) -> String {
    words
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sanitize generated material for the downstream markdown renderer
///
/// Strips surrounding whitespace and embedded double quotes, then escapes
/// literal `>` characters which the renderer would otherwise treat as markup.
pub fn sanitize_material(content: &str) -> String {
    content.trim().replace('"', "").replace('>', "\\>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize_technology(" Apache Kafka "), "apachekafka");
        assert_eq!(normalize_technology("OCaml's stdlib"), "ocamlsstdlib");
        assert_eq!(normalize_technology("React"), "react");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in [" Apache Kafka ", "Rust", "don't panic", "  spaced  out  "] {
            let once = normalize_technology(input);
            assert_eq!(normalize_technology(&once), once);
        }
    }

    #[test]
    fn test_capitalize_each_word() {
        assert_eq!(capitalize_each_word("apache kafka"), "Apache Kafka");
        assert_eq!(capitalize_each_word("rust"), "Rust");
        assert_eq!(capitalize_each_word("  extra   spaces "), "Extra Spaces");
        assert_eq!(capitalize_each_word(""), "");
    }

    #[test]
    fn test_sanitize_material() {
        assert_eq!(sanitize_material("  # Rust\n"), "# Rust");
        assert_eq!(sanitize_material("say \"hello\""), "say hello");
        assert_eq!(sanitize_material("a > b"), "a \\> b");
        assert_eq!(
            sanitize_material(" \"quoted\" > arrow "),
            "quoted \\> arrow"
        );
    }
}
