//! Storage key derivation.

use uuid::Uuid;

/// Derive a collision-resistant storage key for an uploaded object.
///
/// Format: `{folder}/{token}-{sanitized_name}` where the token is a random
/// UUID v4, so two uploads of the same file name never collide. If
/// sanitization removes every character of the original name the key falls
/// back to `{folder}/{token}`.
#[must_use]
pub fn generate_object_key(folder: &str, file_name: &str) -> String {
    let token = Uuid::new_v4();
    let name = sanitize_file_name(file_name);

    if name.is_empty() {
        format!("{folder}/{token}")
    } else {
        format!("{folder}/{token}-{name}")
    }
}

/// Sanitize a file name for use inside a storage key.
///
/// Only ASCII alphanumeric characters, dots, hyphens, and underscores pass
/// through. Other ASCII characters are replaced with underscores; non-ASCII
/// characters are dropped, which keeps path separators and control bytes out
/// of the storage namespace.
fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                Some(c)
            } else if c.is_ascii() {
                Some('_')
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("deed.pdf", "deed.pdf")]
    #[case("floor plan (v2).pdf", "floor_plan__v2_.pdf")]
    #[case("../../etc/passwd", ".._.._etc_passwd")]
    #[case("test@#$%.doc", "test____.doc")]
    #[case("日本語.pdf", ".pdf")]
    fn test_sanitize_file_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_file_name(input), expected);
    }

    #[test]
    fn test_key_format() {
        let key = generate_object_key("properties", "deed.pdf");
        let (folder, rest) = key.split_once('/').expect("key has a folder segment");
        assert_eq!(folder, "properties");
        assert!(rest.ends_with("-deed.pdf"));

        let token = &rest[..36];
        assert!(Uuid::parse_str(token).is_ok());
        assert_eq!(rest.as_bytes()[36], b'-');
    }

    #[test]
    fn test_key_fallback_for_unicode_only_name() {
        let key = generate_object_key("uploads", "日本語");
        let (folder, rest) = key.split_once('/').expect("key has a folder segment");
        assert_eq!(folder, "uploads");
        assert!(Uuid::parse_str(rest).is_ok());
    }

    #[test]
    fn test_key_fallback_for_empty_name() {
        let key = generate_object_key("uploads", "");
        let rest = key.split_once('/').expect("key has a folder segment").1;
        assert!(Uuid::parse_str(rest).is_ok());
    }

    #[test]
    fn test_same_name_produces_distinct_keys() {
        let a = generate_object_key("uploads", "deed.pdf");
        let b = generate_object_key("uploads", "deed.pdf");
        assert_ne!(a, b);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // Property: the derived key never contains characters outside the safe
    // allow-list past the folder segment, for any input name.
    proptest! {
        #[test]
        fn prop_key_contains_only_safe_chars(name in ".*") {
            let key = generate_object_key("uploads", &name);
            let rest = key.split_once('/').expect("key has a folder segment").1;

            for c in rest.chars() {
                let is_safe = c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_';
                prop_assert!(is_safe, "Unexpected character in key: {}", c);
            }
        }
    }

    // Property: keys are prefixed by the folder and never collide across
    // calls with identical inputs.
    proptest! {
        #[test]
        fn prop_keys_are_unique_per_call(name in "[a-zA-Z0-9_-]{1,50}\\.[a-z]{2,4}") {
            let a = generate_object_key("uploads", &name);
            let b = generate_object_key("uploads", &name);

            prop_assert!(a.starts_with("uploads/"));
            prop_assert!(b.starts_with("uploads/"));
            prop_assert_ne!(a, b);
        }
    }

    // Property: sanitization never panics and never grows the name.
    proptest! {
        #[test]
        fn prop_sanitize_never_grows(name in ".*") {
            let sanitized = sanitize_file_name(&name);
            prop_assert!(sanitized.chars().count() <= name.chars().count());
        }
    }
}
