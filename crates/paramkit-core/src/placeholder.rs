//! Path template placeholders.
//!
//! A path template such as `/user/{id}/posts/{postId}` carries `{identifier}`
//! tokens. [`extract_placeholders`] finds the identifiers; [`substitute`]
//! replaces each token with the value of the like-named field.
//!
//! The two are deliberately independent. Extraction only recognises ASCII
//! letters (`{id1}` is not a placeholder), while substitution is plain string
//! replacement keyed on field names, so a field named `id1` still fills `{id1}`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::keys::{KnownKeys, PlaceholderSet};
use crate::reflect::Reflect;

const PLACEHOLDER_PATTERN: &str = r"(?i)\{([a-zA-Z]*)\}";

static PLACEHOLDER_RE: Lazy<Option<Regex>> = Lazy::new(|| match Regex::new(PLACEHOLDER_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("Failed to compile placeholder pattern: {}", e);
        None
    }
});

/// Collect the distinct placeholder identifiers of `template`, in order of first appearance.
pub fn extract_placeholders(template: &str) -> PlaceholderSet {
    let mut keys = PlaceholderSet::default();
    let Some(re) = PLACEHOLDER_RE.as_ref() else {
        return keys;
    };

    for caps in re.captures_iter(template) {
        if let Some(identifier) = caps.get(1) {
            keys.insert(identifier.as_str());
        }
    }
    log::trace!("Placeholders in '{}': {:?}", template, keys.as_slice());
    keys
}

/// Replace every `{name}` token in `template` with the rendering of field `name`.
///
/// Fields are applied in declaration order against the progressively updated
/// path; known keys are skipped. Tokens without a matching field stay literal.
pub fn substitute<R: Reflect + ?Sized>(value: &R, template: &str, known: &KnownKeys) -> String {
    let mut path = template.to_string();

    for field in value.fields() {
        if known.contains(field.name) {
            continue;
        }
        let token = format!("{{{}}}", field.name);
        if !path.contains(&token) {
            continue;
        }
        let replacement = field.value.render();
        log::trace!("Substituting {} -> {}", token, replacement);
        path = path.replace(&token, &replacement);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Field;
    use serde_json::json;

    fn keys(template: &str) -> Vec<String> {
        extract_placeholders(template).into_vec()
    }

    #[test]
    fn test_extract_basic() {
        assert_eq!(keys("/user/{id}"), vec!["id"]);
        assert_eq!(keys("/user/{id}/posts/{postId}"), vec!["id", "postId"]);
        assert!(keys("").is_empty());
        assert!(keys("/plain/path").is_empty());
    }

    #[test]
    fn test_extract_dedups_repeated_tokens() {
        assert_eq!(keys("/a/{x}/b/{x}"), vec!["x"]);
        assert_eq!(keys("/{b}/{a}/{b}"), vec!["b", "a"]);
    }

    #[test]
    fn test_extract_letters_only() {
        assert!(keys("/item/{id1}").is_empty());
        assert!(keys("/item/{user_id}").is_empty());
        assert_eq!(keys("/item/{SKU}"), vec!["SKU"]);
    }

    #[test]
    fn test_extract_empty_identifier() {
        assert_eq!(keys("/bare/{}"), vec![""]);
    }

    #[test]
    fn test_extract_around_non_ascii() {
        assert_eq!(keys("/café/{name}/ünïcode/{id}"), vec!["name", "id"]);
    }

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let value = json!({"x": 5});
        let path = substitute(&value, "/a/{x}/b/{x}", &KnownKeys::default());
        assert_eq!(path, "/a/5/b/5");
    }

    #[test]
    fn test_substitute_leaves_unmatched_tokens() {
        let value = json!({"id": 1});
        let path = substitute(&value, "/item/{sku}", &KnownKeys::default());
        assert_eq!(path, "/item/{sku}");
    }

    #[test]
    fn test_substitute_skips_known_keys() {
        let value = json!({"method": "GET", "id": "abc"});
        let path = substitute(&value, "/{method}/{id}", &KnownKeys::default());
        assert_eq!(path, "/{method}/abc");
    }

    #[test]
    fn test_substitute_field_with_digits() {
        let value = json!({"id1": 9});
        assert!(extract_placeholders("/item/{id1}").is_empty());
        assert_eq!(
            substitute(&value, "/item/{id1}", &KnownKeys::default()),
            "/item/9"
        );
    }

    #[test]
    fn test_substitute_opaque_and_display() {
        struct Lookup;

        impl Reflect for Lookup {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![
                    Field::primitive_with_display("kind", 2, "premium"),
                    Field::opaque("cursor", &Some(3)),
                ]
            }
        }

        let path = substitute(&Lookup, "/{kind}/{cursor}", &KnownKeys::default());
        assert_eq!(path, "/premium/Some(3)");
    }
}
