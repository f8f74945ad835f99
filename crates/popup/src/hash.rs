/// Fragment keys that mark an authorization response.
const KNOWN_RESPONSE_KEYS: &[&str] = &[
    "code",
    "error",
    "error_description",
    "state",
    "access_token",
    "id_token",
];

/// Whether a URL fragment carries a known authorization-result parameter.
///
/// Accepts the fragment with or without its leading `#`. A fragment like
/// `#/route` or `#loading` is not a response; `#code=...&state=...` is.
pub fn hash_contains_known_properties(hash: &str) -> bool {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        return false;
    }
    url::form_urlencoded::parse(fragment.as_bytes())
        .any(|(key, _)| KNOWN_RESPONSE_KEYS.contains(&key.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_authorization_code_fragment() {
        assert!(hash_contains_known_properties("#code=abc123&state=xyz"));
        assert!(hash_contains_known_properties("code=abc123"));
    }

    #[test]
    fn recognizes_error_fragments() {
        assert!(hash_contains_known_properties("#error=access_denied"));
        assert!(hash_contains_known_properties(
            "#error_description=user%20denied"
        ));
    }

    #[test]
    fn recognizes_implicit_flow_fragments() {
        assert!(hash_contains_known_properties("#access_token=tok&expires_in=3600"));
        assert!(hash_contains_known_properties("#id_token=eyJ"));
    }

    #[test]
    fn rejects_empty_and_bare_hash() {
        assert!(!hash_contains_known_properties(""));
        assert!(!hash_contains_known_properties("#"));
    }

    #[test]
    fn rejects_unrelated_fragments() {
        assert!(!hash_contains_known_properties("#/settings/profile"));
        assert!(!hash_contains_known_properties("#loading"));
        assert!(!hash_contains_known_properties("#foo=bar&baz=qux"));
    }

    #[test]
    fn key_must_match_exactly() {
        // `statement=...` must not be mistaken for `state=...`.
        assert!(!hash_contains_known_properties("#statement=1"));
        assert!(!hash_contains_known_properties("#encode=1"));
    }
}
