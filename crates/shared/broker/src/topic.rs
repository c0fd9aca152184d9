//! Topic pattern matching.
//!
//! Routing keys are dot-separated words (`order.created`). Binding
//! patterns may use `*` to match exactly one word and `#` to match zero
//! or more words.

/// Check whether a binding pattern matches a routing key.
pub fn matches(pattern: &str, routing_key: &str) -> bool {
    let pattern: Vec<&str> = pattern.split('.').collect();
    let key: Vec<&str> = routing_key.split('.').collect();
    matches_words(&pattern, &key)
}

fn matches_words(pattern: &[&str], key: &[&str]) -> bool {
    match (pattern.first(), key.first()) {
        (None, None) => true,
        (Some(&"#"), _) => {
            // `#` absorbs zero words, or one word and stays in place
            matches_words(&pattern[1..], key)
                || (!key.is_empty() && matches_words(pattern, &key[1..]))
        }
        (Some(&"*"), Some(_)) => matches_words(&pattern[1..], &key[1..]),
        (Some(word), Some(first)) if word == first => matches_words(&pattern[1..], &key[1..]),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::matches;

    #[test]
    fn exact_key_matches_itself() {
        assert!(matches("order.created", "order.created"));
        assert!(!matches("order.created", "order.updated"));
        assert!(!matches("order.created", "order"));
    }

    #[test]
    fn star_matches_exactly_one_word() {
        assert!(matches("order.*", "order.created"));
        assert!(matches("*.created", "user.created"));
        assert!(!matches("order.*", "order"));
        assert!(!matches("order.*", "order.created.eu"));
    }

    #[test]
    fn hash_matches_zero_or_more_words() {
        assert!(matches("#", "order.created"));
        assert!(matches("order.#", "order"));
        assert!(matches("order.#", "order.created.eu"));
        assert!(matches("#.created", "order.created"));
        assert!(!matches("user.#", "order.created"));
    }
}
