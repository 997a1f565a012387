// catalog/controller/deep_link.rs - Initial state from page-entry parameters
//
// Read once at mount. Nothing is written back to the location.

/// Parameter names accepted for the initial search term, in priority order
pub const SEARCH_PARAMS: [&str; 2] = ["search", "q"];
pub const CATEGORY_PARAM: &str = "category";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeepLinkSeed {
    pub search_term: Option<String>,
    /// Category name as it appears in the catalog
    pub category: Option<String>,
}

impl DeepLinkSeed {
    /// Build a seed from a parameter lookup, such as a router's query map
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let search_term = SEARCH_PARAMS.iter().find_map(|key| non_blank(get(key)));
        let category = non_blank(get(CATEGORY_PARAM));
        Self { search_term, category }
    }

    /// Build a seed from decoded key/value pairs; the first occurrence wins
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .collect();
        Self::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_none() && self.category.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_search_and_category() {
        let seed = DeepLinkSeed::from_pairs([("search", "react"), ("category", "Web Development")]);
        assert_eq!(seed.search_term.as_deref(), Some("react"));
        assert_eq!(seed.category.as_deref(), Some("Web Development"));
    }

    #[test]
    fn test_q_is_a_fallback_for_search() {
        let seed = DeepLinkSeed::from_pairs([("q", "rust")]);
        assert_eq!(seed.search_term.as_deref(), Some("rust"));

        let seed = DeepLinkSeed::from_pairs([("q", "rust"), ("search", "go")]);
        assert_eq!(seed.search_term.as_deref(), Some("go"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let seed = DeepLinkSeed::from_pairs([("search", "   "), ("category", "")]);
        assert!(seed.is_empty());
    }

    #[test]
    fn test_unrelated_params_are_ignored() {
        let seed = DeepLinkSeed::from_pairs([("utm_source", "mail"), ("page", "3")]);
        assert_eq!(seed, DeepLinkSeed::default());
    }
}
