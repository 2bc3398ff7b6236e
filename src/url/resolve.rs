use url::Url;

/// Resolves a possibly-relative link against a base URL.
///
/// Standard RFC 3986 relative-reference resolution as implemented by
/// [`Url::join`]: scheme/authority/query carry-over and `.`/`..` path
/// segment collapsing. A candidate that cannot be parsed as a URI
/// reference yields `None`; callers drop it rather than treating it as a
/// fatal error.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use rockpool::url::resolve;
///
/// let base = Url::parse("http://h/a/").unwrap();
/// let resolved = resolve(&base, "b/c").unwrap();
/// assert_eq!(resolved.as_str(), "http://h/a/b/c");
/// ```
pub fn resolve(base: &Url, candidate: &str) -> Option<Url> {
    base.join(candidate).ok()
}

/// Resolves every candidate against `base`, dropping the unresolvable ones.
pub fn resolve_all(base: &Url, candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .filter_map(|candidate| resolve(base, candidate).map(|resolved| resolved.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve(&base("http://h/a/"), "b/c").unwrap();
        assert_eq!(resolved.as_str(), "http://h/a/b/c");
    }

    #[test]
    fn test_resolve_parent_segment() {
        let resolved = resolve(&base("http://h/a/b/"), "../d").unwrap();
        assert_eq!(resolved.as_str(), "http://h/a/d");
    }

    #[test]
    fn test_resolve_root_relative() {
        let resolved = resolve(&base("http://site.tld/deep/page"), "/about").unwrap();
        assert_eq!(resolved.as_str(), "http://site.tld/about");
    }

    #[test]
    fn test_resolve_absolute_candidate_replaces_base() {
        let resolved = resolve(&base("http://site.tld/"), "http://other.tld/b").unwrap();
        assert_eq!(resolved.as_str(), "http://other.tld/b");
    }

    #[test]
    fn test_resolve_keeps_query() {
        let resolved = resolve(&base("http://h/a/"), "page?x=1").unwrap();
        assert_eq!(resolved.as_str(), "http://h/a/page?x=1");
    }

    #[test]
    fn test_resolve_malformed_candidate() {
        // An authority form with no host cannot be resolved
        assert!(resolve(&base("http://h/"), "http://").is_none());
    }

    #[test]
    fn test_resolve_all_drops_failures() {
        let candidates = vec![
            "b/c".to_string(),
            "http://".to_string(),
            "/about".to_string(),
        ];
        let resolved = resolve_all(&base("http://h/a/"), &candidates);
        assert_eq!(resolved, vec!["http://h/a/b/c", "http://h/about"]);
    }

    #[test]
    fn test_resolve_all_empty_input() {
        assert!(resolve_all(&base("http://h/"), &[]).is_empty());
    }
}
