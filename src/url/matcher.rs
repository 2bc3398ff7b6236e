use serde::Deserialize;

/// Policy deciding whether a link's host counts as internal to the crawl's
/// anchor domain.
///
/// The default is a plain substring test, which over-matches: host
/// `notexample.com` counts as internal for anchor `example.com`. `Suffix`
/// is the stricter alternative for crawls that need proper subdomain
/// matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainMatch {
    /// Internal when the host contains the anchor domain anywhere.
    #[default]
    Contains,
    /// Internal when the host equals the anchor domain or ends with
    /// `.<domain>`.
    Suffix,
}

impl DomainMatch {
    /// Checks a lowercase host against a lowercase anchor domain.
    pub fn is_internal_host(&self, host: &str, domain: &str) -> bool {
        match self {
            DomainMatch::Contains => host.contains(domain),
            DomainMatch::Suffix => host == domain || host.ends_with(&format!(".{}", domain)),
        }
    }
}
