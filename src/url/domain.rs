use url::{Host, Url};

/// Extracts the domain from a URL.
///
/// Returns the lowercase host portion, or `None` if the URL has no host.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use rockpool::url::extract_domain;
///
/// let url = Url::parse("https://Sub.Example.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("sub.example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|host| host.to_lowercase())
}

/// Derives the registrable domain a crawl is anchored to.
///
/// For DNS names this keeps the last two labels
/// (`a.b.host.tld` -> `host.tld`), so a crawl seeded anywhere inside a
/// site anchors on the site itself rather than the seed's subdomain.
/// IPv4/IPv6 hosts are kept whole. Returns `None` for URLs without a host.
pub fn registrable_domain(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(name) => {
            let name = name.to_lowercase();
            let labels: Vec<&str> = name.split('.').collect();
            if labels.len() <= 2 {
                Some(name)
            } else {
                Some(labels[labels.len() - 2..].join("."))
            }
        }
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}
