use url::Url;

/// Base address that canonical article links hang off.
const SHARE_BASE: &str = "https://news.example.com/article";

/// Build the canonical share URL for an article.
///
/// The id is query-encoded, so ids containing reserved characters still
/// produce a valid URL.
pub fn share_link(article_id: &str) -> String {
    // SHARE_BASE is a compile-time constant and always parses.
    let mut url = match Url::parse(SHARE_BASE) {
        Ok(u) => u,
        Err(_) => return format!("{}?id={}", SHARE_BASE, article_id),
    };
    url.query_pairs_mut().append_pair("id", article_id);
    url.to_string()
}
