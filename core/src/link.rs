/// Base URL for English Wikipedia article links.
pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Wikipedia article URL for a club: spaces become underscores.
///
/// Purely textual; the page is not checked for existence.
pub fn wiki_link(club_name: &str) -> String {
    wiki_link_with_base(WIKIPEDIA_BASE_URL, club_name)
}

pub fn wiki_link_with_base(base_url: &str, club_name: &str) -> String {
    format!("{}{}", base_url, club_name.replace(' ', "_"))
}
