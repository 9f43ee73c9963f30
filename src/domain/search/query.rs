// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Category;
use url::Url;

/// Fixed number of results requested per search.
pub const RESULT_LIMIT: u32 = 200;

/// Build the catalog search URL for `text` in `category`.
///
/// The term is percent-encoded with every character outside the unreserved
/// set escaped, so query delimiters (`&`, `=`, `?`, `#`, space) never leak
/// into the query structure.
///
/// # Arguments
/// * `base_url` - Search endpoint, e.g. `https://itunes.apple.com/search`
/// * `text` - Raw user input, not trimmed
/// * `category` - Category filter mapped to the `entity` parameter
pub fn build_search_url(
    base_url: &str,
    text: &str,
    category: Category,
) -> Result<Url, url::ParseError> {
    let url_string = format!(
        "{}?term={}&limit={}&entity={}",
        base_url.trim_end_matches('?'),
        urlencoding::encode(text),
        RESULT_LIMIT,
        category.entity_token()
    );
    Url::parse(&url_string)
}
