// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// A catalog entry normalized from one of the upstream record shapes.
///
/// Every field is always present: absent upstream values become an empty
/// string or a zero price.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub name: String,
    pub artist_name: String,
    pub artwork_small_url: String,
    pub artwork_large_url: String,
    pub store_url: String,
    pub kind: String,
    pub currency: String,
    pub price: f64,
    pub genre: String,
}

impl SearchResult {
    /// Human label for this entry's kind.
    pub fn kind_for_display(&self) -> &str {
        display_name(&self.kind)
    }

    pub fn artist_label(&self) -> &str {
        if self.artist_name.is_empty() {
            "Unknown"
        } else {
            &self.artist_name
        }
    }

    /// One-line secondary text for list rows, e.g. `Adele (Song)`.
    pub fn subtitle(&self) -> String {
        if self.artist_name.is_empty() {
            "Unknown".to_string()
        } else {
            format!("{} ({})", self.artist_name, self.kind_for_display())
        }
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Price formatted in the entry's currency, or `Free` for a zero price.
    pub fn price_text(&self) -> String {
        if self.is_free() {
            return "Free".to_string();
        }

        let code = self.currency.to_ascii_uppercase();
        match code.as_str() {
            "" => format!("{:.2}", self.price),
            "USD" | "AUD" | "CAD" | "NZD" => format!("${:.2}", self.price),
            "EUR" => format!("€{:.2}", self.price),
            "GBP" => format!("£{:.2}", self.price),
            "JPY" => format!("¥{:.0}", self.price),
            _ => format!("{} {:.2}", code, self.price),
        }
    }
}

/// Maps an upstream `kind` value to its display label. Unknown kinds pass
/// through unchanged.
pub fn display_name(kind: &str) -> &str {
    match kind {
        "album" => "Album",
        "audiobook" => "Audio Book",
        "book" => "Book",
        "ebook" => "E-Book",
        "feature-movie" => "Movie",
        "music-video" => "Music Video",
        "podcast" => "Podcast",
        "software" => "App",
        "song" => "Song",
        "tv-episode" => "TV Episode",
        other => other,
    }
}
