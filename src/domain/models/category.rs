// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed filter over the kinds of catalog entries a search may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Music,
    Software,
    Ebooks,
}

impl Category {
    /// Every category, in the order a segmented picker presents them.
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Music,
        Category::Software,
        Category::Ebooks,
    ];

    /// Upstream `entity` query token for this category.
    pub fn entity_token(self) -> &'static str {
        match self {
            Category::All => "",
            Category::Music => "musicTrack",
            Category::Software => "software",
            Category::Ebooks => "ebook",
        }
    }

    /// Maps a picker position back to a category. Positions are looked up in
    /// [`Category::ALL`], not derived from the enum discriminant.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Music => "Music",
            Category::Software => "Software",
            Category::Ebooks => "E-books",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Category::All),
            "music" => Ok(Category::Music),
            "software" => Ok(Category::Software),
            "ebook" | "ebooks" => Ok(Category::Ebooks),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}
