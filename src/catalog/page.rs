use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::Wallpaper;

/// Pagination counters of a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    /// The upstream sends this as a number or as a numeric string.
    #[serde(deserialize_with = "number_or_string")]
    pub per_page: u32,
    pub total: u64,
}

/// One batch of wallpapers plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub data: Vec<Wallpaper>,
    pub meta: PageMeta,
}

impl ResultPage {
    pub fn has_next(&self) -> bool {
        self.meta.current_page < self.meta.last_page
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("per_page is not a number: {:?}", s))),
    }
}
