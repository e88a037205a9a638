use serde::{Deserialize, Serialize};

/// Content category of a wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Anime,
    People,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Anime => "anime",
            Category::People => "people",
            Category::Other => "other",
        }
    }
}

/// Purity rating as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purity {
    Sfw,
    Sketchy,
    Nsfw,
    #[default]
    #[serde(other)]
    Other,
}

/// Thumbnail variants of a wallpaper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbs {
    pub large: String,
    pub original: String,
    pub small: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub purity: Option<Purity>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A single catalog item.
///
/// `id`, `url`, `path`, `thumbs`, the dimensions and `resolution` are
/// required; everything else falls back to an empty value when the upstream
/// omits it. Search results never carry `tags`; only detail lookups do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallpaper {
    pub id: String,
    pub url: String,
    /// Full-size image.
    pub path: String,
    pub thumbs: Thumbs,
    pub dimension_x: u32,
    pub dimension_y: u32,
    pub resolution: String,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub purity: Purity,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub ratio: Option<String>,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Which rendition a download option points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadTarget {
    Desktop,
    Mobile,
}

/// A downloadable rendition offered in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOption {
    pub target: DownloadTarget,
    /// Short caption shown under the option (resolution, or "Optimized").
    pub detail: String,
    pub url: String,
}

/// The first few tags of a wallpaper plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [Tag],
    pub hidden: usize,
}

impl Wallpaper {
    /// Full-size original for desktops, the large thumbnail for phones.
    pub fn download_options(&self) -> [DownloadOption; 2] {
        [
            DownloadOption {
                target: DownloadTarget::Desktop,
                detail: self.resolution.clone(),
                url: self.path.clone(),
            },
            DownloadOption {
                target: DownloadTarget::Mobile,
                detail: "Optimized".to_string(),
                url: self.thumbs.large.clone(),
            },
        ]
    }

    /// Link to share: the short URL when the catalog provides one.
    pub fn share_link(&self) -> &str {
        self.short_url.as_deref().unwrap_or(&self.url)
    }

    /// Upper-cased image format, `image/jpeg` → `JPEG`.
    pub fn file_format(&self) -> Option<String> {
        self.file_type.as_deref().map(|mime| {
            mime.rsplit('/')
                .next()
                .unwrap_or(mime)
                .to_ascii_uppercase()
        })
    }

    pub fn tag_preview(&self, limit: usize) -> TagPreview<'_> {
        let shown = &self.tags[..self.tags.len().min(limit)];
        TagPreview {
            shown,
            hidden: self.tags.len() - shown.len(),
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.dimension_x >= self.dimension_y
    }
}
