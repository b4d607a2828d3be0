//! Application type tags

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix of the per-project content window family
const CONTENT_PREFIX: &str = "project-";

/// Error parsing an application-type tag
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppTypeError {
    /// Tag names no known application and no content window
    #[error("unknown application type: {0:?}")]
    Unknown(String),
}

/// A per-project content window shown in an external frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentApp {
    /// Slug following the `project-` prefix
    pub slug: String,
    /// Display title
    pub title: String,
    /// Frame URL (None = placeholder page)
    pub url: Option<String>,
}

impl ContentApp {
    /// Create a content app with a title derived from the slug
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let title = humanize(&slug);
        Self { slug, title, url: None }
    }

    /// Attach the frame URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Application hosted by a window
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppType {
    /// Curriculum vitae viewer
    Resume,
    /// Project browser folder
    Projects,
    /// Contact form
    Contacts,
    /// "About this computer" panel
    SystemInfo,
    /// Music player
    MediaPlayer,
    /// Dynamically spawned project page
    Content(ContentApp),
}

impl AppType {
    /// Canonical tag, also used as the window identity
    pub fn tag(&self) -> String {
        match self {
            AppType::Resume => "resume".to_string(),
            AppType::Projects => "projects".to_string(),
            AppType::Contacts => "contacts".to_string(),
            AppType::SystemInfo => "system-info".to_string(),
            AppType::MediaPlayer => "media-player".to_string(),
            AppType::Content(content) => format!("{}{}", CONTENT_PREFIX, content.slug),
        }
    }

    /// Attach a frame URL (only meaningful for content windows)
    pub fn with_url(self, url: Option<&str>) -> Self {
        match (self, url) {
            (AppType::Content(content), Some(url)) => AppType::Content(content.with_url(url)),
            (app, _) => app,
        }
    }
}

impl FromStr for AppType {
    type Err = AppTypeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "resume" | "cv" => Ok(AppType::Resume),
            "projects" => Ok(AppType::Projects),
            "contacts" => Ok(AppType::Contacts),
            "system-info" | "computer" => Ok(AppType::SystemInfo),
            "media-player" | "winamp" => Ok(AppType::MediaPlayer),
            _ => match tag.strip_prefix(CONTENT_PREFIX) {
                Some(slug) if !slug.trim().is_empty() => Ok(AppType::Content(ContentApp::new(slug))),
                _ => Err(AppTypeError::Unknown(tag.to_string())),
            },
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Turn a slug into a title: `"my-cool_app"` becomes `"My Cool App"`
fn humanize(slug: &str) -> String {
    slug.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_tags() {
        assert_eq!("resume".parse::<AppType>(), Ok(AppType::Resume));
        assert_eq!("projects".parse::<AppType>(), Ok(AppType::Projects));
        assert_eq!("contacts".parse::<AppType>(), Ok(AppType::Contacts));
        assert_eq!("system-info".parse::<AppType>(), Ok(AppType::SystemInfo));
        assert_eq!("media-player".parse::<AppType>(), Ok(AppType::MediaPlayer));
    }

    #[test]
    fn test_parse_legacy_aliases() {
        assert_eq!("cv".parse::<AppType>(), Ok(AppType::Resume));
        assert_eq!("computer".parse::<AppType>(), Ok(AppType::SystemInfo));
        assert_eq!("winamp".parse::<AppType>(), Ok(AppType::MediaPlayer));
    }

    #[test]
    fn test_parse_content_tag() {
        let app: AppType = "project-pixel-garden".parse().unwrap();
        match &app {
            AppType::Content(content) => {
                assert_eq!(content.slug, "pixel-garden");
                assert_eq!(content.title, "Pixel Garden");
                assert!(content.url.is_none());
            }
            other => panic!("Expected content app, got {:?}", other),
        }
        assert_eq!(app.tag(), "project-pixel-garden");
    }

    #[test]
    fn test_parse_unknown_tag() {
        assert_eq!(
            "recycle".parse::<AppType>(),
            Err(AppTypeError::Unknown("recycle".to_string()))
        );
        assert!("project-".parse::<AppType>().is_err());
        assert!("".parse::<AppType>().is_err());
    }

    #[test]
    fn test_tag_roundtrip() {
        for tag in ["resume", "projects", "contacts", "system-info", "media-player", "project-x"] {
            let app: AppType = tag.parse().unwrap();
            assert_eq!(app.tag(), tag);
            assert_eq!(app.to_string(), tag);
        }
    }

    #[test]
    fn test_with_url_only_affects_content() {
        let app = AppType::Resume.with_url(Some("https://example.com"));
        assert_eq!(app, AppType::Resume);

        let app: AppType = "project-demo".parse().unwrap();
        match app.with_url(Some("https://example.com/demo")) {
            AppType::Content(content) => {
                assert_eq!(content.url.as_deref(), Some("https://example.com/demo"));
            }
            other => panic!("Expected content app, got {:?}", other),
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("my-cool_app"), "My Cool App");
        assert_eq!(humanize("solo"), "Solo");
        assert_eq!(humanize("--edge--case"), "Edge Case");
    }
}
