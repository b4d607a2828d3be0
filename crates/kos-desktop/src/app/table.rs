//! Static per-application window configuration

use serde::Serialize;
use crate::math::{Size, Vec2};
use super::AppType;

/// URL shown by content windows opened without one
pub const PLACEHOLDER_URL: &str = "about:blank";

/// How a window renders its content
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentMode {
    /// Embedded view supplied by the shell
    Component,
    /// External page in an iframe
    Frame {
        /// Page to load
        url: String,
    },
}

impl ContentMode {
    /// Frame URL, if this is a frame
    pub fn url(&self) -> Option<&str> {
        match self {
            ContentMode::Component => None,
            ContentMode::Frame { url } => Some(url),
        }
    }
}

/// Default window properties for an application
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Window title
    pub title: String,
    /// Icon reference (asset path resolved by the shell)
    pub icon: &'static str,
    /// Default position (None = pick a scattered position)
    pub position: Option<Vec2>,
    /// Default size (None = the configured dynamic size)
    pub size: Option<Size>,
    /// Content rendering mode
    pub content: ContentMode,
}

/// Get the configuration for an application
///
/// The media player docks to the bottom-right corner, so its default
/// position depends on the viewport.
pub fn app_config(app: &AppType, viewport: Size) -> AppConfig {
    match app {
        AppType::Resume => AppConfig {
            title: "Curriculum Vitae.txt".to_string(),
            icon: "icons/win96/cv.png",
            position: Some(Vec2::new(10.0, 0.0)),
            size: Some(Size::new(600.0, 800.0)),
            content: ContentMode::Frame {
                url: "https://ivnkhr.com/cv".to_string(),
            },
        },
        AppType::Projects => AppConfig {
            title: "My Work - Folder".to_string(),
            icon: "icons/win96/projects.png",
            position: Some(Vec2::new(200.0, 100.0)),
            size: Some(Size::new(750.0, 550.0)),
            content: ContentMode::Frame {
                url: "https://ivnkhr.com/category/projects/".to_string(),
            },
        },
        AppType::Contacts => AppConfig {
            title: "Reach Me Out - Form".to_string(),
            icon: "icons/win96/contacts.png",
            position: Some(Vec2::new(350.0, 250.0)),
            size: Some(Size::new(400.0, 300.0)),
            content: ContentMode::Frame {
                url: "https://ivnkhr.com/contact-me".to_string(),
            },
        },
        AppType::SystemInfo => AppConfig {
            title: "About KittenOS".to_string(),
            icon: "icons/win96/pc.png",
            position: Some(Vec2::new(180.0, 120.0)),
            size: Some(Size::new(400.0, 400.0)),
            content: ContentMode::Component,
        },
        AppType::MediaPlayer => {
            let size = Size::new(400.0, 350.0);
            // 20px margin from the corner, plus room for the taskbar
            let position = Vec2::new(
                viewport.width - 20.0 - size.width,
                viewport.height - 20.0 - size.height - 30.0,
            );
            AppConfig {
                title: "Audio Player / [ KittenOST - ivantheone ]".to_string(),
                icon: "icons/win96/music.png",
                position: Some(position.clamp(Vec2::ZERO, position)),
                size: Some(size),
                content: ContentMode::Component,
            }
        }
        AppType::Content(content) => AppConfig {
            title: content.title.clone(),
            icon: "icons/win96/projects.png",
            position: None,
            size: None,
            content: ContentMode::Frame {
                url: content.url.clone().unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
            },
        },
    }
}
