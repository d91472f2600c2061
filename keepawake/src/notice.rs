// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! The advisory notice shown when the screen can't be kept on.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Element ID of the advisory notice.
pub const DEFAULT_NOTICE_ID: &str = "wakeLockMessage";

/// Text of the advisory notice.
pub const DEFAULT_NOTICE_HTML: &str = "⚠️ Seu navegador não suporta bloqueio de tela. Para evitar que a tela desligue, ajuste as configurações de energia do dispositivo.";

/// How long the advisory notice stays on the page, in milliseconds.
pub const DEFAULT_DISPLAY_MS: u32 = 10_000;

/// What the advisory notice looks like and how long it stays.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoticeOptions {
    /// Element ID, used to check whether the notice is already present.
    pub id: String,
    /// HTML content of the notice.
    pub html: String,
    pub style: NoticeStyle,
    /// Time after which the notice removes itself.
    pub display_ms: u32,
}

impl NoticeOptions {
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms.into())
    }
}

impl Default for NoticeOptions {
    fn default() -> Self {
        Self {
            id: DEFAULT_NOTICE_ID.to_string(),
            html: DEFAULT_NOTICE_HTML.to_string(),
            style: NoticeStyle::default(),
            display_ms: DEFAULT_DISPLAY_MS,
        }
    }
}

/// Inline CSS for the notice.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoticeStyle {
    pub position: String,
    pub bottom: String,
    pub right: String,
    pub padding: String,
    pub background_color: String,
    pub border: String,
    pub border_radius: String,
    pub z_index: String,
    pub font_size: String,
}

impl NoticeStyle {
    /// Returns the CSS property names and values to set on the notice element.
    pub fn properties(&self) -> [(&'static str, &str); 9] {
        [
            ("position", self.position.as_str()),
            ("bottom", self.bottom.as_str()),
            ("right", self.right.as_str()),
            ("padding", self.padding.as_str()),
            ("background-color", self.background_color.as_str()),
            ("border", self.border.as_str()),
            ("border-radius", self.border_radius.as_str()),
            ("z-index", self.z_index.as_str()),
            ("font-size", self.font_size.as_str()),
        ]
    }
}

impl Default for NoticeStyle {
    fn default() -> Self {
        Self {
            position: "fixed".to_string(),
            bottom: "10px".to_string(),
            right: "10px".to_string(),
            padding: "10px".to_string(),
            background_color: "#ffecb3".to_string(),
            border: "1px solid #ffd54f".to_string(),
            border_radius: "4px".to_string(),
            z_index: "1000".to_string(),
            font_size: "14px".to_string(),
        }
    }
}
