#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use bank::*;
pub use error::*;
pub use question::*;
pub use session::*;
pub use shuffle::*;
pub use tile::*;

mod bank;
mod error;
mod question;
mod session;
mod shuffle;
mod tile;

/// Number of tiles covering the mystery image, one per question.
pub const TILE_COUNT: TileIndex = 10;

/// Presentation settings carried by a session. The tile count and grid shape are fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub theme: String,
    pub image_url: String,
    pub bonus_message: String,
}

impl QuizConfig {
    pub const DEFAULT_THEME: &'static str = "India & Kerala Trivia";
    pub const DEFAULT_IMAGE_URL: &'static str = "https://images.unsplash.com/photo-1582139329536-e7284fece509?q=80&w=2000&auto=format&fit=crop";
    pub const DEFAULT_BONUS_MESSAGE: &'static str =
        "Find me and Say Saadhanam Kayil undo you will get the thrasher.";

    pub fn new(theme: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            image_url: image_url.into(),
            bonus_message: Self::DEFAULT_BONUS_MESSAGE.into(),
        }
    }

    pub fn with_bonus_message(mut self, message: impl Into<String>) -> Self {
        self.bonus_message = message.into();
        self
    }

    pub const fn total_tiles(&self) -> TileIndex {
        TILE_COUNT
    }

    pub const fn layout(&self) -> TileLayout {
        TileLayout::STANDARD
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THEME, Self::DEFAULT_IMAGE_URL)
    }
}
