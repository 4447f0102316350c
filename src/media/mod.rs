//! Media embed handlers.
//!
//! These tags carry attributes or content that a single template cannot
//! express, so each gets a dedicated rewrite function. They run after the
//! structural table and before cleanup, which would otherwise strip them.

mod attributes;
mod image;
mod video;
mod youtube;

pub use attributes::{extract_attribute, AttributeBag};
pub use image::{embed_images, find_image_url};
pub use video::{embed_videos, VideoEmbed};
pub use youtube::embed_youtube;

/// Applies the handlers in fixed order: previews, videos, images.
#[must_use]
pub fn apply_media_handlers(text: &str) -> String {
    let text = embed_youtube(text);
    let text = embed_videos(&text);
    embed_images(&text)
}
