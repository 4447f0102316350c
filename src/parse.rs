//! The conversion pipeline: structural rules, media handlers, cleanup.
//!
//! Each stage re-scans the whole text. Cleanup must run last or it would
//! strip `[video]`/`[img]` tags before the media handlers see them.

use crate::error::Result;
use crate::media;
use crate::options::Options;
use crate::rules::{apply_rules, cleanup_rules, structural_rules};

/// Converts BBCode to HTML with no size guard.
pub(crate) fn convert(bbcode: &str) -> String {
    log::debug!("converting {} bytes of BBCode", bbcode.len());

    let html = apply_rules(bbcode.to_owned(), structural_rules());
    log::debug!("structural rules done ({} bytes)", html.len());

    let html = media::apply_media_handlers(&html);
    log::debug!("media handlers done ({} bytes)", html.len());

    let html = apply_rules(html, cleanup_rules());
    log::debug!("cleanup done ({} bytes)", html.len());

    html
}

/// Rejects input longer than `options.max_input_len`.
pub(crate) fn guard(len: usize, options: &Options) -> Result<()> {
    options.check_len(len).inspect_err(|err| {
        log::warn!("rejecting BBCode input: {err}");
    })
}

/// Converts BBCode to HTML after checking the configured size guard.
pub(crate) fn convert_with_options(bbcode: &str, options: &Options) -> Result<String> {
    guard(bbcode.len(), options)?;
    Ok(convert(bbcode))
}
