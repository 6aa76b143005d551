//! # Inline Stage
//!
//! Runs over the whole joined text after the block stage, in this order:
//!
//! 1. bold `**text**`
//! 2. italic `*text*` (`emphasis`), which must come after bold
//! 3. links `[text](href)`
//! 4. images `![alt](src)`
//!
//! Links go first, so an image with alt text becomes `!<a ...>` and only
//! `![](src)` reaches the image rule. `images_before_links` swaps 3 and 4.
//!
//! Code is already hidden behind placeholders, so nothing here touches it.

pub mod cursor;
pub mod emphasis;

use regex::Captures;

use super::{
    kinds::{Image, Link, Strong},
    options::MarkdownOptions,
};

pub use emphasis::replace_emphasis;

/// Inline stage: bold, italic, links and images.
pub fn convert_inline(text: &str, options: &MarkdownOptions) -> String {
    let text = Strong::pattern().replace_all(text, Strong::REPLACEMENT);
    let text = replace_emphasis(&text);

    if options.images_before_links {
        let text = replace_images(&text, options.escape_inline_spans);
        replace_links(&text, options.escape_inline_spans)
    } else {
        let text = replace_links(&text, options.escape_inline_spans);
        replace_images(&text, options.escape_inline_spans)
    }
}

fn replace_links(text: &str, escape: bool) -> String {
    Link::pattern()
        .replace_all(text, |caps: &Captures<'_>| {
            Link::render(&caps[1], &caps[2], escape)
        })
        .into_owned()
}

fn replace_images(text: &str, escape: bool) -> String {
    Image::pattern()
        .replace_all(text, |caps: &Captures<'_>| {
            Image::render(&caps[1], &caps[2], escape)
        })
        .into_owned()
}
