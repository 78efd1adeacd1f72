//! Image URL extraction. Pure string work, no I/O: given the fetched
//! casts, produce the unique image URLs in first-seen order.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::hub::{Embed, Message};

/// Suffix test applied to embed URLs.
fn suffix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\.(png|jpe?g|gif|webp)$").unwrap())
}

/// Inline pattern applied to cast text. Runs of non-whitespace ahead of
/// the extension are part of the match; nothing after the extension is.
fn inline_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)https?://\S+\.(?:png|jpe?g|gif|webp)").unwrap())
}

/// True when the URL ends in one of the recognized image extensions
/// (png, jpg, jpeg, gif, webp), case-insensitively.
pub fn is_image_url(url: &str) -> bool {
    suffix_pattern().is_match(url)
}

/// Image URLs carried by a single cast: matching embeds first (in embed
/// order), then every inline match in the text.
pub fn images_from_cast(message: &Message) -> Vec<String> {
    let body = message.body();
    let mut images = Vec::new();

    for embed in &body.embeds {
        match embed {
            Embed::Url(url) => {
                if is_image_url(url) {
                    images.push(url.clone());
                }
            }
            Embed::Object(object) => {
                if let Some(url) = &object.url {
                    if is_image_url(url) {
                        images.push(url.clone());
                    }
                }
            }
            Embed::Other(_) => {}
        }
    }

    for found in inline_pattern().find_iter(&body.text) {
        images.push(found.as_str().to_string());
    }

    images
}

/// Unique image URLs across all casts, post order as fetched, first
/// occurrence kept. Exact string equality only: no case folding, no
/// query-string or trailing-slash normalization.
pub fn collect_images(messages: &[Message]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for message in messages {
        for url in images_from_cast(message) {
            if seen.insert(url.clone()) {
                images.push(url);
            }
        }
    }

    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast(json: &str) -> Message {
        serde_json::from_str(&format!(r#"{{"data":{{"castAddBody":{}}}}}"#, json)).unwrap()
    }

    #[test]
    fn test_embed_extension_filter() {
        let message = cast(r#"{"embeds":["a.png",{"url":"b.jpg"},"c.txt"]}"#);
        assert_eq!(images_from_cast(&message), vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_embed_suffix_is_case_insensitive() {
        let message = cast(r#"{"embeds":["a.PNG","b.JpEg"]}"#);
        assert_eq!(images_from_cast(&message), vec!["a.PNG", "b.JpEg"]);
    }

    #[test]
    fn test_object_embed_without_url_is_skipped() {
        let message = cast(r#"{"embeds":[{"castId":{"fid":1}},{"url":"d.webp"}]}"#);
        assert_eq!(images_from_cast(&message), vec!["d.webp"]);
    }

    #[test]
    fn test_inline_matches_are_case_insensitive_and_distinct() {
        let message = cast(r#"{"text":"see http://x.com/i.GIF and http://x.com/i.gif"}"#);
        assert_eq!(
            images_from_cast(&message),
            vec!["http://x.com/i.GIF", "http://x.com/i.gif"]
        );
    }

    #[test]
    fn test_inline_requires_http_scheme() {
        let message = cast(r#"{"text":"ftp://x.com/i.png and just-a-word.png"}"#);
        assert!(images_from_cast(&message).is_empty());
    }

    #[test]
    fn test_embeds_come_before_text() {
        let message =
            cast(r#"{"embeds":["https://e.example/e.png"],"text":"https://t.example/t.jpg"}"#);
        assert_eq!(
            images_from_cast(&message),
            vec!["https://e.example/e.png", "https://t.example/t.jpg"]
        );
    }

    #[test]
    fn test_empty_body_yields_nothing() {
        let message: Message = serde_json::from_str(r#"{}"#).unwrap();
        assert!(images_from_cast(&message).is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_in_order() {
        let messages = vec![
            cast(r#"{"embeds":["u1.png","u2.png"]}"#),
            cast(r#"{"embeds":["u1.png","u3.png"]}"#),
        ];
        assert_eq!(collect_images(&messages), vec!["u1.png", "u2.png", "u3.png"]);
    }

    #[test]
    fn test_no_normalization_across_casts() {
        let messages = vec![
            cast(r#"{"embeds":["https://x.com/a.png"]}"#),
            cast(r#"{"embeds":["https://x.com/A.PNG","https://x.com/a.png?w=1"]}"#),
        ];
        // differing case and query string stay distinct; note the query
        // string form only matches when it still ends in an extension
        assert_eq!(
            collect_images(&messages),
            vec!["https://x.com/a.png", "https://x.com/A.PNG"]
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let messages = vec![
            cast(r#"{"embeds":["a.png",{"url":"b.jpg"}],"text":"https://x.com/c.webp"}"#),
            cast(r#"{"embeds":["a.png"]}"#),
        ];
        assert_eq!(collect_images(&messages), collect_images(&messages));
    }
}
