//! HTML rendering. The page mirrors the mini-app layout: a `#status`
//! element for plain-text messages and a `#gallery` container holding one
//! image element per unique URL.

use crate::config::GalleryConfig;

const STYLE: &str = "\
    body { font-family: sans-serif; margin: 1rem; }\n\
    #status { color: #555; }\n\
    #gallery { display: flex; flex-wrap: wrap; gap: 8px; }\n\
    .cast-image { max-width: 280px; max-height: 280px; object-fit: cover; border-radius: 6px; }";

/// Gallery page for a successful session: status cleared, one image
/// element per URL in the order given.
pub fn gallery_page(config: &GalleryConfig, images: &[String]) -> String {
    let items: String = images
        .iter()
        .map(|url| {
            format!(
                "    <img src=\"{}\" alt=\"Cast image\" class=\"cast-image\">\n",
                escape(url)
            )
        })
        .collect();
    page(config, "", &items)
}

/// Status-only page for every terminal state without images.
pub fn status_page(config: &GalleryConfig, message: &str) -> String {
    page(config, message, "")
}

fn page(config: &GalleryConfig, status: &str, gallery: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n{style}\n</style>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <p id=\"status\">{status}</p>\n\
         <div id=\"gallery\">\n{gallery}</div>\n\
         </body>\n\
         </html>\n",
        title = escape(&config.title),
        style = STYLE,
        status = escape(status),
        gallery = gallery,
    )
}

/// Escape for text and double-quoted attribute contexts.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GalleryConfig {
        GalleryConfig::default()
    }

    #[test]
    fn test_gallery_page_one_element_per_url() {
        let images = vec![
            "https://x.com/a.png".to_string(),
            "https://x.com/b.jpg".to_string(),
        ];
        let html = gallery_page(&config(), &images);

        assert_eq!(html.matches("<img ").count(), 2);
        assert!(html.contains("src=\"https://x.com/a.png\""));
        assert!(html.contains("src=\"https://x.com/b.jpg\""));
        assert!(html.contains("alt=\"Cast image\""));
        assert!(html.contains("class=\"cast-image\""));
        // status cleared on success
        assert!(html.contains("<p id=\"status\"></p>"));
    }

    #[test]
    fn test_gallery_page_preserves_order() {
        let images = vec!["first.png".to_string(), "second.png".to_string()];
        let html = gallery_page(&config(), &images);
        assert!(html.find("first.png").unwrap() < html.find("second.png").unwrap());
    }

    #[test]
    fn test_status_page_has_message_and_empty_gallery() {
        let html = status_page(&config(), "No images were found in your casts.");
        assert!(html.contains("<p id=\"status\">No images were found in your casts.</p>"));
        assert!(html.contains("<div id=\"gallery\">\n</div>"));
        assert_eq!(html.matches("<img ").count(), 0);
    }

    #[test]
    fn test_urls_are_attribute_escaped() {
        let images = vec!["https://x.com/a.png\"><script>".to_string()];
        let html = gallery_page(&config(), &images);
        assert!(!html.contains("<script>"));
        assert!(html.contains("a.png&quot;&gt;&lt;script&gt;"));
    }
}
