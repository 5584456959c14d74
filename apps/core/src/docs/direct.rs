//! Direct retrieval of the public reference page.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::sync::{Arc, LazyLock};
use tracing::debug;
use url::Url;

use super::parser::{DocParser, HeuristicParser};
use super::{join_segments, DocSource, DocSourceKind, DocumentationPayload};
use crate::error::AppError;

static CONTENT_BLOCKS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6, p, pre, li").expect("Invalid selector: content blocks")
});

/// Page chrome whose text never belongs to the reference content.
const SKIPPED_CONTAINERS: &[&str] = &["nav", "header", "footer", "script", "style"];
const BLOCK_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "p", "pre", "li"];

/// A block nested in another block is already part of its parent's text.
fn is_top_level_block(element: &ElementRef<'_>) -> bool {
    !element.ancestors().filter_map(ElementRef::wrap).any(|ancestor| {
        let name = ancestor.value().name();
        SKIPPED_CONTAINERS.contains(&name) || BLOCK_TAGS.contains(&name)
    })
}

fn inline_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reduce an HTML page to markdown-like text the heuristic parser understands.
///
/// Headings become `## ` lines, `pre` blocks become code fences and list items
/// become `- ` lines. Entities are decoded by the HTML parser.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();
    let mut previous_was_item = false;

    for element in document.select(&CONTENT_BLOCKS).filter(is_top_level_block) {
        let name = element.value().name();
        let is_item = name == "li";

        let block = if name == "pre" {
            let code: String = element.text().collect();
            let code = code.trim_matches('\n');
            if code.trim().is_empty() {
                continue;
            }
            format!("```\n{}\n```", code)
        } else {
            let inline = inline_text(&element);
            if inline.is_empty() {
                continue;
            }
            match name {
                "li" => format!("- {}", inline),
                "p" => inline,
                _ => format!("## {}", inline),
            }
        };

        if !text.is_empty() {
            text.push_str(if previous_was_item && is_item { "\n" } else { "\n\n" });
        }
        text.push_str(&block);
        previous_was_item = is_item;
    }

    text
}

/// Fetches `{base}/{property}` as HTML. Every failure is reported.
pub struct DirectDocSource {
    client: Client,
    base_url: Url,
    parser: Arc<dyn DocParser>,
}

impl DirectDocSource {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            parser: Arc::new(HeuristicParser),
        }
    }

    pub fn with_parser(mut self, parser: Arc<dyn DocParser>) -> Self {
        self.parser = parser;
        self
    }
}

#[async_trait]
impl DocSource for DirectDocSource {
    fn name(&self) -> &'static str {
        "direct fetch"
    }

    async fn fetch(&self, property: &str) -> Result<DocumentationPayload, AppError> {
        let url = join_segments(&self.base_url, &[property])?;
        debug!("Fetching reference page: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "text/html")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Reference page {} returned status {}",
                url, status
            )));
        }

        let html = response.text().await?;
        let parsed = self.parser.parse(&html_to_text(&html));
        if parsed.is_empty() {
            return Err(AppError::Upstream(format!(
                "Reference page for '{}' had no recognizable content",
                property
            )));
        }
        Ok(parsed.into_payload(property, url.to_string(), DocSourceKind::Direct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text() {
        let html = r#"<html><head><style>body { color: red; }</style></head>
<body><nav>Menu</nav><article>
<h1>object-fit</h1>
<p>The <code>object-fit</code> property sets how the content of a replaced element should be resized.</p>
<h2 id="syntax">Syntax</h2>
<pre class="brush: css">object-fit: cover;</pre>
<h2>See also</h2>
<ul><li><a href="/object-position">object-position</a></li><li>aspect-ratio</li></ul>
</article></body></html>"#;

        let text = html_to_text(html);
        assert!(!text.contains('<'));
        assert!(!text.contains("Menu"));
        assert!(!text.contains("color: red"));
        assert!(text.contains("## Syntax"));
        assert!(text.contains("```\nobject-fit: cover;\n```"));

        let parsed = HeuristicParser.parse(&text);
        assert_eq!(parsed.syntax.as_deref(), Some("object-fit: cover;"));
        assert_eq!(parsed.see_also, vec!["object-position", "aspect-ratio"]);
        assert!(parsed
            .description
            .as_deref()
            .is_some_and(|d| d.starts_with("The object-fit property")));
    }

    #[test]
    fn test_attributes_and_entities() {
        let html = r#"<h2>Syntax</h2><p>Use <a title="a > b" href="/x">inline-size</a> when width &ge; 100px &#8212; or &mdash; not.</p>"#;

        assert_eq!(
            html_to_text(html),
            "## Syntax\n\nUse inline-size when width \u{2265} 100px \u{2014} or \u{2014} not."
        );
    }

    #[test]
    fn test_nested_blocks_emitted_once() {
        let html = "<ul><li><p>Cards</p></li><li>Galleries<ul><li>nested</li></ul></li></ul><footer><p>Legal</p></footer>";

        assert_eq!(html_to_text(html), "- Cards\n- Galleries nested");
    }
}
