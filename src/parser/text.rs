//! Visible text extraction

use scraper::{Html, Node};

/// Elements whose text content is never rendered
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new run of text; inline markup inside them does not
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "dd", "details", "div", "dl", "dt",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "html", "li", "main", "nav", "ol", "option", "p", "pre", "section", "summary",
    "table", "td", "th", "title", "tr", "ul",
];

/// Extract the visible text of a page.
///
/// Script, style and comment content is dropped and entities are decoded by
/// the HTML parser. Text inside one block element is joined as written, so
/// inline markup never splits a word; block boundaries and `<br>` become
/// spaces. Whitespace is collapsed to single spaces and the result is
/// lowercased.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    let mut current_block = None;
    for node in document.tree.root().descendants() {
        let text = match node.value() {
            Node::Text(text) => text,
            Node::Element(el) if el.name() == "br" => {
                raw.push(' ');
                continue;
            }
            _ => continue,
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        let block = node
            .ancestors()
            .find(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| BLOCK_ELEMENTS.contains(&el.name()))
            })
            .map(|ancestor| ancestor.id());
        if block != current_block {
            raw.push(' ');
            current_block = block;
        }
        raw.push_str(text);
    }

    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_lowercases() {
        let html = "<html><body><h1>Call for  Reviewers</h1><p>Join the\n<b>PC</b></p></body></html>";
        assert_eq!(extract_visible_text(html), "call for reviewers join the pc");
    }

    #[test]
    fn test_drops_script_style_and_comments() {
        let html = r#"
            <head><style>body { color: red; }</style><script>var reviewer = 1;</script></head>
            <body><!-- hidden nomination -->Visible</body>
        "#;
        assert_eq!(extract_visible_text(html), "visible");
    }

    #[test]
    fn test_inline_markup_keeps_words_whole() {
        let html = "<p>Open for self-<em>nomination</em> via the <a href=\"/f\">form</a>.</p>";
        assert_eq!(extract_visible_text(html), "open for self-nomination via the form.");
    }

    #[test]
    fn test_block_boundaries_separate_text() {
        let html = "<ul><li>Reviewers</li><li>Chairs</li></ul><div>Deadline<br>June</div>";
        assert_eq!(extract_visible_text(html), "reviewers chairs deadline june");
    }

    #[test]
    fn test_unescapes_entities() {
        let html = "<p>Reviewers &amp; PC&nbsp;members &lt;2026&gt;</p>";
        assert_eq!(extract_visible_text(html), "reviewers & pc members <2026>");
    }

    #[test]
    fn test_tolerates_malformed_markup() {
        let html = "<div><p>Self-nomination <b>open<div>now";
        assert_eq!(extract_visible_text(html), "self-nomination open now");
        assert_eq!(extract_visible_text(""), "");
    }
}
