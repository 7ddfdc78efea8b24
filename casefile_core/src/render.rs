//! Rendering of stored fragments into display text.
//!
//! Fragments are kept as markup (see [`crate::list_editor`]), but neither the
//! export file nor the native front ends can show markup. These functions
//! produce the text a browser would show for a fragment: tags removed,
//! character references decoded, block boundaries turned into line breaks.

use crate::escape::unescape_html;

/// Elements that start a new line when they close
const BLOCK_TAGS: &[&str] = &["p", "div", "li", "footer", "blockquote", "br", "h1", "h2", "h3"];

/// Visible text of one fragment.
///
/// ```rust
/// use casefile_core::render::plain_text;
///
/// assert_eq!(
///     plain_text("<strong>1/2/2026:</strong> Met &amp; talked"),
///     "1/2/2026: Met & talked"
/// );
/// ```
pub fn plain_text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(open) = rest.find('<') {
        out.push_str(&unescape_html(&rest[..open]));
        let tail = &rest[open..];
        let Some(close) = tail.find('>') else {
            // Unterminated tag: treat the remainder as text
            out.push_str(&unescape_html(tail));
            rest = "";
            break;
        };
        if ends_block(&tail[1..close]) && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        rest = &tail[close + 1..];
    }
    out.push_str(&unescape_html(rest));

    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn ends_block(tag: &str) -> bool {
    let tag = tag.trim();
    let (closing, name) = match tag.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, tag),
    };
    let name = name
        .trim_end_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    BLOCK_TAGS.contains(&name.as_str()) && (closing || name == "br")
}

/// Display rows for a list of fragments, in stored order
pub fn display_list(fragments: &[String]) -> Vec<String> {
    fragments.iter().map(|f| plain_text(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_fragment() {
        assert_eq!(
            plain_text("<strong>10/16/2026:</strong> Filed &lt;motion&gt;"),
            "10/16/2026: Filed <motion>"
        );
    }

    #[test]
    fn test_quote_fragment_splits_blocks() {
        let fragment = "<p>\"We&#39;ll see\"</p><footer>— User added</footer>";
        assert_eq!(plain_text(fragment), "\"We'll see\"\n— User added");
    }

    #[test]
    fn test_unterminated_tag_is_text() {
        assert_eq!(plain_text("a <b"), "a <b");
    }

    #[test]
    fn test_br_and_attributes() {
        assert_eq!(plain_text("one<br/>two <span class=\"x\">three</span>"), "one\ntwo three");
    }

    #[test]
    fn test_display_list_keeps_order() {
        let fragments = vec!["<p>b</p>".to_string(), "<p>a</p>".to_string()];
        assert_eq!(display_list(&fragments), vec!["b", "a"]);
    }
}
