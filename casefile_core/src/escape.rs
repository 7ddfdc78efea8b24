//! Markup escaping for user-supplied text.
//!
//! Every entry that reaches a rendered fragment goes through [`escape_html`]
//! first, so user text can never open or close a tag.

/// Replace `& < > " '` with their entity equivalents.
///
/// Each character maps independently; the result contains no raw markup
/// delimiters from the input.
///
/// ```rust
/// use casefile_core::escape::escape_html;
///
/// assert_eq!(escape_html("<b>&'\""), "&lt;b&gt;&amp;&#39;&quot;");
/// assert_eq!(escape_html(""), "");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode character references back to text.
///
/// Handles the five entities produced by [`escape_html`] plus `&apos;`,
/// `&nbsp;` and numeric references (`&#233;`, `&#xE9;`). Anything that is not
/// a recognised reference is kept verbatim.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        // Longest reference we decode is a numeric one; bound the search
        let decoded = tail
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .and_then(|(semi, _)| decode_reference(&tail[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
