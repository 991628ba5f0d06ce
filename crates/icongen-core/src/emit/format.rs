//! Markup reformatting for the full-markup pipeline.
//!
//! The path-only pipeline writes its body verbatim after trimming; inlined
//! markup goes through this pass so nested elements land on their own,
//! depth-indented lines.

/// Re-indents markup: one element or text run per line, two spaces per
/// nesting level on top of `base_indent` spaces.
pub fn reindent_markup(markup: &str, base_indent: usize) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut depth: usize = 0;
    for token in tokenize(markup) {
        let closing = token.starts_with("</");
        let opening = token.starts_with('<') && !closing;
        let self_closing = token.ends_with("/>");
        if closing {
            depth = depth.saturating_sub(1);
        }
        let indent = " ".repeat(base_indent + depth * 2);
        out.push(format!("{indent}{token}"));
        if opening && !self_closing {
            depth += 1;
        }
    }
    out.join("\n")
}

/// Splits markup into tags and text runs, dropping inter-token whitespace.
fn tokenize(markup: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = markup.trim();
    while !rest.is_empty() {
        match rest.find('<') {
            Some(start) => {
                let text = rest[..start].trim();
                if !text.is_empty() {
                    tokens.push(text.to_string());
                }
                let tag = &rest[start..];
                match tag_end(tag) {
                    Some(end) => {
                        tokens.push(tag[..=end].to_string());
                        rest = tag[end + 1..].trim_start();
                    }
                    None => {
                        // unterminated tag: keep it as-is rather than lose text
                        tokens.push(tag.to_string());
                        break;
                    }
                }
            }
            None => {
                tokens.push(rest.to_string());
                break;
            }
        }
    }
    tokens
}

/// Index of the tag's terminating `>`, skipping quoted attribute values.
fn tag_end(tag: &str) -> Option<usize> {
    let mut in_quote: Option<char> = None;
    for (i, ch) in tag.char_indices() {
        match in_quote {
            Some(q) if ch == q => in_quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => in_quote = Some(ch),
                '>' => return Some(i),
                _ => {}
            },
        }
    }
    None
}
