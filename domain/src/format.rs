//! Markdown-lite rendering of chat text into HTML.
//!
//! Rules run in a fixed order and each one sees the output of the previous:
//!
//! 1. HTML special characters are escaped. An `&` that already starts a
//!    character reference such as `&amp;` or `&#39;` is left alone, so
//!    formatting plain text twice gives the same result.
//! 2. `\n` becomes `<br>`.
//! 3. `http://` / `https://` followed by a non-whitespace run becomes a link.
//! 4. `**x**` becomes `<strong>x</strong>`.
//! 5. `*x*` becomes `<em>x</em>`.
//!
//! Bold runs before italic so the single-asterisk rule never consumes half of
//! a `**` pair. The rules are plain lazy regexes, not a parser: mixed runs
//! such as `***a***` produce misnested tags, and the tests pin that output.

use once_cell::sync::Lazy;
use regex::Regex;

static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(https?://[^\s]+)").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());

pub fn format_message(text: &str) -> String {
    let text = escape_html(text);
    let text = text.replace('\n', "<br>");
    let text = URL.replace_all(
        &text,
        r#"<a href="${1}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
    );
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");
    text.into_owned()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '&' if ENTITY.is_match(&text[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
