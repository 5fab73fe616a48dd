//! Doc comment display: paragraphs, inline `{@link}` references and tags.

use super::{html_escape, markdown_escape, RenderContext};
use crate::model::JsDoc;
use regex::Regex;
use std::sync::LazyLock;

/// `{@link Target}`, `{@link Target label}` or `{@link Target | label}`.
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{@link(?:code|plain)?\s+([^\s}|]+)(?:\s*\|?\s*([^}]*))?\}").unwrap()
});

static RE_BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

/// Render a doc comment as HTML paragraphs plus a tag list.
pub fn to_html(doc: &JsDoc, scope: &[String], ctx: &RenderContext) -> String {
    let mut out = String::new();

    if let Some(text) = doc.text() {
        for paragraph in paragraphs(text) {
            out.push_str("<p>");
            out.push_str(&replace_links(paragraph, html_escape, |target, label| {
                match ctx.resolve(scope, target) {
                    Some(anchor) => format!(
                        "<a href=\"#{}\">{}</a>",
                        html_escape(&anchor),
                        html_escape(label)
                    ),
                    None => format!("<code>{}</code>", html_escape(label)),
                }
            }));
            out.push_str("</p>\n");
        }
    }

    let tags = doc.tags();
    if !tags.is_empty() {
        out.push_str("<ul class=\"tags\">\n");
        for tag in tags {
            out.push_str(&format!(
                "  <li><span class=\"tag-kind\">@{}</span>",
                html_escape(&tag.kind)
            ));
            if let Some(ref name) = tag.name {
                out.push_str(&format!(" <code>{}</code>", html_escape(name)));
            }
            if let Some(ref text) = tag.doc {
                out.push_str(&format!(" {}", html_escape(text)));
            }
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n");
    }

    out
}

/// Render a doc comment as markdown. Comment text is already markdown, so
/// only `{@link}` references are rewritten.
pub fn to_markdown(doc: &JsDoc, scope: &[String], ctx: &RenderContext) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(text) = doc.text() {
        let body = replace_links(text.trim(), str::to_string, |target, label| {
            match ctx.resolve(scope, target) {
                Some(anchor) => format!("[{}](#{})", markdown_escape(label), anchor),
                None => format!("`{}`", label),
            }
        });
        lines.push(body);
    }

    let tags = doc.tags();
    if !tags.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        for tag in tags {
            let mut line = format!("* `@{}`", tag.kind);
            if let Some(ref name) = tag.name {
                line.push_str(&format!(" `{}`", name));
            }
            if let Some(ref text) = tag.doc {
                line.push(' ');
                line.push_str(text);
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    RE_BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// Rewrite each `{@link}` with `link(target, label)`, passing the text
/// between links through `plain`.
fn replace_links(
    text: &str,
    plain: impl Fn(&str) -> String,
    link: impl Fn(&str, &str) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in RE_LINK.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&plain(&text[last..whole.start()]));
        let target = &caps[1];
        let label = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|l| !l.is_empty())
            .unwrap_or(target);
        out.push_str(&link(target, label));
        last = whole.end();
    }
    out.push_str(&plain(&text[last..]));
    out
}
