//! HTML renderer — standalone page with the card list in the body.

pub mod card;
pub mod kinds;

use crate::docs::group_nodes;
use crate::model::DocNode;
use crate::page::{PageState, PageView};
use crate::render::{html_escape, RenderContext, Renderer};

pub struct HtmlRenderer;

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; background: #f4f5f7; color: #1a202c; margin: 0; }
a { color: inherit; text-decoration: none; }
a:hover { text-decoration: underline; }
.page-header { display: flex; align-items: baseline; gap: 1em; padding: 1em 1.5em; background: #fff; border-bottom: 1px solid #e2e8f0; }
.entrypoint { font-family: monospace; font-weight: bold; }
.timestamp { color: #718096; font-size: 0.85em; }
.reload { margin-left: auto; color: #2b6cb0; }
.page { max-width: 56em; padding: 0 1.5em 1em; }
.notice { padding: 1em 0; }
.notice-title { font-size: 1.5em; font-weight: 500; margin-bottom: 0.25em; }
.section-title { font-size: 1.5em; font-weight: 500; margin: 1em 0 0.25em; }
.section-title.nested { font-size: 1em; margin: 0.5em 0 0.25em; }
.card { margin-top: 0.5em; padding: 0.5em; background: #fff; border-radius: 6px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.card.nested { box-shadow: none; border: 1px solid #cbd5e0; border-radius: 4px; }
.signature { font-family: monospace; font-size: 1.1em; overflow-wrap: anywhere; }
.keyword { color: #805ad5; }
.name { font-weight: bold; }
.params, .return, .heritage, .type-annotation { color: #4a5568; }
.location { margin-top: 0.25em; font-size: 0.75em; color: #718096; }
.jsdoc { margin-top: 0.5em; font-size: 0.85em; }
.sub-card { margin-top: 0.5em; padding: 0.25em 0.5em; background: #f7fafc; border-radius: 4px; }
.sub-card .signature { font-size: 0.9em; }
.inherited { font-style: italic; opacity: 0.5; }
.inherited-label { color: #718096; }
.tag-kind { font-family: monospace; color: #805ad5; }
";

impl Renderer for HtmlRenderer {
    fn render(&self, page: &PageView<'_>) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!(
            "<title>{} - Documentation</title>\n",
            html_escape(page.entrypoint)
        ));
        out.push_str("<style>\n");
        out.push_str(STYLE);
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        // Page chrome
        out.push_str("<header class=\"page-header\">\n");
        out.push_str(&format!(
            "  <div class=\"entrypoint\">{}</div>\n",
            html_escape(page.entrypoint)
        ));
        let timestamp = page.timestamp();
        if !timestamp.is_empty() {
            out.push_str(&format!(
                "  <div class=\"timestamp\">Generated {}</div>\n",
                html_escape(timestamp)
            ));
        }
        out.push_str(&format!(
            "  <a class=\"reload\" href=\"{}\">Reload</a>\n",
            html_escape(page.reload_url)
        ));
        out.push_str("</header>\n");

        out.push_str("<main class=\"page\">\n");
        match &page.state {
            PageState::Loading => {
                out.push_str("<div class=\"notice\">\n");
                out.push_str("  <div class=\"notice-title\">Loading...</div>\n");
                out.push_str("  <div class=\"notice-body\">It can take a few seconds for documentation to be generated.</div>\n");
                out.push_str("</div>\n");
            }
            PageState::Empty { .. } => {
                out.push_str("<div class=\"notice\">\n");
                out.push_str("  <div class=\"notice-title\">This module has no exports that are recognized by deno doc.</div>\n");
                out.push_str("</div>\n");
            }
            PageState::Loaded { nodes, ctx, .. } => {
                out.push_str("<div class=\"card-list\">\n");
                out.push_str(&CardList::new(nodes).render(ctx));
                out.push_str("</div>\n");
            }
        }
        out.push_str("</main>\n");

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// Titled sections of cards, one section per non-empty kind.
pub struct CardList<'a> {
    nodes: &'a [DocNode],
    nested: bool,
    /// Render link rows into this scope instead of full cards.
    link_scope: Option<&'a [String]>,
}

impl<'a> CardList<'a> {
    pub fn new(nodes: &'a [DocNode]) -> Self {
        CardList {
            nodes,
            nested: false,
            link_scope: None,
        }
    }

    /// Denser headings and card styling for lists inside another card.
    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    /// List each node as a link to its card in `scope` rather than
    /// rendering the card again, so no anchor id is emitted twice.
    pub fn links_within(mut self, scope: &'a [String]) -> Self {
        self.link_scope = Some(scope);
        self
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::new();
        for (kind, nodes) in group_nodes(self.nodes).sections() {
            out.push_str("<section>\n");
            out.push_str(&section_heading(kind.title(), self.nested));
            match self.link_scope {
                Some(scope) => {
                    out.push_str("<ul>\n");
                    for node in nodes {
                        out.push_str(&kinds::member_link(node, scope));
                    }
                    out.push_str("</ul>\n");
                }
                None => {
                    out.push_str("<div>\n");
                    for node in nodes {
                        out.push_str(&kinds::render_card(node, self.nested, ctx));
                    }
                    out.push_str("</div>\n");
                }
            }
            out.push_str("</section>\n");
        }
        out
    }
}

pub(crate) fn section_heading(title: &str, nested: bool) -> String {
    if nested {
        format!("<h3 class=\"section-title nested\">{}</h3>\n", html_escape(title))
    } else {
        format!("<h2 class=\"section-title\">{}</h2>\n", html_escape(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::{expand_namespaces, flatten_namespaces};
    use crate::model::fixtures::*;

    #[test]
    fn single_function_renders_one_section() {
        let nodes = vec![function("foo")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = CardList::new(&nodes).render(&ctx);
        assert_eq!(html.matches("<section>").count(), 1);
        assert!(html.contains("<h2 class=\"section-title\">Functions</h2>"));
        assert_eq!(html.matches("class=\"card\"").count(), 1);
        assert!(html.contains("id=\"foo\""));
    }

    #[test]
    fn empty_categories_are_omitted() {
        let nodes = vec![class("B"), function("a")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = CardList::new(&nodes).render(&ctx);
        assert!(html.contains(">Functions<"));
        assert!(html.contains(">Classes<"));
        for absent in ["Variables", "Enums", "Interfaces", "Type Aliases", "Namespaces"] {
            assert!(!html.contains(absent), "unexpected section {}", absent);
        }
        assert!(html.find(">Functions<").unwrap() < html.find(">Classes<").unwrap());
    }

    #[test]
    fn cards_follow_alphabetical_order() {
        let nodes = vec![function("zed"), function("Alpha"), function("mid")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = CardList::new(&nodes).render(&ctx);
        let alpha = html.find("id=\"Alpha\"").unwrap();
        let mid = html.find("id=\"mid\"").unwrap();
        let zed = html.find("id=\"zed\"").unwrap();
        assert!(alpha < mid && mid < zed);
    }

    #[test]
    fn nested_list_uses_nested_headings_and_cards() {
        let nodes = vec![function("foo")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = CardList::new(&nodes).nested(true).render(&ctx);
        assert!(html.contains("<h3 class=\"section-title nested\">Functions</h3>"));
        assert!(html.contains("<div class=\"card nested\" id=\"foo\">"));
    }

    #[test]
    fn same_named_members_get_distinct_anchors() {
        let nodes = expand_namespaces(&[
            namespace("A", vec![function("foo")]),
            namespace("B", vec![function("foo")]),
        ]);
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = CardList::new(&nodes).render(&ctx);
        assert_eq!(html.matches("id=\"A.foo\"").count(), 1);
        assert_eq!(html.matches("id=\"B.foo\"").count(), 1);
        assert!(!html.contains("id=\"foo\""));
    }

    #[test]
    fn link_list_points_into_scope_without_anchors() {
        let nodes = vec![function("foo"), class("Bar")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let scope = vec!["A".to_string()];
        let html = CardList::new(&nodes)
            .nested(true)
            .links_within(&scope)
            .render(&ctx);
        assert!(html.contains("<h3 class=\"section-title nested\">Functions</h3>"));
        assert!(html.contains("<a href=\"#A.foo\">foo</a>"));
        assert!(html.contains("<span class=\"keyword\">class </span><a href=\"#A.Bar\">Bar</a>"));
        assert!(!html.contains(" id=\""));
        assert!(!html.contains("class=\"card"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        let lookup = flatten_namespaces(&[]);
        let ctx = RenderContext::new(&lookup);
        assert_eq!(CardList::new(&[]).render(&ctx), "");
    }
}
