//! Card building blocks: the anchored full card and the inline sub-card.

use crate::docs::{anchor_id, scope_anchor};
use crate::model::{DocNode, JsDoc, Location, ParamDef, TsTypeDef, TsTypeParamDef};
use crate::render::{html_escape, join_params, jsdoc, param_label, ts_type, RenderContext};

/// A top-level entry, anchored at its scope-qualified name.
pub struct SimpleCard<'a> {
    node: &'a DocNode,
    nested: bool,
    prefix: Option<String>,
    type_params: &'a [TsTypeParamDef],
    params: Option<&'a [ParamDef]>,
    return_type: Option<&'a TsTypeDef>,
    suffix: Option<String>,
    details: Option<String>,
}

impl<'a> SimpleCard<'a> {
    pub fn new(node: &'a DocNode, nested: bool) -> Self {
        SimpleCard {
            node,
            nested,
            prefix: None,
            type_params: &[],
            params: None,
            return_type: None,
            suffix: None,
            details: None,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn type_params(mut self, type_params: &'a [TsTypeParamDef]) -> Self {
        self.type_params = type_params;
        self
    }

    pub fn params(mut self, params: &'a [ParamDef]) -> Self {
        self.params = Some(params);
        self
    }

    pub fn return_type(mut self, return_type: Option<&'a TsTypeDef>) -> Self {
        self.return_type = return_type;
        self
    }

    /// Already-rendered HTML placed at the end of the signature line.
    pub fn suffix(mut self, suffix: String) -> Self {
        self.suffix = Some(suffix).filter(|s| !s.is_empty());
        self
    }

    /// Already-rendered HTML placed below the doc comment.
    pub fn details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        let node = self.node;
        let id = html_escape(&anchor_id(&node.scope, &node.name));
        let mut out = String::new();

        let class = if self.nested { "card nested" } else { "card" };
        out.push_str(&format!("<div class=\"{}\" id=\"{}\">\n", class, id));

        out.push_str("<div class=\"signature\">");
        if let Some(ref prefix) = self.prefix {
            out.push_str(&format!("<span class=\"keyword\">{} </span>", html_escape(prefix)));
        }
        for (depth, segment) in node.scope.iter().enumerate() {
            out.push_str(&format!(
                "<a href=\"#{}\" class=\"scope\">{}</a>.",
                html_escape(&scope_anchor(&node.scope, depth)),
                html_escape(segment)
            ));
        }
        out.push_str(&format!(
            "<a href=\"#{}\" class=\"self\"><span class=\"name\">{}</span></a>",
            id,
            html_escape(&node.name)
        ));
        out.push_str(&type_params_html(self.type_params));
        if let Some(params) = self.params {
            out.push_str(&format!(
                "<span class=\"params\">({})</span>",
                params_html(params, &node.scope, ctx)
            ));
        }
        if let Some(return_type) = self.return_type {
            out.push_str(&format!(
                "<span class=\"return\"> ⇒ {}</span>",
                ts_type::to_html(return_type, &node.scope, ctx)
            ));
        }
        if let Some(ref suffix) = self.suffix {
            out.push_str(suffix);
        }
        out.push_str("</div>\n");

        out.push_str(&location_html(&node.location));

        if let Some(ref doc) = node.js_doc {
            out.push_str(&jsdoc_html(doc, &node.scope, ctx));
        }

        if let Some(ref details) = self.details {
            out.push_str(details);
        }

        out.push_str("</div>\n");
        out
    }
}

/// A member listed inside another card, e.g. a class method. Carries no
/// anchor of its own.
pub struct SimpleSubCard<'a> {
    name: &'a str,
    scope: &'a [String],
    prefix: Option<String>,
    js_doc: Option<&'a JsDoc>,
    location: Option<&'a Location>,
    inherited: bool,
    optional: bool,
    params: Option<&'a [ParamDef]>,
    return_type: Option<&'a TsTypeDef>,
    suffix: Option<String>,
}

impl<'a> SimpleSubCard<'a> {
    /// `scope` is the scope types are resolved from, usually the owning
    /// declaration's child scope.
    pub fn new(name: &'a str, scope: &'a [String]) -> Self {
        SimpleSubCard {
            name,
            scope,
            prefix: None,
            js_doc: None,
            location: None,
            inherited: false,
            optional: false,
            params: None,
            return_type: None,
            suffix: None,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into()).filter(|p: &String| !p.is_empty());
        self
    }

    pub fn js_doc(mut self, js_doc: Option<&'a JsDoc>) -> Self {
        self.js_doc = js_doc;
        self
    }

    pub fn location(mut self, location: Option<&'a Location>) -> Self {
        self.location = location;
        self
    }

    pub fn inherited(mut self, inherited: bool) -> Self {
        self.inherited = inherited;
        self
    }

    /// Marks the member with `?` after its name.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn params(mut self, params: &'a [ParamDef]) -> Self {
        self.params = Some(params);
        self
    }

    pub fn return_type(mut self, return_type: Option<&'a TsTypeDef>) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn suffix(mut self, suffix: String) -> Self {
        self.suffix = Some(suffix).filter(|s| !s.is_empty());
        self
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"sub-card\">\n");

        let class = if self.inherited {
            "signature inherited"
        } else {
            "signature"
        };
        out.push_str(&format!("<div class=\"{}\">", class));
        if self.inherited {
            out.push_str("<span class=\"inherited-label\">inherited </span>");
        }
        if let Some(ref prefix) = self.prefix {
            out.push_str(&format!("<span class=\"keyword\">{} </span>", html_escape(prefix)));
        }
        out.push_str(&html_escape(self.name));
        if self.optional {
            out.push('?');
        }
        if let Some(params) = self.params {
            out.push_str(&format!(
                "<span class=\"params\">({})</span>",
                params_html(params, self.scope, ctx)
            ));
        }
        if let Some(return_type) = self.return_type {
            out.push_str(&format!(
                "<span class=\"return\"> → {}</span>",
                ts_type::to_html(return_type, self.scope, ctx)
            ));
        }
        if let Some(ref suffix) = self.suffix {
            out.push_str(suffix);
        }
        out.push_str("</div>\n");

        if let Some(doc) = self.js_doc {
            out.push_str(&jsdoc_html(doc, self.scope, ctx));
        }
        if let Some(location) = self.location {
            out.push_str(&location_html(location));
        }

        out.push_str("</div>\n");
        out
    }
}

/// `name: Type, ...` with each type resolved from `scope`.
pub fn params_html(params: &[ParamDef], scope: &[String], ctx: &RenderContext) -> String {
    join_params(params, |param| {
        let mut element = html_escape(&param_label(param));
        if let Some(ref ty) = param.ts_type {
            element.push_str(": ");
            element.push_str(&ts_type::to_html(ty, scope, ctx));
        }
        element
    })
}

fn type_params_html(type_params: &[TsTypeParamDef]) -> String {
    if type_params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = type_params.iter().map(|p| p.name.as_str()).collect();
    format!(
        "<span class=\"type-params\">&lt;{}&gt;</span>",
        html_escape(&names.join(", "))
    )
}

fn location_html(location: &Location) -> String {
    let filename = html_escape(&location.filename);
    format!(
        "<div class=\"location\">Defined in file '<a href=\"{}\">{}</a>' on line {}, column {}.</div>\n",
        filename, filename, location.line, location.col
    )
}

fn jsdoc_html(doc: &JsDoc, scope: &[String], ctx: &RenderContext) -> String {
    format!("<div class=\"jsdoc\">\n{}</div>\n", jsdoc::to_html(doc, scope, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::flatten_namespaces;
    use crate::model::fixtures::*;

    #[test]
    fn card_anchor_and_self_link() {
        let nodes = vec![function("foo")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = SimpleCard::new(&nodes[0], false).prefix("function").render(&ctx);
        assert!(html.starts_with("<div class=\"card\" id=\"foo\">"));
        assert!(html.contains("<span class=\"keyword\">function </span>"));
        assert!(html.contains("<a href=\"#foo\" class=\"self\"><span class=\"name\">foo</span></a>"));
        assert!(html.contains("Defined in file '<a href=\"file:///mod.ts\">file:///mod.ts</a>' on line 1, column 0."));
    }

    #[test]
    fn breadcrumbs_link_each_ancestor() {
        let node = function("foo").with_scope(vec!["A".to_string(), "B".to_string()]);
        let lookup = flatten_namespaces(std::slice::from_ref(&node));
        let ctx = RenderContext::new(&lookup);
        let html = SimpleCard::new(&node, false).render(&ctx);
        assert!(html.contains("id=\"A.B.foo\""));
        assert!(html.contains("<a href=\"#A\" class=\"scope\">A</a>.<a href=\"#A.B\" class=\"scope\">B</a>."));
        assert!(html.contains("href=\"#A.B.foo\" class=\"self\""));
    }

    #[test]
    fn nested_flag_only_changes_styling() {
        let nodes = vec![function("foo")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = SimpleCard::new(&nodes[0], true).render(&ctx);
        assert!(html.starts_with("<div class=\"card nested\" id=\"foo\">"));
    }

    #[test]
    fn params_have_no_trailing_separator() {
        let nodes = vec![];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let params = vec![
            param("a", None),
            param("b", Some(keyword("string"))),
            param("c", None),
        ];
        let html = params_html(&params, &[], &ctx);
        assert_eq!(html, "a, b: string, c");
    }

    #[test]
    fn params_and_return_type_render_in_signature() {
        let nodes = vec![function("foo"), class("Bar")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let params = vec![param("a", Some(type_ref("Bar")))];
        let ret = keyword("void");
        let html = SimpleCard::new(&nodes[0], false)
            .params(&params)
            .return_type(Some(&ret))
            .render(&ctx);
        assert!(html.contains(
            "<span class=\"params\">(a: <a href=\"#Bar\" class=\"type-link\">Bar</a>)</span>"
        ));
        assert!(html.contains("<span class=\"return\"> ⇒ void</span>"));
    }

    #[test]
    fn card_without_params_has_no_parens() {
        let nodes = vec![variable("x")];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = SimpleCard::new(&nodes[0], false).render(&ctx);
        assert!(!html.contains("class=\"params\""));
    }

    #[test]
    fn inherited_sub_card_is_labelled() {
        let nodes = vec![];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let html = SimpleSubCard::new("run", &[])
            .inherited(true)
            .params(&[])
            .render(&ctx);
        assert!(html.contains("<div class=\"signature inherited\"><span class=\"inherited-label\">inherited </span>run<span class=\"params\">()</span>"));
        assert!(!html.contains("id="));
        assert!(!html.contains("Defined in file"));
    }

    #[test]
    fn sub_card_location_is_optional() {
        let nodes = vec![];
        let lookup = flatten_namespaces(&nodes);
        let ctx = RenderContext::new(&lookup);
        let loc = location();
        let html = SimpleSubCard::new("x", &[])
            .location(Some(&loc))
            .render(&ctx);
        assert!(html.contains("Defined in file"));
        assert!(!html.contains("inherited"));
    }
}
