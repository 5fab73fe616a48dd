//! Type expression display, with references linked to their declarations.

use super::{html_escape, markdown_escape, RenderContext};
use crate::model::TsTypeDef;

#[derive(Clone, Copy)]
enum Flavor {
    Html,
    Markdown,
}

impl Flavor {
    fn text(self, s: &str) -> String {
        match self {
            Flavor::Html => html_escape(s),
            Flavor::Markdown => markdown_escape(s),
        }
    }

    fn link(self, label: &str, anchor: &str) -> String {
        match self {
            Flavor::Html => format!(
                "<a href=\"#{}\" class=\"type-link\">{}</a>",
                html_escape(anchor),
                html_escape(label)
            ),
            Flavor::Markdown => format!("[{}](#{})", markdown_escape(label), anchor),
        }
    }
}

/// Render `ty` as HTML, resolving references from inside `scope`.
pub fn to_html(ty: &TsTypeDef, scope: &[String], ctx: &RenderContext) -> String {
    render(ty, scope, ctx, Flavor::Html)
}

/// Render `ty` as inline markdown, resolving references from inside `scope`.
pub fn to_markdown(ty: &TsTypeDef, scope: &[String], ctx: &RenderContext) -> String {
    render(ty, scope, ctx, Flavor::Markdown)
}

fn render(ty: &TsTypeDef, scope: &[String], ctx: &RenderContext, flavor: Flavor) -> String {
    if let Some(type_ref) = &ty.type_ref {
        let mut out = match ctx.resolve(scope, &type_ref.type_name) {
            Some(anchor) => flavor.link(&type_ref.type_name, &anchor),
            None => flavor.text(&type_ref.type_name),
        };
        if let Some(params) = type_ref.type_params.as_deref().filter(|p| !p.is_empty()) {
            out.push_str(&flavor.text("<"));
            out.push_str(&join(params, ", ", scope, ctx, flavor));
            out.push_str(&flavor.text(">"));
        }
        return out;
    }
    if let Some(members) = &ty.union {
        return join(members, " | ", scope, ctx, flavor);
    }
    if let Some(members) = &ty.intersection {
        return join(members, " & ", scope, ctx, flavor);
    }
    if let Some(element) = &ty.array {
        let inner = render(element, scope, ctx, flavor);
        return if element.union.is_some() || element.intersection.is_some() {
            format!("({}){}", inner, flavor.text("[]"))
        } else {
            format!("{}{}", inner, flavor.text("[]"))
        };
    }
    flavor.text(fallback_repr(ty))
}

fn join(
    types: &[TsTypeDef],
    separator: &str,
    scope: &[String],
    ctx: &RenderContext,
    flavor: Flavor,
) -> String {
    types
        .iter()
        .map(|ty| render(ty, scope, ctx, flavor))
        .collect::<Vec<_>>()
        .join(&flavor.text(separator))
}

fn fallback_repr(ty: &TsTypeDef) -> &str {
    if !ty.repr.is_empty() {
        return &ty.repr;
    }
    ty.keyword.as_deref().unwrap_or("unknown")
}
