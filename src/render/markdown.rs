//! GitHub-flavored markdown renderer.
//!
//! Same page structure as the HTML renderer: a header, then one `##`
//! section per kind with one `###` card per declaration. Cards are
//! anchored with an explicit `<a id>` so deep links match the HTML page.

use crate::docs::{anchor_id, group_nodes, scope_anchor};
use crate::model::*;
use crate::page::{PageState, PageView};
use crate::render::{
    html_escape, join_params, jsdoc, markdown_escape, modifiers, param_label, ts_type,
    RenderContext, Renderer,
};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, page: &PageView<'_>) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}\n", markdown_escape(page.entrypoint)));
        let timestamp = page.timestamp();
        let reload = link_target(page.reload_url);
        if timestamp.is_empty() {
            lines.push(format!("[Reload]({})\n", reload));
        } else {
            lines.push(format!(
                "Generated {} · [Reload]({})\n",
                markdown_escape(timestamp),
                reload
            ));
        }

        match &page.state {
            PageState::Loading => {
                lines.push("**Loading...**\n".to_string());
                lines.push(
                    "It can take a few seconds for documentation to be generated.\n".to_string(),
                );
            }
            PageState::Empty { .. } => {
                lines.push(
                    "This module has no exports that are recognized by deno doc.\n".to_string(),
                );
            }
            PageState::Loaded { nodes, ctx, .. } => {
                for (kind, nodes) in group_nodes(nodes).sections() {
                    lines.push(format!("## {}\n", kind.title()));
                    for node in nodes {
                        lines.push(render_card(node, ctx));
                    }
                }
            }
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Signature pieces of one card or member line.
#[derive(Default)]
struct Signature<'a> {
    prefix: String,
    type_params: &'a [TsTypeParamDef],
    params: Option<&'a [ParamDef]>,
    return_type: Option<&'a TsTypeDef>,
    suffix: String,
}

impl Signature<'_> {
    /// Everything after the name.
    fn tail(&self, scope: &[String], ctx: &RenderContext, arrow: &str) -> String {
        let mut out = String::new();
        if !self.type_params.is_empty() {
            let names: Vec<&str> = self.type_params.iter().map(|p| p.name.as_str()).collect();
            out.push_str(&markdown_escape(&format!("<{}>", names.join(", "))));
        }
        if let Some(params) = self.params {
            out.push('(');
            out.push_str(&params_markdown(params, scope, ctx));
            out.push(')');
        }
        if let Some(return_type) = self.return_type {
            out.push_str(&format!(" {} {}", arrow, ts_type::to_markdown(return_type, scope, ctx)));
        }
        out.push_str(&self.suffix);
        out
    }
}

fn render_card(node: &DocNode, ctx: &RenderContext) -> String {
    let scope = &node.scope;
    let mut members: Vec<String> = Vec::new();

    let signature = match &node.def {
        DocNodeDef::Function { def } => Signature {
            prefix: def.keyword().to_string(),
            type_params: &def.type_params,
            params: Some(def.params.as_slice()),
            return_type: def.return_type.as_ref(),
            ..Signature::default()
        },
        DocNodeDef::Variable { def } => Signature {
            prefix: def.kind.keyword().to_string(),
            suffix: annotation(def.ts_type.as_ref(), scope, ctx),
            ..Signature::default()
        },
        DocNodeDef::Class { def } => {
            class_members(def, scope, ctx, &mut members);
            let mut suffix = String::new();
            if let Some(ref parent) = def.extends {
                suffix.push_str(&format!(" extends {}", reference(parent, scope, ctx)));
            }
            if !def.implements.is_empty() {
                let names: Vec<String> = def
                    .implements
                    .iter()
                    .map(|n| reference(n, scope, ctx))
                    .collect();
                suffix.push_str(&format!(" implements {}", names.join(", ")));
            }
            Signature {
                prefix: if def.is_abstract { "abstract class" } else { "class" }.to_string(),
                type_params: &def.type_params,
                suffix,
                ..Signature::default()
            }
        }
        DocNodeDef::Enum { def } => {
            if !def.members.is_empty() {
                members.push("#### Members\n".to_string());
                for member in &def.members {
                    members.push(member_line(
                        &member.name,
                        &Signature::default(),
                        false,
                        false,
                        member.js_doc.as_ref(),
                        scope,
                        ctx,
                    ));
                }
                members.push(String::new());
            }
            Signature {
                prefix: "enum".to_string(),
                ..Signature::default()
            }
        }
        DocNodeDef::Interface { def } => {
            interface_members(def, scope, ctx, &mut members);
            let mut suffix = String::new();
            if !def.extends.is_empty() {
                let parents: Vec<String> = def
                    .extends
                    .iter()
                    .map(|ty| ts_type::to_markdown(ty, scope, ctx))
                    .collect();
                suffix.push_str(&format!(" extends {}", parents.join(", ")));
            }
            Signature {
                prefix: "interface".to_string(),
                type_params: &def.type_params,
                suffix,
                ..Signature::default()
            }
        }
        DocNodeDef::TypeAlias { def } => Signature {
            prefix: "type".to_string(),
            type_params: &def.type_params,
            suffix: format!(" = {}", ts_type::to_markdown(&def.ts_type, scope, ctx)),
            ..Signature::default()
        },
        DocNodeDef::Namespace { def } => {
            let child_scope = node.child_scope();
            for (kind, elements) in group_nodes(&def.elements).sections() {
                members.push(format!("#### {}\n", kind.title()));
                for element in elements {
                    members.push(format!(
                        "* [{}](#{})",
                        markdown_escape(&element.name),
                        anchor_id(&child_scope, &element.name)
                    ));
                }
                members.push(String::new());
            }
            Signature {
                prefix: "namespace".to_string(),
                ..Signature::default()
            }
        }
    };

    let id = anchor_id(scope, &node.name);
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("<a id=\"{}\"></a>\n", html_escape(&id)));

    let mut heading = format!("### {} ", signature.prefix);
    for (depth, segment) in scope.iter().enumerate() {
        heading.push_str(&format!(
            "[{}](#{}).",
            markdown_escape(segment),
            scope_anchor(scope, depth)
        ));
    }
    heading.push_str(&format!("[{}](#{})", markdown_escape(&node.name), id));
    heading.push_str(&signature.tail(scope, ctx, "⇒"));
    lines.push(heading);
    lines.push(String::new());

    lines.push(location_line(&node.location));
    lines.push(String::new());

    if let Some(ref doc) = node.js_doc {
        let text = jsdoc::to_markdown(doc, scope, ctx);
        if !text.is_empty() {
            lines.push(text);
            lines.push(String::new());
        }
    }

    lines.extend(members);
    lines.join("\n")
}

fn class_members(
    def: &ClassDef,
    scope: &[String],
    ctx: &RenderContext,
    lines: &mut Vec<String>,
) {
    if !def.constructors.is_empty() {
        lines.push("#### Constructors\n".to_string());
        for ctor in &def.constructors {
            let signature = Signature {
                prefix: ctor
                    .accessibility
                    .map(|a| a.keyword().to_string())
                    .unwrap_or_default(),
                params: Some(ctor.params.as_slice()),
                ..Signature::default()
            };
            lines.push(member_line(
                &ctor.name,
                &signature,
                false,
                ctor.inherited,
                ctor.js_doc.as_ref(),
                scope,
                ctx,
            ));
        }
        lines.push(String::new());
    }

    if !def.properties.is_empty() {
        lines.push("#### Properties\n".to_string());
        for prop in &def.properties {
            let signature = Signature {
                prefix: modifiers(prop.accessibility, &[
                    (prop.is_static, "static"),
                    (prop.is_abstract, "abstract"),
                    (prop.readonly, "readonly"),
                ]),
                suffix: annotation(prop.ts_type.as_ref(), scope, ctx),
                ..Signature::default()
            };
            lines.push(member_line(
                &prop.name,
                &signature,
                prop.optional,
                prop.inherited,
                prop.js_doc.as_ref(),
                scope,
                ctx,
            ));
        }
        lines.push(String::new());
    }

    if !def.methods.is_empty() {
        lines.push("#### Methods\n".to_string());
        for method in &def.methods {
            let signature = Signature {
                prefix: modifiers(method.accessibility, &[
                    (method.is_static, "static"),
                    (method.is_abstract, "abstract"),
                    (method.function_def.is_async, "async"),
                    (method.kind == MethodKind::Getter, "get"),
                    (method.kind == MethodKind::Setter, "set"),
                ]),
                params: Some(method.function_def.params.as_slice()),
                return_type: method.function_def.return_type.as_ref(),
                ..Signature::default()
            };
            lines.push(member_line(
                &method.name,
                &signature,
                method.optional,
                method.inherited,
                method.js_doc.as_ref(),
                scope,
                ctx,
            ));
        }
        lines.push(String::new());
    }
}

fn interface_members(
    def: &InterfaceDef,
    scope: &[String],
    ctx: &RenderContext,
    lines: &mut Vec<String>,
) {
    if !def.call_signatures.is_empty() {
        lines.push("#### Call Signatures\n".to_string());
        for call in &def.call_signatures {
            let signature = Signature {
                params: Some(call.params.as_slice()),
                return_type: call.ts_type.as_ref(),
                ..Signature::default()
            };
            lines.push(member_line(
                "",
                &signature,
                false,
                false,
                call.js_doc.as_ref(),
                scope,
                ctx,
            ));
        }
        lines.push(String::new());
    }

    if !def.properties.is_empty() {
        lines.push("#### Properties\n".to_string());
        for prop in &def.properties {
            let signature = Signature {
                suffix: annotation(prop.ts_type.as_ref(), scope, ctx),
                ..Signature::default()
            };
            lines.push(member_line(
                &prop.name,
                &signature,
                prop.optional,
                prop.inherited,
                prop.js_doc.as_ref(),
                scope,
                ctx,
            ));
        }
        lines.push(String::new());
    }

    if !def.methods.is_empty() {
        lines.push("#### Methods\n".to_string());
        for method in &def.methods {
            let signature = Signature {
                params: Some(method.params.as_slice()),
                return_type: method.return_type.as_ref(),
                ..Signature::default()
            };
            lines.push(member_line(
                &method.name,
                &signature,
                method.optional,
                method.inherited,
                method.js_doc.as_ref(),
                scope,
                ctx,
            ));
        }
        lines.push(String::new());
    }
}

/// One list item for a member, with its doc comment indented beneath.
fn member_line(
    name: &str,
    signature: &Signature,
    optional: bool,
    inherited: bool,
    js_doc: Option<&JsDoc>,
    scope: &[String],
    ctx: &RenderContext,
) -> String {
    let mut line = String::from("* ");
    if inherited {
        line.push_str("_inherited_ ");
    }
    if !signature.prefix.is_empty() {
        line.push_str(&signature.prefix);
        line.push(' ');
    }
    // Call signatures have no name
    if !name.is_empty() {
        line.push_str(&format!("**{}**", markdown_escape(name)));
    }
    if optional {
        line.push('?');
    }
    line.push_str(&signature.tail(scope, ctx, "→"));

    if let Some(doc) = js_doc {
        let text = jsdoc::to_markdown(doc, scope, ctx);
        if !text.is_empty() {
            line.push_str("\n\n  ");
            line.push_str(&text.replace('\n', "\n  "));
        }
    }
    line
}

fn params_markdown(params: &[ParamDef], scope: &[String], ctx: &RenderContext) -> String {
    join_params(params, |param| {
        let mut element = markdown_escape(&param_label(param));
        if let Some(ref ty) = param.ts_type {
            element.push_str(": ");
            element.push_str(&ts_type::to_markdown(ty, scope, ctx));
        }
        element
    })
}

fn annotation(ts_type: Option<&TsTypeDef>, scope: &[String], ctx: &RenderContext) -> String {
    ts_type
        .map(|ty| format!(": {}", ts_type::to_markdown(ty, scope, ctx)))
        .unwrap_or_default()
}

fn reference(name: &str, scope: &[String], ctx: &RenderContext) -> String {
    match ctx.resolve(scope, name) {
        Some(anchor) => format!("[{}](#{})", markdown_escape(name), anchor),
        None => markdown_escape(name),
    }
}

/// Percent-encode the characters that end or break a link destination.
fn link_target(url: &str) -> String {
    url.replace(' ', "%20")
        .replace('<', "%3C")
        .replace('>', "%3E")
}

fn location_line(location: &Location) -> String {
    format!(
        "Defined in file '[{}]({})' on line {}, column {}.",
        markdown_escape(&location.filename),
        location.filename,
        location.line,
        location.col
    )
}
