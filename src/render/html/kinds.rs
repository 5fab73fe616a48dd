//! One card per declaration kind.

use super::card::{SimpleCard, SimpleSubCard};
use super::{section_heading, CardList};
use crate::docs::anchor_id;
use crate::model::*;
use crate::render::{html_escape, modifiers, ts_type, RenderContext};

/// Render the card for `node`, dispatching on its kind.
pub fn render_card(node: &DocNode, nested: bool, ctx: &RenderContext) -> String {
    match &node.def {
        DocNodeDef::Function { def } => function_card(node, def, nested, ctx),
        DocNodeDef::Variable { def } => variable_card(node, def, nested, ctx),
        DocNodeDef::Class { def } => class_card(node, def, nested, ctx),
        DocNodeDef::Enum { def } => enum_card(node, def, nested, ctx),
        DocNodeDef::Interface { def } => interface_card(node, def, nested, ctx),
        DocNodeDef::TypeAlias { def } => type_alias_card(node, def, nested, ctx),
        DocNodeDef::Namespace { def } => namespace_card(node, def, nested, ctx),
    }
}

fn function_card(node: &DocNode, def: &FunctionDef, nested: bool, ctx: &RenderContext) -> String {
    SimpleCard::new(node, nested)
        .prefix(def.keyword())
        .type_params(&def.type_params)
        .params(&def.params)
        .return_type(def.return_type.as_ref())
        .render(ctx)
}

fn variable_card(node: &DocNode, def: &VariableDef, nested: bool, ctx: &RenderContext) -> String {
    SimpleCard::new(node, nested)
        .prefix(def.kind.keyword())
        .suffix(type_annotation(def.ts_type.as_ref(), &node.scope, ctx))
        .render(ctx)
}

fn class_card(node: &DocNode, def: &ClassDef, nested: bool, ctx: &RenderContext) -> String {
    let prefix = if def.is_abstract { "abstract class" } else { "class" };

    let mut suffix = String::new();
    if let Some(ref parent) = def.extends {
        suffix.push_str(&format!(
            "<span class=\"heritage\"> extends {}</span>",
            reference_html(parent, &node.scope, ctx)
        ));
    }
    if !def.implements.is_empty() {
        let names: Vec<String> = def
            .implements
            .iter()
            .map(|name| reference_html(name, &node.scope, ctx))
            .collect();
        suffix.push_str(&format!(
            "<span class=\"heritage\"> implements {}</span>",
            names.join(", ")
        ));
    }

    let scope = &node.scope;
    let mut details = String::new();

    if !def.constructors.is_empty() {
        details.push_str(&section_heading("Constructors", true));
        for ctor in &def.constructors {
            details.push_str(
                &SimpleSubCard::new(&ctor.name, scope)
                    .prefix(modifiers(ctor.accessibility, &[]))
                    .params(&ctor.params)
                    .js_doc(ctor.js_doc.as_ref())
                    .location(ctor.location.as_ref())
                    .inherited(ctor.inherited)
                    .render(ctx),
            );
        }
    }

    if !def.properties.is_empty() {
        details.push_str(&section_heading("Properties", true));
        for prop in &def.properties {
            let flags = [
                (prop.is_static, "static"),
                (prop.is_abstract, "abstract"),
                (prop.readonly, "readonly"),
            ];
            details.push_str(
                &SimpleSubCard::new(&prop.name, scope)
                    .prefix(modifiers(prop.accessibility, &flags))
                    .optional(prop.optional)
                    .suffix(type_annotation(prop.ts_type.as_ref(), scope, ctx))
                    .js_doc(prop.js_doc.as_ref())
                    .location(prop.location.as_ref())
                    .inherited(prop.inherited)
                    .render(ctx),
            );
        }
    }

    if !def.methods.is_empty() {
        details.push_str(&section_heading("Methods", true));
        for method in &def.methods {
            let flags = [
                (method.is_static, "static"),
                (method.is_abstract, "abstract"),
                (method.function_def.is_async, "async"),
                (method.kind == MethodKind::Getter, "get"),
                (method.kind == MethodKind::Setter, "set"),
            ];
            details.push_str(
                &SimpleSubCard::new(&method.name, scope)
                    .prefix(modifiers(method.accessibility, &flags))
                    .optional(method.optional)
                    .params(&method.function_def.params)
                    .return_type(method.function_def.return_type.as_ref())
                    .js_doc(method.js_doc.as_ref())
                    .location(method.location.as_ref())
                    .inherited(method.inherited)
                    .render(ctx),
            );
        }
    }

    let mut card = SimpleCard::new(node, nested)
        .prefix(prefix)
        .type_params(&def.type_params)
        .suffix(suffix);
    if !details.is_empty() {
        card = card.details(members_block(&details));
    }
    card.render(ctx)
}

fn enum_card(node: &DocNode, def: &EnumDef, nested: bool, ctx: &RenderContext) -> String {
    let mut details = String::new();
    if !def.members.is_empty() {
        details.push_str(&section_heading("Members", true));
        for member in &def.members {
            details.push_str(
                &SimpleSubCard::new(&member.name, &node.scope)
                    .js_doc(member.js_doc.as_ref())
                    .location(member.location.as_ref())
                    .render(ctx),
            );
        }
    }

    let mut card = SimpleCard::new(node, nested).prefix("enum");
    if !details.is_empty() {
        card = card.details(members_block(&details));
    }
    card.render(ctx)
}

fn interface_card(node: &DocNode, def: &InterfaceDef, nested: bool, ctx: &RenderContext) -> String {
    let scope = &node.scope;

    let mut suffix = String::new();
    if !def.extends.is_empty() {
        let parents: Vec<String> = def
            .extends
            .iter()
            .map(|ty| ts_type::to_html(ty, scope, ctx))
            .collect();
        suffix.push_str(&format!(
            "<span class=\"heritage\"> extends {}</span>",
            parents.join(", ")
        ));
    }

    let mut details = String::new();

    if !def.call_signatures.is_empty() {
        details.push_str(&section_heading("Call Signatures", true));
        for signature in &def.call_signatures {
            details.push_str(
                &SimpleSubCard::new("", scope)
                    .params(&signature.params)
                    .return_type(signature.ts_type.as_ref())
                    .js_doc(signature.js_doc.as_ref())
                    .location(signature.location.as_ref())
                    .render(ctx),
            );
        }
    }

    if !def.properties.is_empty() {
        details.push_str(&section_heading("Properties", true));
        for prop in &def.properties {
            details.push_str(
                &SimpleSubCard::new(&prop.name, scope)
                    .optional(prop.optional)
                    .suffix(type_annotation(prop.ts_type.as_ref(), scope, ctx))
                    .js_doc(prop.js_doc.as_ref())
                    .location(prop.location.as_ref())
                    .inherited(prop.inherited)
                    .render(ctx),
            );
        }
    }

    if !def.methods.is_empty() {
        details.push_str(&section_heading("Methods", true));
        for method in &def.methods {
            details.push_str(
                &SimpleSubCard::new(&method.name, scope)
                    .optional(method.optional)
                    .params(&method.params)
                    .return_type(method.return_type.as_ref())
                    .js_doc(method.js_doc.as_ref())
                    .location(method.location.as_ref())
                    .inherited(method.inherited)
                    .render(ctx),
            );
        }
    }

    let mut card = SimpleCard::new(node, nested)
        .prefix("interface")
        .type_params(&def.type_params)
        .suffix(suffix);
    if !details.is_empty() {
        card = card.details(members_block(&details));
    }
    card.render(ctx)
}

fn type_alias_card(
    node: &DocNode,
    def: &TypeAliasDef,
    nested: bool,
    ctx: &RenderContext,
) -> String {
    SimpleCard::new(node, nested)
        .prefix("type")
        .type_params(&def.type_params)
        .suffix(format!(
            "<span class=\"type-annotation\"> = {}</span>",
            ts_type::to_html(&def.ts_type, &node.scope, ctx)
        ))
        .render(ctx)
}

/// Namespace members get their own cards through expansion; the namespace
/// card lists them as links to those cards, grouped like the page.
fn namespace_card(node: &DocNode, def: &NamespaceDef, nested: bool, ctx: &RenderContext) -> String {
    let scope = node.child_scope();
    let details = format!(
        "<div class=\"namespace-members\">\n{}</div>\n",
        CardList::new(&def.elements)
            .nested(true)
            .links_within(&scope)
            .render(ctx)
    );

    SimpleCard::new(node, nested)
        .prefix("namespace")
        .details(details)
        .render(ctx)
}

/// One row of a link list: keyword plus a link to the member's card.
pub(crate) fn member_link(node: &DocNode, scope: &[String]) -> String {
    format!(
        "  <li><span class=\"keyword\">{} </span><a href=\"#{}\">{}</a></li>\n",
        member_keyword(node),
        html_escape(&anchor_id(scope, &node.name)),
        html_escape(&node.name)
    )
}

fn member_keyword(node: &DocNode) -> &'static str {
    match &node.def {
        DocNodeDef::Function { def } => def.keyword(),
        DocNodeDef::Variable { def } => def.kind.keyword(),
        DocNodeDef::Class { def } if def.is_abstract => "abstract class",
        _ => node.kind().keyword(),
    }
}

/// `: Type`, or nothing when the type is unknown.
fn type_annotation(ts_type: Option<&TsTypeDef>, scope: &[String], ctx: &RenderContext) -> String {
    match ts_type {
        Some(ty) => format!(
            "<span class=\"type-annotation\">: {}</span>",
            ts_type::to_html(ty, scope, ctx)
        ),
        None => String::new(),
    }
}

/// A bare name reference, linked when it resolves.
fn reference_html(name: &str, scope: &[String], ctx: &RenderContext) -> String {
    match ctx.resolve(scope, name) {
        Some(anchor) => format!(
            "<a href=\"#{}\" class=\"type-link\">{}</a>",
            html_escape(&anchor),
            html_escape(name)
        ),
        None => html_escape(name),
    }
}

fn members_block(details: &str) -> String {
    format!("<div class=\"members\">\n{}</div>\n", details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::flatten_namespaces;
    use crate::model::fixtures::*;

    fn render_one(node: &DocNode, others: &[DocNode]) -> String {
        let mut all = others.to_vec();
        all.push(node.clone());
        let lookup = flatten_namespaces(&all);
        let ctx = RenderContext::new(&lookup);
        render_card(node, false, &ctx)
    }

    #[test]
    fn function_card_shows_keyword_params_and_return() {
        let node = node(
            "fetchAll",
            DocNodeDef::Function {
                def: FunctionDef {
                    params: vec![param("url", Some(keyword("string")))],
                    return_type: Some(type_ref("Response")),
                    is_async: true,
                    ..FunctionDef::default()
                },
            },
        );
        let html = render_one(&node, &[class("Response")]);
        assert!(html.contains("<span class=\"keyword\">async function </span>"));
        assert!(html.contains("(url: string)"));
        assert!(html.contains("⇒ <a href=\"#Response\" class=\"type-link\">Response</a>"));
    }

    #[test]
    fn variable_card_uses_declaration_keyword() {
        let node = node(
            "count",
            DocNodeDef::Variable {
                def: VariableDef {
                    ts_type: Some(keyword("number")),
                    kind: VariableKind::Let,
                },
            },
        );
        let html = render_one(&node, &[]);
        assert!(html.contains("<span class=\"keyword\">let </span>"));
        assert!(html.contains("<span class=\"type-annotation\">: number</span>"));
    }

    #[test]
    fn class_card_lists_members_as_sub_cards() {
        let node = node(
            "Server",
            DocNodeDef::Class {
                def: ClassDef {
                    extends: Some("Base".to_string()),
                    constructors: vec![ClassConstructorDef {
                        params: vec![param("port", Some(keyword("number")))],
                        ..ClassConstructorDef::default()
                    }],
                    properties: vec![ClassPropertyDef {
                        name: "port".to_string(),
                        readonly: true,
                        ts_type: Some(keyword("number")),
                        ..ClassPropertyDef::default()
                    }],
                    methods: vec![ClassMethodDef {
                        name: "close".to_string(),
                        inherited: true,
                        function_def: FunctionDef {
                            return_type: Some(keyword("void")),
                            ..FunctionDef::default()
                        },
                        ..ClassMethodDef::default()
                    }],
                    ..ClassDef::default()
                },
            },
        );
        let html = render_one(&node, &[class("Base")]);
        assert!(html.contains("extends <a href=\"#Base\" class=\"type-link\">Base</a>"));
        assert!(html.contains("constructor<span class=\"params\">(port: number)</span>"));
        assert!(html.contains("<span class=\"keyword\">readonly </span>port<span class=\"type-annotation\">: number</span>"));
        assert!(html.contains("<span class=\"inherited-label\">inherited </span>close"));
        assert!(html.contains("<span class=\"return\"> → void</span>"));
        assert_eq!(html.matches(" id=\"").count(), 1);
    }

    #[test]
    fn enum_card_lists_members() {
        let node = node(
            "Color",
            DocNodeDef::Enum {
                def: EnumDef {
                    members: vec![
                        EnumMemberDef {
                            name: "Red".to_string(),
                            ..EnumMemberDef::default()
                        },
                        EnumMemberDef {
                            name: "Green".to_string(),
                            ..EnumMemberDef::default()
                        },
                    ],
                },
            },
        );
        let html = render_one(&node, &[]);
        assert!(html.contains(">Members<"));
        assert!(html.contains("<div class=\"signature\">Red</div>"));
        assert_eq!(html.matches("class=\"sub-card\"").count(), 2);
    }

    #[test]
    fn interface_card_shows_optional_members() {
        let node = node(
            "Options",
            DocNodeDef::Interface {
                def: InterfaceDef {
                    properties: vec![InterfacePropertyDef {
                        name: "verbose".to_string(),
                        optional: true,
                        ts_type: Some(keyword("boolean")),
                        ..InterfacePropertyDef::default()
                    }],
                    ..InterfaceDef::default()
                },
            },
        );
        let html = render_one(&node, &[]);
        assert!(html.contains("verbose?<span class=\"type-annotation\">: boolean</span>"));
    }

    #[test]
    fn class_card_links_implemented_interfaces() {
        let node = node(
            "Server",
            DocNodeDef::Class {
                def: ClassDef {
                    implements: vec!["Handler".to_string(), "Closer".to_string()],
                    ..ClassDef::default()
                },
            },
        );
        let html = render_one(&node, &[interface("Handler")]);
        assert!(html.contains(
            "<span class=\"heritage\"> implements \
             <a href=\"#Handler\" class=\"type-link\">Handler</a>, Closer</span>"
        ));
    }

    #[test]
    fn interface_card_lists_call_signatures() {
        let node = node(
            "Handler",
            DocNodeDef::Interface {
                def: InterfaceDef {
                    call_signatures: vec![InterfaceCallSignatureDef {
                        params: vec![param("req", Some(keyword("string")))],
                        ts_type: Some(keyword("void")),
                        ..InterfaceCallSignatureDef::default()
                    }],
                    ..InterfaceDef::default()
                },
            },
        );
        let html = render_one(&node, &[]);
        assert!(html.contains(">Call Signatures</h3>"));
        assert!(html.contains(
            "<div class=\"signature\"><span class=\"params\">(req: string)</span>\
             <span class=\"return\"> → void</span></div>"
        ));
        assert_eq!(html.matches(" id=\"").count(), 1);
    }

    #[test]
    fn type_alias_card_shows_definition() {
        let node = node(
            "Id",
            DocNodeDef::TypeAlias {
                def: TypeAliasDef {
                    ts_type: keyword("string"),
                    type_params: Vec::new(),
                },
            },
        );
        let html = render_one(&node, &[]);
        assert!(html.contains("<span class=\"keyword\">type </span>"));
        assert!(html.contains(" = string"));
    }

    #[test]
    fn namespace_card_links_members_without_anchoring_them() {
        let node = namespace("A", vec![function("foo"), class("Bar")]);
        let html = render_one(&node, &[]);
        assert!(html.contains("<a href=\"#A.foo\">foo</a>"));
        assert!(html.contains("<a href=\"#A.Bar\">Bar</a>"));
        assert!(!html.contains("id=\"A.foo\""));
        let functions = html.find(">Functions<").unwrap();
        let classes = html.find(">Classes<").unwrap();
        assert!(functions < classes);
    }

    #[test]
    fn empty_namespace_has_empty_member_list() {
        let node = namespace("Empty", vec![]);
        let html = render_one(&node, &[]);
        assert!(html.contains("<div class=\"namespace-members\">\n</div>"));
    }
}
