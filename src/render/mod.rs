//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod jsdoc;
pub mod markdown;
pub mod ts_type;

use crate::docs::FlatLookup;
use crate::error::{Error, Result};
use crate::model::{Accessibility, ParamDef};
use crate::page::PageView;

/// Trait for rendering a page into a specific output format.
pub trait Renderer {
    fn render(&self, page: &PageView<'_>) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}

/// Read-only state shared by every card on a page.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    lookup: &'a FlatLookup<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn new(lookup: &'a FlatLookup<'a>) -> Self {
        RenderContext { lookup }
    }

    /// Anchor id of the declaration `name` refers to from inside `scope`.
    pub fn resolve(&self, scope: &[String], name: &str) -> Option<String> {
        self.lookup.resolve(scope, name)
    }
}

pub(crate) const PARAM_SEPARATOR: &str = ", ";

/// Join rendered parameters with [`PARAM_SEPARATOR`]: a separator goes
/// after every parameter and the last one is dropped again.
pub(crate) fn join_params(params: &[ParamDef], render: impl Fn(&ParamDef) -> String) -> String {
    let mut elements: Vec<String> = Vec::with_capacity(params.len() * 2);
    for param in params {
        elements.push(render(param));
        elements.push(PARAM_SEPARATOR.to_string());
    }
    elements.pop();
    elements.concat()
}

/// `...name?` — rest marker, name, optional marker.
pub(crate) fn param_label(param: &ParamDef) -> String {
    format!(
        "{}{}{}",
        if param.is_rest() { "..." } else { "" },
        param.name,
        if param.optional { "?" } else { "" }
    )
}

/// Member modifiers in declaration order: accessibility first, then every
/// keyword whose flag is set.
pub(crate) fn modifiers(accessibility: Option<Accessibility>, flags: &[(bool, &str)]) -> String {
    let mut words: Vec<&str> = Vec::new();
    if let Some(accessibility) = accessibility {
        words.push(accessibility.keyword());
    }
    words.extend(flags.iter().filter(|(set, _)| *set).map(|(_, word)| *word));
    words.join(" ")
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape characters that markdown would otherwise treat as markup.
pub(crate) fn markdown_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '|') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::param;

    #[test]
    fn three_params_get_two_separators() {
        let params = vec![param("a", None), param("b", None), param("c", None)];
        let joined = join_params(&params, param_label);
        assert_eq!(joined, "a, b, c");
        assert_eq!(joined.matches(PARAM_SEPARATOR).count(), 2);
        assert!(!joined.ends_with(PARAM_SEPARATOR));
    }

    #[test]
    fn no_params_render_empty() {
        assert_eq!(join_params(&[], param_label), "");
    }

    #[test]
    fn single_param_has_no_separator() {
        assert_eq!(join_params(&[param("only", None)], param_label), "only");
    }

    #[test]
    fn label_marks_rest_and_optional() {
        let mut rest = param("args", None);
        rest.kind = Some("rest".to_string());
        assert_eq!(param_label(&rest), "...args");

        let mut optional = param("opts", None);
        optional.optional = true;
        assert_eq!(param_label(&optional), "opts?");
    }

    #[test]
    fn modifiers_join_in_order() {
        assert_eq!(
            modifiers(
                Some(Accessibility::Private),
                &[(true, "static"), (false, "abstract"), (true, "readonly")]
            ),
            "private static readonly"
        );
        assert_eq!(modifiers(Some(Accessibility::Protected), &[]), "protected");
        assert_eq!(modifiers(None, &[]), "");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            create_renderer("pdf"),
            Err(Error::UnknownFormat(f)) if f == "pdf"
        ));
        assert_eq!(create_renderer("md").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("html").unwrap().file_extension(), "html");
    }

    #[test]
    fn escapes() {
        assert_eq!(html_escape("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(markdown_escape("Array<T>_x"), "Array\\<T\\>\\_x");
    }
}
