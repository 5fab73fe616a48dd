//! Data model for `deno doc --json` output — format-agnostic and immutable
//! once decoded.

use serde::Deserialize;

/// A documentation payload: the node list plus when it was generated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocsData {
    pub timestamp: String,
    pub nodes: Vec<DocNode>,
}

/// One documented declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocNode {
    pub name: String,
    /// Enclosing namespace names, outermost first. Empty at top level.
    #[serde(default)]
    pub scope: Vec<String>,
    pub location: Location,
    #[serde(default)]
    pub js_doc: Option<JsDoc>,
    #[serde(flatten)]
    pub def: DocNodeDef,
}

impl DocNode {
    pub fn kind(&self) -> DocKind {
        match self.def {
            DocNodeDef::Function { .. } => DocKind::Function,
            DocNodeDef::Variable { .. } => DocKind::Variable,
            DocNodeDef::Class { .. } => DocKind::Class,
            DocNodeDef::Enum { .. } => DocKind::Enum,
            DocNodeDef::Interface { .. } => DocKind::Interface,
            DocNodeDef::TypeAlias { .. } => DocKind::TypeAlias,
            DocNodeDef::Namespace { .. } => DocKind::Namespace,
        }
    }

    /// Scope seen by this node's members: its own scope plus its name.
    pub fn child_scope(&self) -> Vec<String> {
        let mut scope = self.scope.clone();
        scope.push(self.name.clone());
        scope
    }

    pub fn with_scope(mut self, scope: Vec<String>) -> Self {
        self.scope = scope;
        self
    }
}

/// Kind-specific payload, selected by the `kind` field.
///
/// Any other `kind` (e.g. `import`) is rejected while decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocNodeDef {
    Function {
        #[serde(rename = "functionDef")]
        def: FunctionDef,
    },
    Variable {
        #[serde(rename = "variableDef")]
        def: VariableDef,
    },
    Class {
        #[serde(rename = "classDef")]
        def: ClassDef,
    },
    Enum {
        #[serde(rename = "enumDef")]
        def: EnumDef,
    },
    Interface {
        #[serde(rename = "interfaceDef")]
        def: InterfaceDef,
    },
    TypeAlias {
        #[serde(rename = "typeAliasDef")]
        def: TypeAliasDef,
    },
    Namespace {
        #[serde(rename = "namespaceDef")]
        def: NamespaceDef,
    },
}

/// Declaration kinds, in the order their sections appear on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    Function,
    Variable,
    Class,
    Enum,
    Interface,
    TypeAlias,
    Namespace,
}

impl DocKind {
    pub const ALL: [DocKind; 7] = [
        DocKind::Function,
        DocKind::Variable,
        DocKind::Class,
        DocKind::Enum,
        DocKind::Interface,
        DocKind::TypeAlias,
        DocKind::Namespace,
    ];

    /// Section heading for this kind.
    pub fn title(self) -> &'static str {
        match self {
            DocKind::Function => "Functions",
            DocKind::Variable => "Variables",
            DocKind::Class => "Classes",
            DocKind::Enum => "Enums",
            DocKind::Interface => "Interfaces",
            DocKind::TypeAlias => "Type Aliases",
            DocKind::Namespace => "Namespaces",
        }
    }

    /// Source keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            DocKind::Function => "function",
            DocKind::Variable => "const",
            DocKind::Class => "class",
            DocKind::Enum => "enum",
            DocKind::Interface => "interface",
            DocKind::TypeAlias => "type",
            DocKind::Namespace => "namespace",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub filename: String,
    pub line: u32,
    pub col: u32,
}

/// A doc comment, either raw text or already split into text and tags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JsDoc {
    Text(String),
    Structured(JsDocBlock),
}

impl JsDoc {
    pub fn text(&self) -> Option<&str> {
        match self {
            JsDoc::Text(text) => Some(text),
            JsDoc::Structured(block) => block.doc.as_deref(),
        }
    }

    pub fn tags(&self) -> &[JsDocTag] {
        match self {
            JsDoc::Text(_) => &[],
            JsDoc::Structured(block) => &block.tags,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JsDocBlock {
    pub doc: Option<String>,
    pub tags: Vec<JsDocTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JsDocTag {
    pub kind: String,
    pub name: Option<String>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParamDef {
    /// `identifier`, `rest`, `array`, `object` or `assign`.
    pub kind: Option<String>,
    pub name: String,
    pub optional: bool,
    pub ts_type: Option<TsTypeDef>,
}

impl ParamDef {
    pub fn is_rest(&self) -> bool {
        self.kind.as_deref() == Some("rest")
    }
}

/// A type expression. Only the shapes that need structure for linking are
/// modelled; everything else is displayed through `repr`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TsTypeDef {
    pub repr: String,
    pub kind: Option<String>,
    pub keyword: Option<String>,
    pub type_ref: Option<TsTypeRef>,
    pub union: Option<Vec<TsTypeDef>>,
    pub intersection: Option<Vec<TsTypeDef>>,
    pub array: Option<Box<TsTypeDef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TsTypeRef {
    pub type_name: String,
    pub type_params: Option<Vec<TsTypeDef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TsTypeParamDef {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunctionDef {
    pub params: Vec<ParamDef>,
    pub return_type: Option<TsTypeDef>,
    pub is_async: bool,
    pub is_generator: bool,
    pub type_params: Vec<TsTypeParamDef>,
}

impl FunctionDef {
    pub fn keyword(&self) -> &'static str {
        match (self.is_async, self.is_generator) {
            (true, true) => "async function*",
            (true, false) => "async function",
            (false, true) => "function*",
            (false, false) => "function",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    #[default]
    Const,
}

impl VariableKind {
    pub fn keyword(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariableDef {
    pub ts_type: Option<TsTypeDef>,
    pub kind: VariableKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Public,
    Protected,
    Private,
}

impl Accessibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Protected => "protected",
            Accessibility::Private => "private",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    #[default]
    Method,
    Getter,
    Setter,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassDef {
    pub is_abstract: bool,
    pub constructors: Vec<ClassConstructorDef>,
    pub properties: Vec<ClassPropertyDef>,
    pub methods: Vec<ClassMethodDef>,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassConstructorDef {
    pub js_doc: Option<JsDoc>,
    pub accessibility: Option<Accessibility>,
    pub name: String,
    pub params: Vec<ParamDef>,
    pub location: Option<Location>,
    pub inherited: bool,
}

impl Default for ClassConstructorDef {
    fn default() -> Self {
        ClassConstructorDef {
            js_doc: None,
            accessibility: None,
            name: "constructor".to_string(),
            params: Vec::new(),
            location: None,
            inherited: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassPropertyDef {
    pub js_doc: Option<JsDoc>,
    pub ts_type: Option<TsTypeDef>,
    pub readonly: bool,
    pub accessibility: Option<Accessibility>,
    pub optional: bool,
    pub is_abstract: bool,
    pub is_static: bool,
    pub name: String,
    pub location: Option<Location>,
    pub inherited: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassMethodDef {
    pub js_doc: Option<JsDoc>,
    pub accessibility: Option<Accessibility>,
    pub optional: bool,
    pub is_abstract: bool,
    pub is_static: bool,
    pub name: String,
    pub kind: MethodKind,
    pub function_def: FunctionDef,
    pub location: Option<Location>,
    pub inherited: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnumDef {
    pub members: Vec<EnumMemberDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumMemberDef {
    pub name: String,
    pub js_doc: Option<JsDoc>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterfaceDef {
    pub extends: Vec<TsTypeDef>,
    pub methods: Vec<InterfaceMethodDef>,
    pub properties: Vec<InterfacePropertyDef>,
    pub call_signatures: Vec<InterfaceCallSignatureDef>,
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterfaceMethodDef {
    pub name: String,
    pub location: Option<Location>,
    pub js_doc: Option<JsDoc>,
    pub optional: bool,
    pub params: Vec<ParamDef>,
    pub return_type: Option<TsTypeDef>,
    pub inherited: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterfacePropertyDef {
    pub name: String,
    pub location: Option<Location>,
    pub js_doc: Option<JsDoc>,
    pub optional: bool,
    pub ts_type: Option<TsTypeDef>,
    pub inherited: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterfaceCallSignatureDef {
    pub location: Option<Location>,
    pub js_doc: Option<JsDoc>,
    pub params: Vec<ParamDef>,
    pub ts_type: Option<TsTypeDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeAliasDef {
    pub ts_type: TsTypeDef,
    pub type_params: Vec<TsTypeParamDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamespaceDef {
    pub elements: Vec<DocNode>,
}
