//! Derived views over a node list: alphabetical grouping by kind,
//! namespace expansion, and the flattened scope-qualified lookup.
//!
//! All functions here are pure; their output depends only on the input
//! slice.

use crate::model::{DocKind, DocNode, DocNodeDef};
use std::collections::BTreeMap;

/// Anchor id for a node: scope path plus name, joined with `.`.
pub fn anchor_id(scope: &[String], name: &str) -> String {
    let mut id = scope.join(".");
    if !id.is_empty() {
        id.push('.');
    }
    id.push_str(name);
    id
}

/// Anchor of the ancestor at `depth` in a scope path (`0` = outermost).
pub fn scope_anchor(scope: &[String], depth: usize) -> String {
    scope[..=depth].join(".")
}

/// Sort by name, case-insensitively. Equal names keep their input order.
pub fn sort_by_alphabet(nodes: &[DocNode]) -> Vec<&DocNode> {
    let mut sorted: Vec<&DocNode> = nodes.iter().collect();
    sorted.sort_by_cached_key(|node| node.name.to_lowercase());
    sorted
}

/// Nodes partitioned by kind, each bucket in alphabetical order.
#[derive(Debug, Default)]
pub struct GroupedNodes<'a> {
    pub functions: Vec<&'a DocNode>,
    pub variables: Vec<&'a DocNode>,
    pub classes: Vec<&'a DocNode>,
    pub enums: Vec<&'a DocNode>,
    pub interfaces: Vec<&'a DocNode>,
    pub type_aliases: Vec<&'a DocNode>,
    pub namespaces: Vec<&'a DocNode>,
}

impl<'a> GroupedNodes<'a> {
    pub fn get(&self, kind: DocKind) -> &[&'a DocNode] {
        match kind {
            DocKind::Function => &self.functions,
            DocKind::Variable => &self.variables,
            DocKind::Class => &self.classes,
            DocKind::Enum => &self.enums,
            DocKind::Interface => &self.interfaces,
            DocKind::TypeAlias => &self.type_aliases,
            DocKind::Namespace => &self.namespaces,
        }
    }

    fn bucket_mut(&mut self, kind: DocKind) -> &mut Vec<&'a DocNode> {
        match kind {
            DocKind::Function => &mut self.functions,
            DocKind::Variable => &mut self.variables,
            DocKind::Class => &mut self.classes,
            DocKind::Enum => &mut self.enums,
            DocKind::Interface => &mut self.interfaces,
            DocKind::TypeAlias => &mut self.type_aliases,
            DocKind::Namespace => &mut self.namespaces,
        }
    }

    /// Non-empty sections in page order.
    pub fn sections(&self) -> impl Iterator<Item = (DocKind, &[&'a DocNode])> + '_ {
        DocKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
            .filter(|(_, nodes)| !nodes.is_empty())
    }

    pub fn len(&self) -> usize {
        DocKind::ALL.iter().map(|kind| self.get(*kind).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort `nodes` alphabetically, then bucket them by kind.
pub fn group_nodes(nodes: &[DocNode]) -> GroupedNodes<'_> {
    let mut groups = GroupedNodes::default();
    for node in sort_by_alphabet(nodes) {
        groups.bucket_mut(node.kind()).push(node);
    }
    groups
}

/// Lift every namespace member, at any depth, into one depth-first list.
///
/// Each lifted member gets the scope of its enclosing namespace chain.
/// Namespace nodes stay in the list, ahead of their members, with their
/// `elements` untouched.
pub fn expand_namespaces(nodes: &[DocNode]) -> Vec<DocNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        expand_into(node.clone(), &mut out);
    }
    out
}

fn expand_into(node: DocNode, out: &mut Vec<DocNode>) {
    let members: Vec<DocNode> = match &node.def {
        DocNodeDef::Namespace { def } => {
            let scope = node.child_scope();
            def.elements
                .iter()
                .map(|element| element.clone().with_scope(scope.clone()))
                .collect()
        }
        _ => Vec::new(),
    };
    out.push(node);
    for member in members {
        expand_into(member, out);
    }
}

/// Read-only lookup from scope-qualified name to node.
#[derive(Debug, Default)]
pub struct FlatLookup<'a> {
    entries: BTreeMap<String, &'a DocNode>,
}

impl<'a> FlatLookup<'a> {
    pub fn get(&self, qualified: &str) -> Option<&'a DocNode> {
        self.entries.get(qualified).copied()
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.entries.contains_key(qualified)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolve `name` as seen from inside `scope`, innermost scope first.
    /// Returns the qualified name (the anchor id) of the match.
    pub fn resolve(&self, scope: &[String], name: &str) -> Option<String> {
        (0..=scope.len())
            .rev()
            .map(|depth| anchor_id(&scope[..depth], name))
            .find(|qualified| self.contains(qualified))
    }
}

/// Build the qualified-name lookup over every node reachable from `nodes`.
///
/// Accepts both raw and already-expanded lists: a member reached twice
/// maps to the same key. On a key collision the first node wins.
pub fn flatten_namespaces(nodes: &[DocNode]) -> FlatLookup<'_> {
    let mut lookup = FlatLookup::default();
    for node in nodes {
        flatten_into(node, &node.scope, &mut lookup);
    }
    lookup
}

fn flatten_into<'a>(node: &'a DocNode, scope: &[String], lookup: &mut FlatLookup<'a>) {
    lookup
        .entries
        .entry(anchor_id(scope, &node.name))
        .or_insert(node);
    if let DocNodeDef::Namespace { def } = &node.def {
        let mut child_scope = scope.to_vec();
        child_scope.push(node.name.clone());
        for element in &def.elements {
            flatten_into(element, &child_scope, lookup);
        }
    }
}
