//! The single-page view: picks the placeholder or the card list for a
//! payload and hands the result to a [`Renderer`].

use crate::docs::{expand_namespaces, flatten_namespaces};
use crate::memo::Memo;
use crate::model::{DocNode, DocsData};
use crate::render::{RenderContext, Renderer};
use std::sync::Arc;
use tracing::debug;

/// Reload link used when none is configured: re-requests the page.
pub const DEFAULT_RELOAD_URL: &str = "javascript:location.reload()";

#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Module the documentation was generated for, shown in the header.
    pub entrypoint: String,
    /// Target of the header's reload link.
    pub reload_url: String,
}

impl PageOptions {
    pub fn new(entrypoint: impl Into<String>) -> Self {
        PageOptions {
            entrypoint: entrypoint.into(),
            reload_url: DEFAULT_RELOAD_URL.to_string(),
        }
    }
}

/// What the page body shows.
pub enum PageState<'a> {
    /// No payload yet.
    Loading,
    /// Payload present, but it documents nothing.
    Empty { timestamp: &'a str },
    /// Expanded nodes plus the lookup context cards resolve links through.
    Loaded {
        timestamp: &'a str,
        nodes: &'a [DocNode],
        ctx: RenderContext<'a>,
    },
}

/// Everything a [`Renderer`] needs for one page.
pub struct PageView<'a> {
    pub entrypoint: &'a str,
    pub reload_url: &'a str,
    pub state: PageState<'a>,
}

impl PageView<'_> {
    /// Generation time of the payload; empty while loading.
    pub fn timestamp(&self) -> &str {
        match self.state {
            PageState::Loading => "",
            PageState::Empty { timestamp } | PageState::Loaded { timestamp, .. } => timestamp,
        }
    }
}

/// Renders payloads, reusing the namespace expansion while the same
/// payload is rendered again.
pub struct SinglePage {
    options: PageOptions,
    expanded: Memo<DocsData, Vec<DocNode>>,
}

impl SinglePage {
    pub fn new(options: PageOptions) -> Self {
        SinglePage {
            options,
            expanded: Memo::default(),
        }
    }

    /// Expanded node list for `data`, computed once per payload.
    pub fn expanded_nodes(&mut self, data: &Arc<DocsData>) -> Arc<Vec<DocNode>> {
        self.expanded.get_or_compute(data, |data| {
            let nodes = expand_namespaces(&data.nodes);
            debug!(
                top_level = data.nodes.len(),
                expanded = nodes.len(),
                "expanded namespaces"
            );
            nodes
        })
    }

    /// Render `data` (`None` while not yet loaded) with `renderer`.
    pub fn render(&mut self, data: Option<&Arc<DocsData>>, renderer: &dyn Renderer) -> String {
        let Some(data) = data else {
            return renderer.render(&PageView {
                entrypoint: &self.options.entrypoint,
                reload_url: &self.options.reload_url,
                state: PageState::Loading,
            });
        };

        let nodes = self.expanded_nodes(data);
        if nodes.is_empty() {
            return renderer.render(&PageView {
                entrypoint: &self.options.entrypoint,
                reload_url: &self.options.reload_url,
                state: PageState::Empty {
                    timestamp: &data.timestamp,
                },
            });
        }

        let lookup = flatten_namespaces(&nodes);
        debug!(entries = lookup.len(), "built declaration lookup");
        renderer.render(&PageView {
            entrypoint: &self.options.entrypoint,
            reload_url: &self.options.reload_url,
            state: PageState::Loaded {
                timestamp: &data.timestamp,
                nodes: &nodes,
                ctx: RenderContext::new(&lookup),
            },
        })
    }
}
