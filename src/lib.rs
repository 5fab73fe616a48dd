//! docpage — render `deno doc --json` output as a browsable single page.
//!
//! The pipeline is: decode a payload ([`payload::parse_payload`]), expand
//! namespaces and build the declaration lookup ([`docs`]), then render the
//! page shell and card list through a [`Renderer`] ([`SinglePage`]).

pub mod docs;
pub mod error;
pub mod memo;
pub mod model;
pub mod page;
pub mod payload;
pub mod render;

pub use error::{Error, Result};
pub use model::{DocNode, DocsData};
pub use page::{PageOptions, SinglePage};
pub use payload::parse_payload;
pub use render::{create_renderer, Renderer};
