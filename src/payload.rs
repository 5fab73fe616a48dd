//! Decoding the documentation payload.

use crate::error::Result;
use crate::model::{DocNode, DocsData};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::debug;

/// Decode a payload from JSON text.
///
/// - empty or whitespace-only input: `None` (not generated yet)
/// - a bare array: the node list, stamped with the current time
/// - an object: `{ "timestamp": ..., "nodes": [...] }`
pub fn parse_payload(input: &str) -> Result<Option<DocsData>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(input)?;
    let data = if value.is_array() {
        let nodes: Vec<DocNode> = serde_json::from_value(value)?;
        DocsData {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            nodes,
        }
    } else {
        serde_json::from_value(value)?
    };

    debug!(nodes = data.nodes.len(), "decoded documentation payload");
    Ok(Some(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const FOO: &str = r#"{
        "kind": "function",
        "name": "foo",
        "location": { "filename": "mod.ts", "line": 1, "col": 0 },
        "functionDef": {}
    }"#;

    #[test]
    fn blank_input_is_not_loaded() {
        assert!(parse_payload("").unwrap().is_none());
        assert!(parse_payload("  \n\t").unwrap().is_none());
    }

    #[test]
    fn wrapped_payload_keeps_timestamp() {
        let input = format!(r#"{{ "timestamp": "t", "nodes": [{}] }}"#, FOO);
        let data = parse_payload(&input).unwrap().unwrap();
        assert_eq!(data.timestamp, "t");
        assert_eq!(data.nodes.len(), 1);
    }

    #[test]
    fn bare_array_is_stamped_now() {
        let input = format!("[{}]", FOO);
        let data = parse_payload(&input).unwrap().unwrap();
        assert_eq!(data.nodes[0].name, "foo");
        assert!(chrono::DateTime::parse_from_rfc3339(&data.timestamp).is_ok());
    }

    #[test]
    fn empty_node_list_is_loaded() {
        let data = parse_payload(r#"{ "timestamp": "t", "nodes": [] }"#)
            .unwrap()
            .unwrap();
        assert!(data.nodes.is_empty());
    }

    #[test]
    fn unknown_kind_fails() {
        let input = r#"[{ "kind": "import", "name": "x",
                          "location": { "filename": "mod.ts", "line": 1, "col": 0 } }]"#;
        assert!(matches!(parse_payload(input), Err(Error::Payload(_))));
    }

    #[test]
    fn malformed_json_fails() {
        assert!(matches!(parse_payload("{ nodes"), Err(Error::Payload(_))));
    }
}
