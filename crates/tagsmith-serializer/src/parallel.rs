//! Rendering independent subtrees on worker threads.
//!
//! Nodes own their children exclusively and serialization only reads them,
//! so sibling subtrees need no synchronization. Each worker renders a
//! contiguous chunk and the results are joined in input order.

use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use tagsmith_dom::Node;

use crate::config::SerializerConfig;
use crate::serializer::{DOCTYPE, SerializeError, serialize};

/// Serialize `nodes` in parallel and concatenate them in order.
///
/// The doctype, when configured, is written once before the first node.
/// With pretty printing each node starts on a new line.
///
/// # Errors
///
/// Returns the error of the first failing node in input order; no output
/// is produced in that case.
pub fn serialize_all(nodes: &[Node], config: &SerializerConfig) -> Result<String, SerializeError> {
    let mut fragment_config = config.clone();
    fragment_config.emit_doctype = false;
    let fragment_config = &fragment_config;

    let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    let chunk_size = nodes.len().div_ceil(workers).max(1);
    tracing::debug!(nodes = nodes.len(), workers, chunk_size, "serializing subtrees in parallel");

    let chunks: Vec<Result<Vec<String>, SerializeError>> = thread::scope(|scope| {
        let handles: Vec<_> = nodes
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|node| serialize(node, fragment_config))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    });

    let mut out = String::new();
    if config.emit_doctype {
        out.push_str(DOCTYPE);
        if config.pretty_print {
            out.push('\n');
        }
    }
    let mut rendered = Vec::with_capacity(nodes.len());
    for chunk in chunks {
        rendered.extend(chunk?);
    }
    out.push_str(&rendered.join(if config.pretty_print { "\n" } else { "" }));
    Ok(out)
}
