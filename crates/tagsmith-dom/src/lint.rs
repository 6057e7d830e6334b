//! Advisory checks over a finished tree.
//!
//! The pass only reads the tree and never blocks serialization; callers may
//! skip it entirely.

use std::collections::HashMap;
use std::fmt;

use tagsmith_common::warning::warn_once;

use crate::node::Node;

/// Which kind of construct a deprecation diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// An obsolete element.
    Element,
    /// An obsolete attribute on an element.
    Attribute,
}

/// One advisory finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// [§ 16 Obsolete features](https://html.spec.whatwg.org/multipage/obsolete.html)
    DeprecatedConstructUsed {
        /// Element or attribute.
        construct: Construct,
        /// `tag` for elements, `tag[attribute]` for attributes.
        name: String,
        /// What to use instead.
        suggested_replacement: String,
    },
    /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#the-id-attribute)
    ///
    /// "The value must be unique amongst all the IDs in the element's tree."
    DuplicateIdentifier {
        /// The repeated id.
        id: String,
        /// How many elements carry it.
        occurrences: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeprecatedConstructUsed {
                construct: Construct::Element,
                name,
                suggested_replacement,
            } => write!(f, "element <{name}> is deprecated; use {suggested_replacement}"),
            Self::DeprecatedConstructUsed {
                construct: Construct::Attribute,
                name,
                suggested_replacement,
            } => write!(f, "attribute {name} is deprecated; use {suggested_replacement}"),
            Self::DuplicateIdentifier { id, occurrences } => {
                write!(f, "id {id:?} is used by {occurrences} elements")
            }
        }
    }
}

/// Collect advisory diagnostics for `root` and its descendants.
///
/// Deprecations are reported in tree order, followed by one entry per
/// colliding id in order of first occurrence. Absent attributes (a `false`
/// boolean, an empty list) and blank ids are ignored.
#[must_use]
pub fn lint(root: &Node) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut id_counts: HashMap<String, usize> = HashMap::new();
    let mut id_order: Vec<String> = Vec::new();

    for element in root.descendants().filter_map(Node::as_element) {
        if let Some(deprecation) = element.descriptor().deprecation() {
            diagnostics.push(Diagnostic::DeprecatedConstructUsed {
                construct: Construct::Element,
                name: element.tag().to_string(),
                suggested_replacement: deprecation.replacement.to_string(),
            });
        }
        for attribute in element.attributes().iter().filter(|attr| attr.is_present()) {
            if let Some(deprecation) = attribute.deprecation {
                diagnostics.push(Diagnostic::DeprecatedConstructUsed {
                    construct: Construct::Attribute,
                    name: format!("{}[{}]", element.tag(), attribute.name),
                    suggested_replacement: deprecation.replacement.to_string(),
                });
            }
        }

        let Some(id) = element.id() else { continue };
        if id.trim().is_empty() {
            continue;
        }
        let count = id_counts.entry(id.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            id_order.push(id);
        }
    }

    diagnostics.extend(id_order.into_iter().filter_map(|id| {
        let occurrences = id_counts.get(&id).copied().unwrap_or(0);
        (occurrences > 1).then_some(Diagnostic::DuplicateIdentifier { id, occurrences })
    }));
    diagnostics
}

/// Forward diagnostics to the deduplicated warning log.
///
/// Returns how many were new.
pub fn report(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|diagnostic| warn_once("lint", &diagnostic.to_string()))
        .count()
}
