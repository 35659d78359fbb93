#![allow(unused_macros)]

/// Aborts on a broken graph invariant
///
/// Captures the call site so the diagnostic names the operation that detected
/// the violation rather than the abort helper.
///
/// ```rust, ignore
///  let node = self.nodes.get(&id).unwrap_or_else(|| fatal!(Error::InvalidNode(id)));
/// ```
macro_rules! fatal {
    ($error:expr) => {
        crate::diagnostics::abort($error, file!(), line!())
    };
}

/// Aborts with the given error unless the condition holds
///
/// ```rust, ignore
///  graph_assert!(!node.has_successor(to), Error::DuplicateEdge { from, to });
/// ```
macro_rules! graph_assert {
    ($cond:expr, $error:expr) => {
        if !$cond {
            fatal!($error);
        }
    };
}

/// Emits a mutation trace event if the graph is configured to trace
///
/// ```rust, ignore
///  trace_mutation!(self, from = %from, to = %to, "edge added");
/// ```
macro_rules! trace_mutation {
    ($graph:expr, $($arg:tt)+) => {
        if $graph.config().trace_mutations {
            tracing::trace!(target: crate::diagnostics::LOG_TARGET, graph = %$graph.id(), $($arg)+);
        }
    };
}
