//! Observable store state.

/// One observable state of a collection store.
///
/// `items` always reflects the last successful full fetch. `busy` is true
/// for the entire duration of exactly one in-flight operation. `last_error`
/// is a transient annotation: it is cleared when the next operation starts
/// and does not block further operations.
#[derive(Debug, Clone)]
pub struct Snapshot<R> {
    pub items: Vec<R>,
    pub busy: bool,
    pub last_error: Option<String>,
}

impl<R> Default for Snapshot<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            busy: false,
            last_error: None,
        }
    }
}
