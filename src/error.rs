use thiserror::Error;

/// Failures while wiring the page up. Handlers themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: #{0}")]
    MissingElement(&'static str),
    #[error("could not attach {event} listener to #{id}")]
    Listener {
        id: &'static str,
        event: &'static str,
    },
}
