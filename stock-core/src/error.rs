/// Errors produced by the `stock-core` crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An identifier was empty.
    #[error("{kind} must not be empty")]
    EmptyIdentifier {
        /// Which identifier was rejected (e.g. `"credential id"`).
        kind: &'static str,
    },
}
