//! # Engine errors

/// The single failure kind of the engine operations.
///
/// Every operation in this crate is a pure function of its inputs, so the same
/// invalid input always fails the same way and the same valid input always
/// succeeds. Hosts map this to a user-facing message or HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// An out-of-range or malformed input
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
}
