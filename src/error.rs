use crate::aa::Semantics;
use thiserror::Error;

/// The errors raised by the crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An operation referred to an argument or an attack endpoint that does not
    /// belong to the framework under consideration.
    #[error("malformed framework: {0}")]
    MalformedGraph(String),
    /// A semantics was requested from a component that has no rule for it, or
    /// an undefined semantics name was supplied.
    ///
    /// This error is raised eagerly; no fallback semantics is ever substituted.
    #[error(r#"no rule registered for the semantics "{0}""#)]
    UnsupportedSemantics(String),
    /// A single-extension query exhausted its search space without finding an
    /// extension.
    ///
    /// Set-valued queries signal the same situation by returning an empty
    /// collection instead.
    #[error("no {0} extension exists for this framework")]
    NoDecomposition(Semantics),
}

/// A `Result` alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
