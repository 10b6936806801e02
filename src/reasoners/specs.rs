use crate::aa::{Argument, Extension, LabelType, Semantics};
use crate::error::{Error, Result};

/// A trait for reasoners able to enumerate the extensions of a framework.
pub trait ExtensionSetComputer<T>
where
    T: LabelType,
{
    /// Returns the semantics the extensions of which are computed.
    fn semantics(&self) -> Semantics;

    /// Computes the set of extensions.
    ///
    /// An empty result is a legitimate outcome (e.g. a framework with no
    /// stable extension), distinct from an unsupported-semantics error which
    /// is raised at reasoner construction time.
    fn compute_extensions(&mut self) -> Vec<Extension>;
}

/// A trait for reasoners able to compute a single extension.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    /// For multiple-extension semantics, the extension is the first one
    /// produced by the canonical enumeration order of the reasoner; callers
    /// needing a specific extension must enumerate them all instead.
    fn compute_one_extension(&mut self) -> Option<Extension>;
}

/// A trait for reasoners able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument, i.e. its membership in
    /// at least one extension.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool;
}

/// A trait for reasoners able to check the skeptical acceptance of an argument.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument, i.e. its membership in
    /// all the extensions.
    ///
    /// An argument is vacuously skeptically accepted when there is no extension.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool;
}

/// Turns the result of a single-extension query into a mandatory one.
///
/// An empty search result is mapped to a
/// [`NoDecomposition`](crate::error::Error::NoDecomposition) error.
pub fn require_extension<T, R>(reasoner: &mut R, semantics: Semantics) -> Result<Extension>
where
    T: LabelType,
    R: SingleExtensionComputer<T> + ?Sized,
{
    reasoner
        .compute_one_extension()
        .ok_or(Error::NoDecomposition(semantics))
}
