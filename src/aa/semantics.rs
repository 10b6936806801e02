use crate::error::Error;
use std::fmt::{self, Display};
use strum_macros::EnumIter;

/// The acceptability semantics handled by the crate.
///
/// The variants form a closed set; components that only handle a part of it
/// (reasoners, kernels, serialisation rules) reject the others with
/// [`Error::UnsupportedSemantics`](crate::error::Error::UnsupportedSemantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Semantics {
    /// The conflict-free sets
    CF,
    /// The admissible semantics
    ADM,
    /// The complete semantics
    CO,
    /// The grounded semantics
    GR,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
    /// The unchallenged semantics
    UC,
    /// The strongly admissible semantics
    SAD,
}

impl Semantics {
    /// Returns the short uppercase name of the semantics.
    pub fn to_short_str(&self) -> &'static str {
        match self {
            Semantics::CF => "CF",
            Semantics::ADM => "ADM",
            Semantics::CO => "CO",
            Semantics::GR => "GR",
            Semantics::PR => "PR",
            Semantics::ST => "ST",
            Semantics::UC => "UC",
            Semantics::SAD => "SAD",
        }
    }
}

impl Display for Semantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_short_str())
    }
}

impl TryFrom<&str> for Semantics {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "cf" => Ok(Semantics::CF),
            "adm" => Ok(Semantics::ADM),
            "co" => Ok(Semantics::CO),
            "gr" => Ok(Semantics::GR),
            "pr" => Ok(Semantics::PR),
            "st" => Ok(Semantics::ST),
            "uc" => Ok(Semantics::UC),
            "sad" => Ok(Semantics::SAD),
            _ => Err(Error::UnsupportedSemantics(value.to_string())),
        }
    }
}
