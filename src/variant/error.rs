use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An alternative was requested from a variant that doesn't currently hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadVariantAccess {
    /// The declaration index of the requested alternative.
    pub requested: usize,
    /// The declaration index of the live alternative, or [`None`] if the variant was valueless.
    pub live: Option<usize>,
}

impl Display for BadVariantAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.live {
            Some(live) => write!(
                f,
                "Bad variant access, requested alternative {} while alternative {} is live!",
                self.requested, live
            ),
            None => write!(
                f,
                "Bad variant access, requested alternative {} from a valueless variant!",
                self.requested
            ),
        }
    }
}

impl Error for BadVariantAccess {}
