use derive_more::{Display, Error};

/// A null pointer was dereferenced.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("attempted to dereference a null pointer")]
pub struct NullPointer;
