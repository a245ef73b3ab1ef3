use derive_more::{Display, Error, From, IsVariant};

/// No property with the requested name is registered for the object's type.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{object} has no property named {property:?}")]
pub struct UnknownProperty {
    /// The registered name of the object's type.
    pub object: &'static str,
    /// The requested property name.
    pub property: String,
}

/// A property was accessed as a type other than the type of its field.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("property {object}::{property} is not of type {requested}")]
pub struct PropertyTypeMismatch {
    /// The registered name of the object's type.
    pub object: &'static str,
    /// The name of the property.
    pub property: &'static str,
    /// The name of the type the property was accessed as.
    pub requested: &'static str,
}

/// Any error produced by reflective property access.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From, IsVariant)]
pub enum PropertyError {
    UnknownProperty(UnknownProperty),
    TypeMismatch(PropertyTypeMismatch),
}
