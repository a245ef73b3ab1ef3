use std::any::{self, Any};
use std::fmt::{self, Debug, Formatter};

use super::{PropertyError, PropertyTypeMismatch, UnknownProperty};

/// A type with a registered name and property table. Implemented with
/// [`reflect!`](crate::reflect!).
pub trait Reflect: Sized + 'static {
    /// The name of the type, as registered.
    const NAME: &'static str;

    /// The accessors for every registered field, in declaration order.
    fn properties() -> &'static [Property<Self>];

    /// Finds the property registered under `name`.
    fn find_property(name: &str) -> Option<&'static Property<Self>> {
        Self::properties().iter().find(|property| property.name == name)
    }
}

/// Accessors for a single named field of `T`.
pub struct Property<T: 'static> {
    name: &'static str,
    get: fn(&T) -> &(dyn Any + 'static),
    get_mut: fn(&mut T) -> &mut (dyn Any + 'static),
}

impl<T: 'static> Property<T> {
    #[doc(hidden)]
    pub const fn new(
        name: &'static str,
        get: fn(&T) -> &(dyn Any + 'static),
        get_mut: fn(&mut T) -> &mut (dyn Any + 'static),
    ) -> Property<T> {
        Property { name, get, get_mut }
    }

    /// The name of the field.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field of `object` as a [`dyn Any`](Any).
    pub fn get<'a>(&self, object: &'a T) -> &'a (dyn Any + 'static) {
        (self.get)(object)
    }

    /// Returns the field of `object` as a mutable [`dyn Any`](Any).
    pub fn get_mut<'a>(&self, object: &'a mut T) -> &'a mut (dyn Any + 'static) {
        (self.get_mut)(object)
    }
}

impl<T: 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A reflective view over a mutable reference to a [`Reflect`] type, reading and writing its
/// registered properties by name.
pub struct Object<'a, T: Reflect> {
    object: &'a mut T,
}

impl<'a, T: Reflect> Object<'a, T> {
    /// Wraps `object` for reflective access.
    pub fn new(object: &'a mut T) -> Object<'a, T> {
        Object { object }
    }

    /// Returns the registered name of the object's type.
    pub const fn name(&self) -> &'static str {
        T::NAME
    }

    /// Returns an iterator over the names of every registered property, in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &'static str> {
        T::properties().iter().map(Property::name)
    }

    /// Returns a reference to the property `name`, as a `V`.
    ///
    /// # Errors
    /// Returns [`UnknownProperty`] if no such property is registered, or [`PropertyTypeMismatch`]
    /// if its field isn't a `V`.
    pub fn property<V: Any>(&self, name: &str) -> Result<&V, PropertyError> {
        let property = Self::find_property(name)?;
        property
            .get(&*self.object)
            .downcast_ref::<V>()
            .ok_or_else(|| Self::mismatch::<V>(property).into())
    }

    /// Returns a mutable reference to the property `name`, as a `V`.
    ///
    /// # Errors
    /// Returns [`UnknownProperty`] if no such property is registered, or [`PropertyTypeMismatch`]
    /// if its field isn't a `V`.
    pub fn property_mut<V: Any>(&mut self, name: &str) -> Result<&mut V, PropertyError> {
        let property = Self::find_property(name)?;
        property
            .get_mut(&mut *self.object)
            .downcast_mut::<V>()
            .ok_or_else(|| Self::mismatch::<V>(property).into())
    }

    /// Writes `value` to the property `name`, dropping the previous value.
    ///
    /// # Errors
    /// Returns [`UnknownProperty`] if no such property is registered, or [`PropertyTypeMismatch`]
    /// if its field isn't a `V`. The object is unchanged on error.
    pub fn set_property<V: Any>(&mut self, name: &str, value: V) -> Result<(), PropertyError> {
        *self.property_mut::<V>(name)? = value;
        Ok(())
    }

    /// Returns a reference to the wrapped object.
    pub fn get(&self) -> &T {
        &*self.object
    }

    /// Returns a mutable reference to the wrapped object.
    pub fn get_mut(&mut self) -> &mut T {
        &mut *self.object
    }

    fn find_property(name: &str) -> Result<&'static Property<T>, UnknownProperty> {
        T::find_property(name).ok_or_else(|| UnknownProperty {
            object: T::NAME,
            property: name.to_owned(),
        })
    }

    fn mismatch<V>(property: &Property<T>) -> PropertyTypeMismatch {
        PropertyTypeMismatch {
            object: T::NAME,
            property: property.name,
            requested: any::type_name::<V>(),
        }
    }
}

impl<T: Reflect> Debug for Object<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("name", &T::NAME)
            .field("properties", &T::properties())
            .finish()
    }
}
