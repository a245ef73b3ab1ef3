use std::mem;

use super::BadVariantAccess;

/// The index reported by [`Variant::index_or_npos`] for a valueless variant.
pub const VARIANT_NPOS: usize = usize::MAX;

/// A tagged union holding at most one of a fixed set of alternative types.
///
/// Implementations are generated by [`variant!`](crate::variant!), which also implements
/// [`Alternative<Self>`](Alternative) for every alternative type. All of the provided methods are
/// built from those impls, so type identity is decided entirely at compile time.
///
/// A variant holding no alternative is *valueless*. That state is reached through
/// [`reset`](Variant::reset) and [`take`](Variant::take), or when a replacement value panics
/// during construction after the old value has already been dropped.
pub trait Variant: Sized {
    /// The names of the alternative types, in declaration order.
    const ALTERNATIVES: &'static [&'static str];

    /// Returns the declaration index of the live alternative, or [`None`] if valueless.
    fn index(&self) -> Option<usize>;

    /// Creates a valueless variant.
    fn valueless() -> Self;

    /// Creates a variant holding `value`.
    fn new<T: Alternative<Self>>(value: T) -> Self {
        value.into_variant()
    }

    /// Returns the declaration index of the live alternative, or [`VARIANT_NPOS`] if valueless.
    fn index_or_npos(&self) -> usize {
        self.index().unwrap_or(VARIANT_NPOS)
    }

    /// Returns the name of the live alternative type, or [`None`] if valueless.
    fn alternative_name(&self) -> Option<&'static str> {
        self.index().map(|index| Self::ALTERNATIVES[index])
    }

    /// Returns true if the variant holds no alternative.
    fn is_valueless(&self) -> bool {
        self.index().is_none()
    }

    /// Returns true if the live alternative is a `T`.
    fn holds<T: Alternative<Self>>(&self) -> bool {
        self.index() == Some(T::INDEX)
    }

    /// Returns a reference to the live `T`.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] if the variant doesn't hold a `T`.
    fn get<T: Alternative<Self>>(&self) -> Result<&T, BadVariantAccess> {
        T::from_variant(self).ok_or(BadVariantAccess {
            requested: T::INDEX,
            live: self.index(),
        })
    }

    /// Returns a mutable reference to the live `T`.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] if the variant doesn't hold a `T`.
    fn get_mut<T: Alternative<Self>>(&mut self) -> Result<&mut T, BadVariantAccess> {
        let error = BadVariantAccess {
            requested: T::INDEX,
            live: self.index(),
        };
        T::from_variant_mut(self).ok_or(error)
    }

    /// Returns a reference to the live `T`, or [`None`] if the variant holds something else.
    fn try_get<T: Alternative<Self>>(&self) -> Option<&T> {
        T::from_variant(self)
    }

    /// Returns a mutable reference to the live `T`, or [`None`] if the variant holds something
    /// else.
    fn try_get_mut<T: Alternative<Self>>(&mut self) -> Option<&mut T> {
        T::from_variant_mut(self)
    }

    /// Returns a reference to the alternative declared at index `I`.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] if that alternative isn't live.
    fn get_at<const I: usize>(&self) -> Result<&<Self as AlternativeAt<I>>::Output, BadVariantAccess>
    where
        Self: AlternativeAt<I>,
    {
        self.get()
    }

    /// Returns a mutable reference to the alternative declared at index `I`.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] if that alternative isn't live.
    fn get_at_mut<const I: usize>(
        &mut self,
    ) -> Result<&mut <Self as AlternativeAt<I>>::Output, BadVariantAccess>
    where
        Self: AlternativeAt<I>,
    {
        self.get_mut()
    }

    /// Consumes the variant, returning the live `T`, or the variant itself if it holds something
    /// else.
    fn into_alternative<T: Alternative<Self>>(self) -> Result<T, Self> {
        T::try_from_variant(self)
    }

    /// Stores `value` in the variant. If a `T` is already live it is assigned over in place,
    /// otherwise the live alternative is dropped and replaced.
    fn assign<T: Alternative<Self>>(&mut self, value: T) {
        match T::from_variant_mut(self) {
            Some(live) => *live = value,
            None => {
                self.emplace(value);
            },
        }
    }

    /// Stores a copy of `value` in the variant. If a `T` is already live, it is updated with
    /// [`Clone::clone_from`] rather than reconstructed, so existing resources can be reused.
    /// Otherwise the live alternative is dropped before the copy is made.
    fn assign_clone<T: Alternative<Self> + Clone>(&mut self, value: &T) {
        match T::from_variant_mut(self) {
            Some(live) => live.clone_from(value),
            None => {
                self.reset();
                self.emplace(value.clone());
            },
        }
    }

    /// Drops the live alternative, then stores `value`, returning a reference to it. Unlike
    /// [`assign`](Variant::assign), the old value is always destroyed, even if it is also a `T`.
    fn emplace<T: Alternative<Self>>(&mut self, value: T) -> &mut T {
        self.reset();
        T::insert_into(self, value)
    }

    /// Drops the live alternative, leaving the variant valueless.
    fn reset(&mut self) {
        *self = Self::valueless();
    }

    /// Moves the variant out, leaving `self` valueless.
    fn take(&mut self) -> Self {
        mem::replace(self, Self::valueless())
    }
}

/// A type that is one of the alternatives of the variant `V`.
///
/// Implemented by [`variant!`](crate::variant!). A type can only be declared once per variant,
/// since a second declaration would be a conflicting implementation.
pub trait Alternative<V: Variant>: Sized {
    /// The declaration index of this alternative within `V`.
    const INDEX: usize;

    /// Wraps the value in the variant.
    fn into_variant(self) -> V;

    /// Returns a reference to the value if this alternative is live.
    fn from_variant(variant: &V) -> Option<&Self>;

    /// Returns a mutable reference to the value if this alternative is live.
    fn from_variant_mut(variant: &mut V) -> Option<&mut Self>;

    /// Unwraps the value if this alternative is live, otherwise returns the variant unchanged.
    fn try_from_variant(variant: V) -> Result<Self, V>;

    /// Overwrites the variant with `value`, returning a reference to the stored value.
    fn insert_into(variant: &mut V, value: Self) -> &mut Self;
}

/// Maps the declaration index `I` of a variant to the type of the alternative declared there.
pub trait AlternativeAt<const I: usize>: Variant {
    /// The alternative type declared at index `I`.
    type Output: Alternative<Self>;
}
