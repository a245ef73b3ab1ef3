/// Declares a variant type over a fixed set of alternatives.
///
/// The macro produces an enum with one tuple variant per alternative, followed by a `Valueless`
/// variant, and implements [`Variant`](crate::variant::Variant) for it along with
/// [`Alternative`](crate::variant::Alternative), [`AlternativeAt`](crate::variant::AlternativeAt)
/// and [`From`] for every alternative type. Attributes placed before the enum, such as derives,
/// are applied to it as written.
///
/// Each alternative type may only appear once. Repeating a type is rejected at compile time as a
/// conflicting implementation of `Alternative`.
///
/// Two optional extras are supported:
/// - `#[default]` on the first alternative implements [`Default`], creating that alternative from
///   its own default value.
/// - `impl Clone;` after the enum implements [`Clone`] by copying the live alternative. Its
///   [`clone_from`](Clone::clone_from) assigns in place when both sides hold the same alternative,
///   otherwise it drops the old value before copying the new one. Cloning from a valueless variant
///   produces a valueless variant.
///
/// # Examples
/// ```
/// use standard_primitives::variant::Variant;
///
/// standard_primitives::variant! {
///     #[derive(Debug)]
///     enum Shape {
///         #[default]
///         Circle(f64),
///         Rect((f64, f64)),
///     }
///     impl Clone;
/// }
///
/// let shape = Shape::new((2.0, 3.0));
/// assert_eq!(shape.index(), Some(1));
/// assert_eq!(shape.alternative_name(), Some("(f64, f64)"));
///
/// match shape.clone() {
///     Shape::Rect((w, h)) => assert_eq!(w * h, 6.0),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[macro_export]
macro_rules! variant {
    (@define [$(#[$meta:meta])*] $vis:vis $name:ident [$($alt:ident($ty:ty)),+]) => {
        $(#[$meta])*
        $vis enum $name {
            $($alt($ty),)+
            /// Holds no alternative.
            Valueless,
        }

        impl $crate::variant::Variant for $name {
            const ALTERNATIVES: &'static [&'static str] = &[$(stringify!($ty)),+];

            fn index(&self) -> ::std::option::Option<usize> {
                match self {
                    $($name::$alt(_) => ::std::option::Option::Some(
                        <$ty as $crate::variant::Alternative<$name>>::INDEX
                    ),)+
                    $name::Valueless => ::std::option::Option::None,
                }
            }

            fn valueless() -> Self {
                $name::Valueless
            }
        }

        $crate::variant!(@alternatives $name, 0; $($alt($ty)),+);
    };

    (@alternatives $name:ident, $index:expr;) => {};
    (@alternatives $name:ident, $index:expr; $alt:ident($ty:ty) $(, $rest:ident($rest_ty:ty))*) => {
        impl $crate::variant::Alternative<$name> for $ty {
            const INDEX: usize = $index;

            fn into_variant(self) -> $name {
                $name::$alt(self)
            }

            fn from_variant(variant: &$name) -> ::std::option::Option<&Self> {
                match variant {
                    $name::$alt(value) => ::std::option::Option::Some(value),
                    #[allow(unreachable_patterns)]
                    _ => ::std::option::Option::None,
                }
            }

            fn from_variant_mut(variant: &mut $name) -> ::std::option::Option<&mut Self> {
                match variant {
                    $name::$alt(value) => ::std::option::Option::Some(value),
                    #[allow(unreachable_patterns)]
                    _ => ::std::option::Option::None,
                }
            }

            fn try_from_variant(variant: $name) -> ::std::result::Result<Self, $name> {
                match variant {
                    $name::$alt(value) => ::std::result::Result::Ok(value),
                    #[allow(unreachable_patterns)]
                    other => ::std::result::Result::Err(other),
                }
            }

            fn insert_into(variant: &mut $name, value: Self) -> &mut Self {
                *variant = $name::$alt(value);
                match variant {
                    $name::$alt(value) => value,
                    #[allow(unreachable_patterns)]
                    _ => ::std::unreachable!(),
                }
            }
        }

        impl $crate::variant::AlternativeAt<{ $index }> for $name {
            type Output = $ty;
        }

        impl ::std::convert::From<$ty> for $name {
            fn from(value: $ty) -> Self {
                $name::$alt(value)
            }
        }

        $crate::variant!(@alternatives $name, $index + 1; $($rest($rest_ty)),*);
    };

    (@default default, $name:ident, $alt:ident($ty:ty)) => {
        impl ::std::default::Default for $name {
            fn default() -> Self {
                $name::$alt(<$ty as ::std::default::Default>::default())
            }
        }
    };

    (@extras $name:ident [$($alt:ident),+]) => {};
    (@extras $name:ident [$($alt:ident),+] Clone $($rest:ident)*) => {
        impl ::std::clone::Clone for $name {
            fn clone(&self) -> Self {
                match self {
                    $($name::$alt(value) => $name::$alt(::std::clone::Clone::clone(value)),)+
                    $name::Valueless => $name::Valueless,
                }
            }

            fn clone_from(&mut self, source: &Self) {
                match (self, source) {
                    $(($name::$alt(target), $name::$alt(value)) => {
                        ::std::clone::Clone::clone_from(target, value)
                    },)+
                    (target, source) => {
                        // Drop the old alternative before copying, so a panicking clone leaves the
                        // target valueless.
                        *target = $name::Valueless;
                        *target = ::std::clone::Clone::clone(source);
                    },
                }
            }
        }

        $crate::variant!(@extras $name [$($alt),+] $($rest)*);
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$default:ident])?
            $first:ident($first_ty:ty)
            $(, $alt:ident($ty:ty))* $(,)?
        }
        $(impl $extra:ident;)*
    ) => {
        $crate::variant!(
            @define [$(#[$meta])*] $vis $name [$first($first_ty) $(, $alt($ty))*]
        );
        $($crate::variant!(@default $default, $name, $first($first_ty));)?
        $crate::variant!(@extras $name [$first $(, $alt)*] $($extra)*);
    };
}
