/// Implements [`Reflect`](crate::reflect::Reflect) for a struct, registering its name and the
/// listed fields as properties.
///
/// Only the listed fields are registered, in the order given. Each must be a field of the struct
/// with a `'static` type.
///
/// # Examples
/// ```
/// use standard_primitives::reflect::Reflect;
///
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// standard_primitives::reflect!(Point { x, y });
///
/// let point = Point { x: 1.0, y: 2.0 };
/// let y = Point::find_property("y").unwrap();
/// assert_eq!(y.get(&point).downcast_ref::<f32>(), Some(&2.0));
/// assert_eq!(point.x, 1.0);
/// ```
#[macro_export]
macro_rules! reflect {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::reflect::Reflect for $ty {
            const NAME: &'static str = ::std::stringify!($ty);

            fn properties() -> &'static [$crate::reflect::Property<Self>] {
                const PROPERTIES: &[$crate::reflect::Property<$ty>] = &[$(
                    $crate::reflect::Property::new(
                        ::std::stringify!($field),
                        {
                            fn get(object: &$ty) -> &(dyn ::std::any::Any + 'static) {
                                &object.$field
                            }
                            get
                        },
                        {
                            fn get_mut(object: &mut $ty) -> &mut (dyn ::std::any::Any + 'static) {
                                &mut object.$field
                            }
                            get_mut
                        },
                    ),
                )*];
                PROPERTIES
            }
        }
    };
}
