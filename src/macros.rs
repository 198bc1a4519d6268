//! Declaration-site macros.
//!
//! A structure states its member names once, as the literal argument list of
//! one macro invocation, and gains the embedded name table plus the
//! conversion impls for the chosen mode. The list is scanned by const
//! evaluation; nothing about it is parsed at runtime.

/// Embed a member-name table in a type.
///
/// Attaches `MEMBER_LIST` (the raw literal), `MEMBER_COUNT`, `MEMBER_NAMES`
/// (the scanned [`NameTable`](crate::NameTable)) and the accessors
/// `member_count()`, `member_span(i)`, `member_name(i)`. The macro also
/// cross-checks, from its own repetition arity, that the scanned item count
/// matches the declared member count; a disagreement fails the build.
///
/// # Examples
/// ```
/// struct Point {
///     x: f64,
///     y: f64,
/// }
/// treebind::embed_names!(Point { x, y });
///
/// assert_eq!(Point::member_count(), 2);
/// assert_eq!(Point::member_name(0), "x");
/// assert_eq!(Point::member_name(1), "y");
/// # let _ = Point { x: 0.0, y: 0.0 };
/// ```
#[macro_export]
macro_rules! embed_names {
    ($ty:ty { $($member:ident),+ $(,)? }) => {
        impl $ty {
            pub const MEMBER_LIST: &'static str = stringify!($($member),+);
            pub const MEMBER_COUNT: usize =
                $crate::scan::count_items(<$ty>::MEMBER_LIST);
            pub const MEMBER_NAMES: $crate::NameTable<{ <$ty>::MEMBER_COUNT }> =
                $crate::NameTable::new(<$ty>::MEMBER_LIST);

            pub const fn member_count() -> usize {
                <$ty>::MEMBER_COUNT
            }

            pub const fn member_span(index: usize) -> $crate::Span {
                <$ty>::MEMBER_NAMES.span(index)
            }

            pub fn member_name(index: usize) -> &'static str {
                <$ty>::MEMBER_NAMES.name(index)
            }
        }

        const _: () = {
            let declared = [$(stringify!($member)),+].len();
            assert!(
                <$ty>::MEMBER_COUNT == declared,
                "embedded name list disagrees with the declared member count"
            );
        };
    };
}

/// Declare both conversion forms for a type, object form preferred.
///
/// # Examples
/// ```
/// use treebind::{from_tree, to_tree, to_tree_with, Flavor};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: f64,
///     y: f64,
///     id: u32,
/// }
/// treebind::tree_members!(Point { x, y, id });
///
/// let point = Point { x: 1.5, y: 2.5, id: 7 };
///
/// let tree = to_tree(&point)?;
/// assert_eq!(tree["x"], 1.5);
///
/// let positional = to_tree_with(&point, Flavor::PreferArray)?;
/// assert!(positional.is_array());
///
/// let back: Point = from_tree(&tree)?;
/// assert_eq!(back, point);
/// # Ok::<(), treebind::Error>(())
/// ```
#[macro_export]
macro_rules! tree_members {
    ($ty:ty { $($member:ident),+ $(,)? }) => {
        $crate::embed_names!($ty { $($member),+ });
        $crate::__tree_convert!($ty, $crate::Forms::BOTH, { $($member),+ });
    };
}

/// Declare the object (keyed) form only.
#[macro_export]
macro_rules! tree_members_object {
    ($ty:ty { $($member:ident),+ $(,)? }) => {
        $crate::embed_names!($ty { $($member),+ });
        $crate::__tree_convert!($ty, $crate::Forms::OBJECT, { $($member),+ });
    };
}

/// Declare the array (positional) form only. Names are still embedded, but
/// positional output carries no keys, so they are not reconstructable from
/// the emitted tree.
#[macro_export]
macro_rules! tree_members_array {
    ($ty:ty { $($member:ident),+ $(,)? }) => {
        $crate::embed_names!($ty { $($member),+ });
        $crate::__tree_convert!($ty, $crate::Forms::ARRAY, { $($member),+ });
    };
}

/// Opt a `Serialize + DeserializeOwned` type into the engine through the
/// tree-value library's generic conversion, declaring neither form.
///
/// # Examples
/// ```
/// use serde::{Deserialize, Serialize};
/// use treebind::{to_tree_with, Flavor};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct Extent {
///     width: u32,
///     height: u32,
/// }
/// treebind::tree_serde!(Extent);
///
/// let tree = to_tree_with(&Extent { width: 4, height: 3 }, Flavor::PreferArray)?;
/// assert!(tree.is_object());
/// # Ok::<(), treebind::Error>(())
/// ```
#[macro_export]
macro_rules! tree_serde {
    ($ty:ty) => {
        impl $crate::TreeConvert for $ty {
            fn to_tree_generic(
                &self,
                _flavor: $crate::Flavor,
            ) -> $crate::Result<$crate::Value> {
                $crate::convert::encode_with_serde(self)
            }

            fn from_tree_generic(&mut self, tree: &$crate::Value) -> $crate::Result<()> {
                $crate::convert::decode_with_serde(self, tree)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tree_convert {
    ($ty:ty, $forms:expr, { $($member:ident),+ }) => {
        impl $crate::TreeConvert for $ty {
            const FORMS: $crate::Forms = $forms;

            // The declared fallback: keyed output when an object form
            // exists, positional output otherwise.
            fn to_tree_generic(
                &self,
                flavor: $crate::Flavor,
            ) -> $crate::Result<$crate::Value> {
                if <Self as $crate::TreeConvert>::FORMS.object {
                    self.to_tree_object(flavor)
                } else {
                    self.to_tree_array(flavor)
                }
            }

            fn to_tree_array(
                &self,
                flavor: $crate::Flavor,
            ) -> $crate::Result<$crate::Value> {
                let mut items = ::std::vec::Vec::with_capacity(<$ty>::MEMBER_COUNT);
                $(
                    items.push($crate::convert::encode(&self.$member, flavor)?);
                )+
                ::std::result::Result::Ok($crate::Value::Array(items))
            }

            fn to_tree_object(
                &self,
                flavor: $crate::Flavor,
            ) -> $crate::Result<$crate::Value> {
                let mut entries = $crate::Map::with_capacity(<$ty>::MEMBER_COUNT);
                let mut position = 0usize;
                $(
                    entries.insert(
                        <$ty>::member_name(position).to_owned(),
                        $crate::convert::encode(&self.$member, flavor)?,
                    );
                    position += 1;
                )+
                let _ = position;
                ::std::result::Result::Ok($crate::Value::Object(entries))
            }

            fn from_tree_generic(&mut self, tree: &$crate::Value) -> $crate::Result<()> {
                if tree.is_array() {
                    self.from_tree_array(tree)
                } else {
                    self.from_tree_object(tree)
                }
            }

            fn from_tree_array(&mut self, tree: &$crate::Value) -> $crate::Result<()> {
                let items = tree
                    .as_array()
                    .ok_or_else(|| $crate::Error::unexpected_shape("array", tree))?;
                let mut position = 0usize;
                $(
                    let child = items.get(position).ok_or_else(|| {
                        $crate::Error::index_out_of_bounds(position, items.len())
                    })?;
                    $crate::convert::decode_into(&mut self.$member, child)?;
                    position += 1;
                )+
                let _ = position;
                ::std::result::Result::Ok(())
            }

            fn from_tree_object(&mut self, tree: &$crate::Value) -> $crate::Result<()> {
                let entries = tree
                    .as_object()
                    .ok_or_else(|| $crate::Error::unexpected_shape("object", tree))?;
                let mut position = 0usize;
                $(
                    let name = <$ty>::member_name(position);
                    let child = entries
                        .get(name)
                        .ok_or_else(|| $crate::Error::missing_key(name))?;
                    $crate::convert::decode_into(&mut self.$member, child)?;
                    position += 1;
                )+
                let _ = position;
                ::std::result::Result::Ok(())
            }
        }
    };
}
