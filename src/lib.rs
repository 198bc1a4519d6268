pub mod convert;
pub mod error;
pub mod flavor;
mod macros;
pub mod names;
pub mod scan;

pub use crate::convert::TreeConvert;
pub use crate::error::Error;
pub use crate::flavor::{Flavor, Form, Forms};
pub use crate::names::NameTable;
pub use crate::scan::Span;
pub use serde_json::{Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Encode under the default flavor (object form preferred).
pub fn to_tree<T: TreeConvert>(value: &T) -> Result<Value> {
    to_tree_with(value, Flavor::default())
}

pub fn to_tree_with<T: TreeConvert>(value: &T, flavor: Flavor) -> Result<Value> {
    convert::encode(value, flavor)
}

/// Build a fresh value from a tree, starting from `T::default()`.
pub fn from_tree<T: TreeConvert + Default>(tree: &Value) -> Result<T> {
    let mut value = T::default();
    convert::decode_into(&mut value, tree)?;
    Ok(value)
}

/// Assign a tree into an existing value in place.
pub fn from_tree_into<T: TreeConvert>(dest: &mut T, tree: &Value) -> Result<()> {
    convert::decode_into(dest, tree)
}
