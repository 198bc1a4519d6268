//! The recursive conversion engine.
//!
//! [`TreeConvert`] is the customization point every convertible type
//! implements, either through the declaration macros or by opting into the
//! serde-backed generic conversion. The free functions [`encode`] and
//! [`decode_into`] apply the flavor's shape preference and recurse member by
//! member; they are what the generated code and the container impls call, so
//! a flavor chosen at the top level reaches every nested value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::flavor::{Flavor, Form, Forms};
use crate::Result;

/// Bidirectional conversion between a value and a JSON tree.
///
/// `FORMS` states which declared forms the type exposes; the array/object
/// methods default to the generic fallback, so a type only overrides what it
/// declares. Decoding mutates in place, mirroring assignment from a tree.
pub trait TreeConvert {
    const FORMS: Forms = Forms::NONE;

    fn to_tree_generic(&self, flavor: Flavor) -> Result<Value>;

    fn to_tree_array(&self, flavor: Flavor) -> Result<Value> {
        self.to_tree_generic(flavor)
    }

    fn to_tree_object(&self, flavor: Flavor) -> Result<Value> {
        self.to_tree_generic(flavor)
    }

    fn from_tree_generic(&mut self, tree: &Value) -> Result<()>;

    fn from_tree_array(&mut self, tree: &Value) -> Result<()> {
        self.from_tree_generic(tree)
    }

    fn from_tree_object(&mut self, tree: &Value) -> Result<()> {
        self.from_tree_generic(tree)
    }
}

/// Encode `value` under `flavor`, picking the form per the selection table.
pub fn encode<T: TreeConvert>(value: &T, flavor: Flavor) -> Result<Value> {
    match flavor.select(T::FORMS) {
        Form::Object => value.to_tree_object(flavor),
        Form::Array => value.to_tree_array(flavor),
        Form::Generic => value.to_tree_generic(flavor),
    }
}

/// Decode `tree` into `dest`.
///
/// A type with declared forms accepts either shape: an array decodes
/// positionally, anything else decodes by key lookup. Types without declared
/// forms go through their generic conversion.
pub fn decode_into<T: TreeConvert>(dest: &mut T, tree: &Value) -> Result<()> {
    if T::FORMS.declares_any() {
        if tree.is_array() {
            dest.from_tree_array(tree)
        } else {
            dest.from_tree_object(tree)
        }
    } else {
        dest.from_tree_generic(tree)
    }
}

/// Generic conversion through the tree-value library's own serializer.
pub fn encode_with_serde<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Generic assignment through the tree-value library's own deserializer.
pub fn decode_with_serde<T: DeserializeOwned>(dest: &mut T, tree: &Value) -> Result<()> {
    *dest = serde_json::from_value(tree.clone())?;
    Ok(())
}

macro_rules! serde_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TreeConvert for $ty {
                fn to_tree_generic(&self, _flavor: Flavor) -> Result<Value> {
                    encode_with_serde(self)
                }

                fn from_tree_generic(&mut self, tree: &Value) -> Result<()> {
                    decode_with_serde(self, tree)
                }
            }
        )*
    };
}

serde_leaf!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String,
);

impl TreeConvert for Value {
    fn to_tree_generic(&self, _flavor: Flavor) -> Result<Value> {
        Ok(self.clone())
    }

    fn from_tree_generic(&mut self, tree: &Value) -> Result<()> {
        *self = tree.clone();
        Ok(())
    }
}

impl<T: TreeConvert + Default> TreeConvert for Vec<T> {
    fn to_tree_generic(&self, flavor: Flavor) -> Result<Value> {
        let mut items = Vec::with_capacity(self.len());
        for element in self {
            items.push(encode(element, flavor)?);
        }
        Ok(Value::Array(items))
    }

    fn from_tree_generic(&mut self, tree: &Value) -> Result<()> {
        let items = tree
            .as_array()
            .ok_or_else(|| Error::unexpected_shape("array", tree))?;
        self.clear();
        self.reserve(items.len());
        for child in items {
            let mut element = T::default();
            decode_into(&mut element, child)?;
            self.push(element);
        }
        Ok(())
    }
}

impl<T: TreeConvert, const N: usize> TreeConvert for [T; N] {
    fn to_tree_generic(&self, flavor: Flavor) -> Result<Value> {
        let mut items = Vec::with_capacity(N);
        for element in self {
            items.push(encode(element, flavor)?);
        }
        Ok(Value::Array(items))
    }

    // Decodes element-wise into the existing slots; surplus tree elements
    // are ignored, a short tree is an error.
    fn from_tree_generic(&mut self, tree: &Value) -> Result<()> {
        let items = tree
            .as_array()
            .ok_or_else(|| Error::unexpected_shape("array", tree))?;
        for (index, slot) in self.iter_mut().enumerate() {
            let child = items
                .get(index)
                .ok_or_else(|| Error::index_out_of_bounds(index, items.len()))?;
            decode_into(slot, child)?;
        }
        Ok(())
    }
}

impl<T: TreeConvert + Default> TreeConvert for Option<T> {
    fn to_tree_generic(&self, flavor: Flavor) -> Result<Value> {
        match self {
            Some(inner) => encode(inner, flavor),
            None => Ok(Value::Null),
        }
    }

    fn from_tree_generic(&mut self, tree: &Value) -> Result<()> {
        if tree.is_null() {
            *self = None;
            return Ok(());
        }
        let mut inner = T::default();
        decode_into(&mut inner, tree)?;
        *self = Some(inner);
        Ok(())
    }
}
