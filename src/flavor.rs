//! Shape-preference policy for the conversion engine.

/// Which conversion forms a type declares.
///
/// The flags are set by the declaration macros: [`tree_members!`](crate::tree_members)
/// declares both, the `_object`/`_array` variants one each, and everything
/// else (scalars, containers, serde opt-ins) declares neither and converts
/// through the generic fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forms {
    pub array: bool,
    pub object: bool,
}

impl Forms {
    pub const NONE: Forms = Forms {
        array: false,
        object: false,
    };
    pub const ARRAY: Forms = Forms {
        array: true,
        object: false,
    };
    pub const OBJECT: Forms = Forms {
        array: false,
        object: true,
    };
    pub const BOTH: Forms = Forms {
        array: true,
        object: true,
    };

    pub const fn declares_any(self) -> bool {
        self.array || self.object
    }
}

/// The concrete form the engine settles on for one encode call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    Generic,
    Array,
    Object,
}

/// Shape preference applied recursively through one conversion call.
///
/// A flavor never forces a form a type did not declare: a type without an
/// object form is not given keys to invent, it falls back to its generic
/// conversion instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Flavor {
    /// Object form when declared, array form otherwise.
    #[default]
    Natural,
    /// Array form whenever declared; the object form is suppressed.
    PreferArray,
    /// Object form whenever declared; the array form is suppressed.
    PreferObject,
}

impl Flavor {
    pub const fn select(self, forms: Forms) -> Form {
        match self {
            Flavor::Natural => {
                if forms.object {
                    Form::Object
                } else if forms.array {
                    Form::Array
                } else {
                    Form::Generic
                }
            }
            Flavor::PreferArray => {
                if forms.array {
                    Form::Array
                } else {
                    Form::Generic
                }
            }
            Flavor::PreferObject => {
                if forms.object {
                    Form::Object
                } else {
                    Form::Generic
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Flavor, Form, Forms};

    #[rstest::rstest]
    #[case(Flavor::Natural, Forms::BOTH, Form::Object)]
    #[case(Flavor::Natural, Forms::OBJECT, Form::Object)]
    #[case(Flavor::Natural, Forms::ARRAY, Form::Array)]
    #[case(Flavor::Natural, Forms::NONE, Form::Generic)]
    #[case(Flavor::PreferArray, Forms::BOTH, Form::Array)]
    #[case(Flavor::PreferArray, Forms::ARRAY, Form::Array)]
    #[case(Flavor::PreferArray, Forms::OBJECT, Form::Generic)]
    #[case(Flavor::PreferArray, Forms::NONE, Form::Generic)]
    #[case(Flavor::PreferObject, Forms::BOTH, Form::Object)]
    #[case(Flavor::PreferObject, Forms::OBJECT, Form::Object)]
    #[case(Flavor::PreferObject, Forms::ARRAY, Form::Generic)]
    #[case(Flavor::PreferObject, Forms::NONE, Form::Generic)]
    fn test_selection_table(
        #[case] flavor: Flavor,
        #[case] forms: Forms,
        #[case] expected: Form,
    ) {
        assert_eq!(flavor.select(forms), expected);
    }

    #[rstest::rstest]
    fn test_default_flavor_is_natural() {
        assert_eq!(Flavor::default(), Flavor::Natural);
    }

    #[rstest::rstest]
    fn test_forms_declares_any() {
        assert!(Forms::BOTH.declares_any());
        assert!(Forms::ARRAY.declares_any());
        assert!(Forms::OBJECT.declares_any());
        assert!(!Forms::NONE.declares_any());
    }
}
