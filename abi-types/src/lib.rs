//! Parameter types of a contract ABI.
//!
//! A [ParamType] is parsed from a type descriptor such as `uint`, `bytes32[]` or
//! `(address,uint256)[2]` and always renders back in its canonical form, which is
//! what signatures and selectors are built from.

pub mod error;
pub mod param_type;

pub use error::{Error, Result};
pub use param_type::ParamType;

/// Anything that can render the canonical string of a parameter type.
///
/// The string returned must already be fully canonical: shorthands such as `int`
/// are expanded to `int256` and no whitespace is present.
pub trait CanonicalType {
    fn canonical_string(&self) -> String;
}

impl CanonicalType for ParamType {
    fn canonical_string(&self) -> String {
        self.to_string()
    }
}

/// A string is taken to be canonical already and is returned verbatim.
impl CanonicalType for String {
    fn canonical_string(&self) -> String {
        self.clone()
    }
}

impl<T: CanonicalType + ?Sized> CanonicalType for Box<T> {
    fn canonical_string(&self) -> String {
        (**self).canonical_string()
    }
}
