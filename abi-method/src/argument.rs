use abi_types::{CanonicalType, ParamType};
use std::ops::Deref;

/// A single named parameter of a method.
///
/// The name may be empty, which is common for outputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument<T = ParamType> {
    name: String,
    ty: T,
}

impl<T> Argument<T> {
    pub fn new(name: impl Into<String>, ty: T) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn unnamed(ty: T) -> Self {
        Self::new(String::new(), ty)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &T {
        &self.ty
    }
}

impl<T: CanonicalType> Argument<T> {
    /// The canonical type string, exactly as the type renders it.
    pub fn type_string(&self) -> String {
        self.ty.canonical_string()
    }

    /// `"<name> <type>"`, or only `"<type>"` when the argument has no name.
    pub fn declaration_string(&self) -> String {
        if self.name.is_empty() {
            self.type_string()
        } else {
            format!("{} {}", self.name, self.type_string())
        }
    }
}

/// Ordered parameter list of a method. Order is part of the signature, so it is
/// kept exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arguments<T = ParamType>(Vec<Argument<T>>);

impl<T> Arguments<T> {
    pub fn new(arguments: Vec<Argument<T>>) -> Self {
        Self(arguments)
    }
}

impl<T> Default for Arguments<T> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<T> Deref for Arguments<T> {
    type Target = [Argument<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<Argument<T>>> for Arguments<T> {
    fn from(arguments: Vec<Argument<T>>) -> Self {
        Self(arguments)
    }
}

impl<T> FromIterator<Argument<T>> for Arguments<T> {
    fn from_iter<I: IntoIterator<Item = Argument<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Arguments<T> {
    type Item = &'a Argument<T>;
    type IntoIter = std::slice::Iter<'a, Argument<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> IntoIterator for Arguments<T> {
    type Item = Argument<T>;
    type IntoIter = std::vec::IntoIter<Argument<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
