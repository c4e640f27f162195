use crate::{
    argument::{Argument, Arguments},
    selector::{Keccak256, Selector, SelectorHasher},
};
use abi_types::{CanonicalType, ParamType};
use itertools::Itertools;
use std::fmt;

/// A callable of a contract, given its `name` and whether it is `constant`.
///
/// A constant method does not mutate state, so calling it needs no transaction;
/// it can be simulated locally. Anything else has to be sent to the network.
///
/// The method is fixed once built. All the strings and the selector derived from
/// it are recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method<T = ParamType> {
    name: String,
    constant: bool,
    inputs: Arguments<T>,
    outputs: Arguments<T>,
}

impl<T> Method<T> {
    pub fn new(
        name: impl Into<String>,
        constant: bool,
        inputs: impl IntoIterator<Item = Argument<T>>,
        outputs: impl IntoIterator<Item = Argument<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            constant,
            inputs: inputs.into_iter().collect(),
            outputs: outputs.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_constant(&self) -> bool {
        self.constant
    }

    pub fn inputs(&self) -> &Arguments<T> {
        &self.inputs
    }

    pub fn outputs(&self) -> &Arguments<T> {
        &self.outputs
    }
}

impl<T: CanonicalType> Method<T> {
    /// Returns the signature the selector is hashed from.
    ///
    /// Only the name and the canonical input types take part, so
    ///
    /// ```text
    /// function foo(a uint32, b int) returns(bool)  =>  "foo(uint32,int256)"
    /// ```
    pub fn sig(&self) -> String {
        format!(
            "{}({})",
            self.name,
            self.inputs.iter().map(Argument::type_string).join(",")
        )
    }

    /// The Keccak-256 selector of [Method::sig].
    pub fn id(&self) -> Selector {
        self.id_with(&Keccak256)
    }

    pub fn id_with<H: SelectorHasher + ?Sized>(&self, hasher: &H) -> Selector {
        Selector::from_digest(&hasher.digest(self.sig().as_bytes()))
    }
}

impl<T: CanonicalType> fmt::Display for Method<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Inputs always carry the name, even an empty one.
        let inputs = self
            .inputs
            .iter()
            .map(|input| format!("{} {}", input.name(), input.type_string()))
            .join(", ");
        let outputs = self
            .outputs
            .iter()
            .map(Argument::declaration_string)
            .join(", ");
        let constant = if self.constant { "constant " } else { "" };
        write!(
            f,
            "function {}({}) {}returns({})",
            self.name, inputs, constant, outputs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(name: &str, ty: &str) -> Argument {
        Argument::new(name, ty.parse().unwrap())
    }

    #[test]
    fn balance() {
        let method = Method::new(
            "balance",
            true,
            vec![arg("who", "address")],
            vec![arg("", "uint256")],
        );
        assert_eq!(method.sig(), "balance(address)");
        assert_eq!(
            method.to_string(),
            "function balance(who address) constant returns(uint256)"
        );
    }

    #[test]
    fn foo() {
        let method = Method::new(
            "foo",
            false,
            vec![arg("a", "uint32"), arg("b", "int")],
            vec![],
        );
        assert_eq!(method.sig(), "foo(uint32,int256)");
        assert_eq!(method.to_string(), "function foo(a uint32, b int256) returns()");
    }

    #[test]
    fn kill() {
        let method: Method = Method::new("kill", false, vec![], vec![]);
        assert_eq!(method.sig(), "kill()");
        assert_eq!(method.id(), Selector::new([0x41, 0xc0, 0xe1, 0xb5]));
        assert_eq!(method.to_string(), "function kill() returns()");
    }

    #[test]
    fn unnamed_inputs_keep_the_separator() {
        let method = Method::new("f", false, vec![arg("", "bool")], vec![]);
        assert_eq!(method.to_string(), "function f( bool) returns()");
    }

    #[test]
    fn named_outputs() {
        let method = Method::new(
            "pair",
            true,
            vec![],
            vec![arg("left", "uint8"), arg("", "bytes32")],
        );
        assert_eq!(
            method.to_string(),
            "function pair() constant returns(left uint8, bytes32)"
        );
    }

    #[test]
    fn id_with_injected_digest() {
        let method: Method = Method::new("kill", false, vec![], vec![]);
        let fixed = |_: &[u8]| {
            let mut digest = [0u8; 32];
            digest[..6].copy_from_slice(&[1, 2, 3, 4, 5, 6]);
            digest
        };
        assert_eq!(method.id_with(&fixed).as_bytes(), &[1, 2, 3, 4]);

        let echo = |data: &[u8]| {
            let mut digest = [0u8; 32];
            digest[..data.len()].copy_from_slice(data);
            digest
        };
        assert_eq!(method.id_with(&echo).as_bytes(), b"kill");
    }

    #[test]
    fn views_are_stable_across_calls() {
        let method = Method::new("foo", true, vec![arg("x", "uint")], vec![]);
        assert_eq!(method.sig(), method.sig());
        assert_eq!(method.to_string(), method.to_string());
        assert_eq!(method.id(), method.id());
    }
}
