use crate::{
    argument::Argument,
    error::{Error, Result},
    method::Method,
    selector::{Selector, SelectorHasher},
};
use abi_types::ParamType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A parameter as it appears in a JSON ABI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Property>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    #[serde(rename = "type", default = "default_entry_type")]
    pub type_field: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub constant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
    #[serde(default)]
    pub inputs: Vec<Property>,
    #[serde(default)]
    pub outputs: Vec<Property>,
}

pub type JsonAbi = Vec<AbiEntry>;

fn default_entry_type() -> String {
    "function".into()
}

impl AbiEntry {
    pub fn is_function(&self) -> bool {
        self.type_field == "function"
    }

    /// Older ABIs flag `constant`, newer ones say `view` or `pure`.
    pub fn is_constant(&self) -> bool {
        self.constant || matches!(self.state_mutability.as_deref(), Some("view" | "pure"))
    }
}

/// Turns a JSON property into a [ParamType].
pub fn parse_param(param: &Property) -> Result<ParamType> {
    if !param.type_field.trim_start().starts_with("tuple") {
        return Ok(param.type_field.parse()?);
    }

    let components = param
        .components
        .as_ref()
        .ok_or_else(|| Error::MissingComponents(param.type_field.clone()))?
        .iter()
        .map(parse_param)
        .collect::<Result<Vec<_>>>()?;
    Ok(ParamType::from_tuple_descriptor(
        &param.type_field,
        components,
    )?)
}

fn parse_arguments(properties: &[Property]) -> Result<Vec<Argument>> {
    properties
        .iter()
        .map(|property| Ok(Argument::new(property.name.clone(), parse_param(property)?)))
        .collect()
}

impl TryFrom<&AbiEntry> for Method {
    type Error = Error;

    fn try_from(entry: &AbiEntry) -> Result<Self> {
        Ok(Method::new(
            entry.name.clone(),
            entry.is_constant(),
            parse_arguments(&entry.inputs)?,
            parse_arguments(&entry.outputs)?,
        ))
    }
}

/// The callable methods of a contract interface, in declaration order.
///
/// Overloads are kept side by side; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abi {
    methods: Vec<Method>,
}

impl Abi {
    pub fn new(methods: Vec<Method>) -> Self {
        Self { methods }
    }

    /// Parses a JSON ABI, keeping only its functions.
    ///
    /// # Examples
    /// ```
    /// use abi_method::Abi;
    /// let json_abi = r#"
    ///     [
    ///         {
    ///             "type":"function",
    ///             "name":"balanceOf",
    ///             "constant":true,
    ///             "inputs":[{ "name":"owner", "type":"address" }],
    ///             "outputs":[{ "name":"", "type":"uint" }]
    ///         }
    ///     ]
    ///     "#;
    ///
    /// let abi = Abi::from_json(json_abi).unwrap();
    /// let method = abi.method("balanceOf").unwrap();
    /// assert_eq!(method.sig(), "balanceOf(address)");
    /// assert_eq!(method.id().to_string(), "0x70a08231");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: JsonAbi = serde_json::from_str(json)?;
        let methods = entries
            .iter()
            .filter(|entry| {
                if !entry.is_function() {
                    tracing::trace!(kind = %entry.type_field, name = %entry.name, "skipping ABI entry");
                }
                entry.is_function()
            })
            .map(Method::<ParamType>::try_from)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("parsed {} methods out of {} ABI entries", methods.len(), entries.len());
        Ok(Self { methods })
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// The first method declared with `name`.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name() == name)
    }

    /// Every method declared with `name`, overloads included.
    pub fn overloads<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Method> + 'a {
        self.methods.iter().filter(move |method| method.name() == name)
    }

    pub fn method_by_selector(&self, selector: &Selector) -> Option<&Method> {
        self.methods.iter().find(|method| method.id() == *selector)
    }

    pub fn method_by_selector_with<H: SelectorHasher + ?Sized>(
        &self,
        selector: &Selector,
        hasher: &H,
    ) -> Option<&Method> {
        self.methods
            .iter()
            .find(|method| method.id_with(hasher) == *selector)
    }
}

impl FromStr for Abi {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

impl<'a> IntoIterator for &'a Abi {
    type Item = &'a Method;
    type IntoIter = std::slice::Iter<'a, Method>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Sha256;
    use tracing_test::traced_test;

    #[test]
    fn parse_tuple_param() {
        let property = Property {
            name: "orders".into(),
            type_field: "tuple[]".into(),
            components: Some(vec![
                Property {
                    name: "maker".into(),
                    type_field: "address".into(),
                    components: None,
                },
                Property {
                    name: "amounts".into(),
                    type_field: "uint[2]".into(),
                    components: None,
                },
            ]),
        };
        assert_eq!(
            parse_param(&property).unwrap().to_string(),
            "(address,uint256[2])[]"
        );
    }

    #[test]
    fn tuple_without_components() {
        let property = Property {
            name: "".into(),
            type_field: "tuple".into(),
            components: None,
        };
        assert!(matches!(
            parse_param(&property),
            Err(Error::MissingComponents(ty)) if ty == "tuple"
        ));
    }

    #[test]
    fn state_mutability_marks_constant() {
        let json_abi = r#"
        [
            { "type":"function", "name":"a", "stateMutability":"view", "inputs":[], "outputs":[] },
            { "type":"function", "name":"b", "stateMutability":"pure", "inputs":[], "outputs":[] },
            { "type":"function", "name":"c", "stateMutability":"payable", "inputs":[], "outputs":[] },
            { "type":"function", "name":"d", "constant":true, "inputs":[], "outputs":[] }
        ]
        "#;
        let abi = Abi::from_json(json_abi).unwrap();
        let constant: Vec<_> = abi.methods().iter().map(Method::is_constant).collect();
        assert_eq!(constant, [true, true, false, true]);
    }

    #[test]
    fn missing_type_defaults_to_function() {
        let abi: Abi = r#"[{ "name":"kill" }]"#.parse().unwrap();
        assert_eq!(abi.methods().len(), 1);
        assert_eq!(abi.methods()[0].sig(), "kill()");
    }

    #[test]
    fn invalid_types_propagate() {
        let json_abi = r#"[{ "type":"function", "name":"f", "inputs":[{ "name":"x", "type":"uint7" }] }]"#;
        assert!(matches!(Abi::from_json(json_abi), Err(Error::Type(_))));
        assert!(matches!(Abi::from_json("{"), Err(Error::SerdeJson(_))));
    }

    #[test]
    fn lookup_by_selector_with_other_hasher() {
        let abi: Abi = r#"[{ "name":"kill" }, { "name":"transfer", "inputs":[{ "name":"to", "type":"address" }] }]"#
            .parse()
            .unwrap();
        let transfer = abi.method("transfer").unwrap();
        let selector = transfer.id_with(&Sha256);
        assert_eq!(
            abi.method_by_selector_with(&selector, &Sha256),
            Some(transfer)
        );
    }

    #[test]
    #[traced_test]
    fn non_functions_are_skipped() {
        let json_abi = r#"
        [
            { "type":"constructor", "inputs":[{ "name":"supply", "type":"uint256" }] },
            { "type":"event", "name":"Transfer", "inputs":[] },
            { "type":"function", "name":"kill", "inputs":[], "outputs":[] },
            { "type":"fallback" }
        ]
        "#;
        let abi = Abi::from_json(json_abi).unwrap();
        let names: Vec<_> = (&abi).into_iter().map(Method::name).collect();
        assert_eq!(names, ["kill"]);
        assert!(logs_contain("skipping ABI entry"));
        assert!(logs_contain("parsed 1 methods out of 4 ABI entries"));
    }
}
