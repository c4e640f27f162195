use crate::HashFunction;
use abi_method::{Argument, Method, ParamType, Selector};
use anyhow::{Context, Result};
use serde::Serialize;

pub(crate) fn examples() -> String {
    [
        "    # Selector of a method taking an address and an amount",
        "    abi-sig selector transfer address uint256",
        "",
        "    # Shorthand types are expanded before hashing",
        "    abi-sig selector foo uint32 int",
        "",
        "",
    ]
    .join("\n")
}

#[derive(Debug, Clone, clap::Args)]
#[clap(version, about = "Computes the signature and selector of a method")]
pub struct Args {
    /// Name of the method.
    pub name: String,
    /// Input types, in order.
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorRecord {
    pub signature: String,
    pub selector: Selector,
}

pub fn handler(args: Args, hash: HashFunction) -> Result<SelectorRecord> {
    let inputs = args
        .types
        .iter()
        .map(|ty| {
            ty.parse::<ParamType>()
                .map(Argument::unnamed)
                .with_context(|| format!("invalid input type `{ty}`"))
        })
        .collect::<Result<Vec<_>>>()?;
    let method = Method::new(args.name, false, inputs, vec![]);
    tracing::debug!("hashing `{}` with {:?}", method.sig(), hash);

    Ok(SelectorRecord {
        signature: method.sig(),
        selector: method.id_with(&hash),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, types: &[&str]) -> Args {
        Args {
            name: name.to_string(),
            types: types.iter().map(|ty| ty.to_string()).collect(),
        }
    }

    #[test]
    fn canonical_signature_and_selector() {
        let record = handler(args("foo", &["uint32", "int"]), HashFunction::Keccak256).unwrap();
        assert_eq!(record.signature, "foo(uint32,int256)");

        let record = handler(args("kill", &[]), HashFunction::Keccak256).unwrap();
        assert_eq!(record.signature, "kill()");
        assert_eq!(record.selector.to_string(), "0x41c0e1b5");
    }

    #[test]
    fn sha256_selector() {
        let keccak = handler(args("kill", &[]), HashFunction::Keccak256).unwrap();
        let sha256 = handler(args("kill", &[]), HashFunction::Sha256).unwrap();
        assert_eq!(keccak.signature, sha256.signature);
        assert_ne!(keccak.selector, sha256.selector);
    }

    #[test]
    fn invalid_type() {
        let err = handler(args("foo", &["uint7"]), HashFunction::Keccak256).unwrap_err();
        assert!(err.to_string().contains("invalid input type `uint7`"));
    }
}
