use crate::{HashFunction, MethodRecord};
use abi_method::{Abi, Selector};
use anyhow::{anyhow, Context, Result};
use std::{fs, path::PathBuf};

pub(crate) fn examples() -> String {
    "    # Find the function a call's leading four bytes dispatch to\n    abi-sig lookup token.json 0xa9059cbb\n\n"
        .to_string()
}

#[derive(Debug, Clone, clap::Args)]
#[clap(version, about = "Finds the function of a JSON ABI with the given selector")]
pub struct Args {
    /// Path to the JSON ABI.
    pub abi_path: PathBuf,
    /// Selector as 8 hex digits, optionally prefixed with `0x`.
    pub selector: Selector,
}

pub fn handler(args: Args, hash: HashFunction) -> Result<MethodRecord> {
    let json = fs::read_to_string(&args.abi_path)
        .with_context(|| format!("failed to read {}", args.abi_path.display()))?;
    let abi = Abi::from_json(&json)
        .with_context(|| format!("failed to parse {}", args.abi_path.display()))?;
    let method = abi
        .method_by_selector_with(&args.selector, &hash)
        .ok_or_else(|| {
            anyhow!(
                "no function with selector {} in {}",
                args.selector,
                args.abi_path.display()
            )
        })?;
    Ok(MethodRecord::new(method, hash))
}
