use crate::{HashFunction, MethodRecord};
use abi_method::Abi;
use abi_tracing::println_warning;
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

pub(crate) fn examples() -> String {
    "    # List the functions of an ABI with their signatures and selectors\n    abi-sig methods token.json\n\n".to_string()
}

#[derive(Debug, Clone, clap::Args)]
#[clap(version, about = "Lists every function of a JSON ABI file")]
pub struct Args {
    /// Path to the JSON ABI.
    pub abi_path: PathBuf,
}

pub fn handler(args: Args, hash: HashFunction) -> Result<Vec<MethodRecord>> {
    let json = fs::read_to_string(&args.abi_path)
        .with_context(|| format!("failed to read {}", args.abi_path.display()))?;
    let abi = Abi::from_json(&json)
        .with_context(|| format!("failed to parse {}", args.abi_path.display()))?;
    if abi.methods().is_empty() {
        println_warning(&format!("no functions in {}", args.abi_path.display()));
    }
    Ok(abi
        .methods()
        .iter()
        .map(|method| MethodRecord::new(method, hash))
        .collect())
}
