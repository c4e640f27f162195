pub mod lookup;
pub mod methods;
pub mod selector;

use abi_method::{Method, Selector, SelectorHasher};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

pub(crate) fn help() -> &'static str {
    Box::leak(
        format!(
            "EXAMPLES:\n{}{}{}",
            methods::examples(),
            selector::examples(),
            lookup::examples(),
        )
        .into_boxed_str(),
    )
}

/// Prints canonical signatures, declarations and selectors of ABI methods
#[derive(Debug, clap::Parser)]
#[clap(name = "abi-sig", after_help = help(), version)]
pub struct App {
    #[clap(subcommand)]
    pub command: Command,
    /// Digest the selectors are taken from.
    #[clap(long, value_enum, default_value_t = HashFunction::Keccak256, global = true)]
    pub hash: HashFunction,
    /// Use verbose output, repeat for more detail.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Silence all output but the result.
    #[clap(short, long, global = true)]
    pub silent: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    Methods(methods::Args),
    Selector(selector::Args),
    Lookup(lookup::Args),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HashFunction {
    #[default]
    Keccak256,
    Sha256,
}

impl SelectorHasher for HashFunction {
    fn digest(&self, data: &[u8]) -> [u8; 32] {
        match self {
            HashFunction::Keccak256 => abi_method::Keccak256.digest(data),
            HashFunction::Sha256 => abi_method::Sha256.digest(data),
        }
    }
}

/// Everything printed about a single method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRecord {
    pub name: String,
    pub signature: String,
    pub declaration: String,
    pub selector: Selector,
}

impl MethodRecord {
    pub fn new(method: &Method, hash: HashFunction) -> Self {
        Self {
            name: method.name().to_string(),
            signature: method.sig(),
            declaration: method.to_string(),
            selector: method.id_with(&hash),
        }
    }
}

/// YAML for people at a terminal, a single JSON line for pipes.
pub fn render_output<T: Serialize>(message: &T, terminal: bool) -> Result<String> {
    if terminal {
        Ok(serde_yaml::to_string(message)?)
    } else {
        Ok(format!("{}\n", serde_json::to_string(message)?))
    }
}

/// Runs a command, returning what should be displayed.
pub fn run(command: Command, hash: HashFunction) -> Result<serde_json::Value> {
    let content = match command {
        Command::Methods(args) => serde_json::to_value(methods::handler(args, hash)?)?,
        Command::Selector(args) => serde_json::to_value(selector::handler(args, hash)?)?,
        Command::Lookup(args) => serde_json::to_value(lookup::handler(args, hash)?)?,
    };
    Ok(content)
}
