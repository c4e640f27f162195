//! Methods of a contract ABI and the strings and selectors derived from them.
//!
//! A [Method] is built once from parsed ABI data and never changes afterwards.
//! Every view of it is recomputed on demand:
//!
//! - [Method::sig] is the compact `name(type,type)` string that gets hashed,
//! - the [std::fmt::Display] impl is the human readable declaration,
//! - [Method::id] is the first four bytes of the Keccak-256 digest of the signature.
//!
//! ```
//! use abi_method::{Argument, Method, ParamType};
//!
//! let kill: Method = Method::new("kill", false, vec![], vec![]);
//! assert_eq!(kill.sig(), "kill()");
//! assert_eq!(kill.id().to_string(), "0x41c0e1b5");
//!
//! let balance = Method::new(
//!     "balance",
//!     true,
//!     vec![Argument::new("who", ParamType::Address)],
//!     vec![Argument::unnamed(ParamType::Uint(256))],
//! );
//! assert_eq!(
//!     balance.to_string(),
//!     "function balance(who address) constant returns(uint256)"
//! );
//! ```

pub mod argument;
pub mod error;
pub mod json_abi;
pub mod method;
pub mod selector;

pub use abi_types::{CanonicalType, ParamType};
pub use argument::{Argument, Arguments};
pub use error::{Error, Result};
pub use json_abi::Abi;
pub use method::Method;
pub use selector::{Keccak256, Selector, SelectorHasher, Sha256};
