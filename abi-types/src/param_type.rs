use crate::error::{Error, Result};
use itertools::Itertools;
use std::{fmt, str::FromStr};

/// Width of the `int` and `uint` shorthands.
pub const DEFAULT_INT_BITS: usize = 256;
/// Largest `bytesN` width.
pub const MAX_FIXED_BYTES: usize = 32;
/// Deepest tuple nesting a descriptor may have, and the most array suffixes a
/// single type may carry.
pub const MAX_NESTING_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    Address,
    Bool,
    String,
    /// Dynamically sized byte string.
    Bytes,
    /// `bytesN`, with `N` in `1..=32`.
    FixedBytes(usize),
    /// Signed integer of the given bit width.
    Int(usize),
    /// Unsigned integer of the given bit width.
    Uint(usize),
    /// `T[]`
    Array(Box<ParamType>),
    /// `T[N]`
    FixedArray(Box<ParamType>, usize),
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Builds a tuple type from an ABI `tuple` descriptor and its already parsed
    /// components. The descriptor may carry array suffixes, i.e. `tuple[2][]`.
    pub fn from_tuple_descriptor(descriptor: &str, components: Vec<ParamType>) -> Result<Self> {
        let descriptor = descriptor.trim();
        let suffixes = descriptor
            .strip_prefix("tuple")
            .ok_or_else(|| Error::InvalidType(descriptor.to_string()))?;
        apply_array_suffixes(ParamType::Tuple(components), suffixes, descriptor)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => write!(f, "address"),
            ParamType::Bool => write!(f, "bool"),
            ParamType::String => write!(f, "string"),
            ParamType::Bytes => write!(f, "bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{size}"),
            ParamType::Int(bits) => write!(f, "int{bits}"),
            ParamType::Uint(bits) => write!(f, "uint{bits}"),
            ParamType::Array(elem) => write!(f, "{elem}[]"),
            ParamType::FixedArray(elem, len) => write!(f, "{elem}[{len}]"),
            ParamType::Tuple(components) => write!(f, "({})", components.iter().join(",")),
        }
    }
}

impl FromStr for ParamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let depth = nesting_depth(s);
        if depth > MAX_NESTING_DEPTH {
            return Err(Error::TooDeep {
                depth,
                max: MAX_NESTING_DEPTH,
            });
        }
        parse_descriptor(s)
    }
}

/// Deepest parenthesis nesting in `descriptor`, ignoring whether it balances.
fn nesting_depth(descriptor: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    for ch in descriptor.chars() {
        match ch {
            '(' => {
                depth += 1;
                max = max.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

fn parse_descriptor(s: &str) -> Result<ParamType> {
    let descriptor = s.trim();
    if descriptor.is_empty() {
        return Err(Error::InvalidType(s.to_string()));
    }

    let (base, suffixes) = split_base(descriptor)?;
    let base = match base.strip_prefix('(') {
        Some(inner) => {
            // `split_base` guarantees the closing parenthesis.
            let inner = &inner[..inner.len() - 1];
            ParamType::Tuple(
                split_components(inner, descriptor)?
                    .into_iter()
                    .map(parse_descriptor)
                    .collect::<Result<_>>()?,
            )
        }
        None => parse_elementary(base)?,
    };

    apply_array_suffixes(base, suffixes, descriptor)
}

/// Splits a descriptor into its base type and the trailing run of array suffixes.
fn split_base(descriptor: &str) -> Result<(&str, &str)> {
    if descriptor.starts_with('(') {
        let mut depth = 0usize;
        for (pos, ch) in descriptor.char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(descriptor.split_at(pos + 1));
                    }
                }
                _ => {}
            }
        }
        return Err(Error::UnbalancedBrackets(descriptor.to_string()));
    }

    if descriptor.contains(['(', ')']) {
        return Err(Error::UnbalancedBrackets(descriptor.to_string()));
    }

    Ok(descriptor.split_at(descriptor.find('[').unwrap_or(descriptor.len())))
}

/// Splits the inside of a tuple on its top level commas.
fn split_components<'a>(inner: &'a str, descriptor: &str) -> Result<Vec<&'a str>> {
    if inner.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut components = vec![];
    let mut depth = 0isize;
    let mut last = 0;
    for (pos, ch) in inner.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                components.push(&inner[last..pos]);
                last = pos + 1;
            }
            _ => {}
        }
        if depth < 0 {
            return Err(Error::UnbalancedBrackets(descriptor.to_string()));
        }
    }
    if depth != 0 {
        return Err(Error::UnbalancedBrackets(descriptor.to_string()));
    }
    components.push(&inner[last..]);

    if components.iter().any(|c| c.trim().is_empty()) {
        return Err(Error::InvalidType(descriptor.to_string()));
    }
    Ok(components)
}

/// Wraps `base` in one array layer per suffix, left to right, so that
/// `uint8[2][]` is a dynamic array of `uint8[2]`.
fn apply_array_suffixes(base: ParamType, suffixes: &str, descriptor: &str) -> Result<ParamType> {
    let mut ty = base;
    let mut rest = suffixes.trim();
    let mut layers = 0usize;
    while !rest.is_empty() {
        layers += 1;
        if layers > MAX_NESTING_DEPTH {
            return Err(Error::TooDeep {
                depth: layers,
                max: MAX_NESTING_DEPTH,
            });
        }
        let inner_and_rest = rest
            .strip_prefix('[')
            .ok_or_else(|| Error::UnbalancedBrackets(descriptor.to_string()))?;
        let close = inner_and_rest
            .find(']')
            .ok_or_else(|| Error::UnbalancedBrackets(descriptor.to_string()))?;
        let len = inner_and_rest[..close].trim();
        ty = if len.is_empty() {
            ParamType::Array(Box::new(ty))
        } else {
            let len: usize = len
                .parse()
                .map_err(|_| Error::InvalidType(descriptor.to_string()))?;
            if len == 0 {
                return Err(Error::InvalidSize {
                    ty: ty.to_string(),
                    size: len,
                });
            }
            ParamType::FixedArray(Box::new(ty), len)
        };
        rest = inner_and_rest[close + 1..].trim_start();
    }
    Ok(ty)
}

fn parse_elementary(name: &str) -> Result<ParamType> {
    let name = name.trim();
    if name.contains([']', '[']) {
        return Err(Error::UnbalancedBrackets(name.to_string()));
    }

    let ty = match name {
        "address" => ParamType::Address,
        "bool" => ParamType::Bool,
        "string" => ParamType::String,
        "bytes" => ParamType::Bytes,
        "byte" => ParamType::FixedBytes(1),
        "int" => ParamType::Int(DEFAULT_INT_BITS),
        "uint" => ParamType::Uint(DEFAULT_INT_BITS),
        _ => {
            if let Some(bits) = name.strip_prefix("uint") {
                ParamType::Uint(int_bits(name, bits)?)
            } else if let Some(bits) = name.strip_prefix("int") {
                ParamType::Int(int_bits(name, bits)?)
            } else if let Some(size) = name.strip_prefix("bytes") {
                let size = parse_width(name, size)?;
                if !(1..=MAX_FIXED_BYTES).contains(&size) {
                    return Err(Error::InvalidSize {
                        ty: "bytes".into(),
                        size,
                    });
                }
                ParamType::FixedBytes(size)
            } else {
                return Err(Error::InvalidType(name.to_string()));
            }
        }
    };
    Ok(ty)
}

fn int_bits(name: &str, bits: &str) -> Result<usize> {
    let bits = parse_width(name, bits)?;
    if bits == 0 || bits > DEFAULT_INT_BITS || bits % 8 != 0 {
        let ty = name.trim_end_matches(|c: char| c.is_ascii_digit());
        return Err(Error::InvalidSize {
            ty: ty.to_string(),
            size: bits,
        });
    }
    Ok(bits)
}

fn parse_width(name: &str, width: &str) -> Result<usize> {
    if width.is_empty() || !width.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidType(name.to_string()));
    }
    width
        .parse()
        .map_err(|_| Error::InvalidType(name.to_string()))
}
