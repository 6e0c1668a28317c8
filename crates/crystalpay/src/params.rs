// ============================================================================
// CRYSTALPAY - Request Parameters
// ============================================================================
// Query parameters for a single gateway call.
//
// The gateway contract is "omit if falsy": empty strings, zero numbers,
// `false` and `None` are never sent, not even as empty values. The rule is
// applied to every pair, required fields included, so an `amount` of zero
// disappears from the request as well.
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// FALSY VALUES
// ============================================================================

/// Values the gateway treats as "not provided".
pub trait Falsy {
    fn is_falsy(&self) -> bool;
}

impl Falsy for str {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for bool {
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

impl<T: Falsy> Falsy for Option<T> {
    fn is_falsy(&self) -> bool {
        match self {
            Some(value) => value.is_falsy(),
            None => true,
        }
    }
}

macro_rules! falsy_int {
    ($($t:ty),*) => {
        $(impl Falsy for $t {
            fn is_falsy(&self) -> bool {
                *self == 0
            }
        })*
    };
}

falsy_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Falsy for f32 {
    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

impl Falsy for f64 {
    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

// ============================================================================
// AMOUNT
// ============================================================================

/// Monetary amount as it goes over the wire.
///
/// The same text is used for the query parameter and the signature, so the
/// two can never disagree on formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Falsy for Amount {
    fn is_falsy(&self) -> bool {
        let trimmed = self.0.trim();
        trimmed.is_empty() || trimmed.parse::<f64>().map(|v| v == 0.0).unwrap_or(false)
    }
}

macro_rules! amount_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Amount {
            fn from(value: $t) -> Self {
                Amount(value.to_string())
            }
        })*
    };
}

amount_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount(value)
    }
}

// ============================================================================
// REQUEST PARAMS
// ============================================================================

/// Ordered query parameters. Falsy values are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair unless the value is falsy. An existing key is overwritten.
    pub fn insert<V>(&mut self, key: &str, value: V) -> &mut Self
    where
        V: Falsy + fmt::Display,
    {
        if value.is_falsy() {
            return self;
        }

        self.push(key, value)
    }

    /// Add a pair unconditionally, bypassing the falsy rule.
    /// Used for the base `s`/`n`/`o` fields, which are always sent.
    pub fn push(&mut self, key: &str, value: impl fmt::Display) -> &mut Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Add a pair only when the value is present and truthy
    pub fn insert_opt<V>(&mut self, key: &str, value: Option<V>) -> &mut Self
    where
        V: Falsy + fmt::Display,
    {
        match value {
            Some(value) => self.insert(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.pairs
    }
}
