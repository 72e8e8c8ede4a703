use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identity of a tradable instrument.
///
/// Two instruments are the same instrument when both the symbol and the display
/// name match. Nothing about the symbol is normalized, so `"aapl"` and `"AAPL"`
/// are different identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    symbol: String,
    name: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Instrument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.name)
    }
}
