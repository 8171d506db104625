//! Strong types for token amounts
//!
//! ```text
//! &str (explorer `value`)
//!     |
//!     | TokenAmount::parse_lenient
//!     ↓
//! TokenAmount (U256, raw)
//!     |
//!     | normalize(TokenDecimals)
//!     ↓
//! BigDecimal (exact, human-readable)
//! ```

mod amount;
mod decimals;

pub use amount::{to_decimal, TokenAmount};
pub use decimals::TokenDecimals;
