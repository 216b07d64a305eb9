//! Metapackage tying the calculator crates together for cross-crate tests

pub use calculator;
pub use common;
pub use pnl_engine;
pub use price_oracle;
