//! pivotcalc: support and resistance pivot levels from daily OHLC data.
//!
//! Hexagonal architecture: the pivot engine lives in [`domain`], port traits
//! in [`ports`], concrete file and config implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
