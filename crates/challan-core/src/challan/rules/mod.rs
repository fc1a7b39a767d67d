//! Rule-based field extractors for challan receipts.

pub mod amounts;
pub mod breakup;
pub mod sections;

pub use amounts::{AmountPolicy, format_indian, format_indian_str, parse_amount, parse_amount_with};
pub use breakup::{BREAKUP_RULES, Breakup, Component, classify};
pub use sections::{DEFAULT_SECTIONS, OverrideMode, SectionMap, parse_overrides, resolve};
