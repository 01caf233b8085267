//! Text parsers for EDGAR index files.

pub mod company_index;
