// Shared modules for the rollup anchoring node
pub mod anchoring;
pub mod shared;
pub mod utils;
