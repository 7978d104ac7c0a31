pub mod config;
pub mod gardener;
