pub mod archiver;
pub mod atcoder;
pub mod error;
pub mod filter;
pub mod language;
pub mod throttle;
pub mod vcs;

pub use archiver::Archiver;
pub use error::{GardenerError, Result};
