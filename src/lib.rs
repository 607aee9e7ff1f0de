//! Offline inspectors for saved search-result and map-listing pages.
//!
//! One page per run: read the file into memory, run a single selector or
//! pattern pass over it, print the report lines to stdout, exit. The
//! selection/filter/bound contract lives in [`extract`]; the two
//! diagnostic modes (selector frequencies, per-block snippet checks) in
//! [`inspect`].

pub mod cli;
mod error;
pub mod extract;
pub mod inspect;
pub mod load;
mod macros;
pub mod process;

pub use error::{Error, Result};
