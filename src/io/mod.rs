//! Output helpers.
//!
//! - quote PDF export under the fixed file name (`export`)
//! - JSON quote summary write/read (`quote`)

pub mod export;
pub mod quote;

pub use export::*;
pub use quote::*;
