pub mod error;
pub mod post;

pub use error::{Error, Result};
pub use post::*;
