mod error;
mod types;

pub use error::ValidationError;
pub use types::{Movie, MoviePatch, MIN_YEAR};
