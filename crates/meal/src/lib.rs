mod error;
mod meal;
mod types;

pub use error::*;
pub use meal::*;
pub use types::*;
