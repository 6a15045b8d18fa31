pub mod error;
pub mod result;

pub use error::TaskboardError;
pub use result::TaskboardResult;
