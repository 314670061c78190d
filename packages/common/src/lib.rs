pub mod error;
pub mod result;
pub mod storage;

pub use error::*;
pub use result::*;
pub use storage::*;
