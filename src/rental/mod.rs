pub mod error;
pub mod pricing;
pub mod service;

pub use error::*;
pub use pricing::*;
pub use service::*;
