pub mod criteria;
pub mod filter;
pub mod page;
pub mod sort;
pub mod strategy;

mod error;

pub use error::{Error, Result};
