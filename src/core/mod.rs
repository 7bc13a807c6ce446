pub mod one_shot;
pub mod parser;
pub mod reporter;
pub mod search;
pub mod session;

pub use crate::domain::model::{Combination, NumberList, EXIT_SENTINEL, TOLERANCE};
pub use crate::domain::ports::SessionIo;
pub use crate::utils::error::Result;
