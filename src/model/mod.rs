pub mod round;
pub mod rules;
pub mod types;
pub mod utils;

pub use round::*;
pub use rules::*;
pub use types::*;
pub use utils::*;
