pub mod points;
pub mod rules;
pub mod standings;

pub use points::*;
pub use rules::*;
pub use standings::*;
