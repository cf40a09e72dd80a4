pub mod outcome;
pub use outcome::*;

pub mod row;
pub use row::*;

pub mod tower;
pub use tower::*;
