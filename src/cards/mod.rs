pub mod card;
pub use card::*;

pub mod counts;
pub use counts::*;

pub mod deck;
pub use deck::*;
