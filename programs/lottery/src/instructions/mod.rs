pub mod enter;
pub mod fulfill_random_words;
pub mod initialize;
pub mod pick_winner;
pub mod queries;

pub use enter::*;
pub use fulfill_random_words::*;
pub use initialize::*;
pub use pick_winner::*;
pub use queries::*;
