pub mod difficulty;
pub mod score;
pub mod session;
pub mod target;

pub use difficulty::{Difficulty, Mode, TimeRange};
pub use score::{score, RoundResult, Tier};
pub use session::RoundSession;
pub use target::generate_target;
