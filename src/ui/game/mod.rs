//! The screen/game state machine.

mod intent;
mod reducer;
mod state;

pub use intent::GameIntent;
pub use reducer::GameReducer;
pub use state::{AchievementsPane, GameScreen};
