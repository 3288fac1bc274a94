//! Local persistence: the key/value backend plus the stores owned by the
//! top-level controller (mastery record, avatar image).

mod avatar;
mod backend;
mod mastery;

pub use avatar::{AvatarError, AvatarManager, GenerationOutcome, AVATAR_KEY};
pub use backend::{FileStorage, MemoryStorage, StorageBackend};
pub use mastery::{CategoryProgress, MasteryStore, Tier, MASTERY_KEY};
