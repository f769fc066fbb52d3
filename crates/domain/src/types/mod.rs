//! # Curated Challenges Domain Types
//!
//! Vocabulary shared with the host game: which special room the player is
//! in, the room's phase, and the active screen.
//!
//! 1. **Pure data types** - No I/O, no side effects
//! 2. **Serializable** - All types derive Serialize/Deserialize

mod room;
pub use room::{RoomKind, RoomPhase, ScreenMode};
