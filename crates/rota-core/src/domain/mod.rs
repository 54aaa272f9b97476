//! Domain model (ids, records, todo drafts, rotation).

pub mod ids;
pub mod records;
pub mod rotation;
pub mod todo;

pub use self::ids::{ChoreId, RoomieId, RunId, TodoId};
pub use self::records::{Chore, Roomie};
pub use self::rotation::{Assignment, Rotation, assign};
pub use self::todo::TodoDraft;
