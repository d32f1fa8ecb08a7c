//! Domain model (ids, task record, state, errors, events).

pub mod applied;
pub mod errors;
pub mod events;
pub mod ids;
pub mod state;
pub mod task;

pub use self::applied::{Applied, Durability};
pub use self::errors::{ErrorKind, TodoError};
pub use self::events::DomainEvent;
pub use self::ids::TaskId;
pub use self::state::{FilterMode, TaskState};
pub use self::task::{Category, Priority, TaskRecord};
