pub mod deadline;
pub mod engine;
pub mod events;
pub mod input;
mod logging;
pub mod session;
pub mod turn;
pub mod ui;

pub use deadline::{Deadline, Prompter, ReadError};
pub use engine::*;
pub use events::{Entry, EventLog};
pub use input::{InputSource, ScriptedInput, StdinInput};
pub use logging::init_logging;
pub use session::{MatchReport, Session};
pub use turn::{TurnController, TurnEnd};
