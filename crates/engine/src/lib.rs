pub mod engine;
pub mod filter;
pub mod state;

pub use engine::SelectionEngine;
pub use filter::FilterCriteria;
pub use state::{EngineEvent, EngineState};
