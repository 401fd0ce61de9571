//! Plan data structures, domain limits, and preset loading

mod data;
pub mod limits;
pub mod loader;
pub mod presets;

pub use data::PlanInput;
pub use limits::PlanLimits;
pub use loader::{load_scenarios, load_scenarios_from_reader, ScenarioLoadError};
pub use presets::{default_scenarios, ScenarioCard, TermOption, TERM_OPTIONS};
