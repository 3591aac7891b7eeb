pub mod enums;
pub mod log;
pub mod reading;

pub use enums::*;
pub use log::SymptomLog;
pub use reading::EngineInput;
