//! Folio engine: executes image-load attempts for the preview pipeline.
mod engine;
mod probe;
mod types;

pub use engine::EngineHandle;
pub use probe::{ImageProbe, ProbeSettings, ReqwestProbe};
pub use types::{CardId, EngineEvent, FailureKind, ProbeError, ProbeOutput};
