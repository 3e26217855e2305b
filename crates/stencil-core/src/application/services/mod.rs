//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "synthesize a project" or "check for drift".

pub mod synth_service;

pub use synth_service::{
    CheckReport, CheckedFile, FileOutcome, FileStatus, SynthReport, SynthService, WrittenFile,
};
