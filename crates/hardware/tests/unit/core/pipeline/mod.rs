/// Decode Sequencer.
pub mod decode;

/// Execute stage result routing.
pub mod execute;
