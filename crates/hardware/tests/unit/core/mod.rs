/// Register file, CSR storage, and trap classification.
pub mod arch;


/// Decode, execute, retire, and write-back arbitration.
pub mod pipeline;
