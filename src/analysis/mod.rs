pub mod assembler;
pub mod rank;
pub mod types;
