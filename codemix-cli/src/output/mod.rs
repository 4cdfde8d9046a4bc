//! Output writing module

pub mod jsonl;

pub use jsonl::JsonlWriter;
