//! Storage backends - `CreatureRepository` implementations

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryCreatureRepository;
pub use json_file::JsonFileCreatureRepository;
