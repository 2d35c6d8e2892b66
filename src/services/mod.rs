// Service module exports

pub mod grid;
pub mod import;
pub mod layout;
pub mod mutation;
pub mod segments;
pub mod settings;
