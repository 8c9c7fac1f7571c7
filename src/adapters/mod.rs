// Adapters layer: concrete implementations of the domain ports. Only the
// in-memory backend exists today; a database-backed one would slot in here.

pub mod memory;
