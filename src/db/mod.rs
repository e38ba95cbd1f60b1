pub mod initialize;
pub mod pool;
pub mod slots;

pub use slots::SqliteSlotStore;
