pub mod hash_base;

pub use hash_base::RecordServiceImpl;
