pub mod assignment;
pub mod berth;
pub mod scenario;
pub mod scheduler;
pub mod sentinel;
pub mod ship;
pub mod summary;
