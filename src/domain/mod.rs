pub mod job;
pub mod machine;
pub mod maintenance;
pub mod schedule;
pub mod weights;
