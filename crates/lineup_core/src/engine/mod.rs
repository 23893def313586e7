mod assignment;

pub use assignment::{AssignmentEngine, PeriodRequest};
