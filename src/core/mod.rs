pub mod dataset;
pub mod operations;
pub mod report;
pub mod splitter;

pub use operations::LocalFs;
pub use splitter::{execute_plan, make_rng, plan_split};
