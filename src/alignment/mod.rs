pub mod expansion;
pub mod greedy;
pub mod report;
