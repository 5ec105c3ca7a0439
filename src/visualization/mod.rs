pub mod vis2d;
pub mod report;
