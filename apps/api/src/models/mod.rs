pub mod application;
pub mod candidate;
pub mod company;
pub mod job;
