pub mod chat;
pub mod extraction;
pub mod generation;
pub mod grading;
