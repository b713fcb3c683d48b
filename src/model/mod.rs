pub mod answer;
pub mod api;
pub mod common;
pub mod grading;
pub mod image;
pub mod question;
pub mod seed;
