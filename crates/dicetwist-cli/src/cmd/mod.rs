pub mod demo;
pub mod roll;
