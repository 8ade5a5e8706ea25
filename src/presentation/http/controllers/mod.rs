pub mod articles;
pub mod discussion;
