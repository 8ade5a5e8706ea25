pub mod authors;
pub mod ids;
pub mod time;
