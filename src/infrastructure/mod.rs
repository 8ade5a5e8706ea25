pub mod authors;
pub mod ids;
pub mod store;
pub mod time;
