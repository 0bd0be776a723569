pub mod rows;
pub mod warehouse;
