pub mod dtos;
pub mod project;
pub mod user;
