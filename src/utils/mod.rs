pub mod controls;
pub mod error;
pub mod text;
