pub mod csv;
pub mod payload;
pub mod text;
