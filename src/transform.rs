pub mod decompose;
pub mod linear;
