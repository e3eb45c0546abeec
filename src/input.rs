pub(crate) mod matrix;
