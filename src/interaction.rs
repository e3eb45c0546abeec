pub(crate) mod manipulator;
