pub mod class_names;
pub mod logging;
pub mod text_utils;
