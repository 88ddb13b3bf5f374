pub mod converters;
pub mod uploaders;
