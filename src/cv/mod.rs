pub mod handlers;
pub mod image;
pub mod models;
pub mod multipart_parser;
