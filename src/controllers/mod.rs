pub mod helpers;
pub mod krate;
pub mod version;
