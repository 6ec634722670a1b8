pub mod catalog;
pub mod extract;
pub mod github;
pub mod manifest;
