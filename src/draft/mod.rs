pub mod board;
pub mod catalog;
pub mod tag_cloud;
