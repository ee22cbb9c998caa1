//! Record types served by the API

#[macro_use]
pub mod macros;

pub mod book;
pub mod laptop;
pub mod post;
pub mod user;

pub use book::Book;
pub use laptop::{Brand, Laptop};
pub use post::{Category, Post, PostStatus};
pub use user::User;
