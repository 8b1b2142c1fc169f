//! Blog listing and article page behaviors.

pub mod filter;
pub mod like;
pub mod rating;

pub use filter::{ArticleEntry, BlogFilter, BlogIds, matches_search};
pub use like::LikeButtons;
pub use rating::{Feedback, RatingButtons};
