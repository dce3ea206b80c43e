pub mod discover;
pub mod dispatch;
pub mod index;
pub mod keywords;
pub mod normalize;
pub mod rank;
