//! Text ranges over UTF-8 byte offsets and composed offset spaces.

mod range;

pub use range::TextRange;
