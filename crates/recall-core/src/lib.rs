//! Recall Core Library
//!
//! Indexing and ranking engine for bilingual (English/Chinese) conversation
//! history: word normalization, keyword extraction, index building,
//! co-occurrence keyword discovery and query-time ranking.

pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod fsutil;
pub mod index;
pub mod keywords;
pub mod lexicon;
pub mod logging;
pub mod rank;
pub mod text;
