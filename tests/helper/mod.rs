#![allow(dead_code)]

mod fetcher;
mod manifest;

pub use fetcher::*;
pub use manifest::*;
