pub mod export;
pub mod fit;
pub mod parse;
