pub mod expressions;
pub mod parser;
pub mod statements;

pub use parser::{parse, ParseOutcome, Parser, MAX_DEPTH};
