pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{BinOp, Expr};
pub use error::ParseError;
pub use parser::{parse, MAX_DEPTH};
