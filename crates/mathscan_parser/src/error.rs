use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    NomError(String),
    #[error("Unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("Empty input")]
    EmptyInput,
    #[error("Expression nested deeper than {0} levels")]
    TooDeep(usize),
}
