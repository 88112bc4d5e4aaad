//! The lexical module is responsible for converting raw text into a sequence of tokens that the
//! evaluator can understand.

pub mod token_stream;

pub mod token;
