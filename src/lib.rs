//! densemat: a minimal dense matrix/vector value type.
//!
//! This crate provides `Matrix<T>`, a generic container that represents
//! either a 1-dimensional vector or a 2-dimensional row-major matrix over
//! a single contiguous buffer. It covers construction from flat or nested
//! data, in-place shape reinterpretation (reshape), transposition, and
//! equality, together with the small accessor surface needed to use the
//! values from calling code.
//!
//! The design favors value semantics: every `Matrix` owns its buffer,
//! cloning copies the data, and no two values ever alias storage.
pub mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;
