use crate::NodeIdxError;
use thiserror::Error;

/// Error type of the fallible container and algorithm operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DsaError {
    /// A position argument is outside of the range accepted by the operation.
    #[error("index {index} is out of range for a container of length {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },
    /// The operation requires at least one element but the container is empty.
    #[error("container is empty")]
    EmptyContainer,
    /// A postfix expression has an operator without two operands, leftover operands
    /// or an unknown token.
    #[error("malformed expression: {0}")]
    MalformedExpression(&'static str),
    /// Division by zero while evaluating an expression.
    #[error("division by zero")]
    DivisionByZero,
    /// An intermediate result of an expression or of a running sum does not fit into the value type.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
    /// A node index is no longer valid for the list it is used with.
    #[error(transparent)]
    InvalidNodeIdx(#[from] NodeIdxError),
}

impl DsaError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
