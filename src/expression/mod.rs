//! Expression engine built on the [`Stack`](crate::stack::Stack) capability.
//!
//! Each function has a `*_with` form taking the stack backing as a type parameter, and a
//! convenience form using [`ArrayStack`](crate::stack::ArrayStack).

mod balance;
mod postfix;

pub use balance::{is_balanced, is_balanced_with};
pub use postfix::{evaluate_postfix, evaluate_postfix_with, infix_to_postfix, infix_to_postfix_with};
