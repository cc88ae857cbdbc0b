use crate::stack::{ArrayStack, Stack};

fn opener_of(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Returns true if every bracket of `expression` is closed by the matching bracket in
/// the correct nesting order, using an [`ArrayStack`].
///
/// Only `()`, `[]` and `{}` are considered; all other characters are ignored.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::expression::is_balanced;
///
/// assert!(is_balanced("()[]{}"));
/// assert!(is_balanced("{[a * (b + c)]}"));
/// assert!(is_balanced(""));
///
/// assert!(!is_balanced("(]"));
/// assert!(!is_balanced("([)]"));
/// assert!(!is_balanced("(("));
/// ```
pub fn is_balanced(expression: &str) -> bool {
    is_balanced_with::<ArrayStack<char>>(expression)
}

/// Returns true if every bracket of `expression` is closed by the matching bracket in
/// the correct nesting order, using the stack backing `S`.
///
/// A closing bracket which does not match the most recent unmatched opener, or for which
/// there is no unmatched opener at all, makes the expression unbalanced. An expression is
/// balanced iff no opener is left unmatched at the end.
pub fn is_balanced_with<S>(expression: &str) -> bool
where
    S: Stack<Item = char> + Default,
{
    let mut openers = S::default();

    for c in expression.chars() {
        match c {
            '(' | '[' | '{' => openers.push(c),
            _ => {
                if let Some(expected) = opener_of(c) {
                    match openers.pop() {
                        Ok(opener) if opener == expected => {}
                        _ => return false,
                    }
                }
            }
        }
    }

    openers.is_empty()
}
