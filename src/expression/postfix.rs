use crate::stack::{ArrayStack, Stack};
use crate::DsaError;
use alloc::string::String;

fn precedence(operator: char) -> u8 {
    match operator {
        '+' | '-' => 1,
        '*' | '/' => 2,
        '^' => 3,
        _ => 0,
    }
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Converts the infix `expression` into postfix notation using an [`ArrayStack`].
///
/// See [`infix_to_postfix_with`] for details.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::expression::infix_to_postfix;
///
/// assert_eq!(infix_to_postfix("A+B*C"), "ABC*+");
/// assert_eq!(infix_to_postfix("(A+B)*C"), "AB+C*");
/// assert_eq!(infix_to_postfix("a - b + c"), "ab-c+");
/// ```
pub fn infix_to_postfix(expression: &str) -> String {
    infix_to_postfix_with::<ArrayStack<char>>(expression)
}

/// Converts the infix `expression` into postfix notation using the stack backing `S`.
///
/// Every alphanumeric character is a single-character operand and is emitted as is;
/// whitespace is skipped. The precedences are:
/// * `+`, `-` : 1
/// * `*`, `/` : 2
/// * `^` : 3
///
/// Any other character is treated as an operator of precedence 0.
///
/// An incoming operator first emits all operators on the stack with a precedence greater
/// than or equal to its own, stopping at an opening parenthesis. Hence, all operators
/// including `^` are left-associative.
///
/// A closing parenthesis emits operators up to its matching opener which is discarded;
/// a closing parenthesis without an opener is ignored. At the end, everything left on the
/// stack is emitted, including unmatched openers.
///
/// ```rust
/// use dsa_selfref::expression::infix_to_postfix;
///
/// assert_eq!(infix_to_postfix("(A+B"), "AB+(");
/// ```
pub fn infix_to_postfix_with<S>(expression: &str) -> String
where
    S: Stack<Item = char> + Default,
{
    let mut output = String::with_capacity(expression.len());
    let mut operators = S::default();

    for c in expression.chars() {
        match c {
            _ if c.is_whitespace() => {}
            _ if c.is_alphanumeric() => output.push(c),
            '(' => operators.push(c),
            ')' => {
                while let Ok(top) = operators.pop() {
                    if top == '(' {
                        break;
                    }
                    output.push(top);
                }
            }
            _ => {
                let p = precedence(c);
                while operators
                    .peek()
                    .is_ok_and(|&top| top != '(' && precedence(top) >= p)
                {
                    if let Ok(top) = operators.pop() {
                        output.push(top);
                    }
                }
                operators.push(c);
            }
        }
    }

    while let Ok(top) = operators.pop() {
        output.push(top);
    }

    output
}

/// Evaluates the postfix `expression` using an [`ArrayStack`].
///
/// See [`evaluate_postfix_with`] for details.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::{expression::evaluate_postfix, DsaError};
///
/// assert_eq!(evaluate_postfix("23+"), Ok(5));
/// assert_eq!(evaluate_postfix("23*5+"), Ok(11));
/// assert_eq!(evaluate_postfix("2 3 ^"), Ok(8));
///
/// assert!(matches!(evaluate_postfix("2+"), Err(DsaError::MalformedExpression(_))));
/// assert_eq!(evaluate_postfix("40/"), Err(DsaError::DivisionByZero));
/// ```
pub fn evaluate_postfix(expression: &str) -> Result<i64, DsaError> {
    evaluate_postfix_with::<ArrayStack<i64>>(expression)
}

/// Evaluates the postfix `expression` using the stack backing `S`.
///
/// Operands are single decimal digits; whitespace is skipped. An operator pops `b` and then
/// `a` and pushes `a OP b`, where:
/// * `+`, `-`, `*` are checked `i64` operations failing with [`DsaError::ArithmeticOverflow`];
/// * `/` truncates toward zero and fails with [`DsaError::DivisionByZero`] when `b` is zero;
/// * `^` raises `a` to the power `b`; a negative `b` is a malformed expression.
///
/// # Errors
///
/// [`DsaError::MalformedExpression`] when
/// * an operator is reached with fewer than two operands available;
/// * the stack does not hold exactly one value at the end, including the empty expression;
/// * a character is neither a digit, an operator nor whitespace.
pub fn evaluate_postfix_with<S>(expression: &str) -> Result<i64, DsaError>
where
    S: Stack<Item = i64> + Default,
{
    let mut operands = S::default();

    for c in expression.chars() {
        if c.is_whitespace() {
            continue;
        }

        if let Some(digit) = c.to_digit(10) {
            operands.push(i64::from(digit));
            continue;
        }

        if !is_operator(c) {
            return Err(DsaError::MalformedExpression("unexpected character"));
        }

        let b = operands.pop().map_err(|_| insufficient_operands())?;
        let a = operands.pop().map_err(|_| insufficient_operands())?;
        operands.push(apply(c, a, b)?);
    }

    let result = operands
        .pop()
        .map_err(|_| DsaError::MalformedExpression("empty expression"))?;

    match operands.is_empty() {
        true => Ok(result),
        false => Err(DsaError::MalformedExpression("too many operands")),
    }
}

fn insufficient_operands() -> DsaError {
    DsaError::MalformedExpression("insufficient operands")
}

fn apply(operator: char, a: i64, b: i64) -> Result<i64, DsaError> {
    let value = match operator {
        '+' => a.checked_add(b),
        '-' => a.checked_sub(b),
        '*' => a.checked_mul(b),
        '/' if b == 0 => return Err(DsaError::DivisionByZero),
        '/' => a.checked_div(b),
        '^' => {
            if b < 0 {
                return Err(DsaError::MalformedExpression("negative exponent"));
            }
            u32::try_from(b).ok().and_then(|exp| a.checked_pow(exp))
        }
        _ => return Err(DsaError::MalformedExpression("unexpected character")),
    };

    value.ok_or(DsaError::ArithmeticOverflow)
}
