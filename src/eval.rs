use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, PartialEq)]
pub enum EvalError {
    DivisionByZero,
}

/// A computed value, printed the way a shortest round-trip float repr reads:
/// `7.0`, `0.30000000000000004`, `1e+16`, `1.5e-05`, `inf`, `nan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

pub fn eval(lhs: f64, op: Operator, rhs: f64) -> Result<Number, EvalError> {
    let value = match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    Ok(Number(value))
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return write!(f, "nan");
        }
        if value.is_infinite() {
            return match value.is_sign_positive() {
                true => write!(f, "inf"),
                false => write!(f, "-inf"),
            };
        }

        // `Debug` already switches to exponent form outside [1e-4, 1e16),
        // only the exponent needs an explicit sign and two digits.
        let repr = format!("{:?}", value);
        match repr.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => write!(f, "{}", repr),
        }
    }
}
