use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum Error { 
    #[display("division by zero")]
    DivisionByZero,

    #[display("negative exponent: {}", _0)]
    NegativeExponent(i32),

    #[display("not divisible")]
    NotDivisible,

    #[display("divisor is not a monomial")]
    NotAMonomial,

    #[display("leading term of zero polynomial is undefined")]
    UndefinedLeadingTerm,

    #[display("ordering is not specified")]
    NullOrdering,

    #[display("invalid variable name: '{}'", _0)]
    InvalidVariableName(String),

    #[display("duplicate variable name: '{}'", _0)]
    DuplicateVariableName(String),

    #[display("cannot parse: '{}'", _0)]
    Parse(String),
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn display() { 
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(Error::NegativeExponent(-2).to_string(), "negative exponent: -2");
        assert_eq!(Error::Parse("x^".into()).to_string(), "cannot parse: 'x^'");
        assert_eq!(Error::InvalidVariableName("1x".into()).to_string(), "invalid variable name: '1x'");
    }

    #[test]
    fn boxed() { 
        fn f() -> Result<(), Box<dyn std::error::Error>> { 
            Err(Error::NullOrdering)?
        }
        let e = f().unwrap_err();
        assert_eq!(e.to_string(), "ordering is not specified");
    }
}
