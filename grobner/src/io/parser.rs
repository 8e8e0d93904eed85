use std::str::FromStr;
use std::sync::OnceLock;
use log::trace;
use num_traits::{One, Zero};
use regex::Regex;
use crate::{Error, Field, FieldOps, Mono, Poly};
use super::Vars;

const NUMBER: &str = r"[0-9]+(?:/[0-9]+)?";
const POWER:  &str = r"[a-zA-Z]+[0-9]*(?:\^[0-9]+)?";

struct Patterns { 
    poly: Regex,
    term: Regex,
}

fn patterns() -> &'static Patterns { 
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| { 
        let term = format!(r"(?:{NUMBER}|{POWER})(?:\*{POWER})*");
        Patterns { 
            poly: Regex::new(&format!(r"^-?{term}(?:[+-]{term})*$")).unwrap(),
            term: Regex::new(&format!(r"([+-]?)({term})")).unwrap(),
        }
    })
}

/// Reads polynomials written in the standard form, 
/// e.g. `1/2*x^2 + y*x - 6`, over a fixed table of variable names.
#[derive(Clone, Debug)]
pub struct Parser { 
    vars: Vars
}

impl Parser { 
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where I: IntoIterator<Item = S>, S: AsRef<str> { 
        let vars = Vars::new(names)?;
        Ok(Self { vars })
    }

    pub fn vars(&self) -> &Vars { 
        &self.vars
    }

    pub fn parse<R>(&self, text: &str) -> Result<Poly<R>, Error>
    where R: Field + FromStr, R::Err: Into<Error>, for<'x> &'x R: FieldOps<R> { 
        let s: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let pats = patterns();

        if !pats.poly.is_match(&s) { 
            return Err(Error::Parse(text.trim().to_string()))
        }

        let mut res = Poly::zero();

        for c in pats.term.captures_iter(&s) { 
            let (sign, term) = (&c[1], &c[2]);
            let (x, mut r) = self.parse_term::<R>(term)?;
            if sign == "-" { 
                r = -r;
            }
            trace!("term: {sign}{term} -> ({x:?}, {r})");
            res += Poly::from((x, r));
        }

        Ok(res)
    }

    fn parse_term<R>(&self, term: &str) -> Result<(Mono, R), Error>
    where R: Field + FromStr, R::Err: Into<Error>, for<'x> &'x R: FieldOps<R> { 
        let mut factors = term.split('*').peekable();
        let mut r = R::one();
        let mut x = Mono::one();

        if let Some(f) = factors.next_if(|f| f.starts_with(|c: char| c.is_ascii_digit())) { 
            r = R::from_str(f).map_err(Into::into)?;
        }

        for f in factors { 
            x *= self.parse_power(f)?;
        }

        Ok((x, r))
    }

    fn parse_power(&self, power: &str) -> Result<Mono, Error> { 
        let (name, e) = match power.split_once('^') { 
            Some((name, e)) => {
                let e = e.parse::<i32>().map_err(|_| Error::Parse(power.to_string()))?;
                (name, e)
            },
            None => (power, 1)
        };
        let i = self.vars.index_of(name).ok_or_else(|| Error::Parse(name.to_string()))?;
        Mono::var(i).pow(e)
    }
}
