use std::fmt::Display;
use itertools::Itertools;
use crate::Mono;
use crate::util::format::lc;
use super::Vars;

/// Collects terms one by one and renders them as a whole.
pub trait Printer<R> { 
    fn add_term(&mut self, coeff: &R, mono: &Mono);
    fn mono_string(&self, degs: &[usize]) -> String;

    /// Returns the assembled string and clears the buffer.
    fn print(&mut self) -> String;
}

/// The default printer: `-5*x^2*y - 3/2*z + 1/2`.
#[derive(Clone, Default, Debug)]
pub struct StrPrinter { 
    vars: Vars,
    terms: Vec<(String, String)>
}

impl StrPrinter { 
    pub fn new(vars: Vars) -> Self { 
        Self { vars, terms: vec![] }
    }

    pub fn vars(&self) -> &Vars { 
        &self.vars
    }

    pub fn mono_string(&self, degs: &[usize]) -> String {
        let s = degs.iter().enumerate().filter(|(_, d)| **d > 0).map(|(i, &d)| { 
            let x = self.vars.name(i);
            if d == 1 { x } else { format!("{x}^{d}") }
        }).join("*");

        if s.is_empty() { 
            String::from("1")
        } else { 
            s
        }
    }

    pub fn print(&mut self) -> String {
        if self.terms.is_empty() { 
            return String::from("0")
        }
        lc(self.terms.drain(..))
    }
}

impl<R> Printer<R> for StrPrinter
where R: Display { 
    fn add_term(&mut self, coeff: &R, mono: &Mono) {
        let x = self.mono_string(mono.degs());
        self.terms.push((x, coeff.to_string()));
    }

    fn mono_string(&self, degs: &[usize]) -> String {
        StrPrinter::mono_string(self, degs)
    }

    fn print(&mut self) -> String {
        StrPrinter::print(self)
    }
}

#[cfg(test)]
mod tests { 
    use num_traits::{Zero, One};
    use crate::{Ratio, Poly, DegLex, Lex, TermOrder};
    use super::*;

    type R = Ratio<i64>;
    type P = Poly<R>;

    fn x(i: usize) -> P { P::variable(i) }
    fn c(a: i64, b: i64) -> P { P::from_const(R::new(a, b)) }

    #[test]
    fn mono_string() { 
        let p = StrPrinter::new(Vars::new(["x", "y"]).unwrap());
        assert_eq!(p.mono_string(&[]), "1");
        assert_eq!(p.mono_string(&[2, 1]), "x^2*y");
        assert_eq!(p.mono_string(&[0, 0, 3]), "x3^3");
    }

    #[test]
    fn print_terms() { 
        let mut p = StrPrinter::default();
        p.add_term(&R::from(-5), &Mono::from([2]));
        p.add_term(&R::new(-3, 2), &Mono::from([0, 1]));
        p.add_term(&R::new(1, 2), &Mono::one());
        assert_eq!(p.print(), "-5*x1^2 - 3/2*x2 + 1/2");
        assert_eq!(p.print(), "0");
    }

    #[test]
    fn print_poly() { 
        let mut p = StrPrinter::default();

        let f = x(0) - x(1).pow(2).unwrap() + P::one();
        assert_eq!(f.to_string_with(&mut p, None), "x1 - x2^2 + 1");
        assert_eq!(f.to_string_with(&mut p, Some(&DegLex)), "-x2^2 + x1 + 1");

        let f = c(-3, 1) * x(0) * x(1).pow(2).unwrap() - c(2, 1);
        assert_eq!(f.to_string_with(&mut p, None), "-3*x1*x2^2 - 2");

        assert_eq!(P::zero().to_string_with(&mut p, Some(&Lex)), "0");
        assert_eq!(c(-1, 1).to_string_with(&mut p, None), "-1");
    }

    #[test]
    fn print_named() { 
        let mut p = StrPrinter::new(Vars::new(["z", "y", "x"]).unwrap());
        let f = x(1) * x(2).pow(2).unwrap() - x(2) + P::one();
        let ord: &dyn TermOrder = &Lex;
        assert_eq!(f.to_string_with(&mut p, Some(ord)), "y*x^2 - x + 1");
    }
}
