use std::cmp::Ordering;
use std::str::FromStr;
use derive_more::Display;
use crate::{Error, Mono};

/// A monomial ordering, compared on canonical exponent sequences 
/// (no trailing zeros). 
pub trait TermOrder { 
    fn cmp_degs(&self, a: &[usize], b: &[usize]) -> Ordering;

    fn lt(&self, a: &[usize], b: &[usize]) -> bool { 
        self.cmp_degs(a, b).is_lt()
    }

    fn cmp_mono(&self, a: &Mono, b: &Mono) -> Ordering { 
        self.cmp_degs(a.degs(), b.degs())
    }
}

fn total(a: &[usize]) -> usize { 
    a.iter().sum()
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Lex;

impl TermOrder for Lex { 
    fn cmp_degs(&self, a: &[usize], b: &[usize]) -> Ordering {
        a.cmp(b)
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct DegLex;

impl TermOrder for DegLex { 
    fn cmp_degs(&self, a: &[usize], b: &[usize]) -> Ordering {
        total(a).cmp(&total(b)).then_with(|| 
            a.cmp(b)
        )
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct DegRevLex;

impl TermOrder for DegRevLex { 
    // on a tie, the one whose last differing exponent is larger is smaller.
    fn cmp_degs(&self, a: &[usize], b: &[usize]) -> Ordering {
        total(a).cmp(&total(b)).then_with(|| 
            if a.len() != b.len() { 
                b.len().cmp(&a.len())
            } else { 
                b.iter().rev().cmp(a.iter().rev())
            }
        )
    }
}

/// Runtime choice of a [`TermOrder`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MonoOrd { 
    #[default]
    #[display("lex")]
    Lex,
    #[display("deglex")]
    DegLex,
    #[display("degrevlex")]
    DegRevLex,
}

impl MonoOrd { 
    pub fn all() -> [MonoOrd; 3] { 
        [MonoOrd::Lex, MonoOrd::DegLex, MonoOrd::DegRevLex]
    }
}

impl TermOrder for MonoOrd { 
    fn cmp_degs(&self, a: &[usize], b: &[usize]) -> Ordering {
        match self { 
            MonoOrd::Lex       => Lex.cmp_degs(a, b),
            MonoOrd::DegLex    => DegLex.cmp_degs(a, b),
            MonoOrd::DegRevLex => DegRevLex.cmp_degs(a, b),
        }
    }
}

impl FromStr for MonoOrd {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all().into_iter().find(|o| 
            o.to_string().eq_ignore_ascii_case(s)
        ).ok_or_else(|| Error::Parse(s.to_string()))
    }
}
