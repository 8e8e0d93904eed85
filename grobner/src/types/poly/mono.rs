use std::fmt::Display;
use std::ops::{Mul, MulAssign, Div, DivAssign};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::{Itertools, EitherOrBoth};
use num_traits::One;
use crate::Error;

/// A power product `x0^d0 * x1^d1 * ...`, 
/// stored as the exponent sequence without trailing zeros.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Mono { 
    degs: Vec<usize>
}

impl Mono { 
    fn new_reduced(mut degs: Vec<usize>) -> Self { 
        while degs.last() == Some(&0) { 
            degs.pop();
        }
        Self { degs }
    }

    pub fn var(i: usize) -> Self { 
        let mut degs = vec![0; i + 1];
        degs[i] = 1;
        Self { degs }
    }

    pub fn degs(&self) -> &[usize] { 
        &self.degs
    }

    delegate! { 
        to self.degs { 
            #[call(len)]
            pub fn nvars(&self) -> usize;
        }
    }

    pub fn deg_for(&self, i: usize) -> usize { 
        self.degs.get(i).cloned().unwrap_or(0)
    }

    pub fn total_deg(&self) -> usize { 
        self.degs.iter().sum()
    }

    pub fn pow(&self, n: i32) -> Result<Self, Error> { 
        if n < 0 { 
            return Err(Error::NegativeExponent(n))
        }
        let n = n as usize;
        let degs = self.degs.iter().map(|d| d * n).collect();
        Ok(Self::new_reduced(degs))
    }

    pub fn try_div(&self, rhs: &Self) -> Result<Self, Error> { 
        if !self.is_divisible_by(rhs) { 
            return Err(Error::NotDivisible)
        }
        let mut res = self.clone();
        res /= rhs;
        Ok(res)
    }

    pub fn is_divisible_by(&self, rhs: &Self) -> bool { 
        rhs.degs.len() <= self.degs.len() && 
        rhs.degs.iter().zip(self.degs.iter()).all(|(b, a)| b <= a)
    }

    pub fn divides(&self, rhs: &Self) -> bool { 
        rhs.is_divisible_by(self)
    }

    pub fn lcm(&self, rhs: &Self) -> Self { 
        let degs = self.degs.iter().zip_longest(rhs.degs.iter()).map(|e| 
            match e { 
                EitherOrBoth::Both(a, b) => usize::max(*a, *b),
                EitherOrBoth::Left(a) | EitherOrBoth::Right(a) => *a
            }
        ).collect();
        Self { degs } // no trailing zeros on either side
    }
}

impl<const N: usize> From<[usize; N]> for Mono {
    fn from(degs: [usize; N]) -> Self {
        Self::new_reduced(degs.to_vec())
    }
}

impl From<Vec<usize>> for Mono {
    fn from(degs: Vec<usize>) -> Self {
        Self::new_reduced(degs)
    }
}

impl From<Mono> for Vec<usize> {
    fn from(m: Mono) -> Self {
        m.degs
    }
}

impl FromIterator<usize> for Mono {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::new_reduced(iter.into_iter().collect())
    }
}

impl One for Mono { 
    fn one() -> Self {
        Self { degs: vec![] }
    }

    fn is_one(&self) -> bool {
        self.degs.is_empty()
    }
}

#[auto_ops]
impl MulAssign<&Mono> for Mono {
    fn mul_assign(&mut self, rhs: &Mono) {
        if self.degs.len() < rhs.degs.len() { 
            self.degs.resize(rhs.degs.len(), 0);
        }
        for (a, b) in self.degs.iter_mut().zip(rhs.degs.iter()) { 
            *a += b;
        }
    }
}

#[auto_ops]
impl DivAssign<&Mono> for Mono {
    fn div_assign(&mut self, rhs: &Mono) {
        assert!(self.is_divisible_by(rhs), "{self} is not divisible by {rhs}");
        for (a, b) in self.degs.iter_mut().zip(rhs.degs.iter()) { 
            *a -= b;
        }
        while self.degs.last() == Some(&0) { 
            self.degs.pop();
        }
    }
}

impl Display for Mono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one() { 
            return write!(f, "1")
        }
        let s = self.degs.iter().enumerate().filter(|(_, d)| **d > 0).map(|(i, &d)| 
            if d == 1 { 
                format!("x{}", i + 1)
            } else { 
                format!("x{}^{d}", i + 1)
            }
        ).join("*");
        write!(f, "{s}")
    }
}
