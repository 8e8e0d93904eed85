use std::collections::BTreeMap;
use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg, Div, DivAssign};
use delegate::delegate;
use itertools::Itertools;
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps, Field, FieldOps, Error};
use crate::io::{Printer, StrPrinter};
use super::{Mono, TermOrder, Lex};

/// A polynomial over a field `R`: a finite map `Mono -> R` without zero coefficients.
/// 
/// Terms are stored in the derived (lexicographic) order of `Mono`. 
/// Everything that depends on a monomial ordering takes it as an argument.
#[derive(Clone, PartialEq, Eq)]
pub struct Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    data: BTreeMap<Mono, R>,
    zero: R
}

impl<R> Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn new(mut data: BTreeMap<Mono, R>) -> Self { 
        data.retain(|_, r| !r.is_zero());
        Self::new_reduced(data)
    }

    fn new_reduced(data: BTreeMap<Mono, R>) -> Self { 
        Self { data, zero: R::zero() }
    }

    pub fn from_const(r: R) -> Self {
        Self::from((Mono::one(), r))
    }

    pub fn variable(i: usize) -> Self { 
        Self::from(Mono::var(i))
    }

    delegate! { 
        to self.data {
            #[call(len)]
            pub fn nterms(&self) -> usize;
            pub fn iter(&self) -> impl Iterator<Item = (&Mono, &R)>;
        }
    }

    pub fn coeff(&self, x: &Mono) -> &R {
        self.data.get(x).unwrap_or(&self.zero)
    }

    /// The single term `(x, r)`, if there is exactly one.
    pub fn as_term(&self) -> Option<(&Mono, &R)> { 
        if self.nterms() == 1 { 
            self.data.iter().next()
        } else { 
            None
        }
    }

    pub fn is_term(&self) -> bool { 
        self.as_term().is_some()
    }

    pub fn as_mono(&self) -> Option<&Mono> { 
        self.as_term().filter(|(_, r)| r.is_one()).map(|(x, _)| x)
    }

    pub fn is_mono(&self) -> bool { 
        self.as_mono().is_some()
    }

    pub fn is_const(&self) -> bool { 
        self.iter().all(|(x, _)| x.is_one())
    }

    pub fn const_term(&self) -> &R { 
        self.coeff(&Mono::one())
    }

    pub fn lead_pair<O>(&self, ord: &O) -> Option<(&Mono, &R)>
    where O: TermOrder + ?Sized { 
        self.iter().max_by(|(x, _), (y, _)| ord.cmp_mono(x, y))
    }

    pub fn lead_mono<O>(&self, ord: &O) -> Result<&Mono, Error>
    where O: TermOrder + ?Sized { 
        self.lead_pair(ord).map(|(x, _)| x).ok_or(Error::UndefinedLeadingTerm)
    }

    pub fn lead_coeff<O>(&self, ord: &O) -> &R
    where O: TermOrder + ?Sized { 
        self.lead_pair(ord).map(|(_, r)| r).unwrap_or(&self.zero)
    }

    pub fn lead_term<O>(&self, ord: &O) -> Self
    where O: TermOrder + ?Sized { 
        match self.lead_pair(ord) { 
            Some((x, r)) => Self::from((x.clone(), r.clone())),
            None => Self::zero()
        }
    }

    /// Terms sorted in descending order w.r.t. `ord`.
    pub fn sorted_terms<O>(&self, ord: &O) -> Vec<(&Mono, &R)>
    where O: TermOrder + ?Sized { 
        self.iter().sorted_by(|(x, _), (y, _)| ord.cmp_mono(y, x)).collect()
    }

    /// Multiplies by the single term `r * x`.
    pub fn mul_term(&self, x: &Mono, r: &R) -> Self { 
        if r.is_zero() { 
            return Self::zero()
        }
        let data = self.iter().map(|(y, a)| (x * y, a * r)).collect();
        Self::new_reduced(data)
    }

    pub fn try_div(&self, rhs: &Self) -> Result<Self, Error> { 
        let (x, r) = rhs.as_term().ok_or(Error::NotAMonomial)?;
        self.iter().map(|(y, a)| 
            Ok((y.try_div(x)?, a / r))
        ).collect()
    }

    pub fn is_divisible_by(&self, rhs: &Self) -> bool { 
        match rhs.as_term() { 
            Some((x, _)) => self.iter().all(|(y, _)| y.is_divisible_by(x)),
            None => false
        }
    }

    pub fn pow(&self, n: i32) -> Result<Self, Error> { 
        if n < 0 { 
            return Err(Error::NegativeExponent(n))
        }
        if let Some(x) = self.as_mono() { 
            return x.pow(n).map(Self::from)
        }
        Ok(self.pow_rec(n as u32))
    }

    fn pow_rec(&self, n: u32) -> Self { 
        if n == 0 { 
            return Self::one()
        }
        let h = self.pow_rec(n / 2);
        let mut res = &h * &h;
        if n % 2 == 1 { 
            res *= self;
        }
        res
    }

    /// Renders through `printer`, leading term first if `ord` is given,
    /// otherwise in descending lexicographic order.
    pub fn to_string_with<P>(&self, printer: &mut P, ord: Option<&dyn TermOrder>) -> String
    where P: Printer<R> { 
        match ord { 
            Some(ord) => for (x, r) in self.sorted_terms(ord) { 
                printer.add_term(r, x)
            },
            None => for (x, r) in self.data.iter().rev() { 
                printer.add_term(r, x)
            }
        }
        printer.print()
    }

    /// Divides all coefficients by the leading coefficient.
    pub fn into_monic<O>(self, ord: &O) -> Self
    where O: TermOrder + ?Sized { 
        match self.lead_coeff(ord).inv() { 
            Some(u) if !u.is_one() => self * u,
            _ => self
        }
    }
}

impl<R> Default for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R> From<Mono> for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn from(x: Mono) -> Self {
        Self::from((x, R::one()))
    }
}

impl<R> From<(Mono, R)> for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn from(pair: (Mono, R)) -> Self {
        Self::new(BTreeMap::from([pair]))
    }
}

impl<R> From<i32> for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn from(i: i32) -> Self {
        Self::from_const(R::from(i))
    }
}

impl<R> FromIterator<(Mono, R)> for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn from_iter<T: IntoIterator<Item = (Mono, R)>>(iter: T) -> Self {
        let mut data = BTreeMap::new();
        for (x, r) in iter { 
            *data.entry(x).or_insert_with(R::zero) += r;
        }
        Self::new(data)
    }
}

impl<R> IntoIterator for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Item = (Mono, R);
    type IntoIter = std::collections::btree_map::IntoIter<Mono, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<R> Display for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.to_string_with(&mut StrPrinter::default(), None);
        f.write_str(&s)
    }
}

impl<R> Debug for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Zero for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn zero() -> Self {
        Self::new_reduced(BTreeMap::new())
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<R> One for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        self.is_const() && self.const_term().is_one()
    }
}

impl<R> Neg for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        let data = self.data.into_iter().map(|(x, r)| (x, -r)).collect();
        Self::new_reduced(data)
    }
}

impl<R> Neg for &Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = Poly<R>;
    fn neg(self) -> Self::Output {
        let data = self.iter().map(|(x, r)| (x.clone(), -r)).collect();
        Poly::new_reduced(data)
    }
}

macro_rules! impl_assop {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<R> $trait<&Poly<R>> for Poly<R>
        where R: Field, for<'x> &'x R: FieldOps<R> {
            fn $method(&mut self, rhs: &Poly<R>) {
                for (x, r) in rhs.iter() { 
                    let a = self.data.entry(x.clone()).or_insert_with(R::zero);
                    a.$method(r);
                    if a.is_zero() { 
                        self.data.remove(x);
                    }
                }
            }
        }
    };
}

impl_assop!(AddAssign, add_assign);
impl_assop!(SubAssign, sub_assign);

#[auto_ops]
impl<R> MulAssign<&R> for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        if rhs.is_zero() { 
            self.data.clear();
        } else if !rhs.is_one() { 
            for r in self.data.values_mut() { 
                *r *= rhs;
            }
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&Poly<R>> for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn mul_assign(&mut self, rhs: &Poly<R>) {
        if rhs.is_one() {
            // nothing to do
        } else if rhs.is_const() { 
            *self *= rhs.const_term()
        } else if self.is_const() { 
            *self = rhs * self.const_term()
        } else { 
            let prod = self.data.iter().cartesian_product(rhs.data.iter()).map(|((x, a), (y, b))| 
                (x * y, a * b)
            );
            *self = Self::from_iter(prod)
        }
    }
}

#[auto_ops]
impl<R> DivAssign<&Poly<R>> for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn div_assign(&mut self, rhs: &Poly<R>) {
        match self.try_div(rhs) { 
            Ok(q) => *self = q,
            Err(e) => panic!("cannot divide {self} by {rhs}: {e}")
        }
    }
}

macro_rules! impl_alg_op {
    ($trait:ident) => {
        impl<R> $trait<Self> for Poly<R>
        where R: Field, for<'x> &'x R: FieldOps<R> {}

        impl<R> $trait<Poly<R>> for &Poly<R>
        where R: Field, for<'x> &'x R: FieldOps<R> {}
    };
}

impl_alg_op!(AddMonOps);
impl_alg_op!(AddGrpOps);
impl_alg_op!(MonOps);
impl_alg_op!(RingOps);

impl<R> Elem for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn math_symbol() -> String {
        format!("{}[x]", R::math_symbol())
    }
}

impl<R> AddMon for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> AddGrp for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> Mon for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> Ring for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn inv(&self) -> Option<Self> {
        if self.is_const() { 
            self.const_term().inv().map(Self::from_const)
        } else { 
            None
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero() && self.is_const()
    }

    fn normalizing_unit(&self) -> Self {
        let u = self.lead_coeff(&Lex).normalizing_unit();
        Self::from_const(u)
    }
}

#[cfg(feature = "serde")]
impl<R> serde::Serialize for Poly<R>
where R: Field + serde::Serialize, for<'x> &'x R: FieldOps<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.nterms()))?;
        for t in self.iter() { 
            seq.serialize_element(&t)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, R> serde::Deserialize<'de> for Poly<R>
where R: Field + serde::Deserialize<'de>, for<'x> &'x R: FieldOps<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let seq: Vec<(Mono, R)> = Vec::deserialize(deserializer)?;
        Ok(Self::from_iter(seq))
    }
}
