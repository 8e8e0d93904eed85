use std::fmt::{Debug, Display};
use itertools::Itertools;
use log::info;
use num_traits::{One, Zero};
use crate::{Error, Field, FieldOps, MonoOrd, Poly, TermOrder};
use crate::io::{Printer, StrPrinter};
use super::{buchberger, minimize, reduce_basis, reduce_by};

/// A polynomial ideal, held as its reduced Gröbner basis 
/// under the active monomial ordering.
#[derive(Clone)]
pub struct Ideal<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    basis: Vec<Poly<R>>,
    ord: MonoOrd
}

impl<R> Ideal<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    pub fn new<I>(gens: I, ord: MonoOrd) -> Self
    where I: IntoIterator<Item = Poly<R>> { 
        let gens = gens.into_iter().filter(|f| !f.is_zero()).collect();
        let basis = Self::compute(gens, ord);
        Self { basis, ord }
    }

    fn compute(gens: Vec<Poly<R>>, ord: MonoOrd) -> Vec<Poly<R>> { 
        info!("compute basis ({ord}), {} gens.", gens.len());

        let mut basis = buchberger(gens, &ord);
        minimize(&mut basis, &ord);
        reduce_basis(&mut basis, &ord);

        info!("basis: {} elements.", basis.len());

        basis
    }

    pub fn basis(&self) -> &[Poly<R>] { 
        &self.basis
    }

    pub fn ordering(&self) -> MonoOrd { 
        self.ord
    }

    /// Switches the ordering and recomputes the basis from the current one.
    /// Fails with `NullOrdering` on `None`, leaving `self` unchanged.
    pub fn set_ordering<O>(&mut self, ord: O) -> Result<(), Error>
    where O: Into<Option<MonoOrd>> { 
        let ord = ord.into().ok_or(Error::NullOrdering)?;
        let basis = Self::compute(self.basis.clone(), ord);

        // assigned together, so a panic above leaves `self` intact.
        self.basis = basis;
        self.ord = ord;
        Ok(())
    }

    pub fn len(&self) -> usize { 
        self.basis.len()
    }

    pub fn is_zero(&self) -> bool { 
        self.basis.is_empty()
    }

    pub fn is_whole(&self) -> bool { 
        self.basis.len() == 1 && self.basis[0].is_one()
    }

    /// The normal form of `p` modulo `self`.
    pub fn reduce(&self, p: &Poly<R>) -> Poly<R> { 
        reduce_by(p, &self.basis, &self.ord)
    }

    pub fn is_member(&self, p: &Poly<R>) -> bool { 
        self.reduce(p).is_zero()
    }

    pub fn contains(&self, other: &Self) -> bool { 
        other.basis.iter().all(|g| self.is_member(g))
    }

    pub fn to_string_with<P>(&self, printer: &mut P) -> String
    where P: Printer<R> { 
        let ord: &dyn TermOrder = &self.ord;
        let gens = self.basis.iter().map(|g| 
            g.to_string_with(printer, Some(ord))
        ).join(" , ");
        format!("( {gens} )")
    }
}

impl<R> Default for Ideal<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn default() -> Self {
        Self::new([], MonoOrd::default())
    }
}

impl<R> FromIterator<Poly<R>> for Ideal<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn from_iter<T: IntoIterator<Item = Poly<R>>>(iter: T) -> Self {
        Self::new(iter, MonoOrd::default())
    }
}

// Equal as sets, regardless of the ordering.
impl<R> PartialEq for Ideal<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn eq(&self, other: &Self) -> bool {
        self.contains(other) && other.contains(self)
    }
}

impl<R> Eq for Ideal<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> Display for Ideal<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.to_string_with(&mut StrPrinter::default());
        f.write_str(&s)
    }
}

impl<R> Debug for Ideal<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
