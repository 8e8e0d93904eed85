use std::ops::{Div, DivAssign, Mul, MulAssign};
use num_traits::One;
use crate::{AddGrp, AddGrpOps, Elem};

// Monoids (multiplicative)

pub trait MonOps<T = Self>: 
    Sized + 
    Mul<T, Output = T> + 
    for<'a> Mul<&'a T, Output = T> 
{}

pub trait Mon: 
    Elem + 
    One +
    MonOps + 
    MulAssign + 
    for<'a> MulAssign<&'a Self>
where
    for<'a> &'a Self: MonOps<Self>
{
    fn product<A, I>(itr: I) -> Self 
    where 
        Self: MulAssign<A>,
        I: IntoIterator<Item = A> 
    { 
        itr.into_iter().fold(Self::one(), |mut res, a| { 
            res *= a;
            res
        })
    }
}

// Rings 

pub trait RingOps<T = Self>: 
    AddGrpOps<T> + 
    MonOps<T>
{}

pub trait Ring: 
    AddGrp + 
    Mon + 
    RingOps + 
    From<i32>
where 
    for<'a> &'a Self: RingOps<Self>
{
    fn inv(&self) -> Option<Self>;
    fn is_unit(&self) -> bool;
    fn normalizing_unit(&self) -> Self;

    fn is_pm_one(&self) -> bool { 
        self.is_one() || (-self).is_one()
    }
}

// Fields: exact division by any nonzero element.

pub trait FieldOps<T = Self>: 
    RingOps<T> + 
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T>
{}

pub trait Field: 
    Ring + 
    FieldOps + 
    DivAssign +
    for<'a> DivAssign<&'a Self>
where 
    for<'a> &'a Self: FieldOps<Self> 
{}

#[cfg(test)]
mod tests {
    use crate::{Mon, Ring, Ratio};
 
    #[test]
    fn is_pm_one() { 
        assert!(1.is_pm_one());
        assert!((-1).is_pm_one());
        assert!(!2.is_pm_one());
        assert!(!(-2).is_pm_one());
    }

    #[test]
    fn product() { 
        let a = i64::product([4, 5, 6]);
        assert_eq!(a, 120);
    }

    #[test]
    fn field_inv() { 
        let a = Ratio::new(-3, 4);
        assert_eq!(a.inv(), Some(Ratio::new(-4, 3)));
        assert_eq!(&a * a.inv().unwrap(), Ratio::from(1));
    }
}
