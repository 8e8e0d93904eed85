use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use num_traits::Zero;
use crate::Elem;

// Additive monoids

pub trait AddMonOps<T = Self>: 
    Sized + 
    Add<T, Output = T> +              // S + T -> T
    for<'a> Add<&'a T, Output = T>    // S + &T -> T
{}

pub trait AddMon: 
    Elem + 
    Zero +
    AddMonOps +                       // T + T -> T, T + &T -> T
    AddAssign +                       // T += T
    for<'a> AddAssign<&'a Self>       // T += &T
where 
    for<'a> &'a Self: AddMonOps<Self> // &T + T -> T, &T + &T -> T
{
    fn sum<A, I>(itr: I) -> Self 
    where 
        Self: AddAssign<A>,
        I: IntoIterator<Item = A> 
    { 
        itr.into_iter().fold(Self::zero(), |mut res, a| { 
            res += a;
            res
        })
    }
}

// Additive groups

pub trait AddGrpOps<T = Self>: 
    AddMonOps<T> + 
    Neg<Output = T> + 
    Sub<T, Output = T> +
    for<'a> Sub<&'a T, Output = T> 
{}

pub trait AddGrp: 
    AddMon + 
    AddGrpOps + 
    SubAssign + 
    for<'a> SubAssign<&'a Self>
where 
    for<'a> &'a Self: AddGrpOps<Self>
{}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn sum() { 
        let a = i64::sum([4, 5, 6]);
        assert_eq!(a, 15);
    }

    #[test]
    fn sum_refs() { 
        let v = vec![1i64, -2, 7];
        let a = i64::sum(v.iter());
        assert_eq!(a, 6);
    }
}
