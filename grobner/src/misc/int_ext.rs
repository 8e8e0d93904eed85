use std::ops::{Div, DivAssign, Rem};
use std::str::FromStr;
use num_bigint::BigInt;
use num_traits::{One, Signed};
use crate::*;

// Integral types that can sit under `Ratio`. 

pub trait IntOps<T = Self>: 
    RingOps<T> + 
    Div<T, Output = T> + 
    for<'a> Div<&'a T, Output = T> + 
    Rem<T, Output = T> + 
    for<'a> Rem<&'a T, Output = T>
{}

pub trait Integer: 
    Ring + 
    IntOps + 
    DivAssign + 
    for<'a> DivAssign<&'a Self> + 
    Signed + 
    Ord + 
    FromStr
where 
    for<'a> &'a Self: IntOps<Self> 
{
    fn gcd(x: &Self, y: &Self) -> Self;
    fn lcm(x: &Self, y: &Self) -> Self;

    fn divides(&self, y: &Self) -> bool { 
        if self.is_zero() { 
            y.is_zero()
        } else { 
            (y % self).is_zero()
        }
    }
}

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_integer {
    ($type:ident) => {
        impl_ops!(AddMonOps, $type);
        impl_ops!(AddGrpOps, $type);
        impl_ops!(MonOps, $type);
        impl_ops!(RingOps, $type);
        impl_ops!(IntOps, $type);

        impl Elem for $type {
            fn math_symbol() -> String { 
                String::from("Z")
            }
        }
        
        impl AddMon for $type {}
        impl AddGrp for $type {}
        impl Mon for $type {}
        impl Ring for $type {
            fn inv(&self) -> Option<Self> {
                if self.is_unit() { 
                    Some(self.clone())
                } else { 
                    None
                }
            }
        
            fn is_unit(&self) -> bool {
                self.is_pm_one()
            }
        
            fn normalizing_unit(&self) -> Self {
                if self.is_negative() { 
                    -Self::one() 
                } else { 
                    Self::one() 
                }
            }
        }

        impl Integer for $type {
            fn gcd(x: &Self, y: &Self) -> Self {
                num_integer::Integer::gcd(x, y)
            }

            fn lcm(x: &Self, y: &Self) -> Self {
                num_integer::Integer::lcm(x, y)
            }
        }
    }
}

impl_integer!(i32);
impl_integer!(i64);
impl_integer!(i128);
impl_integer!(BigInt);

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn check_type() {
        fn check<T>() where T: Integer, for<'a> &'a T: IntOps<T> {}
        check::<i32>();
        check::<i64>();
        check::<i128>();
        check::<BigInt>();
    }

    #[test]
    fn int_inv() { 
        assert_eq!(1.inv(), Some(1));
        assert_eq!((-1).inv(), Some(-1));
        assert_eq!(2.inv(), None);
        assert_eq!(0.inv(), None);
    }

    #[test]
    fn int_normalizing_unit() { 
        assert_eq!(1.normalizing_unit(), 1);
        assert_eq!((-3).normalizing_unit(), -1);
        assert_eq!(0.normalizing_unit(), 1);
    }

    #[test]
    fn int_divides() {
        assert!(2.divides(&4));
        assert!(!3.divides(&4));
        assert!(!0.divides(&1));
        assert!(0.divides(&0));
    }

    #[test]
    fn gcd_lcm() {
        assert_eq!(i64::gcd(&240, &46), 2);
        assert_eq!(i64::gcd(&0, &-24), 24);
        assert_eq!(i64::gcd(&0, &0), 0);
        assert_eq!(i64::lcm(&4, &6), 12);
        assert_eq!(i64::lcm(&-4, &6), 12);
    }

    #[test]
    fn gcd_bigint() {
        let a = BigInt::from(2).pow(80u32) * 3;
        let b = BigInt::from(2).pow(70u32) * 5;
        assert_eq!(BigInt::gcd(&a, &b), BigInt::from(2).pow(70u32));
    }
}
