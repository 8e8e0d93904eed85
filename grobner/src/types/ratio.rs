use std::fmt::{Display, Debug};
use std::str::FromStr;
use std::sync::OnceLock;
use std::cmp;
use std::iter::{Sum, Product};
use std::ops::{Mul, Add, Sub, Neg, AddAssign, SubAssign, MulAssign, Div, DivAssign};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use regex::Regex;
use crate::{Elem, Mon, AddMon, AddGrp, AddMonOps, AddGrpOps, MonOps, RingOps, Ring, FieldOps, Field, Integer, IntOps, Error};

/// Exact rational number `numer / denom`, 
/// always kept in lowest terms with `denom > 0`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T> {
    #[inline]
    const fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }
}

impl<T> Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        assert!(!denom.is_zero(), "zero denominator");
        Self::new_unchecked(numer, denom)
    }

    pub fn try_new(numer: T, denom: T) -> Result<Ratio<T>, Error> {
        if denom.is_zero() { 
            return Err(Error::DivisionByZero)
        }
        Ok(Self::new_unchecked(numer, denom))
    }

    fn new_unchecked(numer: T, denom: T) -> Ratio<T> {
        let mut ret = Ratio::new_raw(numer, denom);
        ret.reduce();
        ret
    }

    fn reduce(&mut self) {
        if self.numer.is_zero() {
            if !self.denom.is_one() { 
                self.denom.set_one();
            }
            return;
        }

        let u = self.denom.normalizing_unit();

        if !u.is_one() { 
            self.numer *= &u;
            self.denom *= &u;
        }

        if self.denom.is_one() || self.numer.is_unit() { 
            return
        }

        let g = T::gcd(&self.numer, &self.denom);

        if !g.is_one() {
            self.numer /= &g;
            self.denom /= &g;
        }
    }

    pub fn from_numer(a: T) -> Self {
        Self::new_raw(a, T::one())
    }

    pub fn is_numer(&self) -> bool { 
        self.denom.is_one()
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> { 
        match rhs.inv() { 
            Some(inv) => Ok(self * inv),
            None => Err(Error::DivisionByZero)
        }
    }

    pub fn abs(&self) -> Self {
        if self.numer.is_negative() { 
            -self
        } else { 
            self.clone()
        }
    }
}

impl<T> From<i32> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

impl<T> From<(T, T)> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn from(pair: (T, T)) -> Self {
        let (p, q) = pair;
        Self::new(p, q)
    }
}

fn ratio_regex() -> &'static Regex { 
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| 
        Regex::new(r"^\s*(-?)\s*([0-9]+)\s*(?:/\s*([0-9]+)\s*)?$").unwrap()
    )
}

impl<T> FromStr for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::Parse(s.to_string());
        let c = ratio_regex().captures(s).ok_or_else(err)?;

        let mut a = c[2].parse::<T>().map_err(|_| err())?;
        if !c[1].is_empty() { 
            a = -a;
        }

        match c.get(3) { 
            Some(d) => { 
                let b = d.as_str().parse::<T>().map_err(|_| err())?;
                Self::try_new(a, b)
            },
            None => Ok(Self::from_numer(a))
        }
    }
}

impl<T> Default for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Display for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom.is_one() { 
            write!(f, "{}", self.numer)
        } else { 
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T> Debug for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T> Zero for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

macro_rules! impl_add_assign_op {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<T> $trait<&Ratio<T>> for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {
            fn $method(&mut self, rhs: &Ratio<T>) {
                let (c, d) = (&rhs.numer, &rhs.denom);
                
                if rhs.is_zero() { 
                    // nothing to do
                } else if self.is_zero() { 
                    self.numer.$method(c);  // 0 -> 0 ± c
                    self.denom = d.clone(); // 1 -> d
                } else if &self.denom == d { 
                    self.numer.$method(c);  // a/b -> (a ± c)/b
                    self.reduce()
                } else { 
                    let l = T::lcm(&self.denom, d); // l = xb = yd
                    self.numer *= &l / &self.denom; 
                    self.numer.$method((&l / d) * c);
                    self.denom = l;
                    self.reduce()
                }
            }
        }
    };
}

impl_add_assign_op!(AddAssign, add_assign);
impl_add_assign_op!(SubAssign, sub_assign);

impl<T> Neg for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-self.numer, self.denom)
    }
}

impl<T> Neg for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-&self.numer, self.denom.clone())
    }
}

#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        let (c, d) = (&rhs.numer, &rhs.denom);

        if self.is_zero() || rhs.is_one() { 
            // nothing to do
        } else if rhs.is_zero() { 
            self.set_zero();
        } else if rhs.is_numer() { 
            let k = T::gcd(&self.denom, c);  // b = kb', c = kc'
            self.numer *= c / &k;            // a -> a * c'
            self.denom /= &k;                // b -> b'
        } else if self.is_numer() { 
            let k = T::gcd(&self.numer, d);  // a = ka', d = kd'
            self.numer /= &k;                // a -> a' * c
            self.numer *= c;
            self.denom = d / &k;             // 1 -> d'
        } else {
            let k = T::gcd(&self.numer, d);  // a = ka', d = kd'
            let l = T::gcd(&self.denom, c);  // b = lb', c = lc'
            self.numer /= &k;                // a -> a' * c'
            self.numer *= c / &l;
            self.denom /= &l;                // b -> b' * d'
            self.denom *= d / &k;
        }
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        let Some(inv) = rhs.inv() else { 
            panic!("division by zero")
        };
        *self *= inv
    }
}

macro_rules! impl_accum {
    ($trait:ident, $method:ident, $accum_method:ident, $accum_init:ident) => {
        impl<T> $trait for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {
            fn $method<Iter: Iterator<Item = Self>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, r| { 
                    res.$accum_method(r);
                    res
                })
            }
        }

        impl<'a, T> $trait<&'a Ratio<T>> for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {
            fn $method<Iter: Iterator<Item = &'a Ratio<T>>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, r| { 
                    res.$accum_method(r);
                    res
                })
            }
        }
    }
}

impl_accum!(Sum, sum, add_assign, zero);
impl_accum!(Product, product, mul_assign, one);

macro_rules! decl_alg_ops {
    ($trait:ident) => {
        impl<T> $trait for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {}

        impl<T> $trait<Ratio<T>> for &Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {}
    };
}

decl_alg_ops!(AddMonOps);
decl_alg_ops!(AddGrpOps);
decl_alg_ops!(MonOps);
decl_alg_ops!(RingOps);
decl_alg_ops!(FieldOps);

impl<T> Elem for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn math_symbol() -> String {
        String::from("Q")
    }
}

impl<T> AddMon for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> AddGrp for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Mon for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Ring for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() { 
            None
        } else { 
            Some(Self::new_unchecked(self.denom.clone(), self.numer.clone()))
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<T> Field for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

// denominators are positive, so cross multiplication preserves the order.
impl<T> Ord for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        if self.denom == other.denom { 
            return self.numer.cmp(&other.numer)
        }
        let l = &self.numer * &other.denom;
        let r = &other.numer * &self.denom;
        l.cmp(&r)
    }
}

impl<T> PartialOrd for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Ratio<T>
where T: Display + One + PartialEq {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests { 
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn math_symbol() {
        assert_eq!(Ratio::<i32>::math_symbol(), "Q");
    }

    #[test]
    fn constants() {
        assert_eq!(Ratio::zero(), Ratio::new_raw(0, 1));
        assert_eq!(Ratio::one(),  Ratio::new_raw(1, 1));
        assert_eq!(Ratio::<i64>::default(), Ratio::zero());
    }

    #[test]
    fn normalize() {
        let a = Ratio::new(0, -4);
        assert_eq!((a.numer, a.denom), (0, 1));

        let a = Ratio::new(-3, 1);
        assert_eq!((a.numer, a.denom), (-3, 1));

        let a = Ratio::new(1, -3);
        assert_eq!((a.numer, a.denom), (-1, 3));

        let a = Ratio::new(6, -8);
        assert_eq!((a.numer, a.denom), (-3, 4));

        let a = Ratio::new(-12, -18);
        assert_eq!((a.numer, a.denom), (2, 3));
    }

    #[test]
    fn try_new() { 
        assert_eq!(Ratio::try_new(2, 4), Ok(Ratio::new(1, 2)));
        assert_eq!(Ratio::try_new(2, 0), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic]
    fn new_zero_denom() { 
        let _ = Ratio::new(1, 0);
    }

    #[test]
    fn display() {
        assert_eq!(Ratio::new(-3, 1).to_string(), "-3");
        assert_eq!(Ratio::new(-3, 4).to_string(), "-3/4");
        assert_eq!(Ratio::new(0, 7).to_string(), "0");
        assert_eq!(format!("{:?}", Ratio::new(6, 4)), "3/2");
    }

    #[test]
    fn from_str() { 
        assert_eq!("5".parse::<Ratio<i32>>(), Ok(Ratio::new(5, 1)));
        assert_eq!("-5".parse::<Ratio<i32>>(), Ok(Ratio::new(-5, 1)));
        assert_eq!("1/2".parse::<Ratio<i32>>(), Ok(Ratio::new(1, 2)));
        assert_eq!("-6/4".parse::<Ratio<i32>>(), Ok(Ratio::new(-3, 2)));
        assert_eq!(" 3 / 9 ".parse::<Ratio<i32>>(), Ok(Ratio::new(1, 3)));
    }

    #[test]
    fn from_str_err() { 
        assert_eq!("1/0".parse::<Ratio<i32>>(), Err(Error::DivisionByZero));
        assert_eq!("1/".parse::<Ratio<i32>>(), Err(Error::Parse("1/".into())));
        assert_eq!("a".parse::<Ratio<i32>>(), Err(Error::Parse("a".into())));
        assert_eq!("1/-2".parse::<Ratio<i32>>(), Err(Error::Parse("1/-2".into())));
    }

    #[test]
    fn from_str_bigint() { 
        let a = "123456789012345678901234567890/3".parse::<Ratio<BigInt>>().unwrap();
        let b = "41152263004115226300411522630".parse::<BigInt>().unwrap();
        assert_eq!(a, Ratio::from_numer(b));
    }

    #[test]
    fn add() { 
        let a = Ratio::new(1, 2);
        let b = Ratio::new(3, 5);
        assert_eq!(a + b, Ratio::new(11, 10));

        let a = Ratio::new(1, 2);
        let o = Ratio::zero();
        assert_eq!(&a + &o, a);
        assert_eq!(&o + &a, a);

        let a = Ratio::new(1, 3);
        let b = Ratio::new(2, 3);
        assert_eq!(a + b, Ratio::one());

        let a = Ratio::new(1, 6);
        let b = Ratio::new(1, 3);
        assert_eq!(a + b, Ratio::new(1, 2));

        let a = Ratio::new(1, 6);
        let b = Ratio::new(-1, 6);
        assert_eq!(a + b, Ratio::zero());
    }

    #[test]
    fn add_assign() { 
        let mut a = Ratio::new(1, 2);
        a += Ratio::new(3, 5);
        assert_eq!(a, Ratio::new(11, 10));
    }

    #[test]
    fn neg() { 
        let a = Ratio::new(1, 2);
        assert_eq!(-&a, Ratio::new(-1, 2));
        assert_eq!(-a, Ratio::new(-1, 2));
    }

    #[test]
    fn sub() { 
        let a = Ratio::new(1, 2);
        let b = Ratio::new(3, 5);
        assert_eq!(a - b, Ratio::new(-1, 10));

        let a = Ratio::new(1, 2);
        let o = Ratio::zero();
        assert_eq!(&a - &o, a);
        assert_eq!(&o - &a, -a);
    }

    #[test]
    fn mul() { 
        let a = Ratio::new(3, 10);
        let b = Ratio::new(-2, 7);
        assert_eq!(a * b, Ratio::new(-3, 35));

        let a = Ratio::new(3, 4);
        let e = -Ratio::one();
        assert_eq!(&a * &e, -&a);
        assert_eq!(&e * &a, -&a);

        let a = Ratio::new(3, 4);
        let o = Ratio::zero();
        assert_eq!(&a * &o, Ratio::zero());
        assert_eq!(&o * &a, Ratio::zero());

        let a = Ratio::new(1, 6);
        let b = Ratio::from(-4);
        assert_eq!(&a * &b, Ratio::new(-2, 3));
        assert_eq!(&b * &a, Ratio::new(-2, 3));
    }

    #[test]
    fn div() { 
        let a = Ratio::new(3, 10);
        let b = Ratio::new(2, 7);
        assert_eq!(&a / &b, Ratio::new(21, 20));
        assert_eq!(a.checked_div(&b), Ok(Ratio::new(21, 20)));
        assert_eq!(a.checked_div(&Ratio::zero()), Err(Error::DivisionByZero));

        let a = Ratio::new(1, 2);
        let b = Ratio::new(-1, 4);
        assert_eq!(a / b, Ratio::from(-2));
    }

    #[test]
    #[should_panic]
    fn div_by_zero() { 
        let _ = Ratio::new(3, 10) / Ratio::zero();
    }

    #[test]
    fn inv() { 
        let a = Ratio::new(-3, 10);
        assert_eq!(a.inv(), Some(Ratio::new(-10, 3)));

        let a = Ratio::<i32>::zero();
        assert_eq!(a.inv(), None);
    }

    #[test]
    fn normalizing_unit() { 
        let a = Ratio::new(-3, 10);
        assert_eq!(a.normalizing_unit(), Ratio::new(-10, 3));

        let a = Ratio::<i32>::zero();
        assert_eq!(a.normalizing_unit(), Ratio::one());
    }

    #[test]
    fn sum_product() { 
        let v = vec![Ratio::new(1, 2), Ratio::new(1, 3), Ratio::new(1, 6)];
        assert_eq!(v.iter().sum::<Ratio<i32>>(), Ratio::one());
        assert_eq!(v.into_iter().product::<Ratio<i32>>(), Ratio::new(1, 36));
    }

    #[test]
    fn cmp() { 
        assert!(Ratio::new(3, 5) > Ratio::new(4, 7));
        assert!(Ratio::new(-1, 2) < Ratio::new(-1, 3));
        assert!(Ratio::new(1, 3) == Ratio::new(2, 6));

        // too close for f64
        let n = 1i128 << 60;
        let a = Ratio::new(n - 1, n);
        let b = Ratio::new(n - 2, n - 1);
        assert!(a > b);
    }

    #[test]
    fn abs() { 
        assert_eq!(Ratio::new(-3, 4).abs(), Ratio::new(3, 4));
        assert_eq!(Ratio::new(3, 4).abs(), Ratio::new(3, 4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize() { 
        let a = Ratio::new(-3, 4);
        let ser = serde_json::to_string(&a).unwrap();
        assert_eq!(ser, "\"-3/4\"");
        let des: Ratio<i64> = serde_json::from_str(&ser).unwrap();
        assert_eq!(des, Ratio::new(-3, 4));
    }
}
