use std::collections::VecDeque;
use log::{debug, trace};
use num_traits::Zero;
use crate::{Field, FieldOps, Poly, TermOrder};

/// `(L / LT(f)) * f - (L / LT(g)) * g` with `L = lcm(LM(f), LM(g))`. 
/// Zero if either side is zero.
pub fn s_poly<R, O>(f: &Poly<R>, g: &Poly<R>, ord: &O) -> Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R>, O: TermOrder + ?Sized { 
    let (Some((x, a)), Some((y, b))) = (f.lead_pair(ord), g.lead_pair(ord)) else { 
        return Poly::zero()
    };

    let l = x.lcm(y);
    let u = f.mul_term(&(&l / x), &(R::one() / a));
    let v = g.mul_term(&(&l / y), &(R::one() / b));

    u - v
}

/// Multivariate division of `p` by `basis`, returning the remainder.
/// 
/// The leading term is cancelled by the first element whose leading monomial 
/// divides it. If there is none, the term moves to the remainder. 
pub fn reduce_by<R, O>(p: &Poly<R>, basis: &[Poly<R>], ord: &O) -> Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R>, O: TermOrder + ?Sized { 
    let mut p = p.clone();
    let mut rem = Poly::zero();

    while let Some((x, a)) = p.lead_pair(ord) { 
        let step = basis.iter().find_map(|g| { 
            let (y, b) = g.lead_pair(ord)?;
            let q = x.try_div(y).ok()?;
            Some((g, q, a / b))
        });

        match step { 
            Some((g, q, c)) => {
                trace!("  {p} -= ({c})*{q} * ({g})");
                p -= g.mul_term(&q, &c);
            },
            None => { 
                let t = Poly::from((x.clone(), a.clone()));
                trace!("  {t} -> remainder");
                p -= &t;
                rem += t;
            }
        }
    }

    rem
}

/// Buchberger's algorithm: extends `gens` until every S-polynomial 
/// reduces to zero. Pairs are processed first-in first-out.
pub fn buchberger<R, O>(gens: Vec<Poly<R>>, ord: &O) -> Vec<Poly<R>>
where R: Field, for<'x> &'x R: FieldOps<R>, O: TermOrder + ?Sized { 
    let mut basis = gens;
    let mut queue: VecDeque<(usize, usize)> = (0..basis.len()).flat_map(|j| 
        (0..j).map(move |i| (i, j))
    ).collect();

    debug!("buchberger: {} gens, {} pairs", basis.len(), queue.len());

    while let Some((i, j)) = queue.pop_front() { 
        let s = s_poly(&basis[i], &basis[j], ord);
        let h = reduce_by(&s, &basis, ord);

        if h.is_zero() { 
            continue
        }

        debug!("  ({i}, {j}) -> new element [{}]: {h}", basis.len());

        let k = basis.len();
        queue.extend((0..k).map(|i| (i, k)));
        basis.push(h);
    }

    debug!("buchberger: {} elements", basis.len());

    basis
}

/// Removes every element whose leading monomial is divisible by 
/// that of another element, then makes the survivors monic.
pub fn minimize<R, O>(basis: &mut Vec<Poly<R>>, ord: &O)
where R: Field, for<'x> &'x R: FieldOps<R>, O: TermOrder + ?Sized { 
    let mut i = 0;

    while i < basis.len() { 
        let redundant = match basis[i].lead_pair(ord) { 
            Some((x, _)) => basis.iter().enumerate().any(|(j, g)| 
                j != i && g.lead_pair(ord).is_some_and(|(y, _)| x.is_divisible_by(y))
            ),
            None => true
        };

        if redundant { 
            trace!("  remove [{i}]: {}", basis[i]);
            basis.remove(i); // rescan the element moved into `i`
        } else { 
            i += 1;
        }
    }

    for g in basis.iter_mut() { 
        let h = std::mem::take(g);
        *g = h.into_monic(ord);
    }

    debug!("minimize: {} elements", basis.len());
}

/// Replaces each element, in order, by its remainder modulo the others.
pub fn reduce_basis<R, O>(basis: &mut Vec<Poly<R>>, ord: &O)
where R: Field, for<'x> &'x R: FieldOps<R>, O: TermOrder + ?Sized { 
    for i in 0..basis.len() { 
        let g = basis.remove(i);
        let h = reduce_by(&g, basis, ord);
        basis.insert(i, h);
    }
}
