use std::fmt::Display;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

/// Joins `(x, r)` pairs into `r*x ± r*x ...`, 
/// eliding unit coefficients and the unit monomial `1`.
pub fn lc<X, R, S>(mut terms: S) -> String
where 
    X: Display, 
    R: Display, 
    S: Iterator<Item = (X, R)>
{ 
    fn term(x: String, r: String) -> String { 
        if r == "1" { 
            x
        } else if x == "1" { 
            r
        } else { 
            format!("{r}*{x}")
        }
    }

    let mut res: Vec<String> = vec![];
    
    if let Some((x, r)) = terms.next() {
        let (x, r) = (x.to_string(), paren_expr(r));
        let t = if r == "-1" && x != "1" { 
            format!("-{x}")
        } else { 
            term(x, r)
        };
        res.push(t)
    };

    for (x, r) in terms {
        let (x, r) = (x.to_string(), paren_expr(r));

        let (op, r) = if let Some(r) = r.strip_prefix('-') { 
            ("-", r.to_owned()) 
        } else { 
            ("+", r)
        };

        res.push(op.to_string());
        res.push(term(x, r));
    }

    res.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_expr() { 
        assert_eq!(paren_expr("-3/2"), "-3/2");
        assert_eq!(paren_expr("1 + i"), "(1 + i)");
    }

    #[test]
    fn test_lc() { 
        let terms = [("x^2", "-5"), ("y", "-3/2"), ("1", "1/2")];
        assert_eq!(lc(terms.into_iter()), "-5*x^2 - 3/2*y + 1/2");

        let terms = [("x", "-1"), ("y", "1"), ("1", "-1")];
        assert_eq!(lc(terms.into_iter()), "-x + y - 1");

        let terms = [("1", "-1")];
        assert_eq!(lc(terms.into_iter()), "-1");

        let terms = [("x", "1 + i")];
        assert_eq!(lc(terms.into_iter()), "(1 + i)*x");
    }

    #[test]
    fn test_lc_empty() { 
        let terms: [(&str, &str); 0] = [];
        assert_eq!(lc(terms.into_iter()), "");
    }
}
