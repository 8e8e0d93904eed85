#![allow(unused)]
use num_bigint::BigInt;
use log::*;
use grobner::{Ideal, MonoOrd, Poly, Ratio};
use grobner::io::{Parser, StrPrinter};

type R = Ratio<BigInt>;
type P = Poly<R>;

fn init_logger() { 
    grobner::util::log::init_simple_logger(LevelFilter::Info).ok();
}

fn parser() -> Parser { 
    Parser::new(["z", "y", "x"]).unwrap()
}

fn ideal(gens: &[&str], ord: MonoOrd) -> Ideal<R> { 
    let parser = parser();
    let gens = gens.iter().map(|s| parser.parse(s).unwrap());
    Ideal::new(gens, ord)
}

#[test]
fn membership() { 
    let parser = parser();
    let gens = ["x^2*y - x + 1", "-y^2*z + 1/3*x^3"];
    
    for ord in MonoOrd::all() { 
        let i = ideal(&gens, ord);
        let p: P = parser.parse("x^5 - 3*z*y*x + 3*z*y").unwrap();
        let q: P = parser.parse("x^5 - 3*z*y*x").unwrap();

        assert!(i.is_member(&p), "{ord}");
        assert!(!i.is_member(&q), "{ord}");
    }
}

#[test]
fn reduce_printed() { 
    let parser = parser();
    let mut printer = StrPrinter::new(parser.vars().clone());

    let i = ideal(&["x^2*y - x + 1", "-y^2*z + 1/3*x^3"], MonoOrd::Lex);
    let p: P = parser.parse("y^2*x^3").unwrap();
    let r = i.reduce(&p);

    assert_eq!(r.to_string_with(&mut printer, Some(&MonoOrd::Lex)), "-y*x + x - 1");
}

#[test]
fn big_coeffs() { 
    let parser = parser();
    let i = ideal(&["123456789123456789*x - 1"], MonoOrd::Lex);
    let p: P = parser.parse("123456789123456789*x*y - y").unwrap();

    assert!(i.is_member(&p));
    assert_eq!(i.reduce(&parser.parse("x").unwrap()), parser.parse("1/123456789123456789").unwrap());
}

#[test]
fn same_ideal_across_orderings() { 
    let gens = ["x*y - x", "x^2 - y", "z*x - y^2"];
    let i = ideal(&gens, MonoOrd::Lex);

    let mut j = i.clone();
    for ord in MonoOrd::all() { 
        j.set_ordering(ord).unwrap();
        assert_eq!(j.ordering(), ord);
        assert_eq!(i, j);
    }
}

// run test by:
// cargo test -r -- --exact [NAME] --nocapture --include-ignored

#[test]
#[ignore]
fn cyclic4() { 
    init_logger();

    let vars = ["a", "b", "c", "d"];
    let parser = Parser::new(vars).unwrap();
    let gens = [
        "a + b + c + d", 
        "a*b + b*c + c*d + d*a", 
        "a*b*c + b*c*d + c*d*a + d*a*b", 
        "a*b*c*d - 1"
    ].map(|s| parser.parse::<R>(s).unwrap());

    let i = Ideal::new(gens.clone(), MonoOrd::DegRevLex);
    info!("basis: {} elements", i.len());

    assert!(!i.is_whole());
    assert!(gens.iter().all(|g| i.is_member(g)));
}
