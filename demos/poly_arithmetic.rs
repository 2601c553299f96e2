//! Polynomial Arithmetic
//!
//! This example demonstrates `Polynomial<T>` operations including:
//! - Sparse construction and rendering
//! - Basic arithmetic (add, sub, mul, scalar mul)
//! - Composition and evaluation
//! - Division with remainder and GCD over the rationals
//!
//! Run with: cargo run --example poly_arithmetic
//! (set `SPOLY_TRACE=1` to see the division and gcd steps)

use num_rational::Rational64;
use spoly::{PolyError, Polynomial};

type PZ = Polynomial<i64>;
type PQ = Polynomial<Rational64>;

fn main() -> Result<(), PolyError> {
    if std::env::var_os("SPOLY_TRACE").is_some() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    }

    println!("=== Sparse Polynomial Arithmetic ===\n");

    basic_operations();
    composition_and_eval();
    division_and_gcd()?;

    Ok(())
}

/// Demonstrate construction and basic operations
fn basic_operations() {
    println!("--- Basic Operations ---\n");

    // p(x) = 1 + 2x - x^3, q(x) = 1 + x
    let p = PZ::new(vec![1, 2, 0, -1]);
    let q = PZ::new(vec![1, 1]);

    println!("p(x) = {}", p);
    println!("q(x) = {}", q);
    println!("degree(p) = {:?}", p.degree());
    println!("degree(q) = {:?}", q.degree());
    println!();

    println!("p + q = {}", &p + &q);
    println!("p - q = {}", &p - &q);
    println!("p * q = {}", &p * &q);
    println!("3 * p = {}", p.clone() * 3i64);
    println!("q^4   = {}", q.pow(4));

    // Sparse terms never materialize the gaps
    let sparse = PZ::from_terms([(1_000, 1), (500, -2), (0, 7)]);
    println!("\nSparse: {}  ({} stored terms)", sparse, sparse.len());

    println!("\nSpecial polynomials:");
    println!("  zero = {}", PZ::zero());
    println!("  x = {}", PZ::x());
    println!("  constant(5) = {}", PZ::constant(5));
    println!("  monomial(3, 2) = {}", PZ::monomial(3, 2));
    println!();
}

/// Demonstrate composition and Horner evaluation
fn composition_and_eval() {
    println!("--- Composition and Evaluation ---\n");

    let outer = PZ::new(vec![1, 0, 1]); // x^2 + 1
    let inner = PZ::new(vec![-1, 2]); // 2x - 1
    let composed = outer.compose(&inner);

    println!("f(x) = {}", outer);
    println!("g(x) = {}", inner);
    println!("f(g(x)) = {}", composed);
    println!();

    println!("Evaluation:");
    for x in [0, 1, 2, 5] {
        println!(
            "  f(g({})) = {}  (f evaluated at g({}) = {})",
            x,
            composed.eval(&x),
            x,
            outer.eval(&inner.eval(&x))
        );
    }
    println!();
}

/// Demonstrate division and GCD
fn division_and_gcd() -> Result<(), PolyError> {
    println!("--- Division and GCD ---\n");

    let q = Rational64::from_integer;

    // x^3 - 1 = (x - 1)(x^2 + x + 1)
    let p = PQ::from_terms([(3, q(1)), (0, q(-1))]);
    let d = PQ::new(vec![q(-1), q(1)]);

    println!("p(x) = {}", p);
    println!("d(x) = {}", d);

    let (quotient, remainder) = p.div_rem(&d)?;
    println!("p / d:");
    println!("  quotient  = {}", quotient);
    println!("  remainder = {}", remainder);

    let reconstructed = &quotient * &d + &remainder;
    println!("Equals p? {}", reconstructed == p);
    println!();

    // Non-monic divisor with a fractional quotient
    let a = PQ::new(vec![q(1), q(0), q(3)]); // 3x^2 + 1
    let b = PQ::new(vec![q(0), q(2)]); // 2x
    println!("({}) / ({}) = {} rem {}", a, b, a.quot(&b)?, a.rem(&b)?);

    match a.div_rem(&PQ::zero()) {
        Ok(_) => println!("division by zero unexpectedly succeeded"),
        Err(e) => println!("({}) / 0 -> error: {}", a, e),
    }
    println!();

    // gcd((x-1)(x-2), 3(x-2)(x-3)) = x - 2
    let poly1 = PQ::new(vec![q(2), q(-3), q(1)]);
    let poly2 = PQ::new(vec![q(18), q(-15), q(3)]);

    println!("poly1 = {}", poly1);
    println!("poly2 = {}", poly2);
    println!("gcd(poly1, poly2) = {}", PQ::gcd(&poly1, &poly2));

    let coprime1 = PQ::new(vec![q(1), q(0), q(1)]);
    let coprime2 = PQ::new(vec![q(1), q(1)]);
    println!("gcd({}, {}) = {}", coprime1, coprime2, PQ::gcd(&coprime1, &coprime2));
    println!();

    Ok(())
}
