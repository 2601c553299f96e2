use core::fmt;
use core::mem;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{PolyError, Result};

/// Sparse univariate polynomial over a scalar ring `T`.
///
/// Only non-zero coefficients are stored, keyed by exponent in ascending
/// order. The zero polynomial is the empty map, so two polynomials are equal
/// exactly when their stored terms are equal.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial<T> {
    terms: BTreeMap<usize, T>,
}

impl<T> Polynomial<T> {
    /// Create the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// let zero = Polynomial::<i64>::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.degree(), None);
    /// ```
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(n)` otherwise
    /// where `n` is the highest power with a non-zero coefficient.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// let p = Polynomial::new(vec![1, 0, 0, 4, 0]);
    /// assert_eq!(p.degree(), Some(3));
    /// assert_eq!(Polynomial::<i64>::zero().degree(), None);
    /// ```
    pub fn degree(&self) -> Option<usize> {
        self.terms.keys().next_back().copied()
    }

    /// True for the zero polynomial and for non-zero constants.
    pub fn is_constant(&self) -> bool {
        matches!(self.degree(), None | Some(0))
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<&T> {
        self.terms.values().next_back()
    }

    fn leading_term(&self) -> Option<(usize, &T)> {
        self.terms.iter().next_back().map(|(&e, c)| (e, c))
    }

    /// Number of non-zero terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no terms are stored, i.e. for the zero polynomial.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(exponent, coefficient)` pairs in ascending exponent order.
    ///
    /// Only non-zero terms are yielded.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> + '_ {
        self.terms.iter().map(|(&e, c)| (e, c))
    }
}

impl<T: Ring> Polynomial<T> {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`. Zero coefficients,
    /// including trailing ones, are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// // 3 + 2x + x^2
    /// let p = Polynomial::new(vec![3, 2, 1]);
    /// assert_eq!(p.degree(), Some(2));
    /// assert_eq!(p, Polynomial::new(vec![3, 2, 1, 0, 0]));
    /// ```
    pub fn new(coeffs: Vec<T>) -> Self {
        Self::from_coeffs(coeffs)
    }

    /// Create a polynomial from any sequence of coefficients in ascending
    /// exponent order.
    pub fn from_coeffs<I>(coeffs: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut poly = Self {
            terms: coeffs.into_iter().enumerate().collect(),
        };
        poly.normalize();
        poly
    }

    /// Create a polynomial from `(exponent, coefficient)` pairs.
    ///
    /// Pairs may come in any order; coefficients sharing an exponent are
    /// summed.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// // x^1000 + 1 without a dense coefficient vector
    /// let p = Polynomial::from_terms([(1000, 1), (0, 1)]);
    /// assert_eq!(p.degree(), Some(1000));
    /// assert_eq!(p.len(), 2);
    /// ```
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut poly = Self::zero();
        for (exp, coeff) in terms {
            poly.add_term(exp, coeff);
        }
        poly
    }

    /// Create a constant polynomial.
    ///
    /// A zero scalar gives the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// let c = Polynomial::constant(5);
    /// assert_eq!(c.degree(), Some(0));
    /// assert_eq!(c.eval(&10), 5);
    ///
    /// assert!(Polynomial::constant(0).is_zero());
    /// ```
    pub fn constant(c: T) -> Self {
        Self::monomial(c, 0)
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self::monomial(T::one(), 1)
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(c: T, n: usize) -> Self {
        let mut poly = Self::zero();
        if !c.is_zero() {
            poly.terms.insert(n, c);
        }
        poly
    }

    /// Get the coefficient of `x^e`.
    ///
    /// Returns zero if no term of that exponent is stored.
    pub fn coeff(&self, e: usize) -> T {
        self.terms.get(&e).cloned().unwrap_or_else(T::zero)
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// Every exponent from the degree down to zero takes one step of
    /// `acc = coeff(i) + acc * x`, in that operand order.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// // p(x) = 1 + 2x + 3x^2
    /// let p = Polynomial::new(vec![1, 2, 3]);
    /// assert_eq!(p.eval(&2), 17);
    /// assert_eq!(Polynomial::<i64>::zero().eval(&2), 0);
    /// ```
    pub fn eval(&self, x: &T) -> T {
        let Some(deg) = self.degree() else {
            return T::zero();
        };

        let mut acc = T::zero();
        for i in (0..=deg).rev() {
            acc = self.coeff(i) + acc * x.clone();
        }
        acc
    }

    /// Multiply every coefficient by a scalar.
    pub fn scale(&self, c: &T) -> Self {
        let mut poly = Self {
            terms: self
                .terms
                .iter()
                .map(|(&e, a)| (e, a.clone() * c.clone()))
                .collect(),
        };
        poly.normalize();
        poly
    }

    /// Substitute `inner` for the variable: returns `self(inner(x))`.
    ///
    /// Each term `a_i x^i` is expanded by multiplying the constant `a_i`
    /// by `inner` `i` times.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// let outer = Polynomial::new(vec![1, 0, 1]); // x^2 + 1
    /// let inner = Polynomial::new(vec![1, 1]); // x + 1
    /// assert_eq!(outer.compose(&inner), Polynomial::new(vec![2, 2, 1]));
    /// ```
    pub fn compose(&self, inner: &Self) -> Self {
        let mut composition = Self::zero();
        for (&i, c) in &self.terms {
            let mut term = Self::constant(c.clone());
            for _ in 0..i {
                term *= inner;
            }
            composition += &term;
        }
        composition
    }

    /// Raise to a non-negative power using square-and-multiply.
    pub fn pow(&self, exp: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::one();

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Remove zero coefficients.
    fn normalize(&mut self) {
        self.terms.retain(|_, c| !c.is_zero());
    }

    /// Add `c * x^e` in place, dropping the term if it cancels.
    fn add_term(&mut self, e: usize, c: T) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(e) {
            Entry::Occupied(mut slot) => {
                let sum = mem::replace(slot.get_mut(), T::zero()) + c;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(c);
            }
        }
    }

    /// Subtract `c * x^e` in place, dropping the term if it cancels.
    fn sub_term(&mut self, e: usize, c: T) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(e) {
            Entry::Occupied(mut slot) => {
                let diff = mem::replace(slot.get_mut(), T::zero()) - c;
                if diff.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = diff;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(T::zero() - c);
            }
        }
    }
}

impl<T: Field> Polynomial<T> {
    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// Returns `None` if the polynomial is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// let p = Polynomial::new(vec![2.0, 4.0, 2.0]);
    /// let monic = p.monic().unwrap();
    /// assert_eq!(monic.leading_coeff(), Some(&1.0));
    /// ```
    pub fn monic(&self) -> Option<Self> {
        let lc = self.leading_coeff()?.clone();
        if lc == T::one() {
            return Some(self.clone());
        }
        let mut poly = Self {
            terms: self
                .terms
                .iter()
                .map(|(&e, c)| (e, c.clone() / lc.clone()))
                .collect(),
        };
        poly.normalize();
        Some(poly)
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` with `r = self - q * divisor`. When scalar division
    /// in `T` is exact, `deg(r) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// [`PolyError::ZeroDivisor`] if the divisor is the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
    /// let dividend = Polynomial::new(vec![1.0, 2.0, 1.0]);
    /// let divisor = Polynomial::new(vec![1.0, 1.0]);
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let (quotient, _) = self.long_division(divisor).ok_or(PolyError::ZeroDivisor)?;
        let remainder = self - &(&quotient * divisor);
        Ok((quotient, remainder))
    }

    /// Quotient of the Euclidean division.
    pub fn quot(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of the Euclidean division, `self - quot(self, divisor) * divisor`.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Quotient and running remainder of the long division. The running
    /// remainder always has degree below the divisor's.
    fn long_division(&self, divisor: &Self) -> Option<(Self, Self)> {
        let (divisor_deg, divisor_lc) = divisor.leading_term()?;

        let mut quotient = Self::zero();
        let mut remainder = self.clone();

        while let Some((rem_deg, rem_lc)) = remainder.leading_term() {
            if rem_deg < divisor_deg {
                break;
            }

            let coeff = rem_lc.clone() / divisor_lc.clone();
            let shift = rem_deg - divisor_deg;
            trace!(target: "spoly::div", rem_deg, shift, "long division step");

            // remainder -= coeff * x^shift * divisor
            for (&e, d) in &divisor.terms {
                remainder.sub_term(e + shift, coeff.clone() * d.clone());
            }
            // Cancels exactly over a field; inexact scalars leave a residue.
            remainder.terms.remove(&rem_deg);

            quotient.add_term(shift, coeff);
        }

        Some((quotient, remainder))
    }

    /// Compute the greatest common divisor of two polynomials.
    ///
    /// Runs the Euclidean algorithm until the second operand is constant.
    /// The result is monic; it is `1` for coprime inputs, `monic(a)` when
    /// `b` is zero and zero only when both inputs are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use spoly::Polynomial;
    ///
    /// // gcd((x-1)(x-2), (x-2)(x-3)) = x - 2
    /// let p1 = Polynomial::new(vec![2.0, -3.0, 1.0]);
    /// let p2 = Polynomial::new(vec![6.0, -5.0, 1.0]);
    /// let g = Polynomial::gcd(&p1, &p2);
    ///
    /// assert_eq!(g, Polynomial::new(vec![-2.0, 1.0]));
    /// ```
    pub fn gcd(a: &Self, b: &Self) -> Self {
        let (mut first, mut second) = if a.degree() < b.degree() {
            (b.clone(), a.clone())
        } else {
            (a.clone(), b.clone())
        };

        let mut steps = 0usize;
        while matches!(second.degree(), Some(d) if d > 0) {
            let Some((_, r)) = first.long_division(&second) else {
                break;
            };
            first = mem::replace(&mut second, r);
            steps += 1;
            trace!(
                target: "spoly::gcd",
                step = steps,
                first_deg = ?first.degree(),
                second_deg = ?second.degree(),
                "euclid step"
            );
        }

        let g = if second.is_zero() {
            first.monic().unwrap_or_else(Self::zero)
        } else {
            // A non-zero constant remainder: the inputs are coprime.
            Self::one()
        };
        debug!(target: "spoly::gcd", steps, degree = ?g.degree(), "gcd computed");
        g
    }
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Ring> From<T> for Polynomial<T> {
    fn from(c: T) -> Self {
        Self::constant(c)
    }
}

impl<T: Ring> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Ring> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_coeffs(iter)
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = (&'a usize, &'a T);
    type IntoIter = btree_map::Iter<'a, usize, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/* ---- Arithmetic operators ---- */

impl<T: Ring> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        for (&e, c) in &rhs.terms {
            self.add_term(e, c.clone());
        }
    }
}

impl<T: Ring> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Self) {
        for (e, c) in rhs.terms {
            self.add_term(e, c);
        }
    }
}

impl<T: Ring> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        for (&e, c) in &rhs.terms {
            self.sub_term(e, c.clone());
        }
    }
}

impl<T: Ring> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Self) {
        for (e, c) in rhs.terms {
            self.sub_term(e, c);
        }
    }
}

impl<T: Ring> MulAssign<&Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Ring> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl<T: Ring> Add for Polynomial<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Ring> Add<&Polynomial<T>> for Polynomial<T> {
    type Output = Self;

    fn add(mut self, rhs: &Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Ring> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs
    }
}

impl<T: Ring> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Ring> Sub<&Polynomial<T>> for Polynomial<T> {
    type Output = Self;

    fn sub(mut self, rhs: &Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Ring> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs
    }
}

impl<T: Ring + Neg<Output = T>> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let terms = self.terms.into_iter().map(|(e, c)| (e, -c)).collect();
        Self { terms }
    }
}

impl<T: Ring> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    /// Polynomial multiplication by term-by-term convolution.
    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }

        let mut terms = BTreeMap::new();
        for (&i, a) in &self.terms {
            for (&j, b) in &rhs.terms {
                let slot = terms.entry(i + j).or_insert_with(T::zero);
                let acc = mem::replace(slot, T::zero());
                *slot = acc + a.clone() * b.clone();
            }
        }

        let mut poly = Polynomial { terms };
        poly.normalize();
        poly
    }
}

impl<T: Ring> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T: Ring> Mul<&Polynomial<T>> for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: &Polynomial<T>) -> Self::Output {
        &self * rhs
    }
}

/// Scalar multiplication: polynomial * coefficient
impl<T: Ring> Mul<T> for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(&rhs)
    }
}

/* ---- Formatting ---- */

impl<T: fmt::Debug> fmt::Debug for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polynomial")?;
        f.debug_map().entries(self.terms.iter()).finish()
    }
}

/// Renders terms in descending exponent order, e.g. `-x^3+2*x+1`.
///
/// Coefficients of `1` and `-1` are elided in front of a power of `x`,
/// positive terms after the leading one get an explicit `+` and the zero
/// polynomial prints as `0`.
impl<T: Ring + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(deg) = self.degree() else {
            return write!(f, "0");
        };

        let one = T::one();
        let zero = T::zero();

        for (&i, coeff) in self.terms.iter().rev() {
            if *coeff == one {
                if i != deg {
                    write!(f, "+")?;
                }
                match i {
                    0 => write!(f, "{}", coeff)?,
                    1 => write!(f, "x")?,
                    _ => write!(f, "x^{}", i)?,
                }
            } else if *coeff < zero && zero.clone() - coeff.clone() == one {
                match i {
                    0 => write!(f, "{}", coeff)?,
                    1 => write!(f, "-x")?,
                    _ => write!(f, "-x^{}", i)?,
                }
            } else {
                if i != deg && *coeff > zero {
                    write!(f, "+")?;
                }
                write!(f, "{}", coeff)?;
                match i {
                    0 => {}
                    1 => write!(f, "*x")?,
                    _ => write!(f, "*x^{}", i)?,
                }
            }
        }

        Ok(())
    }
}

/* ---- Serde ---- */

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Polynomial<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as the sparse exponent -> coefficient map
        serde::Serialize::serialize(&self.terms, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Ring + serde::Deserialize<'de>> serde::Deserialize<'de> for Polynomial<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let terms = <BTreeMap<usize, T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_terms(terms))
    }
}
