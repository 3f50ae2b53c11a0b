//! Linear expressions and constraints over program variables
//!
//! Offsets handed to the abstract domain are linear: a bare variable,
//! `x + c`, or `x + y - c`. Constraints are kept in the normal form
//! `expression <= 0`.
//!
//! # Examples
//!
//! ```rust
//! use boundcheck_ir::shared::models::{LinearConstraint, LinearExpression, VarName};
//!
//! let p = VarName::new("p");
//! let len = VarName::new("len");
//!
//! // p + len - 1
//! let end = LinearExpression::var(p.clone()) + LinearExpression::var(len) - 1;
//! assert_eq!(end.to_string(), "len + p - 1");
//!
//! // p >= 0  ⇔  -p <= 0
//! let c = LinearConstraint::ge(LinearExpression::var(p), LinearExpression::constant(0));
//! assert_eq!(c.to_string(), "-p <= 0");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::variable::VarName;

/// `Σ coefficient·variable + constant`
///
/// Terms with a zero coefficient are never stored, so structural equality is
/// semantic equality. Inputs are `i64`; coefficients and the constant are
/// held as `i128`, so sums and negations of `i64` operands are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LinearExpression {
    terms: BTreeMap<VarName, i128>,
    constant: i128,
}

impl LinearExpression {
    pub fn constant(value: i64) -> Self {
        Self {
            terms: BTreeMap::new(),
            constant: i128::from(value),
        }
    }

    pub fn var(name: impl Into<VarName>) -> Self {
        Self::term(name, 1)
    }

    pub fn term(name: impl Into<VarName>, coefficient: i64) -> Self {
        let mut expr = Self::default();
        expr.add_term(name.into(), i128::from(coefficient));
        expr
    }

    /// `variable + constant`
    pub fn var_plus(name: impl Into<VarName>, constant: i64) -> Self {
        Self::var(name) + constant
    }

    /// `variable + other - constant`
    pub fn sum_minus(name: impl Into<VarName>, other: impl Into<VarName>, constant: i64) -> Self {
        Self::var(name) + Self::var(other) - constant
    }

    pub fn terms(&self) -> impl Iterator<Item = (&VarName, i128)> {
        self.terms.iter().map(|(v, c)| (v, *c))
    }

    pub fn coefficient(&self, name: &VarName) -> i128 {
        self.terms.get(name).copied().unwrap_or(0)
    }

    pub fn constant_term(&self) -> i128 {
        self.constant
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn variables(&self) -> impl Iterator<Item = &VarName> {
        self.terms.keys()
    }

    fn add_term(&mut self, name: VarName, coefficient: i128) {
        if coefficient == 0 {
            return;
        }
        let entry = self.terms.entry(name).or_insert(0);
        *entry = entry.saturating_add(coefficient);
        if *entry == 0 {
            self.terms.retain(|_, c| *c != 0);
        }
    }
}

impl From<VarName> for LinearExpression {
    fn from(name: VarName) -> Self {
        Self::var(name)
    }
}

impl From<i64> for LinearExpression {
    fn from(value: i64) -> Self {
        Self::constant(value)
    }
}

impl Add for LinearExpression {
    type Output = LinearExpression;

    fn add(mut self, rhs: LinearExpression) -> LinearExpression {
        for (name, coefficient) in rhs.terms {
            self.add_term(name, coefficient);
        }
        self.constant = self.constant.saturating_add(rhs.constant);
        self
    }
}

impl Add<i64> for LinearExpression {
    type Output = LinearExpression;

    fn add(mut self, rhs: i64) -> LinearExpression {
        self.constant = self.constant.saturating_add(i128::from(rhs));
        self
    }
}

impl Neg for LinearExpression {
    type Output = LinearExpression;

    fn neg(self) -> LinearExpression {
        LinearExpression {
            terms: self
                .terms
                .into_iter()
                .map(|(name, c)| (name, c.saturating_neg()))
                .collect(),
            constant: self.constant.saturating_neg(),
        }
    }
}

impl Sub for LinearExpression {
    type Output = LinearExpression;

    fn sub(self, rhs: LinearExpression) -> LinearExpression {
        self + (-rhs)
    }
}

impl Sub<i64> for LinearExpression {
    type Output = LinearExpression;

    fn sub(mut self, rhs: i64) -> LinearExpression {
        self.constant = self.constant.saturating_sub(i128::from(rhs));
        self
    }
}

impl fmt::Display for LinearExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, coefficient) in &self.terms {
            let magnitude = coefficient.unsigned_abs();
            match (first, *coefficient < 0) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            if magnitude != 1 {
                write!(f, "{}*", magnitude)?;
            }
            write!(f, "{}", name)?;
            first = false;
        }

        if first {
            write!(f, "{}", self.constant)
        } else if self.constant < 0 {
            write!(f, " - {}", self.constant.unsigned_abs())
        } else if self.constant > 0 {
            write!(f, " + {}", self.constant)
        } else {
            Ok(())
        }
    }
}

/// `expression <= 0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinearConstraint {
    expression: LinearExpression,
}

impl LinearConstraint {
    /// `expression <= 0`
    pub fn non_positive(expression: LinearExpression) -> Self {
        Self { expression }
    }

    /// `lhs <= rhs`
    pub fn le(lhs: LinearExpression, rhs: LinearExpression) -> Self {
        Self::non_positive(lhs - rhs)
    }

    /// `lhs >= rhs`
    pub fn ge(lhs: LinearExpression, rhs: LinearExpression) -> Self {
        Self::non_positive(rhs - lhs)
    }

    pub fn expression(&self) -> &LinearExpression {
        &self.expression
    }
}

impl fmt::Display for LinearConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <= 0", self.expression)
    }
}
