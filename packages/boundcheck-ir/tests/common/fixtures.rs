//! Interval environment fixture
//!
//! A non-relational interval domain over named variables plus a points-to
//! map. Good enough to drive the checker through every verdict; the library
//! itself ships no numeric domain.

use std::collections::BTreeMap;
use std::fmt;

use boundcheck_ir::config::DEFAULT_SHADOW_SIZE_PREFIX;
use boundcheck_ir::shared::models::{LinearConstraint, LinearExpression, VarName};
use boundcheck_ir::{AbstractInvariant, AddressDomain, PointsTo};

/// `[lo, hi]`, `None` meaning unbounded on that side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub lo: Option<i128>,
    pub hi: Option<i128>,
}

impl Interval {
    pub const TOP: Interval = Interval { lo: None, hi: None };

    pub fn new(lo: i64, hi: i64) -> Self {
        Self {
            lo: Some(lo as i128),
            hi: Some(hi as i128),
        }
    }

    pub fn singleton(value: i64) -> Self {
        Self::new(value, value)
    }

    pub fn at_least(lo: i64) -> Self {
        Self {
            lo: Some(lo as i128),
            hi: None,
        }
    }

    fn is_empty(&self) -> bool {
        matches!((self.lo, self.hi), (Some(lo), Some(hi)) if lo > hi)
    }

    /// Minimum of `coefficient * x` for `x` in the interval
    fn min_scaled(&self, coefficient: i128) -> Option<i128> {
        if coefficient >= 0 {
            self.lo.map(|lo| lo * coefficient)
        } else {
            self.hi.map(|hi| hi * coefficient)
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lo {
            Some(lo) => write!(f, "[{}, ", lo)?,
            None => write!(f, "[-oo, ")?,
        }
        match self.hi {
            Some(hi) => write!(f, "{}]", hi),
            None => write!(f, "+oo]"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntervalEnv {
    bottom: bool,
    intervals: BTreeMap<VarName, Interval>,
    points_to: BTreeMap<VarName, PointsTo>,
}

impl IntervalEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bottom() -> Self {
        Self {
            bottom: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, var: &str, interval: Interval) -> Self {
        self.intervals.insert(VarName::new(var), interval);
        self
    }

    pub fn with_range(self, var: &str, lo: i64, hi: i64) -> Self {
        self.with(var, Interval::new(lo, hi))
    }

    /// Pin the shadow size of `address` under the default prefix
    pub fn with_size(self, address: &str, size: i64) -> Self {
        let shadow = format!("{}{}", DEFAULT_SHADOW_SIZE_PREFIX, address);
        self.with(&shadow, Interval::singleton(size))
    }

    pub fn pointing_to(mut self, pointer: &str, addresses: &[&str]) -> Self {
        let addresses = addresses.iter().map(|a| VarName::new(*a)).collect();
        self.points_to
            .insert(VarName::new(pointer), PointsTo::Addresses(addresses));
        self
    }

    pub fn interval(&self, var: &str) -> Interval {
        self.intervals
            .get(&VarName::new(var))
            .copied()
            .unwrap_or(Interval::TOP)
    }

    fn interval_of(&self, var: &VarName) -> Interval {
        self.intervals.get(var).copied().unwrap_or(Interval::TOP)
    }

    /// Minimum of `expr` over the box, skipping the term on `skip`
    fn min_excluding(&self, expr: &LinearExpression, skip: Option<&VarName>) -> Option<i128> {
        let mut total = expr.constant_term();
        for (var, coefficient) in expr.terms() {
            if Some(var) == skip {
                continue;
            }
            total += self.interval_of(var).min_scaled(coefficient)?;
        }
        Some(total)
    }
}

fn floor_div(a: i128, b: i128) -> i128 {
    let q = a / b;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

fn ceil_div(a: i128, b: i128) -> i128 {
    -floor_div(-a, b)
}

impl AbstractInvariant for IntervalEnv {
    fn is_bottom(&self) -> bool {
        self.bottom
    }

    fn constrain(&self, constraint: &LinearConstraint) -> Self {
        if self.bottom {
            return self.clone();
        }

        let expr = constraint.expression();
        if matches!(self.min_excluding(expr, None), Some(min) if min > 0) {
            return Self::bottom();
        }

        let mut next = self.clone();
        for (var, coefficient) in expr.terms() {
            // coefficient * var <= -rest
            let Some(rest) = self.min_excluding(expr, Some(var)) else {
                continue;
            };
            let a = coefficient;
            let mut interval = next.interval_of(var);
            if a > 0 {
                let hi = floor_div(-rest, a);
                interval.hi = Some(interval.hi.map_or(hi, |h| h.min(hi)));
            } else {
                let lo = ceil_div(rest, -a);
                interval.lo = Some(interval.lo.map_or(lo, |l| l.max(lo)));
            }
            if interval.is_empty() {
                return Self::bottom();
            }
            next.intervals.insert(var.clone(), interval);
        }
        next
    }
}

impl AddressDomain for IntervalEnv {
    fn points_to(&self, pointer: &VarName) -> PointsTo {
        self.points_to
            .get(pointer)
            .cloned()
            .unwrap_or(PointsTo::Unknown)
    }
}

impl fmt::Display for IntervalEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bottom {
            return write!(f, "_|_");
        }
        write!(f, "{{")?;
        for (i, (var, interval)) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} -> {}", var, interval)?;
        }
        write!(f, "}}")
    }
}
