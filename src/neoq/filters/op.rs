use std::fmt;

/// Comparison applied between an extracted attribute and a reference value.
///
/// The extracted value is always the left-hand side: a `Le` filter with
/// reference `10` evaluates `attribute <= 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Exact equality.
    Eq,
    /// Less than or equal.
    Le,
    /// Greater than or equal.
    Ge,
}

impl CompareOp {
    /// Evaluate `lhs OP rhs`.
    ///
    /// Follows `PartialOrd`, so any comparison involving an incomparable
    /// value (such as a `NaN` diameter) is false.
    pub fn apply<T: PartialOrd + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::Le => lhs <= rhs,
            CompareOp::Ge => lhs >= rhs,
        }
    }

    /// Short operator name, used in debug representations.
    pub fn name(&self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Le => "le",
            CompareOp::Ge => "ge",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_ordered_values() {
        assert!(CompareOp::Eq.apply(&3, &3));
        assert!(!CompareOp::Eq.apply(&3, &4));
        assert!(CompareOp::Le.apply(&3, &4));
        assert!(CompareOp::Le.apply(&4, &4));
        assert!(!CompareOp::Le.apply(&5, &4));
        assert!(CompareOp::Ge.apply(&5, &4));
        assert!(CompareOp::Ge.apply(&4, &4));
        assert!(!CompareOp::Ge.apply(&3, &4));
    }

    #[test]
    fn nan_never_compares() {
        for op in [CompareOp::Eq, CompareOp::Le, CompareOp::Ge] {
            assert!(!op.apply(&f64::NAN, &1.0));
            assert!(!op.apply(&f64::NAN, &f64::NAN));
        }
    }

    #[test]
    fn booleans_compare_by_equality() {
        assert!(CompareOp::Eq.apply(&false, &false));
        assert!(!CompareOp::Eq.apply(&true, &false));
    }
}
