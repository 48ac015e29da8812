// Rate-stat arithmetic core.
//
// Every computation in the engine is total over non-negative inputs: a zero
// denominator is a defined branch (`Rate::Undefined`), not an error. String
// formatting is kept out of the arithmetic entirely; the `format` module
// collapses `Undefined` to the conventional scorebook placeholder.

/// Outcome of a rate-stat computation before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    /// The denominator was positive and the ratio was computed.
    Computed(f64),
    /// The denominator was zero (no at-bats, no innings, no chances).
    Undefined,
}

impl Rate {
    /// Build a rate from a numerator/denominator pair.
    ///
    /// A zero denominator yields `Undefined`. Non-finite or negative values
    /// (only reachable through the innings-pitched `f64` input) are
    /// normalized to `Undefined` as well, so callers never see NaN or
    /// infinity downstream.
    pub fn from_ratio(numerator: f64, denominator: f64) -> Rate {
        if !numerator.is_finite() || !denominator.is_finite() {
            return Rate::Undefined;
        }
        if denominator <= 0.0 {
            return Rate::Undefined;
        }
        Rate::Computed(numerator / denominator)
    }

    /// The computed value, if the rate is defined.
    pub fn value(self) -> Option<f64> {
        match self {
            Rate::Computed(v) => Some(v),
            Rate::Undefined => None,
        }
    }

    /// Whether this rate took the zero-denominator branch.
    pub fn is_undefined(self) -> bool {
        matches!(self, Rate::Undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ratio_computes_simple_fraction() {
        assert_eq!(Rate::from_ratio(1.0, 4.0), Rate::Computed(0.25));
    }

    #[test]
    fn from_ratio_zero_denominator_is_undefined() {
        assert_eq!(Rate::from_ratio(5.0, 0.0), Rate::Undefined);
        assert_eq!(Rate::from_ratio(0.0, 0.0), Rate::Undefined);
    }

    #[test]
    fn from_ratio_rejects_non_finite_inputs() {
        assert_eq!(Rate::from_ratio(f64::NAN, 3.0), Rate::Undefined);
        assert_eq!(Rate::from_ratio(1.0, f64::INFINITY), Rate::Undefined);
        assert_eq!(Rate::from_ratio(1.0, -2.0), Rate::Undefined);
    }

    #[test]
    fn value_and_is_undefined() {
        assert_eq!(Rate::Computed(0.5).value(), Some(0.5));
        assert_eq!(Rate::Undefined.value(), None);
        assert!(Rate::Undefined.is_undefined());
        assert!(!Rate::Computed(0.0).is_undefined());
    }
}
