//! Priority biasing of arcs.
//!
//! An arc that must be saturated before any alternative is given a cost lowered by a large
//! magnitude `M`. As long as `M` exceeds the largest difference the unbiased costs can make, a
//! minimum-cost solution uses every biased unit it can. The bias is then removed from the reported
//! cost by adding back `occurrences * M`, where `occurrences` is the number of biased units the
//! caller knows were used.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::int::Int;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBias<I> {
    magnitude: I,
}

impl<I: Int> PriorityBias<I> {
    /// Derives `M` from the instance bounds: at most `max_units` units of flow, each costing at
    /// most `max_unit_cost` (unbiased, non-negative), and at most `max_occurrences` biased units.
    ///
    /// `M` is `max_units * max_unit_cost + 1`. Fails if `max_occurrences * M` plus the unbiased
    /// cost range does not fit in `I`.
    pub fn for_instance(max_units: I, max_unit_cost: I, max_occurrences: I) -> Result<Self, Error> {
        debug_assert!(max_units >= I::zero() && max_unit_cost >= I::zero());

        let spread = max_units
            .checked_mul(&max_unit_cost)
            .ok_or(Error::ArithmeticOverflow)?;
        let magnitude = spread
            .checked_add(&I::one())
            .ok_or(Error::ArithmeticOverflow)?;
        max_occurrences
            .checked_mul(&magnitude)
            .and_then(|bias| bias.checked_add(&spread))
            .ok_or(Error::ArithmeticOverflow)?;

        log::debug!("priority bias {magnitude} for {max_occurrences} biased units");
        Ok(Self { magnitude })
    }

    /// Uses a caller-chosen `M`. The caller is responsible for it dominating all unbiased costs.
    pub fn with_magnitude(magnitude: I) -> Self {
        debug_assert!(magnitude > I::zero());
        Self { magnitude }
    }

    pub fn magnitude(&self) -> I {
        self.magnitude
    }

    /// Cost to put on a biased arc whose unbiased cost is `base`.
    pub fn arc_cost(&self, base: I) -> Result<I, Error> {
        base.checked_sub(&self.magnitude)
            .ok_or(Error::ArithmeticOverflow)
    }

    /// Removes the contribution of `occurrences` biased units from `raw_cost`.
    pub fn unbias(&self, raw_cost: I, occurrences: I) -> Result<I, Error> {
        occurrences
            .checked_mul(&self.magnitude)
            .and_then(|bias| raw_cost.checked_add(&bias))
            .ok_or(Error::ArithmeticOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_dominates_the_cost_spread() {
        let bias = PriorityBias::<i64>::for_instance(4, 6, 4).unwrap();
        assert_eq!(bias.magnitude(), 25);
        assert_eq!(bias.arc_cost(0), Ok(-25));
        assert_eq!(bias.arc_cost(3), Ok(-22));
        assert_eq!(bias.unbias(6 - 4 * 25, 4), Ok(6));
    }

    #[test]
    fn overflow_is_detected_up_front() {
        assert_eq!(
            PriorityBias::<i32>::for_instance(100_000, 100_000, 1),
            Err(Error::ArithmeticOverflow)
        );
        assert_eq!(
            PriorityBias::<i32>::for_instance(1_000, 1_000, 10_000),
            Err(Error::ArithmeticOverflow)
        );
        assert!(PriorityBias::<i64>::for_instance(1_000, 1_000, 10_000).is_ok());
    }

    #[test]
    fn fixed_magnitude() {
        let bias = PriorityBias::with_magnitude(100_000_000_000_000i64);
        assert_eq!(bias.unbias(-200_000_000_000_000 + 7, 2), Ok(7));
        assert_eq!(
            PriorityBias::with_magnitude(i64::MAX / 2).unbias(0, 3),
            Err(Error::ArithmeticOverflow)
        );
        assert_eq!(
            PriorityBias::with_magnitude(i64::MAX).arc_cost(-2),
            Err(Error::ArithmeticOverflow)
        );
    }
}
