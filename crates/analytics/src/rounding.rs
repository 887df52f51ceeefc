use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to one decimal place: `round(value * 10) / 10`.
///
/// Ties go toward positive infinity, so `2.25` becomes `2.3` and `-2.25` becomes `-2.2`.
/// Rounding happens at the decimal scale directly, so it cannot overflow.
pub fn round_one_decimal(value: Decimal) -> Decimal {
    let ties = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let rounded = value.round_dp_with_strategy(1, ties);
    // -0.04 rounds to a negative zero; report it as plain zero.
    if rounded.is_zero() { Decimal::ZERO } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_to_one_place() {
        assert_eq!(round_one_decimal(dec!(64.70588)), dec!(64.7));
        assert_eq!(round_one_decimal(dec!(12.349)), dec!(12.3));
        assert_eq!(round_one_decimal(dec!(30)), dec!(30.0));
        assert_eq!(round_one_decimal(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_one_decimal(dec!(2.25)), dec!(2.3));
        assert_eq!(round_one_decimal(dec!(0.05)), dec!(0.1));
        assert_eq!(round_one_decimal(dec!(-2.25)), dec!(-2.2));
        assert_eq!(round_one_decimal(dec!(-2.26)), dec!(-2.3));
        assert!(!round_one_decimal(dec!(-0.04)).is_sign_negative());
    }

    #[test]
    fn ties_are_exact_decimal_ties() {
        // 1.15 is stored exactly, so it is a true tie and goes up.
        assert_eq!(round_one_decimal(dec!(1.15)), dec!(1.2));
        assert_eq!(round_one_decimal(dec!(1.005)), dec!(1.0));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(round_one_decimal(Decimal::MAX), Decimal::MAX);
        assert_eq!(round_one_decimal(Decimal::MIN), Decimal::MIN);
    }

    #[test]
    fn is_idempotent() {
        for value in [dec!(1.04), dec!(1.05), dec!(-7.777), dec!(1234.5678), dec!(0.95)] {
            let once = round_one_decimal(value);
            assert_eq!(round_one_decimal(once), once);
        }
    }
}
