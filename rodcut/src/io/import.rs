use crate::entities::RodInstance;
use crate::error::InvalidInput;
use crate::io::ext_repr::ExtRodInstance;

/// Imports an instance into the library, rejecting it if it is invalid.
pub fn import(ext_instance: &ExtRodInstance) -> Result<RodInstance, InvalidInput> {
    validate(ext_instance.length, &ext_instance.prices)
}

/// Checks the rod length and price table, in this order:
/// the length must be positive, the table must be non-empty with exactly `length` entries,
/// and every price must be positive. The first violation found is returned.
pub fn validate(length: i64, prices: &[i64]) -> Result<RodInstance, InvalidInput> {
    if length <= 0 {
        return Err(InvalidInput::NonPositiveLength(length));
    }
    if prices.is_empty() {
        return Err(InvalidInput::EmptyPrices);
    }
    let n_units = match usize::try_from(length) {
        Ok(n) if n == prices.len() => n,
        _ => {
            return Err(InvalidInput::LengthMismatch {
                length,
                n_prices: prices.len(),
            });
        }
    };
    if let Some((i, &price)) = prices.iter().enumerate().find(|(_, p)| **p <= 0) {
        return Err(InvalidInput::NonPositivePrice {
            piece_length: i + 1,
            price,
        });
    }

    let prices = prices.iter().map(|p| p.unsigned_abs()).collect::<Vec<u64>>();

    // no rod of at most `n_units` earns more than `n_units` units at the best price per unit
    if let Some((i, &price)) = prices
        .iter()
        .enumerate()
        .find(|(i, p)| n_units as u128 * **p as u128 / (*i as u128 + 1) > u64::MAX as u128)
    {
        return Err(InvalidInput::ProfitOverflow {
            length: n_units,
            piece_length: i + 1,
            price,
        });
    }

    Ok(RodInstance::new(n_units, prices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, &[], InvalidInput::NonPositiveLength(0); "zero length")]
    #[test_case(-1, &[1], InvalidInput::NonPositiveLength(-1); "negative length")]
    #[test_case(2, &[], InvalidInput::EmptyPrices; "empty prices")]
    #[test_case(3, &[1, 2], InvalidInput::LengthMismatch { length: 3, n_prices: 2 }; "too few prices")]
    #[test_case(1, &[1, 2], InvalidInput::LengthMismatch { length: 1, n_prices: 2 }; "too many prices")]
    #[test_case(2, &[1, 0], InvalidInput::NonPositivePrice { piece_length: 2, price: 0 }; "zero price")]
    #[test_case(3, &[1, -4, -2], InvalidInput::NonPositivePrice { piece_length: 2, price: -4 }; "first negative price reported")]
    fn rejects_invalid_input(length: i64, prices: &[i64], expected: InvalidInput) {
        assert_eq!(validate(length, prices), Err(expected));
    }

    #[test]
    fn length_is_checked_before_prices() {
        // both the length and the price are invalid, the length wins
        assert_eq!(
            validate(0, &[-1]),
            Err(InvalidInput::NonPositiveLength(0))
        );
    }

    #[test]
    fn rejects_overflowing_profit() {
        // three unit pieces at i64::MAX each exceed u64::MAX
        assert_eq!(
            validate(3, &[i64::MAX; 3]),
            Err(InvalidInput::ProfitOverflow {
                length: 3,
                piece_length: 1,
                price: i64::MAX as u64,
            })
        );
    }

    #[test]
    fn accepts_profit_up_to_the_limit() {
        // two pieces at i64::MAX still fit
        assert!(validate(2, &[i64::MAX, i64::MAX]).is_ok());
        // the expensive piece can only be sold once
        let instance = validate(3, &[1, 1, i64::MAX]).unwrap();
        assert_eq!(instance.price(3), i64::MAX as u64);
    }

    #[test]
    fn accepts_valid_input() {
        let instance = import(&ExtRodInstance {
            length: 3,
            prices: vec![1, 3, 8],
        })
        .unwrap();
        assert_eq!(instance.length(), 3);
        assert_eq!(instance.prices(), &[1, 3, 8]);
        assert_eq!(instance.price(3), 8);
        assert_eq!(instance.profit_of(&[1, 2]), 4);
    }
}
