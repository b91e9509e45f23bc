use rust_decimal::Decimal;

use crate::models::Filme;

/// Tiered discount schedule for multi-film rentals
///
/// Films are priced in the order supplied. The first two films pay full
/// price; the third pays 75% of its unit price, the fourth 50%, the fifth
/// 25%, and every film from the sixth onwards is free. Contributions are
/// summed as exact decimals with no intermediate rounding.
pub struct RentalPricing;

impl RentalPricing {
    /// Share of the unit price paid by the film at `position` (0-indexed)
    pub fn share_for_position(position: usize) -> Decimal {
        match position {
            0 | 1 => Decimal::ONE,
            2 => Decimal::new(75, 2),
            3 => Decimal::new(50, 2),
            4 => Decimal::new(25, 2),
            _ => Decimal::ZERO,
        }
    }

    /// Total rental value for `filmes`, applying the discount schedule
    pub fn calculate_total(filmes: &[Filme]) -> Decimal {
        filmes
            .iter()
            .enumerate()
            .map(|(position, filme)| filme.preco_locacao() * Self::share_for_position(position))
            .sum()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn filmes_from_cents(prices_cents: &[u32]) -> Vec<Filme> {
        prices_cents
            .iter()
            .enumerate()
            .map(|(i, &cents)| {
                let preco = Decimal::from(cents) / Decimal::from(100);
                Filme::new(format!("Filme {}", i + 1), 1, preco)
            })
            .collect()
    }

    /// Totals are never negative for positive unit prices
    #[test]
    fn prop_total_is_non_negative() {
        proptest!(|(prices_cents in prop::collection::vec(1u32..=10000u32, 1..=12))| {
            let filmes = filmes_from_cents(&prices_cents);
            let total = RentalPricing::calculate_total(&filmes);

            prop_assert!(total >= Decimal::ZERO, "Total must be non-negative, got: {}", total);
        });
    }

    /// Adding a film never lowers the total
    #[test]
    fn prop_total_is_monotone_in_film_count() {
        proptest!(|(prices_cents in prop::collection::vec(1u32..=10000u32, 2..=12))| {
            let filmes = filmes_from_cents(&prices_cents);

            let shorter = RentalPricing::calculate_total(&filmes[..filmes.len() - 1]);
            let full = RentalPricing::calculate_total(&filmes);

            prop_assert!(full >= shorter, "Total dropped from {} to {}", shorter, full);
        });
    }

    /// The discounted total never exceeds the undiscounted sum
    #[test]
    fn prop_total_never_exceeds_undiscounted_sum() {
        proptest!(|(prices_cents in prop::collection::vec(1u32..=10000u32, 1..=12))| {
            let filmes = filmes_from_cents(&prices_cents);

            let total = RentalPricing::calculate_total(&filmes);
            let undiscounted: Decimal = filmes.iter().map(|f| f.preco_locacao()).sum();

            prop_assert!(total <= undiscounted);
        });
    }

    /// Every per-position share stays within [0, 1]
    #[test]
    fn prop_share_is_a_fraction() {
        proptest!(|(position in 0usize..=100)| {
            let share = RentalPricing::share_for_position(position);

            prop_assert!(share >= Decimal::ZERO);
            prop_assert!(share <= Decimal::ONE);
        });
    }
}
