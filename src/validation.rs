// Validation utilities module
// Provides custom validation functions for domain-specific rules

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validates that a rental price is strictly positive
pub fn validate_preco_positivo(preco: &Decimal) -> Result<(), ValidationError> {
    if *preco <= Decimal::ZERO {
        Err(ValidationError::new("preco_must_be_positive"))
    } else {
        Ok(())
    }
}
