// src/common/validation.rs

use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use crate::common::error::AppError;

// ---
// Validações customizadas usadas pelos payloads
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if *val < Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("The value cannot be negative.".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_percentage(val: &Decimal) -> Result<(), ValidationError> {
    if *val < Decimal::ZERO || *val > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.add_param("max".into(), &100.0);
        err.message = Some("The percentage must be between 0 and 100.".into());
        return Err(err);
    }
    Ok(())
}

/// Valida todos os itens de um lote antes de abrir a transação.
/// Falha no primeiro item inválido, informando a posição dele.
pub fn validate_batch<T: Validate>(items: &[T]) -> Result<(), AppError> {
    for (index, item) in items.iter().enumerate() {
        item.validate()
            .map_err(|source| AppError::InvalidBulkItem { index, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use validator::Validate;

    #[derive(Validate)]
    struct Priced {
        #[validate(custom(function = "validate_not_negative"))]
        price: Decimal,
    }

    #[test]
    fn zero_is_not_negative() {
        assert!(validate_not_negative(&Decimal::ZERO).is_ok());
        assert!(validate_not_negative(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn percentage_bounds_are_inclusive() {
        assert!(validate_percentage(&Decimal::ZERO).is_ok());
        assert!(validate_percentage(&Decimal::ONE_HUNDRED).is_ok());
        assert!(validate_percentage(&Decimal::new(10001, 2)).is_err());
        assert!(validate_percentage(&Decimal::NEGATIVE_ONE).is_err());
    }

    #[test]
    fn batch_validation_reports_first_bad_index() {
        let items = vec![
            Priced { price: Decimal::ONE },
            Priced { price: Decimal::TEN },
            Priced { price: Decimal::NEGATIVE_ONE },
            Priced { price: Decimal::NEGATIVE_ONE },
        ];

        match validate_batch(&items) {
            Err(AppError::InvalidBulkItem { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected InvalidBulkItem, got {other:?}"),
        }
    }

    #[test]
    fn empty_batch_is_valid() {
        let items: Vec<Priced> = Vec::new();
        assert!(validate_batch(&items).is_ok());
    }
}
