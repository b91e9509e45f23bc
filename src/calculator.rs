use thiserror::Error;

/// Error types for calculator operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculadoraError {
    #[error("Nao pode dividir por zero")]
    DivisaoPorZero,
}

/// Stateless integer calculator
///
/// Every operation is deterministic and keeps no state between calls.
pub struct Calculadora;

impl Calculadora {
    pub fn new() -> Self {
        Self
    }

    pub fn somar(&self, a: i32, b: i32) -> i32 {
        a + b
    }

    pub fn subtrair(&self, a: i32, b: i32) -> i32 {
        a - b
    }

    /// Integer quotient of `a / b`
    ///
    /// # Returns
    /// The quotient, or `CalculadoraError::DivisaoPorZero` when `b` is zero
    pub fn dividir(&self, a: i32, b: i32) -> Result<i32, CalculadoraError> {
        if b == 0 {
            return Err(CalculadoraError::DivisaoPorZero);
        }
        Ok(a / b)
    }
}

impl Default for Calculadora {
    fn default() -> Self {
        Self::new()
    }
}
