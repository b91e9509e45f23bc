// Locadora - movie rental pricing library
//
// Provides a rental service that prices multi-film rentals with a tiered
// discount schedule and computes return dates that never fall on a Sunday,
// plus a small checked-arithmetic calculator.

pub mod calculator;
pub mod dates;
pub mod models;
pub mod rental;
pub mod validation;

pub use calculator::{Calculadora, CalculadoraError};
pub use models::{Filme, Locacao, Usuario};
pub use rental::{LocacaoService, LocadoraError, LocadoraResult};
