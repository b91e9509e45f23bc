use chrono::{DateTime, Local, Weekday};
use tracing::debug;
use validator::Validate;

use crate::dates;
use crate::models::{Filme, Locacao, Usuario};
use crate::rental::{LocadoraError, LocadoraResult, RentalPricing};

/// Service for renting films
///
/// Stateless: every call allocates only local state and a fresh [`Locacao`],
/// so concurrent callers need no coordination.
#[derive(Debug, Clone, Default)]
pub struct LocacaoService;

impl LocacaoService {
    pub fn new() -> Self {
        Self
    }

    /// Rent `filmes` to `usuario`, stamped at the current instant
    ///
    /// # Arguments
    /// * `usuario` - The renter; `None` models a caller that supplied no user
    /// * `filmes` - Films to rent, priced in the order given
    ///
    /// # Returns
    /// A [`Locacao`] with the discounted total, today's rental date and a
    /// return date on the next day (skipping to Monday when the next day is
    /// a Sunday), or the first failing validation:
    /// - missing user
    /// - empty film list
    /// - any film with zero stock
    /// - an entity failing its intrinsic field validation
    ///
    /// The film list is moved into the result, not copied. No stock is
    /// decremented and nothing is persisted; either a complete `Locacao` is
    /// produced or no state is created.
    pub fn alugar_filme(
        &self,
        usuario: Option<Usuario>,
        filmes: Vec<Filme>,
    ) -> LocadoraResult<Locacao> {
        self.alugar_filme_em(usuario, filmes, Local::now())
    }

    /// Same as [`alugar_filme`](Self::alugar_filme) with an explicit rental
    /// instant, so date behavior can be exercised deterministically
    pub fn alugar_filme_em(
        &self,
        usuario: Option<Usuario>,
        filmes: Vec<Filme>,
        agora: DateTime<Local>,
    ) -> LocadoraResult<Locacao> {
        let usuario = usuario.ok_or_else(|| {
            debug!("rental rejected: no user supplied");
            LocadoraError::UsuarioVazio
        })?;

        if filmes.is_empty() {
            debug!(usuario = usuario.nome(), "rental rejected: empty film list");
            return Err(LocadoraError::FilmeVazio);
        }

        if let Some(esgotado) = filmes.iter().find(|filme| filme.estoque() == 0) {
            debug!(filme = esgotado.nome(), "rental rejected: film out of stock");
            return Err(LocadoraError::FilmeSemEstoque {
                nome: esgotado.nome().to_string(),
            });
        }

        usuario.validate()?;
        for filme in &filmes {
            filme.validate()?;
        }

        let valor = RentalPricing::calculate_total(&filmes);

        let data_locacao = agora;
        let mut data_retorno = dates::add_days(data_locacao, 1);
        if dates::is_weekday(data_retorno, Weekday::Sun) {
            data_retorno = dates::add_days(data_retorno, 1);
        }

        debug!(
            usuario = usuario.nome(),
            filmes = filmes.len(),
            %valor,
            "rental priced"
        );

        Ok(Locacao::new(
            usuario,
            filmes,
            data_locacao,
            data_retorno,
            valor,
        ))
    }
}
