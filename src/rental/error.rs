use thiserror::Error;

/// Error types for rental operations
///
/// Every variant is a caller-input defect reported synchronously; nothing is
/// recovered internally and retrying with the same inputs fails again. The
/// `Display` messages for the empty-user and empty-film-list cases are part of
/// the service contract.
#[derive(Debug, Error)]
pub enum LocadoraError {
    /// No user was supplied for the rental
    #[error("Usuario vazio")]
    UsuarioVazio,

    /// The film list was empty
    #[error("Filme vazio")]
    FilmeVazio,

    /// At least one requested film has no available stock
    ///
    /// The message stays generic; the offending film is carried on the
    /// variant for callers that want to report it.
    #[error("Filme sem estoque")]
    FilmeSemEstoque { nome: String },

    /// An entity failed its intrinsic field validation
    #[error("Validation failed: {0}")]
    Validacao(#[from] validator::ValidationErrors),
}

/// Result type alias for rental operations
pub type LocadoraResult<T> = Result<T, LocadoraError>;
