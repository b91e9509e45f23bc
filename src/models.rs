use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A renter identity.
///
/// Value object: two users with the same name compare equal, and a user
/// cannot be changed after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Usuario {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    nome: String,
}

impl Usuario {
    pub fn new(nome: impl Into<String>) -> Self {
        Self { nome: nome.into() }
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }
}

/// A rentable film with its available stock and per-rental unit price.
///
/// Immutable value type with structural equality. Stock is allowed to be
/// zero at construction; availability is only enforced when renting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Filme {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    nome: String,
    estoque: u32,
    #[validate(custom = "crate::validation::validate_preco_positivo")]
    preco_locacao: Decimal,
}

impl Filme {
    pub fn new(nome: impl Into<String>, estoque: u32, preco_locacao: Decimal) -> Self {
        Self {
            nome: nome.into(),
            estoque,
            preco_locacao,
        }
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn estoque(&self) -> u32 {
        self.estoque
    }

    pub fn preco_locacao(&self) -> Decimal {
        self.preco_locacao
    }
}

/// A completed rental transaction.
///
/// Produced exactly once per successful call to
/// [`LocacaoService::alugar_filme`](crate::rental::LocacaoService::alugar_filme)
/// and never mutated afterwards. `valor` is the discounted total for the
/// rented films and `data_retorno` never falls on a Sunday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Locacao {
    usuario: Usuario,
    filmes: Vec<Filme>,
    data_locacao: DateTime<Local>,
    data_retorno: DateTime<Local>,
    valor: Decimal,
}

impl Locacao {
    pub(crate) fn new(
        usuario: Usuario,
        filmes: Vec<Filme>,
        data_locacao: DateTime<Local>,
        data_retorno: DateTime<Local>,
        valor: Decimal,
    ) -> Self {
        Self {
            usuario,
            filmes,
            data_locacao,
            data_retorno,
            valor,
        }
    }

    pub fn usuario(&self) -> &Usuario {
        &self.usuario
    }

    pub fn filmes(&self) -> &[Filme] {
        &self.filmes
    }

    pub fn data_locacao(&self) -> DateTime<Local> {
        self.data_locacao
    }

    pub fn data_retorno(&self) -> DateTime<Local> {
        self.data_retorno
    }

    pub fn valor(&self) -> Decimal {
        self.valor
    }
}
