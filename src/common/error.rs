use thiserror::Error;

use crate::models::logistica::StatusSolicitacao;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Toda falha que chega ao usuário passa por aqui: as mensagens são as
// que a interface exibe, por isso estão em português.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Campo obrigatório não preenchido: {0}")]
    RequiredField(String),

    #[error("Valor numérico inválido no campo: {0}")]
    InvalidNumber(String),

    #[error("Estoque insuficiente! Disponível: {available} | Solicitado: {requested}")]
    InsufficientStock { available: i64, requested: i64 },

    #[error("Transição de status inválida: {from} -> {to}")]
    InvalidStatusTransition {
        from: StatusSolicitacao,
        to: StatusSolicitacao,
    },

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Solicitação não encontrada")]
    RequestNotFound,

    #[error("Registro não encontrado")]
    RecordNotFound,

    #[error("Senha incorreta")]
    InvalidCredentials,

    #[error("Não é possível excluir o usuário Master")]
    MasterUserProtected,

    #[error("Usuário sem permissão para esta operação")]
    AccessDenied,

    #[error("Este nome de usuário já está em uso")]
    UsernameAlreadyExists,

    // Violação de chave estrangeira em um DELETE: o registro está sendo
    // referenciado em outra tabela e a exclusão deve ser recusada.
    #[error("Não é possível excluir: {0}")]
    RecordInUse(String),

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro de E/S: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Ocorreu um erro inesperado")]
    InternalServerError(#[from] anyhow::Error),
}
