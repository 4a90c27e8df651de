// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login do usuário Master. Ele tem acesso irrestrito a todos os módulos
/// e nunca pode ser excluído pela administração.
pub const USUARIO_MASTER: &str = "Wesley.benevides";

// Os módulos da aplicação. Um conjunto fechado: o que antes era uma
// string livre ("almoxarifado", "rh", ...) agora é um enum, e qualquer
// tag desconhecida falha na desserialização em vez de passar adiante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum Modulo {
    Home,
    Almoxarifado,
    Rh,
    Logistica,
    Administracao,
}

impl Modulo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modulo::Home => "home",
            Modulo::Almoxarifado => "almoxarifado",
            Modulo::Rh => "rh",
            Modulo::Logistica => "logistica",
            Modulo::Administracao => "administracao",
        }
    }
}

impl std::fmt::Display for Modulo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Tipo de usuário: funcionário interno (RH) ou terceiro (fornecedor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum TipoUsuario {
    Funcionario,
    Terceiro,
}

// Representa um usuário vindo do banco de dados (tabela 'usuarios').
// Invariante: exatamente um entre `funcionario_id` e `fornecedor_id`
// está preenchido, conforme o `tipo` (garantido pelo AdminService).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub usuario: String,

    // Hash bcrypt (ou senha legada em texto puro; ver AuthService).
    // Nunca serializada: a sessão persistida não carrega a credencial.
    #[serde(skip_serializing, default)]
    pub senha: String,

    pub email: Option<String>,
    pub telefone: Option<String>,
    pub tipo: TipoUsuario,
    pub permissoes: Vec<Modulo>,
    pub funcionario_id: Option<Uuid>,
    pub fornecedor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Usuario {
    pub fn is_master(&self) -> bool {
        self.usuario == USUARIO_MASTER
    }
}

// Dados para cadastro de um novo usuário (módulo Administração)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovoUsuario {
    #[validate(length(min = 3, message = "O nome de usuário deve ter no mínimo 3 caracteres."))]
    pub usuario: String,
    #[validate(length(min = 4, message = "A senha deve ter pelo menos 4 caracteres."))]
    pub senha: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub tipo: TipoUsuario,
    pub funcionario_id: Option<Uuid>,
    pub fornecedor_id: Option<Uuid>,
    #[serde(default)]
    pub permissoes: Vec<Modulo>,
}

// Dados para troca de senha
#[derive(Debug, Deserialize, Validate)]
pub struct TrocaDeSenha {
    pub senha_atual: String,
    #[validate(length(min = 4, message = "A nova senha deve ter pelo menos 4 caracteres."))]
    pub nova_senha: String,
}


#[cfg(test)]
pub(crate) fn usuario_de_teste(login: &str, tipo: TipoUsuario, permissoes: Vec<Modulo>) -> Usuario {
    Usuario {
        id: Uuid::new_v4(),
        usuario: login.to_string(),
        senha: String::new(),
        email: None,
        telefone: None,
        tipo,
        permissoes,
        funcionario_id: None,
        fornecedor_id: None,
        created_at: Utc::now(),
    }
}
