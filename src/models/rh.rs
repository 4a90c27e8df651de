// src/models/rh.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// --- Setores (tabela 'setores') ---
// Referenciado por 'funcionarios'; a exclusão é bloqueada pelo banco
// enquanto houver funcionários vinculados.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Setor {
    pub cod_setor: Uuid,
    pub descricao: String,
    pub created_at: DateTime<Utc>,
}

// --- Funcionários (tabela 'funcionarios') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Funcionario {
    pub id: Uuid,
    pub nome: String,
    pub matricula: String,
    pub setor_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovoSetor {
    #[validate(length(min = 1, message = "A descrição do setor é obrigatória."))]
    pub descricao: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovoFuncionario {
    #[validate(length(min = 1, message = "O nome completo é obrigatório."))]
    pub nome: String,
    #[validate(length(min = 1, message = "A matrícula é obrigatória."))]
    pub matricula: String,
    pub setor_id: Uuid,
}
