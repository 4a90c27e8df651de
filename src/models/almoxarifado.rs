// src/models/almoxarifado.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// --- Produtos (catálogo + saldo) ---
// `quantidade_atual` é o saldo físico corrente; as movimentações de
// entrada e saída o ajustam dentro da mesma transação do registro.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Produto {
    pub cod_produto: Uuid,
    pub descricao: String,
    pub quantidade_atual: i64,
    pub created_at: DateTime<Utc>,
}

// --- Fornecedores ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fornecedor {
    pub cod_fornecedor: Uuid,
    pub nome: String,
    pub cnpj: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- Entradas de material (tabela 'entradas') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entrada {
    pub id: Uuid,
    pub produto_id: Uuid,
    pub fornecedor_id: Uuid,
    pub quantidade_entrada: i64,
    pub local_estoque: Option<String>,
    pub data_entrada: DateTime<Utc>,
}

// --- Saídas de material (tabela 'saidas') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Saida {
    pub id: Uuid,
    pub produto_id: Uuid,
    pub funcionario_id: Uuid,
    pub quantidade: i64,
    pub data_saida: DateTime<Utc>,
}

// Dados para cadastro de produto
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovoProduto {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub descricao: String,
    #[validate(range(min = 0, message = "A quantidade inicial não pode ser negativa."))]
    pub quantidade_atual: i64,
}

// Dados para cadastro de fornecedor
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovoFornecedor {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
    pub cnpj: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
}

// Dados para registrar uma entrada de material
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovaEntrada {
    pub produto_id: Uuid,
    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub quantidade_entrada: i64,
    pub fornecedor_id: Uuid,
    pub local_estoque: Option<String>,
}

// Dados para registrar uma saída de material
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovaSaida {
    pub produto_id: Uuid,
    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub quantidade: i64,
    pub funcionario_id: Uuid,
}

impl NovaSaida {
    /// Monta a saída a partir do payload plano do formulário genérico.
    /// A quantidade é coagida numericamente ("6" e 6 são equivalentes).
    pub fn do_formulario(
        valores: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, crate::common::AppError> {
        use crate::forms::payload;
        Ok(Self {
            produto_id: payload::id(valores, "produto_id")?,
            quantidade: payload::numero(valores, "quantidade")?,
            funcionario_id: payload::id(valores, "funcionario_id")?,
        })
    }
}
