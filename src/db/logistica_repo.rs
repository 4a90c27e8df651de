// src/db/logistica_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::logistica::{
        FiltroSolicitacoes, NovaSolicitacao, SolicitacaoLogistica, StatusSolicitacao,
    },
};

#[derive(Clone)]
pub struct LogisticaRepository {
    pool: PgPool,
}

impl LogisticaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<SolicitacaoLogistica>, AppError> {
        let solicitacao = sqlx::query_as::<_, SolicitacaoLogistica>(
            "SELECT * FROM solicitacoes_logistica WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(solicitacao)
    }

    // A listagem carrega o predicado de escopo na própria consulta: o
    // filtro por fornecedor/data nunca é aplicado só na memória.
    pub async fn list(
        &self,
        filtro: FiltroSolicitacoes,
    ) -> Result<Vec<SolicitacaoLogistica>, AppError> {
        let solicitacoes = match filtro {
            FiltroSolicitacoes::Todas => {
                sqlx::query_as::<_, SolicitacaoLogistica>(
                    "SELECT * FROM solicitacoes_logistica ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
            FiltroSolicitacoes::PorFornecedor(cod_fornecedor) => {
                self.list_by_fornecedor(cod_fornecedor).await?
            }
            FiltroSolicitacoes::PorData(data) => self.list_by_data(data).await?,
        };
        Ok(solicitacoes)
    }

    pub async fn list_by_fornecedor(
        &self,
        cod_fornecedor: Uuid,
    ) -> Result<Vec<SolicitacaoLogistica>, AppError> {
        let solicitacoes = sqlx::query_as::<_, SolicitacaoLogistica>(
            r#"
            SELECT * FROM solicitacoes_logistica
            WHERE fornecedor_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(cod_fornecedor)
        .fetch_all(&self.pool)
        .await?;
        Ok(solicitacoes)
    }

    pub async fn list_by_data(
        &self,
        data_desejada: NaiveDate,
    ) -> Result<Vec<SolicitacaoLogistica>, AppError> {
        let solicitacoes = sqlx::query_as::<_, SolicitacaoLogistica>(
            r#"
            SELECT * FROM solicitacoes_logistica
            WHERE data_desejada = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(data_desejada)
        .fetch_all(&self.pool)
        .await?;
        Ok(solicitacoes)
    }

    /// Insere uma solicitação. O `fornecedor_id` recebido aqui já passou
    /// pelo escopo do serviço (terceiro nunca grava fornecedor alheio).
    pub async fn insert(
        &self,
        dados: &NovaSolicitacao,
        fornecedor_id: Uuid,
        status: StatusSolicitacao,
    ) -> Result<SolicitacaoLogistica, AppError> {
        let solicitacao = sqlx::query_as::<_, SolicitacaoLogistica>(
            r#"
            INSERT INTO solicitacoes_logistica
                (tipo, produto_id, fornecedor_id, quantidade, data_desejada, periodo, observacoes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(dados.tipo)
        .bind(dados.produto_id)
        .bind(fornecedor_id)
        .bind(dados.quantidade)
        .bind(dados.data_desejada)
        .bind(dados.periodo)
        .bind(dados.observacoes.as_deref())
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(solicitacao)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        novo_status: StatusSolicitacao,
    ) -> Result<SolicitacaoLogistica, AppError> {
        sqlx::query_as::<_, SolicitacaoLogistica>(
            "UPDATE solicitacoes_logistica SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(novo_status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::RequestNotFound)
    }
}
