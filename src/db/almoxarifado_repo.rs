// src/db/almoxarifado_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::almoxarifado::{Entrada, Fornecedor, NovaEntrada, NovaSaida, Produto, Saida},
};

#[derive(Clone)]
pub struct AlmoxarifadoRepository {
    pool: PgPool,
}

impl AlmoxarifadoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Funções de "Leitura" (Getters)
    // ---
    // Leituras simples usam a pool principal.

    pub async fn get_all_produtos(&self) -> Result<Vec<Produto>, AppError> {
        let produtos =
            sqlx::query_as::<_, Produto>("SELECT * FROM produtos ORDER BY descricao ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(produtos)
    }

    pub async fn find_produto(&self, cod_produto: Uuid) -> Result<Option<Produto>, AppError> {
        let produto =
            sqlx::query_as::<_, Produto>("SELECT * FROM produtos WHERE cod_produto = $1")
                .bind(cod_produto)
                .fetch_optional(&self.pool)
                .await?;
        Ok(produto)
    }

    pub async fn get_all_fornecedores(&self) -> Result<Vec<Fornecedor>, AppError> {
        let fornecedores =
            sqlx::query_as::<_, Fornecedor>("SELECT * FROM fornecedores ORDER BY nome ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(fornecedores)
    }

    pub async fn get_all_entradas(&self) -> Result<Vec<Entrada>, AppError> {
        let entradas =
            sqlx::query_as::<_, Entrada>("SELECT * FROM entradas ORDER BY data_entrada DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(entradas)
    }

    pub async fn get_all_saidas(&self) -> Result<Vec<Saida>, AppError> {
        let saidas = sqlx::query_as::<_, Saida>("SELECT * FROM saidas ORDER BY data_saida DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(saidas)
    }

    // ---
    // Funções de "Escrita" (Transacionais)
    // ---
    // Estas usam o padrão genérico 'Executor' para rodar dentro de uma
    // transação aberta pelo serviço.

    pub async fn create_produto<'e, E>(
        &self,
        executor: E,
        descricao: &str,
        quantidade_atual: i64,
    ) -> Result<Produto, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let produto = sqlx::query_as::<_, Produto>(
            r#"
            INSERT INTO produtos (descricao, quantidade_atual)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(descricao)
        .bind(quantidade_atual)
        .fetch_one(executor)
        .await?;
        Ok(produto)
    }

    pub async fn create_fornecedor<'e, E>(
        &self,
        executor: E,
        nome: &str,
        cnpj: Option<&str>,
        telefone: Option<&str>,
        endereco: Option<&str>,
    ) -> Result<Fornecedor, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let fornecedor = sqlx::query_as::<_, Fornecedor>(
            r#"
            INSERT INTO fornecedores (nome, cnpj, telefone, endereco)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(cnpj)
        .bind(telefone)
        .bind(endereco)
        .fetch_one(executor)
        .await?;
        Ok(fornecedor)
    }

    /// Busca o produto travando a linha (`FOR UPDATE`): a validação de
    /// estoque e o decremento acontecem sob o mesmo lock, dentro da
    /// transação do chamador.
    pub async fn find_produto_para_atualizacao<'e, E>(
        &self,
        executor: E,
        cod_produto: Uuid,
    ) -> Result<Option<Produto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let produto = sqlx::query_as::<_, Produto>(
            "SELECT * FROM produtos WHERE cod_produto = $1 FOR UPDATE",
        )
        .bind(cod_produto)
        .fetch_optional(executor)
        .await?;
        Ok(produto)
    }

    /// Ajusta o saldo do produto. `delta` positivo para entradas,
    /// negativo para saídas.
    pub async fn ajustar_estoque<'e, E>(
        &self,
        executor: E,
        cod_produto: Uuid,
        delta: i64,
    ) -> Result<Produto, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Produto>(
            r#"
            UPDATE produtos
            SET quantidade_atual = quantidade_atual + $2
            WHERE cod_produto = $1
            RETURNING *
            "#,
        )
        .bind(cod_produto)
        .bind(delta)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::ProductNotFound)
    }

    pub async fn insert_entrada<'e, E>(
        &self,
        executor: E,
        dados: &NovaEntrada,
    ) -> Result<Entrada, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let entrada = sqlx::query_as::<_, Entrada>(
            r#"
            INSERT INTO entradas (produto_id, quantidade_entrada, fornecedor_id, local_estoque)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(dados.produto_id)
        .bind(dados.quantidade_entrada)
        .bind(dados.fornecedor_id)
        .bind(dados.local_estoque.as_deref())
        .fetch_one(executor)
        .await?;
        Ok(entrada)
    }

    pub async fn insert_saida<'e, E>(
        &self,
        executor: E,
        dados: &NovaSaida,
    ) -> Result<Saida, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let saida = sqlx::query_as::<_, Saida>(
            r#"
            INSERT INTO saidas (produto_id, quantidade, funcionario_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(dados.produto_id)
        .bind(dados.quantidade)
        .bind(dados.funcionario_id)
        .fetch_one(executor)
        .await?;
        Ok(saida)
    }

    // Exclusões: uma violação de chave estrangeira vira um erro de
    // conflito legível ("registro em uso"), não uma falha genérica.

    pub async fn delete_produto(&self, cod_produto: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM produtos WHERE cod_produto = $1")
            .bind(cod_produto)
            .execute(&self.pool)
            .await
            .map_err(mapear_fk("Este produto está sendo usado em outros registros."))?;
        if resultado.rows_affected() == 0 {
            return Err(AppError::ProductNotFound);
        }
        Ok(())
    }

    pub async fn delete_fornecedor(&self, cod_fornecedor: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM fornecedores WHERE cod_fornecedor = $1")
            .bind(cod_fornecedor)
            .execute(&self.pool)
            .await
            .map_err(mapear_fk(
                "Este fornecedor está sendo usado em outros registros.",
            ))?;
        if resultado.rows_affected() == 0 {
            return Err(AppError::RecordNotFound);
        }
        Ok(())
    }
}

// Converte violação de FK (23503) em AppError::RecordInUse, preservando
// a mensagem exibida ao usuário.
pub(crate) fn mapear_fk(mensagem: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |e: sqlx::Error| {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return AppError::RecordInUse(mensagem.to_string());
            }
        }
        e.into()
    }
}
