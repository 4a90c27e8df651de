// src/db/rh_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::almoxarifado_repo::mapear_fk,
    models::rh::{Funcionario, NovoFuncionario, NovoSetor, Setor},
};

#[derive(Clone)]
pub struct RhRepository {
    pool: PgPool,
}

impl RhRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_funcionarios(&self) -> Result<Vec<Funcionario>, AppError> {
        let funcionarios =
            sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios ORDER BY nome ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(funcionarios)
    }

    pub async fn get_all_setores(&self) -> Result<Vec<Setor>, AppError> {
        let setores = sqlx::query_as::<_, Setor>("SELECT * FROM setores ORDER BY descricao ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(setores)
    }

    pub async fn create_funcionario(&self, dados: &NovoFuncionario) -> Result<Funcionario, AppError> {
        let funcionario = sqlx::query_as::<_, Funcionario>(
            r#"
            INSERT INTO funcionarios (nome, matricula, setor_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&dados.nome)
        .bind(&dados.matricula)
        .bind(dados.setor_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(funcionario)
    }

    pub async fn update_funcionario(
        &self,
        id: Uuid,
        dados: &NovoFuncionario,
    ) -> Result<Funcionario, AppError> {
        sqlx::query_as::<_, Funcionario>(
            r#"
            UPDATE funcionarios
            SET nome = $2, matricula = $3, setor_id = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.nome)
        .bind(&dados.matricula)
        .bind(dados.setor_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::RecordNotFound)
    }

    pub async fn create_setor(&self, dados: &NovoSetor) -> Result<Setor, AppError> {
        let setor = sqlx::query_as::<_, Setor>(
            "INSERT INTO setores (descricao) VALUES ($1) RETURNING *",
        )
        .bind(&dados.descricao)
        .fetch_one(&self.pool)
        .await?;
        Ok(setor)
    }

    pub async fn update_setor(&self, cod_setor: Uuid, dados: &NovoSetor) -> Result<Setor, AppError> {
        sqlx::query_as::<_, Setor>(
            "UPDATE setores SET descricao = $2 WHERE cod_setor = $1 RETURNING *",
        )
        .bind(cod_setor)
        .bind(&dados.descricao)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::RecordNotFound)
    }

    pub async fn delete_funcionario(&self, id: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM funcionarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(mapear_fk(
                "Este funcionário está sendo usado em outros registros.",
            ))?;
        if resultado.rows_affected() == 0 {
            return Err(AppError::RecordNotFound);
        }
        Ok(())
    }

    // A exclusão falha com conflito enquanto houver funcionários
    // vinculados ao setor; a linha permanece intacta.
    pub async fn delete_setor(&self, cod_setor: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM setores WHERE cod_setor = $1")
            .bind(cod_setor)
            .execute(&self.pool)
            .await
            .map_err(mapear_fk(
                "Existem funcionários vinculados a este setor.",
            ))?;
        if resultado.rows_affected() == 0 {
            return Err(AppError::RecordNotFound);
        }
        Ok(())
    }
}
