// src/db/user_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{Modulo, TipoUsuario, Usuario},
};

// O repositório de usuários, responsável por todas as interações com a
// tabela 'usuarios'.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu nome de login
    pub async fn find_by_login(&self, login: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE usuario = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await?;
        Ok(usuario)
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(usuario)
    }

    pub async fn list_all(&self) -> Result<Vec<Usuario>, AppError> {
        let usuarios = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios ORDER BY usuario ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(usuarios)
    }

    // Cria um novo usuário. A senha já chega com hash aplicado.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        login: &str,
        senha_hash: &str,
        email: Option<&str>,
        telefone: Option<&str>,
        tipo: TipoUsuario,
        funcionario_id: Option<Uuid>,
        fornecedor_id: Option<Uuid>,
        permissoes: &[Modulo],
    ) -> Result<Usuario, AppError> {
        sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios
                (usuario, senha, email, telefone, tipo, funcionario_id, fornecedor_id, permissoes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(login)
        .bind(senha_hash)
        .bind(email)
        .bind(telefone)
        .bind(tipo)
        .bind(funcionario_id)
        .bind(fornecedor_id)
        .bind(permissoes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Converte violação de chave única em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::UsernameAlreadyExists;
                }
            }
            e.into()
        })
    }

    // Atualiza apenas a credencial (troca de senha)
    pub async fn update_senha(&self, id: Uuid, senha_hash: &str) -> Result<Usuario, AppError> {
        sqlx::query_as::<_, Usuario>(
            "UPDATE usuarios SET senha = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(senha_hash)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::UserNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if resultado.rows_affected() == 0 {
            return Err(AppError::UserNotFound);
        }
        Ok(())
    }
}
