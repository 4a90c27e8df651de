// src/services/auth_service.rs

use bcrypt::{hash, verify};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{TrocaDeSenha, Usuario},
};

/// Resultado de um login bem-sucedido. `senha_legada` indica que a
/// credencial armazenada ainda é texto puro (registros anteriores à
/// introdução do hash); a interface deve *sugerir* a troca de senha,
/// sem forçá-la nem regravar a credencial silenciosamente.
#[derive(Debug)]
pub struct LoginOk {
    pub usuario: Usuario,
    pub senha_legada: bool,
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
}

impl AuthService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    pub async fn login(&self, login: &str, senha: &str) -> Result<LoginOk, AppError> {
        let usuario = self
            .user_repo
            .find_by_login(login.trim())
            .await?
            .ok_or(AppError::UserNotFound)?;

        let senha = senha.trim().to_owned();
        let armazenada = usuario.senha.clone();

        // Executa a verificação bcrypt em um thread separado. Uma senha
        // legada em texto puro não é um hash válido: `verify` falha, e
        // caímos na comparação direta de compatibilidade.
        let senha_legada = tokio::task::spawn_blocking(move || {
            match verify(&senha, &armazenada) {
                Ok(true) => Some(false),
                _ => (armazenada == senha).then_some(true),
            }
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))?;

        let Some(senha_legada) = senha_legada else {
            return Err(AppError::InvalidCredentials);
        };

        if senha_legada {
            tracing::warn!(
                "Usuário '{}' autenticou com senha legada sem hash.",
                usuario.usuario
            );
        }
        tracing::info!("Login de '{}'", usuario.usuario);

        Ok(LoginOk {
            usuario,
            senha_legada,
        })
    }

    /// Troca a senha do usuário. A senha atual é conferida contra o
    /// registro recém-carregado do banco (não contra a sessão), com a
    /// mesma regra dupla hash-ou-legado do login.
    pub async fn alterar_senha(&self, id: Uuid, dados: TrocaDeSenha) -> Result<Usuario, AppError> {
        dados.validate()?;

        let usuario = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let atual = dados.senha_atual.trim().to_owned();
        let armazenada = usuario.senha.clone();
        let confere = tokio::task::spawn_blocking(move || {
            matches!(verify(&atual, &armazenada), Ok(true)) || armazenada == atual
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))?;

        if !confere {
            return Err(AppError::InvalidCredentials);
        }

        let nova = dados.nova_senha.trim().to_owned();
        let novo_hash = tokio::task::spawn_blocking(move || hash(&nova, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let atualizado = self.user_repo.update_senha(id, &novo_hash).await?;
        tracing::info!("Senha alterada para '{}'", atualizado.usuario);
        Ok(atualizado)
    }
}
