// src/services/admin_service.rs

use bcrypt::hash;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{NovoUsuario, TipoUsuario, Usuario},
};

#[derive(Clone)]
pub struct AdminService {
    user_repo: UserRepository,
}

impl AdminService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    pub async fn listar_usuarios(&self) -> Result<Vec<Usuario>, AppError> {
        self.user_repo.list_all().await
    }

    /// Cadastra um novo usuário, garantindo o invariante de vínculo:
    /// exatamente uma das referências (funcionário ou fornecedor) fica
    /// preenchida, de acordo com o tipo. Um vínculo do tipo oposto que
    /// tenha vindo no payload é descartado, nunca gravado.
    pub async fn criar_usuario(&self, dados: NovoUsuario) -> Result<Usuario, AppError> {
        dados.validate()?;

        let (funcionario_id, fornecedor_id) =
            vinculo_para(dados.tipo, dados.funcionario_id, dados.fornecedor_id)?;

        let senha = dados.senha.clone();
        let senha_hash = tokio::task::spawn_blocking(move || hash(&senha, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let criado = self
            .user_repo
            .create(
                &dados.usuario,
                &senha_hash,
                dados.email.as_deref(),
                dados.telefone.as_deref(),
                dados.tipo,
                funcionario_id,
                fornecedor_id,
                &dados.permissoes,
            )
            .await?;

        tracing::info!("Usuário '{}' criado pela administração", criado.usuario);
        Ok(criado)
    }

    /// Exclui um usuário. O Master é recusado antes de qualquer chamada
    /// ao banco, com aviso visível ao chamador.
    pub async fn excluir_usuario(&self, id: Uuid) -> Result<(), AppError> {
        let usuario = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if usuario.is_master() {
            tracing::warn!("Tentativa de excluir o usuário Master recusada");
            return Err(AppError::MasterUserProtected);
        }

        self.user_repo.delete(id).await?;
        tracing::info!("Usuário '{}' excluído", usuario.usuario);
        Ok(())
    }
}

// Resolve o par (funcionario_id, fornecedor_id) a partir do tipo do
// usuário. O vínculo correspondente ao tipo é obrigatório; o oposto é
// zerado mesmo que o chamador o tenha enviado.
fn vinculo_para(
    tipo: TipoUsuario,
    funcionario_id: Option<Uuid>,
    fornecedor_id: Option<Uuid>,
) -> Result<(Option<Uuid>, Option<Uuid>), AppError> {
    match tipo {
        TipoUsuario::Funcionario => {
            let id = funcionario_id
                .ok_or_else(|| AppError::RequiredField("Vincular a Funcionário".into()))?;
            Ok((Some(id), None))
        }
        TipoUsuario::Terceiro => {
            let id = fornecedor_id
                .ok_or_else(|| AppError::RequiredField("Vincular a Fornecedor".into()))?;
            Ok((None, Some(id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vinculo_de_funcionario_descarta_fornecedor() {
        let func = Uuid::new_v4();
        let forn = Uuid::new_v4();
        let (funcionario_id, fornecedor_id) =
            vinculo_para(TipoUsuario::Funcionario, Some(func), Some(forn)).unwrap();
        assert_eq!(funcionario_id, Some(func));
        assert_eq!(fornecedor_id, None);
    }

    #[test]
    fn vinculo_de_terceiro_descarta_funcionario() {
        let func = Uuid::new_v4();
        let forn = Uuid::new_v4();
        let (funcionario_id, fornecedor_id) =
            vinculo_para(TipoUsuario::Terceiro, Some(func), Some(forn)).unwrap();
        assert_eq!(funcionario_id, None);
        assert_eq!(fornecedor_id, Some(forn));
    }

    #[test]
    fn vinculo_correspondente_ao_tipo_e_obrigatorio() {
        assert!(matches!(
            vinculo_para(TipoUsuario::Funcionario, None, Some(Uuid::new_v4())),
            Err(AppError::RequiredField(_))
        ));
        assert!(matches!(
            vinculo_para(TipoUsuario::Terceiro, Some(Uuid::new_v4()), None),
            Err(AppError::RequiredField(_))
        ));
    }
}
