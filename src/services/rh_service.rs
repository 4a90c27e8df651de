// src/services/rh_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::RhRepository,
    models::rh::{Funcionario, NovoFuncionario, NovoSetor, Setor},
};

#[derive(Clone)]
pub struct RhService {
    repo: RhRepository,
}

impl RhService {
    pub fn new(repo: RhRepository) -> Self {
        Self { repo }
    }

    pub async fn listar_funcionarios(&self) -> Result<Vec<Funcionario>, AppError> {
        self.repo.get_all_funcionarios().await
    }

    pub async fn listar_setores(&self) -> Result<Vec<Setor>, AppError> {
        self.repo.get_all_setores().await
    }

    pub async fn criar_funcionario(&self, dados: NovoFuncionario) -> Result<Funcionario, AppError> {
        dados.validate()?;
        self.repo.create_funcionario(&dados).await
    }

    pub async fn atualizar_funcionario(
        &self,
        id: Uuid,
        dados: NovoFuncionario,
    ) -> Result<Funcionario, AppError> {
        dados.validate()?;
        self.repo.update_funcionario(id, &dados).await
    }

    pub async fn criar_setor(&self, dados: NovoSetor) -> Result<Setor, AppError> {
        dados.validate()?;
        self.repo.create_setor(&dados).await
    }

    pub async fn atualizar_setor(&self, cod_setor: Uuid, dados: NovoSetor) -> Result<Setor, AppError> {
        dados.validate()?;
        self.repo.update_setor(cod_setor, &dados).await
    }

    pub async fn excluir_funcionario(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_funcionario(id).await
    }

    /// Exclui um setor. Se houver funcionários vinculados, o banco
    /// devolve violação de FK e o chamador recebe `RecordInUse` com a
    /// mensagem de conflito; o setor permanece.
    pub async fn excluir_setor(&self, cod_setor: Uuid) -> Result<(), AppError> {
        self.repo.delete_setor(cod_setor).await
    }
}
