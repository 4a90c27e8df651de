// src/services/logistica_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::LogisticaRepository,
    models::{
        auth::{TipoUsuario, Usuario},
        logistica::{
            FiltroSolicitacoes, NovaSolicitacao, SolicitacaoLogistica, StatusSolicitacao,
        },
    },
};

#[derive(Clone)]
pub struct LogisticaService {
    repo: LogisticaRepository,
}

impl LogisticaService {
    pub fn new(repo: LogisticaRepository) -> Self {
        Self { repo }
    }

    /// Cria uma solicitação, sempre em `Pendente`.
    ///
    /// Para um solicitante terceiro, o fornecedor gravado é SEMPRE o
    /// vínculo do próprio usuário: qualquer `fornecedor_id` vindo no
    /// payload é ignorado, impedindo que um fornecedor abra solicitação
    /// em nome de outro. Funcionários internos escolhem o fornecedor.
    pub async fn criar_solicitacao(
        &self,
        solicitante: &Usuario,
        dados: NovaSolicitacao,
    ) -> Result<SolicitacaoLogistica, AppError> {
        dados.validate()?;

        let fornecedor_id = fornecedor_da_solicitacao(solicitante, dados.fornecedor_id)?;

        let criada = self
            .repo
            .insert(&dados, fornecedor_id, StatusSolicitacao::Pendente)
            .await?;
        tracing::info!(
            "Solicitação {} criada por '{}' (fornecedor {})",
            criada.id,
            solicitante.usuario,
            fornecedor_id
        );
        Ok(criada)
    }

    /// Avança o status de uma solicitação. Somente funcionários internos
    /// dirigem transições; uma transição fora da adjacência do ciclo de
    /// vida é recusada com erro próprio, distinto de "não encontrada".
    pub async fn alterar_status(
        &self,
        solicitante: &Usuario,
        id: Uuid,
        novo_status: StatusSolicitacao,
    ) -> Result<SolicitacaoLogistica, AppError> {
        autorizar_operacao_interna(solicitante)?;

        let atual = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::RequestNotFound)?;

        if !atual.status.pode_avancar_para(novo_status) {
            return Err(AppError::InvalidStatusTransition {
                from: atual.status,
                to: novo_status,
            });
        }

        let atualizada = self.repo.update_status(id, novo_status).await?;
        tracing::info!("Solicitação {} alterada para {}", id, novo_status);
        Ok(atualizada)
    }

    /// Lista solicitações. Um terceiro é sempre pré-escopado ao próprio
    /// fornecedor no predicado da consulta (o filtro pedido é ignorado);
    /// um terceiro sem vínculo enxerga uma lista vazia. Funcionários
    /// internos usam o filtro pedido.
    pub async fn listar(
        &self,
        solicitante: &Usuario,
        filtro: FiltroSolicitacoes,
    ) -> Result<Vec<SolicitacaoLogistica>, AppError> {
        match escopo_de_listagem(solicitante, filtro) {
            Some(escopado) => self.repo.list(escopado).await,
            None => Ok(Vec::new()),
        }
    }
}

// Resolve o fornecedor que a solicitação vai referenciar.
fn fornecedor_da_solicitacao(
    solicitante: &Usuario,
    fornecedor_payload: Option<Uuid>,
) -> Result<Uuid, AppError> {
    match solicitante.tipo {
        TipoUsuario::Terceiro => solicitante
            .fornecedor_id
            .ok_or(AppError::AccessDenied),
        TipoUsuario::Funcionario => fornecedor_payload
            .ok_or_else(|| AppError::RequiredField("Selecione o Fornecedor".into())),
    }
}

// Transições de status são exclusivas de funcionários internos.
fn autorizar_operacao_interna(solicitante: &Usuario) -> Result<(), AppError> {
    match solicitante.tipo {
        TipoUsuario::Funcionario => Ok(()),
        TipoUsuario::Terceiro => Err(AppError::AccessDenied),
    }
}

// `None` significa "nenhuma linha visível" (terceiro sem vínculo).
fn escopo_de_listagem(
    solicitante: &Usuario,
    filtro: FiltroSolicitacoes,
) -> Option<FiltroSolicitacoes> {
    match solicitante.tipo {
        TipoUsuario::Funcionario => Some(filtro),
        TipoUsuario::Terceiro => solicitante
            .fornecedor_id
            .map(FiltroSolicitacoes::PorFornecedor),
    }
}
