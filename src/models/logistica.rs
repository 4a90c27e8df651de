// src/models/logistica.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// Tipo da solicitação: coleta (retirar material) ou entrega.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum TipoSolicitacao {
    Coleta,
    Entrega,
}

// Período preferencial para a coleta/entrega.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum Periodo {
    #[serde(rename = "Manhã")]
    #[sqlx(rename = "Manhã")]
    Manha,
    Tarde,
    Comercial,
}

/// Status de uma solicitação de logística.
///
/// O ciclo de vida é estritamente sequencial:
/// `Pendente -> {Aprovado, Recusado}`, `Aprovado -> Em Trânsito`,
/// `Em Trânsito -> Concluído`. `Recusado` e `Concluído` são terminais;
/// não há saltos nem retrocessos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum StatusSolicitacao {
    Pendente,
    Aprovado,
    #[serde(rename = "Em Trânsito")]
    #[sqlx(rename = "Em Trânsito")]
    EmTransito,
    #[serde(rename = "Concluído")]
    #[sqlx(rename = "Concluído")]
    Concluido,
    Recusado,
}

impl StatusSolicitacao {
    /// Verifica se a transição `self -> novo` é um dos pares adjacentes
    /// permitidos do ciclo de vida.
    pub fn pode_avancar_para(self, novo: StatusSolicitacao) -> bool {
        use StatusSolicitacao::*;
        matches!(
            (self, novo),
            (Pendente, Aprovado)
                | (Pendente, Recusado)
                | (Aprovado, EmTransito)
                | (EmTransito, Concluido)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, StatusSolicitacao::Recusado | StatusSolicitacao::Concluido)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusSolicitacao::Pendente => "Pendente",
            StatusSolicitacao::Aprovado => "Aprovado",
            StatusSolicitacao::EmTransito => "Em Trânsito",
            StatusSolicitacao::Concluido => "Concluído",
            StatusSolicitacao::Recusado => "Recusado",
        }
    }
}

impl std::fmt::Display for StatusSolicitacao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Solicitações (tabela 'solicitacoes_logistica') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SolicitacaoLogistica {
    pub id: Uuid,
    pub tipo: TipoSolicitacao,
    pub produto_id: Uuid,
    pub fornecedor_id: Uuid,
    pub quantidade: i64,
    pub data_desejada: NaiveDate,
    pub periodo: Periodo,
    pub observacoes: Option<String>,
    pub status: StatusSolicitacao,
    pub created_at: DateTime<Utc>,
}

// Dados para criar uma solicitação. `fornecedor_id` só é considerado
// quando o solicitante é funcionário interno; para terceiros o vínculo
// do próprio usuário prevalece (ver LogisticaService).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovaSolicitacao {
    pub tipo: TipoSolicitacao,
    pub produto_id: Uuid,
    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub quantidade: i64,
    pub data_desejada: NaiveDate,
    pub periodo: Periodo,
    pub observacoes: Option<String>,
    pub fornecedor_id: Option<Uuid>,
}

// Filtros de listagem disponíveis para funcionários internos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiltroSolicitacoes {
    Todas,
    PorFornecedor(Uuid),
    PorData(NaiveDate),
}

#[cfg(test)]
mod tests {
    use super::StatusSolicitacao::*;

    #[test]
    fn transicoes_adjacentes_sao_permitidas() {
        assert!(Pendente.pode_avancar_para(Aprovado));
        assert!(Pendente.pode_avancar_para(Recusado));
        assert!(Aprovado.pode_avancar_para(EmTransito));
        assert!(EmTransito.pode_avancar_para(Concluido));
    }

    #[test]
    fn nao_ha_saltos_para_frente() {
        assert!(!Pendente.pode_avancar_para(EmTransito));
        assert!(!Pendente.pode_avancar_para(Concluido));
        assert!(!Aprovado.pode_avancar_para(Concluido));
    }

    #[test]
    fn nao_ha_retrocesso() {
        assert!(!Aprovado.pode_avancar_para(Pendente));
        assert!(!EmTransito.pode_avancar_para(Aprovado));
        assert!(!Recusado.pode_avancar_para(Pendente));
    }

    #[test]
    fn estados_terminais_nao_avancam() {
        for novo in [Pendente, Aprovado, EmTransito, Concluido, Recusado] {
            assert!(!Concluido.pode_avancar_para(novo));
            assert!(!Recusado.pode_avancar_para(novo));
        }
        assert!(Concluido.is_terminal());
        assert!(Recusado.is_terminal());
        assert!(!Pendente.is_terminal());
    }

    #[test]
    fn status_nao_transiciona_para_si_mesmo() {
        for status in [Pendente, Aprovado, EmTransito, Concluido, Recusado] {
            assert!(!status.pode_avancar_para(status));
        }
    }
}
