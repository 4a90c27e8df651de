// src/services/almoxarifado_service.rs

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::AlmoxarifadoRepository,
    models::almoxarifado::{
        Entrada, Fornecedor, NovaEntrada, NovaSaida, NovoFornecedor, NovoProduto, Produto, Saida,
    },
};

/// Regra de movimentação: uma retirada só é aceita se a quantidade
/// solicitada couber no saldo disponível. Retirar exatamente o saldo é
/// permitido (zera o estoque). A comparação é sempre numérica.
pub fn validar_retirada(disponivel: i64, solicitado: i64) -> Result<(), AppError> {
    if solicitado > disponivel {
        return Err(AppError::InsufficientStock {
            available: disponivel,
            requested: solicitado,
        });
    }
    Ok(())
}

#[derive(Clone)]
pub struct AlmoxarifadoService {
    repo: AlmoxarifadoRepository,
    pool: PgPool,
}

impl AlmoxarifadoService {
    pub fn new(repo: AlmoxarifadoRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn listar_produtos(&self) -> Result<Vec<Produto>, AppError> {
        self.repo.get_all_produtos().await
    }

    pub async fn listar_fornecedores(&self) -> Result<Vec<Fornecedor>, AppError> {
        self.repo.get_all_fornecedores().await
    }

    pub async fn listar_entradas(&self) -> Result<Vec<Entrada>, AppError> {
        self.repo.get_all_entradas().await
    }

    pub async fn listar_saidas(&self) -> Result<Vec<Saida>, AppError> {
        self.repo.get_all_saidas().await
    }

    pub async fn criar_produto(&self, dados: NovoProduto) -> Result<Produto, AppError> {
        dados.validate()?;
        self.repo
            .create_produto(&self.pool, &dados.descricao, dados.quantidade_atual)
            .await
    }

    pub async fn criar_fornecedor(&self, dados: NovoFornecedor) -> Result<Fornecedor, AppError> {
        dados.validate()?;
        self.repo
            .create_fornecedor(
                &self.pool,
                &dados.nome,
                dados.cnpj.as_deref(),
                dados.telefone.as_deref(),
                dados.endereco.as_deref(),
            )
            .await
    }

    /// Registra uma entrada de material: grava a movimentação e soma a
    /// quantidade ao saldo do produto na mesma transação.
    pub async fn registrar_entrada(&self, dados: NovaEntrada) -> Result<Entrada, AppError> {
        dados.validate()?;

        let mut tx = self.pool.begin().await?;

        let produto = self
            .repo
            .find_produto_para_atualizacao(&mut *tx, dados.produto_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        self.repo
            .ajustar_estoque(&mut *tx, produto.cod_produto, dados.quantidade_entrada)
            .await?;
        let entrada = self.repo.insert_entrada(&mut *tx, &dados).await?;

        tx.commit().await?;
        tracing::info!(
            "Entrada de {} unidade(s) do produto {}",
            dados.quantidade_entrada,
            produto.descricao
        );
        Ok(entrada)
    }

    /// Registra uma saída de material.
    ///
    /// A linha do produto é travada (`FOR UPDATE`) antes da validação de
    /// saldo, e o decremento + inserção acontecem na mesma transação:
    /// duas saídas concorrentes não conseguem vender o mesmo estoque.
    pub async fn registrar_saida(&self, dados: NovaSaida) -> Result<Saida, AppError> {
        dados.validate()?;

        let mut tx = self.pool.begin().await?;

        let produto = self
            .repo
            .find_produto_para_atualizacao(&mut *tx, dados.produto_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        validar_retirada(produto.quantidade_atual, dados.quantidade)?;

        self.repo
            .ajustar_estoque(&mut *tx, produto.cod_produto, -dados.quantidade)
            .await?;
        let saida = self.repo.insert_saida(&mut *tx, &dados).await?;

        tx.commit().await?;
        tracing::info!(
            "Saída de {} unidade(s) do produto {}",
            dados.quantidade,
            produto.descricao
        );
        Ok(saida)
    }

    pub async fn excluir_produto(&self, cod_produto: Uuid) -> Result<(), AppError> {
        self.repo.delete_produto(cod_produto).await
    }

    pub async fn excluir_fornecedor(&self, cod_fornecedor: Uuid) -> Result<(), AppError> {
        self.repo.delete_fornecedor(cod_fornecedor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::payload::coagir_numero;
    use serde_json::json;

    #[test]
    fn retirada_igual_ao_saldo_e_aceita() {
        assert!(validar_retirada(10, 10).is_ok());
        assert!(validar_retirada(10, 1).is_ok());
    }

    #[test]
    fn retirada_acima_do_saldo_carrega_os_valores() {
        match validar_retirada(10, 11) {
            Err(AppError::InsufficientStock {
                available,
                requested,
            }) => {
                assert_eq!(available, 10);
                assert_eq!(requested, 11);
            }
            outro => panic!("esperava InsufficientStock, obteve {outro:?}"),
        }
    }

    #[test]
    fn saldo_em_string_decimal_compara_numericamente() {
        // O armazenamento pode devolver a quantidade formatada como
        // texto; a comparação deve ser numérica, nunca lexical.
        let armazenado = coagir_numero(&json!("10")).unwrap();
        let solicitado = coagir_numero(&json!(10)).unwrap();
        assert!(validar_retirada(armazenado, solicitado).is_ok());

        // Lexicalmente "9" > "10"; numericamente 9 < 10.
        let armazenado = coagir_numero(&json!("10")).unwrap();
        let solicitado = coagir_numero(&json!("9")).unwrap();
        assert!(validar_retirada(armazenado, solicitado).is_ok());
    }

    #[test]
    fn saida_construida_do_payload_do_formulario() {
        let produto = uuid::Uuid::new_v4();
        let funcionario = uuid::Uuid::new_v4();
        let mut valores = serde_json::Map::new();
        valores.insert("produto_id".into(), json!(produto.to_string()));
        valores.insert("quantidade".into(), json!("6"));
        valores.insert("funcionario_id".into(), json!(funcionario.to_string()));

        let saida = NovaSaida::do_formulario(&valores).unwrap();
        assert_eq!(saida.produto_id, produto);
        assert_eq!(saida.quantidade, 6);
        assert_eq!(saida.funcionario_id, funcionario);
    }
}
