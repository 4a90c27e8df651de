// src/services/sessao.rs

// Persistência da sessão do usuário corrente, o equivalente do
// localStorage do hospedeiro original. Consultada na inicialização
// para restaurar a sessão sem nova autenticação.

use std::fs;
use std::path::PathBuf;

use crate::{common::error::AppError, models::auth::Usuario};

pub trait SessaoStore {
    fn carregar(&self) -> Result<Option<Usuario>, AppError>;
    fn salvar(&self, usuario: &Usuario) -> Result<(), AppError>;
    fn limpar(&self) -> Result<(), AppError>;
}

/// Sessão gravada como JSON em um arquivo local. Dados ausentes ou
/// corrompidos resultam em `None` (login novamente), nunca em pânico:
/// uma sessão ilegível não pode derrubar a aplicação na inicialização.
#[derive(Debug, Clone)]
pub struct SessaoArquivo {
    caminho: PathBuf,
}

impl SessaoArquivo {
    pub fn new(caminho: impl Into<PathBuf>) -> Self {
        Self {
            caminho: caminho.into(),
        }
    }
}

impl SessaoStore for SessaoArquivo {
    fn carregar(&self) -> Result<Option<Usuario>, AppError> {
        let conteudo = match fs::read_to_string(&self.caminho) {
            Ok(conteudo) => conteudo,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Usuario>(&conteudo) {
            Ok(usuario) => Ok(Some(usuario)),
            Err(e) => {
                tracing::warn!("Sessão salva ilegível, descartando: {}", e);
                Ok(None)
            }
        }
    }

    fn salvar(&self, usuario: &Usuario) -> Result<(), AppError> {
        let json = serde_json::to_string(usuario)
            .map_err(|e| anyhow::anyhow!("Falha ao serializar a sessão: {}", e))?;
        fs::write(&self.caminho, json)?;
        Ok(())
    }

    fn limpar(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.caminho) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::{usuario_de_teste, Modulo, TipoUsuario};

    fn store_temporario() -> (tempfile::TempDir, SessaoArquivo) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessaoArquivo::new(dir.path().join("sessao.json"));
        (dir, store)
    }

    #[test]
    fn sessao_sobrevive_a_um_ciclo_salvar_carregar() {
        let (_dir, store) = store_temporario();
        let usuario = usuario_de_teste(
            "maria.silva",
            TipoUsuario::Funcionario,
            vec![Modulo::Rh, Modulo::Almoxarifado],
        );

        store.salvar(&usuario).unwrap();
        let restaurado = store.carregar().unwrap().expect("sessão presente");

        assert_eq!(restaurado.id, usuario.id);
        assert_eq!(restaurado.usuario, "maria.silva");
        assert_eq!(restaurado.permissoes, usuario.permissoes);
        // A credencial nunca é serializada junto com a sessão.
        assert_eq!(restaurado.senha, "");
    }

    #[test]
    fn sessao_ausente_ou_corrompida_vira_none() {
        let (_dir, store) = store_temporario();
        assert!(store.carregar().unwrap().is_none());

        fs::write(
            store.caminho.clone(),
            "{ isso não é um usuário válido ]",
        )
        .unwrap();
        assert!(store.carregar().unwrap().is_none());
    }

    #[test]
    fn limpar_encerra_a_sessao_e_e_idempotente() {
        let (_dir, store) = store_temporario();
        let usuario = usuario_de_teste("joao.souza", TipoUsuario::Funcionario, vec![]);

        store.salvar(&usuario).unwrap();
        store.limpar().unwrap();
        assert!(store.carregar().unwrap().is_none());

        // Limpar sem sessão gravada não é erro.
        store.limpar().unwrap();
    }
}
