// src/services/acesso.rs

// Modelo de permissões e o controlador de módulo ativo.
//
// A permissão é resolvida inteiramente em memória a partir do registro
// do usuário: o conjunto `permissoes` mais a regra do Master. Quem
// decide o que o usuário enxerga é sempre este módulo, nunca a camada
// de apresentação.

use crate::models::auth::{Modulo, Usuario};

/// Ordem de prioridade dos módulos para a navegação. `Home` vem primeiro
/// e está sempre aberto a qualquer usuário autenticado.
pub const ORDEM_MODULOS: [Modulo; 5] = [
    Modulo::Home,
    Modulo::Almoxarifado,
    Modulo::Rh,
    Modulo::Logistica,
    Modulo::Administracao,
];

/// Decide se o principal pode acessar o módulo.
///
/// Sem usuário, nada é acessível. `Home` é universalmente aberto. O
/// usuário Master tem acesso irrestrito, independentemente do conteúdo
/// de `permissoes`.
pub fn tem_acesso(usuario: Option<&Usuario>, modulo: Modulo) -> bool {
    let Some(usuario) = usuario else {
        return false;
    };
    if modulo == Modulo::Home {
        return true;
    }
    if usuario.is_master() {
        return true;
    }
    usuario.permissoes.contains(&modulo)
}

/// Estado de navegação: usuário corrente + módulo ativo.
///
/// Invariante: o módulo ativo é sempre acessível ao usuário corrente.
/// Como o último módulo visitado pode ser restaurado de uma sessão
/// persistida, qualquer mudança de usuário ou de permissões reconcilia
/// o módulo ativo — sem isso, uma permissão revogada deixaria a
/// navegação apontando para um módulo inalcançável.
#[derive(Debug, Clone, Default)]
pub struct Navegacao {
    usuario: Option<Usuario>,
    modulo_ativo: Option<Modulo>,
}

impl Navegacao {
    pub fn nova() -> Self {
        Self::default()
    }

    pub fn usuario(&self) -> Option<&Usuario> {
        self.usuario.as_ref()
    }

    pub fn modulo_ativo(&self) -> Option<Modulo> {
        self.modulo_ativo
    }

    pub fn entrar(&mut self, usuario: Usuario) {
        tracing::info!("Sessão iniciada para '{}'", usuario.usuario);
        self.usuario = Some(usuario);
        if self.modulo_ativo.is_none() {
            self.modulo_ativo = Some(Modulo::Home);
        }
        self.reconciliar();
    }

    /// Substitui o registro do usuário corrente (ex.: permissões
    /// alteradas pela administração) e reconcilia o módulo ativo.
    pub fn atualizar_usuario(&mut self, usuario: Usuario) {
        self.usuario = Some(usuario);
        self.reconciliar();
    }

    pub fn sair(&mut self) {
        self.usuario = None;
        self.modulo_ativo = None;
    }

    /// Tenta ativar um módulo; recusa (mantendo o atual) se o usuário
    /// corrente não tiver acesso.
    pub fn selecionar(&mut self, modulo: Modulo) -> bool {
        if !tem_acesso(self.usuario.as_ref(), modulo) {
            return false;
        }
        self.modulo_ativo = Some(modulo);
        true
    }

    pub fn modulos_acessiveis(&self) -> Vec<Modulo> {
        ORDEM_MODULOS
            .into_iter()
            .filter(|m| tem_acesso(self.usuario.as_ref(), *m))
            .collect()
    }

    // Regra de consistência obrigatória: se o módulo ativo deixou de ser
    // acessível, volta para o primeiro acessível na ordem de prioridade
    // (na prática, Home).
    fn reconciliar(&mut self) {
        let ativo_ok = self
            .modulo_ativo
            .is_some_and(|m| tem_acesso(self.usuario.as_ref(), m));
        if !ativo_ok {
            self.modulo_ativo = ORDEM_MODULOS
                .into_iter()
                .find(|m| tem_acesso(self.usuario.as_ref(), *m));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::{usuario_de_teste, TipoUsuario, USUARIO_MASTER};

    #[test]
    fn sem_usuario_nada_e_acessivel() {
        for modulo in ORDEM_MODULOS {
            assert!(!tem_acesso(None, modulo));
        }
    }

    #[test]
    fn home_e_aberto_para_qualquer_autenticado() {
        let usuario = usuario_de_teste("joao.souza", TipoUsuario::Funcionario, vec![]);
        assert!(tem_acesso(Some(&usuario), Modulo::Home));
        assert!(!tem_acesso(Some(&usuario), Modulo::Almoxarifado));
    }

    #[test]
    fn master_acessa_tudo_mesmo_sem_permissoes() {
        let master = usuario_de_teste(USUARIO_MASTER, TipoUsuario::Funcionario, vec![]);
        for modulo in ORDEM_MODULOS {
            assert!(tem_acesso(Some(&master), modulo));
        }
    }

    #[test]
    fn usuario_comum_depende_do_conjunto_de_permissoes() {
        let usuario = usuario_de_teste(
            "maria.silva",
            TipoUsuario::Funcionario,
            vec![Modulo::Rh, Modulo::Logistica],
        );
        assert!(tem_acesso(Some(&usuario), Modulo::Rh));
        assert!(tem_acesso(Some(&usuario), Modulo::Logistica));
        assert!(!tem_acesso(Some(&usuario), Modulo::Administracao));
    }

    #[test]
    fn selecionar_modulo_sem_acesso_e_recusado() {
        let mut nav = Navegacao::nova();
        nav.entrar(usuario_de_teste(
            "maria.silva",
            TipoUsuario::Funcionario,
            vec![Modulo::Rh],
        ));

        assert!(nav.selecionar(Modulo::Rh));
        assert!(!nav.selecionar(Modulo::Administracao));
        assert_eq!(nav.modulo_ativo(), Some(Modulo::Rh));
    }

    #[test]
    fn revogar_permissao_reposiciona_o_modulo_ativo() {
        let mut nav = Navegacao::nova();
        nav.entrar(usuario_de_teste(
            "maria.silva",
            TipoUsuario::Funcionario,
            vec![Modulo::Almoxarifado],
        ));
        assert!(nav.selecionar(Modulo::Almoxarifado));

        // A administração retira a permissão: o módulo ativo não pode
        // continuar apontando para um módulo inalcançável.
        nav.atualizar_usuario(usuario_de_teste(
            "maria.silva",
            TipoUsuario::Funcionario,
            vec![],
        ));
        assert_eq!(nav.modulo_ativo(), Some(Modulo::Home));
    }

    #[test]
    fn trocar_de_usuario_reconcilia_a_navegacao() {
        let mut nav = Navegacao::nova();
        nav.entrar(usuario_de_teste(USUARIO_MASTER, TipoUsuario::Funcionario, vec![]));
        assert!(nav.selecionar(Modulo::Administracao));

        nav.entrar(usuario_de_teste(
            "terceiro.um",
            TipoUsuario::Terceiro,
            vec![Modulo::Logistica],
        ));
        assert_eq!(nav.modulo_ativo(), Some(Modulo::Home));
        assert_eq!(
            nav.modulos_acessiveis(),
            vec![Modulo::Home, Modulo::Logistica]
        );
    }

    #[test]
    fn sair_limpa_usuario_e_modulo() {
        let mut nav = Navegacao::nova();
        nav.entrar(usuario_de_teste("joao.souza", TipoUsuario::Funcionario, vec![]));
        nav.sair();
        assert!(nav.usuario().is_none());
        assert_eq!(nav.modulo_ativo(), None);
    }
}
