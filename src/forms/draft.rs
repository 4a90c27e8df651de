// src/forms/draft.rs

use serde_json::{Map, Value};

use crate::common::AppError;
use crate::common::masks::{mascarar_cnpj, mascarar_telefone};
use crate::forms::descriptor::{CampoFormulario, Mascara, TipoCampo};
use crate::forms::payload::coagir_numero;

/// Motor genérico de formulários: transforma uma lista de
/// `CampoFormulario` em um rascunho editável e, no envio, em um payload
/// plano `nome -> valor` para a operação de gravação do chamador.
///
/// O motor não conhece regras de negócio (validação de estoque, etc.);
/// ele só garante a estrutura: máscaras, visibilidade condicional e
/// campos obrigatórios visíveis preenchidos.
#[derive(Debug, Clone)]
pub struct Formulario {
    campos: Vec<CampoFormulario>,
    valores: Map<String, Value>,
}

impl Formulario {
    pub fn novo(campos: Vec<CampoFormulario>) -> Self {
        Self {
            campos,
            valores: Map::new(),
        }
    }

    /// Pré-carrega valores (edição de um registro existente).
    pub fn com_valores_iniciais(mut self, valores: Map<String, Value>) -> Self {
        self.valores = valores;
        self
    }

    pub fn valor(&self, nome: &str) -> Option<&Value> {
        self.valores.get(nome)
    }

    /// Armazena o valor de um campo, aplicando a máscara declarada.
    ///
    /// Se outros campos dependem deste via `exibir_se`, os que ficarem
    /// ocultos pelo novo valor são limpos para `Null`. A regra é uniforme
    /// para todos os formulários: um discriminador (ex.: `tipo`) que muda
    /// nunca deixa para trás uma referência cruzada obsoleta.
    pub fn definir(&mut self, nome: &str, valor: Value) {
        let valor = match self.campo(nome).and_then(|c| c.mascara) {
            Some(mascara) => aplicar_mascara(mascara, valor),
            None => valor,
        };

        self.valores.insert(nome.to_string(), valor);

        let ocultados: Vec<String> = self
            .campos
            .iter()
            .filter(|c| {
                c.exibir_se
                    .as_ref()
                    .is_some_and(|cond| cond.campo == nome && !self.condicao_satisfeita(cond))
            })
            .map(|c| c.nome.clone())
            .collect();
        for nome_oculto in ocultados {
            self.valores.insert(nome_oculto, Value::Null);
        }
    }

    /// Inclui ou remove uma opção de um campo grupo-checkbox. O valor
    /// armazenado é um conjunto: sem duplicatas, ordem de inserção.
    pub fn alternar(&mut self, nome: &str, opcao: &str, incluido: bool) {
        let atual = self
            .valores
            .entry(nome.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(itens) = atual else {
            *atual = Value::Array(Vec::new());
            return self.alternar(nome, opcao, incluido);
        };

        let ja_presente = itens.iter().any(|v| v.as_str() == Some(opcao));
        if incluido && !ja_presente {
            itens.push(Value::String(opcao.to_string()));
        } else if !incluido {
            itens.retain(|v| v.as_str() != Some(opcao));
        }
    }

    /// Sequência (preguiçosa e reiniciável) dos campos cuja condição de
    /// exibição é satisfeita pelo rascunho atual. Campos sem `exibir_se`
    /// são sempre visíveis.
    pub fn campos_visiveis(&self) -> impl Iterator<Item = &CampoFormulario> {
        self.campos.iter().filter(|c| match &c.exibir_se {
            Some(cond) => self.condicao_satisfeita(cond),
            None => true,
        })
    }

    /// Valida e produz o payload plano do rascunho.
    ///
    /// A obrigatoriedade é verificada por campo *visível*: um campo
    /// obrigatório oculto pela condição de exibição não bloqueia o envio.
    /// Para campos numéricos preenchidos, o valor precisa ser coercível
    /// a número (aceitando strings decimais vindas da interface).
    pub fn submeter(&self) -> Result<Map<String, Value>, AppError> {
        for campo in self.campos_visiveis() {
            let valor = self.valores.get(&campo.nome).unwrap_or(&Value::Null);

            if campo.obrigatorio && !preenchido(valor) {
                return Err(AppError::RequiredField(campo.rotulo.clone()));
            }
            if campo.tipo == TipoCampo::Numero && preenchido(valor) && coagir_numero(valor).is_none()
            {
                return Err(AppError::InvalidNumber(campo.rotulo.clone()));
            }
        }
        Ok(self.valores.clone())
    }

    fn campo(&self, nome: &str) -> Option<&CampoFormulario> {
        self.campos.iter().find(|c| c.nome == nome)
    }

    fn condicao_satisfeita(&self, cond: &crate::forms::descriptor::CondicaoExibicao) -> bool {
        self.valores
            .get(&cond.campo)
            .and_then(|v| v.as_str())
            .is_some_and(|v| v == cond.valor)
    }
}

fn aplicar_mascara(mascara: Mascara, valor: Value) -> Value {
    match valor {
        Value::String(texto) => Value::String(match mascara {
            Mascara::Cnpj => mascarar_cnpj(&texto),
            Mascara::Telefone => mascarar_telefone(&texto),
        }),
        outro => outro,
    }
}

// Uma seleção com valor vazio (a opção sentinela "Selecione...") conta
// como não preenchida, assim como Null e listas vazias.
fn preenchido(valor: &Value) -> bool {
    match valor {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(itens) => !itens.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::descriptor::{OpcaoCampo, TipoCampo};
    use serde_json::json;

    fn formulario_de_usuario() -> Formulario {
        Formulario::novo(vec![
            CampoFormulario::novo("usuario", "Nome de Usuário", TipoCampo::Texto).obrigatorio(),
            CampoFormulario::novo("telefone", "Telefone", TipoCampo::Texto)
                .com_mascara(Mascara::Telefone),
            CampoFormulario::novo("tipo", "Tipo de Usuário", TipoCampo::Selecao)
                .obrigatorio()
                .com_opcoes(vec![
                    OpcaoCampo::new("funcionario", "Funcionário Interno (RH)"),
                    OpcaoCampo::new("terceiro", "Terceiro (Fornecedor)"),
                ]),
            CampoFormulario::novo("funcionario_id", "Vincular a Funcionário", TipoCampo::Selecao)
                .obrigatorio()
                .exibir_se("tipo", "funcionario"),
            CampoFormulario::novo("fornecedor_id", "Vincular a Fornecedor", TipoCampo::Selecao)
                .obrigatorio()
                .exibir_se("tipo", "terceiro"),
            CampoFormulario::novo("permissoes", "Módulos Permitidos", TipoCampo::GrupoCheckbox),
        ])
    }

    #[test]
    fn campo_condicional_some_quando_discriminador_nao_bate() {
        let mut form = formulario_de_usuario();
        form.definir("tipo", json!("funcionario"));

        let visiveis: Vec<&str> = form.campos_visiveis().map(|c| c.nome.as_str()).collect();
        assert!(visiveis.contains(&"funcionario_id"));
        assert!(!visiveis.contains(&"fornecedor_id"));
    }

    #[test]
    fn obrigatorio_oculto_nao_bloqueia_envio() {
        let mut form = formulario_de_usuario();
        form.definir("usuario", json!("maria.silva"));
        form.definir("tipo", json!("terceiro"));
        form.definir("fornecedor_id", json!("forn-1"));

        // `funcionario_id` é obrigatório, mas está oculto: o envio passa.
        let payload = form.submeter().expect("envio deveria ser aceito");
        assert_eq!(payload.get("fornecedor_id"), Some(&json!("forn-1")));
    }

    #[test]
    fn obrigatorio_visivel_vazio_bloqueia_envio() {
        let mut form = formulario_de_usuario();
        form.definir("tipo", json!("funcionario"));

        match form.submeter() {
            Err(AppError::RequiredField(rotulo)) => assert_eq!(rotulo, "Nome de Usuário"),
            outro => panic!("esperava RequiredField, obteve {outro:?}"),
        }
    }

    #[test]
    fn selecao_com_sentinela_vazia_conta_como_nao_preenchida() {
        let mut form = formulario_de_usuario();
        form.definir("usuario", json!("maria.silva"));
        form.definir("tipo", json!(""));

        assert!(matches!(
            form.submeter(),
            Err(AppError::RequiredField(rotulo)) if rotulo == "Tipo de Usuário"
        ));
    }

    #[test]
    fn mudar_discriminador_limpa_dependentes_ocultados() {
        let mut form = formulario_de_usuario();
        form.definir("tipo", json!("funcionario"));
        form.definir("funcionario_id", json!("func-9"));

        // Troca para terceiro: o vínculo antigo não pode sobreviver.
        form.definir("tipo", json!("terceiro"));
        assert_eq!(form.valor("funcionario_id"), Some(&Value::Null));
    }

    #[test]
    fn mascara_declarada_e_aplicada_ao_definir() {
        let mut form = formulario_de_usuario();
        form.definir("telefone", json!("11987654321"));
        assert_eq!(form.valor("telefone"), Some(&json!("(11) 98765-4321")));
    }

    #[test]
    fn grupo_checkbox_funciona_como_conjunto() {
        let mut form = formulario_de_usuario();
        form.alternar("permissoes", "almoxarifado", true);
        form.alternar("permissoes", "almoxarifado", true);
        form.alternar("permissoes", "rh", true);
        form.alternar("permissoes", "almoxarifado", false);

        assert_eq!(form.valor("permissoes"), Some(&json!(["rh"])));
    }

    #[test]
    fn campo_numerico_nao_coercivel_bloqueia_envio() {
        let mut form = Formulario::novo(vec![
            CampoFormulario::novo("quantidade", "Quantidade", TipoCampo::Numero).obrigatorio(),
        ]);
        form.definir("quantidade", json!("abc"));

        assert!(matches!(
            form.submeter(),
            Err(AppError::InvalidNumber(rotulo)) if rotulo == "Quantidade"
        ));
    }

    #[test]
    fn valores_iniciais_alimentam_o_rascunho() {
        let mut iniciais = Map::new();
        iniciais.insert("usuario".into(), json!("joao.souza"));
        iniciais.insert("tipo".into(), json!("funcionario"));
        iniciais.insert("funcionario_id".into(), json!("func-1"));

        let form = formulario_de_usuario().com_valores_iniciais(iniciais);
        let payload = form.submeter().expect("rascunho pré-carregado é válido");
        assert_eq!(payload.get("usuario"), Some(&json!("joao.souza")));
    }
}
