// src/forms/descriptor.rs

// Descritores de campo do formulário genérico. Cada módulo declara seus
// formulários como uma lista de `CampoFormulario`; o motor em `draft.rs`
// cuida de máscaras, visibilidade condicional e validação de envio.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoCampo {
    Texto,
    Senha,
    Email,
    Numero,
    Data,
    Selecao,
    GrupoCheckbox,
}

// Máscara declarada no descritor, em vez de adivinhada pelo nome do
// campo como fazia a versão anterior do sistema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mascara {
    Cnpj,
    Telefone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcaoCampo {
    pub valor: String,
    pub rotulo: String,
}

impl OpcaoCampo {
    pub fn new(valor: impl Into<String>, rotulo: impl Into<String>) -> Self {
        Self {
            valor: valor.into(),
            rotulo: rotulo.into(),
        }
    }
}

// Condição de exibição: o campo só aparece quando `campo == valor`
// no rascunho atual (o `showIf` do formulário original).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondicaoExibicao {
    pub campo: String,
    pub valor: String,
}

#[derive(Debug, Clone)]
pub struct CampoFormulario {
    pub nome: String,
    pub rotulo: String,
    pub tipo: TipoCampo,
    pub obrigatorio: bool,
    pub opcoes: Vec<OpcaoCampo>,
    pub exibir_se: Option<CondicaoExibicao>,
    pub mascara: Option<Mascara>,
}

impl CampoFormulario {
    pub fn novo(nome: impl Into<String>, rotulo: impl Into<String>, tipo: TipoCampo) -> Self {
        Self {
            nome: nome.into(),
            rotulo: rotulo.into(),
            tipo,
            obrigatorio: false,
            opcoes: Vec::new(),
            exibir_se: None,
            mascara: None,
        }
    }

    pub fn obrigatorio(mut self) -> Self {
        self.obrigatorio = true;
        self
    }

    pub fn com_opcoes(mut self, opcoes: Vec<OpcaoCampo>) -> Self {
        self.opcoes = opcoes;
        self
    }

    pub fn exibir_se(mut self, campo: impl Into<String>, valor: impl Into<String>) -> Self {
        self.exibir_se = Some(CondicaoExibicao {
            campo: campo.into(),
            valor: valor.into(),
        });
        self
    }

    pub fn com_mascara(mut self, mascara: Mascara) -> Self {
        self.mascara = Some(mascara);
        self
    }
}
