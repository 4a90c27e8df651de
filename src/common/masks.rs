// src/common/masks.rs

// Máscaras de campos estruturados (CNPJ e telefone).
// Funções puras e totais: qualquer entrada produz uma saída mascarada,
// e aplicar a máscara sobre um valor já mascarado não muda o resultado
// (os dígitos são extraídos novamente antes de reinserir os separadores).

/// Formata um CNPJ como `00.000.000/0000-00` (máximo de 18 caracteres).
pub fn mascarar_cnpj(bruto: &str) -> String {
    let digitos: Vec<char> = bruto.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut saida = String::with_capacity(18);
    for (i, c) in digitos.into_iter().take(14).enumerate() {
        match i {
            2 | 5 => saida.push('.'),
            8 => saida.push('/'),
            12 => saida.push('-'),
            _ => {}
        }
        saida.push(c);
    }
    saida
}

/// Formata um telefone como `(00) 00000-0000` (máximo de 15 caracteres).
/// Aceita números com 10 ou 11 dígitos; o hífen separa os quatro últimos.
pub fn mascarar_telefone(bruto: &str) -> String {
    let digitos: String = bruto
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();

    if digitos.len() < 3 {
        return digitos;
    }

    let (ddd, resto) = digitos.split_at(2);
    let corpo = if resto.len() >= 5 {
        let corte = resto.len() - 4;
        format!("{}-{}", &resto[..corte], &resto[corte..])
    } else {
        resto.to_string()
    };

    format!("({ddd}) {corpo}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cnpj_formata_documento_completo() {
        assert_eq!(mascarar_cnpj("12345678000195"), "12.345.678/0001-95");
    }

    #[test]
    fn cnpj_formata_parcialmente_enquanto_digita() {
        assert_eq!(mascarar_cnpj("12"), "12");
        assert_eq!(mascarar_cnpj("123"), "12.3");
        assert_eq!(mascarar_cnpj("123456789"), "12.345.678/9");
    }

    #[test]
    fn cnpj_descarta_excesso_e_lixo() {
        // Dígitos além do 14º são truncados; não-dígitos são ignorados.
        assert_eq!(mascarar_cnpj("12345678000195999"), "12.345.678/0001-95");
        assert_eq!(mascarar_cnpj("ab12.345c678/0001-95"), "12.345.678/0001-95");
    }

    #[test]
    fn cnpj_e_idempotente_e_limitado_a_18() {
        let uma_vez = mascarar_cnpj("12345678000195");
        assert_eq!(mascarar_cnpj(&uma_vez), uma_vez);
        assert!(uma_vez.len() <= 18);
        assert_eq!(mascarar_cnpj(""), "");
    }

    #[test]
    fn telefone_formata_celular_e_fixo() {
        assert_eq!(mascarar_telefone("11987654321"), "(11) 98765-4321");
        assert_eq!(mascarar_telefone("1187654321"), "(11) 8765-4321");
    }

    #[test]
    fn telefone_formata_parcialmente_enquanto_digita() {
        assert_eq!(mascarar_telefone("1"), "1");
        assert_eq!(mascarar_telefone("11"), "11");
        assert_eq!(mascarar_telefone("119"), "(11) 9");
        assert_eq!(mascarar_telefone("119876"), "(11) 9876");
    }

    #[test]
    fn telefone_e_idempotente_e_limitado_a_15() {
        let uma_vez = mascarar_telefone("11987654321999");
        assert_eq!(uma_vez, "(11) 98765-4321");
        assert_eq!(mascarar_telefone(&uma_vez), uma_vez);
        assert!(uma_vez.len() <= 15);
        assert_eq!(mascarar_telefone(""), "");
    }
}
