// src/forms/payload.rs

// Leitura tipada do payload plano produzido por `Formulario::submeter`.
// A interface entrega tudo como texto; estes helpers fazem a ponte para
// os tipos dos serviços, sempre por coerção numérica (nunca comparação
// lexical de quantidades).

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::common::AppError;

/// Coage um valor JSON a inteiro. Aceita números e strings decimais
/// integrais ("10", "10.0"); frações e texto não numérico viram `None`.
pub fn coagir_numero(valor: &Value) -> Option<i64> {
    match valor {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::String(texto) => {
            let texto = texto.trim();
            texto.parse::<i64>().ok().or_else(|| {
                texto
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

pub fn numero(valores: &Map<String, Value>, campo: &str) -> Result<i64, AppError> {
    valores
        .get(campo)
        .and_then(coagir_numero)
        .ok_or_else(|| AppError::InvalidNumber(campo.to_string()))
}

pub fn texto<'a>(valores: &'a Map<String, Value>, campo: &str) -> Option<&'a str> {
    valores
        .get(campo)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub fn id(valores: &Map<String, Value>, campo: &str) -> Result<Uuid, AppError> {
    texto(valores, campo)
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| AppError::RequiredField(campo.to_string()))
}
