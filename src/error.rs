// Tipos de error del motor de síntesis.
//
// Hay dos familias separadas a propósito: los errores de clasificación son
// por sección y recuperables (la corrida sigue, la sección se descarta y se
// reporta), mientras que los errores de entrada rechazan el lote completo
// antes de sintetizar nada.

use serde::Serialize;
use thiserror::Error;

/// Error al clasificar el id de liga de una sección.
///
/// Nunca aborta la corrida: la sección ofensora se excluye del cálculo de
/// combinaciones y el error viaja en el resultado como `DescarteSeccion`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ErrorClasificacion {
    /// El id de liga vino vacío (o solo espacios).
    #[error("id de liga vacío")]
    LigaVacia,

    /// La letra inicial no es T, P ni L.
    #[error("tipo de liga no reconocido: '{letra}'")]
    TipoDesconocido { letra: char },
}

/// Error fatal de la frontera de entrada: el lote completo se rechaza.
///
/// Un día no reconocido se rechaza en vez de tratarse como un día nuevo que
/// nunca choca con nadie (eso haría pasar horarios con solapes reales).
#[derive(Debug, Error)]
pub enum ErrorEntrada {
    #[error("JSON de entrada inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("día no reconocido: '{0}'")]
    DiaDesconocido(String),

    #[error("rango horario no parseable: '{0}'")]
    RangoInvalido(String),

    #[error("rango horario invertido: '{0}' (inicio >= fin)")]
    RangoInvertido(String),
}
