// Biblioteca raíz del crate `horagen`.
// Reexporta los módulos principales y proporciona las funciones de
// conveniencia que orquestan la síntesis completa.
pub mod algorithm;
pub mod api_json;
pub mod error;
pub mod models;

/// Corrida completa de síntesis sobre secciones ya normalizadas
pub use algorithm::generar_horarios;
/// Frontera JSON: entrada cruda y exportación plana del resultado
pub use api_json::{ejecutar_desde_json, filas_exportacion};
