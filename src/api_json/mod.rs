// Frontera JSON del motor: registros crudos de entrada, normalización a
// los modelos del núcleo y exportación plana del resultado.
//
// Todo lo ilegible acá es fatal para el lote completo (día desconocido,
// rango de horas que no parsea, rango invertido): mejor rechazar de
// entrada que sintetizar sobre datos a medias. La única excepción son los
// ids de liga raros, que pasan de largo para que el clasificador los
// descarte y reporte sección por sección.

use chrono::NaiveTime;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::generar_horarios;
use crate::error::ErrorEntrada;
use crate::models::{BloqueHorario, ConfigSintesis, Dia, ResultadoSintesis, Seccion};

/// Carga de entrada para una corrida de síntesis.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "cursos": ["ISIA-109", "ISIA-110"],
///   "secciones": [
///     {
///       "curso": "ISIA-109",
///       "nrc": "4821",
///       "id_liga": "T1",
///       "docente": "L. Vargas",
///       "horarios": [
///         { "dia": "LUN", "hora": "08:00 AM - 10:00 AM" },
///         { "dia": "JUE", "hora": "08:00 AM - 10:00 AM" }
///       ]
///     }
///   ],
///   "config": { "max_horarios": 100, "requiere_teoria": false }
/// }
/// ```
///
/// # Campos:
/// - `cursos`: Códigos de los cursos a combinar, formato AAAA-999 (requerido)
/// - `secciones`: Oferta completa de secciones tal como sale del extractor
/// - `config`: Parámetros de la corrida (opcional, con valores por defecto)
#[derive(Debug, Clone, Deserialize)]
pub struct EntradaSintesis {
    pub cursos: Vec<String>,
    pub secciones: Vec<SeccionCruda>,
    #[serde(default)]
    pub config: ConfigSintesis,
}

/// Fila cruda de sección, con los horarios todavía en texto.
#[derive(Debug, Clone, Deserialize)]
pub struct SeccionCruda {
    pub curso: String,
    pub nrc: String,
    pub id_liga: String,
    #[serde(default)]
    pub docente: String,
    #[serde(default)]
    pub horarios: Vec<BloqueCrudo>,
}

/// Bloque crudo: etiqueta de día y rango de horas sin normalizar.
#[derive(Debug, Clone, Deserialize)]
pub struct BloqueCrudo {
    pub dia: String,
    pub hora: String,
}

/// Fila plana de exportación: una por par (sección, bloque), indexada por
/// número de horario en base 1. El renderizador externo arma la grilla de
/// cada horario y la tabla de archivo a partir de estas filas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilaHorario {
    pub horario: usize,
    pub curso: String,
    pub id_liga: String,
    pub nrc: String,
    pub dia: String,
    pub inicio: String,
    pub fin: String,
    pub docente: String,
}

pub fn parse_json_entrada(json: &str) -> Result<EntradaSintesis, ErrorEntrada> {
    Ok(serde_json::from_str::<EntradaSintesis>(json)?)
}

/// Punto de entrada de la frontera: JSON crudo → síntesis → resultado.
///
/// Falla solo por errores de entrada; una corrida que no encuentra ningún
/// horario válido devuelve `Ok` con cero horarios y su resumen.
pub fn ejecutar_desde_json(json: &str) -> Result<ResultadoSintesis, ErrorEntrada> {
    let entrada = parse_json_entrada(json)?;
    let cursos = normalizar_cursos(&entrada.cursos);
    let secciones = normalizar_secciones(&entrada.secciones, &cursos)?;
    Ok(generar_horarios(&cursos, &secciones, &entrada.config))
}

/// Normaliza la lista de cursos solicitados: mayúsculas, sin repetidos
/// (gana la primera aparición) y solo códigos con forma AAAA-999. Lo que
/// no cumple se omite con advertencia, no tumba el lote.
pub fn normalizar_cursos(crudos: &[String]) -> Vec<String> {
    let mut cursos: Vec<String> = Vec::new();
    for crudo in crudos {
        let codigo = crudo.trim().to_uppercase();
        if !curso_id_valido(&codigo) {
            warn!("[entrada] código de curso inválido, omitido: '{}'", crudo);
            continue;
        }
        if cursos.contains(&codigo) {
            warn!("[entrada] código de curso repetido, omitido: '{}'", codigo);
            continue;
        }
        cursos.push(codigo);
    }
    cursos
}

/// Forma AAAA-999: cuatro letras mayúsculas, guión, tres dígitos.
pub fn curso_id_valido(codigo: &str) -> bool {
    let bytes = codigo.as_bytes();
    bytes.len() == 8
        && bytes[..4].iter().all(|b| b.is_ascii_uppercase())
        && bytes[4] == b'-'
        && bytes[5..].iter().all(|b| b.is_ascii_digit())
}

/// Convierte las filas crudas en secciones del modelo. Cualquier día o
/// rango ilegible corta acá con error; las secciones de cursos que no
/// están en la lista solicitada se saltan sin convertirlas.
fn normalizar_secciones(
    crudas: &[SeccionCruda],
    cursos: &[String],
) -> Result<Vec<Seccion>, ErrorEntrada> {
    let mut secciones: Vec<Seccion> = Vec::new();
    let mut ignoradas = 0usize;

    for cruda in crudas {
        let curso = cruda.curso.trim().to_uppercase();
        if !cursos.iter().any(|c| *c == curso) {
            ignoradas += 1;
            continue;
        }

        let mut horarios: Vec<BloqueHorario> = Vec::new();
        for bloque in &cruda.horarios {
            let dia = Dia::desde_etiqueta(&bloque.dia)?;
            let (inicio, fin) = parse_rango_horas(&bloque.hora)?;
            horarios.push(BloqueHorario::nuevo(dia, inicio, fin)?);
        }

        secciones.push(Seccion {
            curso,
            id_liga: cruda.id_liga.trim().to_string(),
            nrc: cruda.nrc.trim().to_string(),
            docente: cruda.docente.trim().to_string(),
            horarios,
        });
    }

    if ignoradas > 0 {
        debug!(
            "[entrada] {} secciones de cursos no solicitados ignoradas",
            ignoradas
        );
    }

    Ok(secciones)
}

/// Parsea un rango "08:00 AM - 10:00 AM" (12 horas, como lo publica el
/// sistema de origen) o "08:00 - 10:00" (24 horas). El separador es un
/// guión, con o sin espacios alrededor.
pub fn parse_rango_horas(texto: &str) -> Result<(NaiveTime, NaiveTime), ErrorEntrada> {
    let mut partes = texto.splitn(2, '-');
    let (Some(crudo_inicio), Some(crudo_fin)) = (partes.next(), partes.next()) else {
        return Err(ErrorEntrada::RangoInvalido(texto.to_string()));
    };
    let inicio =
        parse_hora(crudo_inicio).ok_or_else(|| ErrorEntrada::RangoInvalido(texto.to_string()))?;
    let fin = parse_hora(crudo_fin).ok_or_else(|| ErrorEntrada::RangoInvalido(texto.to_string()))?;
    Ok((inicio, fin))
}

/// Una hora suelta: primero el formato de 12 horas ("08:00 AM"), si no,
/// 24 horas ("08:00").
fn parse_hora(texto: &str) -> Option<NaiveTime> {
    let tok = texto.trim().to_uppercase();
    NaiveTime::parse_from_str(&tok, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(&tok, "%H:%M"))
        .ok()
}

/// Aplana un resultado a filas de exportación, en orden: por horario, por
/// sección dentro del horario, por bloque dentro de la sección.
pub fn filas_exportacion(resultado: &ResultadoSintesis) -> Vec<FilaHorario> {
    let mut filas: Vec<FilaHorario> = Vec::new();
    for (indice, horario) in resultado.horarios.iter().enumerate() {
        for (seccion, bloque) in horario.entradas() {
            filas.push(FilaHorario {
                horario: indice + 1,
                curso: seccion.curso.clone(),
                id_liga: seccion.id_liga.clone(),
                nrc: seccion.nrc.clone(),
                dia: bloque.dia.abreviatura().to_string(),
                inicio: bloque.inicio.format("%H:%M").to_string(),
                fin: bloque.fin.format("%H:%M").to_string(),
                docente: seccion.docente.clone(),
            });
        }
    }
    filas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hora(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_curso_id_valido() {
        assert!(curso_id_valido("ISIA-109"));
        assert!(curso_id_valido("MATB-201"));
        assert!(!curso_id_valido("ISIA109"));
        assert!(!curso_id_valido("ISI-109"));
        assert!(!curso_id_valido("ISIA-10"));
        assert!(!curso_id_valido("isia-109"));
        assert!(!curso_id_valido(""));
    }

    #[test]
    fn test_normalizar_cursos_mayusculas_y_repetidos() {
        let crudos = vec![
            "isia-109".to_string(),
            "ISIA-110".to_string(),
            "ISIA-109".to_string(),
            "MAL".to_string(),
        ];
        let cursos = normalizar_cursos(&crudos);
        assert_eq!(cursos, vec!["ISIA-109".to_string(), "ISIA-110".to_string()]);
    }

    #[test]
    fn test_parse_rango_12_horas() {
        let (inicio, fin) = parse_rango_horas("08:00 AM - 10:00 AM").unwrap();
        assert_eq!(inicio, hora(8, 0));
        assert_eq!(fin, hora(10, 0));

        let (inicio, fin) = parse_rango_horas("12:30 PM - 02:15 PM").unwrap();
        assert_eq!(inicio, hora(12, 30));
        assert_eq!(fin, hora(14, 15));
    }

    #[test]
    fn test_parse_rango_24_horas() {
        let (inicio, fin) = parse_rango_horas("08:00 - 10:00").unwrap();
        assert_eq!(inicio, hora(8, 0));
        assert_eq!(fin, hora(10, 0));

        let (inicio, fin) = parse_rango_horas("14:00-16:00").unwrap();
        assert_eq!(inicio, hora(14, 0));
        assert_eq!(fin, hora(16, 0));
    }

    #[test]
    fn test_parse_rango_invalido() {
        assert!(parse_rango_horas("").is_err());
        assert!(parse_rango_horas("08:00 AM").is_err());
        assert!(parse_rango_horas("mañana - tarde").is_err());
    }

    #[test]
    fn test_ejecutar_desde_json_minimo() {
        let json_data = r#"
        {
            "cursos": ["ISIA-109"],
            "secciones": [
                {
                    "curso": "ISIA-109",
                    "nrc": "4821",
                    "id_liga": "T1",
                    "docente": "L. Vargas",
                    "horarios": [
                        { "dia": "LUN", "hora": "08:00 AM - 10:00 AM" }
                    ]
                }
            ]
        }
        "#;

        let resultado = ejecutar_desde_json(json_data).expect("Debe sintetizar el JSON mínimo");
        assert_eq!(resultado.horarios.len(), 1);
        assert_eq!(resultado.horarios[0].secciones[0].nrc, "4821");
        assert_eq!(resultado.resumen.horarios_validos, 1);
        // sin bloque "config": valores por defecto
        assert!(!resultado.resumen.tope_alcanzado);
    }

    #[test]
    fn test_ejecutar_desde_json_dia_desconocido_es_fatal() {
        let json_data = r#"
        {
            "cursos": ["ISIA-109"],
            "secciones": [
                {
                    "curso": "ISIA-109",
                    "nrc": "4821",
                    "id_liga": "T1",
                    "horarios": [ { "dia": "DOM", "hora": "08:00 - 10:00" } ]
                }
            ]
        }
        "#;

        let error = ejecutar_desde_json(json_data).unwrap_err();
        assert!(matches!(error, ErrorEntrada::DiaDesconocido(_)));
    }

    #[test]
    fn test_ejecutar_desde_json_rango_invertido_es_fatal() {
        let json_data = r#"
        {
            "cursos": ["ISIA-109"],
            "secciones": [
                {
                    "curso": "ISIA-109",
                    "nrc": "4821",
                    "id_liga": "T1",
                    "horarios": [ { "dia": "LUN", "hora": "10:00 AM - 08:00 AM" } ]
                }
            ]
        }
        "#;

        let error = ejecutar_desde_json(json_data).unwrap_err();
        assert!(matches!(error, ErrorEntrada::RangoInvertido(_)));
    }

    #[test]
    fn test_ejecutar_desde_json_malformado() {
        let error = ejecutar_desde_json("{ esto no es json }").unwrap_err();
        assert!(matches!(error, ErrorEntrada::Json(_)));
    }

    #[test]
    fn test_filas_exportacion_indexa_desde_uno() {
        let json_data = r#"
        {
            "cursos": ["ISIA-109"],
            "secciones": [
                {
                    "curso": "ISIA-109",
                    "nrc": "4821",
                    "id_liga": "T1",
                    "docente": "L. Vargas",
                    "horarios": [
                        { "dia": "LUN", "hora": "08:00 AM - 10:00 AM" },
                        { "dia": "JUE", "hora": "08:00 AM - 10:00 AM" }
                    ]
                },
                {
                    "curso": "ISIA-109",
                    "nrc": "4822",
                    "id_liga": "T2",
                    "docente": "M. Soto",
                    "horarios": [
                        { "dia": "MAR", "hora": "11:00 AM - 01:00 PM" }
                    ]
                }
            ]
        }
        "#;

        let resultado = ejecutar_desde_json(json_data).expect("Debe sintetizar");
        assert_eq!(resultado.horarios.len(), 2);

        let filas = filas_exportacion(&resultado);
        assert_eq!(filas.len(), 3);

        // horario 1: la liga T1 con sus dos bloques
        assert_eq!(filas[0].horario, 1);
        assert_eq!(filas[0].dia, "LUN");
        assert_eq!(filas[0].inicio, "08:00");
        assert_eq!(filas[0].fin, "10:00");
        assert_eq!(filas[1].horario, 1);
        assert_eq!(filas[1].dia, "JUE");

        // horario 2: la liga T2, con el rango PM ya en 24 horas
        assert_eq!(filas[2].horario, 2);
        assert_eq!(filas[2].nrc, "4822");
        assert_eq!(filas[2].inicio, "11:00");
        assert_eq!(filas[2].fin, "13:00");
        assert_eq!(filas[2].docente, "M. Soto");
    }
}
