// Módulo de alto nivel de la síntesis de horarios.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod combinar;
pub mod conflicto;
pub mod ligas;

// Reexportar la API que el resto del crate consume desde aquí
pub use combinar::{combinaciones_curso, producto_cursos, ProductoCartesiano};
pub use conflicto::candidato_es_valido;
pub use ligas::{clasificar_liga, indexar_secciones, CombinacionLiga, CursoIndexado, TipoLiga};

use log::{debug, info, warn};

use crate::models::{
    ConfigSintesis, ConteoCurso, HorarioValido, ResultadoSintesis, ResumenSintesis, Seccion,
};

/// Corrida completa de síntesis: indexa las secciones, arma las
/// combinaciones por curso, enumera el producto entre cursos y recolecta
/// los horarios válidos hasta el tope configurado.
///
/// El resultado son los primeros N válidos en orden de enumeración (no una
/// muestra): mismo insumo, mismo resultado, corrida tras corrida. Una
/// corrida sin horarios válidos es un resultado normal, con su resumen;
/// acá adentro nada es fatal.
pub fn generar_horarios(
    cursos: &[String],
    secciones: &[Seccion],
    config: &ConfigSintesis,
) -> ResultadoSintesis {
    info!(
        "[sintesis] {} cursos, {} secciones, tope {}",
        cursos.len(),
        secciones.len(),
        config.max_horarios
    );

    let (indice, descartes) = indexar_secciones(cursos, secciones);

    let por_curso: Vec<Vec<CombinacionLiga>> = indice
        .iter()
        .map(|entrada| combinaciones_curso(entrada, config.requiere_teoria))
        .collect();

    let combinaciones_por_curso: Vec<ConteoCurso> = indice
        .iter()
        .zip(&por_curso)
        .map(|(entrada, combinaciones)| ConteoCurso {
            curso: entrada.curso.clone(),
            combinaciones: combinaciones.len(),
        })
        .collect();
    for conteo in &combinaciones_por_curso {
        debug!(
            "[sintesis] {}: {} combinaciones de liga",
            conteo.curso, conteo.combinaciones
        );
    }

    let mut horarios: Vec<HorarioValido> = Vec::new();
    let mut candidatos_evaluados: u64 = 0;
    let mut tope_alcanzado = false;

    if cursos.is_empty() {
        warn!("[sintesis] sin cursos solicitados, nada que sintetizar");
    } else if config.max_horarios == 0 {
        // tope en cero: se corta antes de mirar el primer candidato
        warn!("[sintesis] tope en cero, no se enumeran candidatos");
        tope_alcanzado = true;
    } else {
        for candidato in producto_cursos(&por_curso) {
            candidatos_evaluados += 1;
            if candidato_es_valido(&candidato) {
                let secciones_horario: Vec<Seccion> = candidato
                    .iter()
                    .flat_map(|combinacion| combinacion.secciones.iter().cloned())
                    .collect();
                horarios.push(HorarioValido {
                    secciones: secciones_horario,
                });
                if horarios.len() >= config.max_horarios {
                    tope_alcanzado = true;
                    break;
                }
            }
        }
    }

    info!(
        "[sintesis] ✅ {} horarios válidos de {} candidatos evaluados",
        horarios.len(),
        candidatos_evaluados
    );

    let resumen = ResumenSintesis {
        cursos_solicitados: cursos.len(),
        secciones_recibidas: secciones.len(),
        secciones_descartadas: descartes.len(),
        combinaciones_por_curso,
        candidatos_evaluados,
        horarios_validos: horarios.len(),
        tope_alcanzado,
    };

    ResultadoSintesis {
        horarios,
        descartes,
        resumen,
    }
}
