// Validación de choques de horario de un candidato.

use crate::algorithm::ligas::CombinacionLiga;
use crate::models::BloqueHorario;

/// True si ningún par de bloques del candidato se pisa el mismo día.
///
/// Aplana los bloques de todas las secciones, ordena por (día, inicio) y
/// revisa pares adyacentes: con el orden puesto, cualquier solape del
/// conjunto aparece entre vecinos, así que basta `inicio < fin_anterior`
/// en el mismo día para invalidar. Compartir borde (termina 10:00,
/// empieza 10:00) no es choque.
pub fn candidato_es_valido(candidato: &[&CombinacionLiga]) -> bool {
    let mut bloques: Vec<&BloqueHorario> = Vec::new();
    for combinacion in candidato {
        for seccion in &combinacion.secciones {
            bloques.extend(seccion.horarios.iter());
        }
    }

    bloques.sort_by_key(|bloque| (bloque.dia, bloque.inicio));

    bloques
        .windows(2)
        .all(|par| par[0].dia != par[1].dia || par[1].inicio >= par[0].fin)
}
