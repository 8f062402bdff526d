// Combinadores de la síntesis: producto de ranuras dentro de cada grupo y
// producto cartesiano perezoso entre cursos.

use log::debug;

use crate::algorithm::ligas::{CombinacionLiga, CursoIndexado, TipoLiga};
use crate::models::Seccion;

/// Producto cartesiano perezoso sobre ejes de slices: un odómetro donde el
/// último eje avanza más rápido, el mismo orden que los `for` anidados que
/// reemplaza. Ese orden es parte del contrato de determinismo, no un
/// detalle interno.
///
/// Sin ejes, o con algún eje vacío, el producto es vacío. Es reiniciable
/// para recorrer el mismo producto más de una vez.
pub struct ProductoCartesiano<'a, T> {
    ejes: Vec<&'a [T]>,
    cursor: Vec<usize>,
    agotado: bool,
}

impl<'a, T> ProductoCartesiano<'a, T> {
    pub fn nuevo(ejes: Vec<&'a [T]>) -> ProductoCartesiano<'a, T> {
        let agotado = ejes.is_empty() || ejes.iter().any(|eje| eje.is_empty());
        let cursor = vec![0; ejes.len()];
        ProductoCartesiano {
            ejes,
            cursor,
            agotado,
        }
    }

    /// Vuelve al primer elemento del producto.
    pub fn reiniciar(&mut self) {
        for pos in self.cursor.iter_mut() {
            *pos = 0;
        }
        self.agotado = self.ejes.is_empty() || self.ejes.iter().any(|eje| eje.is_empty());
    }

    /// Cantidad total de elementos del producto, sin enumerarlos.
    pub fn cardinal(&self) -> usize {
        if self.ejes.is_empty() {
            return 0;
        }
        self.ejes.iter().map(|eje| eje.len()).product()
    }
}

impl<'a, T> Iterator for ProductoCartesiano<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Vec<&'a T>> {
        if self.agotado {
            return None;
        }
        let actual: Vec<&'a T> = self
            .cursor
            .iter()
            .zip(&self.ejes)
            .map(|(&pos, eje)| &eje[pos])
            .collect();

        // avanza el odómetro desde el último eje hacia el primero
        let mut i = self.ejes.len();
        loop {
            if i == 0 {
                self.agotado = true;
                break;
            }
            i -= 1;
            self.cursor[i] += 1;
            if self.cursor[i] < self.ejes[i].len() {
                break;
            }
            self.cursor[i] = 0;
        }

        Some(actual)
    }
}

/// Lista ordenada de combinaciones de un curso: para cada número de grupo,
/// en orden de descubrimiento, el producto cartesiano de sus ranuras no
/// vacías (en orden fijo Teoría → Práctica → Laboratorio, cada ranura en
/// orden de llegada).
///
/// Con `requiere_teoria`, un grupo sin ranura de teoría no produce ninguna
/// combinación; con la política permisiva (la de por defecto) cualquier
/// subconjunto no vacío de ranuras forma combinaciones.
pub fn combinaciones_curso(indexado: &CursoIndexado, requiere_teoria: bool) -> Vec<CombinacionLiga> {
    let mut combinaciones: Vec<CombinacionLiga> = Vec::new();

    for grupo in &indexado.grupos {
        if requiere_teoria && grupo.teoria.is_empty() {
            debug!(
                "[combinar] {} grupo '{}' sin teoría, omitido",
                indexado.curso, grupo.numero
            );
            continue;
        }

        let ranuras: Vec<&[Seccion]> = TipoLiga::TODOS
            .iter()
            .map(|tipo| grupo.ranura(*tipo))
            .filter(|ranura| !ranura.is_empty())
            .collect();
        if ranuras.is_empty() {
            continue;
        }

        for eleccion in ProductoCartesiano::nuevo(ranuras) {
            combinaciones.push(CombinacionLiga {
                curso: indexado.curso.clone(),
                grupo: grupo.numero.clone(),
                secciones: eleccion.into_iter().cloned().collect(),
            });
        }
    }

    combinaciones
}

/// Producto entre cursos: cada elemento es un candidato, una combinación
/// por curso en el orden de solicitud. Perezoso a propósito: el recolector
/// corta en el tope sin materializar el resto del producto.
///
/// Basta un curso con cero combinaciones para que el producto sea vacío.
pub fn producto_cursos(
    por_curso: &[Vec<CombinacionLiga>],
) -> ProductoCartesiano<'_, CombinacionLiga> {
    ProductoCartesiano::nuevo(por_curso.iter().map(|lista| lista.as_slice()).collect())
}
