// Clasificación de ligas e indexación de secciones.
//
// Primera etapa de la síntesis: del listado plano de secciones al índice
// explícito curso → grupo → ranura de tipo que consumen los combinadores.

use log::{debug, warn};

use crate::error::ErrorClasificacion;
use crate::models::{DescarteSeccion, Seccion};

/// Tipo de liga de una sección, derivado de la primera letra de su id.
///
/// El orden de declaración (Teoría, Práctica, Laboratorio) es el orden de
/// ranura dentro de un grupo y el orden de las secciones dentro de una
/// combinación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TipoLiga {
    Teoria,
    Practica,
    Laboratorio,
}

impl TipoLiga {
    pub const TODOS: [TipoLiga; 3] = [
        TipoLiga::Teoria,
        TipoLiga::Practica,
        TipoLiga::Laboratorio,
    ];

    /// Etiqueta de presentación.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            TipoLiga::Teoria => "Teoría",
            TipoLiga::Practica => "Práctica",
            TipoLiga::Laboratorio => "Laboratorio",
        }
    }
}

/// Separa un id de liga crudo en tipo y número de grupo.
///
/// La primera letra decide el tipo (T, P o L, en cualquier caja) y el resto
/// del id es el número de grupo: "T1" → (Teoría, "1"), "p12" → (Práctica,
/// "12"), "T" → (Teoría, ""). El número se trata siempre como texto opaco,
/// no se exige que sea numérico ni que exista.
pub fn clasificar_liga(id_liga: &str) -> Result<(TipoLiga, String), ErrorClasificacion> {
    let id = id_liga.trim();
    let Some(letra) = id.chars().next() else {
        return Err(ErrorClasificacion::LigaVacia);
    };
    let tipo = match letra.to_ascii_uppercase() {
        'T' => TipoLiga::Teoria,
        'P' => TipoLiga::Practica,
        'L' => TipoLiga::Laboratorio,
        _ => return Err(ErrorClasificacion::TipoDesconocido { letra }),
    };
    Ok((tipo, id[letra.len_utf8()..].to_string()))
}

/// Grupo de liga de un curso: las secciones que comparten número de grupo,
/// separadas por ranura de tipo. Los grupos se descubren desde las
/// secciones recibidas, nunca se inventan; una ranura vacía simplemente no
/// participa del producto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrupoLiga {
    pub numero: String,
    pub teoria: Vec<Seccion>,
    pub practica: Vec<Seccion>,
    pub laboratorio: Vec<Seccion>,
}

impl GrupoLiga {
    fn nuevo(numero: String) -> GrupoLiga {
        GrupoLiga {
            numero,
            teoria: Vec::new(),
            practica: Vec::new(),
            laboratorio: Vec::new(),
        }
    }

    /// Secciones de la ranura de un tipo, en orden de llegada.
    pub fn ranura(&self, tipo: TipoLiga) -> &[Seccion] {
        match tipo {
            TipoLiga::Teoria => &self.teoria,
            TipoLiga::Practica => &self.practica,
            TipoLiga::Laboratorio => &self.laboratorio,
        }
    }

    fn ranura_mut(&mut self, tipo: TipoLiga) -> &mut Vec<Seccion> {
        match tipo {
            TipoLiga::Teoria => &mut self.teoria,
            TipoLiga::Practica => &mut self.practica,
            TipoLiga::Laboratorio => &mut self.laboratorio,
        }
    }
}

/// Un curso solicitado con sus grupos en orden de primera aparición.
/// Un curso sin secciones queda con cero grupos: produce cero
/// combinaciones y por lo tanto cero horarios, que es resultado y no error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursoIndexado {
    pub curso: String,
    pub grupos: Vec<GrupoLiga>,
}

impl CursoIndexado {
    fn nuevo(curso: &str) -> CursoIndexado {
        CursoIndexado {
            curso: curso.to_string(),
            grupos: Vec::new(),
        }
    }

    fn grupo_mut(&mut self, numero: &str) -> &mut GrupoLiga {
        let pos = match self.grupos.iter().position(|g| g.numero == numero) {
            Some(pos) => pos,
            None => {
                self.grupos.push(GrupoLiga::nuevo(numero.to_string()));
                self.grupos.len() - 1
            }
        };
        &mut self.grupos[pos]
    }
}

/// Una combinación de liga: el paquete mínimo inscribible de un grupo, una
/// sección por cada tipo presente, en orden fijo Teoría → Práctica →
/// Laboratorio. Todas sus secciones comparten (curso, número de grupo) por
/// construcción.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinacionLiga {
    pub curso: String,
    pub grupo: String,
    pub secciones: Vec<Seccion>,
}

/// Construye el índice curso → grupo → ranura a partir del listado plano.
///
/// Hay una entrada por curso solicitado, en orden de solicitud, tenga o no
/// secciones. Las secciones cuyo id de liga no clasifica no entran al
/// índice: vuelven como descartes para que el llamador las reporte. Las
/// secciones de cursos no solicitados se ignoran.
pub fn indexar_secciones(
    cursos: &[String],
    secciones: &[Seccion],
) -> (Vec<CursoIndexado>, Vec<DescarteSeccion>) {
    let mut indice: Vec<CursoIndexado> = cursos.iter().map(|c| CursoIndexado::nuevo(c)).collect();
    let mut descartes: Vec<DescarteSeccion> = Vec::new();
    let mut ignoradas = 0usize;

    for seccion in secciones {
        let Some(entrada) = indice.iter_mut().find(|e| e.curso == seccion.curso) else {
            ignoradas += 1;
            continue;
        };
        match clasificar_liga(&seccion.id_liga) {
            Ok((tipo, numero)) => {
                entrada
                    .grupo_mut(&numero)
                    .ranura_mut(tipo)
                    .push(seccion.clone());
            }
            Err(motivo) => {
                warn!(
                    "[ligas] sección NRC {} de {} descartada: {}",
                    seccion.nrc, seccion.curso, motivo
                );
                descartes.push(DescarteSeccion {
                    curso: seccion.curso.clone(),
                    nrc: seccion.nrc.clone(),
                    id_liga: seccion.id_liga.clone(),
                    motivo,
                });
            }
        }
    }

    if ignoradas > 0 {
        debug!(
            "[ligas] {} secciones de cursos no solicitados ignoradas",
            ignoradas
        );
    }

    (indice, descartes)
}
