// Estructuras de datos principales del motor de síntesis.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorClasificacion, ErrorEntrada};

/// Día de la semana académica. Semana de seis días, lunes a sábado:
/// la universidad no dicta clases los domingos y una etiqueta de domingo
/// (o cualquier otra no reconocida) rechaza el lote completo.
///
/// El orden de declaración es el orden semanal y se usa como clave de
/// ordenamiento en el validador de choques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dia {
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
}

impl Dia {
    pub const TODOS: [Dia; 6] = [
        Dia::Lunes,
        Dia::Martes,
        Dia::Miercoles,
        Dia::Jueves,
        Dia::Viernes,
        Dia::Sabado,
    ];

    /// Normaliza una etiqueta externa de día: nombre completo (con o sin
    /// tilde), abreviatura de tres letras ("LUN") o de dos ("LU"), en
    /// cualquier caja. Cualquier otra cosa es `ErrorEntrada::DiaDesconocido`.
    pub fn desde_etiqueta(etiqueta: &str) -> Result<Dia, ErrorEntrada> {
        let tok = etiqueta
            .trim()
            .to_uppercase()
            .replace('Á', "A")
            .replace('É', "E")
            .replace('Í', "I")
            .replace('Ó', "O")
            .replace('Ú', "U");
        match tok.as_str() {
            "LUNES" | "LUN" | "LU" => Ok(Dia::Lunes),
            "MARTES" | "MAR" | "MA" => Ok(Dia::Martes),
            "MIERCOLES" | "MIE" | "MI" => Ok(Dia::Miercoles),
            "JUEVES" | "JUE" | "JU" => Ok(Dia::Jueves),
            "VIERNES" | "VIE" | "VI" => Ok(Dia::Viernes),
            "SABADO" | "SAB" | "SA" => Ok(Dia::Sabado),
            _ => Err(ErrorEntrada::DiaDesconocido(etiqueta.to_string())),
        }
    }

    /// Abreviatura de tres letras, como la usa la exportación plana.
    pub fn abreviatura(&self) -> &'static str {
        match self {
            Dia::Lunes => "LUN",
            Dia::Martes => "MAR",
            Dia::Miercoles => "MIE",
            Dia::Jueves => "JUE",
            Dia::Viernes => "VIE",
            Dia::Sabado => "SAB",
        }
    }

    /// Nombre completo para presentación.
    pub fn nombre(&self) -> &'static str {
        match self {
            Dia::Lunes => "Lunes",
            Dia::Martes => "Martes",
            Dia::Miercoles => "Miércoles",
            Dia::Jueves => "Jueves",
            Dia::Viernes => "Viernes",
            Dia::Sabado => "Sábado",
        }
    }
}

/// Un bloque semanal de clase: día más rango de horas con precisión de
/// minutos. Precondición de entrada: `inicio < fin`; la frontera `api_json`
/// lo garantiza al construir bloques desde texto y el núcleo no lo
/// re-valida (un bloque invertido no rompe nada, pero la detección de
/// choques deja de estar garantizada).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloqueHorario {
    pub dia: Dia,
    pub inicio: NaiveTime,
    pub fin: NaiveTime,
}

impl BloqueHorario {
    /// Constructor verificado: rechaza `inicio >= fin`.
    pub fn nuevo(dia: Dia, inicio: NaiveTime, fin: NaiveTime) -> Result<BloqueHorario, ErrorEntrada> {
        if inicio >= fin {
            return Err(ErrorEntrada::RangoInvertido(format!(
                "{} {} - {}",
                dia.abreviatura(),
                inicio.format("%H:%M"),
                fin.format("%H:%M"),
            )));
        }
        Ok(BloqueHorario { dia, inicio, fin })
    }

    /// True si ambos bloques caen el mismo día y sus rangos se pisan
    /// estrictamente. Tocarse en el borde (`fin == inicio`) no es solape.
    pub fn se_solapa_con(&self, otro: &BloqueHorario) -> bool {
        self.dia == otro.dia && self.inicio < otro.fin && otro.inicio < self.fin
    }
}

/// Una sección ofertada de un curso: la unidad que se extrae del sistema
/// de matrícula. Inmutable una vez construida; una corrida de síntesis es
/// dueña de sus secciones y las descarta al terminar.
///
/// `horarios` puede venir vacío (sección sin horario publicado): la sección
/// sigue siendo combinable y simplemente no aporta choques.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seccion {
    /// Código del curso, p.ej. "ISIA-109".
    pub curso: String,
    /// Id de liga crudo, p.ej. "T1", "P2", "L1".
    pub id_liga: String,
    /// Identificador único de la oferta (NRC).
    pub nrc: String,
    /// Nombre del docente, texto libre.
    pub docente: String,
    /// Bloques semanales de la sección.
    pub horarios: Vec<BloqueHorario>,
}

/// Configuración de una corrida de síntesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSintesis {
    /// Tope de horarios válidos a recolectar antes de cortar la
    /// enumeración. El resultado son los primeros N válidos en orden de
    /// enumeración, no una muestra representativa.
    pub max_horarios: usize,
    /// Política estricta: si es true, un número de grupo sin sección de
    /// teoría no genera combinaciones. Por defecto false (cualquier
    /// subconjunto no vacío de tipos forma combinación).
    pub requiere_teoria: bool,
}

impl Default for ConfigSintesis {
    fn default() -> Self {
        ConfigSintesis {
            max_horarios: 100,
            requiere_teoria: false,
        }
    }
}

/// Un horario válido: candidato que pasó la validación de choques,
/// aplanado a su lista de secciones (una combinación por curso solicitado,
/// en el orden de solicitud).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorarioValido {
    pub secciones: Vec<Seccion>,
}

impl HorarioValido {
    /// Pares (sección, bloque) aplanados: la unidad que consume el
    /// renderizador externo.
    pub fn entradas(&self) -> Vec<(&Seccion, &BloqueHorario)> {
        let mut pares = Vec::new();
        for seccion in &self.secciones {
            for bloque in &seccion.horarios {
                pares.push((seccion, bloque));
            }
        }
        pares
    }
}

/// Reporte de una sección excluida por error de clasificación. Viaja en el
/// resultado para que el llamador muestre la advertencia; nunca aborta la
/// corrida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescarteSeccion {
    pub curso: String,
    pub nrc: String,
    pub id_liga: String,
    pub motivo: ErrorClasificacion,
}

/// Conteo de combinaciones generadas para un curso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConteoCurso {
    pub curso: String,
    pub combinaciones: usize,
}

/// Contadores de una corrida completa. Es dato, no log: el llamador los
/// usa para mostrar "0 horarios válidos" como estado normal y no como
/// falla.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumenSintesis {
    pub cursos_solicitados: usize,
    pub secciones_recibidas: usize,
    pub secciones_descartadas: usize,
    pub combinaciones_por_curso: Vec<ConteoCurso>,
    pub candidatos_evaluados: u64,
    pub horarios_validos: usize,
    pub tope_alcanzado: bool,
}

/// Resultado de una corrida de síntesis: horarios válidos en orden de
/// enumeración (hasta el tope), descartes por clasificación y el resumen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultadoSintesis {
    pub horarios: Vec<HorarioValido>,
    pub descartes: Vec<DescarteSeccion>,
    pub resumen: ResumenSintesis,
}
