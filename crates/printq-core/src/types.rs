use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Print order lifecycle status. The serialized strings are the durable wire
/// format and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Pendente")]
    Pendente,
    #[serde(rename = "Em Andamento")]
    EmAndamento,
    #[serde(rename = "Concluído")]
    Concluido,
    #[serde(rename = "Falha / Cancelado")]
    Falha,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[
            Status::Pendente,
            Status::EmAndamento,
            Status::Concluido,
            Status::Falha,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pendente => "Pendente",
            Status::EmAndamento => "Em Andamento",
            Status::Concluido => "Concluído",
            Status::Falha => "Falha / Cancelado",
        }
    }

    /// Fixed display rank for status-ordered queues: work in progress first,
    /// then waiting, then the terminal states.
    pub fn priority(self) -> u8 {
        match self {
            Status::EmAndamento => 1,
            Status::Pendente => 2,
            Status::Concluido => 3,
            Status::Falha => 4,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::QueueError;

    /// Accepts the wire string, the bare variant name, a lowercase form,
    /// and an accent-free lowercase form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pendente" | "pendente" => Ok(Status::Pendente),
            "Em Andamento" | "em andamento" | "em-andamento" => Ok(Status::EmAndamento),
            "Concluído" | "Concluido" | "concluído" | "concluido" => Ok(Status::Concluido),
            "Falha / Cancelado" | "Falha" | "falha" => Ok(Status::Falha),
            _ => Err(crate::error::QueueError::Validation(vec![format!(
                "unknown status '{s}'"
            )])),
        }
    }
}

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

/// Plant area the requested part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "Envase")]
    Envase,
    #[serde(rename = "Processos")]
    Processos,
    #[serde(rename = "Utilidades")]
    Utilidades,
}

impl Area {
    pub fn all() -> &'static [Area] {
        &[Area::Envase, Area::Processos, Area::Utilidades]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Area::Envase => "Envase",
            Area::Processos => "Processos",
            Area::Utilidades => "Utilidades",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Area {
    type Err = crate::error::QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Envase" | "envase" => Ok(Area::Envase),
            "Processos" | "processos" => Ok(Area::Processos),
            "Utilidades" | "utilidades" => Ok(Area::Utilidades),
            _ => Err(crate::error::QueueError::Validation(vec![format!(
                "unknown area '{s}'"
            )])),
        }
    }
}

// ---------------------------------------------------------------------------
// Part
// ---------------------------------------------------------------------------

/// Fixed catalog of printable parts, plus the `Outra` sentinel for anything
/// not in the catalog (requires a free-text description on the order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    #[serde(rename = "Faca para Etiquetadora")]
    FacaEtiquetadora,
    #[serde(rename = "Sapata")]
    Sapata,
    #[serde(rename = "Tampão")]
    Tampao,
    #[serde(rename = "Chave para área de Processos")]
    ChaveProcessos,
    #[serde(rename = "Hélice")]
    Helice,
    #[serde(rename = "Tampa do Lava Olhos")]
    TampaLavaOlhos,
    #[serde(rename = "Tampa do Lava Olhos - Linha de Chopp")]
    TampaLavaOlhosChopp,
    #[serde(rename = "Pino identificador da abertura da válvula on-off")]
    PinoValvulaOnOff,
    #[serde(rename = "Outra")]
    Outra,
}

impl Part {
    pub fn all() -> &'static [Part] {
        &[
            Part::FacaEtiquetadora,
            Part::Sapata,
            Part::Tampao,
            Part::ChaveProcessos,
            Part::Helice,
            Part::TampaLavaOlhos,
            Part::TampaLavaOlhosChopp,
            Part::PinoValvulaOnOff,
            Part::Outra,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Part::FacaEtiquetadora => "Faca para Etiquetadora",
            Part::Sapata => "Sapata",
            Part::Tampao => "Tampão",
            Part::ChaveProcessos => "Chave para área de Processos",
            Part::Helice => "Hélice",
            Part::TampaLavaOlhos => "Tampa do Lava Olhos",
            Part::TampaLavaOlhosChopp => "Tampa do Lava Olhos - Linha de Chopp",
            Part::PinoValvulaOnOff => "Pino identificador da abertura da válvula on-off",
            Part::Outra => "Outra",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Part {
    type Err = crate::error::QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Part::all()
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| {
                crate::error::QueueError::Validation(vec![format!("unknown part '{s}'")])
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_wire_strings() {
        let pairs = [
            (Status::Pendente, "\"Pendente\""),
            (Status::EmAndamento, "\"Em Andamento\""),
            (Status::Concluido, "\"Concluído\""),
            (Status::Falha, "\"Falha / Cancelado\""),
        ];
        for (status, wire) in pairs {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            let parsed: Status = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn status_priority_table() {
        assert_eq!(Status::EmAndamento.priority(), 1);
        assert_eq!(Status::Pendente.priority(), 2);
        assert_eq!(Status::Concluido.priority(), 3);
        assert_eq!(Status::Falha.priority(), 4);
    }

    #[test]
    fn status_roundtrip() {
        for status in Status::all() {
            let parsed = Status::from_str(status.as_str()).unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn status_accepts_consistent_alias_set() {
        // Wire string, bare variant name, lowercase, accent-free lowercase
        for alias in ["Falha / Cancelado", "Falha", "falha"] {
            assert_eq!(Status::from_str(alias).unwrap(), Status::Falha);
        }
        for alias in ["Concluído", "Concluido", "concluído", "concluido"] {
            assert_eq!(Status::from_str(alias).unwrap(), Status::Concluido);
        }
        for alias in ["Em Andamento", "em andamento", "em-andamento"] {
            assert_eq!(Status::from_str(alias).unwrap(), Status::EmAndamento);
        }
        assert_eq!(Status::from_str("pendente").unwrap(), Status::Pendente);
        assert!(Status::from_str("Cancelado").is_err());
    }

    #[test]
    fn area_wire_strings() {
        for area in Area::all() {
            let json = serde_json::to_string(area).unwrap();
            assert_eq!(json, format!("\"{}\"", area.as_str()));
        }
    }

    #[test]
    fn part_catalog_complete() {
        // Nine fixed parts including the Outra sentinel
        assert_eq!(Part::all().len(), 9);
        assert_eq!(Part::all().last(), Some(&Part::Outra));
    }

    #[test]
    fn part_wire_roundtrip() {
        for part in Part::all() {
            let json = serde_json::to_string(part).unwrap();
            let parsed: Part = serde_json::from_str(&json).unwrap();
            assert_eq!(*part, parsed);
        }
        let knife: Part = serde_json::from_str("\"Faca para Etiquetadora\"").unwrap();
        assert_eq!(knife, Part::FacaEtiquetadora);
    }

    #[test]
    fn unknown_wire_value_rejected() {
        assert!(serde_json::from_str::<Status>("\"Shipped\"").is_err());
        assert!(Part::from_str("Parafuso").is_err());
    }
}
