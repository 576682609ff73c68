//! Holland RIASEC primitives shared by the quiz and the matching engine.
//!
//! Dimensions follow the conventional hexagon ordering R-I-A-S-E-C; adjacency
//! on that cycle drives the interest sub-score of the compatibility engine.

pub mod quiz;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of Holland's six interest dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Dimension {
    /// Hexagon ordering, the basis for adjacency distances.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Realistic,
            Self::Investigative,
            Self::Artistic,
            Self::Social,
            Self::Enterprising,
            Self::Conventional,
        ]
    }

    pub const fn code(self) -> char {
        match self {
            Self::Realistic => 'R',
            Self::Investigative => 'I',
            Self::Artistic => 'A',
            Self::Social => 'S',
            Self::Enterprising => 'E',
            Self::Conventional => 'C',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(Self::Realistic),
            'I' => Some(Self::Investigative),
            'A' => Some(Self::Artistic),
            'S' => Some(Self::Social),
            'E' => Some(Self::Enterprising),
            'C' => Some(Self::Conventional),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Realistic => "Réaliste",
            Self::Investigative => "Investigateur",
            Self::Artistic => "Artistique",
            Self::Social => "Social",
            Self::Enterprising => "Entreprenant",
            Self::Conventional => "Conventionnel",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Realistic => "#EF4444",
            Self::Investigative => "#3B82F6",
            Self::Artistic => "#8B5CF6",
            Self::Social => "#10B981",
            Self::Enterprising => "#F59E0B",
            Self::Conventional => "#6B7280",
        }
    }

    const fn position(self) -> u8 {
        match self {
            Self::Realistic => 0,
            Self::Investigative => 1,
            Self::Artistic => 2,
            Self::Social => 3,
            Self::Enterprising => 4,
            Self::Conventional => 5,
        }
    }

    /// Career-interpretation reference data shown alongside quiz results.
    pub fn profile(self) -> DimensionProfile {
        match self {
            Self::Realistic => DimensionProfile {
                description: "Personnes qui préfèrent les activités concrètes, techniques et manuelles. Elles aiment travailler avec des outils, des machines et dans des environnements structurés.",
                typical_careers: &[
                    "Ingénieur civil",
                    "Technicien informatique",
                    "Électricien",
                    "Mécanicien",
                    "Agriculteur",
                ],
            },
            Self::Investigative => DimensionProfile {
                description: "Personnes curieuses qui aiment observer, analyser, résoudre des problèmes et comprendre les phénomènes. Elles préfèrent la réflexion à l'action.",
                typical_careers: &[
                    "Chercheur scientifique",
                    "Médecin",
                    "Pharmacien",
                    "Biologiste",
                    "Statisticien",
                ],
            },
            Self::Artistic => DimensionProfile {
                description: "Personnes créatives qui apprécient l'expression artistique, l'originalité et les environnements non structurés. Elles valorisent l'esthétique et l'innovation.",
                typical_careers: &[
                    "Graphiste",
                    "Architecte d'intérieur",
                    "Musicien",
                    "Journaliste",
                    "Designer",
                ],
            },
            Self::Social => DimensionProfile {
                description: "Personnes bienveillantes qui aiment aider, enseigner et prendre soin des autres. Elles recherchent l'interaction humaine et le travail d'équipe.",
                typical_careers: &[
                    "Enseignant",
                    "Infirmier",
                    "Psychologue",
                    "Travailleur social",
                    "Conseiller d'orientation",
                ],
            },
            Self::Enterprising => DimensionProfile {
                description: "Personnes ambitieuses qui aiment diriger, persuader et prendre des initiatives. Elles recherchent le pouvoir, le statut et les défis.",
                typical_careers: &[
                    "Manager",
                    "Chef d'entreprise",
                    "Commercial",
                    "Avocat",
                    "Consultant",
                ],
            },
            Self::Conventional => DimensionProfile {
                description: "Personnes organisées qui préfèrent l'ordre, la précision et le respect des procédures. Elles excellent dans les tâches structurées et détaillées.",
                typical_careers: &[
                    "Comptable",
                    "Auditeur",
                    "Banquier",
                    "Administrateur",
                    "Analyste financier",
                ],
            },
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Static interpretation data for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionProfile {
    pub description: &'static str,
    pub typical_careers: &'static [&'static str],
}

/// Cyclic distance between two dimensions on the hexagon, in 0..=3.
pub fn hexagon_distance(a: Dimension, b: Dimension) -> u8 {
    let forward = (a.position() as i8 - b.position() as i8).unsigned_abs();
    forward.min(6 - forward)
}

/// Six interest percentages, one per dimension, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiasecScores {
    pub realistic: u8,
    pub investigative: u8,
    pub artistic: u8,
    pub social: u8,
    pub enterprising: u8,
    pub conventional: u8,
}

impl RiasecScores {
    pub const fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Realistic => self.realistic,
            Dimension::Investigative => self.investigative,
            Dimension::Artistic => self.artistic,
            Dimension::Social => self.social,
            Dimension::Enterprising => self.enterprising,
            Dimension::Conventional => self.conventional,
        }
    }

    /// Entries in hexagon order, for deterministic iteration.
    pub fn entries(&self) -> [(Dimension, u8); 6] {
        let mut out = [(Dimension::Realistic, 0); 6];
        for (slot, dimension) in out.iter_mut().zip(Dimension::ordered()) {
            *slot = (dimension, self.get(dimension));
        }
        out
    }

    /// The dimension the student scored highest on; hexagon order breaks ties.
    pub fn dominant(&self) -> Dimension {
        self.entries()
            .into_iter()
            .max_by(|(dim_a, score_a), (dim_b, score_b)| {
                score_a
                    .cmp(score_b)
                    .then(dim_b.position().cmp(&dim_a.position()))
            })
            .map(|(dimension, _)| dimension)
            .unwrap_or(Dimension::Realistic)
    }
}

/// Ordered top-3 dimensions of a RIASEC result (e.g. "IAS").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HollandCode(pub [Dimension; 3]);

impl HollandCode {
    /// Derive the code from scores; equal scores fall back to hexagon order
    /// so the result is reproducible for identical inputs.
    pub fn from_scores(scores: &RiasecScores) -> Self {
        let mut entries = scores.entries();
        entries.sort_by(|(dim_a, score_a), (dim_b, score_b)| {
            score_b
                .cmp(score_a)
                .then(dim_a.position().cmp(&dim_b.position()))
        });

        Self([entries[0].0, entries[1].0, entries[2].0])
    }

    pub const fn primary(&self) -> Dimension {
        self.0[0]
    }

    pub fn contains(&self, dimension: Dimension) -> bool {
        self.0.contains(&dimension)
    }
}

impl fmt::Display for HollandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dimension in self.0 {
            write!(f, "{}", dimension.code())?;
        }
        Ok(())
    }
}
