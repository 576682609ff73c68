use super::config::ScoringConfig;
use super::ComponentScores;
use serde::{Deserialize, Serialize};

/// The five compatibility criteria, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Riasec,
    Grades,
    Values,
    Employment,
    Financial,
}

impl Criterion {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Riasec,
            Self::Grades,
            Self::Values,
            Self::Employment,
            Self::Financial,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Riasec => "Compatibilité RIASEC",
            Self::Grades => "Résultats académiques",
            Self::Values => "Valeurs professionnelles",
            Self::Employment => "Perspectives d'emploi",
            Self::Financial => "Accessibilité financière",
        }
    }

    const fn position(self) -> u8 {
        match self {
            Self::Riasec => 0,
            Self::Grades => 1,
            Self::Values => 2,
            Self::Employment => 3,
            Self::Financial => 4,
        }
    }
}

/// Qualitative band derived from the total score, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingTier {
    Excellent,
    Good,
    Moderate,
    Weak,
}

impl RankingTier {
    /// Band lookup with closed boundaries: 80, 60 and 40 each belong to the
    /// band they open.
    pub const fn for_total(total_score: u8) -> Self {
        if total_score >= 80 {
            Self::Excellent
        } else if total_score >= 60 {
            Self::Good
        } else if total_score >= 40 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Fortement recommandé",
            Self::Good => "Recommandé",
            Self::Moderate => "À considérer",
            Self::Weak => "Non recommandé",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#10B981",
            Self::Good => "#3B82F6",
            Self::Moderate => "#F59E0B",
            Self::Weak => "#EF4444",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Excellent => "🌟",
            Self::Good => "👍",
            Self::Moderate => "💡",
            Self::Weak => "⚠️",
        }
    }
}

/// Strength and weakness lines for each criterion crossing a threshold.
///
/// Strengths are ordered by descending component score, weaknesses ascending;
/// criterion order breaks ties so identical inputs render identically.
pub(crate) fn explanations(
    components: &ComponentScores,
    config: &ScoringConfig,
) -> (Vec<String>, Vec<String>) {
    let mut strengths: Vec<(Criterion, u8)> = Vec::new();
    let mut weaknesses: Vec<(Criterion, u8)> = Vec::new();

    for criterion in Criterion::ordered() {
        let score = components.get(criterion);
        if score >= config.strong_threshold {
            strengths.push((criterion, score));
        } else if score <= config.weak_threshold {
            weaknesses.push((criterion, score));
        }
    }

    strengths.sort_by(|(crit_a, score_a), (crit_b, score_b)| {
        score_b
            .cmp(score_a)
            .then(crit_a.position().cmp(&crit_b.position()))
    });
    weaknesses.sort_by(|(crit_a, score_a), (crit_b, score_b)| {
        score_a
            .cmp(score_b)
            .then(crit_a.position().cmp(&crit_b.position()))
    });

    let render = |(criterion, score): &(Criterion, u8)| format!("{}: {}%", criterion.label(), score);

    (
        strengths.iter().map(render).collect(),
        weaknesses.iter().map(render).collect(),
    )
}

/// Guidance sentence matching the ranking band.
pub(crate) fn advice_for(total_score: u8) -> String {
    let tier = RankingTier::for_total(total_score);
    let guidance = match tier {
        RankingTier::Excellent => {
            "Vos profil et intérêts correspondent très bien à ce programme. C'est un excellent choix!"
        }
        RankingTier::Good => {
            "Ce programme correspond bien à votre profil. Nous vous encourageons à postuler."
        }
        RankingTier::Moderate => {
            "Ce programme pourrait vous convenir, mais examinez attentivement les points faibles identifiés."
        }
        RankingTier::Weak => {
            "Ce programme ne semble pas optimal pour votre profil. Considérez d'autres options mieux adaptées."
        }
    };

    format!(
        "Avec un score de {}%, ce programme est {}. {}",
        total_score,
        tier.label().to_lowercase(),
        guidance
    )
}
