use serde::{Deserialize, Serialize};
use tracing::trace;

use super::intake::normalize_tag;

/// Anatomical region resolved from a body-location code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    Foot,
    Ankle,
    LowerLeg,
    Knee,
    Thigh,
    SacrumButtock,
    Trunk,
    UpperLimb,
    HeadNeck,
    #[default]
    Unspecified,
}

const LATERALITY: &[&str] = &["left", "right", "l", "r", "lt", "rt", "bilateral"];

// Multi-word codes that would otherwise resolve through their generic last word.
const COMPOUNDS: &[(&str, &str)] = &[
    ("upper_leg", "thigh"),
    ("lower_limb", "leg"),
    ("lower_extremity", "leg"),
    ("upper_limb", "arm"),
    ("upper_extremity", "arm"),
    ("back_of_knee", "popliteal"),
];

// Checked in order; the first region with a matching word wins.
const REGION_WORDS: &[(BodyRegion, &[&str])] = &[
    (
        BodyRegion::Foot,
        &[
            "foot", "feet", "heel", "toe", "toes", "hallux", "plantar", "forefoot", "midfoot",
            "hindfoot", "metatarsal", "mtp", "instep",
        ],
    ),
    (
        BodyRegion::Ankle,
        &["ankle", "malleolus", "malleolar", "achilles"],
    ),
    (
        BodyRegion::Knee,
        &["knee", "popliteal", "patella", "patellar"],
    ),
    (
        BodyRegion::LowerLeg,
        &["leg", "shin", "calf", "gaiter", "pretibial", "tibial"],
    ),
    (BodyRegion::Thigh, &["thigh", "femoral"]),
    (
        BodyRegion::SacrumButtock,
        &[
            "sacrum", "sacral", "coccyx", "coccygeal", "buttock", "buttocks", "gluteal",
            "ischial", "ischium", "hip", "trochanter", "trochanteric",
        ],
    ),
    (
        BodyRegion::UpperLimb,
        &[
            "arm", "forearm", "elbow", "wrist", "hand", "finger", "fingers", "thumb",
            "shoulder", "axilla",
        ],
    ),
    (
        BodyRegion::HeadNeck,
        &[
            "head", "scalp", "face", "ear", "nose", "neck", "occiput", "occipital", "chin",
        ],
    ),
    (
        BodyRegion::Trunk,
        &[
            "trunk", "abdomen", "abdominal", "chest", "back", "flank", "breast", "groin",
            "perineum", "perineal", "sternum", "sternal",
        ],
    ),
];

impl BodyRegion {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Foot,
            Self::Ankle,
            Self::LowerLeg,
            Self::Knee,
            Self::Thigh,
            Self::SacrumButtock,
            Self::Trunk,
            Self::UpperLimb,
            Self::HeadNeck,
            Self::Unspecified,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Foot => "Foot",
            Self::Ankle => "Ankle",
            Self::LowerLeg => "Lower leg",
            Self::Knee => "Knee",
            Self::Thigh => "Thigh",
            Self::SacrumButtock => "Sacrum / buttock",
            Self::Trunk => "Trunk",
            Self::UpperLimb => "Upper limb",
            Self::HeadNeck => "Head and neck",
            Self::Unspecified => "Unspecified",
        }
    }

    /// Map a location code such as `left_heel` or `lower_leg_medial` to its region.
    ///
    /// Laterality words are ignored. Codes with no recognised anatomical word resolve
    /// to [`BodyRegion::Unspecified`].
    pub fn from_code(code: &str) -> Self {
        let mut normalized = normalize_tag(code);
        for (compound, replacement) in COMPOUNDS {
            normalized = normalized.replace(compound, replacement);
        }

        let words: Vec<&str> = normalized
            .split('_')
            .filter(|word| !word.is_empty() && !LATERALITY.contains(word))
            .collect();

        let region = REGION_WORDS
            .iter()
            .find(|(_, vocabulary)| words.iter().any(|word| vocabulary.contains(word)))
            .map(|(region, _)| *region)
            .unwrap_or_default();

        trace!(code, region = region.label(), "resolved body location");
        region
    }

    pub const fn is_foot_location(self) -> bool {
        matches!(self, Self::Foot)
    }

    pub const fn is_lower_limb(self) -> bool {
        matches!(
            self,
            Self::Foot | Self::Ankle | Self::LowerLeg | Self::Knee | Self::Thigh
        )
    }
}

#[cfg(test)]
mod tests {
    use super::BodyRegion;

    #[test]
    fn resolves_foot_codes_regardless_of_laterality() {
        for code in ["left_heel", "right_hallux", "plantar_forefoot", "L-toe", " Dorsal Foot "] {
            assert_eq!(BodyRegion::from_code(code), BodyRegion::Foot, "{code}");
        }
    }

    #[test]
    fn resolves_limb_and_pressure_sites() {
        assert_eq!(BodyRegion::from_code("lower_leg_medial"), BodyRegion::LowerLeg);
        assert_eq!(BodyRegion::from_code("right_medial_malleolus"), BodyRegion::Ankle);
        assert_eq!(BodyRegion::from_code("back_of_knee"), BodyRegion::Knee);
        assert_eq!(BodyRegion::from_code("upper_leg"), BodyRegion::Thigh);
        assert_eq!(BodyRegion::from_code("sacrum"), BodyRegion::SacrumButtock);
        assert_eq!(BodyRegion::from_code("left_forearm"), BodyRegion::UpperLimb);
        assert_eq!(BodyRegion::from_code("abdomen"), BodyRegion::Trunk);
        assert_eq!(BodyRegion::from_code("occiput"), BodyRegion::HeadNeck);
    }

    #[test]
    fn unknown_codes_are_unspecified() {
        assert_eq!(BodyRegion::from_code(""), BodyRegion::Unspecified);
        assert_eq!(BodyRegion::from_code("left"), BodyRegion::Unspecified);
        assert_eq!(BodyRegion::from_code("site_7"), BodyRegion::Unspecified);
    }

    #[test]
    fn lower_limb_covers_foot_through_thigh_only() {
        let lower: Vec<_> = BodyRegion::ordered()
            .into_iter()
            .filter(|region| region.is_lower_limb())
            .collect();
        assert_eq!(
            lower,
            vec![
                BodyRegion::Foot,
                BodyRegion::Ankle,
                BodyRegion::LowerLeg,
                BodyRegion::Knee,
                BodyRegion::Thigh,
            ]
        );
        assert!(BodyRegion::Foot.is_foot_location());
        assert!(!BodyRegion::Ankle.is_foot_location());
    }
}
