use super::normalizer::normalize_tag;
use crate::assessment::domain::{
    AbiRange, DeepSpaceType, Etiology, ExudateLevel, PeriwoundSkin, TissueType,
};
use std::collections::HashMap;
use std::sync::OnceLock;

type AliasMap<T> = HashMap<String, T>;

static TISSUE_MAP: OnceLock<AliasMap<TissueType>> = OnceLock::new();
static EXUDATE_MAP: OnceLock<AliasMap<ExudateLevel>> = OnceLock::new();
static DEEP_SPACE_MAP: OnceLock<AliasMap<DeepSpaceType>> = OnceLock::new();
static PERIWOUND_MAP: OnceLock<AliasMap<PeriwoundSkin>> = OnceLock::new();
static ABI_MAP: OnceLock<AliasMap<AbiRange>> = OnceLock::new();
static ETIOLOGY_MAP: OnceLock<AliasMap<Etiology>> = OnceLock::new();
static FLAG_MAP: OnceLock<AliasMap<Option<bool>>> = OnceLock::new();

fn build<T: Copy>(aliases: &[(&str, T)]) -> AliasMap<T> {
    aliases
        .iter()
        .map(|(alias, value)| (normalize_tag(alias), *value))
        .collect()
}

pub(crate) fn tissue_type(normalized: &str) -> Option<TissueType> {
    TISSUE_MAP
        .get_or_init(|| {
            build(&[
                ("necrosis", TissueType::Necrosis),
                ("necrotic", TissueType::Necrosis),
                ("eschar", TissueType::Necrosis),
                ("black", TissueType::Necrosis),
                ("slough", TissueType::Slough),
                ("sloughy", TissueType::Slough),
                ("fibrin", TissueType::Slough),
                ("yellow", TissueType::Slough),
                ("granulation", TissueType::Granulation),
                ("granulating", TissueType::Granulation),
                ("red", TissueType::Granulation),
                ("epithelializing", TissueType::Epithelializing),
                ("epithelialising", TissueType::Epithelializing),
                ("epithelialization", TissueType::Epithelializing),
                ("epithelial", TissueType::Epithelializing),
                ("pink", TissueType::Epithelializing),
            ])
        })
        .get(normalized)
        .copied()
}

pub(crate) fn exudate_level(normalized: &str) -> Option<ExudateLevel> {
    EXUDATE_MAP
        .get_or_init(|| {
            build(&[
                ("dry", ExudateLevel::Dry),
                ("none", ExudateLevel::Dry),
                ("low", ExudateLevel::Low),
                ("light", ExudateLevel::Low),
                ("scant", ExudateLevel::Low),
                ("minimal", ExudateLevel::Low),
                ("moderate", ExudateLevel::Moderate),
                ("medium", ExudateLevel::Moderate),
                ("high", ExudateLevel::High),
                ("heavy", ExudateLevel::High),
                ("copious", ExudateLevel::High),
                ("unknown", ExudateLevel::Unknown),
                ("not assessed", ExudateLevel::Unknown),
            ])
        })
        .get(normalized)
        .copied()
}

pub(crate) fn deep_space_type(normalized: &str) -> Option<DeepSpaceType> {
    DEEP_SPACE_MAP
        .get_or_init(|| {
            build(&[
                ("cavity", DeepSpaceType::Cavity),
                ("cavities", DeepSpaceType::Cavity),
                ("tunnel", DeepSpaceType::Tunnel),
                ("tunnels", DeepSpaceType::Tunnel),
                ("tunneling", DeepSpaceType::Tunnel),
                ("tunnelling", DeepSpaceType::Tunnel),
                ("sinus", DeepSpaceType::Tunnel),
                ("undermining", DeepSpaceType::Undermining),
                ("undermined", DeepSpaceType::Undermining),
            ])
        })
        .get(normalized)
        .copied()
}

pub(crate) fn periwound_skin(normalized: &str) -> Option<PeriwoundSkin> {
    PERIWOUND_MAP
        .get_or_init(|| {
            build(&[
                ("normal", PeriwoundSkin::Normal),
                ("intact", PeriwoundSkin::Normal),
                ("healthy", PeriwoundSkin::Normal),
                ("macerated", PeriwoundSkin::Macerated),
                ("maceration", PeriwoundSkin::Macerated),
                ("fragile", PeriwoundSkin::Fragile),
                ("dry flaky", PeriwoundSkin::Fragile),
                ("thin", PeriwoundSkin::Fragile),
                ("unknown", PeriwoundSkin::Unknown),
            ])
        })
        .get(normalized)
        .copied()
}

pub(crate) fn abi_range(normalized: &str) -> Option<AbiRange> {
    ABI_MAP
        .get_or_init(|| {
            build(&[
                ("ge_0_8", AbiRange::AtLeast0_8),
                ("abi_ge_0_8", AbiRange::AtLeast0_8),
                (">=0.8", AbiRange::AtLeast0_8),
                (">= 0.8", AbiRange::AtLeast0_8),
                ("\u{2265}0.8", AbiRange::AtLeast0_8),
                ("\u{2265} 0.8", AbiRange::AtLeast0_8),
                ("normal", AbiRange::AtLeast0_8),
                ("p0_5_to_0_79", AbiRange::From0_5To0_79),
                ("abi_p0_5_to_0_79", AbiRange::From0_5To0_79),
                ("0.5-0.79", AbiRange::From0_5To0_79),
                ("0.5 to 0.79", AbiRange::From0_5To0_79),
                ("reduced", AbiRange::From0_5To0_79),
                ("lt_0_5", AbiRange::Below0_5),
                ("abi_lt_0_5", AbiRange::Below0_5),
                ("<0.5", AbiRange::Below0_5),
                ("< 0.5", AbiRange::Below0_5),
                ("critical", AbiRange::Below0_5),
                ("unknown", AbiRange::Unknown),
                ("not measured", AbiRange::Unknown),
                ("not done", AbiRange::Unknown),
            ])
        })
        .get(normalized)
        .copied()
}

pub(crate) fn etiology(normalized: &str) -> Option<Etiology> {
    ETIOLOGY_MAP
        .get_or_init(|| {
            build(&[
                ("venous", Etiology::Venous),
                ("venous leg ulcer", Etiology::Venous),
                ("arterial", Etiology::Arterial),
                ("ischemic", Etiology::Arterial),
                ("diabetic_foot", Etiology::DiabeticFoot),
                ("diabeticFoot", Etiology::DiabeticFoot),
                ("diabetic", Etiology::DiabeticFoot),
                ("dfu", Etiology::DiabeticFoot),
                ("pressure", Etiology::Pressure),
                ("pressure injury", Etiology::Pressure),
                ("pressure ulcer", Etiology::Pressure),
                ("traumatic", Etiology::Traumatic),
                ("trauma", Etiology::Traumatic),
                ("surgical", Etiology::Surgical),
                ("post-operative", Etiology::Surgical),
                ("mixed", Etiology::Mixed),
                ("other", Etiology::Other),
            ])
        })
        .get(normalized)
        .copied()
}

/// Tri-state answer words; `Some(None)` means the word is known and means "unknown".
pub(crate) fn flag(normalized: &str) -> Option<Option<bool>> {
    FLAG_MAP
        .get_or_init(|| {
            build(&[
                ("yes", Some(true)),
                ("y", Some(true)),
                ("true", Some(true)),
                ("1", Some(true)),
                ("present", Some(true)),
                ("positive", Some(true)),
                ("palpable", Some(true)),
                ("no", Some(false)),
                ("n", Some(false)),
                ("false", Some(false)),
                ("0", Some(false)),
                ("absent", Some(false)),
                ("negative", Some(false)),
                ("not palpable", Some(false)),
                ("unknown", None),
                ("unsure", None),
                ("not assessed", None),
                ("n/a", None),
            ])
        })
        .get(normalized)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abi_aliases_resolve_after_normalization() {
        assert_eq!(abi_range(&normalize_tag("<0.5")), Some(AbiRange::Below0_5));
        assert_eq!(abi_range(&normalize_tag("abi_lt_0_5")), Some(AbiRange::Below0_5));
        assert_eq!(abi_range(&normalize_tag("0.5 - 0.79")), Some(AbiRange::From0_5To0_79));
        assert_eq!(abi_range(&normalize_tag("\u{2265} 0.8")), Some(AbiRange::AtLeast0_8));
        assert_eq!(abi_range(&normalize_tag("0.9")), None);
    }

    #[test]
    fn camel_case_etiology_resolves() {
        assert_eq!(etiology(&normalize_tag("diabeticFoot")), Some(Etiology::DiabeticFoot));
        assert_eq!(etiology(&normalize_tag("Pressure Injury")), Some(Etiology::Pressure));
    }

    #[test]
    fn flag_words_are_tri_state() {
        assert_eq!(flag("yes"), Some(Some(true)));
        assert_eq!(flag(&normalize_tag("Not Palpable")), Some(Some(false)));
        assert_eq!(flag("unknown"), Some(None));
        assert_eq!(flag("maybe"), None);
    }
}
