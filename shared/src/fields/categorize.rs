//! Keyword heuristic for untagged dynamic fields

use super::value::Section;

/// Substrings marking identity-like keys
pub const CORE_IDENTITY_KEYWORDS: &[&str] = &[
    "name",
    "model",
    "brand",
    "vendor",
    "price",
    "cost",
    "url",
    "link",
    "image",
    "photo",
    "description",
    "review",
    "source",
    "manufacturer",
    "company",
    "title",
    "category",
    "color",
    "size",
    "weight",
    "material",
    "style",
    "type",
    "series",
    "edition",
];

/// Substrings marking technical keys
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "socket",
    "core",
    "thread",
    "speed",
    "frequency",
    "capacity",
    "memory",
    "storage",
    "wattage",
    "voltage",
    "tdp",
    "gpu",
    "cooler",
    "fan",
    "temperature",
    "performance",
    "benchmark",
    "mhz",
    "ghz",
    "gb",
    "mb",
    "watts",
    "rpm",
    "clock",
    "cache",
    "bus",
    "bandwidth",
    "latency",
    "power",
    "thermal",
    "pcie",
    "sata",
    "ddr",
    "interface",
];

fn contains_any(key: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| key.contains(k))
}

/// Bucket for a key with no section tag
///
/// Technical only when the key hits a technical keyword and no identity
/// keyword. Both or neither fall back to core identity.
pub fn categorize(key: &str) -> Section {
    let key = key.to_lowercase();
    if contains_any(&key, TECHNICAL_KEYWORDS) && !contains_any(&key, CORE_IDENTITY_KEYWORDS) {
        Section::TechnicalSpecs
    } else {
        Section::CoreIdentity
    }
}

/// Explicit tag first, heuristic otherwise
pub fn resolve_section(tag: Option<Section>, key: &str) -> Section {
    match tag {
        Some(section) => section,
        None => {
            let section = categorize(key);
            tracing::debug!(key, section = %section, "Untagged field categorized");
            section
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_keyword_only() {
        assert_eq!(categorize("wattage"), Section::TechnicalSpecs);
        assert_eq!(categorize("PCIe_Lanes"), Section::TechnicalSpecs);
        assert_eq!(categorize("l3_cache"), Section::TechnicalSpecs);
    }

    #[test]
    fn test_core_keyword_only() {
        assert_eq!(categorize("brand_color"), Section::CoreIdentity);
        assert_eq!(categorize("warranty_description"), Section::CoreIdentity);
    }

    #[test]
    fn test_ties_default_to_core() {
        // both
        assert_eq!(categorize("max_fan_size"), Section::CoreIdentity);
        assert_eq!(categorize("memory_type"), Section::CoreIdentity);
        // neither
        assert_eq!(categorize("warranty"), Section::CoreIdentity);
        assert_eq!(categorize(""), Section::CoreIdentity);
    }

    #[test]
    fn test_categorize_is_deterministic() {
        for key in ["wattage", "brand_color", "max_fan_size", "rgb", "boost_clock"] {
            let first = categorize(key);
            for _ in 0..5 {
                assert_eq!(categorize(key), first);
            }
        }
    }

    #[test]
    fn test_explicit_tag_overrides_heuristic() {
        assert_eq!(
            resolve_section(Some(Section::TechnicalSpecs), "max_fan_size"),
            Section::TechnicalSpecs
        );
        assert_eq!(
            resolve_section(Some(Section::CoreIdentity), "wattage"),
            Section::CoreIdentity
        );
        assert_eq!(resolve_section(None, "wattage"), Section::TechnicalSpecs);
    }
}
