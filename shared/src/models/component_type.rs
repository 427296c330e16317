//! Component Type Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of hardware component
///
/// Immutable once a record is created. The lowercased wire name doubles as
/// the key of the type-specific sub-record on a loaded component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Processor,
    GraphicsCard,
    Motherboard,
    Ram,
    PowerSupply,
    Ssd,
    Hdd,
    CpuCooler,
    Cabinet,
    Monitor,
    Keyboard,
    Mouse,
    Headset,
    AdditionalCaseFans,
}

impl ComponentType {
    pub const ALL: [ComponentType; 14] = [
        Self::Processor,
        Self::GraphicsCard,
        Self::Motherboard,
        Self::Ram,
        Self::PowerSupply,
        Self::Ssd,
        Self::Hdd,
        Self::CpuCooler,
        Self::Cabinet,
        Self::Monitor,
        Self::Keyboard,
        Self::Mouse,
        Self::Headset,
        Self::AdditionalCaseFans,
    ];

    /// Wire name, e.g. `GRAPHICS_CARD`
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Processor => "PROCESSOR",
            Self::GraphicsCard => "GRAPHICS_CARD",
            Self::Motherboard => "MOTHERBOARD",
            Self::Ram => "RAM",
            Self::PowerSupply => "POWER_SUPPLY",
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::CpuCooler => "CPU_COOLER",
            Self::Cabinet => "CABINET",
            Self::Monitor => "MONITOR",
            Self::Keyboard => "KEYBOARD",
            Self::Mouse => "MOUSE",
            Self::Headset => "HEADSET",
            Self::AdditionalCaseFans => "ADDITIONAL_CASE_FANS",
        }
    }

    /// Key of the type-specific sub-record (`graphics_card`)
    pub fn record_key(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    /// Human label (`Graphics Card`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Processor => "Processor",
            Self::GraphicsCard => "Graphics Card",
            Self::Motherboard => "Motherboard",
            Self::Ram => "RAM",
            Self::PowerSupply => "Power Supply",
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::CpuCooler => "CPU Cooler",
            Self::Cabinet => "Cabinet",
            Self::Monitor => "Monitor",
            Self::Keyboard => "Keyboard",
            Self::Mouse => "Mouse",
            Self::Headset => "Headset",
            Self::AdditionalCaseFans => "Additional Case Fans",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    /// Accepts the wire name in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown component type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_roundtrip() {
        let json = serde_json::to_string(&ComponentType::AdditionalCaseFans).unwrap();
        assert_eq!(json, "\"ADDITIONAL_CASE_FANS\"");
        let parsed: ComponentType = serde_json::from_str("\"CPU_COOLER\"").unwrap();
        assert_eq!(parsed, ComponentType::CpuCooler);
    }

    #[test]
    fn test_record_key() {
        assert_eq!(ComponentType::GraphicsCard.record_key(), "graphics_card");
        assert_eq!(ComponentType::Ram.record_key(), "ram");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("power_supply".parse(), Ok(ComponentType::PowerSupply));
        assert!("toaster".parse::<ComponentType>().is_err());
    }
}
