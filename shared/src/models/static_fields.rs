//! Static field catalog
//!
//! Compile-time list of the technical attributes every component type is
//! expected to carry. Dynamic fields are exactly the complement of this
//! catalog for the active type.

use super::component_type::ComponentType;
use serde::Serialize;

/// Primitive kind of a static field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticFieldKind {
    Text,
    Number,
}

/// One expected technical attribute of a component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticFieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: StaticFieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    /// Enumerated choices; empty means free input
    pub choices: &'static [&'static str],
}

const BOOL_CHOICES: &[&str] = &["true", "false"];

impl StaticFieldDef {
    const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: StaticFieldKind::Text,
            unit: None,
            placeholder: None,
            choices: &[],
        }
    }

    const fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: StaticFieldKind::Number,
            unit: None,
            placeholder: None,
            choices: &[],
        }
    }

    const fn flag(key: &'static str, label: &'static str) -> Self {
        Self::text(key, label).choices(BOOL_CHOICES)
    }

    const fn unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    const fn hint(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }
}

const PROCESSOR: &[StaticFieldDef] = &[
    StaticFieldDef::text("socket", "Socket").hint("AM5, LGA1700"),
    StaticFieldDef::number("cores", "Cores"),
    StaticFieldDef::number("threads", "Threads"),
    StaticFieldDef::number("base_clock", "Base Clock").unit("GHz"),
    StaticFieldDef::number("boost_clock", "Boost Clock").unit("GHz"),
    StaticFieldDef::number("tdp_watts", "TDP").unit("W"),
    StaticFieldDef::flag("integrated_gpu", "iGPU"),
    StaticFieldDef::flag("includes_cooler", "Cooler Included"),
];

const GRAPHICS_CARD: &[StaticFieldDef] = &[
    StaticFieldDef::text("chipset", "Chipset").hint("RTX 4060"),
    StaticFieldDef::number("vram_gb", "VRAM").unit("GB"),
    StaticFieldDef::number("length_mm", "Length").unit("mm"),
    StaticFieldDef::number("tdp_watts", "TDP").unit("W"),
    StaticFieldDef::number("recommended_psu", "Rec. PSU").unit("W"),
];

const MOTHERBOARD: &[StaticFieldDef] = &[
    StaticFieldDef::text("socket", "Socket"),
    StaticFieldDef::text("form_factor", "Form Factor").hint("ATX, mATX"),
    StaticFieldDef::text("memory_type", "RAM Type").hint("DDR4, DDR5"),
    StaticFieldDef::number("memory_slots", "RAM Slots"),
    StaticFieldDef::number("max_memory_gb", "Max RAM").unit("GB"),
    StaticFieldDef::number("m2_slots", "M.2 Slots"),
    StaticFieldDef::flag("wifi", "WiFi"),
];

const RAM: &[StaticFieldDef] = &[
    StaticFieldDef::text("memory_type", "Type").hint("DDR4, DDR5"),
    StaticFieldDef::number("capacity_gb", "Total Capacity").unit("GB"),
    StaticFieldDef::number("modules", "Modules (Sticks)"),
    StaticFieldDef::number("speed_mhz", "Speed").unit("MHz"),
    StaticFieldDef::number("cas_latency", "CL"),
];

const POWER_SUPPLY: &[StaticFieldDef] = &[
    StaticFieldDef::number("wattage", "Wattage").unit("W"),
    StaticFieldDef::text("efficiency", "Efficiency").hint("80+ Gold"),
    StaticFieldDef::text("modular", "Modular").hint("Full, Semi"),
];

const SSD: &[StaticFieldDef] = &[
    StaticFieldDef::number("capacity_gb", "Capacity").unit("GB"),
    StaticFieldDef::text("interface", "Interface").hint("SATA, NVMe"),
    StaticFieldDef::text("form_factor", "Form Factor").hint("2.5\", M.2"),
    StaticFieldDef::text("gen", "Gen").hint("Gen4"),
];

const HDD: &[StaticFieldDef] = &[
    StaticFieldDef::number("capacity_gb", "Capacity").unit("GB"),
    StaticFieldDef::number("rpm", "RPM"),
    StaticFieldDef::number("cache_mb", "Cache").unit("MB"),
    StaticFieldDef::text("form_factor", "Form Factor").hint("3.5\", 2.5\""),
];

const CPU_COOLER: &[StaticFieldDef] = &[
    StaticFieldDef::text("type", "Type").hint("Air, AIO"),
    StaticFieldDef::number("height_mm", "Height").unit("mm"),
    StaticFieldDef::number("radiator_size", "Radiator").unit("mm"),
];

const CABINET: &[StaticFieldDef] = &[
    StaticFieldDef::number("max_gpu_len_mm", "Max GPU Length").unit("mm"),
    StaticFieldDef::number("max_cpu_height", "Max CPU Cooler").unit("mm"),
];

const MONITOR: &[StaticFieldDef] = &[
    StaticFieldDef::number("size_inches", "Size").unit("in"),
    StaticFieldDef::text("resolution", "Resolution").hint("1920x1080"),
    StaticFieldDef::number("refresh_rate", "Refresh Rate").unit("Hz"),
    StaticFieldDef::text("panel_type", "Panel Type").hint("IPS, VA"),
    StaticFieldDef::number("response_time", "Response Time").unit("ms"),
];

const KEYBOARD: &[StaticFieldDef] = &[
    StaticFieldDef::text("switch_type", "Switch Type").hint("Mechanical, Membrane"),
    StaticFieldDef::text("layout", "Layout").hint("QWERTY, TKL"),
    StaticFieldDef::flag("backlit", "Backlit"),
    StaticFieldDef::flag("wireless", "Wireless"),
];

const MOUSE: &[StaticFieldDef] = &[
    StaticFieldDef::number("dpi", "DPI"),
    StaticFieldDef::text("sensor_type", "Sensor Type").hint("Optical, Laser"),
    StaticFieldDef::flag("wireless", "Wireless"),
    StaticFieldDef::number("buttons", "Buttons"),
];

const HEADSET: &[StaticFieldDef] = &[
    StaticFieldDef::number("driver_size", "Driver Size").unit("mm"),
    StaticFieldDef::number("impedance", "Impedance").unit("ohms"),
    StaticFieldDef::text("frequency_response", "Frequency Response"),
    StaticFieldDef::flag("wireless", "Wireless"),
    StaticFieldDef::flag("noise_cancellation", "Noise Cancellation"),
];

const ADDITIONAL_CASE_FANS: &[StaticFieldDef] = &[
    StaticFieldDef::number("size_mm", "Size").unit("mm"),
    StaticFieldDef::number("speed_rpm", "Speed").unit("RPM"),
    StaticFieldDef::number("noise_level", "Noise Level").unit("dBA"),
    StaticFieldDef::number("airflow_cfm", "Airflow").unit("CFM"),
];

/// Static catalog for a component type
pub fn static_fields(component_type: ComponentType) -> &'static [StaticFieldDef] {
    match component_type {
        ComponentType::Processor => PROCESSOR,
        ComponentType::GraphicsCard => GRAPHICS_CARD,
        ComponentType::Motherboard => MOTHERBOARD,
        ComponentType::Ram => RAM,
        ComponentType::PowerSupply => POWER_SUPPLY,
        ComponentType::Ssd => SSD,
        ComponentType::Hdd => HDD,
        ComponentType::CpuCooler => CPU_COOLER,
        ComponentType::Cabinet => CABINET,
        ComponentType::Monitor => MONITOR,
        ComponentType::Keyboard => KEYBOARD,
        ComponentType::Mouse => MOUSE,
        ComponentType::Headset => HEADSET,
        ComponentType::AdditionalCaseFans => ADDITIONAL_CASE_FANS,
    }
}

/// Whether `key` belongs to the static catalog of `component_type`
pub fn is_static_key(component_type: ComponentType, key: &str) -> bool {
    static_fields(component_type).iter().any(|f| f.key == key)
}
