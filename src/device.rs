#[cfg(feature = "a6xx-serde")]
use serde::{Deserialize, Serialize};

/// Per-chip knobs that change capability answers.
///
/// Everything else about the a6xx family is fixed by the format table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub struct DeviceInfo {
    pub name: String,
    pub chip_id: u32,
    /// UBWC can compress single-channel 8-bit surfaces.
    #[cfg_attr(feature = "a6xx-serde", serde(default = "default_true"))]
    pub has_8bpp_ubwc: bool,
    /// The texture unit has FMT6_Z24_UINT_S8_UINT.
    #[cfg_attr(feature = "a6xx-serde", serde(default))]
    pub has_z24uint_s8uint: bool,
    /// VK_EXT_filter_cubic is exposed.
    #[cfg_attr(feature = "a6xx-serde", serde(default))]
    pub ext_filter_cubic: bool,
}

#[cfg(feature = "a6xx-serde")]
fn default_true() -> bool {
    true
}

impl DeviceInfo {
    pub fn a618() -> Self {
        Self {
            name: "FD618".to_string(),
            chip_id: 618,
            has_8bpp_ubwc: true,
            has_z24uint_s8uint: false,
            ext_filter_cubic: false,
        }
    }

    pub fn a630() -> Self {
        Self {
            name: "FD630".to_string(),
            chip_id: 630,
            has_8bpp_ubwc: true,
            has_z24uint_s8uint: false,
            ext_filter_cubic: false,
        }
    }

    pub fn a650() -> Self {
        Self {
            name: "FD650".to_string(),
            chip_id: 650,
            has_8bpp_ubwc: true,
            has_z24uint_s8uint: true,
            ext_filter_cubic: true,
        }
    }

    pub fn a660() -> Self {
        Self {
            name: "FD660".to_string(),
            chip_id: 660,
            has_8bpp_ubwc: true,
            has_z24uint_s8uint: true,
            ext_filter_cubic: true,
        }
    }

    /// Looks up a preset by name, accepting `a630`, `630` or `FD630`.
    pub fn preset(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("fd")
            .or_else(|| lower.strip_prefix('a'))
            .unwrap_or(&lower);
        match digits {
            "618" => Some(Self::a618()),
            "630" => Some(Self::a630()),
            "650" => Some(Self::a650()),
            "660" => Some(Self::a660()),
            _ => None,
        }
    }

    /// Builds the device from `A6XX_CAPS_CHIP` and `A6XX_CAPS_FILTER_CUBIC`.
    ///
    /// Unknown chip names fall back to the default preset.
    pub fn from_env() -> Self {
        let mut info = std::env::var("A6XX_CAPS_CHIP")
            .ok()
            .and_then(|chip| {
                let preset = Self::preset(&chip);
                if preset.is_none() {
                    log::warn!("A6XX_CAPS_CHIP={} is not a known chip, using defaults", chip);
                }
                preset
            })
            .unwrap_or_default();

        if let Ok(v) = std::env::var("A6XX_CAPS_FILTER_CUBIC") {
            info.ext_filter_cubic = v == "1";
        }
        info
    }

    pub fn with_filter_cubic(mut self, enable: bool) -> Self {
        self.ext_filter_cubic = enable;
        self
    }

    pub fn with_8bpp_ubwc(mut self, enable: bool) -> Self {
        self.has_8bpp_ubwc = enable;
        self
    }

    pub fn with_z24uint_s8uint(mut self, enable: bool) -> Self {
        self.has_z24uint_s8uint = enable;
        self
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::a630()
    }
}

impl std::fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Name {} -- Chip {}]", self.name, self.chip_id)
    }
}

#[cfg(feature = "a6xx-serde")]
impl DeviceInfo {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn from_yaml(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_accepts_common_spellings() {
        assert_eq!(DeviceInfo::preset("a650"), Some(DeviceInfo::a650()));
        assert_eq!(DeviceInfo::preset("FD618"), Some(DeviceInfo::a618()));
        assert_eq!(DeviceInfo::preset(" 660 "), Some(DeviceInfo::a660()));
        assert_eq!(DeviceInfo::preset("a7xx"), None);
    }

    fn restore_var(key: &str, value: Option<String>) {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }

    // the only test that touches these variables
    #[test]
    fn env_selects_chip_and_cubic_filter() {
        let original_chip = std::env::var("A6XX_CAPS_CHIP").ok();
        let original_cubic = std::env::var("A6XX_CAPS_FILTER_CUBIC").ok();

        std::env::remove_var("A6XX_CAPS_CHIP");
        std::env::remove_var("A6XX_CAPS_FILTER_CUBIC");
        let unset = DeviceInfo::from_env();

        std::env::set_var("A6XX_CAPS_CHIP", "a650");
        std::env::set_var("A6XX_CAPS_FILTER_CUBIC", "0");
        let a650 = DeviceInfo::from_env();

        std::env::set_var("A6XX_CAPS_CHIP", "a7xx");
        std::env::set_var("A6XX_CAPS_FILTER_CUBIC", "1");
        let unknown = DeviceInfo::from_env();

        restore_var("A6XX_CAPS_CHIP", original_chip);
        restore_var("A6XX_CAPS_FILTER_CUBIC", original_cubic);

        assert_eq!(unset, DeviceInfo::default());
        assert_eq!(a650, DeviceInfo::a650().with_filter_cubic(false));
        assert_eq!(unknown, DeviceInfo::a630().with_filter_cubic(true));
    }

    #[test]
    fn toggles_override_preset() {
        let info = DeviceInfo::a630().with_filter_cubic(true).with_8bpp_ubwc(false);
        assert!(info.ext_filter_cubic);
        assert!(!info.has_8bpp_ubwc);
        assert_eq!(info.chip_id, 630);
    }

    #[cfg(feature = "a6xx-serde")]
    #[test]
    fn yaml_fills_missing_knobs_with_defaults() {
        let info = DeviceInfo::from_yaml("name: custom\nchip_id: 640\n").unwrap();
        assert_eq!(info.chip_id, 640);
        assert!(info.has_8bpp_ubwc);
        assert!(!info.has_z24uint_s8uint);
        assert!(!info.ext_filter_cubic);
    }

    #[cfg(feature = "a6xx-serde")]
    #[test]
    fn json_round_trips_preset() {
        let json = serde_json::to_string(&DeviceInfo::a650()).unwrap();
        assert_eq!(DeviceInfo::from_json(&json).unwrap(), DeviceInfo::a650());
    }
}
