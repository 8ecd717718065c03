use dotenv::var;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Backlight color as `#rrggbb`.
    pub color: String,
    /// Text written on the first row.
    pub greeting: String,
    /// Number written on the second row.
    pub number: i64,
    /// Whether to scroll the display and blink the cursor.
    pub animate: bool,
}

impl DemoConfig {
    pub fn path() -> PathBuf {
        PathBuf::from(var("CONFIG_FILE").unwrap_or_else(|_| "demo.json".to_string()))
    }

    pub fn try_load() -> Option<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let file = std::fs::File::open(path).ok()?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).ok()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            color: "#e62828".to_string(),
            greeting: "Hello, LCD!".to_string(),
            number: -42,
            animate: true,
        }
    }
}
