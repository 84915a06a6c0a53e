use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Item {
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    name: Option<String>,
    // className duplicates the map key; keep optional for completeness
    #[serde(default, rename = "className")]
    class_name: Option<String>,
}

#[allow(unused)]
impl Item {
    /// Icon identifier used to derive both the remote asset filename and the
    /// local cache filename. An empty string counts as missing.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|s| !s.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[allow(dead_code)]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }
}
