use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub url: String,
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.exists { "" } else { " (not created, using defaults)" };
        writeln!(f, "config:  {}{}", self.path, state)?;
        writeln!(f, "url:     {}", self.url)?;
        writeln!(f, "timeout: {}s", self.timeout_secs)?;
        if let Some(file) = &self.file {
            writeln!(f, "file:    {} (overrides url)", file)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub written: bool,
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.path)
    }
}
