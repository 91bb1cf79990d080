use serde::Serialize;
use vibesip_catalog::Catalog;

use super::{OutputFormat, to_json};
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub cocktails: usize,
    pub vibes: usize,
    pub occasions: usize,
    pub problems: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => to_json(self),
            OutputFormat::Text if self.is_ok() => Ok(format!(
                "Catalog OK: {} cocktails, {} vibes, {} occasions",
                self.cocktails, self.vibes, self.occasions
            )),
            OutputFormat::Text => {
                let mut lines = vec![format!("{} problem(s) found:", self.problems.len())];
                lines.extend(self.problems.iter().map(|problem| format!("  {}", problem)));
                Ok(lines.join("\n"))
            }
        }
    }
}

pub fn check(catalog: &Catalog) -> CheckReport {
    let problems = catalog.problems();
    for problem in &problems {
        tracing::warn!(problem = %problem, "Catalog problem");
    }

    CheckReport {
        cocktails: catalog.cocktails.len(),
        vibes: catalog.vibes.len(),
        occasions: catalog.occasions.len(),
        problems,
    }
}
