//! Branch and unit choices offered by the forms.

use super::validation::ValidationError;

/// Label of the free-text escape hatch in the unit picker.
pub const OTHER_UNIT: &str = "Other";

/// Selectable branches and units.
///
/// The store accepts any branch or unit text; the catalog only shapes what
/// the forms offer and which branch labels they accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    branches: Vec<String>,
    units: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn new(branches: Vec<String>, units: Vec<String>) -> Self {
        Self { branches, units }
    }

    #[must_use]
    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Units followed by [`OTHER_UNIT`], in picker order.
    #[must_use]
    pub fn unit_choices(&self) -> Vec<String> {
        let mut choices = self.units.clone();
        if !choices.iter().any(|unit| unit == OTHER_UNIT) {
            choices.push(OTHER_UNIT.to_string());
        }
        choices
    }

    /// Resolve a branch label case-insensitively to its catalog spelling.
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownBranch`] when the label is not listed.
    pub fn resolve_branch(&self, branch: &str) -> Result<String, ValidationError> {
        let wanted = branch.trim();
        self.branches
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| ValidationError::UnknownBranch {
                branch: wanted.to_string(),
                allowed: self.branches.join(", "),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            branches: ["Main", "Masif", "Downtown", "Other"]
                .into_iter()
                .map(String::from)
                .collect(),
            units: ["kg", "litre", "piece"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
