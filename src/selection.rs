use crate::core::{Algorithm, IntoEnumIterator, Percentage};

pub const PLACEHOLDER: &str = "Choose one";

/// Labels of the percentage dropdown, placeholder first
pub fn percentage_options() -> Vec<String> {
    std::iter::once(PLACEHOLDER.to_string())
        .chain(Percentage::all().map(|p| p.label()))
        .collect()
}

/// Labels of the algorithm dropdown, placeholder first
pub fn algorithm_options() -> Vec<String> {
    std::iter::once(PLACEHOLDER.to_string())
        .chain(Algorithm::iter().map(|a| a.description().to_string()))
        .collect()
}

/// Current state of the three inputs. Both dropdown indices count the
/// placeholder at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub url: String,
    pub percentage_index: usize,
    pub algorithm_index: usize,
}

impl Selection {
    pub fn new(url: impl Into<String>, percentage_index: usize, algorithm_index: usize) -> Self {
        Self {
            url: url.into(),
            percentage_index,
            algorithm_index,
        }
    }

    /// Displayed label of the selected percentage, if any
    pub fn percentage_label(&self) -> Option<String> {
        let position = self.percentage_index.checked_sub(1)?;
        Percentage::all().nth(position).map(|p| p.label())
    }

    /// Dropdown index of a percentage value
    pub fn percentage_index_of(percentage: Percentage) -> usize {
        (percentage.value() / Percentage::STEP) as usize
    }

    pub fn is_ready(&self) -> bool {
        is_ready(&self.url, self.percentage_index, self.algorithm_index)
    }
}

/// True iff all three inputs are meaningfully selected. Gates both the
/// trigger and the submission.
pub fn is_ready(url: &str, percentage_index: usize, algorithm_index: usize) -> bool {
    let percentage_ok = (1..=Percentage::all().count()).contains(&percentage_index);
    let algorithm_ok = Algorithm::from_position(algorithm_index).is_some();
    percentage_ok && algorithm_ok && !url.is_empty()
}
