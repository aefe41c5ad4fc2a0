//! Action Script Fixtures

use serde::Deserialize;

use crate::{
    actions::{Action, ActionRecord},
    fixtures::FixtureError,
};

/// Wrapper for action scripts in YAML
#[derive(Debug, Deserialize)]
pub struct ActionsFixture {
    /// Tagged actions, in dispatch order
    pub actions: Vec<ActionRecord>,
}

/// Parse an actions YAML document
///
/// # Errors
///
/// Returns an error if the YAML is invalid or any record is not a valid action. The
/// index of the first bad record is reported.
pub fn parse_actions(contents: &str) -> Result<Vec<Action>, FixtureError> {
    let fixture: ActionsFixture = serde_norway::from_str(contents)?;

    fixture
        .actions
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Action::try_from(record).map_err(|source| FixtureError::Action { index, source })
        })
        .collect()
}
