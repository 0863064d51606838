use super::radial::RadialOption;
use crate::config::StepConfig;
use encore::color::HexColor;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("the wizard needs at least one step")]
    NoSteps,
    #[error("duplicate step id '{0}'")]
    DuplicateStepId(String),
    #[error("step '{0}' declares both options and choices")]
    BothVariants(String),
    #[error("step '{0}' declares neither options nor choices")]
    NeitherVariant(String),
    #[error("step '{0}' has an empty option list")]
    EmptyOptions(String),
    #[error("step '{0}' has an empty choice list")]
    EmptyChoices(String),
    #[error("step '{0}' repeats option value '{1}'")]
    DuplicateOptionValue(String, String),
    #[error("step '{0}' repeats choice '{1}'")]
    DuplicateChoice(String, String),
}

/// Radial steps record one value; the grid step records an ordered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepBody {
    Wheel(Vec<RadialOption>),
    Grid {
        choices: Vec<String>,
        accents: HashMap<String, HexColor>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepDef {
    pub id: String,
    pub title: String,
    pub hint: String,
    pub body: StepBody,
}

impl StepDef {
    fn from_config(cfg: StepConfig) -> Result<Self, SessionError> {
        let StepConfig {
            id,
            title,
            hint,
            options,
            multiselect: _,
            choices,
            accents,
        } = cfg;

        let body = match (options, choices) {
            (Some(_), Some(_)) => return Err(SessionError::BothVariants(id)),
            (None, None) => return Err(SessionError::NeitherVariant(id)),
            (Some(options), None) => {
                if options.is_empty() {
                    return Err(SessionError::EmptyOptions(id));
                }
                let mut seen = HashSet::new();
                for option in &options {
                    if !seen.insert(option.value.clone()) {
                        return Err(SessionError::DuplicateOptionValue(id, option.value.clone()));
                    }
                }
                StepBody::Wheel(options.into_iter().map(RadialOption::from).collect())
            }
            (None, Some(choices)) => {
                if choices.is_empty() {
                    return Err(SessionError::EmptyChoices(id));
                }
                let mut seen = HashSet::new();
                for name in &choices {
                    if !seen.insert(name.clone()) {
                        return Err(SessionError::DuplicateChoice(id, name.clone()));
                    }
                }
                StepBody::Grid { choices, accents }
            }
        };

        Ok(Self {
            id,
            title,
            hint,
            body,
        })
    }
}

/// What [`WizardSession::advance`] did with the cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Next,
    Completed(BTreeMap<String, Recorded>),
}

/// Per-step progress marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Done,
    Active,
    Upcoming,
}

/// Ordered steps, the cursor, and everything recorded so far. One session
/// per flow; it is dropped once the completion snapshot is handed off.
#[derive(Debug, Clone)]
pub struct WizardSession {
    steps: Vec<StepDef>,
    index: usize,
    selections: BTreeMap<String, Recorded>,
    completed: bool,
}

impl WizardSession {
    /// Validates the whole step list before the first render.
    pub fn new(configs: Vec<StepConfig>) -> Result<Self, SessionError> {
        if configs.is_empty() {
            return Err(SessionError::NoSteps);
        }

        let mut ids = HashSet::new();
        let mut steps = Vec::with_capacity(configs.len());
        for cfg in configs {
            if !ids.insert(cfg.id.clone()) {
                return Err(SessionError::DuplicateStepId(cfg.id));
            }
            steps.push(StepDef::from_config(cfg)?);
        }

        Ok(Self {
            steps,
            index: 0,
            selections: BTreeMap::new(),
            completed: false,
        })
    }

    pub fn current(&self) -> &StepDef {
        &self.steps[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn recorded(&self, id: &str) -> Option<&Recorded> {
        self.selections.get(id)
    }

    /// Records the active step's choice and moves the cursor one step
    /// forward; the last step completes the wizard and yields the full
    /// snapshot instead.
    pub fn advance(&mut self, choice: Recorded) -> Advance {
        let id = self.current().id.clone();
        self.selections.insert(id, choice);

        if self.index + 1 == self.steps.len() {
            self.completed = true;
            log::info!("wizard completed");
            Advance::Completed(self.selections.clone())
        } else {
            self.index += 1;
            log::info!("advanced to step {} '{}'", self.index, self.current().id);
            Advance::Next
        }
    }

    /// Steps back one step, a no-op on the first. The step re-entered keeps
    /// its previously recorded selection.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        log::info!("returned to step {} '{}'", self.index, self.current().id);
        true
    }

    pub fn progress(&self) -> Vec<DotState> {
        (0..self.steps.len())
            .map(|i| match i.cmp(&self.index) {
                Ordering::Less => DotState::Done,
                Ordering::Equal => DotState::Active,
                Ordering::Greater => DotState::Upcoming,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OptionConfig, builtin_steps};

    fn wheel_step(id: &str, values: &[&str]) -> StepConfig {
        StepConfig {
            id: id.to_string(),
            title: format!("{id}?"),
            hint: String::new(),
            options: Some(
                values
                    .iter()
                    .map(|value| OptionConfig {
                        value: value.to_string(),
                        label: value.to_uppercase(),
                        color: "#CDE2A5".parse().unwrap(),
                        desc: String::new(),
                    })
                    .collect(),
            ),
            multiselect: false,
            choices: None,
            accents: HashMap::new(),
        }
    }

    fn grid_step(id: &str, choices: &[&str]) -> StepConfig {
        StepConfig {
            id: id.to_string(),
            title: format!("{id}?"),
            hint: String::new(),
            options: None,
            multiselect: true,
            choices: Some(choices.iter().map(|c| c.to_string()).collect()),
            accents: HashMap::new(),
        }
    }

    #[test]
    fn test_construction_rejects_invalid_step_lists() {
        assert!(matches!(
            WizardSession::new(Vec::new()),
            Err(SessionError::NoSteps)
        ));

        assert!(matches!(
            WizardSession::new(vec![wheel_step("a", &["x"]), wheel_step("a", &["y"])]),
            Err(SessionError::DuplicateStepId(_))
        ));

        assert!(matches!(
            WizardSession::new(vec![wheel_step("a", &[])]),
            Err(SessionError::EmptyOptions(_))
        ));

        assert!(matches!(
            WizardSession::new(vec![wheel_step("a", &["x", "x"])]),
            Err(SessionError::DuplicateOptionValue(_, _))
        ));

        assert!(matches!(
            WizardSession::new(vec![grid_step("g", &[])]),
            Err(SessionError::EmptyChoices(_))
        ));

        assert!(matches!(
            WizardSession::new(vec![grid_step("g", &["x", "x"])]),
            Err(SessionError::DuplicateChoice(_, _))
        ));

        let mut both = wheel_step("b", &["x"]);
        both.choices = Some(vec!["y".to_string()]);
        assert!(matches!(
            WizardSession::new(vec![both]),
            Err(SessionError::BothVariants(_))
        ));

        let mut neither = wheel_step("n", &["x"]);
        neither.options = None;
        assert!(matches!(
            WizardSession::new(vec![neither]),
            Err(SessionError::NeitherVariant(_))
        ));
    }

    #[test]
    fn test_builtin_steps_validate() {
        let session = WizardSession::new(builtin_steps().steps).unwrap();
        assert_eq!(session.len(), 5);
        assert_eq!(session.current().id, "place");
    }

    #[test]
    fn test_advance_walks_every_step_then_completes() {
        let mut session = WizardSession::new(vec![
            wheel_step("place", &["field", "forest"]),
            wheel_step("mood", &["classical", "romantic"]),
            grid_step("instruments", &["바이올린", "첼로"]),
        ])
        .unwrap();

        assert_eq!(session.advance(Recorded::One("forest".into())), Advance::Next);
        assert_eq!(session.index(), 1);
        assert_eq!(
            session.advance(Recorded::One("romantic".into())),
            Advance::Next
        );

        let last = session.advance(Recorded::Many(vec!["첼로".into()]));
        let Advance::Completed(snapshot) = last else {
            panic!("expected completion");
        };
        assert!(session.is_completed());
        assert_eq!(
            snapshot.get("place"),
            Some(&Recorded::One("forest".to_string()))
        );
        assert_eq!(
            snapshot.get("instruments"),
            Some(&Recorded::Many(vec!["첼로".to_string()]))
        );
    }

    #[test]
    fn test_back_is_a_noop_on_the_first_step() {
        let mut session = WizardSession::new(vec![wheel_step("only", &["x"])]).unwrap();
        assert!(!session.back());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_back_keeps_the_recorded_selection() {
        let mut session = WizardSession::new(vec![
            wheel_step("place", &["field", "forest"]),
            wheel_step("mood", &["classical"]),
        ])
        .unwrap();

        session.advance(Recorded::One("field".into()));
        assert!(session.back());
        assert_eq!(session.current().id, "place");
        assert_eq!(
            session.recorded("place"),
            Some(&Recorded::One("field".to_string()))
        );

        // going forward again overwrites the record
        session.advance(Recorded::One("forest".into()));
        assert_eq!(
            session.recorded("place"),
            Some(&Recorded::One("forest".to_string()))
        );
    }

    #[test]
    fn test_progress_dots() {
        let mut session = WizardSession::new(vec![
            wheel_step("a", &["x"]),
            wheel_step("b", &["x"]),
            wheel_step("c", &["x"]),
        ])
        .unwrap();

        session.advance(Recorded::One("x".into()));
        assert_eq!(
            session.progress(),
            vec![DotState::Done, DotState::Active, DotState::Upcoming]
        );
    }
}
