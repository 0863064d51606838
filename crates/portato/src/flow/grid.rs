use super::layout::{self, Viewport};
use super::view::{CellScene, GridScene};
use encore::codec::MAX_INSTRUMENTS;
use encore::color::HexColor;
use std::collections::HashMap;

/// Outcome of one toggle attempt. The limit case is a transient cue for the
/// renderer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    LimitReached,
    NotAChoice,
}

/// Bounded multi-selection state for the grid step. Insertion order is
/// preserved through to confirmation; membership never leaves the declared
/// choice list and never exceeds [`MAX_INSTRUMENTS`].
#[derive(Debug, Clone)]
pub struct GridSelector {
    choices: Vec<String>,
    accents: HashMap<String, HexColor>,
    chosen: Vec<String>,
    hovered: Option<usize>,
}

impl GridSelector {
    pub fn new(
        choices: Vec<String>,
        accents: HashMap<String, HexColor>,
        previous: &[String],
    ) -> Self {
        let mut chosen: Vec<String> = Vec::new();
        for name in previous {
            if choices.contains(name) && !chosen.contains(name) && chosen.len() < MAX_INSTRUMENTS
            {
                chosen.push(name.clone());
            }
        }
        Self {
            choices,
            accents,
            chosen,
            hovered: None,
        }
    }

    pub fn chosen(&self) -> &[String] {
        &self.chosen
    }

    pub fn toggle(&mut self, name: &str) -> ToggleOutcome {
        if !self.choices.iter().any(|choice| choice == name) {
            return ToggleOutcome::NotAChoice;
        }
        if let Some(position) = self.chosen.iter().position(|chosen| chosen == name) {
            self.chosen.remove(position);
            return ToggleOutcome::Removed;
        }
        if self.chosen.len() >= MAX_INSTRUMENTS {
            return ToggleOutcome::LimitReached;
        }
        self.chosen.push(name.to_string());
        ToggleOutcome::Added
    }

    /// Snapshot in insertion order; an empty confirmation is valid.
    pub fn confirm(&self) -> Vec<String> {
        self.chosen.clone()
    }

    pub fn pointer_enter(&mut self, index: usize) -> bool {
        if index >= self.choices.len() {
            return false;
        }
        self.hovered = Some(index);
        true
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Builds the grid's visual tree for the current viewport.
    pub fn scene(&self, viewport: Viewport) -> GridScene {
        GridScene {
            width: layout::grid_width(viewport),
            columns: layout::grid_columns(viewport),
            cells: self
                .choices
                .iter()
                .enumerate()
                .map(|(i, name)| CellScene {
                    name: name.clone(),
                    accent: self.accents.get(name).copied(),
                    selected: self.chosen.contains(name),
                    hovered: self.hovered == Some(i),
                })
                .collect(),
        }
    }
}
