use super::geometry::{Point, Side};
use super::grid::{GridSelector, ToggleOutcome};
use super::layout::{self, LayoutBox, Viewport};
use super::panel::{self, ControlBounds, PanelPlacement};
use super::radial::{HoverTip, RadialSelector};
use super::session::{Advance, DotState, Recorded, StepBody, WizardSession};
use super::view;
use super::{FOOTER_H, PANEL_NATURAL_HEIGHT, PANEL_NATURAL_WIDTH, SAFE_TOP};
use crate::events::AppEvent;
use async_channel::Receiver;
use encore::codec::{self, InstrumentName, MAX_INSTRUMENTS, Selection};
use std::collections::BTreeMap;

/// The panel currently on screen. Holding at most one structurally enforces
/// the one-visible-panel rule; pointer-leave clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub tip: HoverTip,
    pub placement: PanelPlacement,
}

enum ActiveControl {
    Wheel(RadialSelector),
    Grid(GridSelector),
}

/// What one input event amounted to; the run loop narrates it.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    None,
    Redraw,
    PanelShown,
    PanelHidden,
    LimitCue,
    Scene(String),
    Finished(String),
}

pub struct App {
    session: WizardSession,
    control: ActiveControl,
    viewport: Viewport,
    panel: Option<PanelView>,
}

impl App {
    pub fn new(session: WizardSession, viewport: Viewport) -> Self {
        let control = Self::build_control(&session);
        Self {
            session,
            control,
            viewport,
            panel: None,
        }
    }

    /// A fresh control for the current step, restoring its recorded
    /// selection. The previous control is dropped wholesale, footprint and
    /// transient state included.
    fn build_control(session: &WizardSession) -> ActiveControl {
        let step = session.current();
        match &step.body {
            StepBody::Wheel(options) => {
                let selected = match session.recorded(&step.id) {
                    Some(Recorded::One(value)) => Some(value.clone()),
                    _ => None,
                };
                let selector = RadialSelector::new(options.clone(), selected)
                    .expect("step options are validated non-empty");
                ActiveControl::Wheel(selector)
            }
            StepBody::Grid { choices, accents } => {
                let previous = match session.recorded(&step.id) {
                    Some(Recorded::Many(names)) => names.clone(),
                    _ => Vec::new(),
                };
                ActiveControl::Grid(GridSelector::new(
                    choices.clone(),
                    accents.clone(),
                    &previous,
                ))
            }
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn panel(&self) -> Option<&PanelView> {
        self.panel.as_ref()
    }

    pub fn handle(&mut self, event: AppEvent) -> Feedback {
        match event {
            AppEvent::Enter(index) => self.enter(index),
            AppEvent::Leave => self.leave(),
            AppEvent::Click(index) => self.click(index),
            AppEvent::Toggle(name) => self.toggle(&name),
            AppEvent::Confirm => self.confirm(),
            AppEvent::Back => self.go_back(),
            AppEvent::Resize(width, height) => self.resize(width, height),
            AppEvent::FontsReady => Feedback::Redraw,
            AppEvent::Show => Feedback::Scene(self.scene_svg()),
            AppEvent::Quit => Feedback::None,
        }
    }

    fn enter(&mut self, index: usize) -> Feedback {
        let tip = match &mut self.control {
            ActiveControl::Wheel(wheel) => wheel.pointer_enter(index),
            ActiveControl::Grid(grid) => {
                return if grid.pointer_enter(index) {
                    Feedback::Redraw
                } else {
                    Feedback::None
                };
            }
        };

        match tip {
            Some(tip) => {
                let placement = self.place_panel(tip.side);
                self.panel = Some(PanelView { tip, placement });
                Feedback::PanelShown
            }
            None => Feedback::None,
        }
    }

    fn leave(&mut self) -> Feedback {
        match &mut self.control {
            ActiveControl::Wheel(wheel) => wheel.pointer_leave(),
            ActiveControl::Grid(grid) => grid.pointer_leave(),
        }
        if self.panel.take().is_some() {
            Feedback::PanelHidden
        } else {
            Feedback::None
        }
    }

    fn click(&mut self, index: usize) -> Feedback {
        let value = match &mut self.control {
            ActiveControl::Wheel(wheel) => wheel.activate(index),
            ActiveControl::Grid(_) => None,
        };
        match value {
            Some(value) => self.advance(Recorded::One(value)),
            None => Feedback::None,
        }
    }

    fn toggle(&mut self, name: &str) -> Feedback {
        match &mut self.control {
            ActiveControl::Grid(grid) => match grid.toggle(name) {
                ToggleOutcome::Added | ToggleOutcome::Removed => Feedback::Redraw,
                ToggleOutcome::LimitReached => Feedback::LimitCue,
                ToggleOutcome::NotAChoice => {
                    log::warn!("'{name}' is not offered on this step");
                    Feedback::None
                }
            },
            ActiveControl::Wheel(_) => Feedback::None,
        }
    }

    fn confirm(&mut self) -> Feedback {
        let chosen = match &self.control {
            ActiveControl::Grid(grid) => grid.confirm(),
            ActiveControl::Wheel(_) => return Feedback::None,
        };
        self.advance(Recorded::Many(chosen))
    }

    fn advance(&mut self, choice: Recorded) -> Feedback {
        match self.session.advance(choice) {
            Advance::Completed(snapshot) => {
                Feedback::Finished(codec::handoff_path(&to_selection(&snapshot)))
            }
            Advance::Next => {
                self.rebuild();
                Feedback::Redraw
            }
        }
    }

    fn go_back(&mut self) -> Feedback {
        if self.session.back() {
            self.rebuild();
            Feedback::Redraw
        } else {
            Feedback::None
        }
    }

    fn resize(&mut self, width: f64, height: f64) -> Feedback {
        self.viewport = Viewport::new(width, height);
        // sizes are derived per scene, but a shown panel tracks the control
        if let Some(panel) = &mut self.panel {
            panel.placement = place_panel_for(panel.tip.side, self.viewport);
        }
        Feedback::Redraw
    }

    fn rebuild(&mut self) {
        self.control = Self::build_control(&self.session);
        self.panel = None;
    }

    fn place_panel(&self, side: Side) -> PanelPlacement {
        place_panel_for(side, self.viewport)
    }

    /// The current step's visual tree as a standalone SVG document.
    pub fn scene_svg(&self) -> String {
        match &self.control {
            ActiveControl::Wheel(wheel) => {
                let size = layout::radial_size(self.viewport, SAFE_TOP, FOOTER_H);
                view::wheel_svg(&wheel.scene(size))
            }
            ActiveControl::Grid(grid) => view::grid_svg(&grid.scene(self.viewport)),
        }
    }
}

/// The wheel sits horizontally centred under the page header, so its
/// bounding box follows from the viewport alone.
fn place_panel_for(side: Side, viewport: Viewport) -> PanelPlacement {
    let size = layout::radial_size(viewport, SAFE_TOP, FOOTER_H);
    let control = ControlBounds {
        center: Point::new(viewport.width() / 2.0, SAFE_TOP + size / 2.0),
        half_width: size / 2.0,
    };
    let natural = LayoutBox {
        width: PANEL_NATURAL_WIDTH,
        height: PANEL_NATURAL_HEIGHT,
    };
    panel::place_panel(side, control, natural, viewport)
}

fn to_selection(snapshot: &BTreeMap<String, Recorded>) -> Selection {
    let mut selection = Selection::default();
    for (id, entry) in snapshot {
        match (id.as_str(), entry) {
            ("place", Recorded::One(value)) => selection.place = value.clone(),
            ("mood", Recorded::One(value)) => selection.mood = value.clone(),
            ("flow", Recorded::One(value)) => selection.flow = value.clone(),
            ("extras", Recorded::One(value)) => selection.extras = value.clone(),
            ("instruments", Recorded::Many(names)) => {
                selection.instruments = names
                    .iter()
                    .take(MAX_INSTRUMENTS)
                    .map(InstrumentName::new)
                    .collect();
            }
            _ => log::warn!("no handoff slot for step '{id}'"),
        }
    }
    selection
}

/// Drains the event channel into the wizard until it finishes or the input
/// side goes away.
pub fn run(mut app: App, rx: &Receiver<AppEvent>) -> anyhow::Result<()> {
    banner(&app);
    while let Ok(event) = rx.recv_blocking() {
        if matches!(event, AppEvent::Quit) {
            break;
        }
        match app.handle(event) {
            Feedback::None => {}
            Feedback::Redraw => banner(&app),
            Feedback::PanelShown => {
                if let Some(panel) = app.panel() {
                    narrate_panel(panel);
                }
            }
            Feedback::PanelHidden => println!("(panels hidden)"),
            Feedback::LimitCue => println!("악기는 최대 {MAX_INSTRUMENTS}개까지 고를 수 있어요."),
            Feedback::Scene(svg) => println!("{svg}"),
            Feedback::Finished(path) => {
                println!("{path}");
                break;
            }
        }
    }
    Ok(())
}

fn banner(app: &App) {
    let step = app.session().current();
    let dots: String = app
        .session()
        .progress()
        .iter()
        .map(|dot| match dot {
            DotState::Done => '●',
            DotState::Active => '◉',
            DotState::Upcoming => '○',
        })
        .collect();

    println!();
    println!("[{dots}] {}", step.title);
    if !step.hint.is_empty() {
        println!("    {}", step.hint);
    }
    match &step.body {
        StepBody::Wheel(options) => {
            for (i, option) in options.iter().enumerate() {
                println!("  {i}: {} ({})", option.label, option.value);
            }
        }
        StepBody::Grid { choices, .. } => {
            for name in choices {
                println!("  - {name}");
            }
        }
    }
}

fn narrate_panel(panel: &PanelView) {
    let side = match panel.tip.side {
        Side::Left => "left",
        Side::Right => "right",
    };
    println!(
        "▸ [{side} @ {:.0},{:.0}] {} — {}",
        panel.placement.x, panel.placement.y, panel.tip.title, panel.tip.desc
    );
}
