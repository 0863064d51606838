/// Raw input events feeding the wizard, one per stdin line.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Enter(usize),
    Leave,
    Click(usize),
    Toggle(String),
    Confirm,
    Back,
    Resize(f64, f64),
    FontsReady,
    Show,
    Quit,
}
