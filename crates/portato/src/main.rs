use portato::config;
use portato::flow::app::{self, App};
use portato::flow::layout::Viewport;
use portato::flow::session::WizardSession;
use portato::sys::runtime;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_default();
    let session = WizardSession::new(config.steps)?;
    let wizard = App::new(session, Viewport::new(1280.0, 800.0));

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx);

    app::run(wizard, &rx)
}
