use relm4::prelude::*;
use snakespin_demo::config;
use snakespin_demo::gui::app::AppModel;
use snakespin_demo::sys::runtime;

fn main() {
    env_logger::init();

    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.snakespin.demo");

    app.run::<AppModel>((config.indicator, rx));
}
