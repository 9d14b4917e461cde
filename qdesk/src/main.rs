use clap::Parser;
use qdesk::app::QdeskApp;

fn main() {
    env_logger::init();
    let args = QdeskApp::parse();
    match args.op.run(args.config.as_ref()) {
        Ok(_) => log::debug!("finished."),
        Err(e) => {
            log::error!("failed running qdesk: {e}");
            std::process::exit(1);
        }
    }
}
