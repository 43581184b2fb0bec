//! Application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting floating-label session");

    let result = floatlabel_app::SessionConfig::from_args(std::env::args().skip(1))
        .and_then(|config| floatlabel_app::run_session(&config, &floatlabel_app::default_script()));

    match result {
        Ok(report) => log::info!(
            "Session finished after {} frames in {:?}",
            report.frames.len(),
            report.final_state()
        ),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
