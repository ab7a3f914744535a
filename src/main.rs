slint::include_modules!();

mod ui;

use clap::Parser;
use log::{error, info};
use slint_image_culler::config::Config;
use slint_image_culler::image_loader::RgbaDecoder;
use slint_image_culler::startup;
use slint_image_culler::state::AppState;
use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

/// Page through every image in a folder and link the keepers into `chosen/`.
#[derive(Parser, Debug)]
#[command(name = "slint-image-culler")]
#[command(about = "Bulk-load a folder of images and sort them into chosen/")]
struct Args {
    /// Directory containing the images
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Number of decode threads (defaults to one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run_window(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = AppWindow::new()?;
    let state = Rc::new(RefCell::new(state));

    // Setup all UI event handlers
    ui::setup_handlers(&app, state.clone());
    ui::display_current(&app, &state.borrow());

    app.run()?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = Config::new(args.directory).with_threads(args.threads);
    let state = match startup::bootstrap(&config, &RgbaDecoder, |done, total| {
        info!("Processed {}/{}...", done, total);
    }) {
        Ok(state) => state,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_window(state) {
        error!("Window error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
