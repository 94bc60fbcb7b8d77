use std::env;
use std::error::Error;
use std::io;

use log::info;

use sparsemat::session::{Run, Session};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut params = Session::params();
    if let Ok(dir) = env::var("SPARSEMAT_INPUT_DIR") {
        params = params.input_dir(dir);
    }
    if let Ok(path) = env::var("SPARSEMAT_OUTPUT") {
        params = params.output_path(path);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = params.run(stdin.lock(), stdout.lock())?;
    info!(
        "{} operations completed, {} failed",
        summary.completed, summary.failed
    );
    Ok(())
}
