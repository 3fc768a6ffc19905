mod cli;
mod rank;

use alien_bounty::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
