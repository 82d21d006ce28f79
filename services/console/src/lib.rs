mod cli;
mod menu;
mod prompt;
mod session;

use bakery_inventory::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
