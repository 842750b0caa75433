//! Run command implementation.

use crate::app::api::{self, RunOptions};
use crate::domain::AppError;

pub fn run_app(app_dir: String, db_url: Option<String>) -> Result<i32, AppError> {
    api::run(RunOptions { app_dir, db_url })
}
