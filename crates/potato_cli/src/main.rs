//! CLI smoke entry point.
//!
//! Prints core linkage info and, when `POTATO_DB_PATH` is set, the users
//! stored in that database.

use log::info;
use potato_core::{
    core_version, init_logging, open_db, ping, CoreConfig, SqliteUserRepository, UserService,
};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("potato_core ping={}", ping());
    println!("potato_core version={}", core_version());

    let config = CoreConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging init failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    let Some(db_path) = &config.db_path else {
        return ExitCode::SUCCESS;
    };

    match list_users(db_path, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn list_users(db_path: &Path, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(db_path)?;
    let service = UserService::new(SqliteUserRepository::try_new(&conn)?);

    let users = service.find_all()?;
    info!("event=cli_list_users module=cli status=ok rows={}", users.len());
    writeln!(out, "users={}", users.len())?;
    for user in &users {
        writeln!(out, "user id={} name={}", user.id, user.name)?;
    }

    match service.featured_user()? {
        Some(user) => writeln!(out, "featured={}", user.name)?,
        None => writeln!(out, "featured=none")?,
    }
    Ok(())
}
