//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskmatrix_core` linkage end to
//!   end: bootstrap, create, classify, list.
//! - Keep output deterministic for quick local sanity checks.

use taskmatrix_core::db::open_db_in_memory;
use taskmatrix_core::{
    FilterCriteria, Importance, SqliteTaskRepository, TaskDraft, TaskService, Urgency,
};

fn main() {
    println!("taskmatrix_core version={}", taskmatrix_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("database bootstrap failed: {err}");
            std::process::exit(1);
        }
    };
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let draft = TaskDraft {
        title: "Pay rent".to_string(),
        importance: Some(Importance::Important),
        urgency: Some(Urgency::Urgent),
        ..TaskDraft::default()
    };

    match service.create(&draft) {
        Ok(task) => println!("created id={} quadrant={:?}", task.id, task.quadrant()),
        Err(err) => {
            eprintln!("create failed: {err}");
            std::process::exit(1);
        }
    }

    match service.list(&FilterCriteria::default(), None, None) {
        Ok(tasks) => println!("listed count={}", tasks.len()),
        Err(err) => {
            eprintln!("list failed: {err}");
            std::process::exit(1);
        }
    }
}
