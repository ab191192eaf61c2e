use std::path::Path;

use colored::Colorize;
use uuid::Uuid;
use yj_reading::ReadingStore;

use super::{open_store, parse_user};

pub async fn run(data_dir: &Path, id: &str, user: Option<&str>) -> Result<(), String> {
    let id = Uuid::parse_str(id).map_err(|e| format!("invalid reading id \"{id}\": {e}"))?;
    let user = parse_user(user)?;
    let store = open_store(data_dir);
    store
        .delete(user.as_ref(), id)
        .await
        .map_err(|e| e.to_string())?;

    println!("  {} {id}", "Deleted".green().bold());
    Ok(())
}
