use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let path = store.path().display().to_string();
    if store.init()? {
        result.add_message(CmdMessage::success(format!("Created empty catalog at {}", path)));
    } else {
        result.add_message(CmdMessage::info(format!("Catalog already exists at {}", path)));
    }
    Ok(result)
}
