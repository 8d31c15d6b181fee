use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::ensure_exists;

pub fn run<S: CatalogStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    ensure_exists(store, title)?;
    store.delete(title)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Movie \"{}\" deleted", title)));
    Ok(result)
}
