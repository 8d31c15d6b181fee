use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::ensure_exists;

pub fn run<S: CatalogStore>(store: &mut S, title: &str, notes: &str) -> Result<CmdResult> {
    ensure_exists(store, title)?;
    store.update(title, notes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Movie \"{}\" updated", title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MovieDbError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn sets_notes() {
        let mut store = StoreFixture::classics().build();
        run(&mut store, "Alien", "In space no one can hear you scream").unwrap();
        assert_eq!(
            store.list().unwrap()["Alien"].notes(),
            Some("In space no one can hear you scream")
        );
    }

    #[test]
    fn unknown_title_is_not_found() {
        let mut store = StoreFixture::classics().build();
        assert!(matches!(
            run(&mut store, "Nonexistent", "x"),
            Err(MovieDbError::NotFound(_))
        ));
    }
}
