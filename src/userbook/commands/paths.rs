use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_paths(vec![store.location()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs_backend::FsBackend;

    #[test]
    fn reports_backing_file() {
        let store = RecordStore::new(FsBackend::new("/tmp/somewhere/usuarios.json"));
        let result = run(&store).unwrap();
        assert_eq!(
            result.paths,
            vec![std::path::PathBuf::from("/tmp/somewhere/usuarios.json")]
        );
    }
}
