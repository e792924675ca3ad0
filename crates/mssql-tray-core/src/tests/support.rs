//! Shared helpers for core tests.

use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicU32, Ordering},
};

static SCRIPT_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A throwaway executable shell script, removed on drop.
pub(crate) struct TempScript {
    pub(crate) path: PathBuf,
}

impl TempScript {
    /// Write `body` as a `#!/bin/sh` script into the temp dir and mark it
    /// executable. `$0.out` is available to the body as a scratch file.
    #[cfg(unix)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn new(body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = std::env::temp_dir().join(format!(
            "mssql-tray-test-{}-{}.sh",
            std::process::id(),
            SCRIPT_COUNTER.fetch_add(1, Ordering::Relaxed),
        ));

        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        Self { path }
    }

    /// Path of the script's scratch output file.
    pub(crate) fn out_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".out");
        PathBuf::from(name)
    }

    /// Block until the scratch file exists and return its contents, or panic
    /// after ~3 seconds.
    #[allow(clippy::unwrap_used, clippy::panic)]
    pub(crate) fn wait_for_output(&self) -> String {
        let out = self.out_path();
        for _ in 0..60 {
            if let Ok(contents) = fs::read_to_string(&out) {
                return contents;
            }
            std::thread::sleep(std::time::Duration::from_millis(50));
        }
        panic!("control script never wrote {:?}", out);
    }
}

impl Drop for TempScript {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        let _ = fs::remove_file(self.out_path());
    }
}
