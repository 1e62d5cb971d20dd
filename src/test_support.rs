use crate::inputs::RawInputs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Builder for `RawInputs` so tests never touch the real environment.
#[derive(Default)]
pub(crate) struct InputsBuilder {
    inputs: RawInputs,
}

impl InputsBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn npm_publish(mut self, value: &str) -> Self {
        self.inputs.npm_publish = Some(value.to_string());
        self
    }

    pub(crate) fn push(mut self, value: &str) -> Self {
        self.inputs.push = Some(value.to_string());
        self
    }

    pub(crate) fn changelog_file(mut self, value: &str) -> Self {
        self.inputs.changelog_file = Some(value.to_string());
        self
    }

    pub(crate) fn ci(mut self, value: &str) -> Self {
        self.inputs.ci = Some(value.to_string());
        self
    }

    pub(crate) fn args(mut self, args: &[&str]) -> Self {
        self.inputs.cli_arguments = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub(crate) fn build(self) -> RawInputs {
        self.inputs
    }
}

/// Scoped process environment mutation; pair with `#[serial]`.
pub(crate) struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn new(vars: &[(&str, Option<&str>)]) -> Self {
        let mut saved = Vec::with_capacity(vars.len());
        for (key, value) in vars {
            saved.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: callers serialize environment access with #[serial].
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            // SAFETY: see EnvGuard::new.
            unsafe {
                match value {
                    Some(v) => std::env::set_var(&key, v),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }
}
