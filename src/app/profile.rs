use std::path::Path;

use tracing::warn;

use crate::error::ProfileError;

#[cfg(feature = "alloc-profiler")]
use tracing::info;

#[cfg(feature = "alloc-profiler")]
#[derive(Debug)]
struct JemallocCtlError(jemalloc_ctl::Error);

#[cfg(feature = "alloc-profiler")]
impl std::fmt::Display for JemallocCtlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "alloc-profiler")]
impl std::error::Error for JemallocCtlError {}

#[cfg(feature = "alloc-profiler")]
fn jemalloc_error(context: &'static str) -> impl FnOnce(jemalloc_ctl::Error) -> ProfileError {
    move |err| ProfileError::External {
        context,
        source: Box::new(JemallocCtlError(err)),
    }
}

/// `-p` is accepted for compatibility; sampling is left to external tools.
pub fn warn_cpu_profile_unavailable() {
    warn!("CPU profiling is not built in; run the binary under perf or a similar sampler instead.");
}

/// Writes a jemalloc heap profile to `path`.
///
/// # Errors
///
/// Returns an error when the alloc-profiler feature is off, when jemalloc was
/// started without profiling, or when the dump fails.
#[cfg(not(feature = "alloc-profiler"))]
pub fn dump_heap_profile(path: &Path) -> Result<(), ProfileError> {
    warn!(
        "Heap profile {} requested but the alloc-profiler feature is disabled.",
        path.display()
    );
    Err(ProfileError::FeatureDisabled)
}

/// Writes a jemalloc heap profile to `path`.
///
/// # Errors
///
/// Returns an error when the alloc-profiler feature is off, when jemalloc was
/// started without profiling, or when the dump fails.
#[cfg(feature = "alloc-profiler")]
pub fn dump_heap_profile(path: &Path) -> Result<(), ProfileError> {
    use std::ffi::CString;

    let path_cstr = CString::new(path.to_string_lossy().as_bytes()).map_err(|_nul| {
        ProfileError::InvalidPath {
            path: path.display().to_string(),
        }
    })?;
    ensure_prof_enabled()?;
    jemalloc_ctl::epoch::advance().map_err(jemalloc_error("epoch advance failed"))?;
    // Safety: prof.dump expects a C string pointing to the output file path.
    unsafe {
        jemalloc_ctl::raw::write(b"prof.dump\0", path_cstr.as_ptr())
            .map_err(jemalloc_error("prof dump failed"))?;
    }
    info!("Heap profile written to {}", path.display());
    Ok(())
}

#[cfg(feature = "alloc-profiler")]
fn ensure_prof_enabled() -> Result<(), ProfileError> {
    // Safety: config.prof is a valid NUL-terminated key for jemalloc boolean config.
    let config_prof = unsafe { jemalloc_ctl::raw::read::<bool>(b"config.prof\0") }
        .map_err(jemalloc_error("prof config read failed"))?;
    if !config_prof {
        return Err(ProfileError::ProfilerNotCompiled);
    }
    // Safety: opt.prof is a valid NUL-terminated key for jemalloc boolean config.
    let opt_prof = unsafe { jemalloc_ctl::raw::read::<bool>(b"opt.prof\0") }
        .map_err(jemalloc_error("opt.prof read failed"))?;
    if !opt_prof {
        return Err(ProfileError::ProfilerDisabled);
    }
    Ok(())
}
