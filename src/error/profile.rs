use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[cfg(not(feature = "alloc-profiler"))]
    #[error("Heap profiling requires the alloc-profiler feature.")]
    FeatureDisabled,
    #[cfg(feature = "alloc-profiler")]
    #[error("{context}: {source}")]
    External {
        context: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[cfg(feature = "alloc-profiler")]
    #[error("Invalid heap profile path {path}")]
    InvalidPath { path: String },
    #[cfg(feature = "alloc-profiler")]
    #[error("jemalloc profiling not compiled (config.prof=false)")]
    ProfilerNotCompiled,
    #[cfg(feature = "alloc-profiler")]
    #[error("jemalloc profiling disabled (opt.prof=false). Set _RJEM_MALLOC_CONF=prof:true")]
    ProfilerDisabled,
}
