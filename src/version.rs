//! Build metadata report for the `version` command

/// Build metadata embedded by `build.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub branch: &'static str,
    pub revision: &'static str,
    pub user: &'static str,
    pub date: &'static str,
    pub rustc: &'static str,
}

impl BuildInfo {
    /// Metadata of the running binary.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            branch: option_env!("STORAGETOOL_BUILD_BRANCH").unwrap_or("unknown"),
            revision: option_env!("STORAGETOOL_BUILD_REVISION").unwrap_or("unknown"),
            user: option_env!("STORAGETOOL_BUILD_USER").unwrap_or("unknown"),
            date: option_env!("STORAGETOOL_BUILD_DATE").unwrap_or("unknown"),
            rustc: option_env!("STORAGETOOL_BUILD_RUSTC").unwrap_or("unknown"),
        }
    }

    /// Render the multi-line report headed by `tool_name`.
    pub fn render(&self, tool_name: &str) -> String {
        format!(
            "{tool_name}, version {} (branch: {}, revision: {})\n  \
             build user:       {}\n  \
             build date:       {}\n  \
             rustc version:    {}",
            self.version, self.branch, self.revision, self.user, self.date, self.rustc
        )
    }
}

/// Format the build report of the running binary for `tool_name`.
pub fn format_version(tool_name: &str) -> String {
    BuildInfo::current().render(tool_name)
}
