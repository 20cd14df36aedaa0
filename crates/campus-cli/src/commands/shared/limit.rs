/// Hard ceiling for interactive list commands. Exports bypass it.
pub const MAX_LIST_LIMIT: u32 = 1_000;

/// Row limit for an admin list: `--limit` on the subcommand, then the global
/// flag, then `general.default_limit`. Zero counts as unset.
#[must_use]
pub fn list_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> u32 {
    [local, global]
        .into_iter()
        .flatten()
        .find(|limit| *limit > 0)
        .unwrap_or(configured)
        .clamp(1, MAX_LIST_LIMIT)
}
