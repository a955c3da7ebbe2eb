/// Candidates used by `deploy` when none are given.
pub const DEFAULT_CANDIDATE_NAMES: [&str; 3] = ["Alice", "Bob", "Charlie"];

/// RPC endpoint of a local test validator.
pub const LOCALNET_RPC_URL: &str = "http://localhost:8899";
