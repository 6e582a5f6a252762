pub(crate) mod preprocess;
pub(crate) mod process;
pub(crate) mod runners;

/// Environment variables handed to a child process, in insertion order.
pub type EnvPairs = Vec<(String, String)>;
