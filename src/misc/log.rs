/*!
Items related to [logging](log).

Calls to the log macros are made while parsing, inserting into sets, applying rules, and solving
derivations. No log implementation is provided; install one (`env_logger` or similar) to see them.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [sentence sets](crate::set)
    pub const SET: &str = "set";

    /// Logs related to [inference rules](crate::rules)
    pub const RULES: &str = "rules";

    /// Logs related to [derivations](crate::derivation)
    pub const DERIVATION: &str = "derivation";
}
