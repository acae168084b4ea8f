// Error types for rangebook

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum RangebookError {
    // Data directory management
    #[snafu(display("Could not find application data directory to store practice data"))]
    NoDataDir,

    // Errors for the practice event log
    #[snafu(display("Error reading or writing the practice log"))]
    EventLogIOError { source: io::Error },

    // Profile management errors
    #[snafu(display("Error reading or writing the profile file"))]
    ProfileIOError { source: io::Error },
    #[snafu(display("Error serializing profile file"))]
    ProfileSerializeError { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },
}
