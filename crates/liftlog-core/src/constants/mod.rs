// ABOUTME: Constants module with domain-separated organization
// ABOUTME: CSV schema, strength formulas, chart labels, and service defaults

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat namespace.

/// Column names expected in a workout CSV export
pub mod columns {
    /// Calendar date (or timestamp) of the set
    pub const DATE: &str = "Date";
    /// Exercise name as logged
    pub const EXERCISE_NAME: &str = "Exercise Name";
    /// Load lifted
    pub const WEIGHT: &str = "Weight";
    /// Repetitions performed
    pub const REPS: &str = "Reps";

    /// Every column the loader requires, in reporting order
    pub const REQUIRED: [&str; 4] = [DATE, EXERCISE_NAME, WEIGHT, REPS];
}

/// Strength estimation constants
pub mod strength {
    /// Divisor in the Epley formula `weight * (1 + reps / 30)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;
    /// Decimal places kept on the one-rep-max record
    pub const ONE_REP_MAX_DECIMALS: i32 = 1;
}

/// Date formats accepted for the `Date` column (time part is discarded)
pub mod date_formats {
    /// Formats carrying a time of day
    ///
    /// `%.f` also matches a missing fraction, so whole seconds parse too.
    pub const DATETIME: &[&str] = &[
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y/%m/%d %H:%M:%S%.f",
        "%m/%d/%Y %H:%M:%S%.f",
        "%m/%d/%Y %H:%M",
        "%d %b %Y, %H:%M",
        "%d %b %Y %H:%M",
    ];
    /// Date-only formats
    pub const DATE: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y"];
}

/// Chart labels per analysis mode
pub mod chart {
    /// Label of the running-best line
    pub const RUNNING_BEST_LABEL: &str = "All-time best so far";
    /// X axis label
    pub const X_AXIS_LABEL: &str = "Date";

    /// Y axis label in weight mode
    pub const WEIGHT_Y_LABEL: &str = "Weight (kg)";
    /// Session line label in weight mode
    pub const WEIGHT_LINE_LABEL: &str = "Session best weight";

    /// Y axis label in 1RM mode
    pub const ONE_REP_MAX_Y_LABEL: &str = "1RM (kg, est.)";
    /// Session line label in 1RM mode
    pub const ONE_REP_MAX_LINE_LABEL: &str = "Session 1RM (est.)";
    /// Title suffix in 1RM mode
    pub const ONE_REP_MAX_TITLE_SUFFIX: &str = " (1RM est.)";

    /// Y axis label in volume mode
    pub const VOLUME_Y_LABEL: &str = "Volume (kg × reps)";
    /// Session line label in volume mode
    pub const VOLUME_LINE_LABEL: &str = "Session best volume";
    /// Title suffix in volume mode
    pub const VOLUME_TITLE_SUFFIX: &str = " (Volume)";

    /// Default rendered chart width in pixels
    pub const DEFAULT_WIDTH: u32 = 1000;
    /// Default rendered chart height in pixels
    pub const DEFAULT_HEIGHT: u32 = 600;
}

/// Service defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default upload limit (10 MiB)
    pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
    /// Default CSV delimiter
    pub const CSV_DELIMITER: u8 = b',';
}

/// Service identification
pub mod service_names {
    /// Server service name used in logs
    pub const LIFTLOG_SERVER: &str = "liftlog-server";
}
