//! Domain constants shared by the result algebra and the position tracker.

/// Name of the discriminant field in the serialized form of an outcome.
pub const TAG_FIELD: &str = "tag";

/// Tag carried by a successful outcome.
pub const OK_TAG: &str = "ok";

/// Tag carried by a failed outcome.
pub const FAILURE_TAG: &str = "failure";

/// Payload field of a successful outcome.
pub const VALUE_FIELD: &str = "value";

/// Payload field of a failed outcome.
pub const REASON_FIELD: &str = "reason";

/// Line number of the first line in a source (1-based).
pub const FIRST_LINE: usize = 1;

/// Column of the first character on a line (0-based).
pub const FIRST_COLUMN: usize = 0;
