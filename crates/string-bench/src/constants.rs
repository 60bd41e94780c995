//! Fixed inputs shared by every benchmark case

/// Iterations performed by each case in a regular run
pub const DEFAULT_LOOP_COUNT: u64 = 1_000_000;

/// User identifier appended by the conversion cases
pub const UID: &str = "idid";

/// Destination appended by the conversion cases
pub const DESTINATION: &str = "target";

/// Numeric task identifier converted to text by the conversion cases
pub const TASK_ID: u32 = 1999;

/// Leading text of every string built by the conversion cases
pub const BASE: &str = "asdfghjkl";

pub const DATA_1: &str = "Test data1";
pub const DATA_2: &str = "Test data2";
pub const DATA_3: &str = "Test data3";

pub const UID_PREFIX: &str = "|uid=";
pub const DESTINATION_PREFIX: &str = "|destination=";
pub const TASK_ID_PREFIX: &str = "|taskid=";
