pub const API_PREFIX: &str = "/api";

pub const DEFAULT_HORSE_LIST_LIMIT: u32 = 100;

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8081,http://localhost:19006";

// Column widths of the `horses` and `medical_records` tables.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_BREED_LEN: usize = 100;
pub const MAX_SEX_LEN: usize = 20;
pub const MAX_COLOR_LEN: usize = 50;
pub const MAX_PHOTO_URL_LEN: usize = 500;
pub const MAX_VET_NAME_LEN: usize = 100;

pub const HORSE_NOT_FOUND: &str = "Horse not found";
pub const MEDICAL_RECORD_NOT_FOUND: &str = "Medical record not found";
pub const ROUTE_NOT_FOUND: &str = "Not Found";

/// Upper bound on request bodies. `notes` and `description` are unbounded text.
pub const MAX_PAYLOAD_SIZE: usize = 1024 * 1024;
