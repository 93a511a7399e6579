pub const QUERY_CREATE_TABLES: &str = include_str!("../../../migrations/0001_create_tables.sql");

macro_rules! horse_columns {
    () => {
        "id,name,breed,age,sex,color,photo_url,health_status,arrival_date,notes,created_at,updated_at"
    };
}

macro_rules! medical_record_columns {
    () => {
        "id,horse_id,record_type,description,vet_name,date,next_followup,notes,created_at"
    };
}

pub const HORSE_COLUMNS: &str = horse_columns!();

pub const MEDICAL_RECORD_COLUMNS: &str = medical_record_columns!();

pub const QUERY_LIST_HORSES: &str = concat!(
    "SELECT ",
    horse_columns!(),
    r#"
FROM horses
WHERE ($1 IS NULL OR health_status = $1)
ORDER BY name ASC, id ASC
LIMIT $2 OFFSET $3;
"#
);

pub const QUERY_GET_HORSE_BY_ID: &str =
    concat!("SELECT ", horse_columns!(), " FROM horses WHERE id = $1;");

pub const QUERY_INSERT_HORSE: &str = concat!(
    r#"
INSERT INTO horses (
    name,breed,age,sex,color,photo_url,
    health_status,arrival_date,notes,
    created_at,updated_at
) VALUES(
    $1,$2,$3,$4,$5,$6,
    $7,$8,$9,
    $10,$11
)
RETURNING "#,
    horse_columns!(),
    ";"
);

pub const QUERY_DELETE_HORSE: &str = r#"DELETE FROM horses WHERE id = $1;"#;

pub const QUERY_HORSE_EXISTS: &str = r#"SELECT EXISTS(SELECT 1 FROM horses WHERE id = $1);"#;

pub const QUERY_GET_HORSE_MEDICAL_RECORDS: &str = concat!(
    "SELECT ",
    medical_record_columns!(),
    r#"
FROM medical_records
WHERE horse_id = $1
ORDER BY date DESC, id DESC;
"#
);

pub const QUERY_GET_MEDICAL_RECORD_BY_ID: &str = concat!(
    "SELECT ",
    medical_record_columns!(),
    " FROM medical_records WHERE id = $1;"
);

// Selecting from `horses` inserts nothing when the owner does not exist.
pub const QUERY_INSERT_MEDICAL_RECORD: &str = concat!(
    r#"
INSERT INTO medical_records (
    horse_id,record_type,description,vet_name,
    date,next_followup,notes,created_at
) SELECT h.id,$2,$3,$4,$5,$6,$7,$8
FROM horses AS h
WHERE h.id = $1
RETURNING "#,
    medical_record_columns!(),
    ";"
);

pub const QUERY_DELETE_MEDICAL_RECORD: &str = r#"DELETE FROM medical_records WHERE id = $1;"#;
