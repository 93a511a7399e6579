pub mod horse;
pub mod medical_record;
