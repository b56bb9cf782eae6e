pub mod alias_record;
pub mod alias_ref;
pub mod alias_source;
