pub mod file_identity_store;
