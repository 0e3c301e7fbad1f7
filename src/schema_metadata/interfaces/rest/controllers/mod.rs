pub mod schema_metadata_rest_controller;
