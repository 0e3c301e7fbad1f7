pub mod root_rest_controller;
