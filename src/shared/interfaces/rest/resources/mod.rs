pub mod service_discovery_resource;
