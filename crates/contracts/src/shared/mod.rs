pub mod service_response;

pub use service_response::ServiceResponse;
