pub mod base_response;
