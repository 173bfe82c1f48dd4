pub mod authorizer;
pub mod cors;
