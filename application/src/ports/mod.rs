//! Port definitions (interfaces to the outside world)

pub mod conversation_logger;
pub mod generation_gateway;
