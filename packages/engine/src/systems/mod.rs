pub mod rigid_body;
pub mod rigid_body_system;
pub mod visual;
