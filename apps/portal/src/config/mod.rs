pub mod portal;

pub use portal::PortalConfig;
