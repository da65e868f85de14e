pub mod logo;

pub use logo::{create_logo_router, LogoApiState};
