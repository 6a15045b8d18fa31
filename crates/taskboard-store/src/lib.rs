pub mod selection;
pub mod session;
pub mod store;
pub mod workspace;

pub use selection::BoardSelection;
pub use session::{AuthSession, Authenticator, DemoAuthenticator};
pub use store::ProjectStore;
pub use workspace::Workspace;
