//! Types shared between the Cinetron server and the browser client.
//!
//! - [`shell`]: static configuration of the root document shell
//! - [`system`]: small DTOs exchanged by the shell collaborators

pub mod shell;
pub mod system;
