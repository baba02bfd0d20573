mod descriptor;
mod instance;
mod property;
mod report;
mod request;

pub use descriptor::AgentDescriptor;
pub use instance::AccessAgentInstance;
pub use property::{AccessAgentProperty, Mode, PropertyType, Security, Status, Version, ENTITY};
pub use report::{Report, ReportRow};
pub use request::{RegistrationRequest, RegistrationResponse};

#[cfg(test)]
mod tests;
