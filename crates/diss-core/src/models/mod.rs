pub mod diagnosis;
pub mod feedback;
pub mod session;
pub mod transcript;
