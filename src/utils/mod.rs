pub mod clock;
pub mod fs;
