pub mod analyze;
pub mod references;
