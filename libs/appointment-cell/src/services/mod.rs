pub mod conflict;

pub use conflict::ConflictDetectionService;
