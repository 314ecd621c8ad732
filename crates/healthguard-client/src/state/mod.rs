pub mod consultations;
pub mod session;
pub mod storage;

pub use consultations::{
    ConsultationLog, ConsultationRequest, FileConsultationLog, MemoryConsultationLog, Urgency,
};
pub use session::*;
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError, TOKEN_KEY};
