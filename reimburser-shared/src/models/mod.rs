pub mod errors;
pub mod reimbursement;
pub mod user;

pub use errors::ApiError;
pub use reimbursement::{
    CreateReimbursementRequest, Reimbursement, ReimbursementStatus, ReviewDecision, StatusFilter,
    StatusUpdateRequest,
};
pub use user::{LoginRequest, RegisterRequest, User, UserRole};
