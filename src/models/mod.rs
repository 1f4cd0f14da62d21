pub mod admin;
pub mod auth;
pub mod community;
pub mod gym;
pub mod user;
pub mod workout;

pub use admin::AdminUser;
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use community::{Buddy, Challenge, Group, GroupMember};
pub use gym::Gym;
pub use user::{Identity, IdentityPatch, Role};
pub use workout::Workout;
