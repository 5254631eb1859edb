//! Users Domain
//!
//! Accounts and authentication: registration, login, and the authenticated
//! "me" lookup, backed by MongoDB with an argon2 credential store.
//!
//! Layering mirrors the products domain: handlers → service → repository
//! trait (+ Mongo implementation) → models. Passwords are hashed on a
//! blocking thread so argon2 never stalls the request executor, and raw
//! passwords are never persisted or serialized back out.

pub mod auth_handlers;
pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use auth_handlers::ApiDoc;
pub use error::{UserError, UserResult};
pub use models::{AuthResponse, LoginRequest, RegisterRequest, Role, User, UserResponse};
pub use mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
