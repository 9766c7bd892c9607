//! Payments and the polymorphic payable reference.

pub mod model;
pub mod payable;
pub mod status;

pub use model::{CreatePayment, Payment, PaymentMethod, PaymentType};
pub use payable::{PayableKind, PayableRef};
pub use status::PaymentStatus;
