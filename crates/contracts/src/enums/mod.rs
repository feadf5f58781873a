pub mod payment_kind;

pub use payment_kind::PaymentKind;
