//! View-модели страницы оформления заказа

pub mod address;
pub mod cart;
pub mod client;
pub mod dto;
pub mod order;
pub mod payment;

// Re-exports
pub use address::{find_selected, Address, AddressId};
pub use cart::{cart_subtotal, CartItem};
pub use client::{ClientProfile, ClientUser};
pub use dto::{CheckoutSnapshotDto, SubmitOrderRequest};
pub use order::{Order, OrderId};
pub use payment::{PaymentData, PaymentMethod, PaymentMethodId};
