use super::address::{Address, AddressId};
use super::cart::CartItem;
use super::client::ClientProfile;
use super::payment::{PaymentData, PaymentMethod, PaymentMethodId};
use serde::{Deserialize, Serialize};

/// Снапшот данных для страницы оформления: всё, что нужно для трёх шагов,
/// одним запросом
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSnapshotDto {
    pub client: ClientProfile,
    pub items: Vec<CartItem>,
    pub addresses: Vec<Address>,
    pub payment_methods: Vec<PaymentMethod>,

    /// Стоимость доставки; ноль отображается как "Free"
    #[serde(default)]
    pub shipping_cost: f64,
}

/// Запрос на оформление заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    pub address_id: AddressId,
    pub payment_method_id: PaymentMethodId,
    pub payment_data: PaymentData,

    #[serde(default)]
    pub notes: String,
}
