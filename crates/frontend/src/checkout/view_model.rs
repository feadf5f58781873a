//! ViewModel страницы оформления заказа (MVVM Standard)

use super::api;
use super::step::{self, CheckoutStep};
use contracts::checkout::{
    cart_subtotal, Address, AddressId, CartItem, ClientProfile, Order, PaymentData,
    PaymentMethod, PaymentMethodId, SubmitOrderRequest,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone)]
pub struct CheckoutVm {
    pub client: RwSignal<ClientProfile>,
    pub items: RwSignal<Vec<CartItem>>,
    pub addresses: RwSignal<Vec<Address>>,
    pub payment_methods: RwSignal<Vec<PaymentMethod>>,
    pub shipping_cost: RwSignal<f64>,

    pub selected_address_id: RwSignal<Option<AddressId>>,
    pub selected_method_id: RwSignal<Option<PaymentMethodId>>,
    pub payment_data: RwSignal<Option<PaymentData>>,
    pub notes: RwSignal<String>,

    pub step: RwSignal<CheckoutStep>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub confirmed_order: RwSignal<Option<Order>>,
}

impl CheckoutVm {
    pub fn new() -> Self {
        Self {
            client: RwSignal::new(ClientProfile::default()),
            items: RwSignal::new(Vec::new()),
            addresses: RwSignal::new(Vec::new()),
            payment_methods: RwSignal::new(Vec::new()),
            shipping_cost: RwSignal::new(0.0),

            selected_address_id: RwSignal::new(None),
            selected_method_id: RwSignal::new(None),
            payment_data: RwSignal::new(None),
            notes: RwSignal::new(String::new()),

            step: RwSignal::new(CheckoutStep::default()),
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            confirmed_order: RwSignal::new(None),
        }
    }

    pub fn subtotal(&self) -> Signal<f64> {
        let items = self.items;
        Signal::derive(move || items.with(|items| cart_subtotal(items)))
    }

    /// Итог считается здесь один раз; компоненты сводки только отображают
    pub fn total(&self) -> Signal<f64> {
        let items = self.items;
        let shipping = self.shipping_cost;
        Signal::derive(move || items.with(|items| cart_subtotal(items)) + shipping.get())
    }

    pub fn selected_method(&self) -> Signal<Option<PaymentMethod>> {
        let methods = self.payment_methods;
        let selected = self.selected_method_id;
        Signal::derive(move || {
            let id = selected.get()?;
            methods.with(|methods| methods.iter().find(|m| m.id == id).cloned())
        })
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let address = self.selected_address_id;
        let methods = self.payment_methods;
        let method_id = self.selected_method_id;
        let data = self.payment_data;
        Signal::derive(move || {
            let method = method_id
                .get()
                .and_then(|id| methods.with(|methods| methods.iter().find(|m| m.id == id).cloned()));
            submit_ready(address.get().as_ref(), method.as_ref(), data.get().as_ref())
        })
    }

    pub fn set_step(&self, step: CheckoutStep) {
        self.step.set(step);
    }

    pub fn select_address(&self, id: AddressId) {
        self.selected_address_id.set(Some(id));
    }

    /// Выбор способа оплаты. Смена вида оплаты сбрасывает введённые данные
    /// на пустую заготовку нового вида.
    pub fn select_method(&self, id: PaymentMethodId) {
        let kind = self
            .payment_methods
            .with_untracked(|methods| methods.iter().find(|m| m.id == id).map(|m| m.kind));
        let Some(kind) = kind else {
            log::warn!("select_method: unknown payment method id {}", id.as_string());
            return;
        };

        self.selected_method_id.set(Some(id));

        let keep_data = self
            .payment_data
            .with_untracked(|data| data.as_ref().is_some_and(|d| d.matches_kind(kind)));
        if !keep_data {
            self.payment_data.set(Some(PaymentData::empty_for(kind)));
        }
    }

    /// Восстановить шаг из query-строки (после перезагрузки страницы)
    pub fn restore_step_from_url(&self) {
        if let Some(step) = step::step_from_url() {
            self.step.set(step);
        }
    }

    pub fn load(&self) {
        let vm = self.clone();
        vm.loading.set(true);
        vm.error.set(None);

        spawn_local(async move {
            match api::fetch_checkout().await {
                Ok(snapshot) => {
                    vm.client.set(snapshot.client);
                    vm.items.set(snapshot.items);
                    vm.shipping_cost.set(snapshot.shipping_cost);

                    // Primary-адрес выбран по умолчанию
                    let primary = snapshot
                        .addresses
                        .iter()
                        .find(|a| a.is_primary)
                        .map(|a| a.id);
                    vm.addresses.set(snapshot.addresses);
                    if vm.selected_address_id.get_untracked().is_none() {
                        vm.selected_address_id.set(primary);
                    }

                    vm.payment_methods.set(snapshot.payment_methods);
                    vm.loading.set(false);
                }
                Err(e) => {
                    vm.error.set(Some(e));
                    vm.loading.set(false);
                }
            }
        });
    }

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(request) = self.build_submit_request() else {
            return;
        };

        let vm = self.clone();
        vm.submitting.set(true);
        vm.error.set(None);

        spawn_local(async move {
            match api::submit_order(request).await {
                Ok(order) => {
                    leptos::logging::log!(
                        "Order {} confirmed, opening confirmation modal",
                        order.order_number
                    );
                    vm.confirmed_order.set(Some(order));
                    vm.submitting.set(false);
                }
                Err(e) => {
                    vm.error.set(Some(e));
                    vm.submitting.set(false);
                }
            }
        });
    }

    fn build_submit_request(&self) -> Option<SubmitOrderRequest> {
        let address_id = self.selected_address_id.get_untracked()?;
        let method_id = self.selected_method_id.get_untracked()?;
        let method = self
            .payment_methods
            .with_untracked(|methods| methods.iter().find(|m| m.id == method_id).cloned())?;
        let payment_data = self.payment_data.get_untracked()?;
        if !payment_data.matches_kind(method.kind) {
            return None;
        }

        Some(SubmitOrderRequest {
            address_id,
            payment_method_id: method_id,
            payment_data,
            notes: self.notes.get_untracked(),
        })
    }
}

/// Готов ли заказ к оформлению: адрес выбран, способ оплаты выбран и
/// данные оплаты согласуются с его видом
pub fn submit_ready(
    address: Option<&AddressId>,
    method: Option<&PaymentMethod>,
    data: Option<&PaymentData>,
) -> bool {
    address.is_some()
        && matches!((method, data), (Some(m), Some(d)) if d.matches_kind(m.kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::PaymentKind;

    fn method(kind: PaymentKind) -> PaymentMethod {
        PaymentMethod {
            id: PaymentMethodId::new_v4(),
            display_name: kind.display_name().to_string(),
            kind,
            is_saved: false,
            is_verified: false,
        }
    }

    #[test]
    fn test_submit_ready() {
        let address = AddressId::new_v4();
        let cash = method(PaymentKind::Cash);
        let data = PaymentData::Cash;

        assert!(submit_ready(Some(&address), Some(&cash), Some(&data)));
        assert!(!submit_ready(None, Some(&cash), Some(&data)));
        assert!(!submit_ready(Some(&address), None, Some(&data)));
        assert!(!submit_ready(Some(&address), Some(&cash), None));
    }

    #[test]
    fn test_submit_ready_rejects_mismatched_data() {
        let address = AddressId::new_v4();
        let crypto = method(PaymentKind::Crypto);
        let card_data = PaymentData::empty_for(PaymentKind::CreditCard);

        assert!(!submit_ready(Some(&address), Some(&crypto), Some(&card_data)));
        assert!(submit_ready(
            Some(&address),
            Some(&crypto),
            Some(&PaymentData::empty_for(PaymentKind::Crypto))
        ));
    }
}
