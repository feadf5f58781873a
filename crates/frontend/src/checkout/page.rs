//! Страница оформления заказа (MVVM Standard)

use super::step::{self, CheckoutStep};
use super::ui::address_step::AddressStep;
use super::ui::confirmation::OrderConfirmationModal;
use super::ui::payment_step::PaymentStep;
use super::ui::review::Step3Review;
use super::view_model::CheckoutVm;
use crate::shared::theme::use_checkout_theme;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let theme = use_checkout_theme();
    let vm = CheckoutVm::new();

    vm.restore_step_from_url();
    vm.load();

    // Шаг отражается в query-строке, чтобы перезагрузка возвращала на место
    Effect::new({
        let vm = vm.clone();
        move || step::sync_step_to_url(vm.step.get())
    });

    let vm_header = vm.clone();
    let vm_error = vm.clone();
    let vm_steps = vm.clone();
    let vm_modal = vm.clone();

    view! {
        <div style=theme.page>
            <h2 style=theme.page_title>"Checkout"</h2>
            <div style=theme.muted>
                {move || {
                    let step = vm_header.step.get();
                    format!("Step {} of 3: {}", step.number(), step.title())
                }}
            </div>

            {move || {
                vm_error
                    .error
                    .get()
                    .map(|err| {
                        view! {
                            <div style=theme.error>
                                <strong>"Error: "</strong>
                                {err}
                            </div>
                        }
                    })
            }}

            {move || {
                let vm = vm_steps.clone();
                if vm.loading.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }
                    .into_any();
                }
                match vm.step.get() {
                    CheckoutStep::Address => {
                        let vm_select = vm.clone();
                        let vm_next = vm.clone();
                        view! {
                            <AddressStep
                                addresses=vm.addresses
                                selected_id=vm.selected_address_id
                                on_select=Callback::new(move |id| vm_select.select_address(id))
                                on_continue=Callback::new(move |_| {
                                    vm_next.set_step(CheckoutStep::Payment)
                                })
                            />
                        }
                        .into_any()
                    }
                    CheckoutStep::Payment => {
                        let vm_select = vm.clone();
                        let vm_data = vm.clone();
                        let vm_back = vm.clone();
                        let vm_next = vm.clone();
                        view! {
                            <PaymentStep
                                methods=vm.payment_methods
                                selected_id=vm.selected_method_id
                                payment_data=vm.payment_data
                                on_select=Callback::new(move |id| vm_select.select_method(id))
                                on_data_change=Callback::new(move |data| {
                                    vm_data.payment_data.set(Some(data))
                                })
                                on_back=Callback::new(move |_| {
                                    vm_back.set_step(CheckoutStep::Address)
                                })
                                on_continue=Callback::new(move |_| {
                                    vm_next.set_step(CheckoutStep::Review)
                                })
                            />
                        }
                        .into_any()
                    }
                    CheckoutStep::Review => {
                        let vm_notes = vm.clone();
                        let vm_back = vm.clone();
                        let vm_submit = vm.clone();
                        view! {
                            <Step3Review
                                client=vm.client.get_untracked()
                                items=vm.items.get_untracked()
                                subtotal=vm.subtotal().get_untracked()
                                shipping=vm.shipping_cost.get_untracked()
                                total=vm.total().get_untracked()
                                addresses=vm.addresses.get_untracked()
                                selected_address_id=vm.selected_address_id.get_untracked()
                                method=vm.selected_method().get_untracked()
                                payment_data=vm.payment_data.get_untracked()
                                notes=vm.notes
                                on_notes_change=Callback::new(move |text| vm_notes.notes.set(text))
                                on_back=Callback::new(move |_| {
                                    vm_back.set_step(CheckoutStep::Payment)
                                })
                                on_submit=Callback::new(move |_| vm_submit.submit())
                                loading=vm.submitting
                            />
                        }
                        .into_any()
                    }
                }
            }}

            {move || {
                let vm = vm_modal.clone();
                vm.confirmed_order
                    .get()
                    .map(|order| {
                        let confirmed = vm.confirmed_order;
                        view! {
                            <OrderConfirmationModal
                                order=order
                                on_close=Callback::new(move |_| confirmed.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
