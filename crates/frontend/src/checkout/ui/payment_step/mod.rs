//! Второй шаг: выбор способа оплаты и ввод данных выбранного вида

use crate::shared::theme::use_checkout_theme;
use contracts::checkout::{PaymentData, PaymentMethod, PaymentMethodId};
use contracts::enums::PaymentKind;
use leptos::prelude::*;
use thaw::*;

/// Список способов оплаты и форма данных под выбранным способом.
/// Каждое событие ввода пересобирает весь вариант `PaymentData` и отдаёт
/// его наверх; смену вида оплаты (и сброс данных) выполняет владелец
/// состояния, не форма.
#[component]
pub fn PaymentStep(
    #[prop(into)] methods: Signal<Vec<PaymentMethod>>,
    #[prop(into)] selected_id: Signal<Option<PaymentMethodId>>,
    #[prop(into)] payment_data: Signal<Option<PaymentData>>,
    #[prop(into)] on_select: Callback<PaymentMethodId>,
    #[prop(into)] on_data_change: Callback<PaymentData>,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_continue: Callback<()>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    let selected_method = Signal::derive(move || {
        let id = selected_id.get()?;
        methods.with(|methods| methods.iter().find(|m| m.id == id).cloned())
    });

    let can_continue = Signal::derive(move || {
        matches!(
            (selected_method.get(), payment_data.get()),
            (Some(m), Some(d)) if d.matches_kind(m.kind)
        )
    });

    view! {
        <div style=theme.section>
            <h3 style=theme.section_title>"Payment method"</h3>
            {move || {
                let selected = selected_id.get();
                methods
                    .get()
                    .into_iter()
                    .map(|method| {
                        let id = method.id;
                        let style = if selected == Some(id) {
                            theme.selectable_card_active
                        } else {
                            theme.selectable_card
                        };
                        view! {
                            <div style=style on:click=move |_| on_select.run(id)>
                                <div style=theme.value>{method.display_name.clone()}</div>
                                <div style=theme.muted>{method.kind.display_name()}</div>
                                {(method.is_saved && method.is_verified)
                                    .then(|| view! { <span style=theme.badge>"Verified"</span> })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
            // Форма пересоздаётся при смене способа, но не при вводе:
            // данные здесь читаются вне реактивного графа, иначе каждое
            // нажатие клавиши сбрасывало бы фокус
            {move || {
                selected_method
                    .get()
                    .map(|method| {
                        let seed = payment_data.get_untracked();
                        view! {
                            <PaymentDetailsForm
                                kind=method.kind
                                seed=seed
                                on_change=on_data_change
                            />
                        }
                    })
            }}
            <div style=theme.actions>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_back.run(())
                >
                    "Back"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_continue.get())
                    on_click=move |_| on_continue.run(())
                >
                    "Review order"
                </Button>
            </div>
        </div>
    }
}

/// Форма данных оплаты: по одной на каждый вид
#[component]
fn PaymentDetailsForm(
    kind: PaymentKind,
    seed: Option<PaymentData>,
    #[prop(into)] on_change: Callback<PaymentData>,
) -> impl IntoView {
    match kind {
        PaymentKind::CreditCard | PaymentKind::DebitCard => {
            view! { <CardForm seed=seed on_change=on_change /> }.into_any()
        }
        PaymentKind::BankTransfer => {
            view! { <BankTransferForm seed=seed on_change=on_change /> }.into_any()
        }
        PaymentKind::DigitalWallet => {
            view! { <DigitalWalletForm seed=seed on_change=on_change /> }.into_any()
        }
        PaymentKind::Cash => view! { <CashNote /> }.into_any(),
        PaymentKind::Crypto => {
            view! { <CryptoForm seed=seed on_change=on_change /> }.into_any()
        }
    }
}

#[component]
fn CardForm(
    seed: Option<PaymentData>,
    #[prop(into)] on_change: Callback<PaymentData>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    let (number, expiry, cvv, holder) = match seed {
        Some(PaymentData::Card {
            card_number,
            expiry,
            cvv,
            holder_name,
        }) => (card_number, expiry, cvv, holder_name),
        _ => Default::default(),
    };
    let (card_number, set_card_number) = signal(number);
    let (expiry, set_expiry) = signal(expiry);
    let (cvv, set_cvv) = signal(cvv);
    let (holder_name, set_holder_name) = signal(holder);

    let emit = move || {
        on_change.run(PaymentData::Card {
            card_number: card_number.get(),
            expiry: expiry.get(),
            cvv: cvv.get(),
            holder_name: holder_name.get(),
        });
    };

    view! {
        <div>
            <div style=theme.form_group>
                <label style=theme.label>"Card number"</label>
                <input
                    type="text"
                    style=theme.input
                    placeholder="4111 1111 1111 1111"
                    value=move || card_number.get()
                    on:input=move |ev| {
                        set_card_number.set(event_target_value(&ev));
                        emit();
                    }
                />
            </div>
            <div style=theme.form_group>
                <label style=theme.label>"Expiry"</label>
                <input
                    type="text"
                    style=theme.input
                    placeholder="MM/YY"
                    value=move || expiry.get()
                    on:input=move |ev| {
                        set_expiry.set(event_target_value(&ev));
                        emit();
                    }
                />
            </div>
            <div style=theme.form_group>
                <label style=theme.label>"CVV"</label>
                <input
                    type="password"
                    style=theme.input
                    value=move || cvv.get()
                    on:input=move |ev| {
                        set_cvv.set(event_target_value(&ev));
                        emit();
                    }
                />
            </div>
            <div style=theme.form_group>
                <label style=theme.label>"Holder name"</label>
                <input
                    type="text"
                    style=theme.input
                    value=move || holder_name.get()
                    on:input=move |ev| {
                        set_holder_name.set(event_target_value(&ev));
                        emit();
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn BankTransferForm(
    seed: Option<PaymentData>,
    #[prop(into)] on_change: Callback<PaymentData>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    let initial = match seed {
        Some(PaymentData::BankTransfer { transaction_no }) => transaction_no,
        _ => String::new(),
    };
    let (transaction_no, set_transaction_no) = signal(initial);

    view! {
        <div style=theme.form_group>
            <label style=theme.label>"Transaction number"</label>
            <input
                type="text"
                style=theme.input
                placeholder="TX-000000"
                value=move || transaction_no.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_transaction_no.set(value.clone());
                    on_change.run(PaymentData::BankTransfer {
                        transaction_no: value,
                    });
                }
            />
        </div>
    }
}

#[component]
fn DigitalWalletForm(
    seed: Option<PaymentData>,
    #[prop(into)] on_change: Callback<PaymentData>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    let initial = match seed {
        Some(PaymentData::DigitalWallet { email }) => email,
        _ => String::new(),
    };
    let (email, set_email) = signal(initial);

    view! {
        <div style=theme.form_group>
            <label style=theme.label>"Wallet email"</label>
            <input
                type="email"
                style=theme.input
                placeholder="name@example.com"
                value=move || email.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_email.set(value.clone());
                    on_change.run(PaymentData::DigitalWallet { email: value });
                }
            />
        </div>
    }
}

#[component]
fn CryptoForm(
    seed: Option<PaymentData>,
    #[prop(into)] on_change: Callback<PaymentData>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    let initial = match seed {
        Some(PaymentData::Crypto { wallet_address }) => wallet_address,
        _ => String::new(),
    };
    let (wallet_address, set_wallet_address) = signal(initial);

    view! {
        <div style=theme.form_group>
            <label style=theme.label>"Wallet address"</label>
            <input
                type="text"
                style=theme.input
                placeholder="1A1zP1eP..."
                value=move || wallet_address.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_wallet_address.set(value.clone());
                    on_change.run(PaymentData::Crypto {
                        wallet_address: value,
                    });
                }
            />
        </div>
    }
}

#[component]
fn CashNote() -> impl IntoView {
    let theme = use_checkout_theme();

    view! {
        <div style=theme.muted>"You will pay in cash when the order is delivered."</div>
    }
}
