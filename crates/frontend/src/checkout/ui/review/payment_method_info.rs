use crate::shared::format::{abbreviate_wallet_address, mask_card_number};
use crate::shared::theme::use_checkout_theme;
use contracts::checkout::{PaymentData, PaymentMethod};
use contracts::enums::PaymentKind;
use leptos::prelude::*;

/// Сводка выбранного способа оплаты (только чтение).
///
/// Диспетчеризация — исчерпывающий match по виду оплаты: новый вид без
/// ветки отображения не скомпилируется. Рассинхронизация данных с видом
/// рисует пустое тело и пишет предупреждение в лог.
#[component]
pub fn PaymentMethodInfo(
    method: Option<PaymentMethod>,
    data: Option<PaymentData>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    let Some(method) = method else {
        return view! {
            <div style=theme.section>
                <h3 style=theme.section_title>"Payment method"</h3>
                <div style=theme.muted>"No payment method selected"</div>
            </div>
        }
        .into_any();
    };

    let body = match method.kind {
        PaymentKind::CreditCard | PaymentKind::DebitCard => match &data {
            Some(PaymentData::Card {
                card_number,
                holder_name,
                ..
            }) => view! {
                <div>
                    <div style=theme.row>
                        <span style=theme.label>"Card"</span>
                        <span style=theme.value>{mask_card_number(card_number)}</span>
                    </div>
                    <div style=theme.row>
                        <span style=theme.label>"Holder"</span>
                        <span style=theme.value>{holder_name.clone()}</span>
                    </div>
                </div>
            }
            .into_any(),
            other => mismatch(method.kind, other),
        },
        PaymentKind::BankTransfer => match &data {
            Some(PaymentData::BankTransfer { transaction_no }) => view! {
                <div style=theme.row>
                    <span style=theme.label>"Transfer reference"</span>
                    <span style=theme.value>{transaction_no.clone()}</span>
                </div>
            }
            .into_any(),
            other => mismatch(method.kind, other),
        },
        PaymentKind::DigitalWallet => match &data {
            Some(PaymentData::DigitalWallet { email }) => view! {
                <div style=theme.row>
                    <span style=theme.label>"Wallet email"</span>
                    <span style=theme.value>{email.clone()}</span>
                </div>
            }
            .into_any(),
            other => mismatch(method.kind, other),
        },
        // Наличные данных не требуют
        PaymentKind::Cash => view! {
            <div style=theme.muted>"Pay on delivery"</div>
        }
        .into_any(),
        PaymentKind::Crypto => match &data {
            Some(PaymentData::Crypto { wallet_address }) => view! {
                <div style=theme.row>
                    <span style=theme.label>"Wallet address"</span>
                    <span style=theme.value>{abbreviate_wallet_address(wallet_address)}</span>
                </div>
            }
            .into_any(),
            other => mismatch(method.kind, other),
        },
    };

    view! {
        <div style=theme.section>
            <h3 style=theme.section_title>"Payment method"</h3>
            <div style=theme.row>
                <span style=theme.label>"Method"</span>
                <span style=theme.value>{method.display_name.clone()}</span>
            </div>
            {body}
        </div>
    }
    .into_any()
}

/// Пустое тело при данных не того вида. Сами данные в лог не пишутся:
/// в карточном варианте они содержат номер карты и CVV.
fn mismatch(kind: PaymentKind, data: &Option<PaymentData>) -> AnyView {
    log::warn!(
        "payment data variant {} does not match method kind {:?}",
        data.as_ref().map_or("<none>", variant_name),
        kind
    );
    view! { <></> }.into_any()
}

fn variant_name(data: &PaymentData) -> &'static str {
    match data {
        PaymentData::Card { .. } => "card",
        PaymentData::BankTransfer { .. } => "bank_transfer",
        PaymentData::DigitalWallet { .. } => "digital_wallet",
        PaymentData::Cash => "cash",
        PaymentData::Crypto { .. } => "crypto",
    }
}
