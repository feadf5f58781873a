//! Общие типы данных checkout-а.
//!
//! Всё здесь — транзитные view-модели: их создаёт и хранит страница (или
//! бэкенд), компоненты только отображают и отдают изменения наверх через
//! callbacks. Никакой персистентности в этом слое нет.

pub mod checkout;
pub mod enums;
