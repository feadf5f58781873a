//! Оформление заказа: три шага (адрес, оплата, подтверждение),
//! модал с автопереходом и страница созданного заказа

pub mod api;
pub mod countdown;
pub mod page;
pub mod step;
pub mod ui;
pub mod view_model;
